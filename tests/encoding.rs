use std::borrow::Cow;
use whatwg_url::pct_enc::{
    decode, encode, encode_to,
    encoder::{Fragment, Path, Query, SpecialQuery, Userinfo},
    table::*,
    DecodedChunk, EStr, EncodedChunk, Table,
};

const RAW: &str = "te\u{1f603}a \u{6d4b}1`~!@\u{8bd5}#$%st^&+=";

#[test]
fn encode_with_sets() {
    assert_eq!(
        encode(RAW, FRAGMENT),
        "te%F0%9F%98%83a%20%E6%B5%8B1%60~!@%E8%AF%95#$%st^&+="
    );
    assert_eq!(
        encode(RAW, QUERY),
        "te%F0%9F%98%83a%20%E6%B5%8B1`~!@%E8%AF%95%23$%st^&+="
    );
    assert_eq!(
        encode(RAW, PATH),
        "te%F0%9F%98%83a%20%E6%B5%8B1%60~!@%E8%AF%95%23$%st^&+="
    );
    assert_eq!(
        encode(RAW, USERINFO),
        "te%F0%9F%98%83a%20%E6%B5%8B1%60~!%40%E8%AF%95%23$%st%5E&+%3D"
    );
    assert_eq!(encode("it's", SPECIAL_QUERY), "it%27s");
    assert_eq!(encode("it's", QUERY), "it's");
    assert_eq!(encode("\u{0}\u{1f}\u{7f}", C0_CONTROL), "%00%1F%7F");

    let mut buf = String::from("x=");
    encode_to("a b", QUERY, &mut buf);
    assert_eq!(buf, "x=a%20b");
}

#[test]
fn encode_borrows_when_unchanged() {
    assert!(matches!(encode("abc", PATH), Cow::Borrowed("abc")));
    assert!(matches!(encode("", PATH), Cow::Borrowed("")));
    assert!(matches!(encode("a b", PATH), Cow::Owned(_)));
}

#[test]
fn encode_chunks() {
    let chunks: Vec<_> = PATH.encode("a\u{e9}b").collect();
    assert_eq!(
        chunks,
        [
            EncodedChunk::Unencoded("a"),
            EncodedChunk::PctEncoded("%C3"),
            EncodedChunk::PctEncoded("%A9"),
            EncodedChunk::Unencoded("b"),
        ]
    );
}

#[test]
fn decode_bytes() {
    assert_eq!(&*decode(b"%41%42c"), b"ABc");
    assert_eq!(&*decode(b"%e6%B5%8b"), "\u{6d4b}".as_bytes());
    assert_eq!(&*decode(b"100%"), b"100%");
    assert_eq!(&*decode(b"%g0%0"), b"%g0%0");
    assert_eq!(&*decode(b"%FF"), [0xff]);
    assert!(matches!(decode(b"plain"), Cow::Borrowed(b"plain")));
}

#[test]
fn estr_validation() {
    assert!(EStr::<Path>::new("a%20b/%zz").is_some());
    assert!(EStr::<Path>::new("a b").is_none());
    assert!(EStr::<Path>::new("\u{e9}").is_none());
    assert!(EStr::<Query>::new("it's").is_some());
    assert!(EStr::<SpecialQuery>::new("it's").is_none());
    assert!(EStr::<Fragment>::new("a#b").is_some());
    assert!(EStr::<Userinfo>::new("a:b").is_none());
    assert!(EStr::<Path>::EMPTY.is_empty());
}

#[test]
#[should_panic]
fn estr_new_or_panic() {
    let _ = EStr::<Userinfo>::new_or_panic("user@host");
}

#[test]
fn estr_decode() {
    let s = EStr::<Query>::new_or_panic("k%3Dv=%E2%9C%93");
    let (k, v) = s.split_once('=').unwrap();
    assert_eq!(k.decode().to_string().unwrap(), "k=v");
    assert_eq!(v.decode().to_string().unwrap(), "\u{2713}");

    let chunks: Vec<_> = EStr::<Path>::new_or_panic("%41%").decode().collect();
    assert_eq!(
        chunks,
        [DecodedChunk::PctDecoded(b'A'), DecodedChunk::Unencoded("%")]
    );

    assert_eq!(
        EStr::<Path>::new_or_panic("%C3%28").decode().to_string(),
        Err(vec![0xc3, 0x28])
    );
    assert_eq!(
        EStr::<Path>::new_or_panic("%C3%28").decode().to_string_lossy(),
        "\u{fffd}("
    );
}

#[test]
fn estr_split() {
    let s = EStr::<Query>::new_or_panic("a=1&b=2&&c");
    assert!(s.split('&').eq(["a=1", "b=2", "", "c"]));
    assert!(s.split('&').rev().eq(["c", "", "b=2", "a=1"]));
    assert_eq!(s.split_once('#'), None);
    assert_eq!(s.to_string(), "a=1&b=2&&c");
    assert_eq!(format!("{s:?}"), "\"a=1&b=2&&c\"");
}

#[test]
fn custom_tables() {
    const DIGITS: Table = Table::range(b'0', b'9');
    const HEX: Table = DIGITS.or(Table::new(b"abcdef"));
    assert!(DIGITS.is_subset(HEX));
    assert!(!HEX.is_subset(DIGITS));
    assert!(HEX.sub(DIGITS).allows('a'));
    assert!(!HEX.sub(DIGITS).allows('0'));
    assert_eq!(encode("0x1f", HEX), "0%781f");
}
