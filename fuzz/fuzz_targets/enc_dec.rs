#![no_main]
use libfuzzer_sys::fuzz_target;
use whatwg_url::pct_enc::{decode, encode, encoder::Query, table::QUERY, EStr};

fuzz_target!(|data: &str| {
    // A '%' is left as is, so only inputs without one decode back exactly.
    let encoded = encode(data, QUERY);
    let estr = EStr::<Query>::new(&encoded).unwrap();
    if !data.contains('%') {
        assert_eq!(estr.decode().to_string().unwrap(), data);
    }
    assert_eq!(&*decode(encoded.as_bytes()), &*estr.decode().to_bytes());
});
