use std::net::{Ipv4Addr, Ipv6Addr};

use whatwg_url::{
    host::{self, ip},
    ParseError,
};

#[test]
fn parse_domain() {
    assert_eq!(host::parse("example.com", false).unwrap(), "example.com");
    assert_eq!(host::parse("EXAMPLE.COM", false).unwrap(), "example.com");
    assert_eq!(host::parse("ex%41mple.com", false).unwrap(), "example.com");
    assert_eq!(
        host::parse("m\u{fc}nchen.de", false).unwrap(),
        "xn--mnchen-3ya.de"
    );
    assert_eq!(host::parse("a..b", false).unwrap(), "a..b");
    assert_eq!(host::parse("", false), Err(ParseError::DomainToAscii));
    assert_eq!(host::parse("\u{ad}", false), Err(ParseError::DomainToAscii));
    assert_eq!(host::parse("%zz", false), Err(ParseError::DomainInvalidCodePoint));
    assert_eq!(host::parse("a%00b", false), Err(ParseError::DomainInvalidCodePoint));
    assert_eq!(host::parse("a|b", false), Err(ParseError::DomainInvalidCodePoint));
}

#[test]
fn parse_opaque() {
    assert_eq!(host::parse("EXAMPLE.com", true).unwrap(), "EXAMPLE.com");
    assert_eq!(host::parse("", true).unwrap(), "");
    assert_eq!(host::parse("a%zzb", true).unwrap(), "a%zzb");
    assert_eq!(host::parse("\u{e9}", true).unwrap(), "%C3%A9");
    assert_eq!(host::parse("a\u{7f}", true).unwrap(), "a%7F");
    assert_eq!(host::parse("1.2.3.4.5", true).unwrap(), "1.2.3.4.5");
    for bad in ["a b", "a#b", "a/b", "a<b", "a>b", "a?b", "a@b", "a\\b", "a^b", "a|b"] {
        assert_eq!(host::parse(bad, true), Err(ParseError::HostInvalidCodePoint), "{bad:?}");
    }
}

#[test]
fn parse_ipv4() {
    let cases = [
        ("192.168.0.1", "192.168.0.1"),
        ("0x7f.0.0.1", "127.0.0.1"),
        ("127.1", "127.0.0.1"),
        ("0300.0250.0.1", "192.168.0.1"),
        ("3232235521", "192.168.0.1"),
        ("4294967295", "255.255.255.255"),
        ("1.2.3.4.", "1.2.3.4"),
        ("0x", "0.0.0.0"),
        ("0XFF.0xff.0.0", "255.255.0.0"),
    ];
    for (input, expected) in cases {
        assert_eq!(host::parse(input, false).unwrap(), expected, "{input:?}");
    }

    let errors = [
        ("256.1.1.1", ParseError::Ipv4OutOfRangePart),
        ("1.2.3.256", ParseError::Ipv4OutOfRangePart),
        ("4294967296", ParseError::Ipv4OutOfRangePart),
        ("1.2.65536", ParseError::Ipv4OutOfRangePart),
        ("99999999999999999999999", ParseError::Ipv4OutOfRangePart),
        ("1.2.3.4.5", ParseError::Ipv4TooManyParts),
        ("1..2", ParseError::Ipv4NonNumericPart),
        ("08.1", ParseError::Ipv4NonNumericPart),
        ("foo.09", ParseError::Ipv4NonNumericPart),
        ("0xg.1", ParseError::Ipv4NonNumericPart),
        ("example.0x1", ParseError::Ipv4NonNumericPart),
    ];
    for (input, expected) in errors {
        assert_eq!(host::parse(input, false), Err(expected), "{input:?}");
    }

    // A non-numeric last part makes a domain.
    assert_eq!(host::parse("1.2.3.a", false).unwrap(), "1.2.3.a");
    assert_eq!(host::parse("0xg", false).unwrap(), "0xg");
}

#[test]
fn ipv4_helpers() {
    assert_eq!(ip::parse_v4("10.0.0.1"), Ok(Ipv4Addr::new(10, 0, 0, 1)));
    assert_eq!(ip::parse_v4("0x0A.1"), Ok(Ipv4Addr::new(10, 0, 0, 1)));
    assert_eq!(ip::parse_v4(""), Err(ParseError::Ipv4NonNumericPart));
    assert_eq!(ip::serialize_v4(Ipv4Addr::new(1, 2, 3, 4)), "1.2.3.4");
    assert_eq!(ip::serialize_v4(Ipv4Addr::UNSPECIFIED), "0.0.0.0");
}

#[test]
fn parse_ipv6() {
    let cases = [
        ("[2606:4700:4700::1111]", "[2606:4700:4700::1111]"),
        ("[::1]", "[::1]"),
        ("[::]", "[::]"),
        ("[0:0:0:0:0:0:0:1]", "[::1]"),
        ("[1:0:0:2:0:0:0:3]", "[1:0:0:2::3]"),
        ("[1:0:0:0:2:0:0:3]", "[1::2:0:0:3]"),
        ("[1:0:1:0:1:0:1:0]", "[1:0:1:0:1:0:1:0]"),
        ("[ABCD::EF]", "[abcd::ef]"),
        ("[::ffff:192.168.0.1]", "[::ffff:c0a8:1]"),
        ("[::127.0.0.1]", "[::7f00:1]"),
        ("[1:2:3:4:5:6:7::]", "[1:2:3:4:5:6:7:0]"),
        ("[1:2:3:4:5:6:1.2.3.4]", "[1:2:3:4:5:6:102:304]"),
    ];
    for (input, expected) in cases {
        assert_eq!(host::parse(input, false).unwrap(), expected, "{input:?}");
        assert_eq!(host::parse(input, true).unwrap(), expected, "{input:?}");
    }

    let errors = [
        ("[::1", ParseError::Ipv6Unclosed),
        ("[", ParseError::Ipv6Unclosed),
        ("[:1]", ParseError::Ipv6InvalidCompression),
        ("[1:2:3:4:5:6:7:8:9]", ParseError::Ipv6TooManyPieces),
        ("[1:2:3:4:5:6:7:8::]", ParseError::Ipv6TooManyPieces),
        ("[1::2::3]", ParseError::Ipv6MultipleCompressions),
        ("[1:2:3:4:5:6:7]", ParseError::Ipv6TooFewPieces),
        ("[]", ParseError::Ipv6TooFewPieces),
        ("[1:]", ParseError::Ipv6InvalidCodePoint),
        ("[12345::]", ParseError::Ipv6InvalidCodePoint),
        ("[::g]", ParseError::Ipv6InvalidCodePoint),
        ("[1:2:3:4:5:6:7:1.2.3.4]", ParseError::Ipv4InIpv6TooManyPieces),
        ("[::1.2.3]", ParseError::Ipv4InIpv6TooFewParts),
        ("[::1.2.3.4.5]", ParseError::Ipv4InIpv6InvalidCodePoint),
        ("[::1.2.3.04]", ParseError::Ipv4InIpv6InvalidCodePoint),
        ("[::1.2..4]", ParseError::Ipv4InIpv6InvalidCodePoint),
        ("[::.1.2.3]", ParseError::Ipv4InIpv6InvalidCodePoint),
        ("[::1.2.3.256]", ParseError::Ipv4InIpv6OutOfRangePart),
    ];
    for (input, expected) in errors {
        assert_eq!(host::parse(input, false), Err(expected), "{input:?}");
    }
}

#[test]
fn ipv6_helpers() {
    assert_eq!(ip::parse_v6("::1"), Ok(Ipv6Addr::LOCALHOST));
    assert_eq!(
        ip::parse_v6("1::"),
        Ok(Ipv6Addr::new(1, 0, 0, 0, 0, 0, 0, 0))
    );
    assert_eq!(ip::serialize_v6(Ipv6Addr::LOCALHOST), "::1");
    assert_eq!(
        ip::serialize_v6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 1, 0, 0, 1)),
        "2001:db8::1:0:0:1"
    );
}
