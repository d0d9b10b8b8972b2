use whatwg_url::idna::{punycode, to_ascii, UNICODE_VERSION};

#[test]
fn to_ascii_valid() {
    let cases = [
        ("example.com", "example.com"),
        ("Example.COM", "example.com"),
        ("B\u{fc}cher.de", "xn--bcher-kva.de"),
        ("fa\u{df}.de", "xn--fa-hia.de"),
        ("\u{d6}BB.at", "xn--bb-eka.at"),
        ("\u{65e5}\u{672c}\u{8a9e}.jp", "xn--wgv71a119e.jp"),
        ("\u{516c}\u{53f8}.cn", "xn--55qx5d.cn"),
        ("\u{1f4a9}.la", "xn--ls8h.la"),
        ("\u{5d0}\u{5d1}.com", "xn--4dbc.com"),
        ("\u{1c5}.com", "xn--d-toa.com"),
        // Unicode 14.
        ("\u{1fae0}", "xn--129h"),
        ("\u{1fae0}.example", "xn--129h.example"),
    ];
    for (input, expected) in cases {
        assert_eq!(to_ascii(input).as_deref(), Some(expected), "{input:?}");
    }
}

#[test]
fn to_ascii_joiners() {
    // ZWNJ between two dual-joining BEH letters.
    assert_eq!(
        to_ascii("\u{628}\u{200c}\u{628}.com").as_deref(),
        Some("xn--ngba799q.com")
    );
    // ZWJ after a virama.
    assert!(to_ascii("\u{915}\u{94d}\u{200d}").is_some());
}

#[test]
fn to_ascii_keeps_valid_punycode() {
    assert_eq!(
        to_ascii("xn--mnchen-3ya.de").as_deref(),
        Some("xn--mnchen-3ya.de")
    );
    assert_eq!(
        to_ascii("XN--MNCHEN-3YA.de").as_deref(),
        Some("xn--mnchen-3ya.de")
    );
    assert_eq!(to_ascii("xn--zca.de").as_deref(), Some("xn--zca.de"));
    assert_eq!(to_ascii("xn--a.com"), None);
    assert_eq!(to_ascii("xn--m\u{fc}nchen.de"), None);
    // A Punycode label that decodes to ASCII only.
    assert_eq!(to_ascii("xn--abc-"), None);
    assert_eq!(to_ascii("a.xn--abc-.com"), None);
    assert_eq!(to_ascii("xn--mnchen-3ya-.de"), None);
}

#[test]
fn to_ascii_mapping() {
    // Soft hyphen is ignored.
    assert_eq!(to_ascii("\u{ad}example.com").as_deref(), Some("example.com"));
    // Ideographic full stop is a label separator.
    assert_eq!(to_ascii("ex\u{3002}com").as_deref(), Some("ex.com"));
    // Fullwidth letters fold to ASCII.
    assert_eq!(
        to_ascii("\u{ff25}\u{ff58}\u{ff41}\u{ff4d}\u{ff50}\u{ff4c}\u{ff45}.com").as_deref(),
        Some("example.com")
    );
    assert_eq!(to_ascii("").as_deref(), Some(""));
    assert_eq!(to_ascii("a..b").as_deref(), Some("a..b"));
}

#[test]
fn to_ascii_invalid() {
    // Joiners outside their allowed contexts.
    assert_eq!(to_ascii("a\u{200d}b"), None);
    // ALEF is right-joining, so it cannot precede a ZWNJ.
    assert_eq!(to_ascii("\u{627}\u{200c}\u{628}.com"), None);
    assert_eq!(to_ascii("\u{628}\u{627}\u{200c}\u{628}.com"), None);
    // A label must not begin with a combining mark.
    assert_eq!(to_ascii("\u{301}a.com"), None);
    // A label mixing LTR and RTL characters fails the bidi rule.
    assert_eq!(to_ascii("a\u{5d0}.com"), None);
    // Disallowed code point.
    assert_eq!(to_ascii("a\u{2488}b"), None);
}

#[test]
fn punycode_known_values() {
    assert_eq!(punycode::encode("m\u{fc}nchen").as_deref(), Some("mnchen-3ya"));
    assert_eq!(punycode::decode("mnchen-3ya").as_deref(), Some("m\u{fc}nchen"));
    assert_eq!(
        punycode::encode("\u{65e5}\u{672c}\u{8a9e}").as_deref(),
        Some("wgv71a119e")
    );
    assert_eq!(
        punycode::decode("wgv71a119e").as_deref(),
        Some("\u{65e5}\u{672c}\u{8a9e}")
    );
    assert_eq!(punycode::encode("").as_deref(), Some(""));
    assert_eq!(punycode::decode("").as_deref(), Some(""));
}

#[test]
fn punycode_malformed() {
    assert_eq!(punycode::decode("99"), None);
    assert_eq!(punycode::decode("a-\u{e9}"), None);
    assert_eq!(punycode::decode("zzzzzzzzzzzzzzzzzzzz"), None);
}

#[test]
fn unicode_version() {
    assert_eq!(UNICODE_VERSION, "17.0.0");
}
