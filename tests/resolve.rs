use whatwg_url::{ParseError, Url};

fn resolve(base: &str, input: &str) -> String {
    Url::parse_with_base(input, base).unwrap().href()
}

#[test]
fn resolve_against_hierarchical_base() {
    let base = "https://example.com/a/b?x#y";

    let u = Url::parse_with_base("c", base).unwrap();
    assert_eq!(u.pathname(), "/a/c");
    assert_eq!(u.query(), None);
    assert_eq!(u.fragment(), None);
    assert_eq!(u.href(), "https://example.com/a/c");

    assert_eq!(resolve(base, ""), "https://example.com/a/b?x");
    assert_eq!(resolve(base, "#z"), "https://example.com/a/b?x#z");
    assert_eq!(resolve(base, "?q"), "https://example.com/a/b?q");
    assert_eq!(resolve(base, "/d"), "https://example.com/d");
    assert_eq!(resolve(base, "//other.org/e"), "https://other.org/e");
    assert_eq!(resolve(base, "../../../g"), "https://example.com/g");
    assert_eq!(resolve(base, "./"), "https://example.com/a/");
    assert_eq!(resolve(base, "."), "https://example.com/a/");
    assert_eq!(resolve(base, ".."), "https://example.com/");
    assert_eq!(resolve(base, "g;x=1/../y"), "https://example.com/a/y");
    assert_eq!(resolve(base, "https:c"), "https://example.com/a/c");
    assert_eq!(resolve(base, "http:c"), "http://c/");
    assert_eq!(resolve(base, "\\\\x\\y"), "https://x/y");
    assert_eq!(resolve(base, "ftp://f.org:21/"), "ftp://f.org/");
}

#[test]
fn rfc3986_examples() {
    // The normal examples of RFC 3986, Section 5.4.1.
    let base = "http://a/b/c/d;p?q";
    let cases = [
        ("g:h", "g:h"),
        ("g", "http://a/b/c/g"),
        ("./g", "http://a/b/c/g"),
        ("g/", "http://a/b/c/g/"),
        ("/g", "http://a/g"),
        ("//g", "http://g/"),
        ("?y", "http://a/b/c/d;p?y"),
        ("g?y", "http://a/b/c/g?y"),
        ("#s", "http://a/b/c/d;p?q#s"),
        ("g#s", "http://a/b/c/g#s"),
        ("g?y#s", "http://a/b/c/g?y#s"),
        (";x", "http://a/b/c/;x"),
        ("g;x", "http://a/b/c/g;x"),
        ("g;x?y#s", "http://a/b/c/g;x?y#s"),
        ("", "http://a/b/c/d;p?q"),
        (".", "http://a/b/c/"),
        ("./", "http://a/b/c/"),
        ("..", "http://a/b/"),
        ("../", "http://a/b/"),
        ("../g", "http://a/b/g"),
        ("../..", "http://a/"),
        ("../../", "http://a/"),
        ("../../g", "http://a/g"),
    ];
    for (input, expected) in cases {
        assert_eq!(resolve(base, input), expected, "{input:?}");
    }
}

#[test]
fn resolve_against_non_special_base() {
    let base = "sc://h/a/b";
    assert_eq!(resolve(base, "c"), "sc://h/a/c");
    assert_eq!(resolve(base, "//x/y"), "sc://x/y");
    assert_eq!(resolve(base, "\\c"), "sc://h/a/\\c");
    assert_eq!(resolve(base, "sc:c"), "sc:c");
}

#[test]
fn resolve_against_opaque_base() {
    let base = Url::parse("mailto:x@example.com?subject=hi").unwrap();
    assert_eq!(
        base.join("#frag").unwrap().href(),
        "mailto:x@example.com?subject=hi#frag"
    );
    assert_eq!(
        base.join("other"),
        Err(ParseError::MissingSchemeNonRelativeUrl)
    );
    assert_eq!(
        base.join("?q"),
        Err(ParseError::MissingSchemeNonRelativeUrl)
    );
}

#[test]
fn resolve_against_file_base() {
    let base = "file:///C:/dir/file";
    assert_eq!(resolve(base, "x"), "file:///C:/dir/x");
    assert_eq!(resolve(base, "/y"), "file:///C:/y");
    assert_eq!(resolve(base, "D|/z"), "file:///D:/z");
    // A drive letter with a colon reads as a scheme.
    assert_eq!(resolve(base, "D:/z"), "d:/z");
    assert_eq!(resolve(base, "?q"), "file:///C:/dir/file?q");
    assert_eq!(resolve(base, "#f"), "file:///C:/dir/file#f");
    assert_eq!(resolve(base, ""), "file:///C:/dir/file");
    assert_eq!(resolve(base, "//server/share"), "file://server/share");

    assert_eq!(resolve("file://host/dir/file", "/y"), "file://host/y");
    assert_eq!(resolve("file://host/dir/file", "x"), "file://host/dir/x");
}

#[test]
fn base_is_not_mutated() {
    let base = Url::parse("http://example.com/a/b?q#f").unwrap();
    let copy = base.clone();
    let _ = base.join("../c?d#e").unwrap();
    let _ = base.join("https://other.org").unwrap();
    assert_eq!(base, copy);
}

#[test]
fn base_must_parse() {
    assert_eq!(
        Url::parse_with_base("a", "relative/base"),
        Err(ParseError::MissingSchemeNonRelativeUrl)
    );
    assert!(Url::can_parse("a", Some("http://example.com")));
    assert!(!Url::can_parse("a", Some("relative/base")));
    assert!(!Url::can_parse("http://", Some("http://example.com")));
}
