use whatwg_url::{Origin, Url};

fn origin(input: &str) -> Origin {
    Url::parse(input).unwrap().origin()
}

fn tuple(scheme: &str, host: &str, port: Option<u16>) -> Origin {
    Origin::Tuple {
        scheme: scheme.into(),
        host: host.into(),
        port,
    }
}

#[test]
fn tuple_origins() {
    assert_eq!(
        origin("https://user:pw@Example.COM:8080/a/b?q=1#frag"),
        tuple("https", "example.com", Some(8080))
    );
    assert_eq!(
        origin("http://example.com:80/"),
        tuple("http", "example.com", None)
    );
    assert_eq!(origin("ws://[::1]:9000/x"), tuple("ws", "[::1]", Some(9000)));
    assert_eq!(origin("ftp://x.org:21/"), tuple("ftp", "x.org", None));
    assert_eq!(
        origin("wss://xn--bcher-kva.de/"),
        tuple("wss", "xn--bcher-kva.de", None)
    );
}

#[test]
fn opaque_origins() {
    for input in [
        "data:text/plain,hi",
        "file:///tmp",
        "sc://h/p",
        "mailto:user@example.com",
        "javascript:alert(1)",
    ] {
        assert!(origin(input).is_opaque(), "{input:?}");
    }
}

#[test]
fn blob_origins() {
    assert_eq!(
        origin("blob:https://a.com/uuid"),
        tuple("https", "a.com", None)
    );
    assert_eq!(
        origin("blob:http://a.com:81/uuid"),
        tuple("http", "a.com", Some(81))
    );
    for input in [
        "blob:ftp://a.com/x",
        "blob:blob:https://a.com/x",
        "blob:",
        "blob:%20https://a.com",
        "blob:not a url",
    ] {
        assert_eq!(origin(input), Origin::Opaque, "{input:?}");
    }
}

#[test]
fn serialize_origins() {
    let url = Url::parse("http://192.168.0.1:8080/?#").unwrap();
    assert_eq!(url.serialize_origin(), "http://192.168.0.1:8080");
    assert_eq!(url.origin().to_string(), "http://192.168.0.1:8080");
    assert_eq!(
        Url::parse("https://example.com/").unwrap().serialize_origin(),
        "https://example.com"
    );
    assert_eq!(
        Url::parse("data:,").unwrap().serialize_origin(),
        "null"
    );
}

#[test]
fn same_origin() {
    let a = origin("https://example.com/a");
    let b = origin("https://example.com:443/b?c");
    let c = origin("http://example.com/a");
    let d = origin("https://www.example.com/a");
    assert!(a.is_same_origin(&b));
    assert!(!a.is_same_origin(&c));
    assert!(!a.is_same_origin(&d));

    let opaque = origin("data:,");
    assert!(!opaque.is_same_origin(&opaque.clone()));
    assert!(!opaque.is_same_origin(&a));
}

#[test]
fn getters() {
    let url = Url::parse("https://user:pw@Example.COM:8080/a/b?q=1#frag").unwrap();
    assert_eq!(url.href(), "https://user:pw@example.com:8080/a/b?q=1#frag");
    assert_eq!(url.protocol(), "https:");
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.username(), "user");
    assert_eq!(url.password(), "pw");
    assert_eq!(url.host(), "example.com:8080");
    assert_eq!(url.hostname(), "example.com");
    assert_eq!(url.host_str(), Some("example.com"));
    assert_eq!(url.port(), "8080");
    assert_eq!(url.port_u16(), Some(8080));
    assert_eq!(url.pathname(), "/a/b");
    assert_eq!(url.search(), "?q=1");
    assert_eq!(url.hash(), "#frag");
    assert_eq!(url.query().unwrap(), "q=1");
    assert_eq!(url.fragment().unwrap(), "frag");
    assert_eq!(url.serialize(true), "https://user:pw@example.com:8080/a/b?q=1");
    assert!(url.is_special());
    assert!(!url.has_opaque_path());

    let url = Url::parse("mailto:a@b.c").unwrap();
    assert_eq!(url.host(), "");
    assert_eq!(url.hostname(), "");
    assert_eq!(url.host_str(), None);
    assert_eq!(url.port(), "");
    assert_eq!(url.port_or_default(), None);
    assert_eq!(url.opaque_path().unwrap(), "a@b.c");
    assert_eq!(url.pathname(), "a@b.c");
    assert!(url.has_opaque_path());
    assert!(!url.is_special());
}
