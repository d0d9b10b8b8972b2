#![no_main]
use libfuzzer_sys::fuzz_target;
use whatwg_url::Url;

fuzz_target!(|data: (&str, &str)| {
    let Ok(base) = Url::parse(data.0) else {
        return;
    };
    let Ok(u1) = base.join(data.1) else { return };
    let u2 = Url::parse(&u1.href()).unwrap();
    assert_eq!(u1, u2);

    // Resolving an absolute URL ignores the base.
    let u3 = base.join(&u1.href()).unwrap();
    assert_eq!(u1, u3);
});
