#![no_main]
use libfuzzer_sys::fuzz_target;
use whatwg_url::Url;

fuzz_target!(|data: &str| {
    let Ok(u1) = Url::parse(data) else {
        return;
    };
    let href = u1.href();
    let u2 = Url::parse(&href).unwrap();

    assert_eq!(u1, u2);
    assert_eq!(href, u2.href());
    assert_eq!(u1.serialize(true), u2.serialize(true));
    assert_eq!(u1.origin(), u2.origin());
});
