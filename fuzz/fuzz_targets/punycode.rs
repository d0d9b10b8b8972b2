#![no_main]
use libfuzzer_sys::fuzz_target;
use whatwg_url::idna::{punycode, to_ascii};

fuzz_target!(|data: &str| {
    if let Some(encoded) = punycode::encode(data) {
        assert_eq!(punycode::decode(&encoded).as_deref(), Some(data));
    }

    // The ASCII form of a domain is a fixed point.
    if let Some(ascii) = to_ascii(data) {
        assert_eq!(to_ascii(&ascii).as_deref(), Some(&*ascii));
    }
});
