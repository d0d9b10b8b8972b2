#![no_main]
use libfuzzer_sys::fuzz_target;
use std::net::Ipv6Addr;
use whatwg_url::host::ip;

fuzz_target!(|data: &str| {
    let Ok(addr) = ip::parse_v6(data) else {
        return;
    };
    let s = ip::serialize_v6(addr);
    assert_eq!(ip::parse_v6(&s), Ok(addr));
    assert_eq!(s.parse::<Ipv6Addr>().ok(), Some(addr));
});
