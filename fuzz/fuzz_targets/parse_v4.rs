#![no_main]
use libfuzzer_sys::fuzz_target;
use std::net::Ipv4Addr;
use std::str::FromStr;
use whatwg_url::host::ip;

fuzz_target!(|data: &str| {
    let parsed = ip::parse_v4(data).ok();
    if let Ok(addr) = Ipv4Addr::from_str(data) {
        assert_eq!(parsed, Some(addr));
    }
    if let Some(addr) = parsed {
        assert_eq!(ip::parse_v4(&ip::serialize_v4(addr)), Ok(addr));
    }
});
