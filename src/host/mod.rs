//! The host parser.
//!
//! A host is stored in its serialized form: a domain, an IPv4 address in
//! dotted-decimal notation, a bracketed IPv6 address, an opaque host, or
//! the empty string.

pub mod ip;

use crate::{
    error::{ParseError, Reporter, ValidationError},
    idna,
    pct_enc::{self, table},
};

const FORBIDDEN_HOST_CODE_POINTS: &[char] = &[
    '\0', '\t', '\n', '\r', ' ', '#', '/', ':', '<', '>', '?', '@', '[', '\\', ']', '^', '|',
];

fn is_forbidden_host_code_point(ch: char) -> bool {
    FORBIDDEN_HOST_CODE_POINTS.contains(&ch)
}

fn is_forbidden_domain_code_point(ch: char) -> bool {
    is_forbidden_host_code_point(ch) || ch.is_ascii_control() || ch == '%'
}

/// Parses a host, returning its serialization.
///
/// `is_opaque` is set for hosts of URLs with a non-special scheme. Such hosts
/// are only checked for forbidden code points and percent-encoded, while
/// other hosts go through domain-to-ASCII processing and may turn out to be
/// IPv4 addresses.
///
/// # Errors
///
/// Returns `Err` if the host is invalid.
///
/// # Examples
///
/// ```
/// use whatwg_url::host;
///
/// assert_eq!(host::parse("EXAMPLE.com", false).unwrap(), "example.com");
/// assert_eq!(host::parse("0x7f.1", false).unwrap(), "127.0.0.1");
/// assert_eq!(host::parse("[0:0::1]", false).unwrap(), "[::1]");
/// assert_eq!(host::parse("EXAMPLE.com", true).unwrap(), "EXAMPLE.com");
/// assert!(host::parse("exa mple", true).is_err());
/// ```
pub fn parse(input: &str, is_opaque: bool) -> Result<String, ParseError> {
    parse_reporting(input, is_opaque, &Reporter::default())
}

pub(crate) fn parse_reporting(
    input: &str,
    is_opaque: bool,
    reporter: &Reporter<'_>,
) -> Result<String, ParseError> {
    if let Some(rest) = input.strip_prefix('[') {
        let Some(addr) = rest.strip_suffix(']') else {
            return Err(ParseError::Ipv6Unclosed);
        };
        let addr = ip::parse_v6(addr)?;
        return Ok(format!("[{}]", ip::serialize_v6(addr)));
    }

    if is_opaque {
        return parse_opaque(input, reporter);
    }

    let domain = pct_enc::decode(input.as_bytes());
    let domain = String::from_utf8_lossy(&domain);

    let ascii_domain = match idna::to_ascii(&domain) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ParseError::DomainToAscii),
    };

    if ascii_domain.chars().any(is_forbidden_domain_code_point) {
        return Err(ParseError::DomainInvalidCodePoint);
    }

    if ip::ends_in_number(&ascii_domain) {
        let addr = ip::parse_v4_reporting(&ascii_domain, reporter)?;
        return Ok(ip::serialize_v4(addr));
    }

    Ok(ascii_domain)
}

fn parse_opaque(input: &str, reporter: &Reporter<'_>) -> Result<String, ParseError> {
    if input.chars().any(is_forbidden_host_code_point) {
        return Err(ParseError::HostInvalidCodePoint);
    }

    let bytes = input.as_bytes();
    let stray_percent = bytes.iter().enumerate().any(|(i, &x)| {
        x == b'%'
            && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
    });
    if stray_percent {
        reporter.report(ValidationError::InvalidUrlUnit);
    }

    Ok(pct_enc::encode(input, table::C0_CONTROL).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden() {
        assert!(is_forbidden_host_code_point('|'));
        assert!(!is_forbidden_host_code_point('%'));
        assert!(!is_forbidden_host_code_point('\u{1}'));
        assert!(is_forbidden_domain_code_point('%'));
        assert!(is_forbidden_domain_code_point('\u{1}'));
        assert!(is_forbidden_domain_code_point('\u{7f}'));
    }

    #[test]
    fn opaque_encodes_controls() {
        assert_eq!(parse("a\u{1}b", true), Ok("a%01b".to_owned()));
        assert_eq!(parse("ü", true), Ok("%C3%BC".to_owned()));
    }
}
