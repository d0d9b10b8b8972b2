//! IPv4 and IPv6 address parsing and serialization.
//!
//! The grammars here are the lenient ones of the URL Standard. IPv4 parts may
//! be written in decimal, octal or hexadecimal and the address may have fewer
//! than four parts. IPv6 addresses may embed a dotted quad.

use crate::error::{ParseError, Reporter, ValidationError};
use std::{
    fmt::Write,
    net::{Ipv4Addr, Ipv6Addr},
};

/// Checks whether a domain ends in a number, in which case it must be
/// parsed as an IPv4 address.
pub(crate) fn ends_in_number(s: &str) -> bool {
    let mut parts = s.rsplit('.');
    let mut last = parts.next().unwrap_or_default();
    if last.is_empty() {
        match parts.next() {
            Some(part) => last = part,
            None => return false,
        }
    }

    if !last.is_empty() && last.bytes().all(|x| x.is_ascii_digit()) {
        return true;
    }
    parse_number(last).is_some()
}

/// Parses an IPv4 number, returning it along with whether it was written in
/// a radix other than ten.
///
/// Overlong literals saturate at `u64::MAX`.
fn parse_number(s: &str) -> Option<(u64, bool)> {
    if s.is_empty() {
        return None;
    }

    let (digits, radix) = if let Some(rem) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (rem, 16)
    } else if s.len() > 1 && s.starts_with('0') {
        (&s[1..], 8)
    } else {
        (s, 10)
    };

    let mut value = 0u64;
    for x in digits.bytes() {
        let digit = (x as char).to_digit(radix)?;
        value = value
            .checked_mul(radix as u64)
            .and_then(|v| v.checked_add(digit as u64))
            .unwrap_or(u64::MAX);
    }
    Some((value, radix != 10))
}

/// Parses an IPv4 address with the URL Standard's lenient grammar.
///
/// # Errors
///
/// Returns `Err` if there are more than four parts, a part is not a number,
/// or a part is out of range.
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use whatwg_url::host::ip::parse_v4;
///
/// assert_eq!(parse_v4("0x7f.1"), Ok(Ipv4Addr::new(127, 0, 0, 1)));
/// assert_eq!(parse_v4("3232235521"), Ok(Ipv4Addr::new(192, 168, 0, 1)));
/// assert!(parse_v4("256.1.1.1").is_err());
/// ```
pub fn parse_v4(s: &str) -> Result<Ipv4Addr, ParseError> {
    parse_v4_reporting(s, &Reporter::default())
}

pub(crate) fn parse_v4_reporting(s: &str, reporter: &Reporter<'_>) -> Result<Ipv4Addr, ParseError> {
    let mut parts: Vec<&str> = s.split('.').collect();
    if parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
        reporter.report(ValidationError::Ipv4EmptyPart);
        parts.pop();
    }

    if parts.len() > 4 {
        return Err(ParseError::Ipv4TooManyParts);
    }

    let mut numbers = [0u64; 4];
    for (i, part) in parts.iter().enumerate() {
        let (n, non_decimal) = parse_number(part).ok_or(ParseError::Ipv4NonNumericPart)?;
        if non_decimal {
            reporter.report(ValidationError::Ipv4NonDecimalPart);
        }
        numbers[i] = n;
    }

    let count = parts.len();
    let (last, init) = match numbers[..count].split_last() {
        Some(x) => x,
        None => return Err(ParseError::Ipv4NonNumericPart),
    };
    if init.iter().any(|&n| n > 255) {
        return Err(ParseError::Ipv4OutOfRangePart);
    }
    if *last >= 256u64.pow(5 - count as u32) {
        return Err(ParseError::Ipv4OutOfRangePart);
    }

    let mut addr = *last;
    for (i, &n) in init.iter().enumerate() {
        addr += n << (8 * (3 - i));
    }
    Ok(Ipv4Addr::from(addr as u32))
}

/// Serializes an IPv4 address as four decimal octets joined by `.`.
#[must_use]
pub fn serialize_v4(addr: Ipv4Addr) -> String {
    let [a, b, c, d] = addr.octets();
    format!("{a}.{b}.{c}.{d}")
}

/// A cursor over the bytes of an IPv6 address.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self, i: usize) -> Option<u8> {
        self.bytes.get(self.pos + i).copied()
    }

    fn has_remaining(&self) -> bool {
        self.pos < self.bytes.len()
    }
}

/// Parses an IPv6 address, without the surrounding brackets.
///
/// # Errors
///
/// Returns `Err` if the address is malformed.
///
/// # Examples
///
/// ```
/// use std::net::Ipv6Addr;
/// use whatwg_url::host::ip::parse_v6;
///
/// assert_eq!(parse_v6("::1"), Ok(Ipv6Addr::LOCALHOST));
/// assert_eq!(parse_v6("::ffff:1.2.3.4"), Ok(Ipv6Addr::new(0, 0, 0, 0, 0, 0xffff, 0x102, 0x304)));
/// assert!(parse_v6("1::2::3").is_err());
/// ```
pub fn parse_v6(s: &str) -> Result<Ipv6Addr, ParseError> {
    let mut pieces = [0u16; 8];
    let mut piece_index = 0;
    let mut compress = None;
    let mut c = Cursor {
        bytes: s.as_bytes(),
        pos: 0,
    };

    if c.peek(0) == Some(b':') {
        if c.peek(1) != Some(b':') {
            return Err(ParseError::Ipv6InvalidCompression);
        }
        c.pos += 2;
        piece_index += 1;
        compress = Some(piece_index);
    }

    while let Some(x) = c.peek(0) {
        if piece_index == 8 {
            return Err(ParseError::Ipv6TooManyPieces);
        }

        if x == b':' {
            if compress.is_some() {
                return Err(ParseError::Ipv6MultipleCompressions);
            }
            c.pos += 1;
            piece_index += 1;
            compress = Some(piece_index);
            continue;
        }

        let mut value = 0u16;
        let mut len = 0;
        while len < 4 {
            match c.peek(0).and_then(|x| (x as char).to_digit(16)) {
                Some(d) => {
                    value = value * 0x10 + d as u16;
                    c.pos += 1;
                    len += 1;
                }
                None => break,
            }
        }

        match c.peek(0) {
            Some(b'.') => {
                if len == 0 {
                    return Err(ParseError::Ipv4InIpv6InvalidCodePoint);
                }
                c.pos -= len;
                if piece_index > 6 {
                    return Err(ParseError::Ipv4InIpv6TooManyPieces);
                }
                read_embedded_v4(&mut c, &mut pieces, &mut piece_index)?;
                break;
            }
            Some(b':') => {
                c.pos += 1;
                if !c.has_remaining() {
                    return Err(ParseError::Ipv6InvalidCodePoint);
                }
            }
            Some(_) => return Err(ParseError::Ipv6InvalidCodePoint),
            None => {}
        }

        pieces[piece_index] = value;
        piece_index += 1;
    }

    if let Some(compress) = compress {
        // Move the pieces after the compression to the end.
        let len = piece_index - compress;
        pieces.copy_within(compress..piece_index, 8 - len);
        pieces[compress..8 - len].fill(0);
    } else if piece_index != 8 {
        return Err(ParseError::Ipv6TooFewPieces);
    }

    Ok(Ipv6Addr::from(pieces))
}

fn read_embedded_v4(
    c: &mut Cursor<'_>,
    pieces: &mut [u16; 8],
    piece_index: &mut usize,
) -> Result<(), ParseError> {
    let mut numbers_seen = 0;
    while c.has_remaining() {
        if numbers_seen > 0 {
            if c.peek(0) == Some(b'.') && numbers_seen < 4 {
                c.pos += 1;
            } else {
                return Err(ParseError::Ipv4InIpv6InvalidCodePoint);
            }
        }

        let mut octet: Option<u16> = None;
        while let Some(x @ b'0'..=b'9') = c.peek(0) {
            let digit = (x - b'0') as u16;
            octet = match octet {
                None => Some(digit),
                Some(0) => return Err(ParseError::Ipv4InIpv6InvalidCodePoint),
                Some(n) => Some(n * 10 + digit),
            };
            if octet.is_some_and(|n| n > 255) {
                return Err(ParseError::Ipv4InIpv6OutOfRangePart);
            }
            c.pos += 1;
        }
        let Some(octet) = octet else {
            return Err(ParseError::Ipv4InIpv6InvalidCodePoint);
        };

        pieces[*piece_index] = pieces[*piece_index] * 0x100 + octet;
        numbers_seen += 1;
        if numbers_seen == 2 || numbers_seen == 4 {
            *piece_index += 1;
        }
    }

    if numbers_seen != 4 {
        return Err(ParseError::Ipv4InIpv6TooFewParts);
    }
    Ok(())
}

/// Serializes an IPv6 address, without the surrounding brackets.
///
/// The first longest run of two or more zero pieces is compressed to `::`
/// and the pieces are written in lowercase hexadecimal.
///
/// # Examples
///
/// ```
/// use std::net::Ipv6Addr;
/// use whatwg_url::host::ip::serialize_v6;
///
/// let addr = Ipv6Addr::new(0x2606, 0x4700, 0x4700, 0, 0, 0, 0, 0x1111);
/// assert_eq!(serialize_v6(addr), "2606:4700:4700::1111");
/// assert_eq!(serialize_v6(Ipv6Addr::new(0, 0, 0, 0, 0, 0xffff, 0x102, 0x304)), "::ffff:102:304");
/// ```
#[must_use]
pub fn serialize_v6(addr: Ipv6Addr) -> String {
    let pieces = addr.segments();
    let compress = longest_zero_run(&pieces);

    let mut out = String::with_capacity(39);
    let mut ignore_zero = false;
    for (i, &piece) in pieces.iter().enumerate() {
        if ignore_zero && piece == 0 {
            continue;
        }
        ignore_zero = false;

        if compress == Some(i) {
            out.push_str(if i == 0 { "::" } else { ":" });
            ignore_zero = true;
            continue;
        }

        let _ = write!(out, "{piece:x}");
        if i != 7 {
            out.push(':');
        }
    }
    out
}

/// Finds the start of the first longest run of at least two zero pieces.
fn longest_zero_run(pieces: &[u16; 8]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    let mut i = 0;
    while i < 8 {
        if pieces[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < 8 && pieces[i] == 0 {
            i += 1;
        }
        let len = i - start;
        if len > 1 && best.map_or(true, |(_, best_len)| len > best_len) {
            best = Some((start, len));
        }
    }
    best.map(|(start, _)| start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_in_number_cases() {
        assert!(ends_in_number("1.2.3.4"));
        assert!(ends_in_number("example.123"));
        assert!(ends_in_number("example.0x"));
        assert!(ends_in_number("example.0xAb."));
        assert!(!ends_in_number("example.com"));
        assert!(!ends_in_number("."));
        assert!(!ends_in_number("example.0xg"));
        assert!(!ends_in_number("a.."));
    }

    #[test]
    fn number_radix() {
        assert_eq!(parse_number("0x"), Some((0, true)));
        assert_eq!(parse_number("0"), Some((0, false)));
        assert_eq!(parse_number("010"), Some((8, true)));
        assert_eq!(parse_number("08"), None);
        assert_eq!(parse_number("0XFF"), Some((255, true)));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("99999999999999999999999"), Some((u64::MAX, false)));
    }

    #[test]
    fn zero_run() {
        assert_eq!(longest_zero_run(&[1, 0, 1, 0, 0, 1, 0, 0]), Some(3));
        assert_eq!(longest_zero_run(&[1, 0, 1, 0, 1, 0, 1, 0]), None);
        assert_eq!(longest_zero_run(&[0; 8]), Some(0));
    }

    #[test]
    fn serialize_all_zero() {
        assert_eq!(serialize_v6(Ipv6Addr::UNSPECIFIED), "::");
        assert_eq!(serialize_v6(Ipv6Addr::new(1, 0, 0, 0, 0, 0, 0, 0)), "1::");
        assert_eq!(serialize_v6(Ipv6Addr::new(1, 0, 1, 1, 1, 1, 1, 1)), "1:0:1:1:1:1:1:1");
    }
}
