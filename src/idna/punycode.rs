//! Punycode ([RFC 3492]) encoding and decoding.
//!
//! [RFC 3492]: https://datatracker.ietf.org/doc/html/rfc3492

const BASE: u32 = 36;
const T_MIN: u32 = 1;
const T_MAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 0x80;
const DELIMITER: char = '-';

fn adapt(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    delta /= if first_time { DAMP } else { 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + (BASE - T_MIN + 1) * delta / (delta + SKEW)
}

fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}

fn digit_value(x: u8) -> Option<u32> {
    match x {
        b'a'..=b'z' => Some((x - b'a') as u32),
        b'A'..=b'Z' => Some((x - b'A') as u32),
        b'0'..=b'9' => Some((x - b'0') as u32 + 26),
        _ => None,
    }
}

fn value_to_digit(d: u32) -> char {
    match d {
        0..=25 => (b'a' + d as u8) as char,
        _ => (b'0' + (d - 26) as u8) as char,
    }
}

/// Decodes a Punycode string, without the `xn--` prefix, to Unicode.
///
/// Returns `None` on malformed input or overflow.
///
/// # Examples
///
/// ```
/// use whatwg_url::idna::punycode;
///
/// assert_eq!(punycode::decode("mnchen-3ya").as_deref(), Some("münchen"));
/// assert_eq!(punycode::decode("99"), None);
/// ```
#[must_use]
pub fn decode(input: &str) -> Option<String> {
    if !input.is_ascii() {
        return None;
    }

    let (mut output, extended): (Vec<char>, &str) = match input.rfind(DELIMITER) {
        Some(pos) if pos > 0 => (input[..pos].chars().collect(), &input[pos + 1..]),
        _ => (Vec::new(), input),
    };

    let mut n = INITIAL_N;
    let mut bias = INITIAL_BIAS;
    let mut i = 0u32;
    let mut bytes = extended.bytes().peekable();

    while bytes.peek().is_some() {
        let old_i = i;
        let mut weight = 1u32;
        let mut k = BASE;
        loop {
            let digit = digit_value(bytes.next()?)?;
            i = i.checked_add(digit.checked_mul(weight)?)?;
            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            weight = weight.checked_mul(BASE - t)?;
            k += BASE;
        }

        let len = output.len() as u32 + 1;
        bias = adapt(i - old_i, len, old_i == 0);
        n = n.checked_add(i / len)?;
        i %= len;

        let ch = char::from_u32(n).filter(|ch| !ch.is_ascii())?;
        output.insert(i as usize, ch);
        i += 1;
    }

    Some(output.into_iter().collect())
}

/// Encodes a Unicode string to Punycode, without the `xn--` prefix.
///
/// Returns `None` on overflow.
///
/// # Examples
///
/// ```
/// use whatwg_url::idna::punycode;
///
/// assert_eq!(punycode::encode("münchen").as_deref(), Some("mnchen-3ya"));
/// assert_eq!(punycode::encode("abc").as_deref(), Some("abc-"));
/// ```
#[must_use]
pub fn encode(input: &str) -> Option<String> {
    let input: Vec<char> = input.chars().collect();
    let mut output: String = input.iter().filter(|ch| ch.is_ascii()).collect();

    let basic_len = output.len() as u32;
    if basic_len > 0 {
        output.push(DELIMITER);
    }

    let mut n = INITIAL_N;
    let mut delta = 0u32;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic_len;
    let total = input.len() as u32;

    while handled < total {
        let m = input
            .iter()
            .map(|&ch| ch as u32)
            .filter(|&cp| cp >= n)
            .min()?;

        delta = delta.checked_add((m - n).checked_mul(handled + 1)?)?;
        n = m;

        for &ch in &input {
            let cp = ch as u32;
            if cp < n {
                delta = delta.checked_add(1)?;
            }
            if cp == n {
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = threshold(k, bias);
                    if q < t {
                        break;
                    }
                    output.push(value_to_digit(t + (q - t) % (BASE - t)));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(value_to_digit(q));
                bias = adapt(delta, handled + 1, handled == basic_len);
                delta = 0;
                handled += 1;
            }
        }

        delta = delta.checked_add(1)?;
        n = n.checked_add(1)?;
    }

    Some(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sample strings from RFC 3492, section 7.1.
    const SAMPLES: &[(&str, &str)] = &[
        (
            "\u{644}\u{64a}\u{647}\u{645}\u{627}\u{628}\u{62a}\u{643}\u{644}\u{645}\u{648}\u{634}\u{639}\u{631}\u{628}\u{64a}\u{61f}",
            "egbpdaj6bu4bxfgehfvwxn",
        ),
        (
            "\u{4ed6}\u{4eec}\u{4e3a}\u{4ec0}\u{4e48}\u{4e0d}\u{8bf4}\u{4e2d}\u{6587}",
            "ihqwcrb4cv8a8dqg056pqjye",
        ),
        (
            "Pro\u{10d}prost\u{11b}nemluv\u{ed}\u{10d}esky",
            "Proprostnemluvesky-uyb24dma41a",
        ),
        (
            "\u{05DC}\u{05DE}\u{05D4}\u{05D4}\u{05DD}\u{05E4}\u{05E9}\u{05D5}\u{05D8}\u{05DC}\u{05D0}\u{05DE}\u{05D3}\u{05D1}\u{05E8}\u{05D9}\u{05DD}\u{05E2}\u{05D1}\u{05E8}\u{05D9}\u{05EA}",
            "4dbcagdahymbxekheh6e0a7fei0b",
        ),
        (
            "3\u{5E74}B\u{7D44}\u{91D1}\u{516B}\u{5148}\u{751F}",
            "3B-ww4c5e180e575a65lsy2b",
        ),
        (
            "\u{3072}\u{3068}\u{3064}\u{5C4B}\u{6839}\u{306E}\u{4E0B}2",
            "2-u9tlzr9756bt3uc0v",
        ),
        ("-> $1.00 <-", "-> $1.00 <--"),
    ];

    #[test]
    fn rfc_samples() {
        for &(decoded, encoded) in SAMPLES {
            assert_eq!(encode(decoded).as_deref(), Some(encoded), "encoding {decoded:?}");
            assert_eq!(decode(encoded).as_deref(), Some(decoded), "decoding {encoded:?}");
        }
    }

    #[test]
    fn uppercase_digits_decode() {
        assert_eq!(decode("MNCHEN-3YA").as_deref(), Some("M\u{fc}NCHEN"));
    }

    #[test]
    fn malformed() {
        assert_eq!(decode("a-!"), None);
        assert_eq!(decode("ü"), None);
        // Truncated variable-length integer.
        assert_eq!(decode("mnchen-3y"), None);
        // Overflow.
        assert_eq!(decode("99999999999"), None);
    }

    #[test]
    fn empty() {
        assert_eq!(encode("").as_deref(), Some(""));
        assert_eq!(decode("").as_deref(), Some(""));
    }
}
