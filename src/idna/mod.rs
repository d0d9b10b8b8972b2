//! Domain name processing from [UTS #46].
//!
//! Only the *domain to ASCII* direction used by the host parser is provided,
//! with the flags the URL Standard sets: nontransitional processing,
//! `CheckBidi` and `CheckJoiners` on, `CheckHyphens`, `UseSTD3ASCIIRules`
//! and `VerifyDnsLength` off.
//!
//! [UTS #46]: https://www.unicode.org/reports/tr46/

mod mapping;
pub mod punycode;
mod table;

pub use table::UNICODE_VERSION;

use mapping::Status;
use unicode_bidi::{bidi_class, BidiClass};
use unicode_joining_type::{get_joining_type, JoiningType};
use unicode_normalization::{
    char::{canonical_combining_class, is_combining_mark},
    is_nfc, UnicodeNormalization,
};

const ZWNJ: char = '\u{200c}';
const ZWJ: char = '\u{200d}';
const VIRAMA: u8 = 9;

/// Converts a domain to its ASCII form.
///
/// Returns `None` if the domain is invalid.
///
/// # Examples
///
/// ```
/// use whatwg_url::idna::to_ascii;
///
/// assert_eq!(to_ascii("Example.COM").as_deref(), Some("example.com"));
/// assert_eq!(to_ascii("bücher.de").as_deref(), Some("xn--bcher-kva.de"));
/// assert_eq!(to_ascii("xn--bcher-kva.de").as_deref(), Some("xn--bcher-kva.de"));
/// assert_eq!(to_ascii("xn--.de"), None);
/// ```
#[must_use]
pub fn to_ascii(domain: &str) -> Option<String> {
    let mut mapped = String::with_capacity(domain.len());
    for ch in domain.chars() {
        match mapping::lookup(ch) {
            (Status::Mapped, replacement) => mapped.push_str(replacement),
            (Status::Ignored, _) => {}
            _ => mapped.push(ch),
        }
    }

    let normalized: String = if is_nfc(&mapped) {
        mapped
    } else {
        mapped.nfc().collect()
    };

    let mut out = String::with_capacity(normalized.len());
    for (i, label) in normalized.split('.').enumerate() {
        if i > 0 {
            out.push('.');
        }

        let decoded;
        let label = match label.strip_prefix("xn--") {
            Some(rest) => {
                if !label.is_ascii() || rest.is_empty() {
                    return None;
                }
                decoded = punycode::decode(rest)?;
                // A Punycode label must encode something beyond ASCII.
                if decoded.is_ascii() {
                    return None;
                }
                &decoded[..]
            }
            None => label,
        };

        if !is_valid_label(label) {
            return None;
        }

        if label.is_ascii() {
            out.push_str(label);
        } else {
            out.push_str("xn--");
            out.push_str(&punycode::encode(label)?);
        }
    }
    Some(out)
}

fn is_valid_label(label: &str) -> bool {
    let Some(first) = label.chars().next() else {
        return true;
    };

    if !is_nfc(label) || is_combining_mark(first) {
        return false;
    }

    let all_valid = label.chars().all(|ch| {
        matches!(mapping::lookup(ch).0, Status::Valid | Status::Deviation)
    });
    if !all_valid {
        return false;
    }

    if label.is_ascii() {
        return true;
    }

    let chars: Vec<char> = label.chars().collect();
    check_joiners(&chars) && check_bidi(&chars)
}

/// Checks the CONTEXTJ rules of RFC 5892, Appendix A.1 and A.2.
///
/// The ZWNJ rule is the strict one: only Transparent characters may sit
/// between the joiner and the joining letters around it. A letter that is
/// left- or dual-joining further back in the label does not count.
fn check_joiners(label: &[char]) -> bool {
    label.iter().enumerate().all(|(i, &ch)| match ch {
        ZWNJ => {
            follows_virama(label, i)
                || (joins(label[..i].iter().rev(), |jt| {
                    matches!(jt, JoiningType::LeftJoining | JoiningType::DualJoining)
                }) && joins(label[i + 1..].iter(), |jt| {
                    matches!(jt, JoiningType::RightJoining | JoiningType::DualJoining)
                }))
        }
        ZWJ => follows_virama(label, i),
        _ => true,
    })
}

fn follows_virama(label: &[char], i: usize) -> bool {
    i > 0 && canonical_combining_class(label[i - 1]) == VIRAMA
}

/// Checks whether the first non-transparent character yielded has an accepted joining type.
fn joins<'a>(chars: impl Iterator<Item = &'a char>, accept: fn(JoiningType) -> bool) -> bool {
    for &ch in chars {
        let jt = get_joining_type(ch);
        if accept(jt) {
            return true;
        }
        if jt != JoiningType::Transparent {
            return false;
        }
    }
    false
}

/// Checks the Bidi Rule of RFC 5893, Section 2.
///
/// Labels without any right-to-left character are not subject to the rule.
fn check_bidi(label: &[char]) -> bool {
    use BidiClass::*;

    let classes: Vec<BidiClass> = label.iter().map(|&ch| bidi_class(ch)).collect();
    if !classes.iter().any(|c| matches!(c, R | AL | AN)) {
        return true;
    }

    let rtl = match classes[0] {
        R | AL => true,
        L => false,
        _ => return false,
    };

    // Trailing NSMs do not count as the end of the label.
    let last = match classes.iter().rposition(|&c| c != NSM) {
        Some(i) => classes[i],
        None => return false,
    };

    if rtl {
        classes
            .iter()
            .all(|c| matches!(c, R | AL | AN | EN | ES | CS | ET | ON | BN | NSM))
            && matches!(last, R | AL | EN | AN)
            && !(classes.contains(&EN) && classes.contains(&AN))
    } else {
        classes
            .iter()
            .all(|c| matches!(c, L | EN | ES | CS | ET | ON | BN | NSM))
            && matches!(last, L | EN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn joiners() {
        // ZWJ after a virama (DEVANAGARI SIGN VIRAMA).
        assert!(check_joiners(&chars("\u{915}\u{94d}\u{200d}")));
        assert!(!check_joiners(&chars("a\u{200d}")));
        // ZWNJ between dual-joining Arabic letters.
        assert!(check_joiners(&chars("\u{628}\u{200c}\u{628}")));
        // ZWNJ with a transparent mark in between.
        assert!(check_joiners(&chars("\u{628}\u{64e}\u{200c}\u{628}")));
        assert!(!check_joiners(&chars("\u{200c}\u{628}")));
        assert!(!check_joiners(&chars("a\u{200c}b")));
        // A right-joining ALEF right before the ZWNJ blocks the context.
        assert!(!check_joiners(&chars("\u{628}\u{627}\u{200c}\u{628}")));
        assert!(!check_joiners(&chars("\u{627}\u{200c}\u{628}")));
    }

    #[test]
    fn bidi() {
        assert!(check_bidi(&chars("abc")));
        assert!(check_bidi(&chars("\u{5d0}\u{5d1}")));
        // RTL label ending in a European number.
        assert!(check_bidi(&chars("\u{5d0}1")));
        // LTR label containing an RTL character.
        assert!(!check_bidi(&chars("a\u{5d0}")));
        // RTL label mixing European and Arabic numbers.
        assert!(!check_bidi(&chars("\u{627}1\u{661}")));
        // RTL label starting with a digit.
        assert!(!check_bidi(&chars("1\u{5d0}")));
    }

    #[test]
    fn labels() {
        assert!(is_valid_label(""));
        assert!(!is_valid_label("\u{301}a"));
        assert!(!is_valid_label("a\u{2488}"));
    }
}
