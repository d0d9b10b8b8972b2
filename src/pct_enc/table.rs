//! Percent-encode sets from the URL Standard.
//!
//! Each constant in this module is the *complement* of a percent-encode set:
//! it lists the ASCII characters that are copied through unchanged. Every
//! character a table does not allow, and every non-ASCII character, is
//! percent-encoded as the bytes of its UTF-8 encoding.

use super::{encode_byte, Encode};

/// A table specifying the ASCII characters that are left unencoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table(u64, u64);

impl Table {
    /// Creates a table that only allows the given unencoded bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0u128;
        while let [cur, rem @ ..] = bytes {
            assert!(cur.is_ascii(), "cannot allow non-ASCII byte");
            table |= 1u128 << *cur;
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Creates a table that allows every byte in the inclusive range `lo..=hi`.
    ///
    /// # Panics
    ///
    /// Panics if `hi` is not ASCII or is less than `lo`.
    #[must_use]
    pub const fn range(lo: u8, hi: u8) -> Self {
        assert!(hi.is_ascii() && lo <= hi, "invalid ASCII range");
        let mut table = 0u128;
        let mut i = lo;
        while i <= hi {
            table |= 1u128 << i;
            if i == hi {
                break;
            }
            i += 1;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the characters allowed
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Subtracts from this table.
    ///
    /// Returns a new table that allows all the characters allowed
    /// by `self` but not allowed by `other`.
    #[must_use]
    pub const fn sub(self, other: Self) -> Self {
        Self(self.0 & !other.0, self.1 & !other.1)
    }

    /// Checks whether the table is a subset of another, i.e., `other`
    /// allows at least all the characters allowed by `self`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0 && self.1 & other.1 == self.1
    }

    #[inline]
    pub(crate) const fn allows_ascii(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0
        } else if x < 128 {
            self.1
        } else {
            0
        };
        table & 1u64.wrapping_shl(x as u32) != 0
    }

    /// Checks whether the given character is left unencoded by the table.
    #[inline]
    #[must_use]
    pub const fn allows(self, ch: char) -> bool {
        ch.is_ascii() && self.allows_ascii(ch as u8)
    }

    /// Validates the given string with the table.
    ///
    /// A string is valid if every byte is either allowed or a `'%'`,
    /// which is what percent-encoding a string with the table produces.
    pub(crate) const fn validate(self, s: &[u8]) -> bool {
        let mut i = 0;
        while i < s.len() {
            let x = s[i];
            if x != b'%' && !self.allows_ascii(x) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Returns an iterator used to percent-encode the given string with the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use whatwg_url::pct_enc::table::FRAGMENT;
    ///
    /// let s: String = FRAGMENT.encode("a b»").map(|chunk| chunk.as_str()).collect();
    /// assert_eq!(s, "a%20b%C2%BB");
    /// ```
    pub fn encode(self, s: &str) -> Encode<'_> {
        Encode::new(self, s)
    }

    /// Percent-encodes a single character with the table, appending the result to `buf`.
    #[inline]
    pub(crate) fn encode_char_to(self, ch: char, buf: &mut String) {
        if self.allows(ch) {
            buf.push(ch);
        } else {
            for &x in ch.encode_utf8(&mut [0; 4]).as_bytes() {
                buf.push_str(encode_byte(x));
            }
        }
    }
}

/// Everything outside the C0 control percent-encode set, i.e. U+0020 to U+007E.
pub const C0_CONTROL: Table = Table::range(0x20, 0x7e);

/// Everything outside the fragment percent-encode set.
///
/// The set is the C0 control set plus space, `"`, `<`, `>` and `` ` ``.
pub const FRAGMENT: Table = C0_CONTROL.sub(Table::new(b" \"<>`"));

/// Everything outside the query percent-encode set.
///
/// The set is the C0 control set plus space, `"`, `#`, `<` and `>`.
pub const QUERY: Table = C0_CONTROL.sub(Table::new(b" \"#<>"));

/// Everything outside the special-query percent-encode set: [`QUERY`] minus `'`.
pub const SPECIAL_QUERY: Table = QUERY.sub(Table::new(b"'"));

/// Everything outside the path percent-encode set: [`QUERY`] minus `?`, `` ` ``, `{` and `}`.
pub const PATH: Table = QUERY.sub(Table::new(b"?`{}"));

/// Everything outside the userinfo percent-encode set.
///
/// The set is the path set plus `/`, `:`, `;`, `=`, `@`, `[`, `\`, `]`, `^` and `|`.
pub const USERINFO: Table = PATH.sub(Table::new(b"/:;=@[\\]^|"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_nest() {
        assert!(USERINFO.is_subset(PATH));
        assert!(PATH.is_subset(QUERY));
        assert!(SPECIAL_QUERY.is_subset(QUERY));
        assert!(QUERY.is_subset(C0_CONTROL));
        assert!(FRAGMENT.is_subset(C0_CONTROL));
    }

    #[test]
    fn c0_control_bounds() {
        assert!(!C0_CONTROL.allows('\u{1f}'));
        assert!(C0_CONTROL.allows(' '));
        assert!(C0_CONTROL.allows('~'));
        assert!(!C0_CONTROL.allows('\u{7f}'));
        assert!(!C0_CONTROL.allows('é'));
    }

    #[test]
    fn percent_sign_is_never_encoded() {
        for table in [C0_CONTROL, FRAGMENT, QUERY, SPECIAL_QUERY, PATH, USERINFO] {
            assert!(table.allows('%'));
        }
    }

    #[test]
    fn members() {
        assert!(!SPECIAL_QUERY.allows('\''));
        assert!(QUERY.allows('\''));
        assert!(!PATH.allows('{'));
        assert!(PATH.allows('^'));
        assert!(!USERINFO.allows('^'));
        assert!(FRAGMENT.allows('#'));
        assert!(!QUERY.allows('#'));
    }
}
