//! Percent-encoding utilities.

pub mod encoder;
pub mod table;

pub use table::Table;

use ref_cast::{ref_cast_custom, RefCastCustom};
use std::{borrow::Cow, hash, iter::FusedIterator, marker::PhantomData, str};

/// A trait used by [`EStr`] to specify the table a component was encoded with.
pub trait Encoder: 'static {
    /// The table used for encoding.
    const TABLE: Table;
}

/// Percent-encoded string slices.
///
/// URL components stored in a [`Url`] are already percent-encoded, and are
/// handed out as `EStr` slices parameterized by the [`Encoder`] that produced
/// them. Decoding follows the URL Standard: a `'%'` that does not start a
/// valid percent-encoded octet stands for itself.
///
/// # Examples
///
/// Parse key-value pairs from a query into a hash map:
///
/// ```
/// use whatwg_url::{pct_enc::EStr, Url};
/// use std::collections::HashMap;
///
/// let url = Url::parse("https://example.com/?name=%E5%BC%A0%E4%B8%89&speech=%C2%A1Ol%C3%A9%21")?;
/// let map: HashMap<_, _> = url
///     .query()
///     .unwrap()
///     .split('&')
///     .map(|s| s.split_once('=').unwrap_or((s, EStr::EMPTY)))
///     .map(|(k, v)| (k.decode().to_string_lossy(), v.decode().to_string_lossy()))
///     .collect();
/// assert_eq!(map["name"], "张三");
/// assert_eq!(map["speech"], "¡Olé!");
/// # Ok::<_, whatwg_url::ParseError>(())
/// ```
///
/// [`Url`]: crate::Url
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct EStr<E: Encoder> {
    encoder: PhantomData<E>,
    inner: str,
}

impl<E: Encoder> EStr<E> {
    /// Converts a string slice to an `EStr` slice assuming validity.
    #[ref_cast_custom]
    pub(crate) const fn new_validated(s: &str) -> &Self;

    /// An empty `EStr` slice.
    pub const EMPTY: &'static Self = Self::new_validated("");

    /// Converts a string slice to an `EStr` slice, returning `None` if the
    /// string contains a character that `E` would have encoded.
    #[must_use]
    pub const fn new(s: &str) -> Option<&Self> {
        if E::TABLE.validate(s.as_bytes()) {
            Some(Self::new_validated(s))
        } else {
            None
        }
    }

    /// Converts a string slice to an `EStr` slice.
    ///
    /// # Panics
    ///
    /// Panics if the string is not properly encoded with `E`.
    /// For a non-panicking variant, use [`new`](Self::new).
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Self {
        match Self::new(s) {
            Some(s) => s,
            None => panic!("improperly encoded string"),
        }
    }

    /// Yields the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the length of the `EStr` slice in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks whether the `EStr` slice is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator used to decode the `EStr` slice.
    ///
    /// Always **split before decoding**, as otherwise the data may be
    /// mistaken for component delimiters.
    ///
    /// # Examples
    ///
    /// ```
    /// use whatwg_url::pct_enc::{encoder::Path, EStr};
    ///
    /// let dec = EStr::<Path>::new_or_panic("%C2%A1Hola%21%zz").decode();
    /// assert_eq!(dec.to_string().unwrap(), "¡Hola!%zz");
    /// ```
    pub fn decode(&self) -> Decode<'_> {
        Decode::new(&self.inner)
    }

    /// Returns an iterator over subslices of the `EStr` slice separated by the given delimiter.
    ///
    /// # Examples
    ///
    /// ```
    /// use whatwg_url::pct_enc::{encoder::Query, EStr};
    ///
    /// assert!(EStr::<Query>::new_or_panic("a&b&c").split('&').eq(["a", "b", "c"]));
    /// assert!(EStr::<Query>::EMPTY.split('&').eq([""]));
    /// ```
    pub fn split(&self, delim: char) -> Split<'_, E> {
        Split {
            inner: self.inner.split(delim),
            encoder: PhantomData,
        }
    }

    /// Splits the `EStr` slice on the first occurrence of the given delimiter and
    /// returns prefix before delimiter and suffix after delimiter.
    ///
    /// Returns `None` if the delimiter is not found.
    #[must_use]
    pub fn split_once(&self, delim: char) -> Option<(&Self, &Self)> {
        self.inner
            .split_once(delim)
            .map(|(a, b)| (Self::new_validated(a), Self::new_validated(b)))
    }
}

impl<E: Encoder> AsRef<str> for EStr<E> {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl<E: Encoder> PartialEq for EStr<E> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<E: Encoder> PartialEq<str> for EStr<E> {
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl<E: Encoder> PartialEq<EStr<E>> for str {
    fn eq(&self, other: &EStr<E>) -> bool {
        self == &other.inner
    }
}

impl<E: Encoder> Eq for EStr<E> {}

impl<E: Encoder> hash::Hash for EStr<E> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<E: Encoder> Default for &EStr<E> {
    /// Creates an empty `EStr` slice.
    fn default() -> Self {
        EStr::EMPTY
    }
}

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet, assuming that the bytes are hexadecimal.
fn decode_octet(hi: u8, lo: u8) -> u8 {
    debug_assert!(hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit());
    OCTET_TABLE_HI[hi as usize] | OCTET_TABLE_LO[lo as usize]
}

/// Finds the index of the first `'%'` that starts a valid percent-encoded octet.
fn find_octet(s: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 2 < s.len() {
        if s[i] == b'%' && s[i + 1].is_ascii_hexdigit() && s[i + 2].is_ascii_hexdigit() {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// An iterator used to decode an [`EStr`] slice.
///
/// This struct is created by [`EStr::decode`]. Normally you'll use the methods below
/// instead of iterating over a `Decode` manually.
///
/// See the [`DecodedChunk`] type for documentation of the items yielded by this iterator.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Decode<'a> {
    source: &'a str,
}

/// An item returned by the [`Decode`] iterator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodedChunk<'a> {
    /// An unencoded subslice, possibly containing stray `'%'` characters.
    Unencoded(&'a str),
    /// A percent-encoded octet, decoded (for example, `"%20"` decoded as `0x20`).
    PctDecoded(u8),
}

impl<'a> Decode<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Decodes the slice to bytes.
    ///
    /// This method allocates only when the slice contains any percent-encoded octet.
    #[must_use]
    pub fn to_bytes(self) -> Cow<'a, [u8]> {
        decode(self.source.as_bytes())
    }

    /// Attempts to decode the slice to a string.
    ///
    /// This method allocates only when the slice contains any percent-encoded octet.
    ///
    /// # Errors
    ///
    /// Returns `Err` containing the decoded bytes if they are not valid UTF-8.
    pub fn to_string(self) -> Result<Cow<'a, str>, Vec<u8>> {
        let source = self.source;
        match self.to_bytes() {
            Cow::Borrowed(_) => Ok(Cow::Borrowed(source)),
            Cow::Owned(bytes) => String::from_utf8(bytes)
                .map(Cow::Owned)
                .map_err(|e| e.into_bytes()),
        }
    }

    /// Decodes the slice to a string, replacing any invalid UTF-8 sequences with
    /// [`U+FFFD REPLACEMENT CHARACTER`][U+FFFD].
    ///
    /// [U+FFFD]: char::REPLACEMENT_CHARACTER
    ///
    /// This method allocates only when the slice contains any percent-encoded octet.
    #[must_use]
    pub fn to_string_lossy(self) -> Cow<'a, str> {
        let source = self.source;
        match self.to_bytes() {
            Cow::Borrowed(_) => Cow::Borrowed(source),
            Cow::Owned(bytes) => Cow::Owned(match String::from_utf8(bytes) {
                Ok(s) => s,
                Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
            }),
        }
    }
}

impl<'a> Iterator for Decode<'a> {
    type Item = DecodedChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.source.is_empty() {
            return None;
        }
        let bytes = self.source.as_bytes();
        match find_octet(bytes, 0) {
            Some(0) => {
                let x = decode_octet(bytes[1], bytes[2]);
                self.source = &self.source[3..];
                Some(DecodedChunk::PctDecoded(x))
            }
            Some(i) => {
                let s;
                (s, self.source) = self.source.split_at(i);
                Some(DecodedChunk::Unencoded(s))
            }
            None => {
                let s = self.source;
                self.source = "";
                Some(DecodedChunk::Unencoded(s))
            }
        }
    }
}

impl FusedIterator for Decode<'_> {}

/// Percent-decodes a byte sequence.
///
/// A `'%'` followed by two ASCII hex digits is replaced by the byte they
/// denote. Every other byte, including a `'%'` that does not start such a
/// triple, passes through unchanged.
///
/// This function allocates only when the input contains any percent-encoded octet.
///
/// # Examples
///
/// ```
/// use whatwg_url::pct_enc::decode;
///
/// assert_eq!(&*decode(b"%41%2"), b"A%2");
/// assert_eq!(&*decode(b"%%30"), b"%0");
/// ```
#[must_use]
pub fn decode(s: &[u8]) -> Cow<'_, [u8]> {
    let Some(mut i) = find_octet(s, 0) else {
        return Cow::Borrowed(s);
    };

    let mut buf = Vec::with_capacity(s.len());
    let mut start = 0;
    loop {
        buf.extend_from_slice(&s[start..i]);
        buf.push(decode_octet(s[i + 1], s[i + 2]));
        start = i + 3;
        match find_octet(s, start) {
            Some(next) => i = next,
            None => break,
        }
    }
    buf.extend_from_slice(&s[start..]);
    Cow::Owned(buf)
}

/// Percent-encodes a string with the given table, appending the result to `buf`.
pub fn encode_to(s: &str, table: Table, buf: &mut String) {
    for chunk in table.encode(s) {
        buf.push_str(chunk.as_str());
    }
}

/// Percent-encodes a string with the given table.
///
/// This function allocates only when some character needs encoding.
///
/// # Examples
///
/// ```
/// use whatwg_url::pct_enc::{encode, table::USERINFO};
///
/// assert_eq!(encode("user:pa ss", USERINFO), "user%3Apa%20ss");
/// assert_eq!(encode("plain", USERINFO), "plain");
/// ```
#[must_use]
pub fn encode(s: &str, table: Table) -> Cow<'_, str> {
    let mut iter = table.encode(s);
    match iter.next() {
        None => Cow::Borrowed(""),
        Some(EncodedChunk::Unencoded(first)) if first.len() == s.len() => Cow::Borrowed(first),
        Some(first) => {
            let mut buf = String::with_capacity(s.len() + 8);
            buf.push_str(first.as_str());
            for chunk in iter {
                buf.push_str(chunk.as_str());
            }
            Cow::Owned(buf)
        }
    }
}

pub(crate) fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

/// An iterator used to percent-encode a string slice.
///
/// This struct is created by [`Table::encode`].
///
/// See the [`EncodedChunk`] type for documentation of the items yielded by this iterator.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Encode<'s> {
    table: Table,
    source: &'s str,
    to_enc: &'s [u8],
}

impl<'s> Encode<'s> {
    pub(crate) fn new(table: Table, source: &'s str) -> Self {
        Self {
            table,
            source,
            to_enc: &[],
        }
    }
}

/// An item returned by the [`Encode`] iterator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodedChunk<'a> {
    /// An unencoded subslice.
    Unencoded(&'a str),
    /// A byte, percent-encoded (for example, `0x20` encoded as `"%20"`).
    PctEncoded(&'static str),
}

impl<'a> EncodedChunk<'a> {
    /// Returns the chunk as a string slice.
    #[must_use]
    pub fn as_str(self) -> &'a str {
        match self {
            Self::Unencoded(s) | Self::PctEncoded(s) => s,
        }
    }
}

impl<'a> Iterator for Encode<'a> {
    type Item = EncodedChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let [x, rem @ ..] = self.to_enc {
            self.to_enc = rem;
            return Some(EncodedChunk::PctEncoded(encode_byte(*x)));
        }

        if self.source.is_empty() {
            return None;
        }

        let mut iter = self.source.char_indices();

        let first_unallowed_i = iter
            .find_map(|(i, ch)| (!self.table.allows(ch)).then_some(i))
            .unwrap_or(self.source.len());

        let next_allowed_i = iter
            .find_map(|(i, ch)| self.table.allows(ch).then_some(i))
            .unwrap_or(self.source.len());

        if first_unallowed_i == 0 {
            let (unallowed, rem) = self.source.split_at(next_allowed_i);
            self.source = rem;

            let [x, rem @ ..] = unallowed.as_bytes() else {
                return None;
            };
            self.to_enc = rem;

            Some(EncodedChunk::PctEncoded(encode_byte(*x)))
        } else {
            let allowed = &self.source[..first_unallowed_i];
            self.to_enc = &self.source.as_bytes()[first_unallowed_i..next_allowed_i];
            self.source = &self.source[next_allowed_i..];

            Some(EncodedChunk::Unencoded(allowed))
        }
    }
}

impl FusedIterator for Encode<'_> {}

/// An iterator over subslices of an [`EStr`] slice separated by a delimiter.
///
/// This struct is created by [`EStr::split`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Split<'a, E: Encoder> {
    inner: str::Split<'a, char>,
    encoder: PhantomData<E>,
}

impl<'a, E: Encoder> Iterator for Split<'a, E> {
    type Item = &'a EStr<E>;

    fn next(&mut self) -> Option<&'a EStr<E>> {
        self.inner.next().map(EStr::new_validated)
    }
}

impl<'a, E: Encoder> DoubleEndedIterator for Split<'a, E> {
    fn next_back(&mut self) -> Option<&'a EStr<E>> {
        self.inner.next_back().map(EStr::new_validated)
    }
}

impl<E: Encoder> FusedIterator for Split<'_, E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_iter_chunks() {
        let chunks: Vec<_> = Decode::new("a%20%zz%4").collect();
        assert_eq!(
            chunks,
            [
                DecodedChunk::Unencoded("a"),
                DecodedChunk::PctDecoded(b' '),
                DecodedChunk::Unencoded("%zz%4"),
            ]
        );
    }

    #[test]
    fn decode_lossy() {
        assert_eq!(Decode::new("%FF%41").to_string_lossy(), "\u{fffd}A");
        assert_eq!(Decode::new("%FF").to_string(), Err(vec![0xff]));
        assert!(matches!(Decode::new("abc").to_string_lossy(), Cow::Borrowed("abc")));
        assert_eq!(Decode::new("a%zz").to_string(), Ok(Cow::Borrowed("a%zz")));
    }
}
