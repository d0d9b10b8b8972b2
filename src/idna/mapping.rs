use super::table::TABLE;

/// The IDNA status of a code point, as listed in the UTS #46 mapping table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Status {
    Valid,
    Ignored,
    Mapped,
    Deviation,
    Disallowed,
}

/// Looks up the status of a character and, for mapped characters, its replacement.
pub(crate) fn lookup(ch: char) -> (Status, &'static str) {
    let cp = ch as u32;
    let i = match TABLE.binary_search_by_key(&cp, |&(first, ..)| first) {
        Ok(i) => i,
        // The first row starts at U+0000, so `i` is never zero here.
        Err(i) => i - 1,
    };
    let (_, status, mapping) = TABLE[i];
    (status, mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert_eq!(TABLE[0].0, 0);
        assert!(TABLE.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn lookups() {
        assert_eq!(lookup('a'), (Status::Valid, ""));
        assert_eq!(lookup('A'), (Status::Mapped, "a"));
        assert_eq!(lookup('_'), (Status::Valid, ""));
        assert_eq!(lookup('\u{1fae0}'), (Status::Valid, ""));
        assert_eq!(lookup('\u{ad}'), (Status::Ignored, ""));
        assert_eq!(lookup('ß').0, Status::Deviation);
        assert_eq!(lookup('\u{3002}'), (Status::Mapped, "."));
        assert_eq!(lookup('\u{ff21}'), (Status::Mapped, "a"));
        assert_eq!(lookup('\u{10ffff}').0, Status::Disallowed);
    }
}
