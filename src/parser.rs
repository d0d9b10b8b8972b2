use crate::{
    error::{ParseError, Reporter, ValidationError},
    host,
    pct_enc::{self, table},
    url::{self, Path, Url},
};
use core::{
    mem,
    ops::{Deref, DerefMut},
};

type Result<T> = core::result::Result<T, ParseError>;

pub(crate) fn parse<'a>(input: &str, base: Option<&'a Url>, reporter: Reporter<'a>) -> Result<Url> {
    let mut parser = Parser::new(input, base, reporter);
    match parser.run() {
        Ok(()) => Ok(parser.finish()),
        Err(e) => {
            tracing::debug!(
                target: "whatwg_url::parser",
                error = %e,
                pointer = parser.pos,
                "failed to parse URL"
            );
            Err(e)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    SchemeStart,
    Scheme,
    NoScheme,
    SpecialRelativeOrAuthority,
    PathOrAuthority,
    Relative,
    RelativeSlash,
    SpecialAuthoritySlashes,
    SpecialAuthorityIgnoreSlashes,
    Authority,
    Host,
    Port,
    File,
    FileSlash,
    FileHost,
    PathStart,
    Path,
    OpaquePath,
    Query,
    Fragment,
}

/// What the main loop does after a state has handled the current scalar.
enum Step {
    /// Moves on to the next scalar.
    Advance,
    /// Hands the current scalar to the new state.
    Reprocess,
}

/// URL parser.
///
/// # Invariants
///
/// `pos <= len`. `pos` only decreases when the authority buffer is
/// re-scanned as a host, or when scheme detection starts over.
///
/// The record is kept as loose fields during the scan, so that the segment
/// list and the opaque path stay separate until `finish` picks one of them.
struct Parser<'a> {
    reader: Reader,
    base: Option<&'a Url>,
    reporter: Reporter<'a>,
    state: State,
    buffer: String,
    at_sign_seen: bool,
    inside_brackets: bool,
    password_token_seen: bool,
    special: bool,

    scheme: String,
    username: String,
    password: String,
    host: Option<String>,
    port: Option<u16>,
    path: Vec<String>,
    opaque_path: Option<String>,
    query: Option<String>,
    fragment: Option<String>,
}

/// A cursor over the scalar values of the input.
struct Reader {
    input: Vec<char>,
    pos: usize,
}

impl<'a> Deref for Parser<'a> {
    type Target = Reader;

    fn deref(&self) -> &Self::Target {
        &self.reader
    }
}

impl<'a> DerefMut for Parser<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.reader
    }
}

impl Reader {
    fn len(&self) -> usize {
        self.input.len()
    }

    fn peek(&self, i: usize) -> Option<char> {
        self.input.get(self.pos + i).copied()
    }

    /// Returns the scalars from the current one to the end.
    fn rest(&self) -> &[char] {
        self.input.get(self.pos..).unwrap_or_default()
    }

    /// Returns the scalars after the current one.
    fn remaining(&self) -> &[char] {
        self.input.get(self.pos + 1..).unwrap_or_default()
    }
}

impl<'a> Parser<'a> {
    fn new(input: &str, base: Option<&'a Url>, reporter: Reporter<'a>) -> Self {
        let trimmed = input.trim_matches(|ch: char| ch <= ' ');
        if trimmed.len() != input.len() {
            reporter.report(ValidationError::InvalidUrlUnit);
        }
        if trimmed.contains(['\t', '\n', '\r']) {
            reporter.report(ValidationError::InvalidUrlUnit);
        }
        let input = trimmed
            .chars()
            .filter(|&ch| !matches!(ch, '\t' | '\n' | '\r'))
            .collect();

        Parser {
            reader: Reader { input, pos: 0 },
            base,
            reporter,
            state: State::SchemeStart,
            buffer: String::new(),
            at_sign_seen: false,
            inside_brackets: false,
            password_token_seen: false,
            special: false,
            scheme: String::new(),
            username: String::new(),
            password: String::new(),
            host: None,
            port: None,
            path: Vec::new(),
            opaque_path: None,
            query: None,
            fragment: None,
        }
    }

    fn run(&mut self) -> Result<()> {
        loop {
            let c = self.peek(0);
            match self.step(c)? {
                Step::Reprocess => continue,
                Step::Advance => {
                    if self.pos >= self.len() {
                        return Ok(());
                    }
                    self.pos += 1;
                }
            }
        }
    }

    fn finish(self) -> Url {
        Url {
            scheme: self.scheme,
            username: self.username,
            password: self.password,
            host: self.host,
            port: self.port,
            path: match self.opaque_path {
                Some(path) => Path::Opaque(path),
                None => Path::Segments(self.path),
            },
            query: self.query,
            fragment: self.fragment,
        }
    }

    fn step(&mut self, c: Option<char>) -> Result<Step> {
        match self.state {
            State::SchemeStart => Ok(self.scheme_start(c)),
            State::Scheme => Ok(self.scheme(c)),
            State::NoScheme => self.no_scheme(c),
            State::SpecialRelativeOrAuthority => Ok(self.special_relative_or_authority(c)),
            State::PathOrAuthority => Ok(self.path_or_authority(c)),
            State::Relative => self.relative(c),
            State::RelativeSlash => self.relative_slash(c),
            State::SpecialAuthoritySlashes => Ok(self.special_authority_slashes(c)),
            State::SpecialAuthorityIgnoreSlashes => Ok(self.special_authority_ignore_slashes(c)),
            State::Authority => self.authority(c),
            State::Host => self.host(c),
            State::Port => self.port(c),
            State::File => Ok(self.file(c)),
            State::FileSlash => Ok(self.file_slash(c)),
            State::FileHost => self.file_host(c),
            State::PathStart => Ok(self.path_start(c)),
            State::Path => Ok(self.path(c)),
            State::OpaquePath => Ok(self.opaque_path(c)),
            State::Query => Ok(self.query(c)),
            State::Fragment => Ok(self.fragment(c)),
        }
    }

    fn report(&self, err: ValidationError) {
        self.reporter.report_at(err, self.pos);
    }

    fn set_scheme(&mut self, scheme: String) {
        self.special = url::is_special_scheme(&scheme);
        self.scheme = scheme;
    }

    /// Returns `true` if `c` ends the authority, host or port.
    fn is_authority_end(&self, c: Option<char>) -> bool {
        match c {
            None | Some('/' | '?' | '#') => true,
            Some('\\') => self.special,
            Some(_) => false,
        }
    }

    /// Removes the last path segment, keeping a lone drive letter of a `file` URL.
    fn shorten_path(&mut self) {
        if self.scheme == "file"
            && self.path.len() == 1
            && is_normalized_windows_drive_letter(&self.path[0])
        {
            return;
        }
        self.path.pop();
    }

    fn copy_authority(&mut self, base: &Url) {
        self.username.clone_from(&base.username);
        self.password.clone_from(&base.password);
        self.host.clone_from(&base.host);
        self.port = base.port;
    }

    /// Reports units that may not appear in a valid URL.
    fn check_url_unit(&self, ch: char) {
        if ch == '%' {
            let hex = |i| self.peek(i).is_some_and(|x: char| x.is_ascii_hexdigit());
            if !(hex(1) && hex(2)) {
                self.report(ValidationError::InvalidUrlUnit);
            }
        } else if !is_url_code_point(ch) {
            self.report(ValidationError::InvalidUrlUnit);
        }
    }

    fn start_query(&mut self) -> Step {
        self.query = Some(String::new());
        self.state = State::Query;
        Step::Advance
    }

    fn start_fragment(&mut self) -> Step {
        self.fragment = Some(String::new());
        self.state = State::Fragment;
        Step::Advance
    }

    fn scheme_start(&mut self, c: Option<char>) -> Step {
        match c {
            Some(ch) if ch.is_ascii_alphabetic() => {
                self.buffer.push(ch.to_ascii_lowercase());
                self.state = State::Scheme;
                Step::Advance
            }
            _ => {
                self.state = State::NoScheme;
                Step::Reprocess
            }
        }
    }

    fn scheme(&mut self, c: Option<char>) -> Step {
        match c {
            Some(ch) if ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.') => {
                self.buffer.push(ch.to_ascii_lowercase());
            }
            Some(':') => {
                let scheme = mem::take(&mut self.buffer);
                self.set_scheme(scheme);

                if self.scheme == "file" {
                    if !self.remaining().starts_with(&['/', '/']) {
                        self.report(ValidationError::SpecialSchemeMissingFollowingSolidus);
                    }
                    self.state = State::File;
                } else if self.special
                    && self.base.is_some_and(|base| base.scheme == self.scheme)
                {
                    self.state = State::SpecialRelativeOrAuthority;
                } else if self.special {
                    self.state = State::SpecialAuthoritySlashes;
                } else if self.remaining().starts_with(&['/']) {
                    self.state = State::PathOrAuthority;
                    self.pos += 1;
                } else {
                    self.opaque_path = Some(String::new());
                    self.state = State::OpaquePath;
                }
            }
            _ => {
                // Not a scheme after all: start over.
                self.buffer.clear();
                self.state = State::NoScheme;
                self.pos = 0;
                return Step::Reprocess;
            }
        }
        Step::Advance
    }

    fn no_scheme(&mut self, c: Option<char>) -> Result<Step> {
        let Some(base) = self.base else {
            return Err(ParseError::MissingSchemeNonRelativeUrl);
        };

        match &base.path {
            Path::Opaque(path) => {
                if c != Some('#') {
                    return Err(ParseError::MissingSchemeNonRelativeUrl);
                }
                self.set_scheme(base.scheme.clone());
                self.opaque_path = Some(path.clone());
                self.query.clone_from(&base.query);
                Ok(self.start_fragment())
            }
            Path::Segments(_) => {
                self.state = if base.scheme == "file" {
                    State::File
                } else {
                    State::Relative
                };
                Ok(Step::Reprocess)
            }
        }
    }

    fn special_relative_or_authority(&mut self, c: Option<char>) -> Step {
        if c == Some('/') && self.peek(1) == Some('/') {
            self.state = State::SpecialAuthorityIgnoreSlashes;
            self.pos += 1;
            Step::Advance
        } else {
            self.report(ValidationError::SpecialSchemeMissingFollowingSolidus);
            self.state = State::Relative;
            Step::Reprocess
        }
    }

    fn path_or_authority(&mut self, c: Option<char>) -> Step {
        if c == Some('/') {
            self.state = State::Authority;
            Step::Advance
        } else {
            self.state = State::Path;
            Step::Reprocess
        }
    }

    fn relative(&mut self, c: Option<char>) -> Result<Step> {
        let Some(base) = self.base else {
            return Err(ParseError::MissingSchemeNonRelativeUrl);
        };
        self.set_scheme(base.scheme.clone());

        match c {
            Some('/') => {
                self.state = State::RelativeSlash;
                return Ok(Step::Advance);
            }
            Some('\\') if self.special => {
                self.report(ValidationError::InvalidReverseSolidus);
                self.state = State::RelativeSlash;
                return Ok(Step::Advance);
            }
            _ => {}
        }

        self.copy_authority(base);
        self.path = base.segments().to_vec();
        self.query.clone_from(&base.query);

        Ok(match c {
            Some('?') => self.start_query(),
            Some('#') => self.start_fragment(),
            Some(_) => {
                self.query = None;
                self.shorten_path();
                self.state = State::Path;
                Step::Reprocess
            }
            None => Step::Advance,
        })
    }

    fn relative_slash(&mut self, c: Option<char>) -> Result<Step> {
        match c {
            Some(ch @ ('/' | '\\')) if self.special => {
                if ch == '\\' {
                    self.report(ValidationError::InvalidReverseSolidus);
                }
                self.state = State::SpecialAuthorityIgnoreSlashes;
                Ok(Step::Advance)
            }
            Some('/') => {
                self.state = State::Authority;
                Ok(Step::Advance)
            }
            _ => {
                let Some(base) = self.base else {
                    return Err(ParseError::MissingSchemeNonRelativeUrl);
                };
                self.copy_authority(base);
                self.state = State::Path;
                Ok(Step::Reprocess)
            }
        }
    }

    fn special_authority_slashes(&mut self, c: Option<char>) -> Step {
        if c == Some('/') && self.peek(1) == Some('/') {
            self.state = State::SpecialAuthorityIgnoreSlashes;
            self.pos += 1;
            Step::Advance
        } else {
            self.report(ValidationError::SpecialSchemeMissingFollowingSolidus);
            self.state = State::SpecialAuthorityIgnoreSlashes;
            Step::Reprocess
        }
    }

    fn special_authority_ignore_slashes(&mut self, c: Option<char>) -> Step {
        if matches!(c, Some('/' | '\\')) {
            self.report(ValidationError::SpecialSchemeMissingFollowingSolidus);
            Step::Advance
        } else {
            self.state = State::Authority;
            Step::Reprocess
        }
    }

    fn authority(&mut self, c: Option<char>) -> Result<Step> {
        match c {
            Some('@') => {
                self.report(ValidationError::InvalidCredentials);
                if self.at_sign_seen {
                    self.buffer.insert_str(0, "%40");
                }
                self.at_sign_seen = true;

                for ch in self.buffer.chars() {
                    if ch == ':' && !self.password_token_seen {
                        self.password_token_seen = true;
                        continue;
                    }
                    let target = if self.password_token_seen {
                        &mut self.password
                    } else {
                        &mut self.username
                    };
                    table::USERINFO.encode_char_to(ch, target);
                }
                self.buffer.clear();
            }
            c if self.is_authority_end(c) => {
                if self.at_sign_seen && self.buffer.is_empty() {
                    return Err(ParseError::HostMissing);
                }
                // Re-scan the buffer as a host.
                let len = self.buffer.chars().count();
                self.pos -= len;
                self.buffer.clear();
                self.state = State::Host;
                return Ok(Step::Reprocess);
            }
            Some(ch) => self.buffer.push(ch),
            None => {}
        }
        Ok(Step::Advance)
    }

    fn host(&mut self, c: Option<char>) -> Result<Step> {
        match c {
            Some(':') if !self.inside_brackets => {
                if self.buffer.is_empty() {
                    return Err(ParseError::HostMissing);
                }
                self.host = Some(host::parse_reporting(
                    &self.buffer,
                    !self.special,
                    &self.reporter,
                )?);
                self.buffer.clear();
                self.state = State::Port;
                Ok(Step::Advance)
            }
            c if self.is_authority_end(c) => {
                if self.special && self.buffer.is_empty() {
                    return Err(ParseError::HostMissing);
                }
                self.host = Some(host::parse_reporting(
                    &self.buffer,
                    !self.special,
                    &self.reporter,
                )?);
                self.buffer.clear();
                self.state = State::PathStart;
                Ok(Step::Reprocess)
            }
            Some(ch) => {
                match ch {
                    '[' => self.inside_brackets = true,
                    ']' => self.inside_brackets = false,
                    _ => {}
                }
                self.buffer.push(ch);
                Ok(Step::Advance)
            }
            None => Ok(Step::Advance),
        }
    }

    fn port(&mut self, c: Option<char>) -> Result<Step> {
        match c {
            Some(ch) if ch.is_ascii_digit() => {
                self.buffer.push(ch);
                Ok(Step::Advance)
            }
            c if self.is_authority_end(c) => {
                if !self.buffer.is_empty() {
                    let port = self
                        .buffer
                        .bytes()
                        .try_fold(0u16, |acc, x| {
                            acc.checked_mul(10)?.checked_add(u16::from(x - b'0'))
                        })
                        .ok_or(ParseError::PortOutOfRange)?;
                    self.port = Some(port).filter(|&p| url::default_port(&self.scheme) != Some(p));
                    self.buffer.clear();
                }
                self.state = State::PathStart;
                Ok(Step::Reprocess)
            }
            _ => Err(ParseError::PortInvalid),
        }
    }

    fn file_base(&self) -> Option<&'a Url> {
        self.base.filter(|base| base.scheme == "file")
    }

    fn file(&mut self, c: Option<char>) -> Step {
        self.set_scheme("file".to_owned());
        self.host = Some(String::new());

        if let Some(ch @ ('/' | '\\')) = c {
            if ch == '\\' {
                self.report(ValidationError::InvalidReverseSolidus);
            }
            self.state = State::FileSlash;
            return Step::Advance;
        }

        let Some(base) = self.file_base() else {
            self.state = State::Path;
            return Step::Reprocess;
        };

        self.host.clone_from(&base.host);
        self.path = base.segments().to_vec();
        self.query.clone_from(&base.query);

        match c {
            Some('?') => self.start_query(),
            Some('#') => self.start_fragment(),
            Some(_) => {
                self.query = None;
                if starts_with_windows_drive_letter(self.rest()) {
                    self.report(ValidationError::FileInvalidWindowsDriveLetter);
                    self.path.clear();
                } else {
                    self.shorten_path();
                }
                self.state = State::Path;
                Step::Reprocess
            }
            None => Step::Advance,
        }
    }

    fn file_slash(&mut self, c: Option<char>) -> Step {
        if let Some(ch @ ('/' | '\\')) = c {
            if ch == '\\' {
                self.report(ValidationError::InvalidReverseSolidus);
            }
            self.state = State::FileHost;
            return Step::Advance;
        }

        if let Some(base) = self.file_base() {
            self.host.clone_from(&base.host);
            if !starts_with_windows_drive_letter(self.rest()) {
                if let Some(drive) = base
                    .segments()
                    .first()
                    .filter(|seg| is_normalized_windows_drive_letter(seg))
                {
                    self.path.push(drive.clone());
                }
            }
        }
        self.state = State::Path;
        Step::Reprocess
    }

    fn file_host(&mut self, c: Option<char>) -> Result<Step> {
        match c {
            None | Some('/' | '\\' | '?' | '#') => {
                if is_windows_drive_letter(&self.buffer) {
                    // The buffer is kept and becomes the first path segment.
                    self.report(ValidationError::FileInvalidWindowsDriveLetterHost);
                    self.state = State::Path;
                } else if self.buffer.is_empty() {
                    self.host = Some(String::new());
                    self.state = State::PathStart;
                } else {
                    let mut host = host::parse_reporting(&self.buffer, false, &self.reporter)?;
                    if host == "localhost" {
                        host.clear();
                    }
                    self.host = Some(host);
                    self.buffer.clear();
                    self.state = State::PathStart;
                }
                Ok(Step::Reprocess)
            }
            Some(ch) => {
                self.buffer.push(ch);
                Ok(Step::Advance)
            }
        }
    }

    fn path_start(&mut self, c: Option<char>) -> Step {
        if self.special {
            if c == Some('\\') {
                self.report(ValidationError::InvalidReverseSolidus);
            }
            self.state = State::Path;
            return match c {
                Some('/' | '\\') => Step::Advance,
                _ => Step::Reprocess,
            };
        }

        match c {
            Some('?') => self.start_query(),
            Some('#') => self.start_fragment(),
            Some(ch) => {
                self.state = State::Path;
                if ch == '/' {
                    Step::Advance
                } else {
                    Step::Reprocess
                }
            }
            None => Step::Advance,
        }
    }

    fn path(&mut self, c: Option<char>) -> Step {
        let is_sep = c == Some('/') || (self.special && c == Some('\\'));

        let ch = match c {
            Some(ch) if !is_sep && ch != '?' && ch != '#' => ch,
            _ => {
                if self.special && c == Some('\\') {
                    self.report(ValidationError::InvalidReverseSolidus);
                }

                if is_double_dot_segment(&self.buffer) {
                    self.shorten_path();
                    if !is_sep {
                        self.path.push(String::new());
                    }
                } else if is_single_dot_segment(&self.buffer) {
                    if !is_sep {
                        self.path.push(String::new());
                    }
                } else {
                    if self.scheme == "file"
                        && self.path.is_empty()
                        && is_windows_drive_letter(&self.buffer)
                    {
                        self.buffer.replace_range(1..2, ":");
                    }
                    let segment = mem::take(&mut self.buffer);
                    self.path.push(segment);
                }
                self.buffer.clear();

                return match c {
                    Some('?') => self.start_query(),
                    Some('#') => self.start_fragment(),
                    _ => Step::Advance,
                };
            }
        };

        self.check_url_unit(ch);
        table::PATH.encode_char_to(ch, &mut self.buffer);
        Step::Advance
    }

    fn opaque_path(&mut self, c: Option<char>) -> Step {
        match c {
            Some('?') => self.start_query(),
            Some('#') => self.start_fragment(),
            Some(ch) => {
                self.check_url_unit(ch);
                let path = self.opaque_path.get_or_insert_with(String::new);
                table::C0_CONTROL.encode_char_to(ch, path);
                Step::Advance
            }
            None => Step::Advance,
        }
    }

    fn query(&mut self, c: Option<char>) -> Step {
        match c {
            None | Some('#') => {
                let table = if self.special {
                    table::SPECIAL_QUERY
                } else {
                    table::QUERY
                };
                let query = self.query.get_or_insert_with(String::new);
                pct_enc::encode_to(&self.buffer, table, query);
                self.buffer.clear();

                if c == Some('#') {
                    self.start_fragment()
                } else {
                    Step::Advance
                }
            }
            Some(ch) => {
                self.check_url_unit(ch);
                self.buffer.push(ch);
                Step::Advance
            }
        }
    }

    fn fragment(&mut self, c: Option<char>) -> Step {
        if let Some(ch) = c {
            self.check_url_unit(ch);
            let fragment = self.fragment.get_or_insert_with(String::new);
            table::FRAGMENT.encode_char_to(ch, fragment);
        }
        Step::Advance
    }
}

/// Checks whether `ch` is a URL code point.
fn is_url_code_point(ch: char) -> bool {
    match ch {
        'a'..='z' | 'A'..='Z' | '0'..='9' => true,
        '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | '-' | '.' | '/' | ':' | ';'
        | '=' | '?' | '@' | '_' | '~' => true,
        '\u{a0}'..='\u{10fffd}' => {
            let cp = ch as u32;
            // Noncharacters.
            !((0xfdd0..=0xfdef).contains(&cp) || cp & 0xfffe == 0xfffe)
        }
        _ => false,
    }
}

fn is_windows_drive_letter(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(a), Some(':' | '|'), None) if a.is_ascii_alphabetic()
    )
}

fn is_normalized_windows_drive_letter(s: &str) -> bool {
    is_windows_drive_letter(s) && s.ends_with(':')
}

/// Checks whether the scalars start with a Windows drive letter that is a
/// whole path segment.
fn starts_with_windows_drive_letter(s: &[char]) -> bool {
    match s {
        [a, ':' | '|'] => a.is_ascii_alphabetic(),
        [a, ':' | '|', '/' | '\\' | '?' | '#', ..] => a.is_ascii_alphabetic(),
        _ => false,
    }
}

fn is_single_dot_segment(s: &str) -> bool {
    s == "." || s.eq_ignore_ascii_case("%2e")
}

fn is_double_dot_segment(s: &str) -> bool {
    matches!(s.len(), 2 | 4 | 6)
        && ["..", ".%2e", "%2e.", "%2e%2e"]
            .iter()
            .any(|dots| s.eq_ignore_ascii_case(dots))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn drive_letters() {
        assert!(is_windows_drive_letter("c:"));
        assert!(is_windows_drive_letter("C|"));
        assert!(!is_windows_drive_letter("c"));
        assert!(!is_windows_drive_letter("1:"));
        assert!(!is_windows_drive_letter("c:/"));
        assert!(is_normalized_windows_drive_letter("C:"));
        assert!(!is_normalized_windows_drive_letter("C|"));

        assert!(starts_with_windows_drive_letter(&chars("c:")));
        assert!(starts_with_windows_drive_letter(&chars("c|/foo")));
        assert!(starts_with_windows_drive_letter(&chars("c:#")));
        assert!(!starts_with_windows_drive_letter(&chars("c:x")));
        assert!(!starts_with_windows_drive_letter(&chars("c")));
    }

    #[test]
    fn dot_segments() {
        assert!(is_single_dot_segment("."));
        assert!(is_single_dot_segment("%2E"));
        assert!(!is_single_dot_segment(".."));
        assert!(is_double_dot_segment(".."));
        assert!(is_double_dot_segment(".%2E"));
        assert!(is_double_dot_segment("%2e."));
        assert!(is_double_dot_segment("%2E%2e"));
        assert!(!is_double_dot_segment("..."));
        assert!(!is_double_dot_segment("%2e"));
    }

    #[test]
    fn url_code_points() {
        assert!(is_url_code_point('a'));
        assert!(is_url_code_point('~'));
        assert!(is_url_code_point('\u{e9}'));
        assert!(!is_url_code_point(' '));
        assert!(!is_url_code_point('"'));
        assert!(!is_url_code_point('\u{fdd0}'));
        assert!(!is_url_code_point('\u{1fffe}'));
        assert!(!is_url_code_point('\u{10ffff}'));
    }

    #[test]
    fn authority_rewinds_to_host() {
        let url = parse("http://user@host:81/", None, Reporter::default()).unwrap();
        assert_eq!(url.username, "user");
        assert_eq!(url.host.as_deref(), Some("host"));
        assert_eq!(url.port, Some(81));
    }

    #[test]
    fn scheme_starts_over() {
        let base = parse("http://example.com/a/b", None, Reporter::default()).unwrap();
        let url = parse("c+d/e", Some(&base), Reporter::default()).unwrap();
        assert_eq!(url.scheme, "http");
        assert_eq!(url.path, Path::Segments(vec!["a".into(), "c+d".into(), "e".into()]));
    }
}
