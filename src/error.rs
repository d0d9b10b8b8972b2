use thiserror::Error;

/// An error occurred when parsing a URL.
///
/// Each variant is a failure condition named by the URL Standard, and displays
/// as that name. Which variant is reported for a given input is a diagnostic
/// aid only: callers should rely on success or failure alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Domain-to-ASCII processing failed or produced an empty domain.
    #[error("domain-to-ASCII")]
    DomainToAscii,
    /// The ASCII domain contains a forbidden domain code point.
    #[error("domain-invalid-code-point")]
    DomainInvalidCodePoint,
    /// An opaque host contains a forbidden host code point.
    #[error("host-invalid-code-point")]
    HostInvalidCodePoint,
    /// An IPv4 address has more than four parts.
    #[error("IPv4-too-many-parts")]
    Ipv4TooManyParts,
    /// An IPv4 part is empty or not a number.
    #[error("IPv4-non-numeric-part")]
    Ipv4NonNumericPart,
    /// An IPv4 part exceeds its permitted range.
    #[error("IPv4-out-of-range-part")]
    Ipv4OutOfRangePart,
    /// An IPv6 address is missing the closing `]`.
    #[error("IPv6-unclosed")]
    Ipv6Unclosed,
    /// An IPv6 address begins with a single `:`.
    #[error("IPv6-invalid-compression")]
    Ipv6InvalidCompression,
    /// An IPv6 address has more than eight pieces.
    #[error("IPv6-too-many-pieces")]
    Ipv6TooManyPieces,
    /// An IPv6 address is compressed in more than one spot.
    #[error("IPv6-multiple-compression")]
    Ipv6MultipleCompressions,
    /// An IPv6 address contains an unexpected code point or ends with `:`.
    #[error("IPv6-invalid-code-point")]
    Ipv6InvalidCodePoint,
    /// An uncompressed IPv6 address has fewer than eight pieces.
    #[error("IPv6-too-few-pieces")]
    Ipv6TooFewPieces,
    /// An IPv6 address with IPv4 syntax has more than six pieces before it.
    #[error("IPv4-in-IPv6-too-many-pieces")]
    Ipv4InIpv6TooManyPieces,
    /// The IPv4 part of an IPv6 address is malformed.
    #[error("IPv4-in-IPv6-invalid-code-point")]
    Ipv4InIpv6InvalidCodePoint,
    /// A part of the IPv4 part of an IPv6 address is greater than 255.
    #[error("IPv4-in-IPv6-out-of-range-part")]
    Ipv4InIpv6OutOfRangePart,
    /// The IPv4 part of an IPv6 address has fewer than four parts.
    #[error("IPv4-in-IPv6-too-few-parts")]
    Ipv4InIpv6TooFewParts,
    /// The input has no scheme and no usable base URL.
    #[error("missing-scheme-non-relative-URL")]
    MissingSchemeNonRelativeUrl,
    /// A special URL, or a URL with credentials, has an empty host.
    #[error("host-missing")]
    HostMissing,
    /// The port is greater than 65535.
    #[error("port-out-of-range")]
    PortOutOfRange,
    /// The port contains a code point other than an ASCII digit.
    #[error("port-invalid")]
    PortInvalid,
}

/// A non-fatal violation of the URL syntax.
///
/// Validation errors never cause a parse to fail. They are traced with the
/// `tracing` crate and handed to the callback set with
/// [`ParseOptions::validation_callback`], if any.
///
/// [`ParseOptions::validation_callback`]: crate::ParseOptions::validation_callback
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A code point that is not a URL unit, a stray `%`, leading or trailing
    /// C0 controls and spaces, or an ASCII tab or newline.
    #[error("invalid-URL-unit")]
    InvalidUrlUnit,
    /// A special scheme is not followed by `//`.
    #[error("special-scheme-missing-following-solidus")]
    SpecialSchemeMissingFollowingSolidus,
    /// A special URL uses `\` as a path separator.
    #[error("invalid-reverse-solidus")]
    InvalidReverseSolidus,
    /// The URL includes credentials.
    #[error("invalid-credentials")]
    InvalidCredentials,
    /// A file URL path starting with a Windows drive letter is resolved
    /// against a base.
    #[error("file-invalid-Windows-drive-letter")]
    FileInvalidWindowsDriveLetter,
    /// A file URL host is a Windows drive letter.
    #[error("file-invalid-Windows-drive-letter-host")]
    FileInvalidWindowsDriveLetterHost,
    /// An IPv4 address ends with a `.`.
    #[error("IPv4-empty-part")]
    Ipv4EmptyPart,
    /// An IPv4 part uses hexadecimal or octal notation.
    #[error("IPv4-non-decimal-part")]
    Ipv4NonDecimalPart,
}

/// Where validation errors raised during a parse are sent.
#[derive(Clone, Copy, Default)]
pub(crate) struct Reporter<'a> {
    callback: Option<&'a dyn Fn(ValidationError)>,
}

impl<'a> Reporter<'a> {
    pub(crate) fn new(callback: Option<&'a dyn Fn(ValidationError)>) -> Self {
        Self { callback }
    }

    pub(crate) fn report(&self, err: ValidationError) {
        tracing::debug!(target: "whatwg_url::validation", error = %err, "validation error");
        if let Some(callback) = self.callback {
            callback(err);
        }
    }

    pub(crate) fn report_at(&self, err: ValidationError, pointer: usize) {
        tracing::debug!(target: "whatwg_url::validation", error = %err, pointer, "validation error");
        if let Some(callback) = self.callback {
            callback(err);
        }
    }
}
