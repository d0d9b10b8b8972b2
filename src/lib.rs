#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]

//! A URL parser that follows the [WHATWG URL Standard].
//!
//! [WHATWG URL Standard]: https://url.spec.whatwg.org/
//!
//! See the documentation of [`Url`] for more details.
//!
//! Parsing reproduces the behavior of web browsers: the input is run through
//! the state machine of the standard, which decomposes it into a scheme,
//! credentials, a host, a port, a path, a query and a fragment, resolves it
//! against an optional base URL, and percent-encodes each component with its
//! encode set. Hosts are further processed into domains (with [UTS #46]
//! mapping and [Punycode]), IPv4 addresses, IPv6 addresses or opaque hosts.
//!
//! [UTS #46]: https://www.unicode.org/reports/tr46/
//! [Punycode]: https://datatracker.ietf.org/doc/html/rfc3492
//!
//! # Validation errors
//!
//! Input that is accepted but not valid per the standard raises
//! [`ValidationError`]s. These never fail a parse. They are emitted as
//! `debug` events with the [`tracing`] crate, under the target
//! `whatwg_url::validation`, and can be collected with
//! [`ParseOptions::validation_callback`].
//!
//! [`tracing`]: https://docs.rs/tracing
//!
//! # Feature flags
//!
//! All features are disabled by default.
//!
//! - `serde`: Enables [`serde`] support, with a [`Url`] serialized as its href.
//!
//! [`serde`]: https://docs.rs/serde

mod error;
mod fmt;
pub mod host;
pub mod idna;
mod parser;
pub mod pct_enc;
mod url;

pub use error::{ParseError, ValidationError};
pub use url::{Origin, ParseOptions, Url};
