//! Percent-encoders for URL components.

use super::{table, Encoder, Table};

/// An encoder for usernames and passwords.
#[derive(Clone, Copy, Debug)]
pub struct Userinfo(());

impl Encoder for Userinfo {
    const TABLE: Table = table::USERINFO;
}

/// An encoder for path segments.
#[derive(Clone, Copy, Debug)]
pub struct Path(());

impl Encoder for Path {
    const TABLE: Table = table::PATH;
}

/// An encoder for opaque paths and opaque hosts.
#[derive(Clone, Copy, Debug)]
pub struct C0Control(());

impl Encoder for C0Control {
    const TABLE: Table = table::C0_CONTROL;
}

/// An encoder for the query of a URL with a non-special scheme.
///
/// Queries of special URLs are encoded with [`SpecialQuery`], whose table
/// is a subset of this one. Both are exposed as `EStr<Query>`.
#[derive(Clone, Copy, Debug)]
pub struct Query(());

impl Encoder for Query {
    const TABLE: Table = table::QUERY;
}

/// An encoder for the query of a URL with a special scheme.
#[derive(Clone, Copy, Debug)]
pub struct SpecialQuery(());

impl Encoder for SpecialQuery {
    const TABLE: Table = table::SPECIAL_QUERY;
}

/// An encoder for the fragment.
#[derive(Clone, Copy, Debug)]
pub struct Fragment(());

impl Encoder for Fragment {
    const TABLE: Table = table::FRAGMENT;
}
