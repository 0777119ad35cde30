//! Typed identifiers for catalog entities.
//!
//! The site uses plain numbers for shows, episodes and performers; the
//! newtypes keep the three id spaces from being mixed up at call sites.

use std::fmt;

/// Identifier of a radio show (the site's program id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RadioShowId(pub u64);

impl fmt::Display for RadioShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of an episode (the site's content id), unique across all shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EpisodeId(pub u64);

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a host or guest performer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonId(pub u64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a signed-in user. The site delivers it as a string of
/// digits; it is kept verbatim rather than parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
