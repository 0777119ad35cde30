//! Domain model for the onsen.ag radio catalog.
//!
//! [`nuxt`] holds the raw decoded document; [`Catalog`] and the wrapper types
//! ([`RadioShow`], [`Episode`], [`Person`], [`User`]) are read-only views over
//! it that compute derived fields (guessed dates, media variants) on access.

pub mod catalog;
pub mod dates;
pub mod episode;
pub mod error;
pub mod ids;
pub mod nuxt;
pub mod person;
pub mod show;
pub mod user;

pub use catalog::Catalog;
pub use episode::{Episode, MediaKind};
pub use error::CoreError;
pub use ids::{EpisodeId, PersonId, RadioShowId, UserId};
pub use person::Person;
pub use show::RadioShow;
pub use user::User;
