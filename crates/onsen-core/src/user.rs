//! Read-through view of the signed-in user's account state.

use crate::error::CoreError;
use crate::ids::{EpisodeId, PersonId, RadioShowId, UserId};
use crate::nuxt;

/// The signed-in identity. Absent entirely for anonymous sessions; when
/// present, every id sequence is defined (possibly empty), never null.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct User<'a> {
    raw: &'a nuxt::Signin,
}

impl<'a> User<'a> {
    pub(crate) fn new(raw: &'a nuxt::Signin) -> Self {
        Self { raw }
    }

    /// Wraps a raw signin record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NilConstruction`] when `raw` is absent.
    pub fn from_raw(raw: Option<&'a nuxt::Signin>) -> Result<Self, CoreError> {
        raw.map(Self::new)
            .ok_or(CoreError::NilConstruction { what: "signin" })
    }

    #[must_use]
    pub fn email(&self) -> &'a str {
        &self.raw.email
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId(self.raw.id.clone())
    }

    /// Ids of the performers the user follows.
    #[must_use]
    pub fn following_people(&self) -> Vec<PersonId> {
        self.raw
            .favorite_performer_ids
            .iter()
            .map(|&id| PersonId(id))
            .collect()
    }

    /// Ids of the shows the user follows.
    #[must_use]
    pub fn following_shows(&self) -> Vec<RadioShowId> {
        self.raw
            .favorite_program_ids
            .iter()
            .map(|&id| RadioShowId(id))
            .collect()
    }

    /// Ids of the episodes on the user's playlist.
    #[must_use]
    pub fn playlist_episodes(&self) -> Vec<EpisodeId> {
        self.raw
            .playlisted_content_ids
            .iter()
            .map(|&id| EpisodeId(id))
            .collect()
    }
}
