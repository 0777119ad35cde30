//! Read-through view of one episode record.

use chrono::{DateTime, FixedOffset};

use crate::dates;
use crate::error::CoreError;
use crate::ids::{EpisodeId, RadioShowId};
use crate::nuxt;

/// Media variant of an episode, chosen by the raw `media_type` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
}

/// One episode of a radio show, borrowing its raw record from the document.
///
/// Wrapping validates the media discriminator, so a constructed `Episode`
/// always has a recognized [`MediaKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct Episode<'a> {
    raw: &'a nuxt::Content,
    kind: MediaKind,
    reference: DateTime<FixedOffset>,
}

impl<'a> Episode<'a> {
    pub(crate) fn try_new(
        raw: &'a nuxt::Content,
        reference: DateTime<FixedOffset>,
    ) -> Result<Self, CoreError> {
        let kind = match raw.media_type.as_str() {
            "sound" => MediaKind::Audio,
            "movie" => MediaKind::Video,
            other => {
                return Err(CoreError::UnrecognizedMediaType {
                    content_id: raw.id,
                    media_type: other.to_owned(),
                })
            }
        };
        Ok(Self {
            raw,
            kind,
            reference,
        })
    }

    /// Wraps a raw content record, selecting the media variant.
    ///
    /// `reference` is the instant guessed dates are computed against.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NilConstruction`] when `raw` is absent, and
    /// [`CoreError::UnrecognizedMediaType`] when the record's discriminator
    /// names neither recognized variant. The error is scoped to this record:
    /// sibling episodes remain wrappable.
    pub fn from_raw(
        raw: Option<&'a nuxt::Content>,
        reference: DateTime<FixedOffset>,
    ) -> Result<Self, CoreError> {
        let raw = raw.ok_or(CoreError::NilConstruction { what: "content" })?;
        Self::try_new(raw, reference)
    }

    #[must_use]
    pub fn episode_id(&self) -> EpisodeId {
        EpisodeId(self.raw.id)
    }

    /// Id of the owning show.
    #[must_use]
    pub fn radio_show_id(&self) -> RadioShowId {
        RadioShowId(self.raw.program_id)
    }

    #[must_use]
    pub fn title(&self) -> &'a str {
        &self.raw.title
    }

    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// URL of the episode's poster image.
    #[must_use]
    pub fn poster(&self) -> &'a str {
        &self.raw.poster_image_url
    }

    /// URL of the episode's streaming manifest.
    ///
    /// `None` means the current viewer identity cannot access the manifest —
    /// an access-control fact to display, not an error.
    #[must_use]
    pub fn manifest(&self) -> Option<&'a str> {
        self.raw.streaming_url.as_deref()
    }

    /// Publication instant guessed from the month/day delivery date, in the
    /// site's publication timezone. `None` when the raw value does not parse.
    #[must_use]
    pub fn jst_published_at(&self) -> Option<DateTime<FixedOffset>> {
        dates::guess_date(&self.raw.delivery_date, self.reference)
    }

    /// Guest names, whichever schema revision carried them.
    #[must_use]
    pub fn guests(&self) -> Vec<&'a str> {
        self.raw.guests.iter().map(nuxt::Guest::name).collect()
    }

    #[must_use]
    pub fn is_bonus(&self) -> bool {
        self.raw.bonus
    }

    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.raw.sticky
    }

    #[must_use]
    pub fn is_latest(&self) -> bool {
        self.raw.latest
    }

    #[must_use]
    pub fn requires_premium(&self) -> bool {
        self.raw.premium
    }

    /// The schema's redundant video flag; [`Episode::kind`] is authoritative.
    #[must_use]
    pub fn has_video_stream(&self) -> bool {
        self.raw.movie
    }
}

#[cfg(test)]
#[path = "episode_test.rs"]
mod tests;
