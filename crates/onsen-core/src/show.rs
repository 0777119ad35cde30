//! Read-through view of one radio show record.

use chrono::{DateTime, FixedOffset};

use crate::dates;
use crate::episode::Episode;
use crate::error::CoreError;
use crate::ids::RadioShowId;
use crate::nuxt;
use crate::person::Person;

/// A radio show, borrowing its raw record from the document.
///
/// Accessors materialize fresh wrappers per call: callers get value
/// equality across calls, not identity stability.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioShow<'a> {
    raw: &'a nuxt::Program,
    reference: DateTime<FixedOffset>,
}

impl<'a> RadioShow<'a> {
    pub(crate) fn new(raw: &'a nuxt::Program, reference: DateTime<FixedOffset>) -> Self {
        Self { raw, reference }
    }

    /// Wraps a raw program record.
    ///
    /// `reference` is the instant guessed dates are computed against.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NilConstruction`] when `raw` is absent.
    pub fn from_raw(
        raw: Option<&'a nuxt::Program>,
        reference: DateTime<FixedOffset>,
    ) -> Result<Self, CoreError> {
        raw.map(|raw| Self::new(raw, reference))
            .ok_or(CoreError::NilConstruction { what: "program" })
    }

    #[must_use]
    pub fn radio_show_id(&self) -> RadioShowId {
        RadioShowId(self.raw.id)
    }

    /// Human-readable lookup key; empty for not-yet-announced shows.
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.raw.directory_name
    }

    #[must_use]
    pub fn title(&self) -> &'a str {
        &self.raw.title
    }

    /// The catalog's "new updates" badge.
    #[must_use]
    pub fn has_updates(&self) -> bool {
        self.raw.new
    }

    /// Last-updated instant guessed from the show's month/day fields.
    ///
    /// Uses the show's own `updated` value when present. When absent, falls
    /// back to the first episode's delivery date — the catalog lists episodes
    /// newest-first, so the first is the most recent. `None` when neither
    /// source is usable (a pre-announced show with no content yet).
    #[must_use]
    pub fn jst_updated_at(&self) -> Option<DateTime<FixedOffset>> {
        let source = match &self.raw.updated {
            Some(updated) => updated.as_str(),
            None => {
                let first = self.raw.contents.first()?;
                if first.delivery_date.is_empty() {
                    return None;
                }
                first.delivery_date.as_str()
            }
        };
        dates::guess_date(source, self.reference)
    }

    /// The show's hosts, freshly wrapped per call.
    #[must_use]
    pub fn hosts(&self) -> Vec<Person<'a>> {
        self.raw.performers.iter().map(Person::new).collect()
    }

    /// The show's episodes, freshly wrapped per call.
    ///
    /// Wrapping is per-record: an episode with an unrecognized media type
    /// yields an `Err` entry without invalidating its siblings.
    #[must_use]
    pub fn episodes(&self) -> Vec<Result<Episode<'a>, CoreError>> {
        self.raw
            .contents
            .iter()
            .map(|content| Episode::try_new(content, self.reference))
            .collect()
    }

    /// Number of episode records, counting malformed ones.
    #[must_use]
    pub fn episode_count(&self) -> usize {
        self.raw.contents.len()
    }
}

#[cfg(test)]
#[path = "show_test.rs"]
mod tests;
