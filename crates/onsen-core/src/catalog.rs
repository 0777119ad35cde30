//! Root domain view over a decoded document, with lazy id/name lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset};

use crate::dates;
use crate::episode::Episode;
use crate::error::CoreError;
use crate::ids::{EpisodeId, RadioShowId};
use crate::nuxt;
use crate::show::RadioShow;
use crate::user::User;

/// Queryable domain model over one fetched document.
///
/// Owns the raw tree; every view borrows from it. The document is immutable
/// for the catalog's lifetime, so the lookup maps are built at most once, on
/// first use, behind a [`OnceLock`] — concurrent first lookups race only on
/// who builds, never on a half-built map.
///
/// The reference instant for all guessed dates is captured at construction
/// and scoped to this catalog; concurrent catalogs never share clock state.
#[derive(Debug)]
pub struct Catalog {
    raw: nuxt::Root,
    reference: DateTime<FixedOffset>,
    index: OnceLock<Index>,
}

/// Position maps into the raw tree. Values are indices, not references, so
/// the maps can live beside the data they point into.
#[derive(Debug, Default)]
struct Index {
    show_by_id: HashMap<u64, usize>,
    show_by_name: HashMap<String, usize>,
    episode_by_id: HashMap<u64, (usize, usize)>,
}

impl Catalog {
    /// Builds a catalog with the reference instant read from the real clock.
    #[must_use]
    pub fn new(raw: nuxt::Root) -> Self {
        Self::with_reference(raw, dates::jst_now())
    }

    /// Builds a catalog against an injected reference instant.
    ///
    /// Used for deterministic tests and for interpreting archived pages
    /// against their capture time rather than today.
    #[must_use]
    pub fn with_reference(raw: nuxt::Root, reference: DateTime<FixedOffset>) -> Self {
        Self {
            raw,
            reference,
            index: OnceLock::new(),
        }
    }

    /// The underlying decoded document.
    #[must_use]
    pub fn raw(&self) -> &nuxt::Root {
        &self.raw
    }

    /// The instant guessed dates are computed against.
    #[must_use]
    pub fn reference(&self) -> DateTime<FixedOffset> {
        self.reference
    }

    fn programs(&self) -> &[nuxt::Program] {
        &self.raw.state.programs.programs.all
    }

    /// Every show in catalog order, freshly wrapped per call.
    #[must_use]
    pub fn radio_shows(&self) -> Vec<RadioShow<'_>> {
        self.programs()
            .iter()
            .map(|program| RadioShow::new(program, self.reference))
            .collect()
    }

    /// The signed-in user, or `None` for anonymous sessions.
    #[must_use]
    pub fn user(&self) -> Option<User<'_>> {
        self.raw.state.signin.as_ref().map(User::new)
    }

    /// Looks up a show by its human-readable name.
    ///
    /// Shows with empty names are never in the name map, so the empty key is
    /// always not-found.
    #[must_use]
    pub fn show(&self, name: &str) -> Option<RadioShow<'_>> {
        let &at = self.index().show_by_name.get(name)?;
        Some(RadioShow::new(&self.programs()[at], self.reference))
    }

    /// Looks up a show by id.
    #[must_use]
    pub fn show_by_id(&self, id: RadioShowId) -> Option<RadioShow<'_>> {
        let &at = self.index().show_by_id.get(&id.0)?;
        Some(RadioShow::new(&self.programs()[at], self.reference))
    }

    /// Looks up an episode by id across all shows.
    ///
    /// `Ok(None)` means the id is absent. A present-but-malformed record is
    /// an error for that record alone.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnrecognizedMediaType`] when the record exists
    /// but its media discriminator names neither recognized variant.
    pub fn episode(&self, id: EpisodeId) -> Result<Option<Episode<'_>>, CoreError> {
        let Some(&(show_at, content_at)) = self.index().episode_by_id.get(&id.0) else {
            return Ok(None);
        };
        Episode::try_new(&self.programs()[show_at].contents[content_at], self.reference).map(Some)
    }

    fn index(&self) -> &Index {
        self.index.get_or_init(|| {
            let mut index = Index::default();
            for (show_at, program) in self.programs().iter().enumerate() {
                index.show_by_id.insert(program.id, show_at);
                if !program.directory_name.is_empty() {
                    index
                        .show_by_name
                        .insert(program.directory_name.clone(), show_at);
                }
                for (content_at, content) in program.contents.iter().enumerate() {
                    index.episode_by_id.insert(content.id, (show_at, content_at));
                }
            }
            tracing::debug!(
                shows = index.show_by_id.len(),
                episodes = index.episode_by_id.len(),
                "built catalog index"
            );
            index
        })
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
