//! Read-through view of a performer record.

use crate::error::CoreError;
use crate::ids::PersonId;
use crate::nuxt;

/// A host or guest personality, borrowing its raw record from the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Person<'a> {
    raw: &'a nuxt::Performer,
}

impl<'a> Person<'a> {
    pub(crate) fn new(raw: &'a nuxt::Performer) -> Self {
        Self { raw }
    }

    /// Wraps a raw performer record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NilConstruction`] when `raw` is absent.
    pub fn from_raw(raw: Option<&'a nuxt::Performer>) -> Result<Self, CoreError> {
        raw.map(Self::new)
            .ok_or(CoreError::NilConstruction { what: "performer" })
    }

    #[must_use]
    pub fn person_id(&self) -> PersonId {
        PersonId(self.raw.id)
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.raw.name
    }
}
