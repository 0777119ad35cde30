//! Raw schema for the embedded `window.__NUXT__` state object.
//!
//! Mirrors the shape the site's front-end framework injects into the page,
//! decoding only the fields the rest of the crate consumes. Unknown keys are
//! ignored and missing ones fall back to their defaults, so additions on the
//! site do not break decoding. The decoded tree is immutable: domain views
//! borrow from it and never write back.

use serde::Deserialize;

/// Root of the decoded state document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Root {
    /// Server-side error envelope; carried opaquely, never interpreted.
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub state: State,
    #[serde(default, rename = "routePath")]
    pub route_path: String,
}

/// The application state under the root. `signin` is `None` for anonymous
/// sessions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct State {
    #[serde(default, rename = "sign_in")]
    pub signin: Option<Signin>,
    #[serde(default)]
    pub programs: ProgramsState,
}

/// The `state.programs` store module.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProgramsState {
    #[serde(default)]
    pub programs: ProgramList,
}

/// The `state.programs.programs` slice holding every show.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProgramList {
    #[serde(default)]
    pub all: Vec<Program>,
}

/// The signed-in user's account state.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Signin {
    #[serde(default)]
    pub email: String,
    /// A string of digits.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub favorite_performer_ids: Vec<u64>,
    #[serde(default)]
    pub favorite_program_ids: Vec<u64>,
    #[serde(default)]
    pub playlisted_content_ids: Vec<u64>,
}

/// One radio show. `updated` is absent for shows that were announced (or
/// re-announced) without a recorded update time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub id: u64,
    /// Human-readable lookup key; empty for not-yet-announced shows.
    #[serde(default)]
    pub directory_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub new: bool,
    /// Month/day string (`"MM/DD"`), no year component.
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub performers: Vec<Performer>,
    /// Episodes in reverse-chronological order (newest first).
    #[serde(default)]
    pub contents: Vec<Content>,
}

/// A host or guest performer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Performer {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// One episode record. `streaming_url` is absent when the current viewer
/// identity has no access to the manifest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bonus: bool,
    #[serde(default)]
    pub sticky: bool,
    #[serde(default)]
    pub latest: bool,
    /// Discriminator: `"sound"` or `"movie"`; anything else is a
    /// data-integrity error surfaced at wrap time.
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub premium: bool,
    /// Back-reference to the owning [`Program::id`].
    #[serde(default)]
    pub program_id: u64,
    /// Month/day string (`"MM/DD"`), never absent on the wire.
    #[serde(default)]
    pub delivery_date: String,
    #[serde(default)]
    pub movie: bool,
    #[serde(default)]
    pub poster_image_url: String,
    #[serde(default)]
    pub streaming_url: Option<String>,
    #[serde(default)]
    pub guests: Vec<Guest>,
}

/// A guest entry. The site has shipped two revisions of this field: a plain
/// name string and a full performer object. Both decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Guest {
    Name(String),
    Performer(Performer),
}

impl Guest {
    /// The guest's display name, whichever revision carried it.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Guest::Name(name) => name,
            Guest::Performer(performer) => &performer.name,
        }
    }
}

/// Decodes a state JSON text into the raw document tree.
///
/// An empty document (`"{}"`) is valid and yields a [`Root`] with zero
/// programs and no signin.
///
/// # Errors
///
/// Returns the underlying `serde_json` error for structurally malformed
/// input (unexpected end of input, bad tokens, type mismatches).
pub fn from_json(json: &str) -> Result<Root, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
#[path = "nuxt_test.rs"]
mod tests;
