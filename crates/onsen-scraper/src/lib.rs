//! Page processing for the onsen.ag catalog.
//!
//! Given already-fetched page text, [`page::parse_page`] runs the pipeline:
//! locate the embedded `window.__NUXT__` script tag ([`locator`]), evaluate
//! its expression payload to JSON ([`expression`]), and decode that into the
//! raw document tree (`onsen_core::nuxt`). No I/O happens here; fetching is
//! the caller's concern.

pub mod error;
pub mod expression;
pub mod locator;
pub mod page;

pub use error::ScrapeError;
pub use page::{extract_state_json, parse_page};
