//! The locate → evaluate → decode pipeline over fetched page text.

use onsen_core::nuxt;

use crate::error::ScrapeError;
use crate::expression;
use crate::locator;

/// Recovers the raw state JSON text from a fetched page.
///
/// # Errors
///
/// - [`ScrapeError::MarkerNotFound`] when the page carries no embedded state
///   script tag.
/// - [`ScrapeError::Evaluation`] when the payload fails to parse or evaluate.
/// - [`ScrapeError::EmptyEvaluation`] when it evaluates to no value.
pub fn extract_state_json(html: &str) -> Result<String, ScrapeError> {
    let expr = locator::find_state_expression(html).ok_or(ScrapeError::MarkerNotFound)?;
    tracing::debug!(bytes = expr.len(), "located embedded state expression");

    match expression::stringify(expr)? {
        Some(json) => Ok(json),
        None => Err(ScrapeError::EmptyEvaluation),
    }
}

/// Runs the full pipeline: locate the marker, evaluate its payload, and
/// decode the resulting JSON into the raw document tree.
///
/// # Errors
///
/// Everything [`extract_state_json`] returns, plus
/// [`ScrapeError::SchemaDecode`] when the recovered JSON does not match the
/// expected schema.
pub fn parse_page(html: &str) -> Result<nuxt::Root, ScrapeError> {
    let json = extract_state_json(html)?;
    nuxt::from_json(&json).map_err(|source| ScrapeError::SchemaDecode { source })
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
