//! Locates the embedded client-state script tag in page markup.

use std::sync::OnceLock;

use regex::Regex;

static MARKER: OnceLock<Regex> = OnceLock::new();

fn marker_re() -> &'static Regex {
    // The tag and variable name are dictated by the site's front-end
    // framework and matched exactly as emitted, trailing semicolon included.
    MARKER.get_or_init(|| {
        Regex::new(r"<script>window\.__NUXT__=([^<]+);</script>").expect("valid regex")
    })
}

/// Returns the expression payload of the first well-formed state script tag
/// in `html`, without the trailing semicolon. Later occurrences are ignored.
///
/// Pure function of the input text; `None` when the marker is absent or its
/// closing tag never appears.
#[must_use]
pub fn find_state_expression(html: &str) -> Option<&str> {
    let captures = marker_re().captures(html)?;
    captures.get(1).map(|m| m.as_str())
}

#[cfg(test)]
#[path = "locator_test.rs"]
mod tests;
