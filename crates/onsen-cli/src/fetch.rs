//! Page retrieval: one GET with an optional session cookie, plus `file://`
//! support for archived pages. Everything downstream works on the returned
//! text; no other I/O happens in the pipeline.

use std::time::Duration;

use anyhow::Context;

/// Desktop browser UA; the site serves the full server-rendered catalog page
/// to it.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:87.0) Gecko/20100101 Onsen/0.1";

/// Fetches the catalog page as text.
///
/// `backend` is normally the site root; a `file://PATH` value reads an
/// archived page from disk instead, which keeps every command usable offline
/// and deterministic under test. The session id, when present, is sent as
/// the `_session_id` cookie so the page renders the signed-in state.
///
/// # Errors
///
/// Returns an error when the file cannot be read, the client cannot be
/// constructed, the request fails, or the server answers with a non-success
/// status.
pub(crate) async fn fetch_page(backend: &str, session: Option<&str>) -> anyhow::Result<String> {
    if let Some(path) = backend.strip_prefix("file://") {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading archived page {path}"));
    }

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .context("constructing http client")?;

    let mut request = client.get(backend);
    if let Some(id) = session {
        request = request.header(reqwest::header::COOKIE, format!("_session_id={id}"));
    }

    tracing::debug!(backend, "fetching catalog page");
    let response = request
        .send()
        .await
        .with_context(|| format!("requesting {backend}"))?
        .error_for_status()
        .with_context(|| format!("requesting {backend}"))?;

    response.text().await.context("reading response body")
}

#[cfg(test)]
#[path = "fetch_test.rs"]
mod tests;
