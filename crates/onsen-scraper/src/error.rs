use thiserror::Error;

use crate::expression::EvalError;

/// Errors from the locate → evaluate → decode pipeline.
///
/// None of these are retried internally; retry, if desired, belongs to the
/// fetching collaborator around the whole pipeline.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The embedded-state script marker is absent from the page text.
    #[error("embedded state marker not found in page")]
    MarkerNotFound,

    /// The captured expression failed to tokenize, parse, or evaluate.
    #[error("state expression evaluation failed: {0}")]
    Evaluation(#[from] EvalError),

    /// The expression evaluated to `undefined` — the page's state shape no
    /// longer matches what this pipeline expects.
    #[error("state expression evaluated to no value")]
    EmptyEvaluation,

    /// The recovered JSON text does not decode into the expected schema.
    #[error("state JSON decode failed: {source}")]
    SchemaDecode {
        #[source]
        source: serde_json::Error,
    },
}
