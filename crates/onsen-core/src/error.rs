use thiserror::Error;

/// Errors raised while adapting raw catalog records into domain types.
///
/// Both variants are per-record: a failure wrapping one episode never
/// invalidates its siblings, and callers decide whether absence is fatal.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An episode's media discriminator named neither recognized variant.
    #[error("content {content_id}: unrecognized media type \"{media_type}\"")]
    UnrecognizedMediaType {
        content_id: u64,
        media_type: String,
    },

    /// A wrapper constructor was handed an absent raw value.
    #[error("cannot wrap absent {what}")]
    NilConstruction { what: &'static str },
}
