use thiserror::Error;

/// Failures raised while talking to an order store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver errors are passed through untouched.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// The sequence update came back without a document.
    #[error("sequence `{0}` returned no value")]
    SequenceUnavailable(String),
}
