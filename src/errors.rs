use thiserror::Error;

/// Application-level error type.
///
/// Normalization deliberately has no variant here: it absorbs upstream
/// unreliability and always produces a model. Everything that CAN fail a
/// conversion — extraction, the LLM call, canvas packing, file I/O — is
/// fatal for that single conversion only and surfaces through this enum.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
