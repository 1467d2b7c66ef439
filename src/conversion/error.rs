use thiserror::Error;

/// Everything that can go wrong between pressing Convert and getting code
/// back. The UI collapses all of these into a single "try again" toast; the
/// variants exist for logs and tests.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("request to the provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("provider returned no completion text")]
    EmptyCompletion,

    #[error("completion did not match the expected shape: {0}")]
    InvalidPayload(String),
}
