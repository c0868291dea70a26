use thiserror::Error;

/// Failure of a remote text-generation call
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request blocked: {0}")]
    Blocked(String),

    #[error("no text in response")]
    EmptyResponse,

    #[error("{0}")]
    Other(String),
}

/// Configuration problems; all of them are recoverable
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GOOGLE_API_KEY environment variable not set.")]
    MissingApiKey,
}

/// Why a summary could not be produced
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl SummaryError {
    /// The bracketed diagnostic returned in place of a summary
    pub fn diagnostic(&self) -> String {
        format!("[Gemini summarization failed: {}]", self)
    }
}
