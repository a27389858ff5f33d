use thiserror::Error;

pub type Result<T> = std::result::Result<T, SanityError>;

#[derive(Debug, Error)]
pub enum SanityError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Sanity API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode query result: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid query URL: {0}")]
    Url(#[from] url::ParseError),
}
