use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TflClientError {
    #[error("TfL API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to reach TfL API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to decode TfL API response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for TflClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            TflClientError::Decode(e)
        } else {
            TflClientError::Transport(e)
        }
    }
}
