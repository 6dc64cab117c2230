use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupabaseClientError {
    #[error("Supabase returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to reach Supabase: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to decode Supabase response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl SupabaseClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            SupabaseClientError::Status { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }
}

impl From<reqwest::Error> for SupabaseClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SupabaseClientError::Decode(e)
        } else {
            SupabaseClientError::Transport(e)
        }
    }
}
