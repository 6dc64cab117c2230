use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::services::{
    route_segment_resolver::ResolveError,
    supabase_client::types::supabase_client_error::SupabaseClientError,
    tfl_client::types::tfl_client_error::TflClientError,
};

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponseJson {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ErrorResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}

fn upstream_error(
    status: Option<StatusCode>,
    body: Option<String>,
    timed_out: bool,
    description: String,
) -> AppError {
    match (status, body) {
        (Some(status), Some(body)) if !body.is_empty() => AppError::new(status, body),
        (Some(status), _) => AppError::new(status, description),
        (None, _) if timed_out => AppError::new(StatusCode::GATEWAY_TIMEOUT, description),
        (None, _) => AppError::new(StatusCode::INTERNAL_SERVER_ERROR, description),
    }
}

impl From<TflClientError> for AppError {
    fn from(e: TflClientError) -> Self {
        error!("TfL request failed: {}", e);
        let description = e.to_string();

        match e {
            TflClientError::Status { status, body } => {
                upstream_error(Some(status), Some(body), false, description)
            }
            TflClientError::Transport(err) | TflClientError::Decode(err) => {
                upstream_error(None, None, err.is_timeout(), description)
            }
        }
    }
}

impl From<SupabaseClientError> for AppError {
    fn from(e: SupabaseClientError) -> Self {
        error!("Supabase request failed: {}", e);
        let description = e.to_string();

        match e {
            SupabaseClientError::Status { status, body } => {
                upstream_error(Some(status), Some(body), false, description)
            }
            SupabaseClientError::Transport(err) | SupabaseClientError::Decode(err) => {
                upstream_error(None, None, err.is_timeout(), description)
            }
        }
    }
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::NotFound => AppError::new(StatusCode::NOT_FOUND, e.to_string()),
            ResolveError::InvalidRange => {
                warn!("Rejected stop range: {}", e);
                AppError::new(StatusCode::BAD_REQUEST, e.to_string())
            }
            ResolveError::Upstream(e) => e.into(),
        }
    }
}
