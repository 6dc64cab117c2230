use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::{types::app_state::AppState, utils::app_error::AppError};

pub const API_KEY_HEADER: &str = "x-api-key";

pub async fn auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match state.auth_key {
        Some(ref auth_key) => match headers.get(API_KEY_HEADER) {
            Some(header) if header == auth_key.as_str() => Ok(next.run(request).await),
            _ => Err(AppError::new(StatusCode::UNAUTHORIZED, "Unauthorized")),
        },
        None => Ok(next.run(request).await),
    }
}
