use crate::{
    services::supabase_client::types::supabase_auth::SignUpCredentials,
    types::app_state::AppState,
    utils::{app_error::AppError, validated_json::ValidatedJson},
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize)]
pub struct SignUpResponse {
    pub message: String,
    pub user: Value,
}

pub async fn post_auth_signup(
    State(state): State<AppState>,
    ValidatedJson(credentials): ValidatedJson<SignUpCredentials>,
) -> Result<Json<SignUpResponse>, AppError> {
    let user = state.supabase()?.sign_up(&credentials).await?;

    Ok(Json(SignUpResponse {
        message: "User signed up successfully".to_string(),
        user,
    }))
}
