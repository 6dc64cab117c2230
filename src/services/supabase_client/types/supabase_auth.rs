use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

#[derive(Validate, Serialize, Deserialize)]
pub struct Credentials {
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,

    pub password: String,
}

#[derive(Validate, Serialize, Deserialize)]
pub struct SignUpCredentials {
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub user: Value,
}
