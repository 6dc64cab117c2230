use crate::{
    services::supabase_client::types::supabase_auth::{AuthSession, Credentials},
    types::app_state::AppState,
    utils::{app_error::AppError, validated_json::ValidatedJson},
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize)]
pub struct SignInResponse {
    pub message: String,
    pub user: Value,
    pub session: AuthSession,
}

pub async fn post_auth_signin(
    State(state): State<AppState>,
    ValidatedJson(credentials): ValidatedJson<Credentials>,
) -> Result<Json<SignInResponse>, AppError> {
    let session = state
        .supabase()?
        .sign_in_with_password(&credentials)
        .await?;

    Ok(Json(SignInResponse {
        message: "User signed in successfully".to_string(),
        user: session.user.clone(),
        session,
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use mockito::Matcher;
    use serde_json::json;
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use super::*;
    use crate::{
        app::{body_json, gen_mock_app},
        utils::app_error::ErrorResponseJson,
    };

    fn signin_request(password: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/supabase/auth/signin")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "email": "test@example.com", "password": password }).to_string(),
            ))
            .unwrap()
    }

    #[tokio::test]
    async fn get_response() {
        let mut mock_app = gen_mock_app().await;

        let mock_server = mock_app
            .supabase_server
            .mock("POST", "/auth/v1/token")
            .match_query(Matcher::UrlEncoded("grant_type".into(), "password".into()))
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "access_token": "jwt",
                    "token_type": "bearer",
                    "expires_in": 3600,
                    "refresh_token": "refresh",
                    "user": {
                        "id": "test-user-id",
                        "email": "test@example.com",
                        "aud": "authenticated"
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(signin_request("TestPassword123!"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        mock_server.assert_async().await;

        let body: SignInResponse = body_json(response).await;
        assert_eq!(body.message, "User signed in successfully");
        assert_eq!(body.user["id"], "test-user-id");
        assert_eq!(body.user["aud"], "authenticated");
        assert_eq!(body.session.access_token, "jwt");
        assert_eq!(body.session.refresh_token.as_deref(), Some("refresh"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_invalid_credentials() {
        let mut mock_app = gen_mock_app().await;

        let _mock_server = mock_app
            .supabase_server
            .mock("POST", "/auth/v1/token")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(json!({ "error": "invalid_grant" }).to_string())
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(signin_request("WrongPassword123!"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(logs_contain("Supabase request failed"));
    }

    #[tokio::test]
    async fn test_short_password_is_checked_by_supabase() {
        let mut mock_app = gen_mock_app().await;

        let mock_server = mock_app
            .supabase_server
            .mock("POST", "/auth/v1/token")
            .match_query(Matcher::Any)
            .match_body(Matcher::PartialJson(json!({ "password": "abc" })))
            .with_status(400)
            .with_body(json!({ "error": "invalid_grant" }).to_string())
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(signin_request("abc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        mock_server.assert_async().await;

        let body: ErrorResponseJson = body_json(response).await;
        assert!(body.message.contains("invalid_grant"));
    }
}
