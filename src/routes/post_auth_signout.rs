use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, bearer_token::bearer_token},
};
use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct SignOutResponse {
    pub message: String,
}

pub async fn post_auth_signout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SignOutResponse>, AppError> {
    let supabase = state.supabase()?;

    if let Some(token) = bearer_token(&headers) {
        supabase.sign_out(token).await?;
    }

    Ok(Json(SignOutResponse {
        message: "User signed out successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use mockito::Matcher;
    use tower::ServiceExt;

    use super::*;
    use crate::app::{body_json, gen_mock_app};

    #[tokio::test]
    async fn get_response() {
        let mut mock_app = gen_mock_app().await;

        let mock_server = mock_app
            .supabase_server
            .mock("POST", "/auth/v1/logout")
            .match_query(Matcher::Any)
            .match_header("authorization", "Bearer jwt")
            .with_status(204)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/supabase/auth/signout")
                    .header("authorization", "Bearer jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        mock_server.assert_async().await;

        let body: SignOutResponse = body_json(response).await;
        assert_eq!(body.message, "User signed out successfully");
    }

    #[tokio::test]
    async fn test_without_token() {
        let mut mock_app = gen_mock_app().await;

        let mock_server = mock_app
            .supabase_server
            .mock("POST", "/auth/v1/logout")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/supabase/auth/signout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        mock_server.assert_async().await;
    }
}
