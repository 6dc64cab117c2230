use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, bearer_token::bearer_token},
};
use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize)]
pub struct SessionUser {
    pub user: Value,
}

#[derive(Serialize, Deserialize)]
pub struct GetAuthSessionResponse {
    #[serde(rename = "isLoggedIn")]
    pub is_logged_in: bool,
    pub session: Option<SessionUser>,
}

impl GetAuthSessionResponse {
    fn logged_out() -> Self {
        Self {
            is_logged_in: false,
            session: None,
        }
    }
}

pub async fn get_auth_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<GetAuthSessionResponse>, AppError> {
    let supabase = state.supabase()?;

    let Some(token) = bearer_token(&headers) else {
        return Ok(Json(GetAuthSessionResponse::logged_out()));
    };

    match supabase.get_user(token).await {
        Ok(user) => Ok(Json(GetAuthSessionResponse {
            is_logged_in: true,
            session: Some(SessionUser { user }),
        })),
        Err(e) if e.is_unauthorized() => Ok(Json(GetAuthSessionResponse::logged_out())),
        Err(e) => Err(e.into()),
    }
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

    use super::*;
    use crate::app::{body_json, gen_mock_app};

    fn session_request(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/auth/session");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_authenticated() {
        let mut mock_app = gen_mock_app().await;

        let mock_server = mock_app
            .supabase_server
            .mock("GET", "/auth/v1/user")
            .match_query(Matcher::Any)
            .match_header("authorization", "Bearer jwt")
            .with_header("content-type", "application/json")
            .with_body(
                json!({ "id": "test-user-id", "email": "test@example.com", "aud": "authenticated" })
                    .to_string(),
            )
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(session_request(Some("jwt")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        mock_server.assert_async().await;

        let body: GetAuthSessionResponse = body_json(response).await;
        assert!(body.is_logged_in);
        assert_eq!(body.session.unwrap().user["email"], "test@example.com");
    }

    #[tokio::test]
    async fn test_unauthenticated() {
        let mock_app = gen_mock_app().await;

        let response = mock_app.app.oneshot(session_request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = body_json(response).await;
        assert_eq!(body, json!({ "isLoggedIn": false, "session": null }));
    }

    #[tokio::test]
    async fn test_expired_token() {
        let mut mock_app = gen_mock_app().await;

        let _mock_server = mock_app
            .supabase_server
            .mock("GET", "/auth/v1/user")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(json!({ "msg": "token is expired" }).to_string())
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(session_request(Some("old")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: GetAuthSessionResponse = body_json(response).await;
        assert!(!body.is_logged_in);
        assert!(body.session.is_none());
    }
}
