use crate::{
    middlewares::auth::auth_middleware,
    routes::apply_routes,
    services::{
        supabase_client::supabase_client::{SupabaseClient, SupabaseClientConfig},
        tfl_client::tfl_client::{TflClient, TflClientConfig},
    },
    types::{app_config::AppConfig, app_state::AppState},
};
use axum::{middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn gen_app(config: AppConfig) -> Result<Router, reqwest::Error> {
    let timeout = config.upstream_timeout;

    let state = AppState {
        tfl_client: TflClient::new(TflClientConfig {
            host: config.tfl_host,
            api_key: config.tfl_key,
            timeout,
        })?,
        supabase_client: config
            .supabase
            .map(|creds| {
                SupabaseClient::new(SupabaseClientConfig {
                    url: creds.url,
                    anon_key: creds.anon_key,
                    timeout,
                })
            })
            .transpose()?,
        auth_key: config.auth_key,
    };

    let cors_middleware = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(apply_routes(Router::new())
        .route("/", get(root))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .layer(cors_middleware)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello, world!" }))
}

#[cfg(test)]
pub fn test_config(tfl_host: &str, supabase_url: Option<&str>) -> AppConfig {
    use crate::types::app_config::SupabaseCredentials;

    AppConfig {
        tfl_host: tfl_host.to_string(),
        tfl_key: "key".to_string(),
        supabase: supabase_url.map(|url| SupabaseCredentials {
            url: url.to_string(),
            anon_key: "anon".to_string(),
        }),
        auth_key: None,
        upstream_timeout: std::time::Duration::from_secs(5),
        bind_addr: ([127, 0, 0, 1], 0).into(),
    }
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub tfl_server: mockito::ServerGuard,
    pub supabase_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let tfl_server = mockito::Server::new_async().await;
    let supabase_server = mockito::Server::new_async().await;

    let app = gen_app(test_config(&tfl_server.url(), Some(&supabase_server.url()))).unwrap();

    MockApp {
        app,
        tfl_server,
        supabase_server,
    }
}

#[cfg(test)]
pub async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
