use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::types::{
    bus_route_record::{BusRouteChanges, NewBusRoute, BUS_ROUTES_TABLE},
    supabase_auth::{AuthSession, Credentials, SignUpCredentials},
    supabase_client_error::SupabaseClientError,
};

#[derive(Clone)]
pub struct SupabaseClientConfig {
    pub url: String,
    pub anon_key: String,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct SupabaseClient {
    config: SupabaseClientConfig,
    client: reqwest::Client,
}

fn eq(value: &str) -> String {
    format!("eq.{}", value)
}

async fn ensure_success(resp: Response) -> Result<Response, SupabaseClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(SupabaseClientError::Status { status, body })
}

async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, SupabaseClientError> {
    let resp = ensure_success(req.send().await?).await?;
    Ok(resp.json::<T>().await?)
}

impl SupabaseClient {
    pub fn new(config: SupabaseClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, client })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.url.trim_end_matches('/'), path);
        debug!("{} {}", method, url);

        self.client
            .request(method, url)
            .header("apikey", &self.config.anon_key)
    }

    fn table(&self, method: Method) -> RequestBuilder {
        self.request(method, &format!("/rest/v1/{}", BUS_ROUTES_TABLE))
            .bearer_auth(&self.config.anon_key)
            .header("Prefer", "return=representation")
    }

    pub async fn sign_up(
        &self,
        credentials: &SignUpCredentials,
    ) -> Result<Value, SupabaseClientError> {
        let body: Value = send_json(
            self.request(Method::POST, "/auth/v1/signup")
                .bearer_auth(&self.config.anon_key)
                .json(credentials),
        )
        .await?;

        // With autoconfirm on, GoTrue wraps the user in a session.
        if body.get("user").is_some_and(Value::is_object) {
            Ok(body["user"].clone())
        } else {
            Ok(body)
        }
    }

    pub async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthSession, SupabaseClientError> {
        send_json(
            self.request(Method::POST, "/auth/v1/token")
                .query(&[("grant_type", "password")])
                .bearer_auth(&self.config.anon_key)
                .json(credentials),
        )
        .await
    }

    pub async fn sign_out(&self, access_token: &str) -> Result<(), SupabaseClientError> {
        let req = self
            .request(Method::POST, "/auth/v1/logout")
            .bearer_auth(access_token);

        ensure_success(req.send().await?).await?;
        Ok(())
    }

    pub async fn get_user(&self, access_token: &str) -> Result<Value, SupabaseClientError> {
        send_json(
            self.request(Method::GET, "/auth/v1/user")
                .bearer_auth(access_token),
        )
        .await
    }

    pub async fn insert_bus_route(
        &self,
        record: &NewBusRoute,
    ) -> Result<Vec<Value>, SupabaseClientError> {
        send_json(self.table(Method::POST).json(record)).await
    }

    pub async fn update_bus_route(
        &self,
        id: &str,
        changes: &BusRouteChanges,
    ) -> Result<Vec<Value>, SupabaseClientError> {
        send_json(
            self.table(Method::PATCH)
                .query(&[("id", eq(id))])
                .json(changes),
        )
        .await
    }

    pub async fn delete_bus_route(&self, id: &str) -> Result<Vec<Value>, SupabaseClientError> {
        send_json(self.table(Method::DELETE).query(&[("id", eq(id))])).await
    }

    pub async fn select_bus_routes(
        &self,
        filters: &[(&str, &str)],
    ) -> Result<Vec<Value>, SupabaseClientError> {
        let query = std::iter::once(("select".to_string(), "*".to_string()))
            .chain(
                filters
                    .iter()
                    .map(|(column, value)| (column.to_string(), eq(value))),
            )
            .collect::<Vec<(String, String)>>();

        send_json(self.table(Method::GET).query(&query)).await
    }
}
