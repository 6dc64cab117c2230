use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use urlencoding::encode;

use super::types::{
    tfl_client_error::TflClientError, tfl_route_sequence_response::RouteSequenceResponse,
};
use crate::services::route_segment_resolver::TransitSource;

#[derive(Clone)]
pub struct TflClientConfig {
    pub host: String,
    pub api_key: String,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct TflClient {
    config: TflClientConfig,
    client: reqwest::Client,
}

impl TflClient {
    pub fn new(config: TflClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, client })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TflClientError> {
        let url = format!("{}{}", self.config.host.trim_end_matches('/'), path);
        debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .header("app_key", &self.config.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TflClientError::Status { status, body });
        }

        Ok(resp.json::<T>().await?)
    }
}

#[async_trait]
impl TransitSource for TflClient {
    async fn fetch_route_sequence(
        &self,
        line_id: &str,
        direction: &str,
    ) -> Result<RouteSequenceResponse, TflClientError> {
        self.get_json(&format!(
            "/Line/{}/Route/Sequence/{}",
            encode(line_id),
            encode(direction)
        ))
        .await
    }

    async fn fetch_stop_point(&self, stop_id: &str) -> Result<Value, TflClientError> {
        self.get_json(&format!("/StopPoint/{}", encode(stop_id)))
            .await
    }
}
