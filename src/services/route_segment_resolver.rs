use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::tfl_client::types::{
    tfl_client_error::TflClientError,
    tfl_route_sequence_response::{RouteSequenceResponse, StopPoint},
};

/// Where stop sequences and stop records come from.
#[async_trait]
pub trait TransitSource: Send + Sync {
    async fn fetch_route_sequence(
        &self,
        line_id: &str,
        direction: &str,
    ) -> Result<RouteSequenceResponse, TflClientError>;

    async fn fetch_stop_point(&self, stop_id: &str) -> Result<Value, TflClientError>;
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No stop sequences found.")]
    NotFound,

    #[error("One or both stop IDs not found on this route.")]
    InvalidRange,

    #[error(transparent)]
    Upstream(#[from] TflClientError),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StopSequence {
    pub route_id: String,
    pub direction: String,
    pub stop_count: usize,
    pub stops: Vec<StopPoint>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct StopsBetween {
    /// `|to_index - from_index|`, not the length of `stop_ids_between`.
    pub count: usize,
    pub from_index: usize,
    pub to_index: usize,
    pub stop_ids_between: Vec<String>,
    pub all_stop_ids: Vec<String>,
}

pub struct RouteSegmentResolver<'a, S: TransitSource> {
    source: &'a S,
}

impl<'a, S: TransitSource> RouteSegmentResolver<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    pub async fn stop_sequence(
        &self,
        line_id: &str,
        direction: &str,
    ) -> Result<StopSequence, ResolveError> {
        let stops = self
            .source
            .fetch_route_sequence(line_id, direction)
            .await?
            .stopPointSequences
            .into_iter()
            .next()
            .ok_or(ResolveError::NotFound)?
            .stopPoint;

        Ok(StopSequence {
            route_id: line_id.to_string(),
            direction: direction.to_string(),
            stop_count: stops.len(),
            stops,
        })
    }

    pub async fn stop(&self, stop_id: &str) -> Result<Value, ResolveError> {
        Ok(self.source.fetch_stop_point(stop_id).await?)
    }

    pub async fn stops_between(
        &self,
        line_id: &str,
        from_stop_id: &str,
        to_stop_id: &str,
        direction: &str,
    ) -> Result<StopsBetween, ResolveError> {
        let all_stop_ids = self
            .stop_sequence(line_id, direction)
            .await?
            .stops
            .into_iter()
            .map(|s| s.id)
            .collect();

        segment_between(all_stop_ids, from_stop_id, to_stop_id)
    }
}

pub fn segment_between(
    all_stop_ids: Vec<String>,
    from_stop_id: &str,
    to_stop_id: &str,
) -> Result<StopsBetween, ResolveError> {
    let position = |id: &str| all_stop_ids.iter().position(|s| s == id);

    let (Some(from_index), Some(to_index)) = (position(from_stop_id), position(to_stop_id)) else {
        return Err(ResolveError::InvalidRange);
    };

    let lo = from_index.min(to_index);
    let hi = from_index.max(to_index);

    // `get` yields None for the empty `lo == hi` case
    let stop_ids_between = all_stop_ids
        .get(lo + 1..hi)
        .map(<[String]>::to_vec)
        .unwrap_or_default();

    Ok(StopsBetween {
        count: from_index.abs_diff(to_index),
        from_index,
        to_index,
        stop_ids_between,
        all_stop_ids,
    })
}
