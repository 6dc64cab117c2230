use crate::{
    services::route_segment_resolver::RouteSegmentResolver, types::app_state::AppState,
    utils::app_error::AppError,
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

pub async fn get_stop(
    State(state): State<AppState>,
    Path(stop_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let stop = RouteSegmentResolver::new(&state.tfl_client)
        .stop(&stop_id)
        .await?;

    Ok(Json(stop))
}
