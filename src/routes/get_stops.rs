use crate::{
    services::route_segment_resolver::{RouteSegmentResolver, StopSequence},
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{extract::State, Json};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::Deserialize;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetStopsPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub route_id: String,

    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub direction: String,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_stops(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetStopsPayload>,
) -> Result<Json<StopSequence>, AppError> {
    let sequence = RouteSegmentResolver::new(&state.tfl_client)
        .stop_sequence(&payload.route_id, &payload.direction)
        .await?;

    Ok(Json(sequence))
}
