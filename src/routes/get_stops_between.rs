use crate::{
    services::route_segment_resolver::{RouteSegmentResolver, StopsBetween},
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{extract::State, Json};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::Deserialize;
use validator::Validate;

fn default_direction() -> String {
    "outbound".to_string()
}

#[derive(Validate, Deserialize)]
pub struct GetStopsBetweenPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub route_id: String,

    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub from_stop_id: String,

    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub to_stop_id: String,

    #[serde(default = "default_direction")]
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub direction: String,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_stops_between(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetStopsBetweenPayload>,
) -> Result<Json<StopsBetween>, AppError> {
    let between = RouteSegmentResolver::new(&state.tfl_client)
        .stops_between(
            &payload.route_id,
            &payload.from_stop_id,
            &payload.to_stop_id,
            &payload.direction,
        )
        .await?;

    Ok(Json(between))
}
