use crate::{
    services::supabase_client::types::bus_route_record::NewBusRoute,
    types::{app_state::AppState, bus_route_responses::BusRouteWriteResponse},
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{extract::State, Json};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct AddBusRoutePayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub bus_route: String,

    #[validate(range(min = 0, max = 100, message = "Must be between 0 and 100"))]
    pub percentage: i64,

    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub user_uuid: String,

    pub started_stop: String,
    pub ended_stop: String,
    pub user_email: Option<String>,
}

#[cfg_attr(test, debug_handler)]
pub async fn post_add_bus_route(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<AddBusRoutePayload>,
) -> Result<Json<BusRouteWriteResponse>, AppError> {
    let data = state
        .supabase()?
        .insert_bus_route(&NewBusRoute {
            bus_route: payload.bus_route,
            percentage_travelled: payload.percentage,
            started_stop: payload.started_stop,
            ended_stop: payload.ended_stop,
            user_uuid: payload.user_uuid,
            user_email: payload.user_email,
            bus_route_taken: true,
        })
        .await?;

    info!("Recorded bus route for user");

    Ok(Json(BusRouteWriteResponse {
        message: "Bus route added".to_string(),
        data,
    }))
}
