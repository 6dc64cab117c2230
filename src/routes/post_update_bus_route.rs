use crate::{
    services::supabase_client::types::bus_route_record::BusRouteChanges,
    types::{app_state::AppState, bus_route_responses::BusRouteWriteResponse},
    utils::{app_error::AppError, validated_json::ValidatedJson},
};
use axum::{
    extract::{Path, State},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;

#[cfg_attr(test, debug_handler)]
pub async fn post_update_bus_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(changes): ValidatedJson<BusRouteChanges>,
) -> Result<Json<BusRouteWriteResponse>, AppError> {
    let data = state
        .supabase()?
        .update_bus_route(&id, &changes)
        .await?;

    Ok(Json(BusRouteWriteResponse {
        message: "Bus route updated".to_string(),
        data,
    }))
}
