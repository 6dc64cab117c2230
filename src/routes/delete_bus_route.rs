use crate::{
    types::{app_state::AppState, bus_route_responses::BusRouteWriteResponse},
    utils::app_error::AppError,
};
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn delete_bus_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BusRouteWriteResponse>, AppError> {
    let data = state.supabase()?.delete_bus_route(&id).await?;

    Ok(Json(BusRouteWriteResponse {
        message: "Bus route deleted".to_string(),
        data,
    }))
}
