use crate::{
    types::{
        app_state::AppState,
        bus_route_responses::{DashboardRouteResponse, DashboardRoutesResponse},
    },
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetDashboardRoutesPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub user_uuid: String,
}

pub async fn get_dashboard_routes(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetDashboardRoutesPayload>,
) -> Result<Json<DashboardRoutesResponse>, AppError> {
    let routes = state
        .supabase()?
        .select_bus_routes(&[("user_uuid", payload.user_uuid.as_str())])
        .await?;

    Ok(Json(DashboardRoutesResponse { routes }))
}

pub async fn get_dashboard_route(
    State(state): State<AppState>,
    Path(route_id): Path<String>,
) -> Result<Json<DashboardRouteResponse>, AppError> {
    let route = state
        .supabase()?
        .select_bus_routes(&[("id", route_id.as_str())])
        .await?;

    Ok(Json(DashboardRouteResponse { route }))
}
