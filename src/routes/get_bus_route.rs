use crate::{
    types::{app_state::AppState, bus_route_responses::BusRouteDataResponse},
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetBusRoutePayload {
    pub user_email: Option<String>,
}

pub async fn get_bus_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedQuery(payload): ValidatedQuery<GetBusRoutePayload>,
) -> Result<Json<BusRouteDataResponse>, AppError> {
    let mut filters = vec![("id", id.as_str())];
    if let Some(email) = payload.user_email.as_deref().filter(|e| !e.is_empty()) {
        filters.push(("user_email", email));
    }

    let data = state.supabase()?.select_bus_routes(&filters).await?;

    Ok(Json(BusRouteDataResponse { data }))
}
