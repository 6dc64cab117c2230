use axum::http::StatusCode;

use crate::{
    services::{supabase_client::supabase_client::SupabaseClient, tfl_client::tfl_client::TflClient},
    utils::app_error::AppError,
};

#[derive(Clone)]
pub struct AppState {
    pub tfl_client: TflClient,
    pub supabase_client: Option<SupabaseClient>,
    pub auth_key: Option<String>,
}

impl AppState {
    pub fn supabase(&self) -> Result<&SupabaseClient, AppError> {
        self.supabase_client.as_ref().ok_or_else(|| {
            AppError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Supabase credentials not properly set.",
            )
        })
    }
}
