pub mod app_error;
pub mod bearer_token;
pub mod validated_json;
pub mod validated_query;
