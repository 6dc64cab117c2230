pub mod route_segment_resolver;
pub mod supabase_client;
pub mod tfl_client;
