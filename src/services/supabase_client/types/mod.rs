pub mod bus_route_record;
pub mod supabase_auth;
pub mod supabase_client_error;
