pub mod supabase_client;
pub mod types;
