pub mod tfl_client;
pub mod types;
