pub mod tfl_client_error;
pub mod tfl_route_sequence_response;
