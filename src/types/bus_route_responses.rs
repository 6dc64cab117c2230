use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize)]
pub struct BusRouteWriteResponse {
    pub message: String,
    pub data: Vec<Value>,
}

#[derive(Serialize, Deserialize)]
pub struct BusRouteDataResponse {
    pub data: Vec<Value>,
}

#[derive(Serialize, Deserialize)]
pub struct DashboardRoutesResponse {
    pub routes: Vec<Value>,
}

#[derive(Serialize, Deserialize)]
pub struct DashboardRouteResponse {
    pub route: Vec<Value>,
}
