#![allow(non_snake_case)]
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StopPoint {
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StopPointSequence {
    #[serde(default)]
    pub stopPoint: Vec<StopPoint>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RouteSequenceResponse {
    #[serde(default)]
    pub stopPointSequences: Vec<StopPointSequence>,
}
