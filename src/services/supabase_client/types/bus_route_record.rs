use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

pub const BUS_ROUTES_TABLE: &str = "bus_routes_taken";

#[derive(Debug, Serialize, Deserialize)]
pub struct NewBusRoute {
    pub bus_route: String,
    pub percentage_travelled: i64,
    pub started_stop: String,
    pub ended_stop: String,
    pub user_uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub bus_route_taken: bool,
}

#[derive(Debug, Default, Validate, Serialize, Deserialize)]
pub struct BusRouteChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub bus_route: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_percentage",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(range(min = 0, max = 100, message = "Must be between 0 and 100"))]
    pub percentage_travelled: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_stop: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_stop: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_uuid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

// The mobile client sends the percentage as a string on update.
fn deserialize_percentage<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid percentage: {:?}", s))),
    }
}
