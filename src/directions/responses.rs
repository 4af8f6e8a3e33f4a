use crate::map::models::TypicalRoute;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

const SUMMARY_POINTER: &str = "/features/0/properties/summary";

/// What the browser gets back for a successful route lookup.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteSummaryResponse {
    /// Meters, copied verbatim from the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<Number>,
    /// Seconds, copied verbatim from the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_s: Option<Number>,
    pub geojson: Value,
}

impl RouteSummaryResponse {
    /// Never fails: an unexpected payload shape only leaves the summary fields empty.
    pub fn from_geojson(geojson: Value) -> Self {
        let summary = geojson.pointer(SUMMARY_POINTER);
        let number_at = |key: &str| match summary.and_then(|summary| summary.get(key)) {
            Some(Value::Number(number)) => Some(number.clone()),
            _ => None,
        };
        Self {
            distance_m: number_at("distance"),
            duration_s: number_at("duration"),
            geojson,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TypicalRoutesResponse {
    pub routes: Vec<TypicalRoute>,
}
