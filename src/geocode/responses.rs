use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceResponse {
    pub lat: f64,
    pub lng: f64,
    pub source: PlaceSource,
}

/// Where a geocoded position came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceSource {
    Provider,
    Builtin,
}
