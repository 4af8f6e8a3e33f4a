use crate::map::models::LatLng;
use serde::{Deserialize, Serialize};

/// Body of `POST /v2/directions/driving-car/geojson`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRequest {
    pub coordinates: Vec<[f64; 2]>,
}

impl DirectionsRequest {
    pub fn between(start: LatLng, end: LatLng) -> Self {
        Self {
            coordinates: vec![start.to_lng_lat(), end.to_lng_lat()],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub features: Vec<GeocodeFeature>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeFeature {
    pub geometry: PointGeometry,
}

#[derive(Debug, Deserialize)]
pub struct PointGeometry {
    pub coordinates: [f64; 2],
}
