use serde::{Deserialize, Serialize};

/// A geographic point as the browser sends it. Ranges are not checked.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// GeoJSON order, which is what openrouteservice expects.
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    pub fn from_lng_lat([lng, lat]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypicalRoute {
    pub name: String,
    pub start: LatLng,
    pub end: LatLng,
}
