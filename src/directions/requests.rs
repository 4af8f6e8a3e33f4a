use crate::map::models::LatLng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: LatLng,
    pub end: LatLng,
}
