use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GeocodeQueryParams {
    pub text: String,
}
