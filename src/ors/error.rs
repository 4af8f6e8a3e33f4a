use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum OrsError {
    #[error("request to openrouteservice failed: {0}")]
    Transport(reqwest::Error),
    #[error("openrouteservice answered {status}: {body}")]
    Upstream { status: StatusCode, body: String },
}

/// Strips the request URL: the geocoding endpoint carries the credential in its query string.
impl From<reqwest::Error> for OrsError {
    fn from(err: reqwest::Error) -> Self {
        OrsError::Transport(err.without_url())
    }
}

impl OrsError {
    /// Text surfaced to the browser in the `details` field of an error envelope.
    pub fn details(&self) -> String {
        match self {
            OrsError::Transport(err) => err.to_string(),
            OrsError::Upstream { body, .. } => body.clone(),
        }
    }
}
