use crate::cli::Args;

pub mod client;
pub mod error;
pub mod models;
pub mod provider;

pub const ORS_API_KEY: &str = "ORS_API_KEY";

const SUSPICIOUS_FRAGMENTS: [&str; 6] = [
    "http",
    "client error",
    "bad request",
    "forbidden",
    "erreur",
    "error:",
];
const MIN_CREDENTIAL_LENGTH: usize = 20;
const MAX_CREDENTIAL_LENGTH: usize = 256;

/// Returns the usable credential from the configuration; empty values count as unset.
pub fn init(args: &Args) -> Option<String> {
    let credential = args
        .ors_api_key
        .clone()
        .filter(|credential| !credential.is_empty());
    match &credential {
        None => tracing::warn!(
            "The `{}` environment variable isn't set. Directions requests will fail.",
            ORS_API_KEY,
        ),
        Some(credential) if !credential_looks_valid(credential) => tracing::warn!(
            "The `{}` value doesn't look like an openrouteservice key. Forwarding it anyway.",
            ORS_API_KEY,
        ),
        Some(_) => {}
    }
    tracing::info!(ors_base_url = %args.ors_base_url, "Initialized openrouteservice configuration.");
    credential
}

/// Catches the usual copy-paste accidents, such as an error page pasted instead of a key.
pub fn credential_looks_valid(credential: &str) -> bool {
    let credential = credential.trim();
    if credential.is_empty() {
        return false;
    }
    let lowercase = credential.to_lowercase();
    if SUSPICIOUS_FRAGMENTS
        .iter()
        .any(|fragment| lowercase.contains(fragment))
    {
        return false;
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || "+/=_-.".contains(c);
    if !credential.chars().all(allowed) {
        return false;
    }
    (MIN_CREDENTIAL_LENGTH..=MAX_CREDENTIAL_LENGTH).contains(&credential.len())
}
