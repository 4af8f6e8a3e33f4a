use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    #[arg(default_value = "https://api.openrouteservice.org")]
    pub ors_base_url: Url,
    /// Credential sent to openrouteservice. Requests fail with a configuration error when unset.
    #[arg(long, env = "ORS_API_KEY", hide_env_values = true)]
    pub ors_api_key: Option<String>,
    #[arg(long, value_enum)]
    #[arg(default_value_t = PageVariant::Interactive)]
    pub page_variant: PageVariant,
    #[arg(long)]
    #[arg(default_value = "http://localhost:8501")]
    pub dashboard_url: Url,
    #[arg(long, value_delimiter = ',')]
    #[arg(default_value = "http://127.0.0.1:3000,http://localhost:3000")]
    pub allowed_origins: Vec<String>,
}

/// Which flavour of the analysis page is served at `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageVariant {
    /// Calls the directions proxy with a preset pair and dumps the raw result.
    Interactive,
    /// Only links out to the externally hosted dashboard.
    DashboardLink,
}
