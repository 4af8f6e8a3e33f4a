use crate::cli::Args;
use crate::ors::client::OrsClient;
use crate::ors::provider::IRoutingProvider;
use crate::{ors, pages};
use std::sync::Arc;

/// Everything handlers share. Read-only once the server is up.
#[derive(Clone)]
pub struct AppContext<RP: IRoutingProvider> {
    pub provider: RP,
    pub ors_api_key: Option<Arc<str>>,
    pub analysis_page: Arc<str>,
}

impl<RP> AppContext<RP>
where
    RP: IRoutingProvider,
{
    pub fn new(args: &Args, provider: RP) -> Self {
        Self {
            provider,
            ors_api_key: ors::init(args).map(Arc::from),
            analysis_page: Arc::from(pages::render(args)),
        }
    }
}

pub fn init(args: &Args) -> Result<AppContext<OrsClient>, url::ParseError> {
    let client = OrsClient::new(args.ors_base_url.clone())?;
    Ok(AppContext::new(args, client))
}
