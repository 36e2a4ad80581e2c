use crate::config::Config;
use crate::frontend::FrontendAssets;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub frontend: FrontendAssets,
}
