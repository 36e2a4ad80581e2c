pub mod functions;
pub mod handlers;

pub use functions::{FrontendAssets, is_unmatched_api_path, residual_path};
pub use handlers::spa_fallback;
