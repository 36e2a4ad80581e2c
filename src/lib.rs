pub mod api;
pub mod app_state;
pub mod config;
pub mod errors;
pub mod frontend;

use actix_files::Files;
use actix_web::web;

use crate::app_state::AppState;

/// Full routing tree, shared by the server binary and the test harness so
/// the conditional static mount and the SPA catch-all behave identically in
/// both.
pub fn configure_app(state: AppState) -> impl Fn(&mut web::ServiceConfig) + Clone {
    move |cfg| {
        cfg.app_data(web::Data::new(state.clone()))
            .service(api::greetings::root)
            .service(
                web::scope("/api")
                    .configure(api::health::init_routes)
                    .configure(api::greetings::init_routes),
            );

        // The static mount decision was taken once at startup; without the
        // directory the /static routes do not exist and such requests hit
        // the catch-all below.
        if let Some(static_dir) = state.frontend.static_dir.clone() {
            cfg.service(Files::new("/static", static_dir));
        }

        cfg.default_service(web::get().to(frontend::spa_fallback));
    }
}
