use actix_cors::Cors;
use actix_web::{App, HttpServer};
use dotenvy::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use hello_web::api::{greetings, health, middleware::RequestId};
use hello_web::app_state::AppState;
use hello_web::config::Config;
use hello_web::configure_app;
use hello_web::frontend::FrontendAssets;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().expect("Failed to load configuration");
    let frontend = FrontendAssets::discover(&config);

    #[derive(OpenApi)]
    #[openapi(
        info(title = "Hello World API", version = "1.0.0"),
        paths(
            greetings::root,
            greetings::hello,
            greetings::greet,
            health::health_check,
        ),
        components(schemas(
            greetings::GreetingResponse,
            greetings::HelloResponse,
            health::HealthResponse,
        )),
        tags(
            (name = "Greetings", description = "Fixed greeting endpoints"),
            (name = "Health", description = "Service liveness endpoints")
        )
    )]
    struct ApiDoc;

    let host = config.host.clone();
    let port = config.port;

    log::info!("Starting server at http://{}:{}", host, port);
    log::info!("Swagger UI available at http://{}:{}/swagger-ui/", host, port);

    let state = AppState { config, frontend };

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(RequestId)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(configure_app(state.clone()))
    })
    .bind((host, port))?
    .run()
    .await
}
