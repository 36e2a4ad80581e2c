use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::AppError;

// --- Response payloads ---

#[derive(Serialize, ToSchema)]
pub struct GreetingResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct HelloResponse {
    pub message: String,
    pub description: String,
    pub version: String,
}

// --- Route Handlers ---

#[utoipa::path(
    get,
    path = "/",
    tag = "Greetings",
    responses(
        (status = 200, description = "Root greeting", body = GreetingResponse)
    )
)]
#[get("/")]
pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(GreetingResponse {
        message: "Hello World from FastAPI!".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "Greetings",
    responses(
        (status = 200, description = "Service description", body = HelloResponse)
    )
)]
#[get("/hello")]
pub async fn hello() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(HelloResponse {
        message: "Hello World!".to_string(),
        description: "This is a decoupled FastAPI + React app deployed on Databricks".to_string(),
        version: "1.0.0".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/greet/{name}",
    tag = "Greetings",
    params(
        ("name" = String, Path, description = "Name to greet, echoed back verbatim")
    ),
    responses(
        (status = 200, description = "Personalized greeting", body = GreetingResponse)
    )
)]
#[get("/greet/{name}")]
pub async fn greet(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();
    Ok(HttpResponse::Ok().json(GreetingResponse {
        message: format!("Hello, {}!", name),
    }))
}

// Функция для регистрации всех маршрутов этого модуля.
// `root` живет вне /api и регистрируется отдельно в configure_app.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(hello).service(greet);
}
