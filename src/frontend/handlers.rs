use actix_files::NamedFile;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

use crate::{app_state::AppState, errors::AppError};

use super::functions::{is_unmatched_api_path, residual_path};

#[derive(Serialize)]
pub struct ApiNotFoundResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct PlaceholderResponse {
    pub message: String,
}

/// Catch-all for everything the fixed routes and the static mount did not
/// claim. API misses keep their JSON shape; any other path is an SPA route
/// and gets `index.html`, or a placeholder until the frontend is built.
pub async fn spa_fallback(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let residual = residual_path(req.path());
    if is_unmatched_api_path(residual) {
        return Ok(HttpResponse::Ok().json(ApiNotFoundResponse {
            error: "API endpoint not found".to_string(),
        }));
    }

    match NamedFile::open_async(&app_state.frontend.index_file).await {
        Ok(index) => Ok(index.into_response(&req)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Ok(HttpResponse::Ok().json(PlaceholderResponse {
                message: "Frontend not built yet".to_string(),
            }))
        }
        Err(err) => Err(AppError::Io(err)),
    }
}
