mod admin_routes;
mod auth_routes;
mod trip_routes;

use crate::{context::ApiContext, cors, error::AppError, swagger::ApiDoc};
use axum::{Json, Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub use admin_routes::admin_routes;
pub use auth_routes::auth_routes;
pub use trip_routes::trip_routes;

pub fn app(ctx: ApiContext) -> Router {
    Router::new()
        .merge(auth_routes())
        .nest("/trips", trip_routes())
        .nest("/admin", admin_routes())
        .route("/api-docs/openapi.json", get(openapi_json))
        .fallback(not_found)
        .layer(cors::allow_any_origin())
        .layer(cors::allow_content_type())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
