use crate::{
    context::ApiContext,
    controllers::auth_controller::{login, signup},
    cors::endpoint,
};
use axum::{Router, routing::post};

pub fn auth_routes() -> Router<ApiContext> {
    Router::new()
        .route("/signup", endpoint("POST,OPTIONS", post(signup)))
        .route("/login", endpoint("POST,OPTIONS", post(login)))
}
