use crate::{
    context::ApiContext,
    controllers::trip_controller::{create_trip, my_trips},
    cors::endpoint,
};
use axum::{
    Router,
    routing::{get, post},
};

pub fn trip_routes() -> Router<ApiContext> {
    Router::new()
        .route("/create", endpoint("POST,OPTIONS", post(create_trip)))
        .route("/my", endpoint("GET,OPTIONS", get(my_trips)))
}
