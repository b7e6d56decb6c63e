use crate::{
    context::ApiContext,
    controllers::{
        admin_trip_controller::{list_trips, update_trip},
        driver_controller::{delete_driver, list_drivers, update_driver},
    },
    cors::endpoint,
};
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn admin_routes() -> Router<ApiContext> {
    Router::new()
        .route("/drivers/list", endpoint("GET,OPTIONS", get(list_drivers)))
        .route("/drivers/update", endpoint("POST,OPTIONS", post(update_driver)))
        .route("/drivers/delete", endpoint("DELETE,OPTIONS", delete(delete_driver)))
        .route("/trips/list", endpoint("GET,OPTIONS", get(list_trips)))
        .route("/trips/update", endpoint("POST,OPTIONS", post(update_trip)))
}
