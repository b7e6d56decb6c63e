use utoipa::OpenApi;

use crate::{
    controllers::{
        admin_trip_controller::{__path_list_trips, __path_update_trip},
        auth_controller::{__path_login, __path_signup},
        driver_controller::{__path_delete_driver, __path_list_drivers, __path_update_driver},
        trip_controller::{__path_create_trip, __path_my_trips},
    },
    error::ErrorResponse,
    models::{
        auth::{LoginRequest, LoginResponse, SignupRequest, SignupResponse},
        driver::{Driver, DriverList, UpdateDriverRequest},
        trip::{
            AdminTripList, CreateTripRequest, Trip, TripCreated, TripList, TripStatus, TripUpdated,
            TripWithRider, UpdateTripRequest,
        },
        user::{Role, UserInfo},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        signup,
        login,
        create_trip,
        my_trips,
        list_trips,
        update_trip,
        list_drivers,
        update_driver,
        delete_driver
    ),
    components(
        schemas(
            SignupRequest,
            SignupResponse,
            LoginRequest,
            LoginResponse,
            UserInfo,
            Role,
            CreateTripRequest,
            TripCreated,
            Trip,
            TripWithRider,
            TripStatus,
            TripList,
            AdminTripList,
            UpdateTripRequest,
            TripUpdated,
            Driver,
            DriverList,
            UpdateDriverRequest,
            ErrorResponse
        )
    ),
    tags(
        (name = "Auth", description = "Rider signup and login"),
        (name = "Trips", description = "Booking and listing a rider's own trips"),
        (name = "Admin", description = "Trip board, status changes and driver directory"),
    ),
    info(
        title = "Campus Ride Booking API",
        version = "0.1.0",
        description = "Ride requests, driver assignment and driver management"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for path in [
            "/signup",
            "/login",
            "/trips/create",
            "/trips/my",
            "/admin/trips/list",
            "/admin/trips/update",
            "/admin/drivers/list",
            "/admin/drivers/update",
            "/admin/drivers/delete",
        ] {
            assert!(paths.contains(&path), "{path} missing from OpenAPI document");
        }
    }
}
