pub mod admin_trip_controller;
pub mod auth_controller;
pub mod driver_controller;
pub mod trip_controller;
