pub mod auth;
pub mod de;
pub mod driver;
pub mod response;
pub mod trip;
pub mod user;
