use crate::models::de;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A user row with `role = 'driver'` and its vehicle details.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub car_model: Option<String>,
    pub plate_number: Option<String>,
    /// Stored as `TINYINT(1)`; serialized as `0`/`1`.
    #[schema(example = 1)]
    pub is_active: i8,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateDriverRequest {
    #[serde(deserialize_with = "de::id")]
    #[schema(example = 5)]
    pub driver_id: Option<i64>,

    #[schema(example = "+1 555 0100")]
    pub phone: Option<String>,

    #[schema(example = "Toyota Corolla")]
    pub car_model: Option<String>,

    #[schema(example = "KDA 123A")]
    pub plate_number: Option<String>,

    #[serde(deserialize_with = "de::flag")]
    #[schema(example = true)]
    pub is_active: Option<bool>,
}

/// New vehicle details for a driver. A driver left without an explicit
/// `isActive` is treated as active.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverProfile {
    pub driver_id: Option<i64>,
    pub phone: Option<String>,
    pub car_model: Option<String>,
    pub plate_number: Option<String>,
    pub is_active: bool,
}

impl From<UpdateDriverRequest> for DriverProfile {
    fn from(req: UpdateDriverRequest) -> Self {
        Self {
            driver_id: req.driver_id,
            phone: req.phone,
            car_model: req.car_model,
            plate_number: req.plate_number,
            is_active: req.is_active.unwrap_or(true),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteDriverQuery {
    #[serde(deserialize_with = "de::id")]
    pub driver_id: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DriverList {
    pub drivers: Vec<Driver>,
}
