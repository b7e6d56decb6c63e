use crate::{
    error::{AppError, AppResult},
    models::de,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::{fmt, str::FromStr};
use thiserror::Error;
use time::{OffsetDateTime, PrimitiveDateTime};
use utoipa::ToSchema;

time::serde::format_description!(
    ride_time_format,
    PrimitiveDateTime,
    "[year]-[month]-[day] [hour]:[minute]:[second]"
);

/// Where a trip is in its lifecycle. Admins may move a trip from any status
/// to any other; only `Assigned` carries an extra requirement (a driver).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Pending,
    Approved,
    Assigned,
    Rejected,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub const ALL: [TripStatus; 6] = [
        TripStatus::Pending,
        TripStatus::Approved,
        TripStatus::Assigned,
        TripStatus::Rejected,
        TripStatus::Completed,
        TripStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TripStatus::Pending => "pending",
            TripStatus::Approved => "approved",
            TripStatus::Assigned => "assigned",
            TripStatus::Rejected => "rejected",
            TripStatus::Completed => "completed",
            TripStatus::Cancelled => "cancelled",
        }
    }

    pub fn requires_driver(self) -> bool {
        self == TripStatus::Assigned
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown trip status '{0}'")]
pub struct UnknownStatus(pub String);

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for TripStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Trip {
    pub id: i64,
    pub user_id: i64,
    pub driver_id: Option<i64>,
    pub pickup_location: String,
    pub drop_location: String,
    pub university: String,
    #[serde(with = "ride_time_format")]
    pub ride_time: PrimitiveDateTime,
    pub payment_method: String,
    pub price: f64,
    #[sqlx(try_from = "String")]
    pub status: TripStatus,
    pub admin_note: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// A trip joined with the rider who booked it, as shown on the admin board.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct TripWithRider {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub trip: Trip,
    pub user_name: String,
    pub user_email: String,
}

pub const REQUIRED_TRIP_FIELDS: &[&str] = &[
    "userId",
    "pickupLocation",
    "dropLocation",
    "university",
    "rideTime",
    "paymentMethod",
    "price",
];

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateTripRequest {
    #[serde(deserialize_with = "de::id")]
    #[schema(example = 12)]
    pub user_id: Option<i64>,

    #[serde(deserialize_with = "de::text")]
    #[schema(example = "North Gate Dorms")]
    pub pickup_location: Option<String>,

    #[serde(deserialize_with = "de::text")]
    #[schema(example = "Engineering Building")]
    pub drop_location: Option<String>,

    #[serde(deserialize_with = "de::text")]
    #[schema(example = "State University")]
    pub university: Option<String>,

    #[serde(deserialize_with = "de::text")]
    #[schema(example = "2025-03-01 08:30:00")]
    pub ride_time: Option<String>,

    #[serde(deserialize_with = "de::text")]
    #[schema(example = "cash")]
    pub payment_method: Option<String>,

    #[serde(deserialize_with = "de::number")]
    #[schema(example = 4.5)]
    pub price: Option<f64>,
}

/// A booking with every field present; always stored as `pending`.
#[derive(Debug, Clone)]
pub struct NewTrip {
    pub user_id: i64,
    pub pickup_location: String,
    pub drop_location: String,
    pub university: String,
    pub ride_time: String,
    pub payment_method: String,
    pub price: f64,
}

impl NewTrip {
    pub const INITIAL_STATUS: TripStatus = TripStatus::Pending;
}

impl TryFrom<CreateTripRequest> for NewTrip {
    type Error = AppError;

    fn try_from(req: CreateTripRequest) -> AppResult<Self> {
        let missing = || AppError::MissingFields(REQUIRED_TRIP_FIELDS);

        Ok(Self {
            user_id: req.user_id.ok_or_else(missing)?,
            pickup_location: req.pickup_location.ok_or_else(missing)?,
            drop_location: req.drop_location.ok_or_else(missing)?,
            university: req.university.ok_or_else(missing)?,
            ride_time: req.ride_time.ok_or_else(missing)?,
            payment_method: req.payment_method.ok_or_else(missing)?,
            price: req.price.ok_or_else(missing)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MyTripsQuery {
    #[serde(deserialize_with = "de::id")]
    pub user_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminTripsQuery {
    #[serde(deserialize_with = "de::text")]
    pub status: Option<String>,

    #[serde(deserialize_with = "de::id")]
    pub driver_id: Option<i64>,

    #[serde(deserialize_with = "de::flag")]
    pub assigned_only: Option<bool>,
}

/// Filters for the admin trip board; every present filter must hold.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TripFilter {
    pub status: Option<TripStatus>,
    pub driver_id: Option<i64>,
    pub assigned_only: bool,
}

impl TryFrom<AdminTripsQuery> for TripFilter {
    type Error = AppError;

    fn try_from(query: AdminTripsQuery) -> AppResult<Self> {
        let status = query
            .status
            .map(|s| s.parse::<TripStatus>())
            .transpose()
            .map_err(|_| AppError::Validation("Invalid status".to_string()))?;

        Ok(Self {
            status,
            driver_id: query.driver_id,
            assigned_only: query.assigned_only.unwrap_or(false),
        })
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateTripRequest {
    #[serde(deserialize_with = "de::id")]
    #[schema(example = 31)]
    pub trip_id: Option<i64>,

    #[serde(deserialize_with = "de::text")]
    #[schema(example = "assigned")]
    pub status: Option<String>,

    #[serde(deserialize_with = "de::text")]
    #[schema(example = "Driver confirmed by phone")]
    pub admin_note: Option<String>,

    #[serde(deserialize_with = "de::id")]
    #[schema(example = 5)]
    pub driver_id: Option<i64>,
}

/// A validated admin update. When `driver_id` is present the driver is
/// (re)assigned together with the status; otherwise the trip keeps whatever
/// driver it already had.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub trip_id: i64,
    pub status: TripStatus,
    pub admin_note: Option<String>,
    pub driver_id: Option<i64>,
}

impl StatusChange {
    pub fn assigns_driver(&self) -> bool {
        self.driver_id.is_some()
    }

    pub fn message(&self) -> &'static str {
        if self.assigns_driver() {
            "Trip updated & driver assigned"
        } else {
            "Trip updated"
        }
    }
}

impl TryFrom<UpdateTripRequest> for StatusChange {
    type Error = AppError;

    fn try_from(req: UpdateTripRequest) -> AppResult<Self> {
        let (Some(trip_id), Some(status)) = (req.trip_id, req.status) else {
            return Err(AppError::Validation("Missing tripId/status".to_string()));
        };

        let status: TripStatus = status
            .parse()
            .map_err(|_| AppError::Validation("Invalid status".to_string()))?;

        if status.requires_driver() && req.driver_id.is_none() {
            return Err(AppError::Validation(
                "Missing driverId for assigned status".to_string(),
            ));
        }

        Ok(Self {
            trip_id,
            status,
            admin_note: req.admin_note,
            driver_id: req.driver_id,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripCreated {
    #[schema(example = 31)]
    pub trip_id: i64,
    pub status: TripStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TripList {
    pub trips: Vec<Trip>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminTripList {
    pub trips: Vec<TripWithRider>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TripUpdated {
    #[schema(example = "Trip updated & driver assigned")]
    pub msg: String,
}
