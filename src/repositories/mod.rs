pub mod driver_repository;
pub mod trip_repository;
pub mod user_repository;

use crate::error::{AppError, AppResult};

fn inserted_id(raw: u64) -> AppResult<i64> {
    i64::try_from(raw).map_err(|_| AppError::Other(format!("Inserted id {raw} out of range")))
}
