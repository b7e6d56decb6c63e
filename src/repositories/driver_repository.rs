use crate::{
    error::AppResult,
    models::{
        driver::{Driver, DriverProfile},
        user::Role,
    },
};
use sqlx::MySqlPool;

/// Drivers are rows of `users`; nothing here ever deletes one.
pub struct DriverRepository;

impl DriverRepository {
    pub async fn list_drivers(pool: &MySqlPool) -> AppResult<Vec<Driver>> {
        let drivers = sqlx::query_as::<_, Driver>(
            r#"
            SELECT id, name, phone, car_model, plate_number, is_active
            FROM users
            WHERE role = ?
            "#,
        )
        .bind(Role::Driver.as_str())
        .fetch_all(pool)
        .await?;
        Ok(drivers)
    }

    /// Returns the number of rows touched; `0` when the id is not a driver.
    pub async fn update_profile(pool: &MySqlPool, profile: &DriverProfile) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET phone = ?, car_model = ?, plate_number = ?, is_active = ?
            WHERE id = ? AND role = ?
            "#,
        )
        .bind(&profile.phone)
        .bind(&profile.car_model)
        .bind(&profile.plate_number)
        .bind(profile.is_active)
        .bind(profile.driver_id)
        .bind(Role::Driver.as_str())
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Turns a driver back into a plain rider: role reset, vehicle details
    /// cleared, account active. Trips keep their `driver_id`.
    pub async fn demote(pool: &MySqlPool, driver_id: Option<i64>) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET role = ?, phone = NULL, car_model = NULL, plate_number = NULL, is_active = 1
            WHERE id = ?
            "#,
        )
        .bind(Role::User.as_str())
        .bind(driver_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
