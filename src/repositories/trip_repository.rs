use crate::{
    error::AppResult,
    models::trip::{NewTrip, StatusChange, Trip, TripFilter, TripWithRider},
    repositories::inserted_id,
};
use sqlx::{MySql, MySqlPool, QueryBuilder};

const ADMIN_BOARD_SELECT: &str = r#"
    SELECT t.*, u.name AS user_name, u.email AS user_email
    FROM trips t
    JOIN users u ON u.id = t.user_id
"#;

pub struct TripRepository;

impl TripRepository {
    pub async fn create_trip(pool: &MySqlPool, trip: &NewTrip) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO trips
                (user_id, pickup_location, drop_location, university, ride_time, payment_method, price, status)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(trip.user_id)
        .bind(&trip.pickup_location)
        .bind(&trip.drop_location)
        .bind(&trip.university)
        .bind(&trip.ride_time)
        .bind(&trip.payment_method)
        .bind(trip.price)
        .bind(NewTrip::INITIAL_STATUS.as_str())
        .execute(pool)
        .await?;
        inserted_id(result.last_insert_id())
    }

    pub async fn trips_for_user(pool: &MySqlPool, user_id: i64) -> AppResult<Vec<Trip>> {
        let trips = sqlx::query_as::<_, Trip>(
            r#"
            SELECT *
            FROM trips
            WHERE user_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(trips)
    }

    pub async fn list_trips(pool: &MySqlPool, filter: &TripFilter) -> AppResult<Vec<TripWithRider>> {
        let trips = admin_board_query(filter)
            .build_query_as::<TripWithRider>()
            .fetch_all(pool)
            .await?;
        Ok(trips)
    }

    /// Applies an admin update and returns the number of trips touched.
    /// Without a driver in the change, `driver_id` is left as it was.
    pub async fn apply_status_change(pool: &MySqlPool, change: &StatusChange) -> AppResult<u64> {
        let result = match change.driver_id {
            Some(driver_id) => {
                sqlx::query(
                    r#"
                    UPDATE trips
                    SET status = ?, admin_note = ?, driver_id = ?, updated_at = CURRENT_TIMESTAMP(6)
                    WHERE id = ?
                    "#,
                )
                .bind(change.status.as_str())
                .bind(&change.admin_note)
                .bind(driver_id)
                .bind(change.trip_id)
                .execute(pool)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    UPDATE trips
                    SET status = ?, admin_note = ?, updated_at = CURRENT_TIMESTAMP(6)
                    WHERE id = ?
                    "#,
                )
                .bind(change.status.as_str())
                .bind(&change.admin_note)
                .bind(change.trip_id)
                .execute(pool)
                .await?
            }
        };
        Ok(result.rows_affected())
    }
}

fn admin_board_query(filter: &TripFilter) -> QueryBuilder<'static, MySql> {
    let mut query = QueryBuilder::new(ADMIN_BOARD_SELECT);
    let mut clause = " WHERE ";

    if let Some(status) = filter.status {
        query.push(clause).push("t.status = ").push_bind(status.as_str());
        clause = " AND ";
    }
    if let Some(driver_id) = filter.driver_id {
        query.push(clause).push("t.driver_id = ").push_bind(driver_id);
        clause = " AND ";
    }
    if filter.assigned_only {
        query.push(clause).push("t.driver_id IS NOT NULL");
    }

    query.push(" ORDER BY t.created_at DESC");
    query
}
