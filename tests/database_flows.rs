//! End-to-end flows against a real MySQL server.
//!
//! Run with `DATABASE_URL=mysql://... cargo test -- --ignored`.

mod common;

use axum::http::{Method, StatusCode};
use common::*;
use serde_json::{Value, json};
use sqlx::MySqlPool;

async fn signup(app: &axum::Router, name: &str, email: &str) -> i64 {
    let reply = post(app, "/signup", json!({ "name": name, "email": email, "password": "pw-123" })).await;
    assert_eq!(reply.status, StatusCode::CREATED);
    reply.json()["id"].as_i64().unwrap()
}

async fn book(app: &axum::Router, user_id: i64, pickup: &str) -> i64 {
    let reply = post(
        app,
        "/trips/create",
        json!({
            "userId": user_id,
            "pickupLocation": pickup,
            "dropLocation": "Main Library",
            "university": "State University",
            "rideTime": "2025-03-01 08:30:00",
            "paymentMethod": "cash",
            "price": 4.5
        }),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED);
    let body = reply.json();
    assert_eq!(body["status"], "pending");
    body["tripId"].as_i64().unwrap()
}

async fn make_driver(pool: &MySqlPool, id: i64) {
    sqlx::query("UPDATE users SET role = 'driver', phone = '0100', car_model = 'Corolla' WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
}

fn ids(trips: &Value) -> Vec<i64> {
    trips
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect()
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs a MySQL DATABASE_URL"]
async fn signup_then_duplicate_email_conflicts(pool: MySqlPool) {
    let app = app_with(pool);

    let id = signup(&app, "Lina", "lina@campus.edu").await;
    assert!(id > 0);

    let reply = post(&app, "/signup", json!({ "name": "Other", "email": "lina@campus.edu", "password": "x" })).await;
    assert_eq!(reply.status, StatusCode::CONFLICT);
    assert_eq!(reply.json()["msg"], "Email already exists");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs a MySQL DATABASE_URL"]
async fn login_matches_exact_credentials(pool: MySqlPool) {
    let app = app_with(pool);
    signup(&app, "Lina", "lina@campus.edu").await;

    let reply = post(&app, "/login", json!({ "email": "lina@campus.edu", "password": "pw-123" })).await;
    assert_eq!(reply.status, StatusCode::OK);
    let user = &reply.json()["user"];
    assert_eq!(user["email"], "lina@campus.edu");
    assert_eq!(user["role"], "user");
    assert!(user.get("password").is_none());

    let reply = post(&app, "/login", json!({ "email": "lina@campus.edu", "password": "wrong" })).await;
    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs a MySQL DATABASE_URL"]
async fn my_trips_are_the_riders_own_newest_first(pool: MySqlPool) {
    let app = app_with(pool);
    let lina = signup(&app, "Lina", "lina@campus.edu").await;
    let omar = signup(&app, "Omar", "omar@campus.edu").await;

    let first = book(&app, lina, "Dorm A").await;
    book(&app, omar, "Dorm B").await;
    let second = book(&app, lina, "Dorm C").await;

    let reply = get(&app, &format!("/trips/my?userId={lina}")).await;
    assert_eq!(reply.status, StatusCode::OK);
    let body = reply.json();
    assert_eq!(ids(&body["trips"]), vec![second, first]);
    assert!(body["trips"].as_array().unwrap().iter().all(|t| t["user_id"] == lina));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs a MySQL DATABASE_URL"]
async fn assigning_a_driver_persists_and_survives_completion(pool: MySqlPool) {
    let app = app_with(pool.clone());
    let rider = signup(&app, "Lina", "lina@campus.edu").await;
    let driver = signup(&app, "Sam", "sam@campus.edu").await;
    make_driver(&pool, driver).await;
    let trip = book(&app, rider, "Dorm A").await;

    let reply = post(&app, "/admin/trips/update", json!({ "tripId": trip, "status": "assigned", "driverId": driver })).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json()["msg"], "Trip updated & driver assigned");

    let reply = post(&app, "/admin/trips/update", json!({ "tripId": trip, "status": "completed" })).await;
    assert_eq!(reply.json()["msg"], "Trip updated");

    let (status, driver_id): (String, Option<i64>) =
        sqlx::query_as("SELECT status, driver_id FROM trips WHERE id = ?")
            .bind(trip)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(status, "completed");
    assert_eq!(driver_id, Some(driver));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs a MySQL DATABASE_URL"]
async fn updating_a_missing_trip_is_404(pool: MySqlPool) {
    let app = app_with(pool);
    let reply = post(&app, "/admin/trips/update", json!({ "tripId": 9999, "status": "approved" })).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.json()["msg"], "Trip not found");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs a MySQL DATABASE_URL"]
async fn admin_filters_intersect(pool: MySqlPool) {
    let app = app_with(pool.clone());
    let rider = signup(&app, "Lina", "lina@campus.edu").await;
    let driver = signup(&app, "Sam", "sam@campus.edu").await;
    make_driver(&pool, driver).await;

    let assigned = book(&app, rider, "Dorm A").await;
    let approved_with_driver = book(&app, rider, "Dorm B").await;
    let approved_alone = book(&app, rider, "Dorm C").await;

    post(&app, "/admin/trips/update", json!({ "tripId": assigned, "status": "assigned", "driverId": driver })).await;
    post(&app, "/admin/trips/update", json!({ "tripId": approved_with_driver, "status": "approved", "driverId": driver })).await;
    post(&app, "/admin/trips/update", json!({ "tripId": approved_alone, "status": "approved" })).await;

    let reply = get(&app, "/admin/trips/list?assignedOnly=1").await;
    let mut assigned_ids = ids(&reply.json()["trips"]);
    assigned_ids.sort();
    assert_eq!(assigned_ids, vec![assigned, approved_with_driver]);

    let reply = get(&app, "/admin/trips/list?assignedOnly=1&status=approved").await;
    let body = reply.json();
    assert_eq!(ids(&body["trips"]), vec![approved_with_driver]);
    assert_eq!(body["trips"][0]["user_name"], "Lina");
    assert_eq!(body["trips"][0]["user_email"], "lina@campus.edu");

    let reply = get(&app, &format!("/admin/trips/list?driverId={driver}&status=assigned")).await;
    assert_eq!(ids(&reply.json()["trips"]), vec![assigned]);

    let reply = get(&app, "/admin/trips/list").await;
    assert_eq!(reply.json()["trips"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs a MySQL DATABASE_URL"]
async fn deleting_a_driver_demotes_it(pool: MySqlPool) {
    let app = app_with(pool.clone());
    let driver = signup(&app, "Sam", "sam@campus.edu").await;
    make_driver(&pool, driver).await;

    let reply = get(&app, "/admin/drivers/list").await;
    assert_eq!(ids(&reply.json()["drivers"]), vec![driver]);

    let reply = post(&app, "/admin/drivers/update", json!({ "driverId": driver, "plateNumber": "KDA 1", "isActive": 0 })).await;
    assert_eq!(reply.json(), json!({ "ok": true }));
    let reply = get(&app, "/admin/drivers/list").await;
    assert_eq!(reply.json()["drivers"][0]["is_active"], 0);
    assert_eq!(reply.json()["drivers"][0]["plate_number"], "KDA 1");

    let reply = send(&app, Method::DELETE, &format!("/admin/drivers/delete?driverId={driver}"), None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json(), json!({ "ok": true }));

    let (role, is_active, phone): (String, i8, Option<String>) =
        sqlx::query_as("SELECT role, is_active, phone FROM users WHERE id = ?")
            .bind(driver)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(role, "user");
    assert_eq!(is_active, 1);
    assert_eq!(phone, None);

    let reply = get(&app, "/admin/drivers/list").await;
    assert!(reply.json()["drivers"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "needs a MySQL DATABASE_URL"]
async fn updating_a_rider_as_driver_changes_nothing(pool: MySqlPool) {
    let app = app_with(pool.clone());
    let rider = signup(&app, "Lina", "lina@campus.edu").await;

    let reply = post(
        &app,
        "/admin/drivers/update",
        json!({ "driverId": rider, "phone": "0199", "carModel": "Civic", "isActive": 0 }),
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json(), json!({ "ok": true }));

    let (role, is_active, phone): (String, i8, Option<String>) =
        sqlx::query_as("SELECT role, is_active, phone FROM users WHERE id = ?")
            .bind(rider)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(role, "user");
    assert_eq!(is_active, 1);
    assert_eq!(phone, None);
}
