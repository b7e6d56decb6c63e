use crate::{
    context::ApiContext,
    error::{AppError, AppResult, ErrorResponse},
    extract::{Params, Payload},
    models::{
        response::Envelope,
        trip::{AdminTripList, AdminTripsQuery, StatusChange, TripFilter, TripUpdated, UpdateTripRequest},
    },
    repositories::trip_repository::TripRepository,
};
use axum::{Json, extract::State};

#[utoipa::path(
    get,
    path = "/admin/trips/list",
    tag = "Admin",
    params(
        ("status" = Option<String>, Query, description = "Exact status match"),
        ("driverId" = Option<i64>, Query, description = "Trips assigned to this driver"),
        ("assignedOnly" = Option<String>, Query, description = "`1` keeps only trips with a driver"),
    ),
    responses(
        (status = 200, description = "Trips with rider name and email, newest first", body = AdminTripList),
        (status = 400, description = "Invalid filter", body = ErrorResponse),
    )
)]
pub async fn list_trips(
    State(ctx): State<ApiContext>,
    Params(query): Params<AdminTripsQuery>,
) -> AppResult<Json<Envelope<AdminTripList>>> {
    let filter = TripFilter::try_from(query)?;
    let trips = TripRepository::list_trips(&ctx.db, &filter).await?;

    tracing::debug!(count = trips.len(), ?filter, "admin trip board");

    Ok(Envelope::ok(AdminTripList { trips }))
}

#[utoipa::path(
    post,
    path = "/admin/trips/update",
    tag = "Admin",
    request_body = UpdateTripRequest,
    responses(
        (status = 200, description = "Status (and driver) saved", body = TripUpdated),
        (status = 400, description = "Missing or invalid tripId/status/driverId", body = ErrorResponse),
        (status = 404, description = "Trip not found", body = ErrorResponse),
    )
)]
pub async fn update_trip(
    State(ctx): State<ApiContext>,
    Payload(data): Payload<UpdateTripRequest>,
) -> AppResult<Json<Envelope<TripUpdated>>> {
    let change = StatusChange::try_from(data)?;

    if TripRepository::apply_status_change(&ctx.db, &change).await? == 0 {
        return Err(AppError::NotFound("Trip not found".to_string()));
    }

    tracing::info!(
        trip_id = change.trip_id,
        status = %change.status,
        driver_id = ?change.driver_id,
        "trip updated"
    );

    Ok(Envelope::ok(TripUpdated {
        msg: change.message().to_string(),
    }))
}
