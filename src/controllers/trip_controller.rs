use crate::{
    context::ApiContext,
    error::{AppError, AppResult, ErrorResponse},
    extract::{Params, Payload},
    models::{
        response::Envelope,
        trip::{CreateTripRequest, MyTripsQuery, NewTrip, TripCreated, TripList},
    },
    repositories::trip_repository::TripRepository,
};
use axum::{Json, extract::State, http::StatusCode};

#[utoipa::path(
    post,
    path = "/trips/create",
    tag = "Trips",
    request_body = CreateTripRequest,
    responses(
        (status = 201, description = "Trip booked as pending", body = TripCreated),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
    )
)]
pub async fn create_trip(
    State(ctx): State<ApiContext>,
    Payload(data): Payload<CreateTripRequest>,
) -> AppResult<(StatusCode, Json<Envelope<TripCreated>>)> {
    let trip = NewTrip::try_from(data)?;
    let trip_id = TripRepository::create_trip(&ctx.db, &trip).await?;

    tracing::info!(trip_id, user_id = trip.user_id, "trip requested");

    Ok((
        StatusCode::CREATED,
        Envelope::ok(TripCreated {
            trip_id,
            status: NewTrip::INITIAL_STATUS,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/trips/my",
    tag = "Trips",
    params(("userId" = i64, Query, description = "Rider whose trips to list")),
    responses(
        (status = 200, description = "Rider's trips, newest first", body = TripList),
        (status = 400, description = "Missing userId", body = ErrorResponse),
    )
)]
pub async fn my_trips(
    State(ctx): State<ApiContext>,
    Params(query): Params<MyTripsQuery>,
) -> AppResult<Json<Envelope<TripList>>> {
    let user_id = query
        .user_id
        .ok_or_else(|| AppError::Validation("Missing userId".to_string()))?;

    let trips = TripRepository::trips_for_user(&ctx.db, user_id).await?;

    Ok(Envelope::ok(TripList { trips }))
}
