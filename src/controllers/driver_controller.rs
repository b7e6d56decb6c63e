use crate::{
    context::ApiContext,
    error::{AppResult, ErrorResponse},
    extract::{Params, Payload},
    models::{
        driver::{DeleteDriverQuery, DriverList, DriverProfile, UpdateDriverRequest},
        response::{Empty, Envelope},
    },
    repositories::driver_repository::DriverRepository,
};
use axum::{Json, extract::State};

#[utoipa::path(
    get,
    path = "/admin/drivers/list",
    tag = "Admin",
    responses(
        (status = 200, description = "All users with the driver role", body = DriverList),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn list_drivers(State(ctx): State<ApiContext>) -> AppResult<Json<Envelope<DriverList>>> {
    let drivers = DriverRepository::list_drivers(&ctx.db).await?;
    Ok(Envelope::ok(DriverList { drivers }))
}

// An unknown driverId still answers ok; nothing is surfaced to the caller.
#[utoipa::path(
    post,
    path = "/admin/drivers/update",
    tag = "Admin",
    request_body = UpdateDriverRequest,
    responses(
        (status = 200, description = "Profile saved (no-op for non-drivers)"),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn update_driver(
    State(ctx): State<ApiContext>,
    Payload(data): Payload<UpdateDriverRequest>,
) -> AppResult<Json<Envelope<Empty>>> {
    let profile = DriverProfile::from(data);
    let updated = DriverRepository::update_profile(&ctx.db, &profile).await?;

    tracing::debug!(driver_id = ?profile.driver_id, updated, "driver profile update");

    Ok(Envelope::done())
}

#[utoipa::path(
    delete,
    path = "/admin/drivers/delete",
    tag = "Admin",
    params(("driverId" = i64, Query, description = "Driver to demote back to a rider")),
    responses(
        (status = 200, description = "Driver demoted"),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn delete_driver(
    State(ctx): State<ApiContext>,
    Params(query): Params<DeleteDriverQuery>,
) -> AppResult<Json<Envelope<Empty>>> {
    let demoted = DriverRepository::demote(&ctx.db, query.driver_id).await?;

    tracing::info!(driver_id = ?query.driver_id, demoted, "driver demoted");

    Ok(Envelope::done())
}
