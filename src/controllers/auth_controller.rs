use crate::{
    context::ApiContext,
    error::{AppError, AppResult, ErrorResponse},
    extract::Payload,
    models::{
        auth::{Credentials, LoginRequest, LoginResponse, NewUser, SignupRequest, SignupResponse},
        response::Envelope,
    },
    repositories::user_repository::UserRepository,
};
use axum::{Json, extract::State, http::StatusCode};

const EMAIL_TAKEN: &str = "Email already exists";

#[utoipa::path(
    post,
    path = "/signup",
    tag = "Auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = SignupResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
    )
)]
pub async fn signup(
    State(ctx): State<ApiContext>,
    Payload(data): Payload<SignupRequest>,
) -> AppResult<(StatusCode, Json<Envelope<SignupResponse>>)> {
    let user = NewUser::try_from(data)?;

    if UserRepository::email_exists(&ctx.db, &user.email).await? {
        return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
    }

    let id = UserRepository::create_user(&ctx.db, &user)
        .await
        .map_err(|e| e.on_unique_violation(EMAIL_TAKEN))?;

    tracing::info!(user_id = id, "user signed up");

    Ok((StatusCode::CREATED, Envelope::ok(SignupResponse { id })))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials matched", body = LoginResponse),
        (status = 400, description = "Missing email/password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
    )
)]
pub async fn login(
    State(ctx): State<ApiContext>,
    Payload(data): Payload<LoginRequest>,
) -> AppResult<Json<Envelope<LoginResponse>>> {
    let credentials = Credentials::try_from(data)?;

    let user = UserRepository::find_by_credentials(&ctx.db, &credentials)
        .await?
        .ok_or_else(|| AppError::Auth("Invalid credentials".to_string()))?;

    tracing::debug!(user_id = user.id, role = %user.role, "user logged in");

    Ok(Envelope::ok(LoginResponse { user }))
}
