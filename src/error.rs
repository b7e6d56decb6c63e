use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(&'static [&'static str]),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unexpected error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Body of every failed response. Client errors carry `msg`, server errors
/// carry the underlying `error` text.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Missing tripId/status")]
    pub msg: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl ErrorResponse {
    fn client(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            msg: Some(msg.into()),
            error: None,
            required: None,
        }
    }

    fn server(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            msg: None,
            error: Some(error.into()),
            required: None,
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MissingFields(_) => StatusCode::BAD_REQUEST,
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Database(_)
            | AppError::Migrate(_)
            | AppError::Config(_)
            | AppError::Io(_)
            | AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Maps a duplicate-key failure onto `Conflict`, leaving other errors as they are.
    pub fn on_unique_violation(self, msg: &str) -> Self {
        match self {
            AppError::Database(SqlxError::Database(ref db)) if db.is_unique_violation() => {
                AppError::Conflict(msg.to_string())
            }
            other => other,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            AppError::Validation(m)
            | AppError::Auth(m)
            | AppError::Conflict(m)
            | AppError::NotFound(m) => ErrorResponse::client(m.as_str()),
            AppError::MissingFields(fields) => ErrorResponse {
                required: Some(fields.iter().map(|f| f.to_string()).collect()),
                ..ErrorResponse::client("Missing required fields")
            },
            AppError::MethodNotAllowed => ErrorResponse::client("Method not allowed"),
            AppError::Database(e) => ErrorResponse::server(e.to_string()),
            AppError::Migrate(e) => ErrorResponse::server(e.to_string()),
            AppError::Io(e) => ErrorResponse::server(e.to_string()),
            AppError::Config(m) | AppError::Other(m) => ErrorResponse::server(m.as_str()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }

        (status, Json(self.body())).into_response()
    }
}
