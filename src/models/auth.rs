use crate::{
    error::{AppError, AppResult},
    models::{de, user::UserInfo},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SignupRequest {
    #[serde(deserialize_with = "de::text")]
    #[schema(example = "Lina Haddad")]
    pub name: Option<String>,

    #[serde(deserialize_with = "de::text")]
    #[schema(example = "lina@campus.edu")]
    pub email: Option<String>,

    #[serde(deserialize_with = "de::text")]
    #[schema(example = "hunter22")]
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(deserialize_with = "de::text")]
    #[schema(example = "lina@campus.edu")]
    pub email: Option<String>,

    #[serde(deserialize_with = "de::text")]
    #[schema(example = "hunter22")]
    pub password: Option<String>,
}

/// A signup with every field present.
#[derive(Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Credentials to match verbatim against the `users` table.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl TryFrom<SignupRequest> for NewUser {
    type Error = AppError;

    fn try_from(req: SignupRequest) -> AppResult<Self> {
        match (req.name, req.email, req.password) {
            (Some(name), Some(email), Some(password)) => Ok(Self {
                name,
                email,
                password,
            }),
            _ => Err(AppError::Validation("Missing fields".to_string())),
        }
    }
}

impl TryFrom<LoginRequest> for Credentials {
    type Error = AppError;

    fn try_from(req: LoginRequest) -> AppResult<Self> {
        match (req.email, req.password) {
            (Some(email), Some(password)) => Ok(Self { email, password }),
            _ => Err(AppError::Validation("Missing email/password".to_string())),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SignupResponse {
    #[schema(example = 12)]
    pub id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserInfo,
}
