use crate::{
    error::AppResult,
    models::{
        auth::{Credentials, NewUser},
        user::{Role, UserInfo},
    },
    repositories::inserted_id,
};
use sqlx::MySqlPool;

pub struct UserRepository;

impl UserRepository {
    pub async fn email_exists(pool: &MySqlPool, email: &str) -> AppResult<bool> {
        let found: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT id FROM users WHERE email = ? LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;
        Ok(found.is_some())
    }

    /// Inserts a rider account and returns its id. Passwords are stored as
    /// given, matching the existing user table.
    pub async fn create_user(pool: &MySqlPool, user: &NewUser) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email, password, role)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(Role::User.as_str())
        .execute(pool)
        .await?;
        inserted_id(result.last_insert_id())
    }

    pub async fn find_by_credentials(
        pool: &MySqlPool,
        credentials: &Credentials,
    ) -> AppResult<Option<UserInfo>> {
        let user = sqlx::query_as::<_, UserInfo>(
            r#"
            SELECT id, name, email, role
            FROM users
            WHERE email = ? AND password = ?
            LIMIT 1
            "#,
        )
        .bind(&credentials.email)
        .bind(&credentials.password)
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }
}
