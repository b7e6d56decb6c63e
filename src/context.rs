use sqlx::MySqlPool;

#[derive(Clone)]
pub struct ApiContext {
    pub db: MySqlPool,
}
