use axum::Json;
use serde::Serialize;

/// Success body: `{ "ok": true, ...payload }`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub ok: bool,
    #[serde(flatten)]
    pub payload: T,
}

/// Payload for endpoints that only report success.
#[derive(Debug, Default, Serialize)]
pub struct Empty {}

impl<T: Serialize> Envelope<T> {
    pub fn ok(payload: T) -> Json<Self> {
        Json(Self { ok: true, payload })
    }
}

impl Envelope<Empty> {
    pub fn done() -> Json<Self> {
        Self::ok(Empty {})
    }
}
