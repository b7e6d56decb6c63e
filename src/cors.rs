use crate::{context::ApiContext, error::AppError};
use axum::{
    http::{HeaderValue, StatusCode, header},
    routing::{MethodFilter, MethodRouter},
};
use tower_http::set_header::SetResponseHeaderLayer;

/// Wraps a single-verb route so that `OPTIONS` is answered with an empty 200,
/// any other verb gets the 405 body, and every response advertises `allow`.
/// `HEAD` is rejected too; axum would otherwise serve it through `get`.
pub fn endpoint(allow: &'static str, route: MethodRouter<ApiContext>) -> MethodRouter<ApiContext> {
    route
        .options(preflight)
        .on(MethodFilter::HEAD, method_not_allowed)
        .fallback(method_not_allowed)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(allow),
        ))
}

pub fn allow_any_origin() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"))
}

pub fn allow_content_type() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    )
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
