use axum::http::HeaderMap;
use axum::{middleware::Next, response::Response};
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method};
use std::str::FromStr;
use tower_http::cors::CorsLayer;
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

// Reuses a well formed incoming request id, generates one otherwise. Handler
// spans are nested in a span carrying the id.
pub async fn add_request_metadata(
    headers: HeaderMap,
    request: axum::extract::Request,
    next: Next,
) -> Response {
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|hv| hv.to_str().ok())
        .and_then(|value| Uuid::from_str(value).ok())
        .unwrap_or_else(Uuid::now_v7);
    let span = tracing::info_span!("request", request_id = %request_id);
    let mut response = next.run(request).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[allow(clippy::expect_used)]
pub fn make_cors_middleware(origin: &str) -> CorsLayer {
    #[allow(clippy::expect_fun_call)]
    let origin_value = origin
        .parse::<HeaderValue>()
        .expect(&format!("Failed to parse origin value: {origin}"));
    // The explorer never mutates anything, reads are all there is to allow
    CorsLayer::new()
        .allow_origin(origin_value)
        .allow_methods(vec![Method::GET, Method::HEAD, Method::POST])
        .allow_headers(vec![CONTENT_TYPE])
}
