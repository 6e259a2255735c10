use axum::{
    body::Body,
    extract::Request,
    http::{header::HeaderName, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_REQUEST_ID_LEN: usize = 64;

#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Reuses a well-formed incoming id, otherwise mints a new one.
pub fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(HeaderName::from_static(REQUEST_ID_HEADER))
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| {
            !v.is_empty()
                && v.len() <= MAX_REQUEST_ID_LEN
                && v.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = resolve_request_id(req.headers());
    req.extensions_mut().insert(RequestId(id.clone()));

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}

/// Span used by the HTTP trace layer; carries the request id set above.
pub fn make_request_span(req: &axum::http::Request<Body>) -> Span {
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.as_str())
        .unwrap_or("-");
    tracing::info_span!(
        "http_request",
        method = %req.method(),
        uri = %req.uri(),
        request_id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incoming_id_is_reused_when_well_formed() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));
        assert_eq!(resolve_request_id(&headers), "abc-123");
    }

    #[test]
    fn malformed_or_missing_id_is_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("bad id;drop"));
        let generated = resolve_request_id(&headers);
        assert_ne!(generated, "bad id;drop");
        assert!(Uuid::parse_str(&generated).is_ok());
        assert!(Uuid::parse_str(&resolve_request_id(&HeaderMap::new())).is_ok());
    }
}
