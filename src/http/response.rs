//! Response construction.
//!
//! # Responsibilities
//! - Permanent redirect with a one-year public cache lifetime
//! - Not found for unknown paths
//! - Plain-text bodies for the ping relay

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Cache policy attached to every redirect: one year, public.
pub const REDIRECT_CACHE_CONTROL: &str = "public, max-age=31536000";

/// 301 to `target` with an empty body.
pub fn permanent_redirect(target: &str) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [
            (header::CACHE_CONTROL, REDIRECT_CACHE_CONTROL),
            (header::LOCATION, target),
        ],
    )
        .into_response()
}

pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// 200 with `Content-Type: text/plain`.
pub fn plain_text(body: String) -> Response {
    ([(header::CONTENT_TYPE, "text/plain")], body).into_response()
}
