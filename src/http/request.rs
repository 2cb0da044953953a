//! Request identity.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) per incoming request
//! - Expose the header name used to carry it
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - ID is propagated onto the response so clients can correlate

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a UUID v4 request ID for each incoming request.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}
