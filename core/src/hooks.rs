//! Observers run around every gateway call.
//!
//! Hooks see each request just before it is sent and each response right
//! after it arrives, in registration order. They cannot change either.

use tracing::debug;

use crate::http::{HttpRequest, HttpResponse};

pub trait Hook: Send + Sync {
    fn on_request(&self, _request: &HttpRequest) {}

    /// Called for every response that arrived, whatever its status.
    fn on_response(&self, _request: &HttpRequest, _response: &HttpResponse) {}
}

/// Request/response diagnostics for development builds. Error responses
/// are left to the failure logging in the gateway.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevLog;

impl Hook for DevLog {
    fn on_request(&self, request: &HttpRequest) {
        debug!(method = %request.method, url = %request.path, "API Request");
    }

    fn on_response(&self, request: &HttpRequest, response: &HttpResponse) {
        if response.is_success() {
            debug!(status = response.status, url = %request.path, "API Response");
        }
    }
}
