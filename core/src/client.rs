//! Stateless HTTP request builder and response parser for the notice API.
//!
//! # Design
//! `NoticeClient` holds only the base URL and the default headers and
//! carries no mutable state between calls. Each endpoint is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. The gateway executes the round-trip in
//! between, so everything here is deterministic and free of I/O.
//!
//! Parsers never leak the envelope: they return its `data` (or, for webhook
//! registration, the `{success, message}` projection) or a `Failure`.

use serde::de::DeserializeOwned;

use crate::error::Failure;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    ApiResponse, Notice, SystemHealth, SystemStats, WebhookRegistration,
    WebhookRegistrationRequest,
};

pub const RECENT_NOTICES_PATH: &str = "/notices/recent";
pub const STATS_PATH: &str = "/stats";
pub const SYSTEM_HEALTH_PATH: &str = "/webhooks/system-health";
pub const WEBHOOKS_PATH: &str = "/webhooks";

#[derive(Debug, Clone)]
pub struct NoticeClient {
    base_url: String,
    default_headers: Vec<(String, String)>,
}

impl NoticeClient {
    pub fn new(base_url: &str, default_headers: Vec<(String, String)>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_headers,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_recent_notices(&self) -> HttpRequest {
        self.get(RECENT_NOTICES_PATH)
    }

    pub fn build_system_stats(&self) -> HttpRequest {
        self.get(STATS_PATH)
    }

    pub fn build_system_health(&self) -> HttpRequest {
        self.get(SYSTEM_HEALTH_PATH)
    }

    pub fn build_register_webhook(
        &self,
        input: &WebhookRegistrationRequest,
    ) -> Result<HttpRequest, Failure> {
        let body = serde_json::to_string(input)
            .map_err(|e| Failure::other(format!("failed to encode webhook request: {e}")))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.url(WEBHOOKS_PATH),
            headers: self.default_headers.clone(),
            body: Some(body),
        })
    }

    pub fn parse_recent_notices(&self, response: HttpResponse) -> Result<Vec<Notice>, Failure> {
        parse_data(response)
    }

    pub fn parse_system_stats(&self, response: HttpResponse) -> Result<SystemStats, Failure> {
        parse_data(response)
    }

    pub fn parse_system_health(&self, response: HttpResponse) -> Result<SystemHealth, Failure> {
        parse_data(response)
    }

    pub fn parse_register_webhook(
        &self,
        response: HttpResponse,
    ) -> Result<WebhookRegistration, Failure> {
        let envelope: ApiResponse<serde_json::Value> = parse_envelope(response)?;
        Ok(WebhookRegistration {
            success: envelope.success,
            message: envelope.message,
        })
    }

    fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.url(path),
            headers: self.default_headers.clone(),
            body: None,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Non-2xx responses become `Failure::Transport` untouched.
fn parse_envelope<T: DeserializeOwned>(response: HttpResponse) -> Result<ApiResponse<T>, Failure> {
    if !response.is_success() {
        return Err(Failure::Transport(response));
    }
    serde_json::from_str(&response.body)
        .map_err(|e| Failure::other(format!("invalid response body: {e}")))
}

fn parse_data<T: DeserializeOwned>(response: HttpResponse) -> Result<T, Failure> {
    parse_envelope::<T>(response)?
        .data
        .ok_or_else(|| Failure::other("response envelope has no data"))
}
