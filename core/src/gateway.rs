//! Async gateway to the legislative-notice backend.
//!
//! # Design
//! `RequestGateway` is an ordinary value built by the caller and passed to
//! whoever needs it; there is no global instance. Every operation runs the
//! same pipeline: `NoticeClient::build_*`, request hooks, `Transport`,
//! response hooks, `NoticeClient::parse_*`, then normalization of any
//! `Failure` into an `ApiError`. Nothing is retried or cached, and calls
//! share no mutable state.

use std::sync::Arc;

use tracing::error;

use crate::client::NoticeClient;
use crate::config::GatewayConfig;
use crate::error::{ApiError, BuildError, Failure};
use crate::hooks::{DevLog, Hook};
use crate::http::{HttpRequest, HttpResponse};
use crate::messages;
use crate::normalize::{to_api_error, to_webhook_error};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{
    Notice, SystemHealth, SystemStats, WebhookRegistration, WebhookRegistrationRequest,
};

pub struct RequestGateway<T = ReqwestTransport> {
    client: NoticeClient,
    transport: T,
    hooks: Vec<Arc<dyn Hook>>,
}

impl RequestGateway<ReqwestTransport> {
    /// Gateway talking to the backend over HTTP.
    pub fn from_config(config: GatewayConfig) -> Result<Self, BuildError> {
        reqwest::Url::parse(&config.base_url).map_err(|e| BuildError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(&config, transport))
    }

    /// Same as `from_config(GatewayConfig::from_env())`.
    pub fn from_env() -> Result<Self, BuildError> {
        Self::from_config(GatewayConfig::from_env())
    }
}

impl<T: Transport> RequestGateway<T> {
    pub fn with_transport(config: &GatewayConfig, transport: T) -> Self {
        let mut hooks: Vec<Arc<dyn Hook>> = Vec::new();
        if config.dev_mode {
            hooks.push(Arc::new(DevLog));
        }
        Self {
            client: NoticeClient::new(&config.base_url, config.default_headers.clone()),
            transport,
            hooks,
        }
    }

    /// Append a hook. Hooks run in the order they were added.
    pub fn with_hook(mut self, hook: Arc<dyn Hook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn client(&self) -> &NoticeClient {
        &self.client
    }

    /// `GET /notices/recent`
    pub async fn fetch_recent_notices(&self) -> Result<Vec<Notice>, ApiError> {
        let request = self.client.build_recent_notices();
        let result = self.send(request).await;
        result
            .and_then(|response| self.client.parse_recent_notices(response))
            .map_err(|failure| {
                error!(error = %failure, "Failed to load recent notices");
                to_api_error(failure, messages::RECENT_NOTICES_FAILED)
            })
    }

    /// `GET /stats`
    pub async fn fetch_system_stats(&self) -> Result<SystemStats, ApiError> {
        let request = self.client.build_system_stats();
        let result = self.send(request).await;
        result
            .and_then(|response| self.client.parse_system_stats(response))
            .map_err(|failure| {
                error!(error = %failure, "Failed to load system stats");
                to_api_error(failure, messages::SYSTEM_STATS_FAILED)
            })
    }

    /// `GET /webhooks/system-health`
    pub async fn fetch_system_health(&self) -> Result<SystemHealth, ApiError> {
        let request = self.client.build_system_health();
        let result = self.send(request).await;
        result
            .and_then(|response| self.client.parse_system_health(response))
            .map_err(|failure| {
                error!(error = %failure, "Failed to load system health");
                to_api_error(failure, messages::SYSTEM_HEALTH_FAILED)
            })
    }

    /// `POST /webhooks`
    pub async fn register_webhook(
        &self,
        input: &WebhookRegistrationRequest,
    ) -> Result<WebhookRegistration, ApiError> {
        let request = self.client.build_register_webhook(input).map_err(to_webhook_error)?;
        let response = self.send(request).await.map_err(to_webhook_error)?;
        self.client
            .parse_register_webhook(response)
            .map_err(to_webhook_error)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Failure> {
        for hook in &self.hooks {
            hook.on_request(&request);
        }
        let response = self.transport.execute(request.clone()).await?;
        for hook in &self.hooks {
            hook.on_response(&request, &response);
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::{ErrorKind, NetworkKind};
    use crate::http::HttpMethod;

    /// Replays canned outcomes and records every request it was given.
    #[derive(Default)]
    struct Scripted {
        outcomes: Mutex<VecDeque<Result<HttpResponse, Failure>>>,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl Scripted {
        fn replying(outcome: Result<HttpResponse, Failure>) -> Self {
            let scripted = Scripted::default();
            scripted.outcomes.lock().unwrap().push_back(outcome);
            scripted
        }
    }

    #[async_trait]
    impl Transport for Arc<Scripted> {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Failure> {
            self.seen.lock().unwrap().push(request);
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Failure::other("no scripted outcome")))
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    impl Hook for Recorder {
        fn on_request(&self, request: &HttpRequest) {
            self.events.lock().unwrap().push(format!("req {}", request.method));
        }

        fn on_response(&self, _request: &HttpRequest, response: &HttpResponse) {
            self.events.lock().unwrap().push(format!("resp {}", response.status));
        }
    }

    fn ok(status: u16, body: &str) -> Result<HttpResponse, Failure> {
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    fn gateway(outcome: Result<HttpResponse, Failure>) -> (RequestGateway<Arc<Scripted>>, Arc<Scripted>) {
        let transport = Arc::new(Scripted::replying(outcome));
        let config = GatewayConfig::default().with_dev_mode(false);
        (RequestGateway::with_transport(&config, transport.clone()), transport)
    }

    #[tokio::test]
    async fn recent_notices_returns_data_only() {
        let (gw, transport) = gateway(ok(
            200,
            r#"{"success":true,"data":[{"noticeNum":"1"},{"noticeNum":"2"}],"message":"ignored"}"#,
        ));
        let notices = gw.fetch_recent_notices().await.unwrap();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[1].get("noticeNum").and_then(|v| v.as_str()), Some("2"));

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].method, HttpMethod::Get);
        assert_eq!(seen[0].path, "http://localhost:3001/api/notices/recent");
    }

    #[tokio::test]
    async fn system_health_not_found_carries_status() {
        let (gw, _) = gateway(ok(404, ""));
        let err = gw.fetch_system_health().await.unwrap_err();
        assert_eq!(err.message, messages::NOT_FOUND);
        assert_eq!(err.status, Some(404));
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn stats_timeout_has_no_status() {
        let (gw, _) = gateway(Err(Failure::Network {
            kind: NetworkKind::Timeout,
            detail: "operation timed out".to_string(),
        }));
        let err = gw.fetch_system_stats().await.unwrap_err();
        assert_eq!(err.message, messages::TIMEOUT);
        assert_eq!(err.status, None);
        assert!(err.response.is_none());
    }

    #[tokio::test]
    async fn empty_message_uses_operation_default() {
        let (gw, _) = gateway(Err(Failure::other("")));
        let err = gw.fetch_system_stats().await.unwrap_err();
        assert_eq!(err.message, messages::SYSTEM_STATS_FAILED);
    }

    #[tokio::test]
    async fn register_webhook_projects_success() {
        let (gw, transport) = gateway(ok(201, r#"{"success":true,"message":"ok"}"#));
        let input = WebhookRegistrationRequest::new("https://discord.com/api/webhooks/1/abc");
        let result = gw.register_webhook(&input).await.unwrap();
        assert_eq!(
            result,
            WebhookRegistration {
                success: true,
                message: Some("ok".to_string()),
            }
        );

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].method, HttpMethod::Post);
        assert_eq!(seen[0].path, "http://localhost:3001/api/webhooks");
    }

    #[tokio::test]
    async fn register_webhook_conflict_overrides_body_message() {
        let (gw, _) = gateway(ok(409, r#"{"success":false,"message":"unrelated"}"#));
        let input = WebhookRegistrationRequest::new("https://discord.com/api/webhooks/1/abc");
        let err = gw.register_webhook(&input).await.unwrap_err();
        assert_eq!(err.message, messages::WEBHOOK_ALREADY_REGISTERED);
        assert_eq!(err.status, Some(409));
    }

    #[tokio::test]
    async fn hooks_observe_in_order() {
        let (gw, _) = gateway(ok(200, r#"{"success":true,"data":{}}"#));
        let recorder = Arc::new(Recorder::default());
        let gw = gw.with_hook(recorder.clone());
        gw.fetch_system_stats().await.unwrap();
        assert_eq!(*recorder.events.lock().unwrap(), vec!["req GET", "resp 200"]);
    }

    #[tokio::test]
    async fn response_hook_skipped_without_response() {
        let (gw, _) = gateway(Err(Failure::Network {
            kind: NetworkKind::Connect,
            detail: "connection refused".to_string(),
        }));
        let recorder = Arc::new(Recorder::default());
        let gw = gw.with_hook(recorder.clone());
        let err = gw.fetch_recent_notices().await.unwrap_err();
        assert_eq!(err.message, messages::NETWORK_ERROR);
        assert_eq!(err.kind, ErrorKind::Transport);
        assert_eq!(*recorder.events.lock().unwrap(), vec!["req GET"]);
    }

    #[test]
    fn rejects_invalid_base_url() {
        let config = GatewayConfig::default().with_base_url("not a url");
        let err = RequestGateway::from_config(config).err().unwrap();
        assert!(matches!(err, BuildError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn dev_mode_installs_dev_log() {
        let config = GatewayConfig::default().with_dev_mode(true);
        let gw = RequestGateway::with_transport(&config, Arc::new(Scripted::default()));
        assert_eq!(gw.hooks.len(), 1);
        let config = config.with_dev_mode(false);
        let gw = RequestGateway::with_transport(&config, Arc::new(Scripted::default()));
        assert!(gw.hooks.is_empty());
    }
}
