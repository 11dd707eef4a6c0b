//! Async client for the legislative-notice dashboard backend.
//!
//! # Overview
//! `RequestGateway` issues the four backend calls (recent notices, system
//! stats, system health, webhook registration) and guarantees one error
//! contract: an operation either returns the `data` of a successful
//! envelope or fails with an `ApiError` whose message is ready to show to
//! the user.
//!
//! # Design
//! - `NoticeClient` builds `HttpRequest`s and parses `HttpResponse`s without
//!   touching the network; a `Transport` performs the round-trip.
//! - Failures are classified once into `Failure` and normalized into
//!   `ApiError` by the pure functions in `normalize`.
//! - `Hook`s observe requests and responses; the `DevLog` hook is installed
//!   in development mode.
//! - The gateway is constructed explicitly from a `GatewayConfig`.

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod hooks;
pub mod http;
pub mod messages;
pub mod normalize;
pub mod transport;
pub mod types;

pub use client::NoticeClient;
pub use config::GatewayConfig;
pub use error::{ApiError, BuildError, ErrorKind, Failure, NetworkKind};
pub use gateway::RequestGateway;
pub use hooks::{DevLog, Hook};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use normalize::{derive_message, to_api_error, to_webhook_error};
pub use transport::{ReqwestTransport, Transport};
pub use types::{
    ApiResponse, Notice, SystemHealth, SystemStats, WebhookRegistration,
    WebhookRegistrationRequest,
};
