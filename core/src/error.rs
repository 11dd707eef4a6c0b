//! Error types for the notice gateway.
//!
//! # Design
//! A failed call is classified exactly once, where it happens, into a
//! `Failure`: the server answered with a non-2xx status (`Transport`), no
//! response arrived at all (`Network`), or something else went wrong
//! (`Other`). The normalizer turns a `Failure` into the single public error
//! type, `ApiError`, which carries a user-facing message plus the HTTP
//! status and raw response when there was one. Callers branch on
//! `status` or `kind`, never on distinct error types.

use std::fmt;

use thiserror::Error;

use crate::http::HttpResponse;

/// Why no response was received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKind {
    /// The configured request timeout elapsed.
    Timeout,
    /// The connection could not be established.
    Connect,
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkKind::Timeout => write!(f, "timeout"),
            NetworkKind::Connect => write!(f, "connect"),
        }
    }
}

/// A raw failure, classified at the boundary where it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// A response arrived but its status was not 2xx.
    Transport(HttpResponse),

    /// No response arrived.
    Network { kind: NetworkKind, detail: String },

    /// Any other failure. `None` means there was no error message at all.
    Other { message: Option<String> },
}

impl Failure {
    pub fn other(message: impl Into<String>) -> Self {
        Failure::Other {
            message: Some(message.into()),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Failure::Transport(response) => Some(response.status),
            _ => None,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Transport(response) => {
                write!(f, "HTTP {}: {}", response.status, response.body)
            }
            Failure::Network { kind, detail } => write!(f, "network {kind}: {detail}"),
            Failure::Other { message: Some(message) } => f.write_str(message),
            Failure::Other { message: None } => write!(f, "unknown failure"),
        }
    }
}

/// Coarse classification of an `ApiError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 400 or 409.
    Validation,
    /// 401 or 403.
    Auth,
    /// 404.
    NotFound,
    /// 429.
    RateLimit,
    /// Any 5xx.
    Server,
    /// Timeout or connection failure, no response received.
    Transport,
    /// Everything else.
    Unknown,
}

impl ErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 409 => ErrorKind::Validation,
            401 | 403 => ErrorKind::Auth,
            404 => ErrorKind::NotFound,
            429 => ErrorKind::RateLimit,
            500..=599 => ErrorKind::Server,
            _ => ErrorKind::Unknown,
        }
    }

    pub fn of(failure: &Failure) -> Self {
        match failure {
            Failure::Transport(response) => ErrorKind::from_status(response.status),
            Failure::Network { .. } => ErrorKind::Transport,
            Failure::Other { .. } => ErrorKind::Unknown,
        }
    }
}

/// The error returned by every gateway operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
    pub response: Option<HttpResponse>,
    pub kind: ErrorKind,
}

impl ApiError {
    /// Error with a message only, as produced for failures without a response.
    pub fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            status: None,
            response: None,
            kind,
        }
    }

    /// Error carrying the failed response and its status.
    pub fn with_response(message: impl Into<String>, response: HttpResponse) -> Self {
        Self {
            message: message.into(),
            status: Some(response.status),
            kind: ErrorKind::from_status(response.status),
            response: Some(response),
        }
    }
}

/// Errors raised while constructing a gateway.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
