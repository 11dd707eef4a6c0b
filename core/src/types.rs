//! DTOs exchanged with the legislative-notice backend.
//!
//! # Design
//! The gateway does not interpret notices, stats or health records, so they
//! are transparent wrappers around a JSON object. Callers that know the
//! backend schema read fields through `get`. The envelope and the webhook
//! registration payloads are the only shapes this layer relies on.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

macro_rules! opaque_record {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Map<String, Value>);

        impl $name {
            pub fn get(&self, field: &str) -> Option<&Value> {
                self.0.get(field)
            }
        }
    };
}

opaque_record!(
    /// One legislative notice as returned by `GET /notices/recent`.
    Notice
);
opaque_record!(
    /// Backend statistics returned by `GET /stats`.
    SystemStats
);
opaque_record!(
    /// Backend health report returned by `GET /webhooks/system-health`.
    SystemHealth
);

/// Envelope wrapping every backend response.
///
/// `data` is optional because write endpoints such as webhook registration
/// may answer with only `success` and `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Request payload for `POST /webhooks`.
///
/// Anything besides the target URL is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookRegistrationRequest {
    pub url: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl WebhookRegistrationRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            metadata: Map::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Result of a successful webhook registration, projected from the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookRegistration {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
