//! Turns a classified `Failure` into the user-facing `ApiError`.
//!
//! Message resolution for a failure, first match wins:
//! 1. non-empty `message` string in the response body;
//! 2. `errors` array of strings in the response body, joined with a single space;
//! 3. fixed message for the response status (`messages::for_status`);
//! 4. timeout (network timeout, or error text containing `timeout`);
//! 5. connectivity (connection failure, or text containing `Network Error`);
//! 6. the raw error text;
//! 7. the generic unexpected-error message.
//!
//! Webhook registration overrides step 3 for 400, 409 and 429.

use serde_json::Value;

use crate::error::{ApiError, ErrorKind, Failure, NetworkKind};
use crate::http::HttpResponse;
use crate::messages;

/// User-facing message for `failure`. May be empty when the backend sent an
/// empty `errors` array.
pub fn derive_message(failure: &Failure) -> String {
    match failure {
        Failure::Transport(response) => response_message(response),
        Failure::Network {
            kind: NetworkKind::Timeout,
            ..
        } => messages::TIMEOUT.to_string(),
        Failure::Network {
            kind: NetworkKind::Connect,
            ..
        } => messages::NETWORK_ERROR.to_string(),
        Failure::Other {
            message: Some(text),
        } => error_text_message(text),
        Failure::Other { message: None } => messages::UNEXPECTED_ERROR.to_string(),
    }
}

/// Generic mapper used by the read operations.
pub fn to_api_error(failure: Failure, default_message: &str) -> ApiError {
    let message = or_default(derive_message(&failure), default_message);
    match failure {
        Failure::Transport(response) => ApiError::with_response(message, response),
        other => ApiError::new(message, ErrorKind::of(&other)),
    }
}

/// Mapper for `POST /webhooks`.
pub fn to_webhook_error(failure: Failure) -> ApiError {
    let response = match failure {
        Failure::Transport(response) => response,
        other => return to_api_error(other, messages::WEBHOOK_REGISTRATION_FAILED),
    };

    let message = match response.status {
        400 => webhook_validation_message(&response),
        409 => messages::WEBHOOK_ALREADY_REGISTERED.to_string(),
        429 => messages::WEBHOOK_LIMIT_REACHED.to_string(),
        _ => response_message(&response),
    };
    ApiError::with_response(message, response)
}

fn response_message(response: &HttpResponse) -> String {
    if let Some(body) = response.json_body() {
        if let Some(message) = body_message(&body) {
            return message.to_string();
        }
        if let Some(errors) = body_errors(&body) {
            return errors;
        }
    }
    messages::for_status(response.status).to_string()
}

// Validation errors list every rejected field, so they win over `message`.
fn webhook_validation_message(response: &HttpResponse) -> String {
    let body = response.json_body();
    if let Some(errors) = body.as_ref().and_then(body_errors) {
        return errors;
    }
    body.as_ref()
        .and_then(body_message)
        .unwrap_or(messages::INVALID_INPUT)
        .to_string()
}

fn error_text_message(text: &str) -> String {
    if text.contains("timeout") {
        return messages::TIMEOUT.to_string();
    }
    if text.contains("Network Error") {
        return messages::NETWORK_ERROR.to_string();
    }
    text.to_string()
}

fn body_message(body: &Value) -> Option<&str> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
}

// A list holding anything but strings does not count as `errors`.
fn body_errors(body: &Value) -> Option<String> {
    let parts = body
        .get("errors")?
        .as_array()?
        .iter()
        .map(Value::as_str)
        .collect::<Option<Vec<&str>>>()?;
    Some(parts.join(" "))
}

fn or_default(message: String, default_message: &str) -> String {
    if message.is_empty() {
        default_message.to_string()
    } else {
        message
    }
}
