//! HTTP transport types shared by the client, the transport and the hooks.
//!
//! # Design
//! Requests and responses are plain data. `NoticeClient` builds
//! `HttpRequest` values and parses `HttpResponse` values; only a `Transport`
//! touches the network. A response with a non-2xx status is still an
//! `HttpResponse` here. Turning it into a failure is the parser's job.

use std::fmt;

/// HTTP method for a request. The dashboard backend only needs these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `path` is the absolute URL (base URL joined with the endpoint path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body parsed as JSON, or `None` when it is empty or not JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(response(200, "").is_success());
        assert!(response(201, "").is_success());
        assert!(response(299, "").is_success());
        assert!(!response(199, "").is_success());
        assert!(!response(304, "").is_success());
        assert!(!response(404, "").is_success());
    }

    #[test]
    fn json_body_ignores_plain_text() {
        assert!(response(502, "Bad Gateway").json_body().is_none());
        assert!(response(502, "").json_body().is_none());
        let body = response(400, r#"{"message":"bad"}"#).json_body().unwrap();
        assert_eq!(body["message"], "bad");
    }

    #[test]
    fn method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
