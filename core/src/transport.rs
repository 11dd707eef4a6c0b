//! Executes `HttpRequest` values against the network.
//!
//! # Design
//! A `Transport` only moves bytes: any response that arrives, whatever its
//! status, is returned as an `HttpResponse`. Errors are limited to the cases
//! where no response could be obtained, already classified as `Failure`s.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{BuildError, Failure, NetworkKind};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Failure>;
}

/// `reqwest`-backed transport with a fixed per-request timeout.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, BuildError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Failure> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.path),
            HttpMethod::Post => self.client.post(&request.path),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await.map_err(classify)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn classify(err: reqwest::Error) -> Failure {
    if err.is_timeout() {
        Failure::Network {
            kind: NetworkKind::Timeout,
            detail: err.to_string(),
        }
    } else if err.is_connect() {
        Failure::Network {
            kind: NetworkKind::Connect,
            detail: err.to_string(),
        }
    } else {
        Failure::other(err.to_string())
    }
}
