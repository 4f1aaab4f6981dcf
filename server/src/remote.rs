//! Executes core-built `HttpRequest` values against the TOON service.
//!
//! # Design
//! The core crate describes the outbound call as plain data; this module owns
//! the actual I/O. A single `reqwest::Client` is constructed at startup with
//! the configured timeout and shared across requests (it is internally
//! reference-counted and safe for concurrent use). A transport-level failure
//! (connect error or timeout) is retried exactly once; anything else — and a
//! second transport failure — surfaces as `ServerError::Remote`. Non-2xx
//! responses are returned as data for `ToonClient::parse_conversion` to
//! interpret.

use converter_core::{HttpMethod, HttpRequest, HttpResponse};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::ServerError;

#[derive(Debug, Clone)]
pub struct RemoteExecutor {
    http: reqwest::Client,
}

impl RemoteExecutor {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Execute `req`, retrying once on a transport-level failure.
    pub async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ServerError> {
        debug!(url = %req.url, "calling TOON service");
        match self.send(&req).await {
            Ok(response) => Ok(response),
            Err(e) if e.is_connect() || e.is_timeout() => {
                warn!(url = %req.url, error = %e, "TOON request failed, retrying once");
                self.send(&req)
                    .await
                    .map_err(|e| ServerError::Remote(e.to_string()))
            }
            Err(e) => Err(ServerError::Remote(e.to_string())),
        }
    }

    async fn send(&self, req: &HttpRequest) -> Result<HttpResponse, reqwest::Error> {
        let mut builder = match req.method {
            HttpMethod::Post => self.http.post(&req.url),
        };
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }
        let response = builder.body(req.body.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
