//! Stateless HTTP request builder and response parser for the remote TOON
//! conversion service.
//!
//! # Design
//! `ToonClient` holds only a `base_url` and carries no mutable state between
//! calls. Each conversion is split into a `build_*` method that produces an
//! `HttpRequest` and `parse_conversion`, which consumes the `HttpResponse`.
//! The server executes the actual HTTP round-trip, keeping this crate
//! deterministic and free of I/O dependencies.

use crate::error::ToonApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Stateless client for the TOON conversion service.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_conversion`.
#[derive(Debug, Clone)]
pub struct ToonClient {
    base_url: String,
}

impl ToonClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// JSON → TOON: the JSON document is the request body verbatim.
    pub fn build_json_to_toon(&self, json: &str) -> HttpRequest {
        self.post("/convert/json-to-toon", json.to_string())
    }

    /// TOON → JSON: the TOON text travels inside a one-key JSON envelope,
    /// `{"toon": "..."}`, JSON-string-escaped so quotes, newlines and any
    /// other control characters survive the trip.
    pub fn build_toon_to_json(&self, toon: &str) -> HttpRequest {
        let body = serde_json::json!({ "toon": toon }).to_string();
        self.post("/convert/toon-to-json", body)
    }

    /// Return the response body verbatim on 2xx, an error otherwise.
    pub fn parse_conversion(&self, response: HttpResponse) -> Result<String, ToonApiError> {
        if (200..300).contains(&response.status) {
            return Ok(response.body);
        }
        Err(ToonApiError::Http {
            status: response.status,
            body: response.body,
        })
    }

    /// Like [`Self::parse_conversion`], but interprets the body as a JSON
    /// document (the toon-to-json route answers with one).
    pub fn parse_json_conversion(
        &self,
        response: HttpResponse,
    ) -> Result<serde_json::Value, ToonApiError> {
        let body = self.parse_conversion(response)?;
        serde_json::from_str(&body).map_err(|e| ToonApiError::Deserialization(e.to_string()))
    }

    fn post(&self, path: &str, body: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        }
    }
}
