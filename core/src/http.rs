//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the server crate is responsible for executing
//! the actual I/O. This separation keeps the core deterministic and easy to
//! test: client behavior is verified without a running TOON service.
//!
//! All fields use owned types (`String`, `Vec`) so values can move freely
//! between the core and whatever executor the host wires in.

/// HTTP method for a request. The TOON service only exposes POST routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `ToonClient::build_*` methods. The caller is responsible for
/// executing this request against the network and returning the corresponding
/// `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `ToonClient::parse_conversion` for interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
