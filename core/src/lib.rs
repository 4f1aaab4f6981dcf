//! Stateless conversion core for the converter API.
//!
//! # Overview
//! Pure codecs (Base64, XML↔JSON) plus a TOON-service client that builds
//! `HttpRequest` values and parses `HttpResponse` values without touching
//! the network (host-does-IO pattern). The server crate executes the actual
//! round-trip, making this crate fully deterministic and testable.
//!
//! # Design
//! - Codecs are free functions: no state, no I/O, idempotent.
//! - `ToonClient` is stateless — it holds only `base_url`.
//! - Errors are explicit enums; the HTTP boundary decides status codes.

pub mod base64;
pub mod error;
pub mod http;
pub mod toon;
pub mod xml;

pub use error::{ConvertError, ToonApiError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use toon::ToonClient;
