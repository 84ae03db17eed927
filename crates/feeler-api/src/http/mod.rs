//! HTTP layer for Feeler.
//!
//! Axum-based API with CORS and request tracing. The surface is small:
//! one chat endpoint, one session-end endpoint, and a health check.

pub mod error;
pub mod handlers;
pub mod router;
