//! Observability setup for Feeler.

pub mod tracing_setup;
