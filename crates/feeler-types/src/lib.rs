//! Shared domain types for Feeler.
//!
//! This crate contains the core domain types used across the Feeler backend:
//! chat turns, session summaries, emotion payloads, LLM request shapes, and
//! their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod summary;
pub mod user;
