//! Memory and context-assembly logic for Feeler.
//!
//! This crate defines the "ports" (store and collaborator traits) that the
//! infrastructure layer implements, plus the components with real policy in
//! them: the memory digest, the context assembler, and the session
//! summarizer. It depends only on `feeler-types` -- never on
//! `feeler-infra` or any database/IO crate.

pub mod context;
pub mod llm;
pub mod memory;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
