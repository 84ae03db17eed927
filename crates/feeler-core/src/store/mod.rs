//! Store trait definitions.
//!
//! Both stores are append-only per-user logs keyed by the normalized user
//! id. Sequence ids are assigned by the store and define the only
//! meaningful ordering.

pub mod summaries;
pub mod turns;

pub use summaries::SummaryStore;
pub use turns::TurnStore;
