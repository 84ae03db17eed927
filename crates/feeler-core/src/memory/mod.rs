//! Long-term memory digest.

pub mod digest;

pub use digest::MemoryDigest;
