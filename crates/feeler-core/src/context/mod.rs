//! Per-turn context assembly.

pub mod assembler;

pub use assembler::{AssembledContext, ContextAssembler};
