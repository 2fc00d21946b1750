//! pdfsplit CLI
//!
//! Input discovery and per-file orchestration for the `pdfsplit` binary.
//! The split algorithm itself lives in `pdfsplit-core`.

pub mod discover;
pub mod runner;

pub use discover::discover_inputs;
pub use runner::{run, RunConfig, RunSummary};
