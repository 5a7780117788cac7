#![forbid(unsafe_code)]
//! rootsum: square roots of a fixed list, filtered above a threshold, summed.
//!
//! This facade re-exports the types a library caller needs to run the pipeline.

pub use rootsum_core::config::{Locale, PipelineConfig};
pub use rootsum_exec::{Engine, ExecError, Labels, PipelineRun};
