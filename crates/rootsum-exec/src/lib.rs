#![forbid(unsafe_code)]
//! rootsum-exec: runtime, report rendering, and metrics hooks.
//!
//! The runtime executes the plan's stages sequentially on the calling thread,
//! keeps every stage output, and emits a `RunManifest`.

pub mod metrics;
pub mod report;
pub mod runtime;

pub use report::{write_report, Labels};
pub use runtime::{Engine, ExecError, PipelineRun};
