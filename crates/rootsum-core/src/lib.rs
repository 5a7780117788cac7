#![forbid(unsafe_code)]
//! rootsum-core: shared types for the square-root/filter/sum pipeline.
//!
//! This crate is pure data: scalars, columns, batches, schemas, the logical
//! plan, the pipeline configuration, stable hashing, and the run manifest.
//! Nothing here performs I/O or evaluates operators.

pub mod config;
pub mod dag;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod prelude;
pub mod schema;
pub mod types;

/// Engine version recorded in every run manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
