//! Convenient re-exports for downstream crates.

pub use crate::config::{Locale, PipelineConfig};
pub use crate::dag::{Aggregation, LogicalPlan, MapFunction};
pub use crate::error::{Error, Result};
pub use crate::hash::Hash256;
pub use crate::manifest::{ManifestId, RunManifest};
pub use crate::schema::{DataType, Field, Schema};
pub use crate::types::{Column, RowBatch, Scalar};
