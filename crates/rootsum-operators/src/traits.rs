//! Operator trait + common interfaces.
//!
//! The exec runtime calls `plan(...)` on every stage first to validate the
//! chain of schemas, then invokes `eval_block(...)` in stage order.

use rootsum_core::prelude::Schema;
use rootsum_core::types::RowBatch;

use thiserror::Error;

/// Sequence of batches handed from one stage to the next.
pub type BlockStream = Vec<RowBatch>;

#[derive(Debug, Error)]
pub enum OpError {
    #[error("planning error: {0}")]
    Plan(String),

    #[error("execution error: {0}")]
    Exec(String),

    #[error("schema error: {0}")]
    Schema(String),

    /// A math function was applied outside its domain (e.g. `sqrt(-1)`).
    #[error("math domain error: {func}({value}) is undefined")]
    Domain { func: &'static str, value: f64 },

    /// An unseeded reduction saw no values.
    #[error("cannot reduce empty column '{column}' without a starting value")]
    EmptyReduction { column: String },
}

/// Trait that all operators must implement.
///
/// Invariants:
/// - `eval_block` must be deterministic given the same inputs.
/// - Row order is preserved by every operator that emits more than one row.
pub trait Operator: Send + Sync + 'static {
    /// Human-readable operator name (stable).
    fn name(&self) -> &'static str;

    /// Given input schemas, return the output schema.
    fn plan(&self, input_schemas: &[Schema]) -> Result<Schema, OpError>;

    /// Evaluate one block worth of data. Unary ops read `inputs[0]`.
    fn eval_block(&self, inputs: &[RowBatch]) -> Result<RowBatch, OpError>;
}

/// First input of a unary operator, or a planning error naming the operator.
pub(crate) fn single_schema<'a>(
    op: &'static str,
    input_schemas: &'a [Schema],
) -> Result<&'a Schema, OpError> {
    input_schemas
        .first()
        .ok_or_else(|| OpError::Plan(format!("{op} expects one input")))
}

/// First input batch of a unary operator.
pub(crate) fn single_input(inputs: &[RowBatch]) -> Result<&RowBatch, OpError> {
    inputs
        .first()
        .ok_or_else(|| OpError::Exec("missing input".into()))
}
