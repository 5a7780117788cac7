//! Runtime: build operators for each plan stage, run them in order, and
//! emit a `PipelineRun` with every stage output plus a `RunManifest`.
//!
//! Behavior:
//! - Instantiates one operator per `LogicalPlan` node (source first).
//! - Runs a planning pass over all stages before touching any values, so
//!   schema mistakes surface without partial output.
//! - Executes stages sequentially on the calling thread.
//! - Hashes the plan and the outputs; identical inputs give identical digests.

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use thiserror::Error;

use rootsum_core::config::PipelineConfig;
use rootsum_core::dag::{LogicalPlan, INPUT_COLUMN, ROOT_COLUMN, TOTAL_COLUMN};
use rootsum_core::hash::hash_serde;
use rootsum_core::manifest::RunManifest;
use rootsum_core::prelude::{DataType, Field, Schema};
use rootsum_core::types::{Column, RowBatch, Scalar};

use rootsum_operators::traits::{BlockStream, OpError, Operator};
use rootsum_operators::{Aggregate, Filter, Map};

use crate::metrics::emit_span;
use crate::report::{write_report, Labels};

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("{op}: {source}")]
    Operator {
        op: &'static str,
        #[source]
        source: OpError,
    },
    #[error("invalid plan: {0}")]
    Invalid(String),
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("report output: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything one run produced, stage by stage.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineRun {
    /// Input sequence as given.
    pub input: Column,
    /// Square root of every input element, same order.
    pub roots: Column,
    /// Roots that passed the filter, same relative order.
    pub filtered: Column,
    /// Sum of `filtered`.
    pub total: Scalar,
    pub manifest: RunManifest,
}

impl PipelineRun {
    /// The four report lines, each terminated by a newline.
    pub fn render(&self, labels: &Labels) -> String {
        format!(
            "{}: {}\n{}: {}\n{}: {}\n{}: {}\n",
            labels.original,
            self.input,
            labels.roots,
            self.roots,
            labels.filtered,
            self.filtered,
            labels.total,
            self.total
        )
    }
}

/// Engine owns the validated config and the plan derived from it.
pub struct Engine {
    cfg: PipelineConfig,
    plan: LogicalPlan,
}

impl Engine {
    pub fn new(cfg: PipelineConfig) -> Result<Self, ExecError> {
        cfg.validate().map_err(|e| ExecError::Config(e.to_string()))?;
        let plan = LogicalPlan::sqrt_sum(&cfg);
        Ok(Self { cfg, plan })
    }

    pub fn plan(&self) -> &LogicalPlan {
        &self.plan
    }

    /// Report labels for the configured locale and threshold.
    pub fn labels(&self) -> Labels {
        Labels::for_locale(self.cfg.locale, self.cfg.threshold)
    }

    /// Execute the plan and return every stage output.
    pub fn run(&self) -> Result<PipelineRun, ExecError> {
        let plan_hash = hash_serde(&self.plan).map_err(|e| ExecError::Hash(e.to_string()))?;
        let manifest = RunManifest::new(plan_hash, now_millis());

        let ops = self
            .plan
            .stages()
            .into_iter()
            .map(instantiate)
            .collect::<Result<Vec<_>, _>>()?;

        check_schemas(&ops)?;

        let mut outputs: BlockStream = Vec::with_capacity(ops.len());
        for op in &ops {
            let inputs: Vec<RowBatch> = outputs.last().cloned().into_iter().collect();
            let out = op.eval_block(&inputs).map_err(|source| ExecError::Operator {
                op: op.name(),
                source,
            })?;

            #[cfg(feature = "tracing")]
            tracing::trace!(op = op.name(), rows = out.num_rows(), "executed stage");

            outputs.push(out);
        }

        let [source, mapped, filtered, reduced] = <[RowBatch; 4]>::try_from(outputs)
            .map_err(|v| ExecError::Invalid(format!("expected 4 stage outputs, got {}", v.len())))?;

        let input = take_column(&source, INPUT_COLUMN)?;
        let roots = take_column(&mapped, ROOT_COLUMN)?;
        let filtered = take_column(&filtered, ROOT_COLUMN)?;
        let total = take_column(&reduced, TOTAL_COLUMN)?
            .values
            .into_iter()
            .next()
            .ok_or_else(|| ExecError::Invalid("aggregate produced no rows".into()))?;

        let digest = hash_serde(&(&input, &roots, &filtered, &total))
            .map_err(|e| ExecError::Hash(e.to_string()))?;
        let manifest = manifest.finish(now_millis(), Some(digest));

        emit_span(
            "run",
            &[
                ("plan_hash", manifest.plan_hash.to_string()),
                ("outputs_digest", digest.to_string()),
                ("duration_ms", manifest.duration_ms().to_string()),
            ],
        );

        Ok(PipelineRun {
            input,
            roots,
            filtered,
            total,
            manifest,
        })
    }

    /// Run, then write the report to `out`.
    pub fn run_and_report<W: Write>(&self, out: &mut W) -> Result<RunManifest, ExecError> {
        let run = self.run()?;
        write_report(out, &self.labels(), &run)?;
        Ok(run.manifest)
    }
}

// --- helpers ---

fn instantiate(node: &LogicalPlan) -> Result<Box<dyn Operator>, ExecError> {
    let op: Box<dyn Operator> = match node {
        LogicalPlan::Source { column, values } => Box::new(SourceOp {
            column: column.clone(),
            values: values.clone(),
        }),
        LogicalPlan::Map {
            column,
            func,
            alias,
            ..
        } => Box::new(Map::new(column.clone(), *func, alias.clone())),
        LogicalPlan::Filter { expr, .. } => {
            Box::new(Filter::new(expr).map_err(|source| ExecError::Operator {
                op: "filter",
                source,
            })?)
        }
        LogicalPlan::Aggregate { agg, .. } => Box::new(Aggregate::new(agg.clone())),
    };
    Ok(op)
}

/// Thread schemas through every stage without evaluating anything.
fn check_schemas(ops: &[Box<dyn Operator>]) -> Result<Schema, ExecError> {
    let mut schema: Option<Schema> = None;
    for op in ops {
        let inputs: Vec<Schema> = schema.take().into_iter().collect();
        schema = Some(op.plan(&inputs).map_err(|source| ExecError::Operator {
            op: op.name(),
            source,
        })?);
    }
    schema.ok_or_else(|| ExecError::Invalid("plan has no stages".into()))
}

fn take_column(batch: &RowBatch, name: &str) -> Result<Column, ExecError> {
    batch
        .column(name)
        .cloned()
        .ok_or_else(|| ExecError::Invalid(format!("stage output lacks column '{name}'")))
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Emits the configured input sequence as a one-column batch.
struct SourceOp {
    column: String,
    values: Vec<Scalar>,
}

impl Operator for SourceOp {
    fn name(&self) -> &'static str {
        "source"
    }

    fn plan(&self, _input_schemas: &[Schema]) -> Result<Schema, OpError> {
        let col = Column::new(self.column.clone(), self.values.clone());
        Ok(Schema::new(vec![Field::new(
            self.column.clone(),
            col.data_type_or(DataType::Int64),
            false,
        )]))
    }

    fn eval_block(&self, _inputs: &[RowBatch]) -> Result<RowBatch, OpError> {
        Ok(RowBatch::new(vec![Column::new(
            self.column.clone(),
            self.values.clone(),
        )]))
    }
}
