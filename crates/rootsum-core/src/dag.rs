//! Logical pipeline representation.
//!
//! A plan is a linear chain: `Source → Map → Filter → Aggregate`. Each node
//! owns its input, so the root is the last stage to run.

use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::types::Scalar;

/// Column holding the input sequence.
pub const INPUT_COLUMN: &str = "value";
/// Column holding the transformed (and later filtered) sequence.
pub const ROOT_COLUMN: &str = "sqrt";
/// Single-row column holding the reduced total.
pub const TOTAL_COLUMN: &str = "sum";

/// Elementwise functions a `Map` node may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapFunction {
    Sqrt,
}

impl MapFunction {
    pub fn name(&self) -> &'static str {
        match self {
            MapFunction::Sqrt => "sqrt",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Aggregation {
    /// Left-to-right sum of `column`, starting from `seed` when present.
    Sum { column: String, seed: Option<f64> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LogicalPlan {
    Source {
        column: String,
        values: Vec<Scalar>,
    },
    Map {
        input: Box<LogicalPlan>,
        column: String,
        func: MapFunction,
        alias: String,
    },
    Filter {
        input: Box<LogicalPlan>,
        expr: String,
    },
    Aggregate {
        input: Box<LogicalPlan>,
        agg: Aggregation,
    },
}

impl LogicalPlan {
    /// The square-root → threshold → sum pipeline described by `cfg`.
    pub fn sqrt_sum(cfg: &PipelineConfig) -> Self {
        let source = LogicalPlan::Source {
            column: INPUT_COLUMN.to_string(),
            values: cfg.numbers.iter().copied().map(Scalar::I64).collect(),
        };
        let map = LogicalPlan::Map {
            input: Box::new(source),
            column: INPUT_COLUMN.to_string(),
            func: MapFunction::Sqrt,
            alias: ROOT_COLUMN.to_string(),
        };
        let filter = LogicalPlan::Filter {
            input: Box::new(map),
            expr: format!("{} > {:?}", ROOT_COLUMN, cfg.threshold),
        };
        LogicalPlan::Aggregate {
            input: Box::new(filter),
            agg: Aggregation::Sum {
                column: ROOT_COLUMN.to_string(),
                seed: cfg.sum_seed,
            },
        }
    }

    /// Returns the number of inputs for this node.
    pub fn inputs(&self) -> usize {
        match self {
            LogicalPlan::Source { .. } => 0,
            LogicalPlan::Map { .. } | LogicalPlan::Filter { .. } | LogicalPlan::Aggregate { .. } => {
                1
            }
        }
    }

    pub fn input(&self) -> Option<&LogicalPlan> {
        match self {
            LogicalPlan::Source { .. } => None,
            LogicalPlan::Map { input, .. }
            | LogicalPlan::Filter { input, .. }
            | LogicalPlan::Aggregate { input, .. } => Some(input),
        }
    }

    /// Stable node kind, used as the operator key by the runtime.
    pub fn kind(&self) -> &'static str {
        match self {
            LogicalPlan::Source { .. } => "source",
            LogicalPlan::Map { .. } => "map",
            LogicalPlan::Filter { .. } => "filter",
            LogicalPlan::Aggregate { .. } => "aggregate",
        }
    }

    /// Nodes in execution order (source first, root last).
    pub fn stages(&self) -> Vec<&LogicalPlan> {
        let mut out = Vec::new();
        let mut cur = Some(self);
        while let Some(node) = cur {
            out.push(node);
            cur = node.input();
        }
        out.reverse();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_has_four_stages_in_order() {
        let plan = LogicalPlan::sqrt_sum(&PipelineConfig::default());
        let kinds: Vec<_> = plan.stages().iter().map(|n| n.kind()).collect();
        assert_eq!(kinds, vec!["source", "map", "filter", "aggregate"]);
    }

    #[test]
    fn filter_expr_carries_threshold() {
        let cfg = PipelineConfig::default().with_threshold(3.5);
        let plan = LogicalPlan::sqrt_sum(&cfg);
        let filter = plan.stages()[2];
        match filter {
            LogicalPlan::Filter { expr, .. } => assert_eq!(expr, "sqrt > 3.5"),
            other => panic!("expected filter, got {other:?}"),
        }

        let plan = LogicalPlan::sqrt_sum(&PipelineConfig::default());
        match plan.stages()[2] {
            LogicalPlan::Filter { expr, .. } => assert_eq!(expr, "sqrt > 2.0"),
            other => panic!("expected filter, got {other:?}"),
        }
    }

    #[test]
    fn source_holds_integers() {
        let plan = LogicalPlan::sqrt_sum(&PipelineConfig::default());
        match plan.stages()[0] {
            LogicalPlan::Source { column, values } => {
                assert_eq!(column, INPUT_COLUMN);
                assert_eq!(values.len(), 5);
                assert_eq!(values[4], Scalar::I64(25));
            }
            other => panic!("expected source, got {other:?}"),
        }
        assert_eq!(plan.inputs(), 1);
        assert_eq!(plan.stages()[0].inputs(), 0);
    }
}
