//! Aggregate operator: folds a numeric column into a single-row batch.
//!
//! With a seed the fold is total (an empty column yields the seed). Without
//! one, the first value starts the fold and an empty column is an error.

use rootsum_core::dag::{Aggregation, TOTAL_COLUMN};
use rootsum_core::prelude::{DataType, Field, Schema};
use rootsum_core::types::{Column, RowBatch, Scalar};

use crate::traits::{single_input, single_schema, OpError, Operator};

#[derive(Debug, Clone)]
pub struct Aggregate {
    pub agg: Aggregation,
    /// Name of the single output column.
    pub alias: String,
}

impl Aggregate {
    pub fn new(agg: Aggregation) -> Self {
        Self {
            agg,
            alias: TOTAL_COLUMN.to_string(),
        }
    }

    /// Sum over `column`, optionally seeded.
    pub fn sum(column: impl Into<String>, seed: Option<f64>) -> Self {
        Self::new(Aggregation::Sum {
            column: column.into(),
            seed,
        })
    }

    fn column(&self) -> &str {
        match &self.agg {
            Aggregation::Sum { column, .. } => column,
        }
    }
}

impl Operator for Aggregate {
    fn name(&self) -> &'static str {
        "aggregate"
    }

    fn plan(&self, input_schemas: &[Schema]) -> Result<Schema, OpError> {
        let schema = single_schema(self.name(), input_schemas)?;
        if schema.index_of(self.column()).is_none() {
            return Err(OpError::Schema(format!(
                "column '{}' not found",
                self.column()
            )));
        }
        Ok(Schema::new(vec![Field::new(
            self.alias.clone(),
            DataType::Float64,
            false,
        )]))
    }

    fn eval_block(&self, inputs: &[RowBatch]) -> Result<RowBatch, OpError> {
        let input = single_input(inputs)?;
        let col = input
            .column(self.column())
            .ok_or_else(|| OpError::Exec(format!("column '{}' not found", self.column())))?;

        let total = match &self.agg {
            Aggregation::Sum { column, seed } => sum(column, &col.values, *seed)?,
        };

        Ok(RowBatch::new(vec![Column::new(
            self.alias.clone(),
            vec![Scalar::F64(total)],
        )]))
    }
}

/// Left-to-right sum.
fn sum(column: &str, values: &[Scalar], seed: Option<f64>) -> Result<f64, OpError> {
    let nums = values.iter().map(Scalar::as_f64);
    match seed {
        Some(seed) => Ok(nums.fold(seed, |acc, x| acc + x)),
        None => nums.reduce(|acc, x| acc + x).ok_or_else(|| OpError::EmptyReduction {
            column: column.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roots(values: &[f64]) -> RowBatch {
        RowBatch::new(vec![Column::new(
            "sqrt",
            values.iter().copied().map(Scalar::F64).collect(),
        )])
    }

    fn total(batch: &RowBatch) -> Scalar {
        batch.column(TOTAL_COLUMN).unwrap().values[0].clone()
    }

    #[test]
    fn sums_filtered_roots() {
        let out = Aggregate::sum("sqrt", Some(0.0))
            .eval_block(&[roots(&[3.0, 4.0, 5.0])])
            .unwrap();
        assert_eq!(out.num_rows(), 1);
        assert_eq!(total(&out), Scalar::F64(12.0));
    }

    #[test]
    fn unseeded_sum_matches_seeded_on_non_empty_input() {
        let seeded = Aggregate::sum("sqrt", Some(0.0))
            .eval_block(&[roots(&[3.0, 4.0, 5.0])])
            .unwrap();
        let unseeded = Aggregate::sum("sqrt", None)
            .eval_block(&[roots(&[3.0, 4.0, 5.0])])
            .unwrap();
        assert_eq!(total(&seeded), total(&unseeded));
    }

    #[test]
    fn empty_input_with_seed_yields_seed() {
        let out = Aggregate::sum("sqrt", Some(0.0))
            .eval_block(&[roots(&[])])
            .unwrap();
        assert_eq!(total(&out), Scalar::F64(0.0));
    }

    #[test]
    fn empty_input_without_seed_is_an_error() {
        let err = Aggregate::sum("sqrt", None)
            .eval_block(&[roots(&[])])
            .unwrap_err();
        match err {
            OpError::EmptyReduction { column } => assert_eq!(column, "sqrt"),
            other => panic!("expected empty reduction, got {other:?}"),
        }
    }

    #[test]
    fn integer_values_are_widened() {
        let batch = RowBatch::new(vec![Column::new(
            "sqrt",
            vec![Scalar::I64(3), Scalar::F64(4.5)],
        )]);
        let out = Aggregate::sum("sqrt", None).eval_block(&[batch]).unwrap();
        assert_eq!(total(&out), Scalar::F64(7.5));
    }

    #[test]
    fn plan_emits_single_total_field() {
        let input = Schema::new(vec![
            Field::new("value", DataType::Int64, false),
            Field::new("sqrt", DataType::Float64, false),
        ]);
        let out = Aggregate::sum("sqrt", Some(0.0)).plan(&[input]).unwrap();
        assert_eq!(out.fields, vec![Field::new("sum", DataType::Float64, false)]);

        let missing = Schema::new(vec![Field::new("value", DataType::Int64, false)]);
        assert!(matches!(
            Aggregate::sum("sqrt", None).plan(&[missing]),
            Err(OpError::Schema(_))
        ));
    }
}
