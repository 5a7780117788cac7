//! Map operator: applies an elementwise function to one column and appends
//! the result as a new column.

use rootsum_core::dag::MapFunction;
use rootsum_core::prelude::{DataType, Field, Schema};
use rootsum_core::types::{Column, RowBatch, Scalar};

use crate::traits::{single_input, single_schema, OpError, Operator};

pub struct Map {
    /// Column the function reads.
    pub column: String,
    pub func: MapFunction,
    /// Name of the appended output column.
    pub alias: String,
}

impl Map {
    pub fn new(column: impl Into<String>, func: MapFunction, alias: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            func,
            alias: alias.into(),
        }
    }
}

impl Operator for Map {
    fn name(&self) -> &'static str {
        "map"
    }

    fn plan(&self, input_schemas: &[Schema]) -> Result<Schema, OpError> {
        let mut schema = single_schema(self.name(), input_schemas)?.clone();

        let field = schema
            .field_named(&self.column)
            .ok_or_else(|| OpError::Schema(format!("column '{}' not found", self.column)))?;
        if schema.index_of(&self.alias).is_some() {
            return Err(OpError::Schema(format!(
                "output column '{}' already exists",
                self.alias
            )));
        }

        let nullable = field.nullable;
        schema
            .fields
            .push(Field::new(self.alias.clone(), DataType::Float64, nullable));
        Ok(schema)
    }

    fn eval_block(&self, inputs: &[RowBatch]) -> Result<RowBatch, OpError> {
        let input = single_input(inputs)?;

        let col = input
            .column(&self.column)
            .ok_or_else(|| OpError::Exec(format!("column '{}' not found", self.column)))?;

        let values = col
            .values
            .iter()
            .map(|v| apply(self.func, v.as_f64()).map(Scalar::F64))
            .collect::<Result<Vec<_>, _>>()?;

        let mut columns = input.columns.clone();
        columns.push(Column::new(self.alias.clone(), values));
        Ok(RowBatch::new(columns))
    }
}

fn apply(func: MapFunction, x: f64) -> Result<f64, OpError> {
    match func {
        MapFunction::Sqrt => {
            if x < 0.0 || x.is_nan() {
                return Err(OpError::Domain {
                    func: func.name(),
                    value: x,
                });
            }
            Ok(x.sqrt())
        }
    }
}
