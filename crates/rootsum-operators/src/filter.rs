//! Filter operator with simple predicate evaluation.
//!
//! Supports expressions of the form: "col OP literal" where OP ∈ {==, !=, <, <=, >, >=}.
//! Rows whose value fails the predicate are dropped from every column; the
//! survivors keep their relative order.

use std::fmt;

use serde::{Deserialize, Serialize};

use rootsum_core::prelude::Schema;
use rootsum_core::types::{Column, RowBatch, Scalar};

use crate::traits::{single_input, single_schema, OpError, Operator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    // Two-character operators first so "<=" is not read as "<".
    const TOKENS: [(&'static str, CmpOp); 6] = [
        ("==", CmpOp::Eq),
        ("!=", CmpOp::Ne),
        ("<=", CmpOp::Le),
        (">=", CmpOp::Ge),
        ("<", CmpOp::Lt),
        (">", CmpOp::Gt),
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
        }
    }

    fn eval(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            CmpOp::Eq => lhs == rhs,
            CmpOp::Ne => lhs != rhs,
            CmpOp::Lt => lhs < rhs,
            CmpOp::Le => lhs <= rhs,
            CmpOp::Gt => lhs > rhs,
            CmpOp::Ge => lhs >= rhs,
        }
    }
}

/// Parsed "column op literal" predicate. The literal is always a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub column: String,
    pub op: CmpOp,
    pub literal: f64,
}

impl Predicate {
    /// Parse a simple predicate like "sqrt > 2" or "value <= 2.5".
    pub fn parse(expr: &str) -> Result<Self, OpError> {
        for (token, op) in CmpOp::TOKENS {
            if let Some(pos) = expr.find(token) {
                let column = expr[..pos].trim().to_string();
                let literal = expr[pos + token.len()..].trim();
                if column.is_empty() || literal.is_empty() {
                    break;
                }
                let literal = literal.parse::<f64>().map_err(|_| {
                    OpError::Plan(format!("literal '{}' in '{}' is not a number", literal, expr))
                })?;
                return Ok(Self {
                    column,
                    op,
                    literal,
                });
            }
        }
        Err(OpError::Plan(format!("unparseable predicate: {}", expr)))
    }

    /// Integers and reals both compare as f64 so "value > 2.5" works on ints.
    pub fn matches(&self, val: &Scalar) -> bool {
        self.op.eval(val.as_f64(), self.literal)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.op.symbol(), self.literal)
    }
}

#[derive(Debug, Clone)]
pub struct Filter {
    pub predicate: Predicate,
}

impl Filter {
    pub fn new(expr: &str) -> Result<Self, OpError> {
        Ok(Self {
            predicate: Predicate::parse(expr)?,
        })
    }
}

impl Operator for Filter {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn plan(&self, input_schemas: &[Schema]) -> Result<Schema, OpError> {
        let schema = single_schema(self.name(), input_schemas)?;
        if schema.index_of(&self.predicate.column).is_none() {
            return Err(OpError::Schema(format!(
                "column '{}' not found",
                self.predicate.column
            )));
        }
        Ok(schema.clone())
    }

    fn eval_block(&self, inputs: &[RowBatch]) -> Result<RowBatch, OpError> {
        let input = single_input(inputs)?;

        let col = input.column(&self.predicate.column).ok_or_else(|| {
            OpError::Exec(format!("column '{}' not found", self.predicate.column))
        })?;

        let keep: Vec<bool> = col.values.iter().map(|v| self.predicate.matches(v)).collect();

        let columns = input
            .columns
            .iter()
            .map(|c| {
                Column::new(
                    c.name.clone(),
                    c.values
                        .iter()
                        .zip(&keep)
                        .filter(|(_, k)| **k)
                        .map(|(v, _)| v.clone())
                        .collect(),
                )
            })
            .collect();

        Ok(RowBatch::new(columns))
    }
}
