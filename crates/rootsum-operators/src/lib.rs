#![forbid(unsafe_code)]
//! rootsum-operators: the three pipeline stages (map/filter/aggregate).
//!
//! Operators are pure and synchronous. Each one exposes a planning surface
//! (`plan`) that checks input schemas up front, and an `eval_block` that
//! turns one input batch into one output batch.

pub mod aggregate;
pub mod filter;
pub mod map;
pub mod traits;

pub use aggregate::Aggregate;
pub use filter::{CmpOp, Filter, Predicate};
pub use map::Map;
pub use traits::{BlockStream, OpError, Operator};
