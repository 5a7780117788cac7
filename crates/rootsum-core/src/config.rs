//! Pipeline configuration that downstream crates can serialize/deserialize.
//!
//! The binary never reads configuration from the outside world: the fixed
//! dataset lives in `PipelineConfig::default()`. Library callers may build
//! other configurations in code.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The dataset the program ships with.
pub const DEFAULT_NUMBERS: [i64; 5] = [1, 4, 9, 16, 25];

/// Square roots must be strictly greater than this to survive the filter.
pub const DEFAULT_THRESHOLD: f64 = 2.0;

/// Language of the report labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Input sequence, in order.
    pub numbers: Vec<i64>,

    /// Filter threshold (strict `>`).
    pub threshold: f64,

    /// Starting value of the summation. `None` makes an empty sum an error.
    pub sum_seed: Option<f64>,

    /// Label language for the report.
    pub locale: Locale,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            numbers: DEFAULT_NUMBERS.to_vec(),
            threshold: DEFAULT_THRESHOLD,
            sum_seed: Some(0.0),
            locale: Locale::En,
        }
    }
}

impl PipelineConfig {
    pub fn with_numbers(mut self, numbers: impl Into<Vec<i64>>) -> Self {
        self.numbers = numbers.into();
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_sum_seed(mut self, seed: Option<f64>) -> Self {
        self.sum_seed = seed;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Reject values no pipeline can run with.
    ///
    /// Negative numbers are *not* rejected here; they surface as a domain
    /// error from the square-root stage, at the element that caused it.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(Error::Config(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        if let Some(seed) = self.sum_seed {
            if !seed.is_finite() {
                return Err(Error::Config(format!("sum seed must be finite, got {seed}")));
            }
        }
        Ok(())
    }
}
