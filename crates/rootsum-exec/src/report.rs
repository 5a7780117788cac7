//! Human-readable report: four labeled lines in a fixed order.

use std::io::{self, Write};

use rootsum_core::config::Locale;

use crate::runtime::PipelineRun;

/// Line prefixes, one per reported stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub original: String,
    pub roots: String,
    pub filtered: String,
    pub total: String,
}

impl Labels {
    pub fn english(threshold: f64) -> Self {
        Self {
            original: "Original numbers".into(),
            roots: "Square roots".into(),
            filtered: format!("Filtered square roots (greater than {threshold})"),
            total: "Sum of filtered square roots".into(),
        }
    }

    pub fn russian(threshold: f64) -> Self {
        Self {
            original: "Исходные числа".into(),
            roots: "Квадратные корни".into(),
            filtered: format!("Отфильтрованные квадратные корни (больше {threshold})"),
            total: "Сумма отфильтрованных квадратных корней".into(),
        }
    }

    pub fn for_locale(locale: Locale, threshold: f64) -> Self {
        match locale {
            Locale::En => Self::english(threshold),
            Locale::Ru => Self::russian(threshold),
        }
    }
}

/// Write the report for `run`, one line per stage, then flush.
pub fn write_report<W: Write>(out: &mut W, labels: &Labels, run: &PipelineRun) -> io::Result<()> {
    out.write_all(run.render(labels).as_bytes())?;
    out.flush()
}
