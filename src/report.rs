use anyhow::{Context, Result};

use std::{fmt::Display, fs, path::Path, time::Duration};

use crate::{aggregate::Aggregation, usd::Usd};

/// Holds the results of a sales run.
///
/// To create a `Report`, use [`Report::new`] with the output of
/// [`compute_total_sales`](crate::compute_total_sales) and the time the run
/// took.
///
/// To get a printable version of the report, use its [`Display`]
/// implementation. To save it, use [`Report::write_to`].
#[derive(Debug, Default)]
pub struct Report {
    pub total: Usd,
    pub elapsed: Duration,
    pub errors: Vec<String>,
}

impl Report {
    #[must_use]
    pub fn new(aggregation: Aggregation, elapsed: Duration) -> Self {
        Self {
            total: aggregation.total,
            elapsed,
            errors: aggregation.errors,
        }
    }

    /// Writes the report text to the file at `path`, replacing any existing
    /// contents.
    ///
    /// # Errors
    ///
    /// Returns any errors from creating or writing the file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string())
            .with_context(|| format!("writing results to {}", path.display()))
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total Sales Cost: ${}", self.total)?;
        write!(
            f,
            "Execution Time: {:.2} seconds",
            self.elapsed.as_secs_f64()
        )?;
        if !self.errors.is_empty() {
            write!(f, "\n\nErrors:")?;
            for error in &self.errors {
                write!(f, "\n{error}")?;
            }
        }
        Ok(())
    }
}
