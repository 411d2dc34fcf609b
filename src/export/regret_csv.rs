//! CSV export of the regret curve
//!
//! Writes one record per timestep in increasing order, carrying the running
//! mean and standard deviation of normalized regret at that timestep —
//! ready for plotting a learning curve.

use std::path::Path;

use crate::{Result, stats::RegretStatistics};

/// Exporter for per-timestep regret statistics.
pub struct RegretCsvExporter;

impl RegretCsvExporter {
    /// Write the regret curve to a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or a record cannot be
    /// written; a partially written file is not cleaned up.
    ///
    /// # Returns
    ///
    /// The number of records written (one per timestep).
    pub fn export<P: AsRef<Path>>(statistics: &RegretStatistics, path: P) -> Result<usize> {
        let mut writer = csv::Writer::from_path(path)?;

        let mut written = 0;
        for row in statistics.rows() {
            writer.serialize(&row)?;
            written += 1;
        }
        writer.flush()?;

        Ok(written)
    }
}
