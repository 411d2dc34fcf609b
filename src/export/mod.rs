//! Export functionality for analysis and plotting
//!
//! Currently supports CSV export of the per-timestep regret curve.

mod regret_csv;

pub use regret_csv::RegretCsvExporter;
