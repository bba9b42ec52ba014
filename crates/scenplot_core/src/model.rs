//! Ingestion output types
//!
//! Everything here is filled once by a single reading pass and held
//! immutably until the renderer consumes it.

use ndarray::{Array3, ArrayView1, s};

/// Baseline-period summary statistics, one value per region slot.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineStats {
    /// Multi-model mean over the baseline period.
    pub mean: Vec<f64>,
    /// Standard deviation of the multi-model mean.
    pub sd: Vec<f64>,
    /// Region names as the file's header spelled them, in column order.
    pub header: Vec<String>,
}

/// A (scenario, year) cell that no input row filled. The cell holds 0.0
/// in the output array; callers decide whether that is tolerable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gap {
    pub scenario: String,
    pub year: i32,
}

/// Dense per-scenario, per-year, per-region values from one series file.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesTable {
    /// Shape `[scenario, time, region_slot]`, axes in declared order.
    pub values: Array3<f64>,
    /// Region names from the file header, in column order.
    pub header: Vec<String>,
    /// Cells left at their zero default, in (scenario, year) order.
    pub gaps: Vec<Gap>,
}

impl SeriesTable {
    /// The time series of one scenario in one region slot.
    pub fn series(&self, scenario: usize, slot: usize) -> ArrayView1<'_, f64> {
        self.values.slice(s![scenario, .., slot])
    }
}

/// Everything the renderer consumes, produced by one ingestion pass.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub baseline: BaselineStats,
    pub mean: SeriesTable,
    pub sd: SeriesTable,
    pub reference: Option<SeriesTable>,
}
