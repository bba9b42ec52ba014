//! Job configuration
//!
//! The main configuration type is `JobConfig`, which describes one complete
//! ingest-and-plot run: the tracked species, the declared region and
//! scenario sets, the time axes, and the input/output locations. It is
//! built once at startup (from the built-in preset or a YAML file) and
//! passed immutably to the readers and the renderer; nothing consults
//! ambient globals.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

mod preset;

/// One geographic aggregation region, positional in every input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    /// Numeric region code from the upstream regional definitions.
    pub code: u8,
    /// Named display colour consumed by the renderer.
    pub color: String,
}

/// Line style for a scenario's time-series trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// A projection pathway under which future values were computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Raw identifier matched exactly against the label field of data rows.
    pub id: String,
    /// Display label for the legend.
    pub label: String,
    /// RGB display colour.
    pub color: [u8; 3],
    #[serde(default)]
    pub style: LineStyle,
    /// Treat zero values as "data unavailable" and drop them before
    /// plotting. Used by scenarios with incomplete model coverage.
    #[serde(default)]
    pub mask_zero: bool,
}

/// An ordered, fixed sequence of years. Declared up front, never inferred
/// from data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeAxis {
    years: Vec<i32>,
}

impl TimeAxis {
    pub fn new(years: Vec<i32>) -> Self {
        Self { years }
    }

    /// Dense annual axis covering `start..=end`.
    pub fn annual(start: i32, end: i32) -> Self {
        Self {
            years: (start..=end).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Position of `year` on the axis, if declared.
    pub fn index_of(&self, year: i32) -> Option<usize> {
        self.years.iter().position(|&y| y == year)
    }
}

/// Overlay data from an independently computed reference model, covering a
/// scenario subset on a sparser time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// Display label for the legend (the reference model's name).
    pub label: String,
    /// Input file name, relative to the data directory.
    pub file: String,
    /// Scenario ids covered by the reference model. Must be a subset of
    /// the primary scenario ids for the overlay colours to line up.
    pub scenarios: Vec<String>,
    pub years: TimeAxis,
}

/// Complete description of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    /// Short species identifier, used in the output file name.
    pub species: String,
    /// Display name of the tracked quantity.
    pub species_label: String,
    /// Units string shown on value axes.
    pub units_label: String,

    /// Ordered region list. Input columns follow this order, with one
    /// extra trailing global slot (see [`JobConfig::slot_count`]).
    pub regions: Vec<Region>,
    /// Ordered scenario list; also the first axis of the output arrays.
    pub scenarios: Vec<Scenario>,
    /// Dense time axis of the primary model series.
    pub years: TimeAxis,
    /// Reference-model overlay, if any.
    #[serde(default)]
    pub reference: Option<ReferenceConfig>,

    pub data_dir: PathBuf,
    pub plot_dir: PathBuf,
    pub baseline_file: String,
    pub mean_file: String,
    pub sd_file: String,
}

impl JobConfig {
    /// Number of value columns per data row: one per region plus the
    /// trailing global slot.
    pub fn slot_count(&self) -> usize {
        self.regions.len() + 1
    }

    pub fn scenario_ids(&self) -> Vec<String> {
        self.scenarios.iter().map(|s| s.id.clone()).collect()
    }

    /// Scenario entry for a raw id, if declared.
    pub fn scenario(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }
}
