//! Regional scenario time-series ingestion library
//!
//! This crate reads precomputed regional/annual climate-model summary
//! statistics from delimited text files and reshapes them into dense
//! per-scenario, per-year, per-region arrays:
//! - a baseline file with two fixed summary rows (mean, standard
//!   deviation) over the historical reference period;
//! - long-format series files with one row per (scenario, year), grouped
//!   by scenario and stacked onto the declared time axis;
//! - an optional reference-model file with the same layout over a sparser
//!   axis and a scenario subset.
//!
//! The whole pass is batch and synchronous: one [`pipeline::ingest`] call
//! produces an immutable [`model::Dataset`]; presentation is someone
//! else's job.

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reader;

#[cfg(test)]
mod tests;

pub use config::{JobConfig, LineStyle, ReferenceConfig, Region, Scenario, TimeAxis};
pub use error::{ReadError, Result};
pub use model::{BaselineStats, Dataset, Gap, SeriesTable};
pub use pipeline::ingest;
pub use reader::{SeriesSpec, check_region_headers, read_baseline, read_series};
