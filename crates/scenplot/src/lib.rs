//! CLI and figure renderer for regional scenario time series
//!
//! The ingestion/reshaping work lives in `scenplot_core`; this crate adds
//! the batch command around it: job-config loading, logging, and the
//! multi-panel comparison figure.

pub mod app;
pub mod logging;
pub mod render;

pub use app::{load_config, run};
pub use logging::init_logging;
