//! One-pass ingestion
//!
//! Reads every input file named by the job configuration, cross-checks
//! the region headers of the primary files, and assembles the immutable
//! [`Dataset`] the renderer consumes. The first error aborts the pass;
//! there are no partial results.

use crate::config::JobConfig;
use crate::error::Result;
use crate::model::Dataset;
use crate::reader::{SeriesSpec, check_region_headers, read_baseline, read_series};

/// Run the full ingestion pass for one job.
///
/// The baseline, mean, and standard-deviation files must agree on their
/// region headers; they are positional and come from the same upstream
/// export. The reference file's header is carried in the returned table
/// for the caller to inspect, since the reference model spells region
/// names its own way.
pub fn ingest(cfg: &JobConfig) -> Result<Dataset> {
    let slots = cfg.slot_count();

    let baseline = read_baseline(&cfg.data_dir.join(&cfg.baseline_file), slots)?;

    let spec = SeriesSpec::new(cfg.scenario_ids(), cfg.years.clone(), slots);
    let mean = read_series(&cfg.data_dir.join(&cfg.mean_file), &spec)?;
    let sd = read_series(&cfg.data_dir.join(&cfg.sd_file), &spec)?;

    check_region_headers(&baseline.header, &mean.header)?;
    check_region_headers(&baseline.header, &sd.header)?;

    let reference = match &cfg.reference {
        Some(reference) => {
            let spec = SeriesSpec::new(
                reference.scenarios.clone(),
                reference.years.clone(),
                slots,
            );
            Some(read_series(&cfg.data_dir.join(&reference.file), &spec)?)
        }
        None => None,
    };

    Ok(Dataset {
        baseline,
        mean,
        sd,
        reference,
    })
}
