//! Run orchestration: load the job config, ingest, report soft failures,
//! render.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use scenplot_core::{Gap, JobConfig, check_region_headers, ingest};

use crate::render;

/// Load a YAML job config.
pub fn load_config(path: &Path) -> color_eyre::Result<JobConfig> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("cannot read job config {}", path.display()))?;
    let cfg = serde_saphyr::from_str(&contents)
        .wrap_err_with(|| format!("invalid job config {}", path.display()))?;
    Ok(cfg)
}

/// Execute one batch run: read every input file, surface the gap reports,
/// render the figure. Returns the path of the written figure.
pub fn run(cfg: &JobConfig) -> color_eyre::Result<PathBuf> {
    tracing::info!(species = %cfg.species, "reading precomputed regional mean data");
    let dataset = ingest(cfg)?;

    warn_gaps("mean series", &dataset.mean.gaps);
    warn_gaps("sd series", &dataset.sd.gaps);
    if let Some(reference) = &dataset.reference {
        warn_gaps("reference series", &reference.gaps);
        // The reference model spells region names its own way, so this is
        // advisory rather than fatal; column order is still trusted.
        if let Err(err) = check_region_headers(&dataset.baseline.header, &reference.header) {
            tracing::warn!("reference file region naming differs: {err}");
        }
    }

    fs::create_dir_all(&cfg.plot_dir)
        .wrap_err_with(|| format!("cannot create plot directory {}", cfg.plot_dir.display()))?;
    let out_path = cfg
        .plot_dir
        .join(format!("Ann_mean_surf_{}_resp_regional_timeseries.png", cfg.species));

    tracing::info!("rendering {} panels figure", cfg.regions.len() + 1);
    render::render_figure(cfg, &dataset, &out_path)?;

    Ok(out_path)
}

/// Unfilled (scenario, year) cells stay zero in the arrays; log one
/// summary line per affected scenario so the soft failure is visible.
fn warn_gaps(which: &str, gaps: &[Gap]) {
    let mut per_scenario: BTreeMap<&str, usize> = BTreeMap::new();
    for gap in gaps {
        *per_scenario.entry(gap.scenario.as_str()).or_default() += 1;
    }
    for (scenario, count) in per_scenario {
        tracing::warn!("{which}: scenario {scenario} left {count} time step(s) unfilled");
    }
}
