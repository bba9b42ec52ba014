//! Multi-panel comparison figure
//!
//! One panel per region on a 3x4 grid: per-scenario mean lines with
//! shaded mean±sd bands, a dotted zero line, the optional reference-model
//! overlay as circle markers, and a shared legend in the spare grid slot.
//! Everything here consumes the arrays exactly as the core ordered them;
//! only the panel arrangement is presentation-specific.

use std::path::Path;

use color_eyre::eyre::eyre;
use ndarray::ArrayView1;
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use scenplot_core::{Dataset, JobConfig, LineStyle, ReferenceConfig, SeriesTable};

const PANEL_ROWS: usize = 3;
const PANEL_COLS: usize = 4;

/// Grid slot for each region column, reproducing the upstream figure's
/// arrangement. Slot 8 is left free for the legend.
const PANEL_ORDER: [usize; 11] = [5, 11, 3, 1, 2, 4, 6, 0, 7, 10, 9];

/// Fixed value-axis range shared by every panel.
const Y_MIN: f64 = -20.0;
const Y_MAX: f64 = 24.0;

const FIGURE_SIZE: (u32, u32) = (1600, 1000);

/// Polar regions carry no usable data and are never plotted.
fn is_plottable(region: &str) -> bool {
    region != "North Pole" && region != "South Pole"
}

fn scenario_color(color: [u8; 3]) -> RGBColor {
    RGBColor(color[0], color[1], color[2])
}

/// One unbroken run of (year, mean, sd) points.
///
/// Every series starts from a synthetic origin point one year before the
/// axis, at zero change. Scenarios flagged `mask_zero` treat zero means
/// as missing data: the line breaks there instead of dipping to zero.
fn masked_segments(
    years: &[i32],
    mean: ArrayView1<'_, f64>,
    sd: ArrayView1<'_, f64>,
    mask_zero: bool,
) -> Vec<Vec<(f64, f64, f64)>> {
    let origin_year = f64::from(years[0] - 1);
    let mut segments = Vec::new();
    let mut current = vec![(origin_year, 0.0, 0.0)];

    for (i, &year) in years.iter().enumerate() {
        if mask_zero && mean[i] == 0.0 {
            if current.len() > 1 {
                segments.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
            continue;
        }
        current.push((f64::from(year), mean[i], sd[i]));
    }
    if current.len() > 1 {
        segments.push(current);
    }
    segments
}

/// Render the full figure to `out_path`.
pub fn render_figure(cfg: &JobConfig, dataset: &Dataset, out_path: &Path) -> color_eyre::Result<()> {
    if cfg.years.is_empty() {
        return Err(eyre!("cannot render a figure over an empty time axis"));
    }

    let root = BitMapBackend::new(out_path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let title = format!("Change in surface {} {}", cfg.species_label, cfg.units_label);
    let titled = root.titled(&title, ("sans-serif", 20))?;
    let panels = titled.split_evenly((PANEL_ROWS, PANEL_COLS));

    for (ireg, region) in dataset.mean.header.iter().enumerate() {
        let Some(&slot) = PANEL_ORDER.get(ireg) else {
            tracing::warn!("no panel slot for region column {ireg} ({region}); skipping");
            continue;
        };
        if !is_plottable(region) {
            tracing::debug!("not plotting region {region}");
            continue;
        }
        draw_panel(cfg, dataset, ireg, region, &panels[slot])?;
    }

    draw_legend(cfg, &panels[legend_slot()])?;
    root.present()?;

    Ok(())
}

/// The one grid slot PANEL_ORDER leaves unused.
fn legend_slot() -> usize {
    (0..PANEL_ROWS * PANEL_COLS)
        .find(|slot| !PANEL_ORDER.contains(slot))
        .unwrap_or(0)
}

fn draw_panel(
    cfg: &JobConfig,
    dataset: &Dataset,
    ireg: usize,
    region: &str,
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
) -> color_eyre::Result<()> {
    let years = cfg.years.years();
    let x_min = f64::from(years[0] - 1);
    let x_max = f64::from(*years.last().unwrap_or(&years[0]));

    let mut chart = ChartBuilder::on(area)
        .caption(region, ("sans-serif", 14))
        .margin(6)
        .x_label_area_size(22)
        .y_label_area_size(34)
        .build_cartesian_2d(x_min..x_max, Y_MIN..Y_MAX)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(BLACK.mix(0.1))
        .y_desc(&cfg.units_label)
        .x_labels(5)
        .y_labels(5)
        .label_style(("sans-serif", 10))
        .axis_desc_style(("sans-serif", 11))
        .draw()?;

    // Zero line marking the starting point.
    chart.draw_series(DashedLineSeries::new(
        vec![(x_min, 0.0), (x_max, 0.0)],
        2,
        4,
        BLACK.mix(0.4).into(),
    ))?;

    for (iscn, scenario) in cfg.scenarios.iter().enumerate() {
        let color = scenario_color(scenario.color);
        let segments = masked_segments(
            years,
            dataset.mean.series(iscn, ireg),
            dataset.sd.series(iscn, ireg),
            scenario.mask_zero,
        );

        for segment in &segments {
            // Shaded mean±sd band: upper edge forward, lower edge back.
            let mut band: Vec<(f64, f64)> =
                segment.iter().map(|&(x, m, s)| (x, m + s)).collect();
            band.extend(segment.iter().rev().map(|&(x, m, s)| (x, m - s)));
            chart.draw_series(std::iter::once(Polygon::new(band, color.mix(0.2))))?;

            let line: Vec<(f64, f64)> = segment.iter().map(|&(x, m, _)| (x, m)).collect();
            match scenario.style {
                LineStyle::Solid => {
                    chart.draw_series(LineSeries::new(line, color.stroke_width(1)))?;
                }
                LineStyle::Dashed => {
                    chart.draw_series(DashedLineSeries::new(line, 6, 4, color.into()))?;
                }
                LineStyle::Dotted => {
                    chart.draw_series(DashedLineSeries::new(line, 1, 3, color.into()))?;
                }
            }
        }
    }

    if let (Some(reference), Some(ref_cfg)) = (&dataset.reference, &cfg.reference) {
        draw_reference_overlay(cfg, reference, ref_cfg, ireg, x_min, &mut chart)?;
    }

    // Baseline-period absolute value for this region.
    let label = format!(
        "{:.1} +/- {:.1}",
        dataset.baseline.mean[ireg], dataset.baseline.sd[ireg]
    );
    chart.draw_series(std::iter::once(Text::new(
        label,
        (x_min + 2.0, Y_MAX - 3.5),
        ("sans-serif", 11).into_font(),
    )))?;

    Ok(())
}

fn draw_reference_overlay<'a>(
    cfg: &JobConfig,
    reference: &SeriesTable,
    ref_cfg: &ReferenceConfig,
    ireg: usize,
    x_min: f64,
    chart: &mut ChartContext<'_, BitMapBackend<'a>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
) -> color_eyre::Result<()> {
    for (iscn, id) in ref_cfg.scenarios.iter().enumerate() {
        // Reference scenarios share the primary list's colours.
        let Some(scenario) = cfg.scenario(id) else {
            continue;
        };
        let color = scenario_color(scenario.color);

        let mut points = vec![(x_min, 0.0)];
        points.extend(
            ref_cfg
                .years
                .years()
                .iter()
                .enumerate()
                .map(|(t, &year)| (f64::from(year), reference.values[[iscn, t, ireg]])),
        );

        chart.draw_series(LineSeries::new(
            points.clone(),
            color.mix(0.75).stroke_width(1),
        ))?;
        chart.draw_series(
            points
                .into_iter()
                .skip(1)
                .map(|point| Circle::new(point, 2, color.filled())),
        )?;
    }
    Ok(())
}

/// Shared legend drawn into the spare grid slot: one line sample per
/// scenario, plus the reference-model marker.
fn draw_legend(
    cfg: &JobConfig,
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
) -> color_eyre::Result<()> {
    let mut y = 40;
    for scenario in &cfg.scenarios {
        let color = scenario_color(scenario.color);
        match scenario.style {
            LineStyle::Solid => {
                area.draw(&PathElement::new(vec![(20, y), (70, y)], color.stroke_width(2)))?;
            }
            LineStyle::Dashed => {
                for x in [20, 40, 60] {
                    area.draw(&PathElement::new(
                        vec![(x, y), (x + 10, y)],
                        color.stroke_width(2),
                    ))?;
                }
            }
            LineStyle::Dotted => {
                for x in (20..70).step_by(8) {
                    area.draw(&Circle::new((x, y), 1, color.filled()))?;
                }
            }
        }
        area.draw(&Text::new(
            scenario.label.clone(),
            (80, y - 7),
            ("sans-serif", 13).into_font(),
        ))?;
        y += 24;
    }

    if let Some(ref_cfg) = &cfg.reference {
        area.draw(&Circle::new((45, y), 3, BLACK.filled()))?;
        area.draw(&Text::new(
            ref_cfg.label.clone(),
            (80, y - 7),
            ("sans-serif", 13).into_font(),
        ))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use ndarray::arr1;

    use super::*;

    #[test]
    fn panel_order_covers_the_grid_once() {
        let mut seen = [false; PANEL_ROWS * PANEL_COLS];
        for &slot in &PANEL_ORDER {
            assert!(slot < seen.len());
            assert!(!seen[slot], "slot {slot} assigned twice");
            seen[slot] = true;
        }
        // Exactly one slot stays free for the legend.
        assert_eq!(seen.iter().filter(|taken| !**taken).count(), 1);
        assert!(!seen[legend_slot()]);
    }

    #[test]
    fn polar_regions_are_not_plottable() {
        assert!(!is_plottable("North Pole"));
        assert!(!is_plottable("South Pole"));
        assert!(is_plottable("Africa"));
    }

    #[test]
    fn segments_start_from_the_origin_point() {
        let mean = arr1(&[1.0, 2.0]);
        let sd = arr1(&[0.1, 0.2]);
        let segments = masked_segments(&[2015, 2016], mean.view(), sd.view(), false);

        assert_eq!(
            segments,
            vec![vec![(2014.0, 0.0, 0.0), (2015.0, 1.0, 0.1), (2016.0, 2.0, 0.2)]]
        );
    }

    #[test]
    fn zero_masking_breaks_the_line() {
        let mean = arr1(&[1.0, 0.0, 3.0, 4.0]);
        let sd = arr1(&[0.1, 0.0, 0.3, 0.4]);
        let segments =
            masked_segments(&[2015, 2016, 2017, 2018], mean.view(), sd.view(), true);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], vec![(2014.0, 0.0, 0.0), (2015.0, 1.0, 0.1)]);
        assert_eq!(segments[1], vec![(2017.0, 3.0, 0.3), (2018.0, 4.0, 0.4)]);
    }

    #[test]
    fn unmasked_zeros_are_kept() {
        let mean = arr1(&[0.0, 2.0]);
        let sd = arr1(&[0.0, 0.2]);
        let segments = masked_segments(&[2015, 2016], mean.view(), sd.view(), false);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), 3);
    }
}
