//! Delimited-text readers
//!
//! Two file layouts arrive from upstream:
//!
//! - the baseline file: a header line, then exactly two summary rows
//!   (mean, standard deviation) with region values from a fixed offset;
//! - long-format series files: a header line, then one row per
//!   (scenario, year) with the scenario label in a fixed field and region
//!   values from a fixed offset.
//!
//! `read_series` handles both the primary model series and the
//! reference-model overlay; they differ only in the scenario list and
//! time axis carried by the [`SeriesSpec`].

use std::fs::File;
use std::path::Path;

use ndarray::Array3;
use rustc_hash::FxHashMap;

use crate::config::TimeAxis;
use crate::error::{ReadError, Result};
use crate::model::{BaselineStats, Gap, SeriesTable};

/// Field index where the baseline file's region columns start.
const BASELINE_VALUE_OFFSET: usize = 3;

/// Shape of one long-format series file.
#[derive(Debug, Clone)]
pub struct SeriesSpec {
    /// Declared scenario ids, in output-axis order. Rows are matched by
    /// exact string equality against the label field.
    pub scenarios: Vec<String>,
    /// Declared time axis, in output-axis order.
    pub years: TimeAxis,
    /// Region value count per row (regions plus the trailing global slot).
    pub slots: usize,
    /// Field holding the row's year, when the file carries one.
    pub time_field: usize,
    /// Field holding the scenario label.
    pub label_field: usize,
    /// Field index where the region values start.
    pub value_offset: usize,
}

impl SeriesSpec {
    /// Spec with the upstream layout: year in field 0, scenario label in
    /// field 1, region values from field 2.
    pub fn new(scenarios: Vec<String>, years: TimeAxis, slots: usize) -> Self {
        Self {
            scenarios,
            years,
            slots,
            time_field: 0,
            label_field: 1,
            value_offset: 2,
        }
    }
}

fn read_records(path: &Path) -> Result<Vec<csv::StringRecord>> {
    let file = File::open(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record.map_err(|source| ReadError::Csv {
            path: path.to_path_buf(),
            source,
        })?);
    }
    Ok(records)
}

fn parse_value(path: &Path, line: usize, field: usize, raw: &str) -> Result<f64> {
    raw.parse().map_err(|_| ReadError::BadNumber {
        path: path.to_path_buf(),
        line,
        field,
        value: raw.to_string(),
    })
}

/// Parse one data row's region values from `offset` onward into `out`.
fn fill_row(
    path: &Path,
    record: &csv::StringRecord,
    line: usize,
    offset: usize,
    out: &mut [f64],
) -> Result<()> {
    let found = record.len().saturating_sub(offset);
    if found != out.len() {
        return Err(ReadError::FieldCount {
            path: path.to_path_buf(),
            line,
            expected: out.len(),
            found,
        });
    }
    for (i, raw) in record.iter().skip(offset).enumerate() {
        out[i] = parse_value(path, line, offset + i, raw)?;
    }
    Ok(())
}

/// Read the baseline file: header, mean row, standard-deviation row.
///
/// Header fields from the value offset onward name the regions; they are
/// returned as-is, not validated against the declared region list. Lines
/// past the two summary rows are ignored.
pub fn read_baseline(path: &Path, slots: usize) -> Result<BaselineStats> {
    let records = read_records(path)?;
    if records.len() < 3 {
        return Err(ReadError::TooFewLines {
            path: path.to_path_buf(),
            found: records.len(),
        });
    }

    let header: Vec<String> = records[0]
        .iter()
        .skip(BASELINE_VALUE_OFFSET)
        .map(str::to_string)
        .collect();

    let mut mean = vec![0.0; slots];
    let mut sd = vec![0.0; slots];
    fill_row(path, &records[1], 2, BASELINE_VALUE_OFFSET, &mut mean)?;
    fill_row(path, &records[2], 3, BASELINE_VALUE_OFFSET, &mut sd)?;

    Ok(BaselineStats { mean, sd, header })
}

/// Read a long-format series file into a dense
/// `[scenario, time, region_slot]` array.
///
/// Rows whose label field matches no declared scenario are skipped. A
/// matching row is placed on the time axis by its year field when that
/// field parses as a year (which must then be on the declared axis); rows
/// without a parseable year fall back to file order, filling the
/// scenario's next open slot. Filling a cell twice is an error, as is
/// running out of slots in file-order placement. Cells no row filled stay
/// at 0.0 and are listed in the returned [`Gap`] report.
pub fn read_series(path: &Path, spec: &SeriesSpec) -> Result<SeriesTable> {
    let records = read_records(path)?;
    if records.is_empty() {
        return Err(ReadError::TooFewLines {
            path: path.to_path_buf(),
            found: 0,
        });
    }

    let header: Vec<String> = records[0]
        .iter()
        .skip(spec.value_offset)
        .map(str::to_string)
        .collect();

    let scenario_count = spec.scenarios.len();
    let time_count = spec.years.len();
    let scenario_index: FxHashMap<&str, usize> = spec
        .scenarios
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();

    let mut values = Array3::zeros((scenario_count, time_count, spec.slots));
    let mut filled = vec![vec![false; time_count]; scenario_count];
    let mut next_open = vec![0usize; scenario_count];
    let mut row = vec![0.0; spec.slots];

    for (index, record) in records.iter().enumerate().skip(1) {
        let line = index + 1;
        let Some(label) = record.get(spec.label_field) else {
            continue;
        };
        let Some(&scenario) = scenario_index.get(label) else {
            continue;
        };

        let year_field = record.get(spec.time_field).and_then(|f| f.parse().ok());
        let time = match year_field {
            Some(year) => {
                spec.years
                    .index_of(year)
                    .ok_or_else(|| ReadError::UnknownYear {
                        path: path.to_path_buf(),
                        line,
                        year,
                    })?
            }
            None => {
                // No year on the row; place it in file order.
                while next_open[scenario] < time_count && filled[scenario][next_open[scenario]] {
                    next_open[scenario] += 1;
                }
                if next_open[scenario] == time_count {
                    return Err(ReadError::ScenarioOverflow {
                        path: path.to_path_buf(),
                        scenario: label.to_string(),
                        capacity: time_count,
                    });
                }
                next_open[scenario]
            }
        };

        if filled[scenario][time] {
            return Err(ReadError::DuplicateCell {
                path: path.to_path_buf(),
                line,
                scenario: label.to_string(),
                year: spec.years.years()[time],
            });
        }

        fill_row(path, record, line, spec.value_offset, &mut row)?;
        for (slot, value) in row.iter().enumerate() {
            values[[scenario, time, slot]] = *value;
        }
        filled[scenario][time] = true;
    }

    let mut gaps = Vec::new();
    for (s, id) in spec.scenarios.iter().enumerate() {
        for (t, &year) in spec.years.years().iter().enumerate() {
            if !filled[s][t] {
                gaps.push(Gap {
                    scenario: id.clone(),
                    year,
                });
            }
        }
    }

    Ok(SeriesTable {
        values,
        header,
        gaps,
    })
}

/// Region columns are matched positionally across files, so headers that
/// disagree mean the files come from different upstream exports.
pub fn check_region_headers(expected: &[String], found: &[String]) -> Result<()> {
    if expected != found {
        return Err(ReadError::HeaderMismatch {
            expected: expected.to_vec(),
            found: found.to_vec(),
        });
    }
    Ok(())
}
