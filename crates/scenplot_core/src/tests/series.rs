//! Tests for the long-format series reader: grouping, placement, gap
//! reporting, and its failure modes.

use ndarray::arr3;
use tempfile::TempDir;

use super::fixture;
use crate::config::TimeAxis;
use crate::error::ReadError;
use crate::reader::{SeriesSpec, read_series};

fn spec(scenarios: &[&str], years: Vec<i32>, slots: usize) -> SeriesSpec {
    SeriesSpec::new(
        scenarios.iter().map(|s| s.to_string()).collect(),
        TimeAxis::new(years),
        slots,
    )
}

#[test]
fn rows_without_years_fill_in_file_order() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "series.csv", "h,scn,Africa\nh,ssp126,5.0\nh,ssp126,6.0\n");

    let table = read_series(&path, &spec(&["ssp126"], vec![2015, 2016], 1)).unwrap();
    assert_eq!(table.values, arr3(&[[[5.0], [6.0]]]));
    assert_eq!(table.header, vec!["Africa".to_string()]);
    assert!(table.gaps.is_empty());
}

#[test]
fn scenarios_group_across_interleaved_rows() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "series.csv",
        "h,scn,Africa,Europe\n\
         h,ssp126,1.0,2.0\n\
         h,ssp585,10.0,20.0\n\
         h,ssp126,3.0,4.0\n\
         h,ssp585,30.0,40.0\n",
    );

    let table = read_series(&path, &spec(&["ssp126", "ssp585"], vec![2015, 2016], 2)).unwrap();
    assert_eq!(
        table.values,
        arr3(&[
            [[1.0, 2.0], [3.0, 4.0]],
            [[10.0, 20.0], [30.0, 40.0]],
        ])
    );
    assert!(table.gaps.is_empty());
}

#[test]
fn unmatched_labels_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "series.csv",
        "h,scn,Africa\nh,ssp119,9.0\nh,ssp126,5.0\nh,ssp126x,7.0\n",
    );

    let table = read_series(&path, &spec(&["ssp126"], vec![2015], 1)).unwrap();
    // `ssp126x` must not match `ssp126`; matching is exact, not prefix.
    assert_eq!(table.values, arr3(&[[[5.0]]]));
}

#[test]
fn reading_twice_yields_identical_tables() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "series.csv", "h,scn,Africa\nh,ssp126,5.0\nh,ssp126,6.0\n");
    let spec = spec(&["ssp126"], vec![2015, 2016], 1);

    let first = read_series(&path, &spec).unwrap();
    let second = read_series(&path, &spec).unwrap();
    assert_eq!(first, second);
}

#[test]
fn scenario_with_no_rows_is_all_zero_and_reported() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "series.csv", "h,scn,Africa\nh,ssp126,5.0\nh,ssp126,6.0\n");

    let table = read_series(&path, &spec(&["ssp126", "ssp585"], vec![2015, 2016], 1)).unwrap();
    assert_eq!(table.values, arr3(&[[[5.0], [6.0]], [[0.0], [0.0]]]));

    let missing: Vec<(&str, i32)> = table
        .gaps
        .iter()
        .map(|g| (g.scenario.as_str(), g.year))
        .collect();
    assert_eq!(missing, vec![("ssp585", 2015), ("ssp585", 2016)]);
}

#[test]
fn partial_coverage_leaves_reported_gaps() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "series.csv", "h,scn,Africa\nh,ssp126,5.0\n");

    let table = read_series(&path, &spec(&["ssp126"], vec![2015, 2016, 2017], 1)).unwrap();
    assert_eq!(table.values, arr3(&[[[5.0], [0.0], [0.0]]]));
    assert_eq!(table.gaps.len(), 2);
    assert_eq!(table.gaps[0].year, 2016);
    assert_eq!(table.gaps[1].year, 2017);
}

#[test]
fn more_rows_than_time_steps_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "series.csv",
        "h,scn,Africa\nh,ssp126,5.0\nh,ssp126,6.0\nh,ssp126,7.0\n",
    );

    match read_series(&path, &spec(&["ssp126"], vec![2015, 2016], 1)) {
        Err(ReadError::ScenarioOverflow {
            scenario, capacity, ..
        }) => {
            assert_eq!(scenario, "ssp126");
            assert_eq!(capacity, 2);
        }
        other => panic!("expected ScenarioOverflow, got {other:?}"),
    }
}

#[test]
fn year_fields_key_rows_regardless_of_file_order() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "series.csv",
        "yr,scn,Africa\n2016,ssp126,6.0\n2015,ssp126,5.0\n",
    );

    let table = read_series(&path, &spec(&["ssp126"], vec![2015, 2016], 1)).unwrap();
    assert_eq!(table.values, arr3(&[[[5.0], [6.0]]]));
}

#[test]
fn year_outside_the_axis_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "series.csv", "yr,scn,Africa\n1999,ssp126,5.0\n");

    match read_series(&path, &spec(&["ssp126"], vec![2015, 2016], 1)) {
        Err(ReadError::UnknownYear { line, year, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(year, 1999);
        }
        other => panic!("expected UnknownYear, got {other:?}"),
    }
}

#[test]
fn duplicate_scenario_year_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "series.csv",
        "yr,scn,Africa\n2015,ssp126,5.0\n2015,ssp126,5.5\n",
    );

    match read_series(&path, &spec(&["ssp126"], vec![2015, 2016], 1)) {
        Err(ReadError::DuplicateCell {
            line,
            scenario,
            year,
            ..
        }) => {
            assert_eq!(line, 3);
            assert_eq!(scenario, "ssp126");
            assert_eq!(year, 2015);
        }
        other => panic!("expected DuplicateCell, got {other:?}"),
    }
}

#[test]
fn non_numeric_value_field_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "series.csv", "h,scn,Africa\nh,ssp126,bad\n");

    assert!(matches!(
        read_series(&path, &spec(&["ssp126"], vec![2015], 1)),
        Err(ReadError::BadNumber { line: 2, .. })
    ));
}

#[test]
fn wrong_value_count_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "series.csv", "h,scn,Africa,Europe\nh,ssp126,5.0\n");

    assert!(matches!(
        read_series(&path, &spec(&["ssp126"], vec![2015], 2)),
        Err(ReadError::FieldCount {
            expected: 2,
            found: 1,
            ..
        })
    ));
}

#[test]
fn empty_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "series.csv", "");

    assert!(matches!(
        read_series(&path, &spec(&["ssp126"], vec![2015], 1)),
        Err(ReadError::TooFewLines { found: 0, .. })
    ));
}
