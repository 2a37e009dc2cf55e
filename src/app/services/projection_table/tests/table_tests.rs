//! Tests for projection table construction and access

use super::*;
use crate::app::models::Unit;
use crate::app::services::pace_projector::{project_pace_series, project_time};
use crate::app::services::projection_table::ProjectionTable;
use crate::error::PaceError;
use chrono::NaiveTime;

#[test]
fn test_table_shape_matches_selection() {
    let table = ProjectionTable::build(
        &Distance::DEFAULT_SELECTION,
        &mile_and_ten_k(),
        Unit::Miles,
    )
    .unwrap();

    assert_eq!(table.rows().len(), 5);
    assert_eq!(table.observation_count(), 2);
    assert_eq!(table.distances(), Distance::DEFAULT_SELECTION.to_vec());
    for row in table.rows() {
        assert_eq!(row.cells.len(), 2);
    }
}

#[test]
fn test_columns_match_pace_series() {
    let targets = [Distance::Marathon, Distance::FiveK, Distance::Mile];
    let observations = mile_and_ten_k();
    let table = ProjectionTable::build(&targets, &observations, Unit::Kilometers).unwrap();

    let meters: Vec<f64> = targets.iter().map(|d| d.meters()).collect();
    for (column_index, o) in observations.iter().enumerate() {
        let series =
            project_pace_series(o.distance.meters(), o.time_seconds, &meters, Unit::Kilometers);
        for (row, pace) in table.rows().iter().zip(series) {
            assert_eq!(row.cells[column_index].pace_seconds, pace);
        }
    }
}

#[test]
fn test_cell_lookup_by_identity() {
    let table = ProjectionTable::build(
        &[Distance::Marathon],
        &mile_and_ten_k(),
        Unit::Miles,
    )
    .unwrap();

    let cell = table.cell(Distance::Marathon, ObservationId(2)).unwrap();
    assert_eq!(cell.time_seconds, project_time(10000.0, 2700.0, 42195.0));

    assert!(table.cell(Distance::FiveK, ObservationId(1)).is_none());
    assert!(table.cell(Distance::Marathon, ObservationId(9)).is_none());
}

#[test]
fn test_empty_targets_rejected() {
    let err = ProjectionTable::build(&[], &mile_and_ten_k(), Unit::Miles).unwrap_err();
    assert!(matches!(err, PaceError::Configuration { .. }));
}

#[test]
fn test_duplicate_observation_id_rejected() {
    let observations = vec![
        race(1, Distance::Mile, 360.0),
        race(1, Distance::FiveK, 1200.0),
    ];
    assert!(ProjectionTable::build(&[Distance::TenK], &observations, Unit::Miles).is_err());
}

#[test]
fn test_no_observations_gives_rows_without_columns() {
    let table = ProjectionTable::build(&[Distance::TenK, Distance::FiveK], &[], Unit::Miles)
        .unwrap();
    assert_eq!(table.rows().len(), 2);
    assert_eq!(table.observation_count(), 0);
    assert!(table.chart_records().is_empty());
}

#[test]
fn test_labels_disambiguate_shared_distances() {
    let observations = vec![
        race(1, Distance::FiveK, 1200.0),
        race(2, Distance::Mile, 360.0),
        race(3, Distance::FiveK, 1260.0),
    ];
    let table = ProjectionTable::build(&[Distance::TenK], &observations, Unit::Miles).unwrap();

    let labels: Vec<&str> = table.columns().iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["5k (#1)", "Mile", "5k (#3)"]);
}

#[test]
fn test_chart_records_order_and_formatting() {
    let table = ProjectionTable::build(
        &[Distance::FiveK, Distance::TenK],
        &[race(1, Distance::FiveK, 1200.0), race(2, Distance::Mile, 360.0)],
        Unit::Kilometers,
    )
    .unwrap();

    let records = table.chart_records();
    assert_eq!(records.len(), 4);

    let order: Vec<(Distance, &str)> = records
        .iter()
        .map(|r| (r.distance, r.race.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            (Distance::FiveK, "5k"),
            (Distance::FiveK, "Mile"),
            (Distance::TenK, "5k"),
            (Distance::TenK, "Mile"),
        ]
    );

    // 20:00 over 5k is 4:00 per kilometer
    assert_eq!(records[0].pace, "04:00");
    assert_eq!(records[0].pace_seconds, 240.0);
    assert_eq!(records[0].chart_time, NaiveTime::from_hms_opt(0, 4, 0));
}

#[test]
fn test_chart_time_is_empty_beyond_a_day() {
    // 18500:00 over a half marathon stays under a day per mile, the marathon does not
    let table = ProjectionTable::build(
        &[Distance::HalfMarathon, Distance::Marathon],
        &[race(1, Distance::HalfMarathon, 1_110_000.0)],
        Unit::Miles,
    )
    .unwrap();

    let records = table.chart_records();
    assert_eq!(records.len(), 2);
    assert!(records[0].chart_time.is_some());
    assert!(records[1].pace_seconds >= 86_400.0);
    assert_eq!(records[1].chart_time, None);
}
