//! Tests for best/worst selection and spread classification

use super::*;
use crate::app::models::Category;
use crate::app::services::consistency_analyzer::{ConsistencyAnalyzer, analyze};
use crate::app::services::pace_projector::project_time;
use crate::error::PaceError;

#[test]
fn test_mile_and_ten_k_at_marathon() {
    let table = table_of(
        &Distance::DEFAULT_SELECTION,
        &[race(1, Distance::Mile, 360.0), race(2, Distance::TenK, 2700.0)],
    );

    let summary = ConsistencyAnalyzer::default().analyze(&table).unwrap();

    let mile_fm = project_time(1609.0, 360.0, 42195.0);
    let ten_k_fm = project_time(10000.0, 2700.0, 42195.0);
    assert!(mile_fm < ten_k_fm);

    assert_eq!(summary.reference, Distance::Marathon);
    assert_eq!(summary.best.id, ObservationId(1));
    assert_eq!(summary.best.label, "Mile");
    assert_eq!(summary.worst.id, ObservationId(2));
    assert_eq!(summary.worst.label, "10k");
    assert_eq!(summary.best.time_seconds, mile_fm);
    assert_eq!(summary.worst.time_seconds, ten_k_fm);
    assert!((summary.difference - (ten_k_fm - mile_fm) / mile_fm).abs() < 1e-12);
    assert!(summary.difference >= 0.05);
    assert_eq!(summary.category, Category::Large);
}

#[test]
fn test_order_of_columns_does_not_change_outcome() {
    let table = table_of(
        &[Distance::Marathon],
        &[race(1, Distance::TenK, 2700.0), race(2, Distance::Mile, 360.0)],
    );

    let summary = analyze(&table, Distance::Marathon).unwrap();
    assert_eq!(summary.best.label, "Mile");
    assert_eq!(summary.worst.label, "10k");
}

#[test]
fn test_medium_and_normal_categories() {
    // A 20:00 5k projects to about 2501.9s over 10k
    let medium = table_of(
        &[Distance::TenK],
        &[race(1, Distance::FiveK, 1200.0), race(2, Distance::TenK, 2577.0)],
    );
    let summary = analyze(&medium, Distance::TenK).unwrap();
    assert_eq!(summary.category, Category::Medium);
    assert_eq!(summary.best.label, "5k");

    let normal = table_of(
        &[Distance::TenK],
        &[race(1, Distance::FiveK, 1200.0), race(2, Distance::TenK, 2520.0)],
    );
    assert_eq!(
        analyze(&normal, Distance::TenK).unwrap().category,
        Category::Normal
    );
}

#[test]
fn test_worst_excludes_best_on_ties() {
    let table = table_of(
        &[Distance::FiveK],
        &[
            race(1, Distance::FiveK, 1200.0),
            race(2, Distance::FiveK, 1200.0),
            race(3, Distance::FiveK, 1200.0),
        ],
    );

    let summary = analyze(&table, Distance::FiveK).unwrap();
    assert_eq!(summary.best.id, ObservationId(1));
    assert_eq!(summary.worst.id, ObservationId(2));
    assert_eq!(summary.difference, 0.0);
    assert_eq!(summary.category, Category::Normal);
}

#[test]
fn test_worst_is_slowest_of_many() {
    let table = table_of(
        &[Distance::TenK],
        &[
            race(1, Distance::FiveK, 1250.0),
            race(2, Distance::FiveK, 1200.0),
            race(3, Distance::FiveK, 1320.0),
            race(4, Distance::FiveK, 1280.0),
        ],
    );

    let summary = analyze(&table, Distance::TenK).unwrap();
    assert_eq!(summary.best.id, ObservationId(2));
    assert_eq!(summary.worst.id, ObservationId(3));
    assert!((summary.difference - 0.1).abs() < 1e-12);
    assert!(summary.time_gap() > 0.0);
}

#[test]
fn test_single_race_is_not_compared() {
    let table = table_of(&[Distance::TenK], &[race(1, Distance::FiveK, 1200.0)]);

    let err = analyze(&table, Distance::TenK).unwrap_err();
    assert!(matches!(err, PaceError::InsufficientObservations { found: 1 }));

    let empty = table_of(&[Distance::TenK], &[]);
    assert!(matches!(
        ConsistencyAnalyzer::default().analyze(&empty),
        Err(PaceError::InsufficientObservations { found: 0 })
    ));
}

#[test]
fn test_explicit_reference_distance() {
    let targets = [Distance::Mile, Distance::FiveK, Distance::Marathon];
    let races = [race(1, Distance::Mile, 360.0), race(2, Distance::TenK, 2700.0)];
    let table = table_of(&targets, &races);

    let at_mile = ConsistencyAnalyzer::new(Some(Distance::Mile))
        .analyze(&table)
        .unwrap();
    assert_eq!(at_mile.reference, Distance::Mile);
    assert_eq!(at_mile.best.time_seconds, 360.0);

    // The ratio between races is the same at every distance
    let at_marathon = ConsistencyAnalyzer::default().analyze(&table).unwrap();
    assert!((at_mile.difference - at_marathon.difference).abs() < 1e-9);
    assert_eq!(at_mile.category, at_marathon.category);
}

#[test]
fn test_reference_must_be_selected() {
    let table = table_of(
        &[Distance::FiveK, Distance::TenK],
        &[race(1, Distance::Mile, 360.0), race(2, Distance::TenK, 2700.0)],
    );

    let err = ConsistencyAnalyzer::new(Some(Distance::Marathon))
        .analyze(&table)
        .unwrap_err();
    assert!(matches!(err, PaceError::ReferenceNotSelected { .. }));
    assert!(analyze(&table, Distance::HalfMarathon).is_err());
}

#[test]
fn test_default_reference_is_last_selected_not_longest() {
    let table = table_of(
        &[Distance::Marathon, Distance::FiveK],
        &[race(1, Distance::Mile, 360.0), race(2, Distance::TenK, 2700.0)],
    );

    let summary = ConsistencyAnalyzer::default().analyze(&table).unwrap();
    assert_eq!(summary.reference, Distance::FiveK);
}
