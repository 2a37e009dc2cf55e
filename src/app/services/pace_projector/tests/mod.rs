//! Test utilities for pace projection testing


/// Tolerance used when comparing projected seconds
pub const EPSILON: f64 = 1e-9;

/// Assert two floats agree within a relative tolerance
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance * scale,
        "expected {} to be within {} of {}",
        actual,
        tolerance * scale,
        expected
    );
}
