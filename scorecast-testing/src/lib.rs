//! Assertions shared by the tests across the workspace.

use assert_float_eq::*;

/// Asserts that corresponding elements are within `distance` ULPs of each other.
pub fn assert_slice_f64_near(expected: &[f64], actual: &[f64], distance: u32) {
    assert_same_len(expected, actual);
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_f64_near!(expected, actual, distance);
        }
    }
}

/// Asserts that corresponding elements agree to within a relative `epsilon`.
pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_same_len(expected, actual);
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

/// Asserts that corresponding elements differ by no more than an absolute `epsilon`.
pub fn assert_slice_f64_absolute(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_same_len(expected, actual);
    for (index, &expected) in expected.iter().enumerate() {
        assert_float_absolute_eq!(expected, actual[index], epsilon);
    }
}

/// Asserts that the elements add up to `expected` to within an absolute `epsilon`.
pub fn assert_sum_f64(expected: f64, actual: &[f64], epsilon: f64) {
    let sum: f64 = actual.iter().sum();
    assert!(
        (sum - expected).abs() <= epsilon,
        "expected sum {expected} ± {epsilon}, got {sum} for {actual:?}"
    );
}

fn assert_same_len(expected: &[f64], actual: &[f64]) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
}
