//! Assertion utilities for testing.
//!
//! This module provides helper functions for making assertions in tests,
//! particularly for floating-point comparisons and summary texts.

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that a result is within expected bounds.
///
/// # Panics
///
/// Panics if `actual` is less than `min` or greater than `max`.
pub fn assert_in_range(actual: f64, min: f64, max: f64) {
    assert!(
        actual >= min && actual <= max,
        "Value not in range: actual = {}, min = {}, max = {}",
        actual,
        min,
        max
    );
}

/// Extract (min, max, avg) from a temperature summary text
pub fn parse_summary(text: &str) -> (f64, f64, f64) {
    let value = |label: &str| -> f64 {
        let rest = text
            .split(label)
            .nth(1)
            .unwrap_or_else(|| panic!("'{}' missing from summary: {}", label, text));
        rest.split_whitespace()
            .next()
            .and_then(|number| number.parse().ok())
            .unwrap_or_else(|| panic!("no number after '{}' in: {}", label, text))
    };

    (
        value("Minimum Observed temp:"),
        value("Maximum Observed temp:"),
        value("Average Observed temp:"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(1.0, 1.0000001, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_assert_in_range() {
        assert_in_range(5.0, 0.0, 10.0);
        assert_in_range(0.0, 0.0, 10.0);
        assert_in_range(10.0, 0.0, 10.0);
    }

    #[test]
    fn test_parse_summary() {
        let text = "The following is a summary of observed temperature date from 2017-01-01 \
                    to 2017-08-23. <br>Minimum Observed temp: 58.0 deg F <br>\
                    Maximum Observed temp: 87.0 deg F <br>Average Observed temp: 74.14 deg F";
        assert_eq!(parse_summary(text), (58.0, 87.0, 74.14));
    }
}
