//! Curve sampling over linear and logarithmic domains.
//!
//! Every generator starts from a set of sample points that cover a domain
//! inclusively at both ends. Logarithmic sampling keeps the *ratio* between
//! neighbours constant, which is how pitch, time and fixed-point rate
//! accumulators behave.

use crate::error::{TableResult, check_count, check_positive, check_range};

/// How sample points are distributed over the domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Spacing {
    /// Constant difference between neighbours.
    #[default]
    Linear,
    /// Constant ratio between neighbours.
    Logarithmic,
}

/// Sample `count` points from `min` to `max` inclusive.
///
/// # Errors
///
/// Fails when the range is not strictly ordered, when `count < 2`, or when a
/// logarithmic domain includes zero or negative values.
///
/// # Example
///
/// ```rust
/// use anu_tables_core::{Spacing, sample};
///
/// let points = sample(Spacing::Logarithmic, 1.0, 100.0, 3).unwrap();
/// assert!((points[1] - 10.0).abs() < 1e-9);
/// assert_eq!(points[2], 100.0);
/// ```
pub fn sample(spacing: Spacing, min: f64, max: f64, count: usize) -> TableResult<Vec<f64>> {
    match spacing {
        Spacing::Linear => linspace(min, max, count),
        Spacing::Logarithmic => logspace(min, max, count),
    }
}

/// Evenly spaced points from `min` to `max` inclusive.
///
/// The last point is exactly `max`.
pub fn linspace(min: f64, max: f64, count: usize) -> TableResult<Vec<f64>> {
    check_range(min, max)?;
    check_count(count)?;
    Ok(linspace_unchecked(min, max, count))
}

/// Points from `min` to `max` inclusive, evenly spaced in log-space.
///
/// The first and last points are exactly `min` and `max`.
pub fn logspace(min: f64, max: f64, count: usize) -> TableResult<Vec<f64>> {
    check_range(min, max)?;
    check_count(count)?;
    check_positive("logarithmic domain bound", min)?;

    let mut points: Vec<f64> = linspace_unchecked(libm::log(min), libm::log(max), count)
        .into_iter()
        .map(libm::exp)
        .collect();
    points[0] = min;
    points[count - 1] = max;
    Ok(points)
}

/// Linear spacing without argument checks; `count` must be at least 2.
pub(crate) fn linspace_unchecked(min: f64, max: f64, count: usize) -> Vec<f64> {
    let step = (max - min) / (count - 1) as f64;
    (0..count)
        .map(|i| {
            if i == count - 1 {
                max
            } else {
                min + i as f64 * step
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;

    #[test]
    fn linear_covers_both_ends() {
        let points = linspace(0.0, 1.0, 5).unwrap();
        assert_eq!(points, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn two_points_are_the_bounds() {
        assert_eq!(linspace(-3.0, 7.0, 2).unwrap(), vec![-3.0, 7.0]);
        assert_eq!(logspace(2.0, 8.0, 2).unwrap(), vec![2.0, 8.0]);
    }

    #[test]
    fn logarithmic_ratio_is_constant() {
        let points = logspace(1.0 / 16.0, 100.0, 64).unwrap();
        let ratio = points[1] / points[0];
        for pair in points.windows(2) {
            assert!(
                ((pair[1] / pair[0]) - ratio).abs() < 1e-9,
                "ratio drift: {} vs {}",
                pair[1] / pair[0],
                ratio
            );
        }
    }

    #[test]
    fn rejects_unordered_range() {
        assert_eq!(
            linspace(1.0, 1.0, 4),
            Err(TableError::InvalidRange { min: 1.0, max: 1.0 })
        );
        assert!(sample(Spacing::Logarithmic, 5.0, 1.0, 4).is_err());
    }

    #[test]
    fn rejects_single_sample() {
        assert!(matches!(
            linspace(0.0, 1.0, 1),
            Err(TableError::TooFewSamples { found: 1, .. })
        ));
    }

    #[test]
    fn logarithmic_rejects_zero() {
        assert!(matches!(
            logspace(0.0, 1.0, 4),
            Err(TableError::NonPositive { .. })
        ));
    }
}
