//! Quantization of sampled curves into integer tables.
//!
//! [`CurveShaper`] normalizes a curve by its own observed extremes, maps it
//! affinely onto an output range, rounds, and clamps into the element type.
//! Clamping is the overflow policy: an output range wider than the element
//! type is accepted and silently saturated.

use crate::error::{TableError, TableResult, check_range};
use crate::table::{Element, Rounding};

/// Maps sampled curves onto an integer output range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveShaper {
    min: f64,
    max: f64,
}

impl CurveShaper {
    /// Create a shaper for the output range `[min, max]`.
    pub fn new(min: f64, max: f64) -> TableResult<Self> {
        check_range(min, max)?;
        Ok(Self { min, max })
    }

    /// Shaper covering the full range of `T`.
    pub fn full_range<T: Element>() -> Self {
        Self {
            min: T::MIN,
            max: T::MAX,
        }
    }

    /// Lower output bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper output bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Quantize `curve` into `T`.
    ///
    /// The curve's smallest sample maps to `min` and its largest to `max`.
    /// A flat curve has no width to normalize by and yields `min` everywhere.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anu_tables_core::CurveShaper;
    ///
    /// let shaper = CurveShaper::new(0.0, 255.0).unwrap();
    /// let table: Vec<u8> = shaper.quantize(&[-1.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(table, vec![0, 128, 255]);
    /// ```
    pub fn quantize<T: Element>(&self, curve: &[f64]) -> TableResult<Vec<T>> {
        check_finite(curve)?;
        let (lo, hi) = curve
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        // Halved so that curves spanning most of the f64 range stay finite
        let half_width = hi * 0.5 - lo * 0.5;
        if half_width <= 0.0 {
            return Ok(vec![T::quantize(self.min, Rounding::Nearest); curve.len()]);
        }

        let table: Vec<T> = curve
            .iter()
            .map(|&x| {
                let t = ((x * 0.5 - lo * 0.5) / half_width).clamp(0.0, 1.0);
                T::quantize(self.rescale(t), Rounding::Nearest)
            })
            .collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            min = self.min,
            max = self.max,
            clamped = self.min < T::MIN || self.max > T::MAX,
            "curve quantized"
        );

        Ok(table)
    }

    /// Map `t` in `[0, 1]` onto `[min, max]`.
    fn rescale(&self, t: f64) -> f64 {
        let span = self.max - self.min;
        let value = if span.is_finite() {
            t * span + self.min
        } else {
            self.min - t * self.min + t * self.max
        };
        value.clamp(self.min, self.max)
    }
}

/// Convert a curve whose values are already in output units, without rescaling.
pub fn pass_through<T: Element>(curve: &[f64], rounding: Rounding) -> TableResult<Vec<T>> {
    check_finite(curve)?;
    Ok(curve.iter().map(|&x| T::quantize(x, rounding)).collect())
}

/// Replace the last sample with its predecessor.
///
/// Curves evaluated over a closed domain can land exactly on a boundary the
/// firmware never reaches (e.g. a ramp at 1.0); the final entry then follows
/// the curve's asymptote instead of the boundary value.
pub fn smooth_last(curve: &mut [f64]) {
    if let [.., previous, last] = curve {
        *last = *previous;
    }
}

/// Reinterpret unsigned samples centred on 128 as two's-complement values.
///
/// Each byte keeps its bit pattern after adding 128 modulo 256, so `1..=254`
/// becomes `-127..=126`.
pub fn to_signed_offset(values: &[u8]) -> Vec<i8> {
    values.iter().map(|&v| v.wrapping_add(128) as i8).collect()
}

fn check_finite(curve: &[f64]) -> TableResult<()> {
    if curve.is_empty() {
        return Err(TableError::EmptyCurve);
    }
    match curve.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(TableError::NonFinite { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_extremes_onto_range() {
        let shaper = CurveShaper::new(10.0, 20.0).unwrap();
        let table: Vec<u8> = shaper.quantize(&[5.0, 7.5, 10.0]).unwrap();
        assert_eq!(table, vec![10, 15, 20]);
    }

    #[test]
    fn flat_curve_yields_min() {
        let shaper = CurveShaper::new(3.0, 200.0).unwrap();
        let table: Vec<u8> = shaper.quantize(&[0.42; 8]).unwrap();
        assert_eq!(table, vec![3; 8]);
    }

    #[test]
    fn oversized_range_is_clamped() {
        let shaper = CurveShaper::new(-100.0, 400.0).unwrap();
        let table: Vec<u8> = shaper.quantize(&[0.0, 0.5, 1.0]).unwrap();
        assert_eq!(table, vec![0, 150, 255]);
    }

    #[test]
    fn non_monotonic_curves_stay_in_range() {
        let shaper = CurveShaper::new(1.0, 254.0).unwrap();
        let curve: Vec<f64> = (0..64).map(|i| libm::sin(f64::from(i) * 0.7)).collect();
        let table: Vec<u8> = shaper.quantize(&curve).unwrap();
        assert!(table.iter().all(|&v| (1..=254).contains(&v)));
        assert!(table.contains(&1));
        assert!(table.contains(&254));
    }

    #[test]
    fn curves_spanning_the_f64_range_stay_in_range() {
        let shaper = CurveShaper::new(10.0, 20.0).unwrap();
        let table: Vec<u8> = shaper.quantize(&[-1e308, 0.0, 1e308]).unwrap();
        assert_eq!(table, vec![10, 15, 20]);

        let table: Vec<u16> = shaper.quantize(&[f64::MAX, f64::MIN]).unwrap();
        assert_eq!(table, vec![20, 10]);
    }

    #[test]
    fn output_range_spanning_the_f64_range_is_clamped() {
        let shaper = CurveShaper::new(-f64::MAX, f64::MAX).unwrap();
        let table: Vec<i8> = shaper.quantize(&[0.0, 0.5, 1.0]).unwrap();
        assert_eq!(table, vec![-128, 0, 127]);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(CurveShaper::new(5.0, 5.0).is_err());
        let shaper = CurveShaper::full_range::<u16>();
        assert_eq!(shaper.quantize::<u16>(&[]), Err(TableError::EmptyCurve));
        assert_eq!(
            shaper.quantize::<u16>(&[0.0, f64::NAN]),
            Err(TableError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn smoothing_copies_previous_sample() {
        let mut curve = vec![0.0, 0.5, 1.0];
        smooth_last(&mut curve);
        assert_eq!(curve, vec![0.0, 0.5, 0.5]);

        let mut single = vec![1.0];
        smooth_last(&mut single);
        assert_eq!(single, vec![1.0]);
    }

    #[test]
    fn pass_through_keeps_units() {
        let table: Vec<i8> = pass_through(&[-12.4, 0.5, 1.5, 200.0], Rounding::Nearest).unwrap();
        assert_eq!(table, vec![-12, 0, 2, 127]);
    }

    #[test]
    fn signed_offset_matches_wrapping_add() {
        assert_eq!(to_signed_offset(&[1, 128, 254, 0, 255]), vec![-127, 0, 126, -128, 127]);
    }

    #[test]
    fn full_range_bounds() {
        let shaper = CurveShaper::full_range::<i8>();
        assert_eq!(shaper.min(), -128.0);
        assert_eq!(shaper.max(), 127.0);
    }
}
