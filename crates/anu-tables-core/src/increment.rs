//! Phase and level increment tables.
//!
//! The firmware advances LFO phases, envelope levels, glide positions and
//! drum envelopes by adding a per-tick increment to a fixed-point
//! accumulator running at the control rate. These tables map a parameter
//! code (0-255) to that increment.
//!
//! Two curve families are produced:
//!
//! - [`exponential_increments`]: log-spaced increments, indexed by
//!   frequency. Non-decreasing in index.
//! - [`warped_increments`]: increments spaced linearly in `increment^-γ`,
//!   indexed by time. Index 0 is the shortest time, so the table is
//!   non-increasing in index. Larger γ packs more codes into long times.

use crate::error::{TableError, TableResult, check_count, check_positive, check_range};
use crate::sampler::{linspace_unchecked, logspace};
use crate::table::{Element, Rounding};

/// Integer representation of 1.0 for an accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedPoint {
    /// 16-bit accumulator, 1.0 = 2^16.
    Q16,
    /// 32-bit accumulator, 1.0 = 2^32.
    Q32,
}

impl FixedPoint {
    /// The value representing one full accumulator cycle.
    pub const fn one(&self) -> f64 {
        match self {
            FixedPoint::Q16 => 65536.0,
            FixedPoint::Q32 => 65536.0 * 65536.0,
        }
    }
}

/// Increment that completes one accumulator cycle `rate_hz` times per second.
///
/// # Example
///
/// ```rust
/// use anu_tables_core::{FixedPoint, rate_to_increment};
///
/// // One cycle per second at a 1 kHz control rate
/// assert_eq!(rate_to_increment(FixedPoint::Q16, 1.0, 1000.0), 65.536);
/// ```
#[inline]
pub fn rate_to_increment(scale: FixedPoint, rate_hz: f64, control_rate: f64) -> f64 {
    scale.one() * rate_hz / control_rate
}

/// Increment that completes one accumulator cycle in `seconds`.
#[inline]
pub fn time_to_increment(scale: FixedPoint, seconds: f64, control_rate: f64) -> f64 {
    scale.one() / (seconds * control_rate)
}

/// Bounds of an increment table, in raw accumulator units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncrementRange {
    /// Smallest increment (slowest rate, longest time).
    pub min: f64,
    /// Largest increment (fastest rate, shortest time).
    pub max: f64,
}

impl IncrementRange {
    /// Create a range from raw increments.
    pub fn new(min: f64, max: f64) -> TableResult<Self> {
        check_positive("minimum increment", min)?;
        check_range(min, max)?;
        Ok(Self { min, max })
    }

    /// Range covering the frequencies `[min_hz, max_hz]`.
    pub fn from_frequencies(
        scale: FixedPoint,
        min_hz: f64,
        max_hz: f64,
        control_rate: f64,
    ) -> TableResult<Self> {
        check_positive("control rate", control_rate)?;
        check_positive("minimum frequency", min_hz)?;
        check_range(min_hz, max_hz)?;
        Self::new(
            rate_to_increment(scale, min_hz, control_rate),
            rate_to_increment(scale, max_hz, control_rate),
        )
    }

    /// Range covering the times `[shortest_s, longest_s]`.
    ///
    /// The longest time gives the smallest increment.
    pub fn from_times(
        scale: FixedPoint,
        shortest_s: f64,
        longest_s: f64,
        control_rate: f64,
    ) -> TableResult<Self> {
        check_positive("control rate", control_rate)?;
        check_positive("shortest time", shortest_s)?;
        check_range(shortest_s, longest_s)?;
        Self::new(
            time_to_increment(scale, longest_s, control_rate),
            time_to_increment(scale, shortest_s, control_rate),
        )
    }
}

/// Log-spaced increments from `range.min` to `range.max`, rounded to nearest.
///
/// The first `held` codes are forced to zero; the firmware reads them as
/// "hold" (no progression).
///
/// # Example
///
/// ```rust
/// use anu_tables_core::{IncrementRange, exponential_increments};
///
/// let range = IncrementRange::new(10.0, 1000.0).unwrap();
/// let table: Vec<u32> = exponential_increments(range, 5, 1).unwrap();
/// assert_eq!(table, vec![0, 32, 100, 316, 1000]);
/// ```
pub fn exponential_increments<T: Element>(
    range: IncrementRange,
    entries: usize,
    held: usize,
) -> TableResult<Vec<T>> {
    let points = logspace(range.min, range.max, entries)?;
    let mut table: Vec<T> = points
        .iter()
        .map(|&x| T::quantize(x, Rounding::Nearest))
        .collect();
    for value in table.iter_mut().take(held) {
        *value = T::saturate(0.0);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(entries, held, "exponential increments");

    Ok(table)
}

/// Power-law warped increments, truncated towards zero.
///
/// `range.max^-γ .. range.min^-γ` is sampled linearly and each point is
/// raised to `-1/γ`. Index 0 therefore holds `range.max`; the last index
/// holds `range.min`.
///
/// # Errors
///
/// Fails when `gamma` is not finite and positive or `entries < 2`.
pub fn warped_increments<T: Element>(
    range: IncrementRange,
    gamma: f64,
    entries: usize,
) -> TableResult<Vec<T>> {
    if !(gamma.is_finite() && gamma > 0.0) {
        return Err(TableError::InvalidExponent(gamma));
    }
    check_count(entries)?;

    let fast = libm::pow(range.max, -gamma);
    let slow = libm::pow(range.min, -gamma);
    let inverse = -1.0 / gamma;
    let table = linspace_unchecked(fast, slow, entries)
        .into_iter()
        .map(|r| T::quantize(libm::pow(r, inverse), Rounding::Truncate))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(entries, gamma, "warped increments");

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTROL_RATE: f64 = 20_000_000.0 / 510.0 / 8.0 / 2.0;

    #[test]
    fn fixed_point_scales() {
        assert_eq!(FixedPoint::Q16.one(), 65536.0);
        assert_eq!(FixedPoint::Q32.one(), 4294967296.0);
    }

    #[test]
    fn time_and_rate_are_reciprocal() {
        let by_rate = rate_to_increment(FixedPoint::Q32, 4.0, CONTROL_RATE);
        let by_time = time_to_increment(FixedPoint::Q32, 0.25, CONTROL_RATE);
        assert!((by_rate - by_time).abs() < 1e-6);
    }

    #[test]
    fn lfo_table_holds_first_two_codes() {
        let range =
            IncrementRange::from_frequencies(FixedPoint::Q32, 1.0 / 16.0, 100.0, CONTROL_RATE)
                .unwrap();
        let table: Vec<u32> = exponential_increments(range, 256, 2).unwrap();
        assert_eq!(table.len(), 256);
        assert_eq!(table[0], 0);
        assert_eq!(table[1], 0);
        assert!(table[2] > 0);
        let expected = rate_to_increment(FixedPoint::Q32, 100.0, CONTROL_RATE);
        assert!((f64::from(table[255]) - expected).abs() <= 1.0);
        assert!(table.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn warped_table_runs_from_fast_to_slow() {
        let range =
            IncrementRange::from_times(FixedPoint::Q16, 3.0 / CONTROL_RATE, 6.0, CONTROL_RATE)
                .unwrap();
        let table: Vec<u16> = warped_increments(range, 0.1, 256).unwrap();
        assert_eq!(table.len(), 256);
        // 65536 / 3 truncated, allowing one unit of pow() round-off
        assert!((21844..=21845).contains(&table[0]), "got {}", table[0]);
        assert_eq!(table[255], 4);
        assert!(table.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn warped_rejects_bad_gamma() {
        let range = IncrementRange::new(1.0, 100.0).unwrap();
        for gamma in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                warped_increments::<u16>(range, gamma, 16),
                Err(TableError::InvalidExponent(_))
            ));
        }
    }

    #[test]
    fn larger_gamma_spends_more_codes_on_slow_rates() {
        let range = IncrementRange::new(4.0, 20000.0).unwrap();
        let low: Vec<u16> = warped_increments(range, 0.1, 256).unwrap();
        let high: Vec<u16> = warped_increments(range, 0.5, 256).unwrap();
        // midpoint: ~117 for gamma 0.1, ~16 for gamma 0.5
        assert!(low[128] > high[128]);
        assert!(high[128] < 20);
    }

    #[test]
    fn range_rejects_bad_bounds() {
        assert!(IncrementRange::new(0.0, 1.0).is_err());
        assert!(IncrementRange::new(2.0, 1.0).is_err());
        assert!(IncrementRange::from_frequencies(FixedPoint::Q32, 1.0, 2.0, 0.0).is_err());
        assert!(IncrementRange::from_times(FixedPoint::Q16, 2.0, 1.0, 1000.0).is_err());
    }

    #[test]
    fn overflowing_increments_saturate() {
        let range = IncrementRange::new(1000.0, 100_000.0).unwrap();
        let table: Vec<u16> = exponential_increments(range, 4, 0).unwrap();
        assert_eq!(*table.last().unwrap(), u16::MAX);
    }
}
