//! Continuous curve shapes used by the firmware tables.
//!
//! These functions only sample; quantization happens in
//! [`CurveShaper`](crate::CurveShaper) or [`pass_through`](crate::pass_through).

use core::f64::consts::PI;

use crate::error::{TableError, TableResult, check_count, check_positive};
use crate::sampler::linspace_unchecked;
use crate::shaper::smooth_last;

/// Exponential attack curve `1 - exp(-rate * x)` over `x` in `[0, 1]`.
///
/// The last point is smoothed onto its predecessor.
pub fn expo_envelope(entries: usize, rate: f64) -> TableResult<Vec<f64>> {
    check_count(entries)?;
    check_positive("envelope rate", rate)?;

    let last = (entries - 1) as f64;
    let mut x: Vec<f64> = (0..entries).map(|k| k as f64 / last).collect();
    smooth_last(&mut x);
    Ok(x.into_iter().map(|x| 1.0 - libm::exp(-rate * x)).collect())
}

/// Bipolar power-law ramp with a flat zone in the middle.
///
/// `ramp_len` points of `x^exponent` on each side of `dead_len` zeros,
/// mirrored and negated below the centre.
pub fn deadband(ramp_len: usize, exponent: f64, dead_len: usize) -> TableResult<Vec<f64>> {
    check_count(ramp_len)?;
    check_positive("deadband exponent", exponent)?;

    let ramp: Vec<f64> = linspace_unchecked(0.0, 1.0, ramp_len)
        .into_iter()
        .map(|x| libm::pow(x, exponent))
        .collect();
    let mut curve = Vec::with_capacity(2 * ramp_len + dead_len);
    curve.extend(ramp.iter().rev().map(|&x| -x));
    curve.extend(std::iter::repeat_n(0.0, dead_len));
    curve.extend_from_slice(&ramp);
    Ok(curve)
}

/// Staircase of pitch ramps: `hold_len` zeros then a ramp from 0 to `span`,
/// repeated at each offset in `offsets` and cut to `entries` points.
///
/// Values stay in semitones; the caller passes them through without
/// rescaling.
pub fn quantized_pitch(
    hold_len: usize,
    ramp_len: usize,
    span: f64,
    offsets: &[f64],
    entries: usize,
) -> TableResult<Vec<f64>> {
    check_count(ramp_len)?;
    check_positive("pitch span", span)?;

    let mut segment = vec![0.0; hold_len];
    segment.extend(linspace_unchecked(0.0, span, ramp_len));

    let curve: Vec<f64> = offsets
        .iter()
        .flat_map(|&offset| segment.iter().map(move |&p| p + offset))
        .take(entries)
        .collect();
    if curve.len() < entries {
        return Err(TableError::TooFewSamples {
            required: entries,
            found: curve.len(),
        });
    }
    Ok(curve)
}

/// Decay curve `exp(-decay * x)` over `x` in `[0, 1]`.
pub fn exponential_decay(entries: usize, decay: f64) -> TableResult<Vec<f64>> {
    check_count(entries)?;
    check_positive("decay constant", decay)?;

    Ok(linspace_unchecked(0.0, 1.0, entries)
        .into_iter()
        .map(|x| libm::exp(-decay * x))
        .collect())
}

/// One period of `127.5 - 127.5 sin(2πk / entries)`.
///
/// The period spans `entries` points, so the last point is one step short of
/// closing the cycle; table readers interpolate into it.
pub fn inverted_sine(entries: usize) -> TableResult<Vec<f64>> {
    check_count(entries)?;

    Ok((0..entries)
        .map(|k| -libm::sin(k as f64 / entries as f64 * 2.0 * PI) * 127.5 + 127.5)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expo_envelope_rises_to_plateau() {
        let curve = expo_envelope(257, 4.0).unwrap();
        assert_eq!(curve.len(), 257);
        assert_eq!(curve[0], 0.0);
        assert_eq!(curve[256], curve[255]);
        assert!(curve.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn deadband_layout() {
        let curve = deadband(124, 3.2, 8).unwrap();
        assert_eq!(curve.len(), 256);
        assert_eq!(curve[0], -1.0);
        assert_eq!(curve[255], 1.0);
        assert!(curve[123..133].iter().all(|&x| x == 0.0));
        assert!(curve.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn quantized_pitch_layout() {
        let curve = quantized_pitch(20, 40, 12.0, &[-12.0, 0.0, 12.0, 24.0, 36.0], 256).unwrap();
        assert_eq!(curve.len(), 256);
        assert!(curve[..20].iter().all(|&x| x == -12.0));
        assert_eq!(curve[59], 0.0);
        assert!(curve[60..80].iter().all(|&x| x == 0.0));
        // 256 = 4 * 60 + 16: the last segment is cut inside its hold zone
        assert_eq!(curve[255], 36.0);
    }

    #[test]
    fn quantized_pitch_too_short() {
        assert_eq!(
            quantized_pitch(2, 4, 12.0, &[0.0], 10),
            Err(TableError::TooFewSamples {
                required: 10,
                found: 6
            })
        );
    }

    #[test]
    fn decay_and_sine_endpoints() {
        let decay = exponential_decay(257, 1.75).unwrap();
        assert_eq!(decay[0], 1.0);
        assert!((decay[256] - libm::exp(-1.75)).abs() < 1e-15);

        let sine = inverted_sine(257).unwrap();
        assert_eq!(sine[0], 127.5);
        assert!(sine[64] < 1.0);
        assert!(sine[193] > 254.0);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(expo_envelope(1, 4.0).is_err());
        assert!(expo_envelope(16, 0.0).is_err());
        assert!(deadband(8, -1.0, 4).is_err());
        assert!(exponential_decay(8, f64::NAN).is_err());
        assert!(inverted_sine(0).is_err());
    }
}
