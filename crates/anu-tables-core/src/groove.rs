//! Groove template encoding.
//!
//! A groove template is a 16-step timing "feel": one offset per sixteenth
//! note. The firmware adds the encoded offsets to each step's tick duration,
//! so the encoded table must sum to zero or the tempo drifts.

use crate::error::{TableError, TableResult};

/// Steps in a groove template.
pub const GROOVE_STEPS: usize = 16;

/// Step that absorbs the truncation residual (the middle of the bar).
pub const GROOVE_REFERENCE_STEP: usize = 8;

/// Largest encoded offset magnitude.
pub const GROOVE_PEAK: i32 = 127;

/// Encode a 16-step template into signed 8-bit offsets.
///
/// The template is centred on its mean, scaled so its largest magnitude maps
/// to ±127, and truncated. The truncation residual is then subtracted from
/// step 8, making the encoded sum exactly zero. A template with no variation
/// (up to summation round-off) encodes to all zeros.
///
/// # Errors
///
/// - [`TableError::GrooveLength`] if `template` does not have 16 steps.
/// - [`TableError::NonFinite`] if an offset is NaN or infinite.
/// - [`TableError::GrooveOverflow`] if the corrected step leaves ±127.
///
/// # Example
///
/// ```rust
/// use anu_tables_core::encode_groove;
///
/// let swing = [1.0, 1.0, -1.0, -1.0].repeat(4);
/// let encoded = encode_groove(&swing).unwrap();
/// assert_eq!(&encoded[..4], &[127, 127, -127, -127]);
/// assert_eq!(encoded.iter().map(|&v| i32::from(v)).sum::<i32>(), 0);
/// ```
pub fn encode_groove(template: &[f64]) -> TableResult<Vec<i8>> {
    if template.len() != GROOVE_STEPS {
        return Err(TableError::GrooveLength {
            found: template.len(),
        });
    }
    if let Some(index) = template.iter().position(|x| !x.is_finite()) {
        return Err(TableError::NonFinite { index });
    }

    let mean = template.iter().sum::<f64>() / GROOVE_STEPS as f64;
    let centered: Vec<f64> = template.iter().map(|&x| x - mean).collect();
    let peak = centered.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()));
    let magnitude = template.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()));
    // Summation round-off alone must not be scaled up to full range.
    if peak <= magnitude * GROOVE_STEPS as f64 * f64::EPSILON {
        return Ok(vec![0; GROOVE_STEPS]);
    }

    let scale = peak / f64::from(GROOVE_PEAK);
    let mut steps: Vec<i32> = centered.iter().map(|&x| (x / scale).trunc() as i32).collect();
    let residual: i32 = steps.iter().sum();
    steps[GROOVE_REFERENCE_STEP] -= residual;

    let corrected = steps[GROOVE_REFERENCE_STEP];
    if corrected.abs() > GROOVE_PEAK {
        return Err(TableError::GrooveOverflow { value: corrected });
    }

    Ok(steps.into_iter().map(|v| v as i8).collect())
}
