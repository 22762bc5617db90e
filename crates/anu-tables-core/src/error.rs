//! Error types for table generation.

use thiserror::Error;

/// Broad classification of a generation failure.
///
/// Every failure aborts the compilation run; the class tells the caller
/// whether the problem lies in numeric parameters or in symbolic input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fault {
    /// Malformed numeric parameters (unordered range, too few samples, bad exponent).
    Configuration,
    /// Malformed symbolic input (pattern or template with the wrong step count).
    Format,
}

impl Fault {
    /// Returns a human-readable name for the fault class.
    pub const fn name(&self) -> &'static str {
        match self {
            Fault::Configuration => "configuration fault",
            Fault::Format => "format fault",
        }
    }
}

/// Errors raised by the table generators.
///
/// Quantization overflow is deliberately absent: values that do not fit the
/// output type are clamped, never reported.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TableError {
    /// Domain or output range is not finite or not strictly ordered.
    #[error("invalid range [{min}, {max}]: bounds must be finite with min < max")]
    InvalidRange {
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },

    /// Not enough samples to describe a curve.
    #[error("need at least {required} samples, got {found}")]
    TooFewSamples {
        /// Minimum number of samples.
        required: usize,
        /// Number of samples requested or available.
        found: usize,
    },

    /// Warp exponent is zero, negative or not finite.
    #[error("exponent {0} must be finite and positive")]
    InvalidExponent(f64),

    /// A physical quantity (rate, clock, time) is zero, negative or not finite.
    #[error("{quantity} must be finite and positive, got {value}")]
    NonPositive {
        /// Name of the quantity.
        quantity: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Step pattern does not describe exactly 16 steps.
    #[error("pattern '{pattern}' has {found} steps, expected 16")]
    StepCount {
        /// Pattern text as given.
        pattern: String,
        /// Number of step symbols found.
        found: usize,
    },

    /// Groove template does not have exactly 16 offsets.
    #[error("groove template has {found} steps, expected 16")]
    GrooveLength {
        /// Number of offsets found.
        found: usize,
    },

    /// Residual correction pushed the reference step out of the signed 8-bit range.
    #[error("groove residual moves the reference step to {value}, outside [-127, 127]")]
    GrooveOverflow {
        /// Corrected value of the reference step.
        value: i32,
    },

    /// Timer period does not fit the table's element type.
    #[error("timer period {period} at entry {index} does not fit the table type")]
    PeriodOverflow {
        /// Entry whose period overflowed.
        index: usize,
        /// Rounded period.
        period: f64,
    },

    /// Curve has no samples at all.
    #[error("curve has no samples")]
    EmptyCurve,

    /// Curve contains NaN or infinity.
    #[error("curve sample {index} is not finite")]
    NonFinite {
        /// Index of the first non-finite sample.
        index: usize,
    },
}

impl TableError {
    /// Classify the error.
    pub fn fault(&self) -> Fault {
        match self {
            TableError::StepCount { .. } | TableError::GrooveLength { .. } => Fault::Format,
            _ => Fault::Configuration,
        }
    }
}

/// Result type for table generation.
pub type TableResult<T> = Result<T, TableError>;

/// Check that `[min, max]` is finite and strictly ordered.
pub(crate) fn check_range(min: f64, max: f64) -> TableResult<()> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(TableError::InvalidRange { min, max })
    }
}

/// Check that at least two samples are requested.
pub(crate) fn check_count(found: usize) -> TableResult<()> {
    if found >= 2 {
        Ok(())
    } else {
        Err(TableError::TooFewSamples { required: 2, found })
    }
}

/// Check that a physical quantity is finite and strictly positive.
pub(crate) fn check_positive(quantity: &'static str, value: f64) -> TableResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TableError::NonPositive { quantity, value })
    }
}
