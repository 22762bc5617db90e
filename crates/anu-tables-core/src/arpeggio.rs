//! Arpeggiator step-pattern encoding.
//!
//! Patterns are written as 16 step symbols, `o` for an active step and `-`
//! for a rest. Anything else (spaces, bar separators) is layout and ignored:
//!
//! ```text
//! o-o- oooo o-o- oooo
//! ```

use crate::error::{TableError, TableResult};

/// Steps in an arpeggiator pattern.
pub const PATTERN_STEPS: usize = 16;

/// Symbol for an active step.
pub const STEP_ON: char = 'o';

/// Symbol for a rest.
pub const STEP_OFF: char = '-';

/// Encode a pattern into a bitmask; the first step is bit 0.
///
/// # Errors
///
/// Returns [`TableError::StepCount`] unless exactly 16 step symbols are found.
///
/// # Example
///
/// ```rust
/// use anu_tables_core::encode_pattern;
///
/// assert_eq!(encode_pattern("o--- ---- ---- ----").unwrap(), 1);
/// assert_eq!(encode_pattern("oooo oooo oooo oooo").unwrap(), 0xFFFF);
/// assert!(encode_pattern("o-o-").is_err());
/// ```
pub fn encode_pattern(pattern: &str) -> TableResult<u16> {
    let mut mask = 0u32;
    let mut steps = 0usize;
    for symbol in pattern.chars() {
        match symbol {
            STEP_ON => {
                if steps < PATTERN_STEPS {
                    mask |= 1 << steps;
                }
                steps += 1;
            }
            STEP_OFF => steps += 1,
            _ => {}
        }
    }

    if steps == PATTERN_STEPS {
        Ok(mask as u16)
    } else {
        Err(TableError::StepCount {
            pattern: pattern.to_string(),
            found: steps,
        })
    }
}

/// Encode several patterns, stopping at the first malformed one.
pub fn encode_patterns<S: AsRef<str>>(patterns: &[S]) -> TableResult<Vec<u16>> {
    patterns.iter().map(|p| encode_pattern(p.as_ref())).collect()
}

/// Render a bitmask back into canonical pattern text (groups of four).
pub fn describe_pattern(mask: u16) -> String {
    let mut text = String::with_capacity(PATTERN_STEPS + 3);
    for step in 0..PATTERN_STEPS {
        if step > 0 && step % 4 == 0 {
            text.push(' ');
        }
        text.push(if mask & (1 << step) != 0 { STEP_ON } else { STEP_OFF });
    }
    text
}
