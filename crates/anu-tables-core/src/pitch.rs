//! Pitch to timer-period and pitch to phase-increment tables.
//!
//! The DCO is a square-wave timer: its table stores the timer period for each
//! fractional note. The drum voice plays samples through a phase accumulator:
//! its table stores the per-sample increment directly.

use crate::error::{TableError, TableResult, check_count, check_positive, check_range};
use crate::increment::FixedPoint;
use crate::table::{Element, Rounding};

/// Equal-tempered tuning anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Frequency of the reference note in Hz.
    pub reference_hz: f64,
    /// Note number of the reference note.
    pub reference_note: f64,
    /// Note steps per octave (12 for semitones, 24 for quarter tones).
    pub steps_per_octave: f64,
}

impl Tuning {
    /// A4 = 440 Hz at MIDI note 69, semitone steps.
    pub const A440: Self = Self {
        reference_hz: 440.0,
        reference_note: 69.0,
        steps_per_octave: 12.0,
    };

    /// Frequency of `note` in Hz.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anu_tables_core::Tuning;
    ///
    /// assert_eq!(Tuning::A440.frequency(69.0), 440.0);
    /// assert!((Tuning::A440.frequency(57.0) - 220.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn frequency(&self, note: f64) -> f64 {
        libm::exp2((note - self.reference_note) / self.steps_per_octave) * self.reference_hz
    }

    fn check(&self) -> TableResult<()> {
        check_positive("reference frequency", self.reference_hz)?;
        check_positive("steps per octave", self.steps_per_octave)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::A440
    }
}

/// Evenly stepped run of fractional note numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteRange {
    /// First note.
    pub start: f64,
    /// Distance between consecutive entries, in notes.
    pub step: f64,
    /// Number of entries.
    pub entries: usize,
}

impl NoteRange {
    /// Note number of entry `index`.
    #[inline]
    pub fn note(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }

    /// Last note covered by the range.
    pub fn end(&self) -> f64 {
        self.note(self.entries.saturating_sub(1))
    }

    fn check(&self) -> TableResult<()> {
        check_count(self.entries)?;
        check_positive("note step", self.step)?;
        check_range(self.start, self.end())
    }
}

/// Timer periods `timer_clock / (prescaler * hz)`, rounded to nearest.
///
/// Periods strictly decrease as the note rises. A period that does not fit
/// `T` is an error rather than a clamp, since saturated entries would tie.
pub fn timer_period_table<T: Element>(
    notes: NoteRange,
    tuning: Tuning,
    timer_clock: f64,
    prescaler: f64,
) -> TableResult<Vec<T>> {
    notes.check()?;
    tuning.check()?;
    check_positive("timer clock", timer_clock)?;
    check_positive("prescaler", prescaler)?;

    (0..notes.entries)
        .map(|index| {
            let hz = tuning.frequency(notes.note(index));
            let period = Rounding::Nearest.apply(timer_clock / (prescaler * hz));
            if (T::MIN..=T::MAX).contains(&period) {
                Ok(T::saturate(period))
            } else {
                Err(TableError::PeriodOverflow { index, period })
            }
        })
        .collect()
}

/// Phase increments `scale * hz / sample_rate`, truncated towards zero.
pub fn phase_increment_table<T: Element>(
    notes: NoteRange,
    tuning: Tuning,
    scale: FixedPoint,
    sample_rate: f64,
) -> TableResult<Vec<T>> {
    notes.check()?;
    tuning.check()?;
    check_positive("sample rate", sample_rate)?;

    Ok((0..notes.entries)
        .map(|i| {
            let hz = tuning.frequency(notes.note(i));
            T::quantize(scale.one() * hz / sample_rate, Rounding::Truncate)
        })
        .collect())
}
