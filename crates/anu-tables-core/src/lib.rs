//! Anu Tables Core - lookup table generators for the anu firmware
//!
//! The firmware runs its control loop on an 8-bit microcontroller and never
//! evaluates a transcendental function at runtime. Every curve it needs
//! (rates, pitches, envelope shapes, grooves) is sampled and quantized here,
//! at build time, into fixed-width integer tables.
//!
//! # Generators
//!
//! All generators are pure functions: parameters in, integer vector out.
//!
//! ## Sampling
//!
//! - [`sample`], [`linspace`], [`logspace`] - inclusive point sets over a domain
//!
//! ## Increments
//!
//! - [`exponential_increments`] - log-spaced LFO increments with held codes
//! - [`warped_increments`] - power-law warped envelope/glide increments
//! - [`IncrementRange`] - increment bounds from frequencies or times
//!
//! ## Pitch
//!
//! - [`timer_period_table`] - note to timer period (rounded)
//! - [`phase_increment_table`] - note to phase increment (truncated)
//!
//! ## Shapes
//!
//! - [`CurveShaper`] - normalize, rescale, round and clamp a sampled curve
//! - [`shapes`] - the firmware's envelope and waveform curves
//!
//! ## Symbolic data
//!
//! - [`encode_groove`] - zero-sum signed 8-bit groove offsets
//! - [`encode_pattern`] - 16-step arpeggiator bitmask
//!
//! # Determinism
//!
//! Transcendentals go through `libm` so tables are bit-identical on every
//! host, whatever its platform math library does.
//!
//! # Example
//!
//! ```rust
//! use anu_tables_core::{FixedPoint, IncrementRange, warped_increments};
//!
//! let control_rate = 20_000_000.0 / 510.0 / 8.0 / 2.0;
//! let range = IncrementRange::from_times(
//!     FixedPoint::Q32, 3.0 / control_rate, 12.0, control_rate,
//! ).unwrap();
//! let table: Vec<u32> = warped_increments(range, 0.175, 256).unwrap();
//! assert_eq!(table.len(), 256);
//! assert!(table[0] > table[255]);
//! ```

pub mod arpeggio;
pub mod error;
pub mod groove;
pub mod increment;
pub mod pitch;
pub mod sampler;
pub mod shaper;
pub mod shapes;
pub mod table;

pub use arpeggio::{PATTERN_STEPS, describe_pattern, encode_pattern, encode_patterns};
pub use error::{Fault, TableError, TableResult};
pub use groove::{GROOVE_REFERENCE_STEP, GROOVE_STEPS, encode_groove};
pub use increment::{
    FixedPoint, IncrementRange, exponential_increments, rate_to_increment, time_to_increment,
    warped_increments,
};
pub use pitch::{NoteRange, Tuning, phase_increment_table, timer_period_table};
pub use sampler::{Spacing, linspace, logspace, sample};
pub use shaper::{CurveShaper, pass_through, smooth_last, to_signed_offset};
pub use table::{BitWidth, Element, Rounding, Table};
