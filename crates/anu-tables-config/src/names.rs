//! Names of the firmware tables.
//!
//! The firmware refers to tables by these identifiers; the registry uses
//! them as keys and a packager emits them as symbol names.

/// Glide increments (u16).
pub const GLIDE_INCREMENTS: &str = "glide_increments";
/// Drum envelope increments (u16).
pub const DRUM_ENV_INCREMENTS: &str = "drm_env_increments";
/// Drum oscillator phase increments (u16).
pub const DRUM_PHASE_INCREMENTS: &str = "drm_phase_increments";
/// DCO timer periods (u16).
pub const DCO_PITCH: &str = "dco_pitch";
/// Exponential envelope shape (u16).
pub const ENV_EXPO: &str = "env_expo";
/// Arpeggiator step masks (u16).
pub const ARPEGGIATOR_PATTERNS: &str = "arpeggiator_patterns";
/// LFO phase increments (u32).
pub const LFO_INCREMENTS: &str = "lfo_increments";
/// Envelope level increments (u32).
pub const ENV_INCREMENTS: &str = "env_increments";
/// Bipolar deadband waveform (u8).
pub const DEADBAND: &str = "deadband";
/// Quantized pitch offsets (i8).
pub const PITCH_DEADBAND: &str = "pitch_deadband";
/// Drum amplitude envelope (u8).
pub const DRUM_ENVELOPE: &str = "drm_envelope";
/// Offset-binary sine (i8).
pub const SINE: &str = "sine";

/// Table name of the groove template called `name`.
///
/// ```rust
/// assert_eq!(anu_tables_config::names::groove("swing"), "groove_swing");
/// ```
pub fn groove(name: &str) -> String {
    format!("groove_{name}")
}

/// Table name of drum-map node `index`.
pub fn drum_map_node(index: usize) -> String {
    format!("drum_map_node_{index}")
}
