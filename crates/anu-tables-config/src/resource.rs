//! Resource compiler configuration and TOML file operations.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use anu_tables_core::{FixedPoint, NoteRange, Tuning};

use crate::error::ConfigError;
use crate::names;

/// Every literal the resource compiler needs to build the firmware tables.
///
/// [`ResourceConfig::default`] is the firmware's own parameter set. A TOML
/// file only needs the sections it overrides; missing sections fall back to
/// the firmware values.
///
/// # TOML Format
///
/// ```toml
/// [clock]
/// master_hz = 20000000.0
/// timer_divider = 510.0
/// voice_divider = 16.0
/// drum_divider = 32.0
///
/// [lfo]
/// entries = 256
/// min_hz = 0.0625
/// max_hz = 100.0
/// held = 2
/// accumulator = "q32"
/// clock = "voice"
///
/// [[grooves]]
/// name = "swing"
/// template = [1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0,
///             1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0]
///
/// [[samples]]
/// name = "hh"
/// path = "hh_linn.raw"
/// length = 4097
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceConfig {
    /// Master clock and the dividers deriving the control rates.
    pub clock: ClockConfig,
    /// LFO increments, indexed by frequency.
    pub lfo: RateTableConfig,
    /// Envelope increments, indexed by segment time.
    pub envelope: TimeTableConfig,
    /// Glide increments, indexed by glide time.
    pub glide: TimeTableConfig,
    /// Drum envelope increments, indexed by decay time.
    pub drum_envelope: TimeTableConfig,
    /// Drum oscillator phase increments.
    pub drum_pitch: DrumPitchConfig,
    /// DCO timer periods.
    pub dco: DcoConfig,
    /// Envelope and waveform shapes.
    pub shapes: ShapesConfig,
    /// Groove templates, in declaration order.
    pub grooves: Vec<GrooveConfig>,
    /// Arpeggiator patterns in `o`/`-` notation.
    pub arpeggiator_patterns: Vec<String>,
    /// Raw byte samples copied from disk.
    pub samples: Vec<SampleConfig>,
    /// Literal drum-map node data.
    pub drum_map_nodes: Vec<Vec<u8>>,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        crate::defaults::firmware_defaults()
    }
}

impl ResourceConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Names of every table this configuration produces, in declaration order.
    ///
    /// The order is the 16-bit group, then the 32-bit group, then the 8-bit
    /// waveform group.
    pub fn table_names(&self) -> Vec<String> {
        let mut table_names: Vec<String> = [
            names::GLIDE_INCREMENTS,
            names::DRUM_ENV_INCREMENTS,
            names::DRUM_PHASE_INCREMENTS,
            names::DCO_PITCH,
            names::ENV_EXPO,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        table_names.extend(self.grooves.iter().map(|g| names::groove(&g.name)));
        table_names.extend(
            [
                names::ARPEGGIATOR_PATTERNS,
                names::LFO_INCREMENTS,
                names::ENV_INCREMENTS,
                names::DEADBAND,
                names::PITCH_DEADBAND,
                names::DRUM_ENVELOPE,
                names::SINE,
            ]
            .iter()
            .map(ToString::to_string),
        );
        table_names.extend(self.samples.iter().map(|s| s.name.clone()));
        table_names.extend((0..self.drum_map_nodes.len()).map(names::drum_map_node));
        table_names
    }
}

/// Which control loop advances a table's accumulator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ControlClock {
    /// The voice control loop.
    Voice,
    /// The drum control loop.
    Drum,
}

/// Width of the fixed-point accumulator an increment table feeds.
///
/// Also fixes the element type: Q16 tables are u16, Q32 tables are u32.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Accumulator {
    /// 16-bit accumulator.
    Q16,
    /// 32-bit accumulator.
    Q32,
}

impl From<Accumulator> for FixedPoint {
    fn from(accumulator: Accumulator) -> Self {
        match accumulator {
            Accumulator::Q16 => FixedPoint::Q16,
            Accumulator::Q32 => FixedPoint::Q32,
        }
    }
}

/// Master clock and control-loop dividers.
///
/// The timer interrupt runs at `master_hz / timer_divider`; each control
/// loop runs at a further division of it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClockConfig {
    /// CPU clock in Hz.
    pub master_hz: f64,
    /// Clock cycles per timer interrupt.
    pub timer_divider: f64,
    /// Timer interrupts per voice control tick.
    pub voice_divider: f64,
    /// Timer interrupts per drum control tick.
    pub drum_divider: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            master_hz: 20_000_000.0,
            timer_divider: 510.0,
            voice_divider: 16.0,
            drum_divider: 32.0,
        }
    }
}

impl ClockConfig {
    /// Timer interrupt rate, which is also the drum sample rate.
    pub fn timer_rate(&self) -> f64 {
        self.master_hz / self.timer_divider
    }

    /// Tick rate of the given control loop.
    ///
    /// ```rust
    /// use anu_tables_config::{ClockConfig, ControlClock};
    ///
    /// let clock = ClockConfig::default();
    /// assert!((clock.control_rate(ControlClock::Voice) - 2450.98).abs() < 0.01);
    /// ```
    pub fn control_rate(&self, clock: ControlClock) -> f64 {
        match clock {
            ControlClock::Voice => self.timer_rate() / self.voice_divider,
            ControlClock::Drum => self.timer_rate() / self.drum_divider,
        }
    }
}

/// Frequency-indexed increment table (log-spaced).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RateTableConfig {
    /// Number of entries.
    pub entries: usize,
    /// Slowest rate in Hz.
    pub min_hz: f64,
    /// Fastest rate in Hz.
    pub max_hz: f64,
    /// Leading codes forced to zero.
    pub held: usize,
    /// Target accumulator.
    pub accumulator: Accumulator,
    /// Control loop running the accumulator.
    pub clock: ControlClock,
}

/// Time-indexed increment table (power-law warped).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TimeTableConfig {
    /// Number of entries.
    pub entries: usize,
    /// Shortest time, in control ticks.
    pub shortest_ticks: f64,
    /// Longest time in seconds.
    pub longest_s: f64,
    /// Warp exponent.
    pub gamma: f64,
    /// Target accumulator.
    pub accumulator: Accumulator,
    /// Control loop running the accumulator.
    pub clock: ControlClock,
}

impl TimeTableConfig {
    /// Shortest time in seconds under `clock`.
    pub fn shortest_s(&self, clock: &ClockConfig) -> f64 {
        self.shortest_ticks / clock.control_rate(self.clock)
    }
}

/// Equal-tempered note scale shared by the pitch tables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScaleConfig {
    /// Number of entries.
    pub entries: usize,
    /// Note of the first entry.
    pub start_note: f64,
    /// Note step between entries.
    pub note_step: f64,
    /// Frequency of the reference note in Hz.
    pub reference_hz: f64,
    /// Reference note number.
    pub reference_note: f64,
    /// Notes per doubling of frequency.
    pub steps_per_octave: f64,
}

impl ScaleConfig {
    /// The note range covered by the table.
    pub fn notes(&self) -> NoteRange {
        NoteRange {
            start: self.start_note,
            step: self.note_step,
            entries: self.entries,
        }
    }

    /// The tuning used to turn notes into frequencies.
    pub fn tuning(&self) -> Tuning {
        Tuning {
            reference_hz: self.reference_hz,
            reference_note: self.reference_note,
            steps_per_octave: self.steps_per_octave,
        }
    }
}

/// DCO pitch table: notes to timer periods at the master clock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DcoConfig {
    /// Notes and tuning.
    pub scale: ScaleConfig,
    /// Timer prescaler applied to the master clock.
    pub prescaler: f64,
}

/// Drum oscillator table: notes to Q16 phase increments at the timer rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DrumPitchConfig {
    /// Notes and tuning.
    pub scale: ScaleConfig,
}

/// Parameters of the curve-shape tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ShapesConfig {
    /// `env_expo`: exponential attack.
    pub env_expo: ExpoEnvelopeConfig,
    /// `deadband`: bipolar power ramp with a flat centre.
    pub deadband: DeadbandConfig,
    /// `pitch_deadband`: staircase of semitone ramps.
    pub pitch_deadband: PitchDeadbandConfig,
    /// `drm_envelope`: exponential decay.
    pub drum_envelope: DecayConfig,
    /// `sine`: one offset-binary sine period.
    pub sine: SineConfig,
}

/// `1 - exp(-rate * x)` over `entries` points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExpoEnvelopeConfig {
    /// Number of entries.
    pub entries: usize,
    /// Curvature.
    pub rate: f64,
}

/// `x^exponent` ramps around `dead_len` zeros.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DeadbandConfig {
    /// Points per ramp.
    pub ramp_len: usize,
    /// Ramp exponent.
    pub exponent: f64,
    /// Points in the flat centre.
    pub dead_len: usize,
}

/// Hold-then-ramp segments stacked at semitone offsets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PitchDeadbandConfig {
    /// Points held at each offset.
    pub hold_len: usize,
    /// Points in each ramp.
    pub ramp_len: usize,
    /// Semitones covered by each ramp.
    pub span: f64,
    /// Semitone offset of each segment.
    pub offsets: Vec<f64>,
    /// Number of entries kept.
    pub entries: usize,
}

impl PitchDeadbandConfig {
    /// Number of points the segments produce before cutting to `entries`.
    pub fn available(&self) -> usize {
        self.offsets.len() * (self.hold_len + self.ramp_len)
    }
}

/// `exp(-decay * x)` over `entries` points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DecayConfig {
    /// Number of entries.
    pub entries: usize,
    /// Decay constant.
    pub decay: f64,
}

/// Sine period quantized into `[min, max]` before the offset-binary shift.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SineConfig {
    /// Number of entries.
    pub entries: usize,
    /// Lowest unsigned code.
    pub min: f64,
    /// Highest unsigned code.
    pub max: f64,
}

/// A named 16-step groove template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GrooveConfig {
    /// Short name; the table is called `groove_<name>`.
    pub name: String,
    /// Relative timing offset of each step.
    pub template: Vec<f64>,
}

impl GrooveConfig {
    /// Create a groove template.
    pub fn new(name: impl Into<String>, template: impl Into<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }
}

/// A raw byte sample read from disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SampleConfig {
    /// Table name.
    pub name: String,
    /// File path, relative to the sample root.
    pub path: PathBuf,
    /// Number of bytes kept.
    pub length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_rates_follow_dividers() {
        let clock = ClockConfig::default();
        assert_eq!(clock.timer_rate(), 20_000_000.0 / 510.0);
        assert_eq!(
            clock.control_rate(ControlClock::Drum),
            20_000_000.0 / 510.0 / 32.0
        );
        assert_eq!(
            clock.control_rate(ControlClock::Voice),
            2.0 * clock.control_rate(ControlClock::Drum)
        );
    }

    #[test]
    fn shortest_time_uses_table_clock() {
        let clock = ClockConfig::default();
        let config = ResourceConfig::default();
        let drum = config.drum_envelope.shortest_s(&clock);
        assert_eq!(drum, 4.0 / clock.control_rate(ControlClock::Drum));
    }

    #[test]
    fn partial_toml_keeps_firmware_sections() {
        let config = ResourceConfig::from_toml(
            r#"
            [lfo]
            entries = 128
            min_hz = 0.5
            max_hz = 50.0
            held = 0
            accumulator = "q32"
            clock = "voice"
            "#,
        )
        .unwrap();
        assert_eq!(config.lfo.entries, 128);
        assert_eq!(config.glide, ResourceConfig::default().glide);
        assert_eq!(config.grooves.len(), 6);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = ResourceConfig::from_toml("[clock]\nmaster_hz = 1.0\nturbo = true\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn enums_use_snake_case() {
        let toml = toml::to_string(&RateTableConfig {
            entries: 4,
            min_hz: 1.0,
            max_hz: 2.0,
            held: 0,
            accumulator: Accumulator::Q16,
            clock: ControlClock::Drum,
        })
        .unwrap();
        assert!(toml.contains("accumulator = \"q16\""), "got: {toml}");
        assert!(toml.contains("clock = \"drum\""), "got: {toml}");
    }

    #[test]
    fn table_names_in_declaration_order() {
        let table_names = ResourceConfig::default().table_names();
        assert_eq!(table_names.len(), 5 + 6 + 1 + 2 + 4 + 1 + 9);
        assert_eq!(table_names[0], "glide_increments");
        assert_eq!(table_names[5], "groove_swing");
        assert_eq!(table_names[11], "arpeggiator_patterns");
        assert_eq!(table_names[12], "lfo_increments");
        assert_eq!(table_names[18], "hh");
        assert_eq!(table_names[27], "drum_map_node_8");
    }
}
