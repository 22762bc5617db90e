//! The firmware's literal parameter set.
//!
//! These values are compiled into the crate and are always available; an
//! override file is never required to reproduce the shipped tables.

use crate::resource::{
    Accumulator, ClockConfig, ControlClock, DcoConfig, DeadbandConfig, DecayConfig,
    DrumPitchConfig, ExpoEnvelopeConfig, GrooveConfig, PitchDeadbandConfig, RateTableConfig,
    ResourceConfig, SampleConfig, ScaleConfig, ShapesConfig, SineConfig, TimeTableConfig,
};

/// Groove templates shipped with the firmware, in table order.
pub static FIRMWARE_GROOVES: &[(&str, [f64; 16])] = &[
    (
        "swing",
        [
            1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0,
        ],
    ),
    (
        "shuffle",
        [
            1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0,
        ],
    ),
    (
        "push",
        [
            -0.5, -0.5, 1.0, 0.0, -1.0, 0.0, 0.0, 0.7, 0.0, 0.0, 0.7, -0.4, -0.7, 0.0, 0.7, 0.0,
        ],
    ),
    (
        "lag",
        [
            0.1, 0.2, 0.4, 0.0, 0.15, -0.2, -0.35, -0.5, 0.5, 0.15, -0.4, -0.2, 0.45, -0.2, 0.4,
            -0.2,
        ],
    ),
    (
        "human",
        [
            0.7, -0.8, 0.85, -0.75, 0.7, -0.7, 0.4, -0.3, 0.5, -0.7, 0.8, -0.75, 0.8, -1.0, 0.5,
            -0.25,
        ],
    ),
    (
        "monkey",
        [
            0.5, -0.6, 0.6, -0.8, 0.6, -0.7, 0.8, -0.7, 0.4, -0.5, 0.9, -0.6, 0.9, -0.8, 0.6, -0.6,
        ],
    ),
];

/// Arpeggiator patterns shipped with the firmware.
pub static FIRMWARE_PATTERNS: &[&str] = &[
    "o-o- o-o- o-o- o-o-",
    "o-o- oooo o-o- oooo",
    "ooo- ooo- ooo- ooo-",
    "o--o --o- -o-- o-o-",
    "oo-o -oo- oo-o -oo-",
    "oooo -oo- oooo -oo-",
];

/// Bytes per drum-map node.
pub const DRUM_MAP_NODE_LEN: usize = 48;

/// Drum-map node data: one 16-step lane per drum instrument, three per node.
pub static DRUM_MAP_NODES: [[u8; DRUM_MAP_NODE_LEN]; 9] = [
    [
        236, 0, 0, 138, 0, 0, 208, 0, 58, 28, 174, 0, 104, 0, 58, 0, 10, 66, 0, 8, 232, 0, 0, 38,
        0, 148, 0, 14, 198, 0, 114, 0, 154, 98, 244, 34, 160, 108, 192, 24, 160, 98, 228, 20, 160,
        92, 194, 44,
    ],
    [
        246, 10, 88, 14, 214, 10, 62, 8, 250, 8, 40, 14, 198, 14, 160, 120, 16, 186, 44, 52, 230,
        12, 116, 18, 22, 154, 10, 18, 246, 88, 72, 58, 136, 130, 220, 64, 130, 120, 156, 32, 128,
        112, 220, 32, 126, 106, 184, 88,
    ],
    [
        224, 0, 98, 0, 0, 68, 0, 198, 0, 136, 174, 0, 46, 28, 116, 12, 0, 94, 0, 0, 224, 160, 20,
        34, 0, 52, 0, 0, 194, 0, 16, 118, 228, 104, 138, 90, 122, 102, 108, 76, 196, 160, 182, 160,
        96, 36, 202, 22,
    ],
    [
        240, 204, 42, 0, 86, 108, 66, 104, 190, 22, 224, 0, 14, 148, 0, 36, 0, 0, 112, 62, 232,
        180, 0, 34, 0, 48, 26, 18, 214, 18, 138, 38, 232, 186, 224, 182, 108, 60, 80, 62, 142, 42,
        24, 34, 136, 14, 170, 26,
    ],
    [
        228, 14, 36, 24, 74, 54, 122, 26, 186, 14, 96, 34, 18, 30, 48, 12, 2, 0, 46, 38, 226, 0,
        68, 0, 2, 0, 92, 30, 232, 166, 116, 22, 64, 12, 236, 128, 160, 30, 202, 74, 68, 28, 228,
        120, 160, 28, 188, 82,
    ],
    [
        236, 24, 14, 54, 0, 0, 106, 0, 202, 220, 0, 178, 0, 160, 140, 8, 134, 82, 114, 160, 224, 0,
        22, 44, 66, 40, 0, 0, 192, 22, 14, 158, 174, 86, 230, 58, 124, 64, 210, 58, 160, 76, 224,
        22, 124, 34, 194, 26,
    ],
    [
        236, 0, 226, 0, 0, 0, 160, 0, 0, 0, 188, 0, 0, 0, 210, 0, 26, 188, 0, 62, 242, 102, 8, 160,
        22, 216, 0, 48, 200, 112, 30, 22, 230, 212, 222, 228, 180, 14, 114, 32, 160, 38, 66, 12,
        154, 22, 88, 36,
    ],
    [
        226, 0, 42, 0, 66, 0, 226, 14, 238, 0, 126, 0, 84, 10, 170, 22, 0, 0, 54, 0, 182, 0, 128,
        36, 6, 10, 84, 10, 238, 8, 158, 26, 240, 46, 218, 24, 232, 0, 96, 0, 240, 28, 204, 30, 214,
        0, 64, 0,
    ],
    [
        228, 0, 212, 0, 14, 0, 214, 0, 160, 52, 218, 0, 0, 0, 134, 32, 104, 0, 22, 84, 230, 22, 0,
        58, 6, 0, 138, 20, 220, 18, 176, 34, 230, 26, 52, 24, 82, 28, 52, 118, 154, 26, 52, 24,
        202, 212, 186, 196,
    ],
];

/// The full firmware configuration.
///
/// # Example
///
/// ```rust
/// use anu_tables_config::{firmware_defaults, validate_config};
///
/// let config = firmware_defaults();
/// assert_eq!(config.lfo.entries, 256);
/// assert!(validate_config(&config).is_ok());
/// ```
pub fn firmware_defaults() -> ResourceConfig {
    ResourceConfig {
        clock: ClockConfig::default(),
        lfo: RateTableConfig {
            entries: 256,
            min_hz: 1.0 / 16.0,
            max_hz: 100.0,
            held: 2,
            accumulator: Accumulator::Q32,
            clock: ControlClock::Voice,
        },
        envelope: TimeTableConfig {
            entries: 256,
            shortest_ticks: 3.0,
            longest_s: 12.0,
            gamma: 0.175,
            accumulator: Accumulator::Q32,
            clock: ControlClock::Voice,
        },
        glide: TimeTableConfig {
            entries: 256,
            shortest_ticks: 3.0,
            longest_s: 6.0,
            gamma: 0.1,
            accumulator: Accumulator::Q16,
            clock: ControlClock::Voice,
        },
        drum_envelope: TimeTableConfig {
            entries: 256,
            shortest_ticks: 4.0,
            longest_s: 4.0,
            gamma: 0.25,
            accumulator: Accumulator::Q16,
            clock: ControlClock::Drum,
        },
        drum_pitch: DrumPitchConfig {
            scale: ScaleConfig {
                entries: 257,
                start_note: 0.0,
                note_step: 1.0,
                reference_hz: 55.0,
                reference_note: 69.0,
                steps_per_octave: 24.0,
            },
        },
        dco: DcoConfig {
            scale: ScaleConfig {
                entries: 97,
                start_note: 16.0,
                note_step: 0.125,
                reference_hz: 440.0,
                reference_note: 69.0,
                steps_per_octave: 12.0,
            },
            prescaler: 16.0,
        },
        shapes: ShapesConfig {
            env_expo: ExpoEnvelopeConfig {
                entries: 257,
                rate: 4.0,
            },
            deadband: DeadbandConfig {
                ramp_len: 124,
                exponent: 3.2,
                dead_len: 8,
            },
            pitch_deadband: PitchDeadbandConfig {
                hold_len: 20,
                ramp_len: 40,
                span: 12.0,
                offsets: vec![-12.0, 0.0, 12.0, 24.0, 36.0],
                entries: 256,
            },
            drum_envelope: DecayConfig {
                entries: 257,
                decay: 1.75,
            },
            sine: SineConfig {
                entries: 257,
                min: 1.0,
                max: 254.0,
            },
        },
        grooves: FIRMWARE_GROOVES
            .iter()
            .map(|(name, template)| GrooveConfig::new(*name, template.to_vec()))
            .collect(),
        arpeggiator_patterns: FIRMWARE_PATTERNS.iter().map(ToString::to_string).collect(),
        samples: vec![SampleConfig {
            name: "hh".to_string(),
            path: "hh_linn.raw".into(),
            length: 4097,
        }],
        drum_map_nodes: DRUM_MAP_NODES.iter().map(|node| node.to_vec()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_firmware_counts() {
        let config = firmware_defaults();
        assert_eq!(config.grooves.len(), 6);
        assert_eq!(config.arpeggiator_patterns.len(), 6);
        assert_eq!(config.drum_map_nodes.len(), 9);
        assert!(
            config
                .drum_map_nodes
                .iter()
                .all(|n| n.len() == DRUM_MAP_NODE_LEN)
        );
        assert_eq!(config.samples[0].length, 4097);
    }

    #[test]
    fn pitch_deadband_has_enough_points() {
        let shapes = firmware_defaults().shapes;
        assert_eq!(shapes.pitch_deadband.available(), 300);
        assert!(shapes.pitch_deadband.available() >= shapes.pitch_deadband.entries);
    }

    #[test]
    fn default_is_firmware() {
        assert_eq!(ResourceConfig::default(), firmware_defaults());
    }
}
