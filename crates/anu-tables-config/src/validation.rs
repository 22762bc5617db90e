//! Configuration validation.
//!
//! [`validate_config`] checks every numeric and symbolic invariant of a
//! [`ResourceConfig`] in one pass and reports all problems together, so a
//! broken override file can be fixed in one edit. Generation never starts
//! on a configuration that fails here.
//!
//! # Example
//!
//! ```rust
//! use anu_tables_config::{ResourceConfig, ValidationError, validate_config};
//!
//! let mut config = ResourceConfig::default();
//! config.lfo.min_hz = 200.0;
//! config.envelope.gamma = 0.0;
//!
//! let err = validate_config(&config).unwrap_err();
//! assert!(matches!(err, ValidationError::Multiple(ref errors) if errors.len() == 2));
//! ```

use std::collections::HashSet;

use anu_tables_core::{GROOVE_STEPS, encode_pattern};
use thiserror::Error;

use crate::defaults::DRUM_MAP_NODE_LEN;
use crate::resource::{ResourceConfig, ScaleConfig, TimeTableConfig};

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Bounds are not strictly ordered.
    #[error("parameter '{param}' has invalid range [{min}, {max}]")]
    InvalidRange {
        /// Dotted path of the parameter.
        param: String,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// A single value is out of its domain.
    #[error("parameter '{param}' value {value} {reason}")]
    InvalidValue {
        /// Dotted path of the parameter.
        param: String,
        /// The offending value.
        value: f64,
        /// What the value must satisfy.
        reason: String,
    },

    /// Symbolic input is malformed.
    #[error("invalid format for parameter '{param}': {reason}")]
    InvalidFormat {
        /// Dotted path of the parameter.
        param: String,
        /// Description of the format error.
        reason: String,
    },

    /// Two tables would share a name.
    #[error("duplicate table name: {0}")]
    DuplicateName(String),

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Collects validation failures keyed by parameter path.
#[derive(Default)]
struct Checker {
    errors: Vec<ValidationError>,
}

impl Checker {
    fn positive(&mut self, param: &str, value: f64) {
        if !(value.is_finite() && value > 0.0) {
            self.errors.push(ValidationError::InvalidValue {
                param: param.to_string(),
                value,
                reason: "must be finite and positive".to_string(),
            });
        }
    }

    fn finite(&mut self, param: &str, value: f64) {
        if !value.is_finite() {
            self.errors.push(ValidationError::InvalidValue {
                param: param.to_string(),
                value,
                reason: "must be finite".to_string(),
            });
        }
    }

    fn at_least(&mut self, param: &str, value: usize, minimum: usize) {
        if value < minimum {
            self.errors.push(ValidationError::InvalidValue {
                param: param.to_string(),
                value: value as f64,
                reason: format!("must be at least {minimum}"),
            });
        }
    }

    fn ordered(&mut self, param: &str, min: f64, max: f64) {
        if !(min.is_finite() && max.is_finite() && min < max) {
            self.errors.push(ValidationError::InvalidRange {
                param: param.to_string(),
                min,
                max,
            });
        }
    }

    fn format(&mut self, param: String, reason: String) {
        self.errors
            .push(ValidationError::InvalidFormat { param, reason });
    }

    fn time_table(&mut self, section: &str, table: &TimeTableConfig, config: &ResourceConfig) {
        self.at_least(&format!("{section}.entries"), table.entries, 2);
        self.positive(&format!("{section}.shortest_ticks"), table.shortest_ticks);
        self.positive(&format!("{section}.gamma"), table.gamma);
        self.ordered(
            &format!("{section}.shortest_s..longest_s"),
            table.shortest_s(&config.clock),
            table.longest_s,
        );
    }

    fn scale(&mut self, section: &str, scale: &ScaleConfig) {
        self.at_least(&format!("{section}.scale.entries"), scale.entries, 2);
        self.finite(&format!("{section}.scale.start_note"), scale.start_note);
        self.positive(&format!("{section}.scale.note_step"), scale.note_step);
        self.positive(&format!("{section}.scale.reference_hz"), scale.reference_hz);
        self.finite(
            &format!("{section}.scale.reference_note"),
            scale.reference_note,
        );
        self.positive(
            &format!("{section}.scale.steps_per_octave"),
            scale.steps_per_octave,
        );
    }

    fn finish(mut self) -> ValidationResult<()> {
        match self.errors.len() {
            0 => Ok(()),
            1 => Err(self.errors.remove(0)),
            _ => Err(ValidationError::Multiple(self.errors)),
        }
    }
}

/// Validate a resource configuration.
///
/// Checks ordered ranges, sample counts, positive rates and exponents,
/// 16-step patterns and templates, fixed-length drum-map nodes and unique
/// table names.
pub fn validate_config(config: &ResourceConfig) -> ValidationResult<()> {
    let mut check = Checker::default();

    let clock = &config.clock;
    check.positive("clock.master_hz", clock.master_hz);
    check.positive("clock.timer_divider", clock.timer_divider);
    check.positive("clock.voice_divider", clock.voice_divider);
    check.positive("clock.drum_divider", clock.drum_divider);

    let lfo = &config.lfo;
    check.at_least("lfo.entries", lfo.entries, 2);
    check.positive("lfo.min_hz", lfo.min_hz);
    check.ordered("lfo.min_hz..max_hz", lfo.min_hz, lfo.max_hz);
    if lfo.held > lfo.entries {
        check.errors.push(ValidationError::InvalidValue {
            param: "lfo.held".to_string(),
            value: lfo.held as f64,
            reason: format!("must not exceed lfo.entries ({})", lfo.entries),
        });
    }

    check.time_table("envelope", &config.envelope, config);
    check.time_table("glide", &config.glide, config);
    check.time_table("drum_envelope", &config.drum_envelope, config);

    check.scale("drum_pitch", &config.drum_pitch.scale);
    check.scale("dco", &config.dco.scale);
    check.positive("dco.prescaler", config.dco.prescaler);

    let shapes = &config.shapes;
    check.at_least("shapes.env_expo.entries", shapes.env_expo.entries, 2);
    check.positive("shapes.env_expo.rate", shapes.env_expo.rate);
    check.at_least("shapes.deadband.ramp_len", shapes.deadband.ramp_len, 2);
    check.positive("shapes.deadband.exponent", shapes.deadband.exponent);
    let pitch = &shapes.pitch_deadband;
    check.at_least("shapes.pitch_deadband.ramp_len", pitch.ramp_len, 2);
    check.positive("shapes.pitch_deadband.span", pitch.span);
    check.at_least("shapes.pitch_deadband.entries", pitch.entries, 1);
    for (i, &offset) in pitch.offsets.iter().enumerate() {
        check.finite(&format!("shapes.pitch_deadband.offsets[{i}]"), offset);
    }
    if pitch.available() < pitch.entries {
        check.errors.push(ValidationError::InvalidValue {
            param: "shapes.pitch_deadband.entries".to_string(),
            value: pitch.entries as f64,
            reason: format!("exceeds the {} points the segments provide", pitch.available()),
        });
    }
    check.at_least(
        "shapes.drum_envelope.entries",
        shapes.drum_envelope.entries,
        2,
    );
    check.positive("shapes.drum_envelope.decay", shapes.drum_envelope.decay);
    check.at_least("shapes.sine.entries", shapes.sine.entries, 2);
    check.ordered("shapes.sine.min..max", shapes.sine.min, shapes.sine.max);

    for groove in &config.grooves {
        let param = format!("grooves.{}", groove.name);
        if groove.template.len() != GROOVE_STEPS {
            check.format(
                param,
                format!(
                    "template has {} steps, expected {GROOVE_STEPS}",
                    groove.template.len()
                ),
            );
        } else if let Some(i) = groove.template.iter().position(|x| !x.is_finite()) {
            check.format(param, format!("step {i} is not finite"));
        }
    }

    for (i, pattern) in config.arpeggiator_patterns.iter().enumerate() {
        if let Err(e) = encode_pattern(pattern) {
            check.format(format!("arpeggiator_patterns[{i}]"), e.to_string());
        }
    }

    for sample in &config.samples {
        if sample.name.is_empty() {
            check.format("samples.name".to_string(), "name is empty".to_string());
        }
        check.at_least(&format!("samples.{}.length", sample.name), sample.length, 1);
    }

    for (i, node) in config.drum_map_nodes.iter().enumerate() {
        if node.len() != DRUM_MAP_NODE_LEN {
            check.format(
                format!("drum_map_nodes[{i}]"),
                format!("node has {} bytes, expected {DRUM_MAP_NODE_LEN}", node.len()),
            );
        }
    }

    let mut seen = HashSet::new();
    for name in config.table_names() {
        if !seen.insert(name.clone()) {
            check.errors.push(ValidationError::DuplicateName(name));
        }
    }

    check.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{GrooveConfig, SampleConfig};

    #[test]
    fn firmware_defaults_are_valid() {
        assert_eq!(validate_config(&ResourceConfig::default()), Ok(()));
    }

    #[test]
    fn single_error_is_not_wrapped() {
        let mut config = ResourceConfig::default();
        config.glide.gamma = -0.1;
        assert_eq!(
            validate_config(&config),
            Err(ValidationError::InvalidValue {
                param: "glide.gamma".to_string(),
                value: -0.1,
                reason: "must be finite and positive".to_string(),
            })
        );
    }

    #[test]
    fn unordered_ranges() {
        let mut config = ResourceConfig::default();
        config.lfo.max_hz = 0.01;
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidRange { ref param, .. } if param == "lfo.min_hz..max_hz"));

        let mut config = ResourceConfig::default();
        config.envelope.longest_s = 0.0001;
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidRange { ref param, .. } if param == "envelope.shortest_s..longest_s"));
    }

    #[test]
    fn too_few_samples() {
        let mut config = ResourceConfig::default();
        config.shapes.sine.entries = 1;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("shapes.sine.entries"));
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn symbolic_inputs_are_format_errors() {
        let mut config = ResourceConfig::default();
        config.grooves.push(GrooveConfig::new("short", vec![0.0; 15]));
        config.arpeggiator_patterns.push("o-o-".to_string());
        config.drum_map_nodes.push(vec![0; 47]);
        let Err(ValidationError::Multiple(errors)) = validate_config(&config) else {
            panic!("expected multiple errors");
        };
        assert_eq!(errors.len(), 3);
        assert!(
            errors
                .iter()
                .all(|e| matches!(e, ValidationError::InvalidFormat { .. }))
        );
    }

    #[test]
    fn duplicate_names_are_reported() {
        let mut config = ResourceConfig::default();
        config.samples.push(SampleConfig {
            name: "sine".to_string(),
            path: "sine.raw".into(),
            length: 16,
        });
        assert_eq!(
            validate_config(&config),
            Err(ValidationError::DuplicateName("sine".to_string()))
        );
    }

    #[test]
    fn pitch_deadband_needs_enough_segments() {
        let mut config = ResourceConfig::default();
        config.shapes.pitch_deadband.offsets.truncate(4);
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("240 points"), "got: {err}");
    }

    #[test]
    fn held_codes_bounded_by_entries() {
        let mut config = ResourceConfig::default();
        config.lfo.held = 300;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn multiple_display_joins_messages() {
        let err = ValidationError::Multiple(vec![
            ValidationError::DuplicateName("a".to_string()),
            ValidationError::DuplicateName("b".to_string()),
        ]);
        assert_eq!(
            err.to_string(),
            "multiple validation errors: duplicate table name: a; duplicate table name: b"
        );
    }
}
