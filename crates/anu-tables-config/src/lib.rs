//! Configuration for the anu lookup table compiler.
//!
//! This crate holds the literal parameters the resource compiler turns into
//! firmware tables: clock dividers, increment ranges, pitch scales, curve
//! shapes, groove templates, arpeggiator patterns, drum-map data and raw
//! sample descriptors.
//!
//! # Features
//!
//! - **Firmware defaults**: the shipped parameter set, always available
//! - **TOML overrides**: load and save a [`ResourceConfig`], section by section
//! - **Validation**: every invariant checked up front, all errors reported at once
//!
//! # Example
//!
//! ```rust,no_run
//! use anu_tables_config::{ResourceConfig, validate_config};
//!
//! // Start from the firmware values and override a section from a file
//! let config = ResourceConfig::load("anu-tables.toml").unwrap();
//! validate_config(&config).unwrap();
//!
//! // Write the firmware values out as a starting point
//! ResourceConfig::default().save("defaults.toml").unwrap();
//! ```

mod error;
mod resource;

/// The firmware's literal parameter set.
pub mod defaults;

/// Names of the firmware tables.
pub mod names;

/// Configuration validation.
pub mod validation;

pub use defaults::{
    DRUM_MAP_NODE_LEN, DRUM_MAP_NODES, FIRMWARE_GROOVES, FIRMWARE_PATTERNS, firmware_defaults,
};
pub use error::ConfigError;
pub use resource::{
    Accumulator, ClockConfig, ControlClock, DcoConfig, DeadbandConfig, DecayConfig,
    DrumPitchConfig, ExpoEnvelopeConfig, GrooveConfig, PitchDeadbandConfig, RateTableConfig,
    ResourceConfig, SampleConfig, ScaleConfig, ShapesConfig, SineConfig, TimeTableConfig,
};
pub use validation::{ValidationError, ValidationResult, validate_config};
