//! Resource compilation: configuration in, registry out.

use std::path::{Path, PathBuf};

use anu_tables_config::{
    Accumulator, ClockConfig, ConfigError, RateTableConfig, ResourceConfig, SampleConfig,
    TimeTableConfig, names, validate_config,
};
use anu_tables_core::shapes::{
    deadband, expo_envelope, exponential_decay, inverted_sine, quantized_pitch,
};
use anu_tables_core::{
    CurveShaper, FixedPoint, IncrementRange, Rounding, Table, TableResult, encode_groove,
    encode_patterns, exponential_increments, pass_through, phase_increment_table,
    timer_period_table, to_signed_offset, warped_increments,
};

use crate::{CompileError, TableGroup, TableRegistry};

/// Options that do not belong in the configuration itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Directory raw sample paths are resolved against.
    pub sample_root: PathBuf,
    /// Leave raw sample tables out of the registry.
    pub skip_samples: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self::new(".")
    }
}

impl CompileOptions {
    /// Resolve samples against `sample_root`.
    pub fn new(sample_root: impl Into<PathBuf>) -> Self {
        Self {
            sample_root: sample_root.into(),
            skip_samples: false,
        }
    }

    /// Compile generated tables only, without touching the filesystem.
    pub fn without_samples() -> Self {
        Self {
            skip_samples: true,
            ..Self::default()
        }
    }
}

/// Compile every table described by `config`.
///
/// The configuration is validated first. Tables are then generated in
/// declaration order: the 16-bit group, the 32-bit group, then waveforms.
/// The first failure aborts the run and no registry is returned.
///
/// # Errors
///
/// - [`CompileError::Config`] if validation fails
/// - [`CompileError::Table`] if a generator rejects its parameters
/// - [`CompileError::ReadSample`] / [`CompileError::SampleTooShort`] for raw samples
pub fn compile(
    config: &ResourceConfig,
    options: &CompileOptions,
) -> Result<TableRegistry, CompileError> {
    validate_config(config).map_err(ConfigError::from)?;

    let clock = &config.clock;
    let shapes = &config.shapes;
    let mut out = Builder::default();

    out.add(names::GLIDE_INCREMENTS, TableGroup::Lookup16, || {
        time_increments(&config.glide, clock)
    })?;
    out.add(names::DRUM_ENV_INCREMENTS, TableGroup::Lookup16, || {
        time_increments(&config.drum_envelope, clock)
    })?;
    out.add(names::DRUM_PHASE_INCREMENTS, TableGroup::Lookup16, || {
        let scale = &config.drum_pitch.scale;
        let table: Vec<u16> = phase_increment_table(
            scale.notes(),
            scale.tuning(),
            FixedPoint::Q16,
            clock.timer_rate(),
        )?;
        Ok(table.into())
    })?;
    out.add(names::DCO_PITCH, TableGroup::Lookup16, || {
        let scale = &config.dco.scale;
        let table: Vec<u16> = timer_period_table(
            scale.notes(),
            scale.tuning(),
            clock.master_hz,
            config.dco.prescaler,
        )?;
        Ok(table.into())
    })?;
    out.add(names::ENV_EXPO, TableGroup::Lookup16, || {
        let curve = expo_envelope(shapes.env_expo.entries, shapes.env_expo.rate)?;
        let table: Vec<u16> = CurveShaper::full_range::<u16>().quantize(&curve)?;
        Ok(table.into())
    })?;
    for groove in &config.grooves {
        out.add(&names::groove(&groove.name), TableGroup::Lookup16, || {
            Ok(encode_groove(&groove.template)?.into())
        })?;
    }
    out.add(names::ARPEGGIATOR_PATTERNS, TableGroup::Lookup16, || {
        Ok(encode_patterns(&config.arpeggiator_patterns)?.into())
    })?;

    out.add(names::LFO_INCREMENTS, TableGroup::Lookup32, || {
        rate_increments(&config.lfo, clock)
    })?;
    out.add(names::ENV_INCREMENTS, TableGroup::Lookup32, || {
        time_increments(&config.envelope, clock)
    })?;

    out.add(names::DEADBAND, TableGroup::Waveform, || {
        let c = &shapes.deadband;
        let curve = deadband(c.ramp_len, c.exponent, c.dead_len)?;
        let table: Vec<u8> = CurveShaper::full_range::<u8>().quantize(&curve)?;
        Ok(table.into())
    })?;
    out.add(names::PITCH_DEADBAND, TableGroup::Waveform, || {
        let c = &shapes.pitch_deadband;
        let curve = quantized_pitch(c.hold_len, c.ramp_len, c.span, &c.offsets, c.entries)?;
        let table: Vec<i8> = pass_through(&curve, Rounding::Nearest)?;
        Ok(table.into())
    })?;
    out.add(names::DRUM_ENVELOPE, TableGroup::Waveform, || {
        let c = &shapes.drum_envelope;
        let curve = exponential_decay(c.entries, c.decay)?;
        let table: Vec<u8> = CurveShaper::full_range::<u8>().quantize(&curve)?;
        Ok(table.into())
    })?;
    out.add(names::SINE, TableGroup::Waveform, || {
        let c = &shapes.sine;
        let curve = inverted_sine(c.entries)?;
        let unsigned: Vec<u8> = CurveShaper::new(c.min, c.max)?.quantize(&curve)?;
        Ok(to_signed_offset(&unsigned).into())
    })?;

    if options.skip_samples {
        #[cfg(feature = "tracing")]
        tracing::debug!(count = config.samples.len(), "raw samples skipped");
    } else {
        for sample in &config.samples {
            let bytes = read_sample(sample, &options.sample_root)?;
            out.registry
                .register(sample.name.as_str(), TableGroup::Waveform, bytes)?;
        }
    }

    for (index, node) in config.drum_map_nodes.iter().enumerate() {
        out.registry
            .register(names::drum_map_node(index), TableGroup::Waveform, node.clone())?;
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        tables = out.registry.len(),
        bytes = out.registry.total_bytes(),
        "compilation finished"
    );

    Ok(out.registry)
}

/// Accumulates generated tables, tagging generator errors with the table name.
#[derive(Default)]
struct Builder {
    registry: TableRegistry,
}

impl Builder {
    fn add(
        &mut self,
        name: &str,
        group: TableGroup,
        generate: impl FnOnce() -> TableResult<Table>,
    ) -> Result<(), CompileError> {
        let table = generate().map_err(|source| CompileError::table(name, source))?;
        self.registry.register(name, group, table)
    }
}

fn rate_increments(table: &RateTableConfig, clock: &ClockConfig) -> TableResult<Table> {
    let range = IncrementRange::from_frequencies(
        table.accumulator.into(),
        table.min_hz,
        table.max_hz,
        clock.control_rate(table.clock),
    )?;
    Ok(match table.accumulator {
        Accumulator::Q16 => exponential_increments::<u16>(range, table.entries, table.held)?.into(),
        Accumulator::Q32 => exponential_increments::<u32>(range, table.entries, table.held)?.into(),
    })
}

fn time_increments(table: &TimeTableConfig, clock: &ClockConfig) -> TableResult<Table> {
    let range = IncrementRange::from_times(
        table.accumulator.into(),
        table.shortest_s(clock),
        table.longest_s,
        clock.control_rate(table.clock),
    )?;
    Ok(match table.accumulator {
        Accumulator::Q16 => warped_increments::<u16>(range, table.gamma, table.entries)?.into(),
        Accumulator::Q32 => warped_increments::<u32>(range, table.gamma, table.entries)?.into(),
    })
}

/// Read the first `sample.length` bytes of a raw sample file.
fn read_sample(sample: &SampleConfig, root: &Path) -> Result<Vec<u8>, CompileError> {
    let path = root.join(&sample.path);
    let mut bytes =
        std::fs::read(&path).map_err(|e| CompileError::read_sample(&sample.name, &path, e))?;
    if bytes.len() < sample.length {
        return Err(CompileError::SampleTooShort {
            name: sample.name.clone(),
            expected: sample.length,
            found: bytes.len(),
        });
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        table = %sample.name,
        path = %path.display(),
        file_len = bytes.len(),
        "raw sample read"
    );

    bytes.truncate(sample.length);
    Ok(bytes)
}
