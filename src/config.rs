//! Pattern configuration module.
//!
//! Holds the tone plan and output location for the ringback pattern,
//! along with the parameter checks shared by the generator.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{RingbackError, Result};

/// Telephony-standard sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 8000;

/// Length of each ring burst in seconds.
pub const DEFAULT_RING_DURATION: f64 = 2.0;

/// Length of the gap between ring bursts in seconds.
pub const DEFAULT_SILENCE_DURATION: f64 = 4.0;

/// Output level as a fraction of full scale.
pub const DEFAULT_AMPLITUDE: f64 = 0.3;

/// First North American ringback tone, in Hz.
pub const DEFAULT_FREQ1: f64 = 440.0;
/// Second ringback tone, in Hz.
pub const DEFAULT_FREQ2: f64 = 480.0;

/// Default output location, inside the static assets directory.
pub const DEFAULT_OUTPUT_PATH: &str = "public/ringback-pattern.wav";

/// Environment variable overriding the output path.
pub const OUTPUT_PATH_ENV: &str = "RINGBACK_OUTPUT_PATH";

/// Configuration for one ringback pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Samples per second.
    pub sample_rate: u32,

    /// Duration of each ring segment in seconds.
    pub ring_duration: f64,

    /// Duration of the silent gap in seconds.
    pub silence_duration: f64,

    /// Peak level of the combined tone, in (0, 1].
    pub amplitude: f64,

    /// First tone frequency in Hz.
    pub freq1: f64,

    /// Second tone frequency in Hz.
    pub freq2: f64,

    /// Where the WAV file is written.
    pub output_path: PathBuf,
}

impl PatternConfig {
    /// Creates a PatternConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a PatternConfig from environment variables.
    ///
    /// Only `RINGBACK_OUTPUT_PATH` is read; the tone plan is fixed.
    /// Empty values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var(OUTPUT_PATH_ENV) {
            if !path.trim().is_empty() {
                config.output_path = PathBuf::from(path);
            }
        }

        config
    }

    /// Validates every tone parameter.
    pub fn validate(&self) -> Result<()> {
        validate_sample_rate(self.sample_rate)?;
        validate_duration("ring_duration", self.ring_duration)?;
        validate_duration("silence_duration", self.silence_duration)?;
        validate_amplitude(self.amplitude)?;
        validate_frequency("freq1", self.freq1)?;
        validate_frequency("freq2", self.freq2)?;
        Ok(())
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            ring_duration: DEFAULT_RING_DURATION,
            silence_duration: DEFAULT_SILENCE_DURATION,
            amplitude: DEFAULT_AMPLITUDE,
            freq1: DEFAULT_FREQ1,
            freq2: DEFAULT_FREQ2,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

pub(crate) fn validate_sample_rate(sample_rate: u32) -> Result<()> {
    if sample_rate == 0 {
        return Err(RingbackError::invalid_parameter(
            "sample_rate",
            "must be greater than 0",
        ));
    }
    Ok(())
}

pub(crate) fn validate_duration(name: &str, duration: f64) -> Result<()> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(RingbackError::invalid_parameter(
            name,
            format!("{} seconds (must be finite and >= 0)", duration),
        ));
    }
    Ok(())
}

pub(crate) fn validate_amplitude(amplitude: f64) -> Result<()> {
    if !amplitude.is_finite() || amplitude <= 0.0 || amplitude > 1.0 {
        return Err(RingbackError::invalid_parameter(
            "amplitude",
            format!("{} (must be in (0, 1])", amplitude),
        ));
    }
    Ok(())
}

pub(crate) fn validate_frequency(name: &str, freq: f64) -> Result<()> {
    if !freq.is_finite() || freq <= 0.0 {
        return Err(RingbackError::invalid_parameter(
            name,
            format!("{} Hz (must be finite and > 0)", freq),
        ));
    }
    Ok(())
}
