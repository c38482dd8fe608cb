//! Dual-tone and silence segment synthesis.
//!
//! Samples are computed in `f64`, scaled to full-scale 16-bit and truncated
//! toward zero.

use std::f64::consts::PI;

use crate::config::{validate_amplitude, validate_duration, validate_frequency, validate_sample_rate};
use crate::error::Result;

/// Full-scale multiplier for signed 16-bit PCM.
pub const FULL_SCALE: f64 = i16::MAX as f64;

/// Number of whole samples covering `duration_secs` at `sample_rate`.
///
/// Fractional samples are dropped.
pub fn sample_count(duration_secs: f64, sample_rate: u32) -> usize {
    (sample_rate as f64 * duration_secs) as usize
}

/// Generates a segment of two summed sine tones.
///
/// The tones are averaged so the waveform stays in [-1, 1], then scaled by
/// `amplitude` and by 32767. A zero duration yields an empty segment.
///
/// # Arguments
///
/// * `duration_secs` - Segment length in seconds (>= 0)
/// * `sample_rate` - Samples per second (> 0)
/// * `amplitude` - Level in (0, 1]
/// * `freq1`, `freq2` - Tone frequencies in Hz (> 0)
///
/// # Example
///
/// ```ignore
/// use ringback_gen::generation::generate_tone_segment;
///
/// let ring = generate_tone_segment(2.0, 8000, 0.3, 440.0, 480.0)?;
/// assert_eq!(ring.len(), 16000);
/// ```
pub fn generate_tone_segment(
    duration_secs: f64,
    sample_rate: u32,
    amplitude: f64,
    freq1: f64,
    freq2: f64,
) -> Result<Vec<i16>> {
    validate_duration("duration", duration_secs)?;
    validate_sample_rate(sample_rate)?;
    validate_amplitude(amplitude)?;
    validate_frequency("freq1", freq1)?;
    validate_frequency("freq2", freq2)?;

    Ok(render_tone(
        sample_count(duration_secs, sample_rate),
        sample_rate,
        amplitude,
        freq1,
        freq2,
    ))
}

/// Generates a segment of digital silence.
pub fn generate_silence_segment(duration_secs: f64, sample_rate: u32) -> Result<Vec<i16>> {
    validate_duration("duration", duration_secs)?;
    validate_sample_rate(sample_rate)?;

    Ok(render_silence(sample_count(duration_secs, sample_rate)))
}

/// Renders `num_samples` of the dual tone. Parameters must already be valid.
pub(crate) fn render_tone(
    num_samples: usize,
    sample_rate: u32,
    amplitude: f64,
    freq1: f64,
    freq2: f64,
) -> Vec<i16> {
    let rate = sample_rate as f64;

    (0..num_samples)
        .map(|i| {
            let t = i as f64 / rate;
            let tone1 = (2.0 * PI * freq1 * t).sin();
            let tone2 = (2.0 * PI * freq2 * t).sin();
            let combined = (tone1 + tone2) / 2.0;
            to_pcm16(combined * amplitude * FULL_SCALE)
        })
        .collect()
}

pub(crate) fn render_silence(num_samples: usize) -> Vec<i16> {
    vec![0; num_samples]
}

/// Truncates toward zero and clamps into the i16 range.
fn to_pcm16(value: f64) -> i16 {
    value.trunc().clamp(i16::MIN as f64, i16::MAX as f64) as i16
}
