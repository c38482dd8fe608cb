//! Ringback pattern composition.
//!
//! A pattern is one ring burst, a silent gap and a second ring burst.

use crate::config::{
    PatternConfig, DEFAULT_AMPLITUDE, DEFAULT_FREQ1, DEFAULT_FREQ2, DEFAULT_RING_DURATION,
    DEFAULT_SAMPLE_RATE, DEFAULT_SILENCE_DURATION,
};
use crate::error::Result;
use crate::generation::tone::{render_silence, render_tone, sample_count};

/// Builds the standard ringback pattern: 2s ring, 4s silence, 2s ring at 8kHz.
///
/// Always 64000 samples.
pub fn build_pattern() -> Vec<i16> {
    compose(
        DEFAULT_SAMPLE_RATE,
        DEFAULT_RING_DURATION,
        DEFAULT_SILENCE_DURATION,
        DEFAULT_AMPLITUDE,
        DEFAULT_FREQ1,
        DEFAULT_FREQ2,
    )
}

/// Builds a pattern from an explicit configuration.
///
/// The configuration is validated before any samples are produced.
pub fn build_pattern_with(config: &PatternConfig) -> Result<Vec<i16>> {
    config.validate()?;

    Ok(compose(
        config.sample_rate,
        config.ring_duration,
        config.silence_duration,
        config.amplitude,
        config.freq1,
        config.freq2,
    ))
}

/// Total pattern length in seconds.
pub fn pattern_duration(config: &PatternConfig) -> f64 {
    2.0 * config.ring_duration + config.silence_duration
}

/// Number of samples `build_pattern_with` produces for `config`.
pub fn expected_sample_count(config: &PatternConfig) -> usize {
    let ring = sample_count(config.ring_duration, config.sample_rate);
    let silence = sample_count(config.silence_duration, config.sample_rate);
    2 * ring + silence
}

fn compose(
    sample_rate: u32,
    ring_duration: f64,
    silence_duration: f64,
    amplitude: f64,
    freq1: f64,
    freq2: f64,
) -> Vec<i16> {
    let ring_len = sample_count(ring_duration, sample_rate);
    let silence_len = sample_count(silence_duration, sample_rate);

    log::debug!(
        "Composing pattern: {} ring + {} silence + {} ring samples at {} Hz",
        ring_len,
        silence_len,
        ring_len,
        sample_rate
    );

    // Both bursts start at t = 0, so they are identical.
    let ring = render_tone(ring_len, sample_rate, amplitude, freq1, freq2);
    let silence = render_silence(silence_len);

    let mut samples = Vec::with_capacity(2 * ring_len + silence_len);
    samples.extend_from_slice(&ring);
    samples.extend_from_slice(&silence);
    samples.extend_from_slice(&ring);
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::generation::tone::generate_tone_segment;

    #[test]
    fn default_pattern_length() {
        let pattern = build_pattern();
        assert_eq!(pattern.len(), 64000);
        assert_eq!(pattern.len(), expected_sample_count(&PatternConfig::default()));
        assert_eq!(pattern_duration(&PatternConfig::default()), 8.0);
    }

    #[test]
    fn middle_four_seconds_are_silent() {
        let pattern = build_pattern();
        assert!(pattern[16000..48000].iter().all(|&s| s == 0));
    }

    #[test]
    fn ring_segments_carry_the_tone() {
        let pattern = build_pattern();
        let ring = generate_tone_segment(2.0, 8000, 0.3, 440.0, 480.0).unwrap();

        assert_eq!(&pattern[..16000], ring.as_slice());
        assert_eq!(&pattern[48000..], ring.as_slice());
        assert_eq!(pattern[0], 0);
        assert_eq!(pattern[48000], 0);
    }

    #[test]
    fn ring_level_stays_within_amplitude() {
        let limit = (0.3 * 32767.0) as i16;
        assert!(build_pattern().iter().all(|&s| s.abs() <= limit));
    }

    #[test]
    fn pattern_is_deterministic() {
        assert_eq!(build_pattern(), build_pattern());
    }

    #[test]
    fn build_pattern_with_defaults_matches_build_pattern() {
        let pattern = build_pattern_with(&PatternConfig::default()).unwrap();
        assert_eq!(pattern, build_pattern());
    }

    #[test]
    fn build_pattern_with_custom_rate() {
        let config = PatternConfig {
            sample_rate: 16000,
            ring_duration: 0.5,
            silence_duration: 1.0,
            ..PatternConfig::default()
        };
        let pattern = build_pattern_with(&config).unwrap();
        assert_eq!(pattern.len(), 32000);
        assert_eq!(pattern.len(), expected_sample_count(&config));
        assert!(pattern[8000..24000].iter().all(|&s| s == 0));
    }

    #[test]
    fn build_pattern_with_rejects_invalid_config() {
        let config = PatternConfig {
            amplitude: 2.0,
            ..PatternConfig::default()
        };
        let err = build_pattern_with(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParameter);
    }
}
