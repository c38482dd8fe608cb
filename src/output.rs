//! Pattern output.
//!
//! Ties generation to the WAV writer: build the configured pattern and
//! write it to the configured path.

use crate::audio::{write_wav, WavSummary};
use crate::config::PatternConfig;
use crate::error::Result;
use crate::generation::build_pattern_with;

/// Builds the pattern described by `config` and writes it to `config.output_path`.
///
/// Returns a summary of what was written.
pub fn write_pattern(config: &PatternConfig) -> Result<WavSummary> {
    let samples = build_pattern_with(config)?;
    log::info!(
        "Generated {} samples ({:.1}s)",
        samples.len(),
        samples.len() as f64 / config.sample_rate as f64
    );

    write_wav(&samples, &config.output_path, config.sample_rate)?;

    let summary = WavSummary::new(&config.output_path, samples.len(), config.sample_rate);
    log::info!("Wrote {} bytes to {}", summary.bytes(), summary.path.display());
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::tempdir;

    #[test]
    fn default_pattern_round_trips_through_file() {
        let dir = tempdir().unwrap();
        let config = PatternConfig {
            output_path: dir.path().join("ringback-pattern.wav"),
            ..PatternConfig::default()
        };

        let summary = write_pattern(&config).unwrap();
        assert_eq!(summary.sample_count, 64000);
        assert_eq!(summary.bytes(), 128000);
        assert_eq!(summary.duration_secs(), 8.0);

        let mut reader = hound::WavReader::open(&config.output_path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_rate, 8000);
        assert_eq!(reader.len(), 64000);

        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples[0], 0);
        assert_eq!(samples, crate::generation::build_pattern());

        let file_len = std::fs::metadata(&config.output_path).unwrap().len();
        assert_eq!(file_len, 44 + 128000);
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = PatternConfig {
            sample_rate: 0,
            output_path: dir.path().join("never.wav"),
            ..PatternConfig::default()
        };

        let err = write_pattern(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParameter);
        assert!(!config.output_path.exists());
    }
}
