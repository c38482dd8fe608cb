//! WAV file writer for the generated pattern.
//!
//! Writes mono 16-bit PCM using the hound crate.

use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{RingbackError, Result};

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per sample (signed 16-bit PCM).
pub const BITS_PER_SAMPLE: u16 = 16;

/// Size of the canonical RIFF/WAVE header hound writes for integer PCM.
pub const WAV_HEADER_LEN: usize = 44;

/// Returns the WAV spec for mono 16-bit PCM at the given rate.
pub fn pcm16_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Writes samples to a WAV file, creating or overwriting it.
///
/// Missing parent directories are created. If writing fails part way the
/// file may be left truncated and should not be used.
///
/// # Example
///
/// ```ignore
/// use ringback_gen::audio::write_wav;
///
/// let samples = vec![0i16, 1000, -1000, 0];
/// write_wav(&samples, Path::new("/tmp/test.wav"), 8000)?;
/// ```
pub fn write_wav(samples: &[i16], path: &Path, sample_rate: u32) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            log::debug!("Creating output directory {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                RingbackError::write_failed(
                    format!("Failed to create directory {}", parent.display()),
                    e,
                )
            })?;
        }
    }

    let mut writer = WavWriter::create(path, pcm16_spec(sample_rate))
        .map_err(|e| RingbackError::write_failed("Failed to create WAV file", e))?;

    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| RingbackError::write_failed("Failed to write sample", e))?;
    }

    writer
        .finalize()
        .map_err(|e| RingbackError::write_failed("Failed to finalize WAV file", e))?;

    log::debug!(
        "Wrote {} samples at {} Hz to {}",
        samples.len(),
        sample_rate,
        path.display()
    );

    Ok(())
}

/// Writes samples to an in-memory WAV buffer.
///
/// Returns the WAV file contents as a byte vector.
pub fn write_wav_to_buffer(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>> {
    let mut cursor = std::io::Cursor::new(Vec::with_capacity(
        WAV_HEADER_LEN + samples.len() * 2,
    ));

    {
        let mut writer = WavWriter::new(&mut cursor, pcm16_spec(sample_rate))
            .map_err(|e| RingbackError::write_failed("Failed to create WAV writer", e))?;

        for &sample in samples {
            writer
                .write_sample(sample)
                .map_err(|e| RingbackError::write_failed("Failed to write sample", e))?;
        }

        writer
            .finalize()
            .map_err(|e| RingbackError::write_failed("Failed to finalize WAV buffer", e))?;
    }

    Ok(cursor.into_inner())
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f32 {
    sample_count as f32 / sample_rate as f32
}

/// What was written, for the console report.
#[derive(Debug, Clone, PartialEq)]
pub struct WavSummary {
    pub path: PathBuf,
    pub sample_count: usize,
    pub sample_rate: u32,
}

impl WavSummary {
    pub fn new(path: impl Into<PathBuf>, sample_count: usize, sample_rate: u32) -> Self {
        Self {
            path: path.into(),
            sample_count,
            sample_rate,
        }
    }

    /// Size of the PCM payload in bytes, excluding the header.
    pub fn bytes(&self) -> usize {
        self.sample_count * (BITS_PER_SAMPLE as usize / 8) * CHANNELS as usize
    }

    pub fn duration_secs(&self) -> f32 {
        samples_to_duration(self.sample_count, self.sample_rate)
    }

    /// Short format label, e.g. "PCM 16-bit 8kHz mono".
    pub fn format_label(&self) -> String {
        let rate = if self.sample_rate % 1000 == 0 {
            format!("{}kHz", self.sample_rate / 1000)
        } else {
            format!("{}Hz", self.sample_rate)
        };
        format!("PCM {}-bit {} mono", BITS_PER_SAMPLE, rate)
    }
}
