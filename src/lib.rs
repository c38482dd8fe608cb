//! ringback-gen: North American ringback pattern generator.
//!
//! Synthesizes the 440 Hz + 480 Hz ringback tone as a 2s ring, 4s silence,
//! 2s ring pattern and writes it as mono 16-bit 8kHz PCM WAV.
//!
//! # Modules
//!
//! - [`generation`]: Pure sample synthesis (tone, silence, pattern)
//! - [`audio`]: WAV encoding to files and buffers
//! - [`config`]: Pattern configuration (PatternConfig)
//! - [`output`]: Generate-and-write in one call
//! - [`error`]: Error types and codes (RingbackError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use ringback_gen::{build_pattern, write_wav, PatternConfig};
//!
//! let config = PatternConfig::default();
//! let samples = build_pattern();
//! write_wav(&samples, &config.output_path, config.sample_rate)?;
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod generation;
pub mod output;

// Re-export commonly used types at crate root for convenience
pub use audio::{write_wav, write_wav_to_buffer, WavSummary};
pub use config::PatternConfig;
pub use error::{ErrorCode, Result, RingbackError};
pub use generation::{
    build_pattern, build_pattern_with, generate_silence_segment, generate_tone_segment,
};
pub use output::write_pattern;
