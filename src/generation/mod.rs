//! Sample generation module.
//!
//! Pure waveform math for the ringback pattern; no I/O happens here.

pub mod pattern;
pub mod tone;

// Re-export commonly used items
pub use pattern::{build_pattern, build_pattern_with, expected_sample_count, pattern_duration};
pub use tone::{generate_silence_segment, generate_tone_segment, sample_count};
