//! Audio output module.
//!
//! Provides WAV file writing for the generated pattern.

pub mod wav;

// Re-export commonly used items
pub use wav::{
    pcm16_spec, samples_to_duration, write_wav, write_wav_to_buffer, WavSummary,
    BITS_PER_SAMPLE, CHANNELS,
};
