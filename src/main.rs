//! ringback-gen: writes the 8-second ringback pattern WAV file.
//!
//! The output path defaults to `public/ringback-pattern.wav` and can be
//! changed with `RINGBACK_OUTPUT_PATH`. Set `RUST_LOG=debug` for details.

use ringback_gen::config::PatternConfig;
use ringback_gen::error::Result;
use ringback_gen::output::write_pattern;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = PatternConfig::from_env();

    println!("Generating 8-second ringback pattern...");
    let summary = write_pattern(&config)?;

    println!("Total samples: {}", summary.sample_count);
    println!("Duration: {:.1} seconds", summary.duration_secs());
    println!("Ringback pattern saved to {}", summary.path.display());
    println!("   - Format: {}", summary.format_label());
    println!("   - Size: {} bytes", summary.bytes());
    println!("   - Duration: {:.1} seconds", summary.duration_secs());
    println!(
        "   - Pattern: {}s ring + {}s silence + {}s ring",
        config.ring_duration, config.silence_duration, config.ring_duration
    );

    Ok(())
}
