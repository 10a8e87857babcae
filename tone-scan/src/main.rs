use clap::Parser;
use goertzel_purity::DetectorConfig;
use std::error::Error;
use std::path::PathBuf;
use tone_scan::{read_wav, scan, ScanWindow};

/// Report, block by block, how much of a WAV file's energy sits at one
/// frequency.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to input WAV file
    input: PathBuf,

    /// Frequency to detect, in Hz
    #[arg(long)]
    target: f32,

    /// Samples per scored block
    #[arg(long, default_value_t = 205)]
    block_len: usize,

    /// Window applied inside each block
    #[arg(long, value_enum, default_value_t = ScanWindow::None)]
    window: ScanWindow,

    /// DC bias subtracted from every sample
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    center_offset: i32,

    /// Purity at or above which a block is flagged as a detection
    #[arg(long, default_value_t = 0.8)]
    threshold: f32,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let (samples, sample_rate) = read_wav(&args.input)?;
    let config = DetectorConfig::new(args.target, sample_rate as f32)
        .with_center_offset(args.center_offset)
        .with_window(args.window.into());
    let scores = scan(&samples, config, args.block_len)?;

    println!("# {} Hz, {} Hz sampling, {} samples per block", args.target, sample_rate, args.block_len);
    let mut hits = 0;
    for score in &scores {
        if score.exceeds(args.threshold) {
            hits += 1;
            println!("{score}\tDETECTED");
        } else {
            println!("{score}");
        }
    }
    log::info!("{hits} of {} blocks at or above {}", scores.len(), args.threshold);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let args = Args::parse_from(["tone-scan", "in.wav", "--target", "770"]);
        assert_eq!(args.target, 770.0);
        assert_eq!(args.block_len, 205);
        assert_eq!(args.window, ScanWindow::None);
        assert_eq!(args.center_offset, 0);
    }

    #[test]
    fn parses_window_and_negative_offset() {
        let args = Args::parse_from([
            "tone-scan",
            "in.wav",
            "--target",
            "1000",
            "--window",
            "exact-blackman",
            "--center-offset",
            "-64",
        ]);
        assert_eq!(args.window, ScanWindow::ExactBlackman);
        assert_eq!(args.center_offset, -64);
    }
}
