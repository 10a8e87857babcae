//! Streaming Goertzel example.
//!
//! Simulates an 8-bit converter sampling a 1 kHz tone and scores fixed-size
//! blocks as they fill, the way a sampling loop would.

use goertzel_purity::{Detector, DetectorConfig};

const SAMPLE_RATE: f32 = 8000.0;
const BLOCK: usize = 80;

fn adc(i: usize, freq: f32) -> i32 {
    let phase = 2.0 * std::f32::consts::PI * freq * i as f32 / SAMPLE_RATE;
    128 + (100.0 * phase.sin()).round() as i32
}

fn main() {
    println!("=== Streaming Goertzel example ===\n");

    let mut det: Detector = Detector::new(DetectorConfig::new(1000.0, SAMPLE_RATE))
        .expect("valid configuration");

    // Tone switches from 1 kHz to 1.5 kHz halfway through.
    for block in 0..6 {
        let freq = if block < 3 { 1000.0 } else { 1500.0 };
        let mut i = block * BLOCK;
        while det.add_sample_with_check(adc(i, freq), BLOCK) {
            i += 1;
        }
        match det.detect() {
            Ok(purity) => println!("block {block} ({freq} Hz): purity {purity:.3}"),
            Err(e) => println!("block {block}: {e}"),
        }
    }
}
