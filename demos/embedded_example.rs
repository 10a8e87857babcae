//! Embedded/MCU example for goertzel-purity
//!
//! Uses only stack buffers: a const-generic window table and a fixed-size
//! capture buffer scored with `detect_batch`.

use goertzel_purity::window::hamming_inplace_stack;
use goertzel_purity::{Detector, DetectorConfig, WindowMode};

const N: usize = 64;

fn main() {
    println!("=== goertzel-purity Embedded Example ===\n");

    // 1. Capture buffer as a 10-bit ADC centred on 512 would fill it
    let mut capture = [0u16; N];
    for (i, s) in capture.iter_mut().enumerate() {
        let phase = 2.0 * std::f32::consts::PI * 8.0 * i as f32 / N as f32;
        *s = (512.0 + 300.0 * phase.sin()) as u16;
    }

    // 2. Unwindowed score
    let cfg = DetectorConfig::new(1000.0, 8000.0).with_center_offset(512);
    let mut det: Detector = match Detector::new(cfg) {
        Ok(det) => det,
        Err(e) => {
            println!("   configuration rejected: {e}");
            return;
        }
    };
    if let Ok(purity) = det.detect_batch(&capture) {
        println!("1. Rectangular purity: {purity:.3}");
    }

    // 3. Same block through a Hamming window
    det.set_window(WindowMode::Hamming);
    det.set_block_len(N);
    if let Ok(purity) = det.detect_batch(&capture) {
        println!("2. Hamming purity:     {purity:.3}");
    }

    // 4. Precomputed weights for callers that window outside the detector
    let mut weights = [0.0f32; N];
    hamming_inplace_stack(&mut weights);
    println!("3. Hamming table: first {:.3}, centre {:.3}", weights[0], weights[N / 2]);
}
