//! Demonstrates enabling verbose logging for goertzel-purity.
use goertzel_purity::{Detector, DetectorConfig};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut det: Detector = Detector::new(DetectorConfig::new(1000.0, 8000.0)).unwrap();
    det.configure(5000.0, 8000.0, 128).unwrap();

    // An all-centre block has no energy and is logged as unscorable.
    let _ = det.detect_batch(&[128u8; 16]);
}
