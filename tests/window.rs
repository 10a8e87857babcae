//! Tests for window weights and tables covering boundaries and the
//! detector's fallback when no block length is set.

use goertzel_purity::window::{
    exact_blackman, exact_blackman_inplace_stack, exact_blackman_weight, hamming,
    hamming_inplace_stack, hamming_weight,
};
use goertzel_purity::{Detector, DetectorConfig, WindowMode};

/// Helper to find the maximum element in a slice.
fn max(slice: &[f32]) -> f32 {
    slice.iter().copied().fold(f32::MIN, f32::max)
}

/// Allowed floating-point error when verifying closed-form values.
const EPSILON: f32 = 1e-5;

/// Hamming is 0.08 at both ends and peaks at 1.0 in the middle.
#[test]
fn hamming_edges_and_peak() {
    for &n in &[8usize, 256, 1024] {
        assert!((hamming_weight::<f32>(0, n) - 0.08).abs() < EPSILON);
        assert!((hamming_weight::<f32>(n, n) - 0.08).abs() < EPSILON);
        assert!((hamming_weight::<f32>(n / 2, n) - 1.0).abs() < EPSILON);
    }
    assert!(hamming(0).is_empty());
    let w = hamming(1024);
    assert!((max(&w) - 1.0).abs() < EPSILON);

    let mut buf = [0.0f32; 8];
    hamming_inplace_stack(&mut buf);
    assert!((buf[4] - 1.0).abs() < EPSILON);
}

/// Exact Blackman coefficients sum to one at the centre and leave a small
/// pedestal at the edges.
#[test]
fn exact_blackman_edges_and_peak() {
    let edge = 0.426_591 - 0.496_561 + 0.076_848;
    assert!((exact_blackman_weight::<f32>(0, 64) - edge).abs() < EPSILON);
    assert!((exact_blackman_weight::<f32>(64, 64) - edge).abs() < EPSILON);
    assert!((exact_blackman_weight::<f32>(32, 64) - 1.0).abs() < EPSILON);

    let w = exact_blackman(1024);
    assert!((max(&w) - 1.0).abs() < EPSILON);
    assert!(w.iter().all(|&x| x > 0.0));

    let mut buf = [0.0f32; 64];
    exact_blackman_inplace_stack(&mut buf);
    assert_eq!(&buf[..], &exact_blackman(64)[..]);
}

/// Tables are symmetric around the centre sample.
#[test]
fn tables_are_symmetric() {
    let n = 128;
    let h = hamming(n);
    let b = exact_blackman(n);
    for i in 1..n / 2 {
        assert!((h[i] - h[n - i]).abs() < EPSILON);
        assert!((b[i] - b[n - i]).abs() < EPSILON);
    }
}

/// The window reaches the recurrence at the index of each streamed sample.
#[test]
fn streamed_window_matches_pre_weighted_input() {
    let n = 32;
    let raw: Vec<i32> = (0..n).map(|i| ((i * 37) % 200) as i32 - 100).collect();
    let table = hamming(n);

    let cfg = DetectorConfig::new(1000.0, 8000.0).with_center_offset(0);
    let mut windowed = Detector::<f64>::new(cfg.with_window(WindowMode::Hamming).with_block_len(n)).unwrap();
    for &s in &raw {
        windowed.add_sample(s);
    }

    let mut filter = goertzel_purity::Goertzel::<f64>::new(1000.0, 8000.0).unwrap();
    for (&s, &w) in raw.iter().zip(table.iter()) {
        filter.step(s as f64 * w as f64);
    }
    let expected = filter.magnitude_squared();
    assert!((windowed.magnitude_squared() - expected).abs() < 1e-4 * expected.max(1.0));
}

/// Switching the window mid-block only affects later samples.
#[test]
fn window_change_is_not_retroactive() {
    let cfg = DetectorConfig::new(1000.0, 8000.0).with_block_len(16);
    let mut a: Detector = Detector::new(cfg).unwrap();
    let mut b: Detector = Detector::new(cfg).unwrap();
    for s in [200, 60, 180, 90] {
        a.add_sample(s);
        b.add_sample(s);
    }
    a.set_window(WindowMode::ExactBlackman);
    assert_eq!(a.delays(), b.delays());
    a.add_sample(250);
    b.add_sample(250);
    assert_ne!(a.delays(), b.delays());
}
