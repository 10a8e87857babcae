use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use goertzel_purity::{Detector, DetectorConfig, WindowMode};
use std::hint::black_box;

fn adc_block(len: usize) -> Vec<i32> {
    (0..len)
        .map(|i| 128 + (100.0 * (2.0 * std::f32::consts::PI * i as f32 / 8.0).sin()) as i32)
        .collect()
}

fn detector(window: WindowMode, len: usize) -> Detector {
    let cfg = DetectorConfig::new(1000.0, 8000.0)
        .with_window(window)
        .with_block_len(len);
    Detector::new(cfg).unwrap()
}

fn bench_streaming(c: &mut Criterion) {
    let mut g = c.benchmark_group("streaming");
    for &size in &[205usize, 1024, 4096] {
        let block = adc_block(size);
        g.bench_with_input(BenchmarkId::new("add_sample", size), &block, |b, block| {
            let mut det = detector(WindowMode::None, size);
            b.iter(|| {
                for &s in block {
                    det.add_sample(black_box(s));
                }
                black_box(det.detect())
            });
        });
        g.bench_with_input(BenchmarkId::new("batch", size), &block, |b, block| {
            let mut det = detector(WindowMode::None, size);
            b.iter(|| black_box(det.detect_batch(black_box(block.as_slice()))));
        });
    }
    g.finish();
}

fn bench_windowed(c: &mut Criterion) {
    let mut g = c.benchmark_group("windowed");
    for &size in &[205usize, 1024] {
        let block = adc_block(size);
        for (name, mode) in [
            ("hamming", WindowMode::Hamming),
            ("exact_blackman", WindowMode::ExactBlackman),
        ] {
            g.bench_with_input(BenchmarkId::new(name, size), &block, |b, block| {
                let mut det = detector(mode, size);
                b.iter(|| black_box(det.detect_batch(black_box(block.as_slice()))));
            });
        }
    }
    g.finish();
}

fn bench_f64(c: &mut Criterion) {
    let block = adc_block(1024);
    c.bench_function("batch_f64_1024", |b| {
        let mut det =
            Detector::<f64>::new(DetectorConfig::new(1000.0, 8000.0)).unwrap();
        b.iter(|| black_box(det.detect_batch(black_box(block.as_slice()))));
    });
}

criterion_group!(benches, bench_streaming, bench_windowed, bench_f64);
criterion_main!(benches);
