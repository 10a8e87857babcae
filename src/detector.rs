//! Streaming single-bin tone detector.
//!
//! A [`Detector`] accumulates raw converter samples one at a time (or a whole
//! slice at once) and, on demand, turns the Goertzel power of its target bin
//! into a *purity* score: the fraction of the block's energy that sits at the
//! target frequency. Every detection call doubles as a block boundary, so a
//! sampling loop only ever needs `add_sample` and `detect`.
//!
//! ```
//! use goertzel_purity::{Detector, DetectorConfig};
//!
//! let mut det: Detector = Detector::new(DetectorConfig::new(1000.0, 8000.0)).unwrap();
//! for raw in [128, 199, 228, 199, 128, 57, 28, 57] {
//!     det.add_sample(raw);
//! }
//! let purity = det.detect().unwrap();
//! assert!((purity - 1.0).abs() < 1e-3);
//! assert_eq!(det.sample_count(), 0);
//! ```

use crate::config::DetectorConfig;
use crate::error::GoertzelError;
use crate::goertzel::Goertzel;
use crate::num::{Complex, Float};
use crate::window::WindowMode;

/// Stateful Goertzel detector with center-offset removal, optional windowing
/// and energy-normalized output.
#[derive(Debug, Clone, PartialEq)]
pub struct Detector<T: Float = f32> {
    target_freq: f32,
    sample_rate: f32,
    center_offset: i32,
    filter: Goertzel<T>,
    sample_count: usize,
    sum_of_squares: T,
    block_len: usize,
    window: WindowMode,
}

impl<T: Float> Detector<T> {
    /// Build a detector in its zero state.
    pub fn new(config: DetectorConfig) -> Result<Self, GoertzelError> {
        config.validate()?;
        let filter = Goertzel::new(config.target_freq, config.sample_rate)?;
        vlog!(
            debug,
            "goertzel: target {} Hz at {} Hz, offset {}, window {:?}, block {}",
            config.target_freq,
            config.sample_rate,
            config.center_offset,
            config.window,
            config.block_len
        );
        Ok(Self {
            target_freq: config.target_freq,
            sample_rate: config.sample_rate,
            center_offset: config.center_offset,
            filter,
            sample_count: 0,
            sum_of_squares: T::zero(),
            block_len: config.block_len,
            window: config.window,
        })
    }

    /// Retune to a new frequency pair and center offset, then reset.
    ///
    /// On error the detector keeps its previous tuning and accumulated state.
    pub fn configure(
        &mut self,
        target_freq: f32,
        sample_rate: f32,
        center_offset: i32,
    ) -> Result<(), GoertzelError> {
        self.filter = Goertzel::new(target_freq, sample_rate)?;
        self.target_freq = target_freq;
        self.sample_rate = sample_rate;
        self.center_offset = center_offset;
        self.reset();
        vlog!(
            debug,
            "goertzel: retuned to {} Hz at {} Hz, offset {}",
            self.target_freq,
            self.sample_rate,
            self.center_offset
        );
        if self.target_freq > self.sample_rate / 2.0 {
            vlog!(
                warn,
                "goertzel: target {} Hz is above Nyquist for {} Hz sampling",
                self.target_freq,
                self.sample_rate
            );
        }
        Ok(())
    }

    /// Apply every field of `config`, including window and block length.
    pub fn reconfigure(&mut self, config: DetectorConfig) -> Result<(), GoertzelError> {
        config.validate()?;
        self.configure(config.target_freq, config.sample_rate, config.center_offset)?;
        self.window = config.window;
        self.block_len = config.block_len;
        Ok(())
    }

    /// Set the block length used by the window phase term. Does not cap
    /// ingestion.
    pub fn set_block_len(&mut self, block_len: usize) {
        self.block_len = block_len;
    }

    /// Select the window for subsequent samples.
    pub fn set_window(&mut self, window: WindowMode) {
        self.window = window;
    }

    /// Zero the delay line, the energy sum and the sample count.
    #[inline]
    pub fn reset(&mut self) {
        self.filter.reset();
        self.sum_of_squares = T::zero();
        self.sample_count = 0;
    }

    /// Feed one raw sample.
    ///
    /// The energy sum always uses the unwindowed offset-adjusted value; only
    /// the recurrence input is weighted.
    #[inline]
    pub fn add_sample(&mut self, raw: i32) {
        let x = T::from_i32(raw) - T::from_i32(self.center_offset);
        self.sum_of_squares += x * x;
        let x = match self.window.weight::<T>(self.sample_count, self.block_len) {
            Some(w) => x * w,
            None => x,
        };
        self.filter.step(x);
        self.sample_count += 1;
    }

    /// Feed one raw sample unless `max_count` samples are already in the
    /// block. Returns whether the sample was taken.
    #[inline]
    pub fn add_sample_with_check(&mut self, raw: i32, max_count: usize) -> bool {
        if self.sample_count >= max_count {
            return false;
        }
        self.add_sample(raw);
        true
    }

    /// Goertzel power of the target bin over the current block.
    pub fn magnitude_squared(&self) -> T {
        self.filter.magnitude_squared()
    }

    /// Normalize `magnitude_squared` into `2·|X|² / (count·Σx²)`.
    ///
    /// Uses the energy accumulated since the last reset.
    pub fn purity(&self, magnitude_squared: T, count: usize) -> Result<T, GoertzelError> {
        if count == 0 {
            return Err(GoertzelError::EmptyBlock);
        }
        if self.sum_of_squares == T::zero() {
            return Err(GoertzelError::SilentBlock);
        }
        Ok(T::from_f32(2.0) * magnitude_squared / (T::from_usize(count) * self.sum_of_squares))
    }

    /// Score the samples streamed since the last reset, then reset.
    ///
    /// The detector is reset whether or not a score could be computed.
    pub fn detect(&mut self) -> Result<T, GoertzelError> {
        let count = self.sample_count;
        self.detect_with_len(count)
    }

    /// Like [`Detector::detect`] but divides by `n` instead of the number of
    /// samples actually streamed.
    pub fn detect_with_len(&mut self, n: usize) -> Result<T, GoertzelError> {
        let purity = self.purity(self.magnitude_squared(), n);
        self.reset();
        if let Err(_e) = purity {
            vlog!(debug, "goertzel: no score for {} Hz block: {}", self.target_freq, _e);
        }
        purity
    }

    /// Score a whole block in one call.
    ///
    /// Resets, streams every element through [`Detector::add_sample`] (so
    /// offset and window apply exactly as when streaming), scores with the
    /// slice length as divisor and resets again. Pass `&buf[..n]` to use only
    /// the first `n` samples of a larger buffer.
    pub fn detect_batch<S>(&mut self, samples: &[S]) -> Result<T, GoertzelError>
    where
        S: Copy + Into<i32>,
    {
        self.reset();
        for &s in samples {
            self.add_sample(s.into());
        }
        self.detect_with_len(samples.len())
    }

    /// Complex value of the target bin over the current block.
    pub fn real_imag(&self) -> Complex<T> {
        self.filter.real_imag()
    }

    /// `sqrt(magnitude_squared())`
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn target_freq(&self) -> f32 {
        self.target_freq
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn center_offset(&self) -> i32 {
        self.center_offset
    }

    pub fn sum_of_squares(&self) -> T {
        self.sum_of_squares
    }

    pub fn coefficient(&self) -> T {
        self.filter.coefficient()
    }

    pub fn sine_part(&self) -> T {
        self.filter.sine_part()
    }

    /// Current `(delay1, delay2)` of the recurrence.
    pub fn delays(&self) -> (T, T) {
        self.filter.delays()
    }

    pub fn block_len(&self) -> usize {
        self.block_len
    }

    pub fn window(&self) -> WindowMode {
        self.window
    }
}


#[cfg(all(feature = "internal-tests", test))]
mod prop_tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn window_strategy() -> impl Strategy<Value = WindowMode> {
        prop_oneof![
            Just(WindowMode::None),
            Just(WindowMode::Hamming),
            Just(WindowMode::ExactBlackman),
        ]
    }

    proptest! {
        #[test]
        fn prop_batch_equals_streaming(
            ref samples in proptest::collection::vec(0i32..4096, 1..256),
            window in window_strategy(),
            block_len in 0usize..300,
            offset in 0i32..4096,
        ) {
            let cfg = DetectorConfig::new(1000.0, 8000.0)
                .with_center_offset(offset)
                .with_window(window)
                .with_block_len(block_len);
            let mut streaming: Detector = Detector::new(cfg).unwrap();
            let mut batch = streaming.clone();
            for &s in samples.iter() {
                streaming.add_sample(s);
            }
            prop_assert_eq!(streaming.detect(), batch.detect_batch(samples));
            prop_assert_eq!(streaming.sample_count(), 0);
            prop_assert_eq!(batch.sample_count(), 0);
        }

        #[test]
        fn prop_unwindowed_purity_is_bounded(ref samples in proptest::collection::vec(-2048i32..2048, 8..128)) {
            let mut det = Detector::<f64>::new(DetectorConfig::new(440.0, 8000.0).with_center_offset(0)).unwrap();
            if let Ok(p) = det.detect_batch(samples) {
                // Parseval bounds one bin pair by the total energy.
                prop_assert!(p >= -1e-9);
                prop_assert!(p <= 2.0 + 1e-9);
            }
        }
    }

    #[test]
    fn purity_is_amplitude_invariant() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 64;
        for _ in 0..8 {
            let amplitude: f64 = rng.gen_range(20.0..2000.0);
            let samples: Vec<i32> = (0..n)
                .map(|i| {
                    2048 + libm::round(amplitude * libm::sin(2.0 * core::f64::consts::PI * 4.0 * i as f64 / n as f64)) as i32
                })
                .collect();
            let mut det = Detector::<f64>::new(
                DetectorConfig::new(400.0, 6400.0).with_center_offset(2048),
            )
            .unwrap();
            let p = det.detect_batch(&samples).unwrap();
            assert!((p - 1.0).abs() < 1e-2, "amplitude {amplitude}: purity {p}");
        }
    }
}
