//! Goertzel recurrence: the two-tap resonator at the heart of the detector.
//! no_std compatible

use crate::config::validate_frequencies;
use crate::error::GoertzelError;
use crate::num::{Complex, Float};

/// Two-tap Goertzel resonator tuned to one angular frequency.
///
/// Holds only the derived coefficients and the delay line; offsets, windows
/// and energy bookkeeping live in [`crate::detector::Detector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goertzel<T: Float = f32> {
    coeff: T,
    cosine: T,
    sine: T,
    q1: T,
    q2: T,
}

impl<T: Float> Goertzel<T> {
    /// Tune to `target_freq` Hz at `sample_rate` Hz.
    pub fn new(target_freq: f32, sample_rate: f32) -> Result<Self, GoertzelError> {
        validate_frequencies(target_freq, sample_rate)?;
        let omega = T::from_f32(2.0) * T::pi() * T::from_f32(target_freq) / T::from_f32(sample_rate);
        Ok(Self::from_omega(omega))
    }

    /// Tune to a normalized angular frequency in radians per sample.
    pub fn from_omega(omega: T) -> Self {
        let cosine = omega.cos();
        Self {
            coeff: T::from_f32(2.0) * cosine,
            cosine,
            sine: omega.sin(),
            q1: T::zero(),
            q2: T::zero(),
        }
    }

    /// Advance the recurrence by one already offset-adjusted sample.
    /// s[n] = x[n] + 2·cos(ω)·s[n-1] - s[n-2]
    #[inline(always)]
    pub fn step(&mut self, x: T) {
        let q0 = self.coeff * self.q1 - self.q2 + x;
        self.q2 = self.q1;
        self.q1 = q0;
    }

    /// `q1² + q2² - coeff·q1·q2`, the power of the bin over the samples seen
    /// so far.
    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.q1 * self.q1 + self.q2 * self.q2 - self.coeff * self.q1 * self.q2
    }

    /// Complex bin value, `(q1 - q2·cos ω) + j·q2·sin ω`.
    pub fn real_imag(&self) -> Complex<T> {
        Complex::new(self.q1 - self.q2 * self.cosine, self.q2 * self.sine)
    }

    /// Zero the delay line, keeping the tuning.
    #[inline]
    pub fn reset(&mut self) {
        self.q1 = T::zero();
        self.q2 = T::zero();
    }

    /// `2·cos(ω)`
    pub fn coefficient(&self) -> T {
        self.coeff
    }

    /// `sin(ω)`
    pub fn sine_part(&self) -> T {
        self.sine
    }

    /// Current `(delay1, delay2)`.
    pub fn delays(&self) -> (T, T) {
        (self.q1, self.q2)
    }
}

/// Compute the magnitude at a single DFT bin using the Goertzel algorithm.
/// - `input`: real-valued signal
/// - `sample_rate`: sample rate in Hz
/// - `target_freq`: frequency to detect in Hz, snapped down to the nearest
///   bin of an `input.len()`-point DFT
pub fn goertzel_f32(input: &[f32], sample_rate: f32, target_freq: f32) -> Result<f32, GoertzelError> {
    if input.is_empty() {
        return Err(GoertzelError::EmptyInput);
    }
    validate_frequencies(target_freq, sample_rate)?;
    let n = input.len() as f32;
    let k = Float::floor(target_freq * n / sample_rate);
    let mut filter = Goertzel::<f32>::from_omega(2.0 * core::f32::consts::PI * k / n);
    for &x in input {
        filter.step(x);
    }
    Ok(Float::sqrt(filter.magnitude_squared()))
}
