//! Per-sample window weights applied to the recurrence input.
//!
//! The detector evaluates one weight per ingested sample instead of holding a
//! table, so the functions here are pure in `(i, n)`. Table generators are
//! provided for callers that would rather precompute.

use crate::num::Float;

/// Leading coefficient of the Hamming window.
const HAMMING_A0: f32 = 0.54;
/// Cosine coefficient of the Hamming window.
const HAMMING_A1: f32 = 0.46;

/// Constant term of the exact Blackman window.
const EXACT_BLACKMAN_A0: f32 = 0.426_591;
/// First cosine coefficient of the exact Blackman window.
const EXACT_BLACKMAN_A1: f32 = 0.496_561;
/// Second cosine coefficient of the exact Blackman window.
const EXACT_BLACKMAN_A2: f32 = 0.076_848;

/// Window applied to each offset-adjusted sample before it enters the
/// recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    #[default]
    None,
    Hamming,
    ExactBlackman,
}

impl WindowMode {
    /// Build a mode from two independent toggles. Hamming wins when both are
    /// set.
    pub fn from_flags(hamming: bool, exact_blackman: bool) -> Self {
        if hamming {
            WindowMode::Hamming
        } else if exact_blackman {
            WindowMode::ExactBlackman
        } else {
            WindowMode::None
        }
    }

    /// Weight for sample `i` of a block of length `n`.
    ///
    /// Returns `None` when no window is selected or when `n` is zero, in which
    /// case the sample is used unweighted.
    #[inline]
    pub fn weight<T: Float>(self, i: usize, n: usize) -> Option<T> {
        if n == 0 {
            return None;
        }
        match self {
            WindowMode::None => None,
            WindowMode::Hamming => Some(hamming_weight(i, n)),
            WindowMode::ExactBlackman => Some(exact_blackman_weight(i, n)),
        }
    }
}

#[inline]
fn phase<T: Float>(i: usize, n: usize) -> T {
    T::from_f32(2.0) * T::pi() * T::from_usize(i) / T::from_usize(n)
}

/// Hamming weight `0.54 - 0.46·cos(2πi/n)`. `n` must be non-zero.
#[inline]
pub fn hamming_weight<T: Float>(i: usize, n: usize) -> T {
    T::from_f32(HAMMING_A0) - T::from_f32(HAMMING_A1) * phase::<T>(i, n).cos()
}

/// Exact Blackman weight
/// `0.426591 - 0.496561·cos(2πi/n) + 0.076848·cos(4πi/n)`. `n` must be
/// non-zero.
#[inline]
pub fn exact_blackman_weight<T: Float>(i: usize, n: usize) -> T {
    let x = phase::<T>(i, n);
    T::from_f32(EXACT_BLACKMAN_A0) - T::from_f32(EXACT_BLACKMAN_A1) * x.cos()
        + T::from_f32(EXACT_BLACKMAN_A2) * (T::from_f32(2.0) * x).cos()
}

/// Generate a Hamming table of length `len`.
pub fn hamming(len: usize) -> alloc::vec::Vec<f32> {
    (0..len).map(|i| hamming_weight(i, len)).collect()
}

/// Generate an exact Blackman table of length `len`.
pub fn exact_blackman(len: usize) -> alloc::vec::Vec<f32> {
    (0..len).map(|i| exact_blackman_weight(i, len)).collect()
}

/// MCU/stack-only, const-generic, in-place Hamming table (no heap)
pub fn hamming_inplace_stack<const N: usize>(out: &mut [f32; N]) {
    for (i, w) in out.iter_mut().enumerate() {
        *w = hamming_weight(i, N);
    }
}

/// MCU/stack-only, const-generic, in-place exact Blackman table (no heap)
pub fn exact_blackman_inplace_stack<const N: usize>(out: &mut [f32; N]) {
    for (i, w) in out.iter_mut().enumerate() {
        *w = exact_blackman_weight(i, N);
    }
}
