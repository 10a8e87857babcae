//! Explicit detector configuration.

use crate::error::GoertzelError;
use crate::window::WindowMode;

/// Mid-scale of an 8-bit converter, the usual bias of a single-supply ADC.
pub const DEFAULT_CENTER_OFFSET: i32 = 128;

/// Everything a [`crate::detector::Detector`] needs to start accumulating.
///
/// ```
/// use goertzel_purity::{DetectorConfig, WindowMode};
///
/// let cfg = DetectorConfig::new(1000.0, 8000.0)
///     .with_center_offset(512)
///     .with_window(WindowMode::Hamming)
///     .with_block_len(205);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    /// Frequency to measure, in Hz.
    pub target_freq: f32,
    /// Rate at which samples are taken, in Hz.
    pub sample_rate: f32,
    /// DC bias subtracted from every raw sample.
    pub center_offset: i32,
    pub window: WindowMode,
    /// Expected samples per block, used only for the window phase. Zero
    /// disables windowing.
    pub block_len: usize,
}

impl DetectorConfig {
    /// Unwindowed configuration with [`DEFAULT_CENTER_OFFSET`].
    pub fn new(target_freq: f32, sample_rate: f32) -> Self {
        Self {
            target_freq,
            sample_rate,
            center_offset: DEFAULT_CENTER_OFFSET,
            window: WindowMode::None,
            block_len: 0,
        }
    }

    pub fn with_center_offset(mut self, center_offset: i32) -> Self {
        self.center_offset = center_offset;
        self
    }

    pub fn with_window(mut self, window: WindowMode) -> Self {
        self.window = window;
        self
    }

    pub fn with_block_len(mut self, block_len: usize) -> Self {
        self.block_len = block_len;
        self
    }

    /// Reject sampling frequencies that would make the derived coefficients
    /// NaN or infinite.
    pub fn validate(&self) -> Result<(), GoertzelError> {
        validate_frequencies(self.target_freq, self.sample_rate)
    }

    /// Nyquist frequency for this sampling rate.
    pub fn nyquist(&self) -> f32 {
        self.sample_rate / 2.0
    }
}

pub(crate) fn validate_frequencies(target_freq: f32, sample_rate: f32) -> Result<(), GoertzelError> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(GoertzelError::InvalidSampleRate);
    }
    if !target_freq.is_finite() {
        return Err(GoertzelError::InvalidTargetFrequency);
    }
    Ok(())
}
