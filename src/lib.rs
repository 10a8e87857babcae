//! # goertzel-purity - streaming single-bin tone detection for Rust
//!
//! Measures how much of a sampled signal's energy sits at one target
//! frequency, at a cost of a handful of multiply-accumulates per sample.
//! Built for sampling loops on microcontrollers and anywhere else a full FFT
//! is more than the job needs.
//!
//! ## Features
//!
//! - **Streaming and batch input**: feed raw converter samples one at a time
//!   or score a whole buffer in one call, with identical results
//! - **Center-offset removal** for single-supply ADCs
//! - **Hamming and exact Blackman windowing**, evaluated per sample
//! - **Purity score**: Goertzel power normalized by block energy, so it does
//!   not depend on signal amplitude
//! - **`f32` or `f64`** precision through the [`Float`] trait, `no_std` via
//!   `libm`
//!
//! ## Cargo Features
//!
//! - `std` (default): implement `std::error::Error` for [`GoertzelError`]
//! - `verbose-logging`: emit `log` records on (re)configuration and on
//!   blocks that cannot be scored
//! - `internal-tests`: property tests (`proptest`, `rand`)
//!
//! ## Example
//!
//! ```
//! use goertzel_purity::{Detector, DetectorConfig, WindowMode};
//!
//! let cfg = DetectorConfig::new(1000.0, 8000.0)
//!     .with_window(WindowMode::Hamming)
//!     .with_block_len(64);
//! let mut det: Detector = Detector::new(cfg).unwrap();
//! let block: Vec<i32> = (0..64)
//!     .map(|i| 128 + (100.0 * (core::f32::consts::PI * i as f32 / 4.0).sin()) as i32)
//!     .collect();
//! let purity = det.detect_batch(&block).unwrap();
//! // Hamming scales an in-bin tone by its mean weight, 0.54.
//! assert!((purity - 0.54 * 0.54).abs() < 0.02);
//! ```
//!
//! Run the demos with:
//! ```bash
//! cargo run --example streaming
//! cargo run --example embedded_example
//! cargo run --example verbose_logging --features verbose-logging
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Compiles to nothing unless `verbose-logging` is enabled.
macro_rules! vlog {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "verbose-logging")]
        {
            log::$level!($($arg)+);
        }
    };
}

/// Float abstraction and complex bin values
pub mod num;

/// Error type for configuration and scoring
pub mod error;

/// Explicit detector configuration
pub mod config;

/// Window functions
///
/// Hamming and exact Blackman weights applied per sample.
pub mod window;

/// Goertzel algorithm
///
/// The two-tap recurrence and a one-shot bin magnitude helper.
pub mod goertzel;

/// Streaming detector
///
/// Offset removal, windowing, energy bookkeeping and purity scoring around
/// the recurrence.
pub mod detector;

pub use config::{DetectorConfig, DEFAULT_CENTER_OFFSET};
pub use detector::Detector;
pub use error::GoertzelError;
pub use goertzel::{goertzel_f32, Goertzel};
pub use num::{Complex, Complex32, Complex64, Float};
pub use window::WindowMode;
