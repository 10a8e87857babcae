//! Minimal float abstraction so the detector can run in `f32` on an MCU or
//! in `f64` on a host, without pulling in `std` for transcendentals.

use libm::{atan2, atan2f, cos, cosf, floor, floorf, sin, sinf, sqrt, sqrtf};

// Minimal float trait for the generic detector (no_std, libm-backed)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + core::ops::AddAssign
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f32(x: f32) -> Self;
    /// Exact for every `i32` in `f64`; rounds to nearest above 2^24 in `f32`.
    fn from_i32(x: i32) -> Self;
    /// Lossy conversion of a sample count.
    fn from_usize(x: usize) -> Self;
    fn to_f32(self) -> f32;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    fn sqrt(self) -> Self;
    fn floor(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn pi() -> Self;
    fn is_finite(self) -> bool;
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x
    }
    fn from_i32(x: i32) -> Self {
        x as f32
    }
    fn from_usize(x: usize) -> Self {
        x as f32
    }
    fn to_f32(self) -> f32 {
        self
    }
    fn cos(self) -> Self {
        cosf(self)
    }
    fn sin(self) -> Self {
        sinf(self)
    }
    fn sqrt(self) -> Self {
        sqrtf(self)
    }
    fn floor(self) -> Self {
        floorf(self)
    }
    fn atan2(self, other: Self) -> Self {
        atan2f(self, other)
    }
    fn pi() -> Self {
        core::f32::consts::PI
    }
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x as f64
    }
    fn from_i32(x: i32) -> Self {
        x as f64
    }
    fn from_usize(x: usize) -> Self {
        x as f64
    }
    fn to_f32(self) -> f32 {
        self as f32
    }
    fn cos(self) -> Self {
        cos(self)
    }
    fn sin(self) -> Self {
        sin(self)
    }
    fn sqrt(self) -> Self {
        sqrt(self)
    }
    fn floor(self) -> Self {
        floor(self)
    }
    fn atan2(self, other: Self) -> Self {
        atan2(self, other)
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

/// Complex value of a single DFT bin.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }
    /// Squared modulus, `re² + im²`.
    #[inline(always)]
    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }
    #[inline(always)]
    pub fn norm(self) -> T {
        self.norm_sqr().sqrt()
    }
    /// Phase angle in radians, in `(-π, π]`.
    #[inline(always)]
    pub fn arg(self) -> T {
        self.im.atan2(self.re)
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;
