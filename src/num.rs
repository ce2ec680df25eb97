//! Scalar and complex number primitives shared by every transform.
//!
//! Trigonometry and square roots are routed through `libm` so the crate
//! works without `std`.

use core::f32::consts::PI as PI32;

/// Minimal float trait for the generic transforms (no_std, libm-backed).
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
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f32(x: f32) -> Self;
    /// Lossy conversion used for runtime configuration values.
    fn from_f64(x: f64) -> Self;
    /// Attempt to convert a `usize` into the floating-point type.
    /// Returns `None` if the value cannot be represented exactly.
    fn from_usize(x: usize) -> Option<Self>;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn pi() -> Self;
    /// Machine epsilon of the type.
    fn epsilon() -> Self;
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        self * a + b
    }
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
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: usize = 1usize << 24;
        if x < MAX_EXACT {
            Some(x as f32)
        } else {
            None
        }
    }
    fn cos(self) -> Self {
        libm::cosf(self)
    }
    fn sin(self) -> Self {
        libm::sinf(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    fn pi() -> Self {
        PI32
    }
    fn epsilon() -> Self {
        f32::EPSILON
    }
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        libm::fmaf(self, a, b)
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
    fn from_f64(x: f64) -> Self {
        x
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: usize = 1usize << 53;
        if x < MAX_EXACT {
            Some(x as f64)
        } else {
            None
        }
    }
    fn cos(self) -> Self {
        libm::cos(self)
    }
    fn sin(self) -> Self {
        libm::sin(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
    fn epsilon() -> Self {
        f64::EPSILON
    }
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        libm::fma(self, a, b)
    }
}

/// Convert an index into `T`, saturating through `f64` for values beyond the
/// exactly representable range.
#[inline]
pub(crate) fn index_to_float<T: Float>(i: usize) -> T {
    T::from_usize(i).unwrap_or_else(|| T::from_f64(i as f64))
}

/// The angle `2π·num/den`.
#[inline]
pub(crate) fn turn_fraction<T: Float>(num: usize, den: usize) -> T {
    let two = T::one() + T::one();
    two * T::pi() * index_to_float::<T>(num) / index_to_float::<T>(den)
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Default for Complex<T> {
    fn default() -> Self {
        Self::zero()
    }
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
    pub fn one() -> Self {
        Self {
            re: T::one(),
            im: T::zero(),
        }
    }
    /// A purely real value.
    pub fn from_real(re: T) -> Self {
        Self { re, im: T::zero() }
    }
    /// `exp(i·theta)`
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }
    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
    #[inline(always)]
    pub fn scale(self, factor: T) -> Self {
        Self {
            re: self.re * factor,
            im: self.im * factor,
        }
    }
    #[inline(always)]
    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }
    pub fn norm(self) -> T {
        self.norm_sqr().sqrt()
    }
    pub fn is_zero(self) -> bool {
        self.re == T::zero() && self.im == T::zero()
    }
    /// Divide by a non-zero complex number.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn div(self, other: Self) -> Self {
        let denom = other.norm_sqr();
        Self {
            re: (self.re * other.re + self.im * other.im) / denom,
            im: (self.im * other.re - self.re * other.im) / denom,
        }
    }
}

impl<T: Float> core::ops::Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> core::ops::Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl<T: Float> core::ops::AddAssign for Complex<T> {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        self.re += other.re;
        self.im += other.im;
    }
}

impl<T: Float> core::ops::Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}

impl<T: Float> core::ops::Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re.mul_add(other.re, -(self.im * other.im)),
            im: self.re.mul_add(other.im, self.im * other.re),
        }
    }
}

impl<T: Float> From<(T, T)> for Complex<T> {
    fn from((re, im): (T, T)) -> Self {
        Self { re, im }
    }
}

impl<T: Float> From<Complex<T>> for (T, T) {
    fn from(c: Complex<T>) -> Self {
        (c.re, c.im)
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;
