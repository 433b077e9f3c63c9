//! A complex number and n-th root extraction.

use core::f64::consts::TAU;
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A complex number in rectangular form.
///
/// This is an immutable value type; arithmetic takes and returns it by
/// value. The phase convention is the principal value in (−π, π].
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    /// The real part.
    pub re: f64,
    /// The imaginary part.
    pub im: f64,
}

impl Complex {
    /// The additive identity, 0 + 0i.
    pub const ZERO: Complex = Complex::new(0., 0.);

    /// The multiplicative identity, 1 + 0i.
    pub const ONE: Complex = Complex::new(1., 0.);

    /// The imaginary unit, 0 + 1i.
    pub const I: Complex = Complex::new(0., 1.);

    /// Create a new complex number.
    #[inline]
    pub const fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /// A real number as a complex number with zero imaginary part.
    #[inline]
    pub const fn from_real(re: f64) -> Complex {
        Complex { re, im: 0. }
    }

    /// A complex number from its magnitude and phase.
    ///
    /// With `phase` at zero the result lies on the positive real axis, and
    /// at π/2 on the positive imaginary axis.
    #[inline]
    pub fn from_polar(magnitude: f64, phase: f64) -> Complex {
        let (sin, cos) = phase.sin_cos();
        Complex::new(magnitude * cos, magnitude * sin)
    }

    /// Magnitude (absolute value) of the number.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Magnitude squared.
    ///
    /// Cheaper than [`Complex::magnitude`] when only comparisons are needed.
    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Phase (argument) of the number, in (−π, π].
    #[inline]
    pub fn phase(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// The complex conjugate.
    #[inline]
    pub const fn conj(self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    /// Is this number finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Is this number NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Equality within an absolute tolerance.
    ///
    /// True when the distance to `other` in the complex plane is at most
    /// `epsilon`.
    #[inline]
    pub fn approx_eq(self, other: Complex, epsilon: f64) -> bool {
        (self - other).magnitude() <= epsilon
    }

    /// The `n` distinct n-th roots of this number, as an iterator.
    ///
    /// The k-th root has magnitude `|v|^(1/n)` and phase `(arg(v) + 2πk)/n`,
    /// yielded for k ascending from 0. Roots are only defined up to an n-th
    /// root of unity; callers that combine roots of two related numbers
    /// (as the Cardano solver does) must pick the pairing themselves.
    ///
    /// `n` must be at least 1; this is a precondition, not validated.
    ///
    /// ```
    /// use cubist::Complex;
    ///
    /// let roots: Vec<Complex> = Complex::new(0.0, 16.0).nth_roots(4).collect();
    /// assert_eq!(roots.len(), 4);
    /// for root in roots {
    ///     assert!((root * root * root * root).approx_eq(Complex::new(0.0, 16.0), 1e-12));
    /// }
    /// ```
    #[inline]
    pub fn nth_roots(self, n: u32) -> NthRoots {
        NthRoots {
            magnitude_root: self.magnitude().powf(1. / f64::from(n)),
            phase: self.phase(),
            n,
            k: 0,
        }
    }

    /// The three cube roots, as a fixed-size array.
    ///
    /// Same as `nth_roots(3)`, in the same order.
    #[inline]
    pub fn cube_roots(self) -> [Complex; 3] {
        let magnitude_root = self.magnitude().cbrt();
        let phase = self.phase();
        core::array::from_fn(|k| {
            Complex::from_polar(magnitude_root, (phase + TAU * k as f64) / 3.)
        })
    }
}

/// Iterator over the n-th roots of a complex number.
///
/// Returned by [`Complex::nth_roots`].
#[derive(Clone, Debug)]
pub struct NthRoots {
    magnitude_root: f64,
    phase: f64,
    n: u32,
    k: u32,
}

impl Iterator for NthRoots {
    type Item = Complex;

    #[inline]
    fn next(&mut self) -> Option<Complex> {
        if self.k == self.n {
            return None;
        }
        let theta = (self.phase + TAU * f64::from(self.k)) / f64::from(self.n);
        self.k += 1;
        Some(Complex::from_polar(self.magnitude_root, theta))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.n - self.k) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NthRoots {}

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from(v: (f64, f64)) -> Complex {
        Complex { re: v.0, im: v.1 }
    }
}

impl From<Complex> for (f64, f64) {
    #[inline]
    fn from(v: Complex) -> (f64, f64) {
        (v.re, v.im)
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Complex {
        Complex::from_real(re)
    }
}

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, other: Complex) -> Complex {
        Complex {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, other: Complex) {
        *self = *self + other;
    }
}

impl Sub for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, other: Complex) -> Complex {
        Complex {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, other: Complex) {
        *self = *self - other;
    }
}

impl Mul for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, other: Complex) -> Complex {
        Complex {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, other: Complex) {
        *self = *self * other;
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, other: f64) -> Complex {
        Complex {
            re: self.re * other,
            im: self.im * other,
        }
    }
}

impl MulAssign<f64> for Complex {
    #[inline]
    fn mul_assign(&mut self, other: f64) {
        *self = *self * other;
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn mul(self, other: Complex) -> Complex {
        other * self
    }
}

impl Div for Complex {
    type Output = Complex;

    /// Complex division, via multiplication by the conjugate.
    ///
    /// Note: division by zero yields NaN components rather than panicking.
    #[inline]
    fn div(self, other: Complex) -> Complex {
        let denom = other.magnitude_squared();
        Complex {
            re: (self.re * other.re + self.im * other.im) / denom,
            im: (self.im * other.re - self.re * other.im) / denom,
        }
    }
}

impl DivAssign for Complex {
    #[inline]
    fn div_assign(&mut self, other: Complex) {
        *self = *self / other;
    }
}

impl Div<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn div(self, other: f64) -> Complex {
        Complex {
            re: self.re / other,
            im: self.im / other,
        }
    }
}

impl DivAssign<f64> for Complex {
    #[inline]
    fn div_assign(&mut self, other: f64) {
        *self = *self / other;
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.re, formatter)?;
        if self.im.is_sign_negative() {
            formatter.write_str(" - ")?;
            fmt::Display::fmt(&-self.im, formatter)?;
        } else {
            formatter.write_str(" + ")?;
            fmt::Display::fmt(&self.im, formatter)?;
        }
        formatter.write_str("i")
    }
}
