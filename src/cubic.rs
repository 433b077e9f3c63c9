//! Cubic equations, their root sets, and solver errors.

use core::fmt;
use core::ops::Index;

use arrayvec::ArrayVec;

use crate::{solve_cardano, solve_vieta, Complex};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A cubic equation `a·x³ + b·x² + c·x + d = 0` with real coefficients.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cubic {
    /// Coefficient of the x³ term.
    pub a: f64,
    /// Coefficient of the x² term.
    pub b: f64,
    /// Coefficient of the x term.
    pub c: f64,
    /// Constant term.
    pub d: f64,
}

impl Cubic {
    /// Create a new cubic equation from its coefficients, highest degree
    /// first.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Cubic {
        Cubic { a, b, c, d }
    }

    /// Evaluate the polynomial at a complex argument, by Horner's scheme.
    #[inline]
    pub fn eval(self, x: Complex) -> Complex {
        let mut acc = Complex::from_real(self.a);
        acc = acc * x + Complex::from_real(self.b);
        acc = acc * x + Complex::from_real(self.c);
        acc * x + Complex::from_real(self.d)
    }

    /// Solve by Cardano's substitution. See [`solve_cardano`].
    ///
    /// # Errors
    ///
    /// As for [`solve_cardano`].
    #[inline]
    pub fn roots_cardano(self, epsilon: f64) -> Result<CubicRoots, SolveError> {
        solve_cardano(self.a, self.b, self.c, self.d, epsilon)
    }

    /// Solve by Vieta's substitution. See [`solve_vieta`].
    ///
    /// # Errors
    ///
    /// As for [`solve_vieta`].
    #[inline]
    pub fn roots_vieta(self, epsilon: f64) -> Result<CubicRoots, SolveError> {
        solve_vieta(self.a, self.b, self.c, self.d, epsilon)
    }

    /// Common argument checks for both solvers.
    pub(crate) fn validate(&self, epsilon: f64) -> Result<(), SolveError> {
        if epsilon <= 0. {
            return Err(SolveError::NonPositiveEpsilon(epsilon));
        }
        if self.a.abs() < epsilon {
            return Err(SolveError::DegenerateCubic(self.a));
        }
        Ok(())
    }
}

impl From<[f64; 4]> for Cubic {
    #[inline]
    fn from(coeffs: [f64; 4]) -> Cubic {
        Cubic::new(coeffs[0], coeffs[1], coeffs[2], coeffs[3])
    }
}

/// The three roots of a cubic equation.
///
/// Mathematically the roots are an unordered set; the order here is
/// whatever the solver's derivation produced, deterministic for fixed
/// inputs but otherwise meaningless. Compare root sets with
/// [`CubicRoots::approx_eq`] rather than by position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicRoots {
    /// The roots, in solver-derivation order.
    pub roots: [Complex; 3],
}

impl CubicRoots {
    /// Iterate over the roots.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Complex> {
        self.roots.iter()
    }

    /// The roots whose imaginary part is within `epsilon` of zero, as real
    /// numbers, in derivation order.
    pub fn real_roots(self, epsilon: f64) -> ArrayVec<f64, 3> {
        let mut result = ArrayVec::new();
        for root in self.roots {
            if root.im.abs() < epsilon {
                result.push(root.re);
            }
        }
        result
    }

    /// Multiset equality within an absolute tolerance.
    ///
    /// True when the roots can be matched one-to-one with the roots of
    /// `other` such that every pair is within `epsilon`.
    pub fn approx_eq(self, other: CubicRoots, epsilon: f64) -> bool {
        let mut used = [false; 3];
        'outer: for root in self.roots {
            for (i, candidate) in other.roots.iter().enumerate() {
                if !used[i] && root.approx_eq(*candidate, epsilon) {
                    used[i] = true;
                    continue 'outer;
                }
            }
            return false;
        }
        true
    }
}

impl Index<usize> for CubicRoots {
    type Output = Complex;

    #[inline]
    fn index(&self, index: usize) -> &Complex {
        &self.roots[index]
    }
}

impl IntoIterator for CubicRoots {
    type Item = Complex;
    type IntoIter = core::array::IntoIter<Complex, 3>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter()
    }
}

/// Failure modes of the closed-form solvers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SolveError {
    /// The tolerance was zero or negative; carries the offending value.
    NonPositiveEpsilon(f64),
    /// The leading coefficient is within `epsilon` of zero, so the equation
    /// is not a cubic; carries the offending coefficient.
    DegenerateCubic(f64),
    /// No cube-root pairing satisfied the Cardano recombination constraint.
    ///
    /// This cannot happen for finite coefficients that genuinely have three
    /// distinct real roots; it indicates non-finite intermediates.
    PairingFailed,
}

impl fmt::Display for SolveError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::NonPositiveEpsilon(epsilon) => {
                write!(formatter, "epsilon must be positive, got {epsilon}")
            }
            SolveError::DegenerateCubic(a) => write!(
                formatter,
                "coefficient at x^3 is within epsilon of zero, got {a}"
            ),
            SolveError::PairingFailed => {
                formatter.write_str("no valid cube-root pairing found")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_matches_direct_form() {
        let cubic = Cubic::new(2., -3., 0.5, 7.);
        let x = Complex::new(1.25, -0.5);
        let direct = Complex::from_real(2.) * x * x * x
            + Complex::from_real(-3.) * x * x
            + Complex::from_real(0.5) * x
            + Complex::from_real(7.);
        assert!(cubic.eval(x).approx_eq(direct, 1e-12));
    }

    #[test]
    fn approx_eq_ignores_order() {
        let a = CubicRoots {
            roots: [
                Complex::from_real(1.),
                Complex::from_real(2.),
                Complex::from_real(3.),
            ],
        };
        let b = CubicRoots {
            roots: [
                Complex::from_real(3.),
                Complex::from_real(1.),
                Complex::from_real(2.),
            ],
        };
        assert!(a.approx_eq(b, 1e-9));
        let c = CubicRoots {
            roots: [
                Complex::from_real(1.),
                Complex::from_real(1.),
                Complex::from_real(2.),
            ],
        };
        // Multiset comparison respects multiplicity.
        assert!(!a.approx_eq(c, 1e-9));
        assert!(!c.approx_eq(a, 1e-9));
    }

    #[test]
    fn real_roots_filters_conjugate_pair() {
        let roots = CubicRoots {
            roots: [
                Complex::from_real(2.),
                Complex::new(-1., 0.5),
                Complex::new(-1., -0.5),
            ],
        };
        let real = roots.real_roots(1e-9);
        assert_eq!(real.as_slice(), &[2.]);
    }

    #[test]
    fn solvers_cross_validate() {
        let cardano = solve_cardano(4., 11., -3., -2., 1e-7).unwrap();
        let vieta = solve_vieta(4., 11., -3., -2., 1e-7).unwrap();
        assert!(cardano.approx_eq(vieta, 1e-6));
    }

    #[test]
    fn randomized_residual_sweep() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x3C0DE);
        for _ in 0..500 {
            let sign = if rng.random_bool(0.5) { 1. } else { -1. };
            let cubic = Cubic::new(
                sign * rng.random_range(0.5..4.0),
                rng.random_range(-5.0..5.0),
                rng.random_range(-5.0..5.0),
                rng.random_range(-5.0..5.0),
            );
            for roots in [
                cubic.roots_cardano(1e-9).unwrap(),
                cubic.roots_vieta(1e-9).unwrap(),
            ] {
                for root in roots {
                    let residual = cubic.eval(root).magnitude();
                    assert!(residual < 1e-6, "residual {residual} for {cubic:?}");
                }
            }
        }
    }

    #[test]
    fn error_display_names_parameter() {
        let message = SolveError::NonPositiveEpsilon(-1.).to_string();
        assert!(message.contains("epsilon"));
        let message = SolveError::DegenerateCubic(0.).to_string();
        assert!(message.contains("x^3"));
    }
}
