//! Vieta's trigonometric and hyperbolic method for cubic equations.

use core::f64::consts::PI;

use crate::{Complex, Cubic, CubicRoots, SolveError};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Solve `a·x³ + b·x² + c·x + d = 0` by Vieta's substitution.
///
/// Returns all three roots, complex in general. The equation is made monic
/// and classified by the sign of `S = Q³ − R²`, where `Q = (b² − 3c)/9` and
/// `R = (2b³ − 9bc + 27d)/54`, against `epsilon`:
///
/// - `S > epsilon`: three distinct real roots, via `arccos/3`.
/// - otherwise: one real root (or a repeated root when `S` is within
///   `epsilon` of zero), via hyperbolic functions; which of `cosh`/`sinh`
///   applies depends on the sign of `Q`, with a direct cube root for the
///   `Q = 0` degenerate case. The case split covers the whole real line
///   for `S` and `Q`, so every input gets three roots.
///
/// Independent of [`solve_cardano`](crate::solve_cardano); the two methods
/// agree within tolerance and can be used to cross-check each other.
///
/// ```
/// use cubist::solve_vieta;
///
/// // (x - 1)(x - 2)(x - 3)
/// let roots = solve_vieta(1.0, -6.0, 11.0, -6.0, 1e-9).unwrap();
/// let mut real: Vec<f64> = roots.real_roots(1e-9).into_iter().collect();
/// real.sort_by(f64::total_cmp);
/// assert!((real[0] - 1.0).abs() < 1e-12);
/// assert!((real[2] - 3.0).abs() < 1e-12);
/// ```
///
/// # Errors
///
/// - [`SolveError::NonPositiveEpsilon`] when `epsilon <= 0`.
/// - [`SolveError::DegenerateCubic`] when `|a| < epsilon`.
pub fn solve_vieta(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    epsilon: f64,
) -> Result<CubicRoots, SolveError> {
    Cubic::new(a, b, c, d).validate(epsilon)?;

    // Monic form x³ + bx² + cx + d.
    let b = b / a;
    let c = c / a;
    let d = d / a;

    let big_q = (b * b - 3. * c) / 9.;
    let big_r = (2. * b.powi(3) - 9. * b * c + 27. * d) / 54.;
    let s = big_q.powi(3) - big_r * big_r;
    let shift = -b / 3.;

    if s > epsilon {
        // Three distinct real roots. S > 0 implies Q > 0 and |R| < Q^1.5,
        // so the arccos argument is in range.
        let phi = (big_r / big_q.powf(1.5)).acos() / 3.;
        let radius = -2. * big_q.sqrt();
        let root = |angle: f64| Complex::from_real(radius * angle.cos() + shift);
        return Ok(CubicRoots {
            roots: [
                root(phi),
                root(phi + 2. * PI / 3.),
                root(phi - 2. * PI / 3.),
            ],
        });
    }

    // One real root, or a repeated root when S is within epsilon of zero
    // (there the hyperbolic angle degenerates to 0 and the conjugate pair
    // collapses onto the real axis).
    if big_q > 0. {
        // The ratio can dip just below 1 when S is within epsilon of zero;
        // clamping keeps the square root real.
        let x = (big_r.abs() / big_q.powf(1.5)).max(1.);
        let phi = (x + (x * x - 1.).sqrt()).ln() / 3.;
        let t = big_r.signum() * big_q.sqrt() * phi.cosh();
        let im = 3.0f64.sqrt() * big_q.sqrt() * phi.sinh();
        return Ok(CubicRoots {
            roots: [
                Complex::from_real(-2. * t + shift),
                Complex::new(t + shift, im),
                Complex::new(t + shift, -im),
            ],
        });
    }
    if big_q < 0. {
        let abs_q = -big_q;
        let x = big_r.abs() / abs_q.powf(1.5);
        let phi = (x + (x * x + 1.).sqrt()).ln() / 3.;
        let t = big_r.signum() * abs_q.sqrt() * phi.sinh();
        let im = 3.0f64.sqrt() * abs_q.sqrt() * phi.cosh();
        return Ok(CubicRoots {
            roots: [
                Complex::from_real(-2. * t + shift),
                Complex::new(t + shift, im),
                Complex::new(t + shift, -im),
            ],
        });
    }

    // Q = 0: the monic cubic is (x + b/3)³ = b³/27 - d.
    let t = -(d - b.powi(3) / 27.).cbrt() + shift;
    let re = -(b + t) / 2.;
    let im = ((b - 3. * t) * (b + t) - 4. * c).abs().sqrt() / 2.;
    Ok(CubicRoots {
        roots: [
            Complex::from_real(t),
            Complex::new(re, im),
            Complex::new(re, -im),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Complex;

    const EPSILON: f64 = 1e-9;

    fn residual(cubic: Cubic, roots: CubicRoots) -> f64 {
        roots
            .into_iter()
            .map(|root| cubic.eval(root).magnitude())
            .fold(0., f64::max)
    }

    #[test]
    fn three_distinct_real_roots() {
        // (x - 1)(x - 2)(x - 3)
        let roots = solve_vieta(1., -6., 11., -6., EPSILON).unwrap();
        let expected = CubicRoots {
            roots: [
                Complex::from_real(1.),
                Complex::from_real(2.),
                Complex::from_real(3.),
            ],
        };
        assert!(roots.approx_eq(expected, 1e-12));
    }

    #[test]
    fn cosh_branch() {
        // x³ - 3x + 5 = 0: Q = 1, S < 0, one real root near -2.279.
        let cubic = Cubic::new(1., 0., -3., 5.);
        let roots = cubic.roots_vieta(EPSILON).unwrap();
        assert!((roots[0].re + 2.2790188).abs() < 1e-6);
        assert!(roots[0].im == 0.);
        assert!(roots[1].approx_eq(roots[2].conj(), 1e-12));
        assert!(residual(cubic, roots) < 1e-12);
    }

    #[test]
    fn sinh_branch() {
        // x³ + 3x + 1 = 0: Q = -1, S < 0, one real root near -0.322.
        let cubic = Cubic::new(1., 0., 3., 1.);
        let roots = cubic.roots_vieta(EPSILON).unwrap();
        assert!((roots[0].re + 0.3221854).abs() < 1e-6);
        assert!(roots[1].approx_eq(roots[2].conj(), 1e-12));
        assert!(residual(cubic, roots) < 1e-12);
    }

    #[test]
    fn degenerate_q_branch() {
        // x³ = 1 has Q = 0 and the cube roots of unity as roots.
        let roots = solve_vieta(1., 0., 0., -1., EPSILON).unwrap();
        assert!(roots[0].approx_eq(Complex::ONE, 1e-12));
        assert!(roots[1].approx_eq(Complex::new(-0.5, 0.75f64.sqrt()), 1e-12));
        assert!(roots[2].approx_eq(Complex::new(-0.5, -(0.75f64.sqrt())), 1e-12));
    }

    #[test]
    fn repeated_root() {
        // (x + 1)³: S = 0, Q = 0.
        let cubic = Cubic::new(1., 3., 3., 1.);
        let roots = cubic.roots_vieta(EPSILON).unwrap();
        for root in roots {
            assert!(root.approx_eq(Complex::from_real(-1.), 1e-9));
        }
    }

    #[test]
    fn double_root_cosh_collapse() {
        // (x - 1)²(x + 2) = x³ - 3x + 2: S = 0 with Q = 1 > 0, so the
        // clamped cosh branch degenerates to the repeated-root formulas.
        let cubic = Cubic::new(1., 0., -3., 2.);
        let roots = cubic.roots_vieta(EPSILON).unwrap();
        let expected = CubicRoots {
            roots: [
                Complex::from_real(-2.),
                Complex::from_real(1.),
                Complex::from_real(1.),
            ],
        };
        assert!(roots.approx_eq(expected, 1e-9));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(
            solve_vieta(1., 0., 0., -1., 0.),
            Err(SolveError::NonPositiveEpsilon(0.))
        );
        assert_eq!(
            solve_vieta(1e-9, 1., 1., 1., 1e-7),
            Err(SolveError::DegenerateCubic(1e-9))
        );
    }

    #[test]
    fn idempotent() {
        let first = solve_vieta(4., 11., -3., -2., 1e-7).unwrap();
        let second = solve_vieta(4., 11., -3., -2., 1e-7).unwrap();
        assert_eq!(first, second);
    }
}
