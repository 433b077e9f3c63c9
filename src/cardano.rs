//! Cardano's method for cubic equations.

use crate::{Complex, Cubic, CubicRoots, SolveError};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Solve `a·x³ + b·x² + c·x + d = 0` by Cardano's substitution.
///
/// Returns all three roots, complex in general. The equation is reduced to
/// depressed form `t³ + pt + q` and classified by the sign of
/// `Q = (p/3)³ + (q/2)²` against `epsilon`:
///
/// - `|Q| < epsilon`: a triple (or nearly triple) real root.
/// - `Q > epsilon`: one real root and a conjugate pair, from real cube
///   roots.
/// - otherwise (three distinct real roots): the real roots are recovered
///   through complex intermediates, by extracting the cube roots of
///   `−q/2 ± i√|Q|` and searching the nine candidate pairings for the one
///   whose product is the real number `−p/3`. Cube roots are only defined
///   up to a cube root of unity, so an arbitrary pairing would produce
///   wrong sums; the product constraint is what recovers Cardano's pairing.
///
/// The scan order (α outer, β inner, first match wins) is fixed, so output
/// is bit-reproducible for identical inputs.
///
/// ```
/// use cubist::solve_cardano;
///
/// // x³ = 1
/// let roots = solve_cardano(1.0, 0.0, 0.0, -1.0, 1e-9).unwrap();
/// assert!(roots[0].approx_eq(1.0.into(), 1e-12));
/// assert!(roots[1].approx_eq((-0.5, 0.75f64.sqrt()).into(), 1e-12));
/// ```
///
/// # Errors
///
/// - [`SolveError::NonPositiveEpsilon`] when `epsilon <= 0`.
/// - [`SolveError::DegenerateCubic`] when `|a| < epsilon`.
/// - [`SolveError::PairingFailed`] when the pairing scan finds no match;
///   unreachable for finite inputs.
pub fn solve_cardano(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    epsilon: f64,
) -> Result<CubicRoots, SolveError> {
    Cubic::new(a, b, c, d).validate(epsilon)?;

    // Depressed form t³ + pt + q, where x = t - b/(3a).
    let p = (3. * a * c - b * b) / (3. * a * a);
    let q = (2. * b.powi(3) - 9. * a * b * c + 27. * a * a * d) / (27. * a.powi(3));
    let shift = -b / (3. * a);

    let disc = (p / 3.).powi(3) + (q / 2.).powi(2);

    if disc.abs() < epsilon {
        // Triple real root of the depressed cubic.
        let alpha = (-q / 2.).cbrt();
        return Ok(CubicRoots {
            roots: [
                Complex::from_real(2. * alpha + shift),
                Complex::from_real(-alpha + shift),
                Complex::from_real(-alpha + shift),
            ],
        });
    }

    if disc > epsilon {
        // One real root and a conjugate pair. Both cube-root arguments are
        // real here, so no complex extraction is needed.
        let sqrt_disc = disc.sqrt();
        let alpha = (-q / 2. + sqrt_disc).cbrt();
        let beta = (-q / 2. - sqrt_disc).cbrt();
        let t0 = alpha + beta;
        let re = -t0 / 2. + shift;
        let im = (alpha - beta) * 3.0f64.sqrt() / 2.;
        return Ok(CubicRoots {
            roots: [
                Complex::from_real(t0 + shift),
                Complex::new(re, im),
                Complex::new(re, -im),
            ],
        });
    }

    // Three distinct real roots, via the complex intermediate path.
    let sqrt_disc = disc.abs().sqrt();
    let alphas = Complex::new(-q / 2., sqrt_disc).cube_roots();
    let betas = Complex::new(-q / 2., -sqrt_disc).cube_roots();
    let shift = Complex::from_real(shift);

    for alpha in alphas {
        for beta in betas {
            let product = alpha * beta;
            if product.im.abs() < epsilon && (product.re + p / 3.).abs() < epsilon {
                let sum = alpha + beta;
                let half_diff = (alpha - beta) / 2. * 3.0f64.sqrt() * Complex::I;
                let pair = sum / -2. + shift;
                return Ok(CubicRoots {
                    roots: [sum + shift, pair + half_diff, pair - half_diff],
                });
            }
        }
    }

    Err(SolveError::PairingFailed)
}
