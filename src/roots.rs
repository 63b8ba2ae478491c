//! Roots of Real Polynomials
//!
//! All complex roots are found simultaneously with the Weierstrass
//! (Durand–Kerner) iteration
//! ```math
//! z_i \leftarrow z_i - \frac{p(z_i)}{\prod_{j \neq i} (z_i - z_j)}
//! ```
//! applied to the monic polynomial. Convergence is quadratic for simple
//! roots and linear near repeated ones.
//!
//! For more info, see [Durand–Kerner method on Wikipedia](https://en.wikipedia.org/wiki/Durand%E2%80%93Kerner_method)

use ndarray_linalg::c64;

/// Roots with an imaginary part below this are treated as real.
pub const IMAG_TOLERANCE: f64 = 1e-4;

/// Relative size of the last correction at which the iteration stops.
pub const STEP_TOLERANCE: f64 = 1e-14;

/// Iteration cap, reached only for clustered or repeated roots.
pub const MAX_ITER: usize = 500;

/// All roots of the polynomial with coefficients `coefs`, highest degree first
///
/// Leading zero coefficients are ignored and trailing zeros contribute roots
/// at the origin, so `[0., 1., -3., 0.]` has roots `0` and `3`.
pub fn poly_roots(coefs: &[f64]) -> Vec<c64> {
    let start = match coefs.iter().position(|&c| c != 0.) {
        Some(start) => start,
        None => return Vec::new(),
    };
    let end = coefs.iter().rposition(|&c| c != 0.).map_or(start, |i| i + 1);
    let origin = coefs.len() - end;
    let coefs = &coefs[start..end];

    let degree = coefs.len() - 1;
    let monic: Vec<c64> = coefs.iter().map(|&c| c64::new(c / coefs[0], 0.)).collect();

    // Fujiwara's bound on the root moduli sets the radius of the initial
    // guesses, which are powers of a point that is neither real nor a root
    // of unity
    let radius = monic[1..]
        .iter()
        .enumerate()
        .map(|(i, c)| c.norm().powf(1. / (i + 1) as f64))
        .fold(1., f64::max)
        * 2.;
    let seed = c64::new(0.4, 0.9);
    let mut roots = Vec::with_capacity(degree + origin);
    let mut z = c64::new(radius, 0.);
    for _ in 0..degree {
        roots.push(z);
        z = z * seed;
    }

    for _iter in 0..MAX_ITER {
        let mut converged = true;
        for i in 0..degree {
            let denom = (0..degree)
                .filter(|&j| j != i)
                .fold(c64::new(1., 0.), |acc, j| acc * (roots[i] - roots[j]));
            let delta = horner(&monic, roots[i]) / denom;
            roots[i] = roots[i] - delta;
            if delta.norm() > STEP_TOLERANCE * (1. + roots[i].norm()) {
                converged = false;
            }
        }
        if converged {
            break;
        }
    }

    roots.extend(std::iter::repeat(c64::new(0., 0.)).take(origin));
    roots
}

/// The single real root of the polynomial whose sign matches `sign`
///
/// Roots count as real when their imaginary part is below
/// [`IMAG_TOLERANCE`]; `sign` is compared against `-1`, `0` or `1`.
///
/// Panics
/// ------
/// Exactly one root must pass the filter. None, or more than one, means the
/// input is degenerate or the tolerance is miscalibrated, and is treated as
/// a broken invariant rather than a recoverable error.
pub fn real_root_with_sign(coefs: &[f64], sign: f64) -> f64 {
    let roots = poly_roots(coefs);
    let real: Vec<f64> = roots
        .iter()
        .filter(|r| r.im.abs() < IMAG_TOLERANCE && signum(r.re) == sign)
        .map(|r| r.re)
        .collect();
    tracing::trace!(?roots, sign, "candidate roots");
    assert_eq!(
        real.len(),
        1,
        "expected exactly one real root with sign {} among {:?}",
        sign,
        roots
    );
    real[0]
}

/// Sign as `-1`, `0` or `1`; unlike `f64::signum`, zero maps to zero.
pub(crate) fn signum(x: f64) -> f64 {
    if x > 0. {
        1.
    } else if x < 0. {
        -1.
    } else {
        0.
    }
}

fn horner(coefs: &[c64], z: c64) -> c64 {
    coefs.iter().fold(c64::new(0., 0.), |acc, &c| acc * z + c)
}
