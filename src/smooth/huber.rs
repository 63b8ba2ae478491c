//! Huber penalty and the gradient of Huber-smoothed affine residuals

use crate::error::{check_len, check_positive, Result, SfistaError};
use crate::problem::Problem;
use ndarray::prelude::*;
use ndarray::NdFloat; // includes LinalgScalar and ScalarOperand

/// Huber penalty with smoothing width $`\mu`$
///
/// ```math
/// h_\mu(z) = \begin{cases}
///     \frac{z^2}{2\mu} & |z| \leq \mu \\
///     |z| - \frac{\mu}{2} & |z| > \mu
/// \end{cases}
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HuberCalculator<S> {
    mu: S,
}

impl<S: NdFloat> HuberCalculator<S> {
    /// Fails unless `mu` is strictly positive and finite.
    pub fn new(mu: S) -> Result<Self> {
        let mu = check_positive("mu", mu)?;
        Ok(HuberCalculator { mu })
    }

    pub fn mu(&self) -> S {
        self.mu
    }

    pub fn huber(&self, z: S) -> S {
        let two = S::from(2.).unwrap();
        if z.abs() <= self.mu {
            z * z / (two * self.mu)
        } else {
            z.abs() - self.mu / two
        }
    }

    /// Gradient with respect to `x` of $`h_\mu(a^T x - b)`$
    ///
    /// With $`r = a^T x - b`$ this is $`\frac{r}{\mu} a`$ on the quadratic
    /// branch and $`\mathrm{sign}(r)\, a`$ on the linear branch: exactly `a`
    /// for $`r > \mu`$ and `-a` for $`r < -\mu`$, not `a` on both sides.
    ///
    /// Errors
    /// ------
    /// - `DimensionMismatch` if `x` and `a` differ in length.
    /// - `UndefinedDerivative` if $`|r| = \mu`$ exactly. The exact-equality
    ///   test is numerically fragile, so this is rare, but callers should
    ///   expect it rather than treat it as impossible.
    pub fn huber_derivative(&self, x: ArrayView1<S>, a: ArrayView1<S>, b: S) -> Result<Array1<S>> {
        check_len("x", a.len(), x.len())?;
        let r = a.dot(&x) - b;
        if r.abs() < self.mu {
            Ok(&a * (r / self.mu))
        } else if r.abs() > self.mu {
            Ok(&a * r.signum())
        } else {
            Err(SfistaError::UndefinedDerivative {
                residual: r.to_f64().unwrap_or(std::f64::NAN),
            })
        }
    }

    /// Smoothed objective $`\sum_i h_\mu(a_i^T x - b_i)`$
    pub fn smoothed_objective(&self, problem: &Problem<S>, x: ArrayView1<S>) -> Result<S> {
        check_len("x", problem.dim().1, x.len())?;
        let residuals = problem.a().dot(&x) - &problem.b();
        Ok(residuals.fold(S::zero(), |acc, &r| acc + self.huber(r)))
    }

    /// Gradient of the smoothed objective, summed row by row
    pub fn gradient(&self, problem: &Problem<S>, x: ArrayView1<S>) -> Result<Array1<S>> {
        check_len("x", problem.dim().1, x.len())?;
        let mut grad = Array1::zeros(x.len());
        for (a_i, &b_i) in problem.a().outer_iter().zip(problem.b().iter()) {
            grad += &self.huber_derivative(x, a_i, b_i)?;
        }
        Ok(grad)
    }
}
