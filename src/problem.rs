//! Problem data and search states for sums of absolute residuals
//!
//! A [`Problem`] holds the data of
//! ```math
//! \min_{x \in \Delta_n} \sum_{i=1}^m |a_i^T x - b_i|
//! ```
//! where $`\Delta_n`$ is the probability simplex. A [`SearchState`] pairs a
//! problem with one iterate and is never mutated: moving to a new iterate
//! produces a new state over the same problem.
#![allow(non_snake_case)]

use crate::error::{check_len, check_positive, Result, SfistaError};
use ndarray::prelude::*;
use ndarray::NdFloat;
use ndarray_linalg::Norm;
use num_traits::Float;

/// Coefficient matrix `A` (m x n) and target vector `b` (m)
#[derive(Debug, Clone, PartialEq)]
pub struct Problem<S> {
    A: Array2<S>,
    b: Array1<S>,
}

impl<S: NdFloat> Problem<S> {
    /// Fails with a dimension mismatch unless `A` has one row per entry of `b`.
    pub fn new(A: Array2<S>, b: Array1<S>) -> Result<Self> {
        check_len("b", A.dim().0, b.len())?;
        Ok(Problem { A, b })
    }

    pub fn a(&self) -> ArrayView2<S> {
        self.A.view()
    }

    pub fn b(&self) -> ArrayView1<S> {
        self.b.view()
    }

    /// `(m, n)`: number of residual terms and number of unknowns
    pub fn dim(&self) -> (usize, usize) {
        self.A.dim()
    }
}

impl Problem<f64> {
    /// Upper bound on the Lipschitz constant of the gradient of the
    /// Huber-smoothed objective with smoothing width `mu`.
    ///
    /// The exact constant is $`\|A\|_2^2 / \mu`$. The Frobenius norm bounds
    /// the spectral norm from above, so $`\|A\|_F^2 / \mu`$ is also valid.
    pub fn lipschitz_bound(&self, mu: f64) -> Result<f64> {
        let mu = check_positive("mu", mu)?;
        Ok(self.A.norm_l2().powi(2) / mu)
    }
}

/// Smoothing width that keeps the Huber approximation of an `m`-term sum of
/// absolute values within `epsilon` of the original objective.
pub fn calculate_mu<T: Float>(epsilon: T, m: usize) -> Result<T> {
    let epsilon = check_positive("epsilon", epsilon)?;
    if m == 0 {
        return Err(SfistaError::InvalidParameter {
            name: "m",
            value: 0.,
        });
    }
    let two = T::from(2.).unwrap();
    Ok(two * epsilon / T::from(m).unwrap())
}

/// Immutable snapshot of a problem and one iterate
#[derive(Debug, Clone)]
pub struct SearchState<'p, S> {
    problem: &'p Problem<S>,
    x: Array1<S>,
}

impl<'p, S: NdFloat> SearchState<'p, S> {
    pub fn new(problem: &'p Problem<S>, x: Array1<S>) -> Result<Self> {
        check_len("x", problem.dim().1, x.len())?;
        Ok(SearchState { problem, x })
    }

    pub fn problem(&self) -> &'p Problem<S> {
        self.problem
    }

    pub fn a(&self) -> ArrayView2<'p, S> {
        self.problem.A.view()
    }

    pub fn b(&self) -> ArrayView1<'p, S> {
        self.problem.b.view()
    }

    pub fn x(&self) -> ArrayView1<S> {
        self.x.view()
    }

    /// A new state over the same problem with iterate `x`
    pub fn move_to_x(&self, x: Array1<S>) -> Result<Self> {
        SearchState::new(self.problem, x)
    }
}
