//! Smoothed Fast Iterative Shrinkage/Thresholding Algorithm
#![allow(non_snake_case)]

use super::project_simplex;
use crate::error::{check_positive, Result};
use crate::problem::SearchState;
use crate::smooth::HuberCalculator;
use ndarray::prelude::*;
use ndarray::NdFloat;

/// Smoothed FISTA over the Probability Simplex
///
/// Minimizes the Huber-smoothed sum of absolute residuals
/// ```math
/// \min_{x \in \Delta_n} f_\mu(x) = \sum_{i=1}^m h_\mu(a_i^T x - b_i)
/// ```
/// using the simplex projection as the proximal operator.
///
/// Algorithm
/// ---------
/// ```math
/// \begin{aligned}
/// x_k &= P_{\Delta_n}\left( y_{k-1} - \frac{1}{L} \nabla f_\mu(y_{k-1}) \right) \\
/// t_k &= \frac{1 + \sqrt{1 + 4 t_{k-1}^2}}{2} \\
/// y_k &= x_k + \frac{t_{k-1} - 1}{t_k} (x_k - x_{k-1})
/// \end{aligned}
/// ```
/// where $`y_0 := x_0`$ and $`t_0 := 1`$.
///
/// Convergence
/// -----------
/// If $`L`$ bounds the Lipschitz constant of $`\nabla f_\mu`$, e.g.
/// $`L = \|A\|_2^2 / \mu`$, then
/// ```math
/// f_\mu(x_k) - f_\mu(x_*) \leq \frac{2 L \|x_0 - x_*\|_2^2}{(k+1)^2}
/// ```
/// Nothing is guaranteed for a smaller $`L`$. The iteration is not a
/// descent method: single steps may increase $`f_\mu`$.
///
/// The caller owns the stopping rule, either by calling [`step`](Self::step)
/// directly or through the callback of [`run`](Self::run).
#[derive(Debug, Clone)]
pub struct SfistaMethod<'p, S> {
    state: SearchState<'p, S>,
    huber: HuberCalculator<S>,
    L: S,
    iteration: usize,
    y: Array1<S>,
    t: S,
}

impl<'p, S> SfistaMethod<'p, S>
where
    S: NdFloat,
{
    /// Parameters
    /// ----------
    /// - __state:__  initial search state, its iterate is $`x_0`$
    /// - __mu:__     smoothing width of the Huber penalty, positive
    /// - __L:__      upper bound on the Lipschitz constant of the smoothed gradient, positive
    pub fn new(state: SearchState<'p, S>, mu: S, L: S) -> Result<Self> {
        let huber = HuberCalculator::new(mu)?;
        let L = check_positive("L", L)?;
        let (m, n) = state.problem().dim();
        tracing::debug!(m, n, mu = %mu, L = %L, "sfista initialized");

        let y = state.x().to_owned();
        Ok(SfistaMethod {
            state,
            huber,
            L,
            iteration: 0,
            y,
            t: S::one(),
        })
    }

    /// Advance by exactly one iteration.
    ///
    /// If the gradient at $`y_k`$ is undefined the error is returned and
    /// the method is left as it was before the call.
    pub fn step(&mut self) -> Result<()> {
        let x_next = self.next_x(self.y.view())?;
        let t_next = Self::next_t(self.t);
        let y_next = Self::next_y(x_next.view(), self.state.x(), t_next, self.t);

        self.state = self.state.move_to_x(x_next)?;
        self.iteration += 1;
        self.t = t_next;
        self.y = y_next;
        tracing::trace!(iteration = self.iteration, t = %self.t, "sfista step");
        Ok(())
    }

    /// Run up to `maxiter` iterations.
    ///
    /// __callback__ is evaluated with the current iterate and iteration
    /// count before the first step and after every step. If it returns
    /// true, the run terminates early.
    pub fn run(
        &mut self,
        maxiter: usize,
        mut callback: impl FnMut(ArrayView1<S>, usize) -> bool,
    ) -> Result<ArrayView1<S>> {
        if callback(self.x(), self.iteration) {
            return Ok(self.x());
        }
        for _ in 0..maxiter {
            self.step()?;
            if callback(self.x(), self.iteration) {
                break;
            }
        }
        Ok(self.x())
    }

    /// Projected gradient step from `y`
    pub fn next_x(&self, y: ArrayView1<S>) -> Result<Array1<S>> {
        let grad = self.grad_f(y)?;
        let step = S::one() / self.L;
        Ok(project_simplex((&y - &(grad * step)).view()))
    }

    pub fn next_t(t: S) -> S {
        let two = S::from(2.).unwrap();
        let four = S::from(4.).unwrap();
        (S::one() + (S::one() + four * t.powi(2)).sqrt()) / two
    }

    /// "nesterov" momentum
    pub fn next_y(x: ArrayView1<S>, x_prev: ArrayView1<S>, t: S, t_prev: S) -> Array1<S> {
        let beta = (t_prev - S::one()) / t;
        &x + &((&x - &x_prev) * beta)
    }

    /// Gradient of the smoothed objective at `x`
    pub fn grad_f(&self, x: ArrayView1<S>) -> Result<Array1<S>> {
        self.huber.gradient(self.state.problem(), x)
    }

    /// Smoothed objective at `x`, for monitoring and stopping rules
    pub fn smoothed_f(&self, x: ArrayView1<S>) -> Result<S> {
        self.huber.smoothed_objective(self.state.problem(), x)
    }

    pub fn state(&self) -> &SearchState<'p, S> {
        &self.state
    }

    pub fn x(&self) -> ArrayView1<S> {
        self.state.x()
    }

    pub fn y(&self) -> ArrayView1<S> {
        self.y.view()
    }

    pub fn t(&self) -> S {
        self.t
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn lipschitz(&self) -> S {
        self.L
    }

    pub fn huber(&self) -> &HuberCalculator<S> {
        &self.huber
    }
}

/// Smoothed FISTA over the Probability Simplex
///
/// Runs [`SfistaMethod`] from `state` for up to `maxiter` iterations and
/// returns the last iterate.
///
/// Parameters
/// ----------
/// - __state:__     initial search state
/// - __mu:__        smoothing width of the Huber penalty
/// - __L:__         Lipschitz bound of the smoothed gradient, see [`crate::problem::Problem::lipschitz_bound`]
/// - __maxiter:__   number of iterations
/// - __callback:__  User-defined function to be evaluated with two arguments (x,iter).
///                   It is evaluated at (x0,0) and then after each iteration.
///                   If it returns True, the function terminates early.
pub fn sfista<S>(
    state: SearchState<S>,
    mu: S,
    L: S,
    maxiter: usize,
    callback: impl FnMut(ArrayView1<S>, usize) -> bool,
) -> Result<Array1<S>>
where
    S: NdFloat,
{
    let mut method = SfistaMethod::new(state, mu, L)?;
    let x = method.run(maxiter, callback)?;
    Ok(x.to_owned())
}


#[cfg(all(rustc_nightly, test))]
mod benches {
    use super::*;
    use crate::problem::Problem;
    use test::Bencher;

    #[bench]
    fn sfista_step(bencher: &mut Bencher) {
        let A = Array2::from_shape_fn((200, 50), |(i, j)| ((i * 7 + j * 13) % 17) as f64 / 17. - 0.5);
        let b = Array1::from_shape_fn(200, |i| (i % 5) as f64 / 10.);
        let problem = Problem::new(A, b).unwrap();
        let state = SearchState::new(&problem, Array1::from_elem(50, 0.02)).unwrap();
        let L = problem.lipschitz_bound(0.01).unwrap();
        let mut method = SfistaMethod::new(state, 0.01, L).unwrap();
        bencher.iter(|| method.step());
    }
}
