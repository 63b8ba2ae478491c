//! The `ndarray-sfista` crate minimizes sums of absolute residuals over the
//! probability simplex,
//! ```math
//! \min_{x \in \Delta_n} \sum_{i=1}^m |a_i^T x - b_i|
//! ```
//! with the Smoothed Fast Iterative Shrinkage-Thresholding Algorithm
//! (SFISTA): each absolute value is replaced by a Huber penalty, and the
//! smoothed objective is minimized by FISTA with the simplex projection as
//! its proximal operator.
//!
//! It is organized as:
//! - [`problem`]: the data $`(A, b)`$ and immutable search states
//! - [`smooth`]: the Huber smoother and its gradients
//! - [`prox`]: the simplex projection and the SFISTA solver
//! - [`paraboloid`]: Euclidean projections onto paraboloid epigraphs,
//!   built on the polynomial roots of [`roots`]
//!
//! ```
//! use ndarray::array;
//! use ndarray_sfista::problem::{Problem, SearchState};
//! use ndarray_sfista::prox::sfista;
//! use ndarray_sfista::smooth::nop;
//!
//! let problem = Problem::new(array![[1., 0.], [0., 1.], [1., 1.]], array![0.25, 0.75, 1.]).unwrap();
//! let mu = 1e-3;
//! let L = problem.lipschitz_bound(mu).unwrap();
//! let state = SearchState::new(&problem, array![0.5, 0.5]).unwrap();
//! let x = sfista(state, mu, L, 2000, nop).unwrap();
//! assert!((x[0] - 0.25).abs() < 1e-2);
//! ```
//!
//! The routines are single-threaded and never perform I/O. Diagnostics are
//! emitted through `tracing` at debug and trace level.

#![cfg_attr(all(rustc_nightly, test), feature(test))]
#[cfg(all(rustc_nightly, test))]
extern crate test;

pub mod error;
pub mod paraboloid;
pub mod problem;
pub mod prox;
pub mod roots;
pub mod smooth;

pub use error::{Result, SfistaError};
