//! Minimization for Composite Functions consisting of
//! L-smooth _f_ and the indicator of the probability simplex
//!
//! The proximal operator of a constraint set is the projection onto it,
//! so the accelerated proximal gradient method reduces to gradient steps
//! followed by [`project_simplex`].

mod simplex;
pub use simplex::*;

mod sfista;
pub use sfista::*;
