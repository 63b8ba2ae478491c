//! Smoothing of Non-Differentiable Objectives
//!
//! The sum of absolute residuals $`\sum_i |a_i^T x - b_i|`$ has no gradient
//! wherever a residual vanishes. Replacing each $`|z|`$ by the Huber penalty
//! $`h_\mu(z)`$ yields a smooth objective with a Lipschitz continuous
//! gradient,
//! ```math
//! \| \nabla f_\mu(x) - \nabla f_\mu(z) \|_2 \leq \frac{\|A\|_2^2}{\mu} \| x - z \|_2
//! ```
//! while staying uniformly close to the original,
//! $`|z| - \frac{\mu}{2} \leq h_\mu(z) \leq |z|`$.
//!
//! For more info, see [Huber loss on Wikipedia](https://en.wikipedia.org/wiki/Huber_loss)

mod huber;
pub use huber::*;

use ndarray::ArrayView;

/// Do nothing function for optional user callback (returns false)
#[allow(clippy::needless_pass_by_value)]
pub fn nop<T, D>(_x: ArrayView<T, D>, _itr: usize) -> bool {
    false
}
