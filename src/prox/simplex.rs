//! Euclidean projection onto the probability simplex

use std::cmp::Ordering;

use ndarray::prelude::*;
use ndarray::NdFloat;

/// Projection onto the Probability Simplex
///
/// Returns
/// ```math
/// \mathrm{arg}\!\min_{p \in \Delta_n} \|p - v\|_2, \quad
/// \Delta_n = \{ p : p_i \geq 0, \textstyle\sum_i p_i = 1 \}
/// ```
/// which is the proximal operator of the simplex indicator.
///
/// Algorithm
/// ---------
/// Sort $`v`$ into $`u_1 \geq \dots \geq u_n`$, take the largest $`\rho`$
/// with $`u_\rho - \frac{1}{\rho}(\sum_{j \leq \rho} u_j - 1) > 0`$, set
/// $`\theta = \frac{1}{\rho}(\sum_{j \leq \rho} u_j - 1)`$ and return
/// $`p_i = \max(v_i - \theta, 0)`$. See [\[DSSC08\]](#references).
///
/// References
/// ----------
/// \[DSSC08\]: [ Duchi J, Shalev-Shwartz S, Singer Y, Chandra T
///               "Efficient Projections onto the l1-Ball for Learning in
///               High Dimensions", ICML 2008 ](https://doi.org/10.1145/1390156.1390191)
pub fn project_simplex<S>(v: ArrayView1<S>) -> Array1<S>
where
    S: NdFloat,
{
    let mut u = v.to_vec();
    u.sort_unstable_by(|x, y| y.partial_cmp(x).unwrap_or(Ordering::Equal));

    let mut cumsum = S::zero();
    let mut theta = S::zero();
    for (j, &u_j) in u.iter().enumerate() {
        cumsum += u_j;
        let candidate = (cumsum - S::one()) / S::from(j + 1).unwrap();
        if u_j > candidate {
            theta = candidate;
        }
    }
    v.mapv(|v_i| (v_i - theta).max(S::zero()))
}
