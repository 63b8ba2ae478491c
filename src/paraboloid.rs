//! Projection onto Paraboloid Epigraphs
//!
//! Euclidean projection onto
//! ```math
//! \mathcal{P} = \{ (x, y, z) \in \mathbb{R}^3 : z \geq x^2 + y^2 \}
//! ```
//! Outside $`\mathcal{P}`$ the constraint is active at the solution and the
//! stationarity conditions force $`y / x = y_0 / x_0`$. Substituting
//! $`y = \rho x`$ and $`z = (1 + \rho^2) x^2`$ leaves the cubic
//! ```math
//! 2 (1 + \rho^2) x^3 + (1 - 2 z_0) x - x_0 = 0
//! ```
//! which has exactly one real root with the sign of $`x_0`$.

use crate::roots::{real_root_with_sign, signum};

/// Project `(x0, y0, z0)` onto $`\{ z \geq x^2 + y^2 \}`$.
///
/// Points already in the set are returned unchanged, so the projection is
/// idempotent. The larger of `|x0|`, `|y0|` is solved for, so the cubic stays
/// well scaled when the other coordinate is tiny or zero.
///
/// Panics
/// ------
/// If the root filter of [`real_root_with_sign`] does not isolate exactly
/// one root.
pub fn project_to_paraboloid_epigraph(x0: f64, y0: f64, z0: f64) -> (f64, f64, f64) {
    if z0 >= x0 * x0 + y0 * y0 {
        return (x0, y0, z0);
    }
    if x0 == 0. && y0 == 0. {
        // on the axis, z0 < 0 and the nearest point is the vertex
        return (0., 0., 0.);
    }
    // keep |y0 / x0| <= 1, the ratio overflows for tiny x0
    if x0.abs() < y0.abs() {
        let (y, x, z) = project_to_paraboloid_epigraph(y0, x0, z0);
        return (x, y, z);
    }

    let ratio = y0 / x0;
    let b = ratio * ratio;
    let x = real_root_with_sign(&[2. * (b + 1.), 0., 1. - 2. * z0, -x0], signum(x0));
    let y = ratio * x;
    (x, y, x * x + y * y)
}

/// Point $`(x_1, x_2, x_3, y_1, y_2)`$ constrained by two paraboloids sharing $`x_2`$
///
/// ```math
/// y_1 \geq x_1^2 + x_2^2, \qquad y_2 \geq x_2^2 + x_3^2
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParaboloidPoint {
    pub x1: f64,
    pub x2: f64,
    pub x3: f64,
    pub y1: f64,
    pub y2: f64,
}

impl ParaboloidPoint {
    pub fn new(x1: f64, x2: f64, x3: f64, y1: f64, y2: f64) -> Self {
        ParaboloidPoint { x1, x2, x3, y1, y2 }
    }

    pub fn is_feasible(&self) -> bool {
        self.y1 >= self.x1 * self.x1 + self.x2 * self.x2
            && self.y2 >= self.x2 * self.x2 + self.x3 * self.x3
    }
}

/// Approximate projection onto the intersection of both paraboloids
///
/// Projects $`(x_1, x_2, y_1)`$ onto the first epigraph, then
/// $`(x_2, x_3, y_2)`$ onto the second, using the updated $`x_2`$. This is
/// one sequential pass, not the exact joint projection: the result always
/// satisfies the second constraint, and the first one only if the second
/// projection did not move $`x_2`$ outward.
pub fn project_to_paraboloids_intersection(p: ParaboloidPoint) -> ParaboloidPoint {
    let (x1, x2, y1) = project_to_paraboloid_epigraph(p.x1, p.x2, p.y1);
    let (x2, x3, y2) = project_to_paraboloid_epigraph(x2, p.x3, p.y2);
    ParaboloidPoint { x1, x2, x3, y1, y2 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// KKT conditions of the projection with an active constraint
    fn assert_kkt(p0: (f64, f64, f64), p: (f64, f64, f64)) {
        let (x0, y0, z0) = p0;
        let (x, y, z) = p;
        let lambda = z - z0;
        let scale = 1. + x0.abs() + y0.abs() + lambda.abs();
        assert!(lambda >= 0.);
        assert_abs_diff_eq!(z, x * x + y * y, epsilon = 1e-12 * (1. + z.abs()));
        assert_abs_diff_eq!(x - x0 + 2. * lambda * x, 0., epsilon = 1e-9 * scale);
        assert_abs_diff_eq!(y - y0 + 2. * lambda * y, 0., epsilon = 1e-9 * scale);
    }

    #[test]
    fn feasible_point_is_fixed() {
        assert_eq!(project_to_paraboloid_epigraph(0., 0., 1.), (0., 0., 1.));
        assert_eq!(project_to_paraboloid_epigraph(0.5, -0.5, 0.5), (0.5, -0.5, 0.5));
    }

    #[test]
    fn general_point() {
        let p0 = (0.3, -0.7, -0.2);
        let p = project_to_paraboloid_epigraph(p0.0, p0.1, p0.2);
        assert_kkt(p0, p);
        // direction in the xy-plane is preserved
        assert_abs_diff_eq!(p.1 / p.0, p0.1 / p0.0, epsilon = 1e-12);
    }

    #[test]
    fn on_x_axis() {
        // 2x^3 + x - 1 = 0
        let p = project_to_paraboloid_epigraph(1., 0., 0.);
        assert_kkt((1., 0., 0.), p);
        assert_eq!(p.1, 0.);
        assert_abs_diff_eq!(2. * p.0.powi(3) + p.0 - 1., 0., epsilon = 1e-12);
    }

    #[test]
    fn on_y_axis_swaps_roles() {
        let p = project_to_paraboloid_epigraph(0., -2., 0.5);
        assert_kkt((0., -2., 0.5), p);
        assert_eq!(p.0, 0.);
        assert!(p.1 < 0.);
    }

    #[test]
    fn tiny_x_coordinate() {
        for &p0 in &[(1e-200, 1., 0.), (1e-12, 1., 0.), (-1e-300, -3., 0.5)] {
            let p = project_to_paraboloid_epigraph(p0.0, p0.1, p0.2);
            assert!(p.0.is_finite() && p.1.is_finite() && p.2.is_finite());
            assert_kkt(p0, p);
        }
        // same answer as the exact axis case
        let p = project_to_paraboloid_epigraph(1e-200, 1., 0.);
        let axis = project_to_paraboloid_epigraph(0., 1., 0.);
        assert_abs_diff_eq!(p.1, axis.1, epsilon = 1e-12);
        assert_abs_diff_eq!(p.2, axis.2, epsilon = 1e-12);
        assert_abs_diff_eq!(p.1, 0.5898, epsilon = 1e-4);
    }

    #[test]
    fn tiny_y_coordinate() {
        let p0 = (1., 1e-250, 0.);
        let p = project_to_paraboloid_epigraph(p0.0, p0.1, p0.2);
        assert_kkt(p0, p);
        assert_abs_diff_eq!(p.0, 0.5898, epsilon = 1e-4);
    }

    #[test]
    fn far_below_vertex() {
        for &p0 in &[(1e3, 1e3, -1e6), (-1e3, 2e3, -1e6), (1e-3, -1e3, -1e6)] {
            let p = project_to_paraboloid_epigraph(p0.0, p0.1, p0.2);
            assert_kkt(p0, p);
            assert_eq!(project_to_paraboloid_epigraph(p.0, p.1, p.2), p);
        }
    }

    #[test]
    fn below_vertex() {
        assert_eq!(project_to_paraboloid_epigraph(0., 0., -1.), (0., 0., 0.));
    }

    #[test]
    fn above_half_with_negative_branch() {
        // z0 > 1/2 gives the cubic a root of the wrong sign as well
        let p0 = (-2., 1., 3.);
        let p = project_to_paraboloid_epigraph(p0.0, p0.1, p0.2);
        assert_kkt(p0, p);
        assert!(p.0 < 0. && p.1 > 0.);
    }

    #[test]
    fn projection_is_idempotent() {
        for &(x0, y0, z0) in &[
            (0.3, -0.7, -0.2),
            (1., 0., 0.),
            (0., -2., 0.5),
            (-2., 1., 3.),
            (5., 5., 1.),
            (0., 0., -1.),
        ] {
            let (x, y, z) = project_to_paraboloid_epigraph(x0, y0, z0);
            assert_eq!(project_to_paraboloid_epigraph(x, y, z), (x, y, z));
        }
    }

    #[test]
    fn projection_is_closer_than_feasible_samples() {
        let (x0, y0, z0) = (1.5, 0.5, -1.);
        let (x, y, z) = project_to_paraboloid_epigraph(x0, y0, z0);
        let dist = |(a, b, c): (f64, f64, f64)| (a - x0).powi(2) + (b - y0).powi(2) + (c - z0).powi(2);
        let best = dist((x, y, z));
        for i in -20..=20 {
            for j in -20..=20 {
                let (a, b) = (f64::from(i) / 10., f64::from(j) / 10.);
                assert!(best <= dist((a, b, a * a + b * b)) + 1e-12);
            }
        }
    }

    #[test]
    fn intersection_keeps_feasible_points() {
        let p = ParaboloidPoint::new(0.1, 0.2, -0.3, 1., 1.);
        assert!(p.is_feasible());
        assert_eq!(project_to_paraboloids_intersection(p), p);
    }

    #[test]
    fn intersection_satisfies_second_constraint() {
        let p = ParaboloidPoint::new(1., 1., -1., 0., 0.5);
        assert!(!p.is_feasible());
        let q = project_to_paraboloids_intersection(p);
        assert!(q.y2 >= q.x2 * q.x2 + q.x3 * q.x3);

        // first projection on its own
        let (x1, x2, y1) = project_to_paraboloid_epigraph(1., 1., 0.);
        assert_eq!(q.x1, x1);
        assert_eq!(q.y1, y1);
        assert_eq!(q, {
            let (x2, x3, y2) = project_to_paraboloid_epigraph(x2, -1., 0.5);
            ParaboloidPoint::new(x1, x2, x3, y1, y2)
        });
    }
}
