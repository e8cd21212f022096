//! Building blocks shared by the airfoil generator and the loft: discrete domains, point
//! transformations and planar triangulation.

pub mod discrete_domain;
pub mod points;
pub mod triangulation;

pub use discrete_domain::{DiscreteDomain, cosine_space, linear_space};

/// Linear interpolation between `a` and `b` at the fraction `f`, where `f = 0` returns `a` and
/// `f = 1` returns `b`.
pub fn lerp(a: f64, b: f64, f: f64) -> f64 {
    a + (b - a) * f
}
