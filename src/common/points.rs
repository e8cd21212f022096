//! Common operations on f64 points in D-dimensional space.

use parry3d_f64::na::{AbstractRotation, Isometry, Point};

/// Returns the distance between two points in D-dimensional space.
///
/// # Arguments
///
/// * `a`: the first point
/// * `b`: the second point
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use foilgen::common::points::dist;
/// use foilgen::Point2;
/// let a = Point2::new(1.0, 2.0);
/// let b = Point2::new(3.0, 2.0);
/// let d = dist(&a, &b);
/// assert_eq!(d, 2.0);
/// ```
pub fn dist<const D: usize>(a: &Point<f64, D>, b: &Point<f64, D>) -> f64 {
    (a - b).norm()
}

/// Generic 2 or 3 dimensional transformation of a slice of `Point` entities by an `Isometry`,
/// resulting in an owned `Vec` of new point entities being created and returned.
///
/// # Arguments
///
/// * `points`: a slice of `Point` entities to transform
/// * `transform`: the `Isometry` to apply to each point
///
/// returns: Vec<OPoint<f64, Const<{ D }>>, Global>
///
/// # Examples
///
/// ```
/// use foilgen::{Point2, Iso2};
/// use foilgen::common::points::transform_points;
///
/// let points = vec![Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)];
/// let transform = Iso2::translation(1.0, 2.0);
/// let transformed_points = transform_points(&points, &transform);
/// assert_eq!(transformed_points[0], Point2::new(2.0, 4.0));
/// assert_eq!(transformed_points[1], Point2::new(4.0, 6.0));
/// ```
pub fn transform_points<R, const D: usize>(
    points: &[Point<f64, D>],
    transform: &Isometry<f64, R, D>,
) -> Vec<Point<f64, D>>
where
    R: AbstractRotation<f64, D>,
{
    points.iter().map(|p| transform * p).collect()
}

/// Removes points which are within `tol` of the point immediately preceding them, keeping the
/// first point of every run of near-duplicates.
pub fn dedup_adjacent<const D: usize>(points: &[Point<f64, D>], tol: f64) -> Vec<Point<f64, D>> {
    let mut result = points.to_vec();
    result.dedup_by(|a, b| dist(a, b) <= tol);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Iso2, Point2};
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn rotate_quarter_turn() {
        let points = vec![Point2::new(1.0, 0.0), Point2::new(0.0, 2.0)];
        let rotated = transform_points(&points, &Iso2::rotation(FRAC_PI_2));
        assert_relative_eq!(rotated[0], Point2::new(0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(rotated[1], Point2::new(-2.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn dedup_keeps_first_of_run() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1e-12, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        let result = dedup_adjacent(&points, 1e-9);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0], Point2::new(0.0, 0.0));
        assert_eq!(result[2], Point2::new(0.0, 1.0));
    }
}
