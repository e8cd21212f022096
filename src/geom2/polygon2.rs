//! This module contains the closed outline of a section, either generated from an airfoil profile
//! or imported directly from a list of coordinates, and its planar triangulation.

use crate::airfoil::AirfoilProfile;
use crate::common::points::{dedup_adjacent, dist};
use crate::common::triangulation::triangulate_ear_clipping;
use crate::geom2::{Aabb2, Point2};
use crate::{FoilError, Result};
use serde::Serialize;

/// Distance under which two outline points are considered to be the same point
pub const CLOSURE_TOL: f64 = 1e-9;

/// Computes the signed area of a polygon by the shoelace formula. Counter-clockwise polygons have
/// a positive area and clockwise polygons a negative one. The ring may be open or closed, since a
/// closing duplicate of the first point contributes nothing.
///
/// # Arguments
///
/// * `points`: the vertices of the polygon in order
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use foilgen::Point2;
/// use foilgen::geom2::signed_area;
/// let square = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
/// assert_eq!(signed_area(&square), 4.0);
/// ```
pub fn signed_area(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let n = points.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice * 0.5
}

/// An ordered sequence of 2D points forming a closed loop. The last point is always equal to, or
/// within `CLOSURE_TOL` of, the first point. Self-intersection of the loop is not checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosedPolygon {
    points: Vec<Point2>,
}

/// A counter-clockwise vertex ring together with the triangles covering it. Face indices refer
/// to positions in `ring`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolygonTriangulation {
    pub ring: Vec<Point2>,
    pub faces: Vec<[u32; 3]>,
}

impl ClosedPolygon {
    /// Create a closed polygon from a list of points, such as coordinates imported from a section
    /// data file. The points are kept verbatim, except that if the last point does not coincide
    /// with the first point, a copy of the first point is appended to close the loop.
    ///
    /// # Arguments
    ///
    /// * `points`: the outline points in order
    ///
    /// returns: ClosedPolygon
    pub fn from_points(points: &[Point2]) -> Self {
        let mut points = points.to_vec();
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            if dist(first, last) > CLOSURE_TOL {
                points.push(*first);
            }
        }
        Self { points }
    }

    /// Create a closed polygon from raw `[x, y]` coordinate pairs.
    pub fn from_xy(pairs: &[[f64; 2]]) -> Self {
        let points = pairs
            .iter()
            .map(|[x, y]| Point2::new(*x, *y))
            .collect::<Vec<_>>();
        Self::from_points(&points)
    }

    /// Create the outline of an airfoil profile by walking the upper surface from the leading edge
    /// to the trailing edge, then returning along the lower surface to the leading edge.
    pub fn from_profile(profile: &AirfoilProfile) -> Self {
        let mut points = profile.upper();
        points.extend(profile.lower().into_iter().rev());
        Self::from_points(&points)
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the distinct vertices of the outline as an open ring: adjacent duplicates are
    /// collapsed and the closing point(s) matching the first vertex are removed. The orientation
    /// of the original points is preserved.
    pub fn ring(&self) -> Vec<Point2> {
        let mut ring = dedup_adjacent(&self.points, CLOSURE_TOL);
        while ring.len() > 1 && dist(&ring[0], &ring[ring.len() - 1]) <= CLOSURE_TOL {
            ring.pop();
        }
        ring
    }

    /// The signed area enclosed by the outline, positive when the points run counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// The axis-aligned bounding box of the outline, or `None` if the outline has no points.
    pub fn aabb(&self) -> Option<Aabb2> {
        if self.points.is_empty() {
            None
        } else {
            Some(Aabb2::from_points(&self.points))
        }
    }

    /// Triangulates the interior of the outline. The vertex ring is re-ordered counter-clockwise
    /// if necessary, so every triangle has a positive orientation in the XY plane.
    ///
    /// Returns a `DegenerateGeometry` error if the outline has fewer than three distinct vertices
    /// or encloses no area.
    ///
    /// returns: Result<PolygonTriangulation, FoilError>
    pub fn triangulate(&self) -> Result<PolygonTriangulation> {
        let mut ring = self.ring();
        if ring.len() < 3 {
            return Err(FoilError::DegenerateGeometry(format!(
                "outline has {} distinct vertices, at least 3 are required",
                ring.len()
            )));
        }

        let area = signed_area(&ring);
        let extent = self.aabb().map(|b| b.extents().norm()).unwrap_or(0.0);
        if !area.is_finite() || area.abs() <= 1e-12 * extent * extent {
            return Err(FoilError::DegenerateGeometry(
                "outline encloses no area".to_string(),
            ));
        }

        if area < 0.0 {
            ring.reverse();
        }

        let faces = triangulate_ear_clipping(&ring);
        Ok(PolygonTriangulation { ring, faces })
    }
}
