//! This module has an implementation of ear clipping triangulation for simple polygons without
//! holes. It is used for capping airfoil sections, which are simple outlines of at most a few
//! thousand vertices, so the straightforward quadratic algorithm is sufficient.

use crate::Point2;
use crate::geom2::signed_area;
use log::warn;

/// Triangulate a simple polygon by ear clipping. The polygon is given as an open ring of
/// vertices (the first vertex must not be repeated at the end). The resulting triangles index
/// into `ring` and share the orientation of the ring, so a counter-clockwise ring produces
/// counter-clockwise triangles.
///
/// If the polygon is not simple and no ear can be found, the remaining vertices are closed with a
/// triangle fan and a warning is logged.
///
/// # Arguments
///
/// * `ring`: the vertices of the polygon in order, without a closing duplicate
///
/// returns: Vec<[u32; 3], Global>
///
/// # Examples
///
/// ```
/// use foilgen::Point2;
/// use foilgen::common::triangulation::triangulate_ear_clipping;
/// let ring = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// let faces = triangulate_ear_clipping(&ring);
/// assert_eq!(faces.len(), 2);
/// ```
pub fn triangulate_ear_clipping(ring: &[Point2]) -> Vec<[u32; 3]> {
    if ring.len() < 3 {
        return Vec::new();
    }

    let mut state = EarClipState::new(ring);
    let mut faces = Vec::with_capacity(ring.len() - 2);

    // Walk around the ring clipping ears as they are found. Every time a vertex fails the ear
    // test the miss counter advances, and once every remaining vertex has been tried without
    // success the polygon cannot be clipped any further.
    let mut current = 0;
    let mut misses = 0;
    while state.remaining > 3 {
        if state.is_ear(current) {
            let next = state.next[current];
            faces.push(state.face(current));
            state.remove(current);
            current = next;
            misses = 0;
        } else {
            current = state.next[current];
            misses += 1;
            if misses > state.remaining {
                warn!(
                    "ear clipping stalled with {} vertices remaining, closing with a fan",
                    state.remaining
                );
                faces.extend(state.fan(current));
                return faces;
            }
        }
    }

    faces.push(state.face(current));
    faces
}

struct EarClipState<'a> {
    ring: &'a [Point2],

    /// The index of the previous remaining vertex for each vertex
    prev: Vec<usize>,

    /// The index of the next remaining vertex for each vertex
    next: Vec<usize>,

    /// The number of vertices not yet clipped
    remaining: usize,

    /// +1.0 for a counter-clockwise ring, -1.0 for a clockwise ring
    sign: f64,
}

impl<'a> EarClipState<'a> {
    fn new(ring: &'a [Point2]) -> Self {
        let n = ring.len();
        let sign = if signed_area(ring) < 0.0 { -1.0 } else { 1.0 };
        Self {
            ring,
            prev: (0..n).map(|i| (i + n - 1) % n).collect(),
            next: (0..n).map(|i| (i + 1) % n).collect(),
            remaining: n,
            sign,
        }
    }

    fn face(&self, i: usize) -> [u32; 3] {
        [self.prev[i] as u32, i as u32, self.next[i] as u32]
    }

    fn remove(&mut self, i: usize) {
        let p = self.prev[i];
        let n = self.next[i];
        self.next[p] = n;
        self.prev[n] = p;
        self.remaining -= 1;
    }

    /// Oriented cross product of the turn a -> b -> c, positive when the turn agrees with the
    /// orientation of the ring.
    fn turn(&self, a: &Point2, b: &Point2, c: &Point2) -> f64 {
        self.sign * (b - a).perp(&(c - b))
    }

    fn is_ear(&self, i: usize) -> bool {
        let ia = self.prev[i];
        let ic = self.next[i];
        let a = &self.ring[ia];
        let b = &self.ring[i];
        let c = &self.ring[ic];

        // Reflex and degenerate corners are never ears
        if self.turn(a, b, c) <= 0.0 {
            return false;
        }

        // No other remaining vertex may lie inside or on the candidate triangle
        let mut j = self.next[ic];
        while j != ia {
            let p = &self.ring[j];
            let coincident = p == a || p == b || p == c;
            if !coincident
                && self.turn(a, b, p) >= 0.0
                && self.turn(b, c, p) >= 0.0
                && self.turn(c, a, p) >= 0.0
            {
                return false;
            }
            j = self.next[j];
        }

        true
    }

    fn fan(&self, start: usize) -> Vec<[u32; 3]> {
        let mut faces = Vec::with_capacity(self.remaining - 2);
        let mut j = self.next[start];
        while self.next[j] != start {
            faces.push([start as u32, j as u32, self.next[j] as u32]);
            j = self.next[j];
        }
        faces
    }
}
