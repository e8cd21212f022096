//! This module contains the triangle mesh produced by lofting a section along the span.

use crate::geom3::{Aabb3, Iso3, Point3, Vector3};
use crate::{FoilError, Result};
use parry3d_f64::shape::{TriMesh, TriMeshBuilderError, Triangle};
use serde::{Deserialize, Serialize};

impl From<TriMeshBuilderError> for FoilError {
    fn from(value: TriMeshBuilderError) -> Self {
        FoilError::DegenerateGeometry(value.to_string())
    }
}

/// An indexed triangle mesh. Faces index into `vertices` and are wound counter-clockwise when
/// viewed from outside the solid, so their normals point outwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(into = "MeshBuffers", try_from = "MeshBuffers")]
pub struct LoftMesh {
    shape: TriMesh,
}

/// The serialized form of a mesh, only the vertex and face buffers
#[derive(Clone, Serialize, Deserialize)]
struct MeshBuffers {
    vertices: Vec<Point3>,
    faces: Vec<[u32; 3]>,
}

impl From<LoftMesh> for MeshBuffers {
    fn from(value: LoftMesh) -> Self {
        Self {
            vertices: value.vertices().to_vec(),
            faces: value.faces().to_vec(),
        }
    }
}

impl TryFrom<MeshBuffers> for LoftMesh {
    type Error = FoilError;

    fn try_from(value: MeshBuffers) -> Result<Self> {
        LoftMesh::new(value.vertices, value.faces)
    }
}

impl PartialEq for LoftMesh {
    fn eq(&self, other: &Self) -> bool {
        self.vertices() == other.vertices() && self.faces() == other.faces()
    }
}

impl LoftMesh {
    /// Create a mesh from vertex and face buffers. A mesh without any faces produces a
    /// `DegenerateGeometry` error.
    pub fn new(vertices: Vec<Point3>, faces: Vec<[u32; 3]>) -> Result<Self> {
        let shape = TriMesh::new(vertices, faces)?;
        Ok(Self { shape })
    }

    pub fn tri_mesh(&self) -> &TriMesh {
        &self.shape
    }

    pub fn vertices(&self) -> &[Point3] {
        self.shape.vertices()
    }

    pub fn faces(&self) -> &[[u32; 3]] {
        self.shape.indices()
    }

    pub fn triangle(&self, i: u32) -> Triangle {
        self.shape.triangle(i)
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.shape.triangles()
    }

    /// The axis-aligned bounding box of the vertices
    pub fn aabb(&self) -> Aabb3 {
        let aabb = self.shape.local_aabb();
        Aabb3::new(aabb.mins, aabb.maxs)
    }

    /// Returns true if every vertex lies in a single plane of constant z.
    pub fn is_flat(&self) -> bool {
        let e = self.aabb().extents();
        e.z <= 1e-12 * e.norm().max(1.0)
    }

    /// The total area of all triangles in the mesh
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|t| t.area()).sum()
    }

    /// The signed volume enclosed by the mesh, computed by summing the signed volumes of the
    /// tetrahedra formed by each face and the origin. For a closed mesh with outward facing
    /// normals the result is positive, and it is zero for a flat mesh.
    ///
    /// returns: f64
    ///
    /// # Examples
    ///
    /// ```
    /// use foilgen::{LoftMesh, Point3};
    /// // A unit right tetrahedron with outward winding
    /// let mesh = LoftMesh::new(
    ///     vec![
    ///         Point3::new(0.0, 0.0, 0.0),
    ///         Point3::new(1.0, 0.0, 0.0),
    ///         Point3::new(0.0, 1.0, 0.0),
    ///         Point3::new(0.0, 0.0, 1.0),
    ///     ],
    ///     vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
    /// )
    /// .unwrap();
    /// assert!((mesh.volume() - 1.0 / 6.0).abs() < 1e-12);
    /// ```
    pub fn volume(&self) -> f64 {
        self.triangles()
            .map(|t| t.a.coords.dot(&t.b.coords.cross(&t.c.coords)))
            .sum::<f64>()
            / 6.0
    }

    /// Transforms every vertex of the mesh by the isometry. Face winding is unaffected.
    pub fn transform_by(&mut self, transform: &Iso3) {
        self.shape.transform_vertices(transform);
    }

    /// Translates the mesh so that the center of its bounding box is at the origin, returning the
    /// translation that was applied.
    pub fn center_on_origin(&mut self) -> Vector3 {
        let shift = -self.aabb().center().coords;
        self.transform_by(&Iso3::translation(shift.x, shift.y, shift.z));
        shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    /// An axis aligned box with its minimum corner at the origin and outward facing triangles
    fn create_box(l: f64, w: f64, h: f64) -> LoftMesh {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(l, 0.0, 0.0),
            Point3::new(l, w, 0.0),
            Point3::new(0.0, w, 0.0),
            Point3::new(0.0, 0.0, h),
            Point3::new(l, 0.0, h),
            Point3::new(l, w, h),
            Point3::new(0.0, w, h),
        ];
        let faces = vec![
            [0, 2, 1],
            [0, 3, 2],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [1, 2, 6],
            [1, 6, 5],
            [2, 3, 7],
            [2, 7, 6],
            [3, 0, 4],
            [3, 4, 7],
        ];
        LoftMesh::new(vertices, faces).unwrap()
    }

    #[test]
    fn box_properties() {
        let mesh = create_box(1.0, 2.0, 3.0);
        assert_relative_eq!(mesh.volume(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(mesh.surface_area(), 22.0, epsilon = 1e-12);
        assert_relative_eq!(mesh.triangle(2).area(), 1.0, epsilon = 1e-12);
        assert!(!mesh.is_flat());
    }

    #[test]
    fn volume_invariant_under_isometry() {
        let mut mesh = create_box(1.0, 2.0, 3.0);
        let iso = Iso3::new(Vector3::new(4.0, -2.0, 7.0), Vector3::new(0.3, -0.2, 0.9));
        mesh.transform_by(&iso);
        assert_relative_eq!(mesh.volume(), 6.0, epsilon = 1e-10);
        assert_relative_eq!(mesh.surface_area(), 22.0, epsilon = 1e-10);
    }

    #[test]
    fn center_on_origin() {
        let mut mesh = create_box(1.0, 2.0, 3.0);
        let shift = mesh.center_on_origin();
        assert_relative_eq!(shift, Vector3::new(-0.5, -1.0, -1.5), epsilon = 1e-12);

        let aabb = mesh.aabb();
        assert_relative_eq!(aabb.center(), Point3::origin(), epsilon = 1e-12);
        assert_relative_eq!(aabb.extents(), Vector3::new(1.0, 2.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn flat_mesh() {
        let mut mesh = LoftMesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
        .unwrap();
        assert!(mesh.is_flat());
        assert_eq!(mesh.volume(), 0.0);
        assert_relative_eq!(mesh.surface_area(), 0.5, epsilon = 1e-12);

        mesh.transform_by(&Iso3::rotation(Vector3::z() * FRAC_PI_2));
        assert!(mesh.is_flat());
        assert_relative_eq!(mesh.vertices()[1], Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn mesh_without_faces() {
        let result = LoftMesh::new(vec![Point3::origin()], Vec::new());
        assert!(matches!(result, Err(FoilError::DegenerateGeometry(_))));
    }

    #[test]
    fn buffers_survive_json() {
        let mesh = create_box(1.0, 2.0, 3.0);
        let text = serde_json::to_string(&mesh).unwrap();
        assert!(text.contains("\"faces\""));

        let read: LoftMesh = serde_json::from_str(&text).unwrap();
        assert_eq!(read, mesh);
    }
}
