//! This module contains the spanwise lofting of a closed section outline into a triangulated
//! solid. The section lies in the XY plane with x along the chord and y through the thickness,
//! and the span runs along +z. Each spanwise slice is a rigid copy of the section which may be
//! twisted and scaled, consecutive slices are stitched together with quads, and the root and tip
//! are closed with the planar triangulation of the section.

use crate::common::lerp;
use crate::common::points::transform_points;
use crate::geom2::{ClosedPolygon, Iso2, Point2, PolygonTriangulation};
use crate::geom3::{Iso3, LoftMesh, Point3, Vector3};
use crate::{FoilError, Result};
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

/// Parameters of a spanwise loft. Fields missing from a serialized document take their default
/// values, which describe a flat, untwisted and unscaled section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoftParams {
    /// The length of the loft along +z. A span of zero produces a single flat layer.
    pub span: f64,

    pub twist_enabled: bool,

    /// Twist at the tip in degrees. Positive values rotate the tip nose-down (washout), so each
    /// slice's incidence changes by `-twist_deg * u`.
    pub twist_deg: f64,

    pub scale_enabled: bool,
    pub root_scale: f64,
    pub tip_scale: f64,

    /// Global pitch of the finished solid in degrees, positive values raise the leading edge
    pub angle_of_attack_deg: f64,

    /// The number of spanwise intervals, which produces `span_segments + 1` slices
    pub span_segments: usize,
}

impl Default for LoftParams {
    fn default() -> Self {
        Self {
            span: 0.0,
            twist_enabled: false,
            twist_deg: 0.0,
            scale_enabled: false,
            root_scale: 1.0,
            tip_scale: 1.0,
            angle_of_attack_deg: 0.0,
            span_segments: 1,
        }
    }
}

/// The placement of a single spanwise slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceTransform {
    /// The spanwise fraction `u` of the slice, 0.0 at the root and 1.0 at the tip
    pub fraction: f64,

    /// The z position of the slice
    pub offset: f64,

    /// The uniform in-plane scale factor
    pub scale: f64,

    /// The change of incidence of the slice in degrees, positive values raise the leading edge
    /// in the same sense as the angle of attack
    pub twist_deg: f64,
}

impl SliceTransform {
    /// Places a 2D ring of section points in 3D: pitch about the origin by the twist, scale
    /// uniformly, then move to the slice's spanwise position. With the chord running along +x, a
    /// positive incidence is a clockwise rotation in the XY plane.
    ///
    /// # Arguments
    ///
    /// * `ring`: the section points in the XY plane
    ///
    /// returns: Vec<OPoint<f64, Const<3>>, Global>
    pub fn apply(&self, ring: &[Point2]) -> Vec<Point3> {
        let rotation = Iso2::rotation(-self.twist_deg.to_radians());
        transform_points(ring, &rotation)
            .iter()
            .map(|p| Point3::new(p.x * self.scale, p.y * self.scale, self.offset))
            .collect()
    }
}

fn check(ok: bool, message: impl FnOnce() -> String) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(FoilError::InvalidArgument(message()))
    }
}

impl LoftParams {
    /// Checks the numeric ranges of the parameters, returning an `InvalidArgument` error for the
    /// first one that is out of range. Scale factors are checked even when scaling is disabled.
    pub fn validate(&self) -> Result<()> {
        check(self.span.is_finite() && self.span >= 0.0, || {
            format!("span must be finite and non-negative, got {}", self.span)
        })?;
        check(self.span_segments >= 1, || {
            "at least one span segment is required".to_string()
        })?;
        check(self.root_scale.is_finite() && self.root_scale > 0.0, || {
            format!("root scale must be positive, got {}", self.root_scale)
        })?;
        check(self.tip_scale.is_finite() && self.tip_scale > 0.0, || {
            format!("tip scale must be positive, got {}", self.tip_scale)
        })?;
        check(self.twist_deg.is_finite(), || {
            format!("twist must be finite, got {}", self.twist_deg)
        })?;
        check(self.angle_of_attack_deg.is_finite(), || {
            format!(
                "angle of attack must be finite, got {}",
                self.angle_of_attack_deg
            )
        })
    }

    /// Returns true if the loft produces a single flat layer
    pub fn is_flat(&self) -> bool {
        self.span == 0.0
    }

    /// Computes the placement of every spanwise slice, ordered from root to tip. A flat loft has
    /// a single untransformed slice; twist and scale only act along a span.
    ///
    /// # Examples
    ///
    /// ```
    /// use foilgen::LoftParams;
    /// let params = LoftParams {
    ///     span: 2.0,
    ///     span_segments: 4,
    ///     twist_enabled: true,
    ///     twist_deg: 10.0,
    ///     ..Default::default()
    /// };
    /// let twists = params.slices().unwrap().iter().map(|s| s.twist_deg).collect::<Vec<_>>();
    /// assert_eq!(twists, vec![0.0, -2.5, -5.0, -7.5, -10.0]);
    /// ```
    pub fn slices(&self) -> Result<Vec<SliceTransform>> {
        self.validate()?;

        if self.is_flat() {
            return Ok(vec![SliceTransform {
                fraction: 0.0,
                offset: 0.0,
                scale: 1.0,
                twist_deg: 0.0,
            }]);
        }

        let n = self.span_segments;
        let slices = (0..=n)
            .map(|k| {
                let u = k as f64 / n as f64;
                SliceTransform {
                    fraction: u,
                    offset: self.span * u,
                    scale: if self.scale_enabled {
                        lerp(self.root_scale, self.tip_scale, u)
                    } else {
                        1.0
                    },
                    twist_deg: if self.twist_enabled {
                        -self.twist_deg * u
                    } else {
                        0.0
                    },
                }
            })
            .collect();

        Ok(slices)
    }
}

/// Lofts a closed section outline into a triangulated mesh.
///
/// The outline is re-ordered counter-clockwise and triangulated by ear clipping. For a flat loft
/// the result is that single triangulated layer at z = 0, facing +z. Otherwise every slice gets a
/// copy of the outline ring, consecutive rings are joined by side quads split into two triangles,
/// and the root and tip are capped facing -z and +z respectively, giving a closed solid with
/// outward facing triangles.
///
/// The finished mesh is rotated by `-angle_of_attack_deg` about the spanwise axis, after the
/// per-slice twist and scale, and then translated so the center of its bounding box is at the
/// origin.
///
/// # Arguments
///
/// * `polygon`: the section outline in the XY plane
/// * `params`: the loft parameters
///
/// returns: Result<LoftMesh, FoilError>
///
/// # Examples
///
/// ```
/// use foilgen::{ClosedPolygon, LoftParams, loft};
/// let square = ClosedPolygon::from_xy(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
/// let params = LoftParams { span: 2.0, ..Default::default() };
/// let mesh = loft(&square, &params).unwrap();
/// assert_eq!(mesh.vertices().len(), 8);
/// assert!((mesh.volume() - 2.0).abs() < 1e-12);
/// ```
pub fn loft(polygon: &ClosedPolygon, params: &LoftParams) -> Result<LoftMesh> {
    let slices = params.slices()?;
    let PolygonTriangulation { ring, faces: cap } = polygon.triangulate()?;

    let m = ring.len() as u32;
    let vertices = slices
        .iter()
        .flat_map(|s| s.apply(&ring))
        .collect::<Vec<_>>();

    let faces = if slices.len() == 1 {
        cap
    } else {
        let tip = (slices.len() as u32 - 1) * m;
        let mut faces = Vec::with_capacity(2 * cap.len() + 2 * (slices.len() - 1) * ring.len());

        // Root cap faces -z, so its winding is reversed
        faces.extend(cap.iter().map(|[a, b, c]| [*a, *c, *b]));

        for k in 0..slices.len() as u32 - 1 {
            let r0 = k * m;
            let r1 = r0 + m;
            for (i, j) in (0..m).circular_tuple_windows() {
                faces.push([r0 + i, r0 + j, r1 + j]);
                faces.push([r0 + i, r1 + j, r1 + i]);
            }
        }

        faces.extend(cap.iter().map(|f| f.map(|v| v + tip)));
        faces
    };

    let mut mesh = LoftMesh::new(vertices, faces)?;
    let pitch = Vector3::z() * -params.angle_of_attack_deg.to_radians();
    mesh.transform_by(&Iso3::rotation(pitch));
    let shift = mesh.center_on_origin();

    debug!(
        "lofted {} ring vertices over {} slices into {} vertices and {} faces, shifted by [{}, {}, {}]",
        m,
        slices.len(),
        mesh.vertices().len(),
        mesh.faces().len(),
        shift.x,
        shift.y,
        shift.z
    );

    Ok(mesh)
}
