//! Parametric generation of NACA airfoil sections and spanwise lofting of those sections into
//! triangulated wing-like solids.

pub mod airfoil;
pub mod common;
pub mod config;
mod errors;
pub mod geom2;
pub mod geom3;
pub mod loft;

pub use errors::FoilError;

pub type Result<T> = std::result::Result<T, FoilError>;

pub use airfoil::{
    AirfoilProfile, Designation, NacaCode, ProfileOptions, SamplingOptions, Series, Spacing,
    generate,
};
pub use config::{FoilBuild, FoilConfig, SectionSource};
pub use geom2::{Aabb2, ClosedPolygon, Iso2, Point2, Vector2};
pub use geom3::{Aabb3, Iso3, LoftMesh, Point3, Vector3};
pub use loft::{LoftParams, SliceTransform, loft};
