pub mod mesh;

pub use mesh::LoftMesh;

pub type Point3 = parry3d_f64::na::Point3<f64>;
pub type Vector3 = parry3d_f64::na::Vector3<f64>;
pub type Iso3 = parry3d_f64::na::Isometry3<f64>;
pub type Aabb3 = parry3d_f64::bounding_volume::Aabb;
