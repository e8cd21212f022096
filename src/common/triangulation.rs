//! Planar triangulation of polygon outlines.

mod ear_clipping;

pub use ear_clipping::triangulate_ear_clipping;
