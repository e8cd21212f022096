//! This module contains the parameter document which drives the full pipeline, from the section
//! definition through profile generation to the lofted mesh. It mirrors the fields a user edits
//! in an interactive tool and can be loaded from JSON.

use crate::Result;
use crate::airfoil::{AirfoilProfile, ProfileOptions, generate};
use crate::geom2::ClosedPolygon;
use crate::geom3::LoftMesh;
use crate::loft::{LoftParams, loft};
use log::debug;
use serde::{Deserialize, Serialize};

/// Where the section outline comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionSource {
    /// A generated NACA section, `0012` is written as the integer `12`
    Naca { designation: u32 },

    /// An outline imported as `[x, y]` pairs, used verbatim as the section polygon
    Coordinates { points: Vec<[f64; 2]> },
}

impl Default for SectionSource {
    fn default() -> Self {
        SectionSource::Naca { designation: 2412 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoilConfig {
    pub section: SectionSource,

    /// Options for generated sections, ignored for imported coordinates
    pub profile: ProfileOptions,

    pub loft: LoftParams,
}

/// Everything produced by running a `FoilConfig`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoilBuild {
    /// The generated profile, absent when the section was imported
    pub profile: Option<AirfoilProfile>,
    pub polygon: ClosedPolygon,
    pub mesh: LoftMesh,
}

impl FoilConfig {
    /// Reads a configuration from a JSON document. Missing fields take their default values, and
    /// a document which cannot be parsed produces a `Config` error.
    ///
    /// # Examples
    ///
    /// ```
    /// use foilgen::{FoilConfig, SectionSource};
    /// let config = FoilConfig::from_json(r#"{ "section": { "kind": "naca", "designation": 12 } }"#).unwrap();
    /// assert_eq!(config.section, SectionSource::Naca { designation: 12 });
    /// assert_eq!(config.profile.station_count, 1000);
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Runs the pipeline: builds the section outline, either by generating the NACA profile or
    /// from the imported coordinates, then lofts it into a mesh.
    pub fn build(&self) -> Result<FoilBuild> {
        let (profile, polygon) = match &self.section {
            SectionSource::Naca { designation } => {
                let profile = generate(*designation, &self.profile)?;
                let polygon = profile.to_polygon();
                (Some(profile), polygon)
            }
            SectionSource::Coordinates { points } => (None, ClosedPolygon::from_xy(points)),
        };

        let mesh = loft(&polygon, &self.loft)?;
        debug!(
            "built {} into a mesh of {} faces",
            self.section_label(),
            mesh.faces().len()
        );

        Ok(FoilBuild {
            profile,
            polygon,
            mesh,
        })
    }

    fn section_label(&self) -> String {
        match &self.section {
            SectionSource::Naca { designation } => format!("NACA {:04}", designation),
            SectionSource::Coordinates { points } => format!("{} imported points", points.len()),
        }
    }
}
