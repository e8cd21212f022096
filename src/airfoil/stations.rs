//! Chordwise station sampling shared by the upper and lower surfaces of a section.

use crate::common::{DiscreteDomain, cosine_space, linear_space};
use crate::{FoilError, Result};
use serde::{Deserialize, Serialize};

/// How stations are distributed along the chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    /// Evenly spaced stations
    Linear,

    /// Stations clustered towards the leading and trailing edges, where the surface curvature is
    /// highest, and sparse around mid-chord
    #[default]
    Cosine,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    pub station_count: usize,
    pub spacing: Spacing,
}

impl SamplingOptions {
    pub fn new(station_count: usize, spacing: Spacing) -> Self {
        Self {
            station_count,
            spacing,
        }
    }
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self::new(1000, Spacing::Cosine)
    }
}

/// Produces the normalized chordwise stations, starting at exactly 0.0 and ending at exactly 1.0.
/// At least two stations are required.
///
/// # Arguments
///
/// * `options`: the number of stations and their distribution
///
/// returns: Result<DiscreteDomain, FoilError>
///
/// # Examples
///
/// ```
/// use foilgen::{SamplingOptions, Spacing};
/// use foilgen::airfoil::sample_stations;
/// let stations = sample_stations(&SamplingOptions::new(5, Spacing::Linear)).unwrap();
/// assert_eq!(stations.values(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn sample_stations(options: &SamplingOptions) -> Result<DiscreteDomain> {
    if options.station_count < 2 {
        return Err(FoilError::InvalidArgument(format!(
            "at least 2 stations are required, got {}",
            options.station_count
        )));
    }

    Ok(match options.spacing {
        Spacing::Linear => linear_space(0.0, 1.0, options.station_count),
        Spacing::Cosine => cosine_space(0.0, 1.0, options.station_count),
    })
}
