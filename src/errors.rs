use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors produced while generating airfoil sections and lofting them into meshes.
#[derive(Debug, Clone, PartialEq)]
pub enum FoilError {
    /// A numeric parameter was outside of its valid range
    InvalidArgument(String),

    /// The designation's digit count or digit values have no implemented formula
    UnsupportedSeries(String),

    /// A section outline could not form a polygon
    DegenerateGeometry(String),

    /// A configuration document could not be read
    Config(String),
}

impl Display for FoilError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FoilError::InvalidArgument(m) => write!(f, "invalid argument: {}", m),
            FoilError::UnsupportedSeries(m) => write!(f, "unsupported series: {}", m),
            FoilError::DegenerateGeometry(m) => write!(f, "degenerate geometry: {}", m),
            FoilError::Config(m) => write!(f, "configuration error: {}", m),
        }
    }
}

impl Error for FoilError {}

impl From<serde_json::Error> for FoilError {
    fn from(value: serde_json::Error) -> Self {
        FoilError::Config(value.to_string())
    }
}
