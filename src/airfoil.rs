//! This module contains the parametric generation of NACA airfoil sections. A section is defined
//! by an integer designation whose digit count selects the series (four digit, five digit, or six
//! series) and whose digits select the mean camber line and the thickness. The generator samples
//! the section at a set of chordwise stations and offsets the thickness perpendicular to the
//! camber line to produce the upper and lower surfaces.

mod camber;
mod designation;
mod stations;
mod thickness;

use crate::geom2::{ClosedPolygon, Point2};
use crate::{FoilError, Result};
use itertools::{Itertools, izip};
use log::debug;
use serde::{Deserialize, Serialize};

pub use camber::{MeanLine, Naca4MeanLine, Naca5MeanLine, UniformLoadMeanLine};
pub use designation::{Designation, NacaCode, Series};
pub use stations::{SamplingOptions, Spacing, sample_stations};
pub use thickness::{CLOSED_TE_X4, OPEN_TE_X4, half_thickness};

/// The options controlling how a section is sampled and placed. Fields missing from a serialized
/// document take their default values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOptions {
    /// Tilt of the section in degrees, positive values raise the leading edge
    pub alpha_deg: f64,

    /// The chord length, all output coordinates are scaled by it
    pub chord: f64,

    /// The number of chordwise stations, at least 2
    pub station_count: usize,

    pub spacing: Spacing,

    /// Close the trailing edge to a point instead of leaving the standard finite thickness
    pub closed_trailing_edge: bool,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            alpha_deg: 0.0,
            chord: 1.0,
            station_count: 1000,
            spacing: Spacing::Cosine,
            closed_trailing_edge: false,
        }
    }
}

impl ProfileOptions {
    pub fn sampling(&self) -> SamplingOptions {
        SamplingOptions::new(self.station_count, self.spacing)
    }

    /// Checks the numeric ranges of the options, returning an `InvalidArgument` error for the
    /// first one that is out of range.
    pub fn validate(&self) -> Result<()> {
        if !self.chord.is_finite() || self.chord <= 0.0 {
            return Err(FoilError::InvalidArgument(format!(
                "chord must be a positive finite length, got {}",
                self.chord
            )));
        }

        if !self.alpha_deg.is_finite() || self.alpha_deg.abs() >= 90.0 {
            return Err(FoilError::InvalidArgument(format!(
                "alpha must be finite and strictly between -90 and 90 degrees, got {}",
                self.alpha_deg
            )));
        }

        if self.station_count < 2 {
            return Err(FoilError::InvalidArgument(format!(
                "at least 2 stations are required, got {}",
                self.station_count
            )));
        }

        Ok(())
    }
}

/// A generated airfoil section. Every array has one entry per chordwise station. The upper and
/// lower surface points bracket the camber line along its local normal, so their x values differ
/// from the stations wherever the camber line is sloped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirfoilProfile {
    stations: Vec<f64>,
    camber_y: Vec<f64>,
    upper_x: Vec<f64>,
    upper_y: Vec<f64>,
    lower_x: Vec<f64>,
    lower_y: Vec<f64>,
}

impl AirfoilProfile {
    /// The normalized chordwise stations, from 0.0 to 1.0
    pub fn stations(&self) -> &[f64] {
        &self.stations
    }

    /// The height of the camber line at each station, scaled by the chord
    pub fn camber_y(&self) -> &[f64] {
        &self.camber_y
    }

    pub fn upper_x(&self) -> &[f64] {
        &self.upper_x
    }

    pub fn upper_y(&self) -> &[f64] {
        &self.upper_y
    }

    pub fn lower_x(&self) -> &[f64] {
        &self.lower_x
    }

    pub fn lower_y(&self) -> &[f64] {
        &self.lower_y
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// The upper surface points ordered from the leading edge to the trailing edge
    pub fn upper(&self) -> Vec<Point2> {
        zip_points(&self.upper_x, &self.upper_y)
    }

    /// The lower surface points ordered from the leading edge to the trailing edge
    pub fn lower(&self) -> Vec<Point2> {
        zip_points(&self.lower_x, &self.lower_y)
    }

    /// The camber line points. The x values are the stations scaled by the chord, recovered from
    /// the midpoint of the upper and lower surface points.
    pub fn camber(&self) -> Vec<Point2> {
        izip!(&self.upper_x, &self.lower_x, &self.camber_y)
            .map(|(xu, xl, yc)| Point2::new((xu + xl) * 0.5, *yc))
            .collect()
    }

    /// The closed outline of the section, see `ClosedPolygon::from_profile`
    pub fn to_polygon(&self) -> ClosedPolygon {
        ClosedPolygon::from_profile(self)
    }
}

fn zip_points(x: &[f64], y: &[f64]) -> Vec<Point2> {
    x.iter().zip(y).map(|(x, y)| Point2::new(*x, *y)).collect()
}

/// Generates the coordinates of a NACA section. The designation is classified by its digit count
/// and its digits are validated before any coordinates are computed, so an unsupported code never
/// produces a partial profile.
///
/// The tilt `alpha_deg` is applied as a linearized pitch about mid-chord: the camber slope is
/// reduced by `tan(alpha)` and the camber line is raised by `(0.5 - x) * sin(alpha)`. This is
/// close to a rigid rotation for small angles only.
///
/// Where the mean line slope is unbounded, at the ends of the six series mean line, the thickness
/// is laid off perpendicular to the chord so an open trailing edge keeps its vertical gap.
///
/// # Arguments
///
/// * `designation`: the integer NACA designation, such as `2412`, `23012` or `641212`. The
///   symmetric `0012` section is the integer `12`.
/// * `options`: chord, tilt, sampling and trailing edge options
///
/// returns: Result<AirfoilProfile, FoilError>
///
/// # Examples
///
/// ```
/// use foilgen::{ProfileOptions, Spacing, generate};
/// let options = ProfileOptions {
///     station_count: 5,
///     spacing: Spacing::Linear,
///     ..Default::default()
/// };
/// let profile = generate(2412, &options).unwrap();
/// assert_eq!(profile.stations(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn generate(designation: u32, options: &ProfileOptions) -> Result<AirfoilProfile> {
    let designation = Designation::new(designation);
    let code = designation.decode()?;
    options.validate()?;

    let mean_line = code.mean_line()?;
    let stations = sample_stations(&options.sampling())?;
    let tc = code.thickness_ratio();
    let alpha = options.alpha_deg.to_radians();
    let (sin_a, tan_a) = (alpha.sin(), alpha.tan());
    let chord = options.chord;

    let (camber_y, upper_x, upper_y, lower_x, lower_y): (
        Vec<f64>,
        Vec<f64>,
        Vec<f64>,
        Vec<f64>,
        Vec<f64>,
    ) = stations
        .values()
        .iter()
        .map(|&x| {
            let t = half_thickness(x, tc, options.closed_trailing_edge);
            let yc = mean_line.camber(x) + (0.5 - x) * sin_a;
            let slope = mean_line.slope(x);
            let slope = if slope.is_finite() { slope } else { 0.0 };
            let theta = (slope - tan_a).atan();
            let (sin_t, cos_t) = theta.sin_cos();

            (
                yc * chord,
                (x - t * sin_t) * chord,
                (yc + t * cos_t) * chord,
                (x + t * sin_t) * chord,
                (yc - t * cos_t) * chord,
            )
        })
        .multiunzip();

    debug!(
        "generated NACA {} ({:?}) with {} stations, chord {}, alpha {} deg",
        designation,
        code.series(),
        stations.len(),
        chord,
        options.alpha_deg
    );

    Ok(AirfoilProfile {
        stations: stations.into_values(),
        camber_y,
        upper_x,
        upper_y,
        lower_x,
        lower_y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn linear(n: usize) -> ProfileOptions {
        ProfileOptions {
            station_count: n,
            spacing: Spacing::Linear,
            ..Default::default()
        }
    }

    #[test]
    fn naca_2412_five_stations() {
        let code = Designation::new(2412).decode().unwrap();
        assert_eq!(
            code,
            NacaCode::Four {
                max_camber: 2,
                camber_position: 4,
                thickness: 12
            }
        );

        let profile = generate(2412, &linear(5)).unwrap();
        assert_eq!(profile.len(), 5);
        assert_eq!(profile.stations(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(profile.camber_y()[0], 0.0);
        assert_relative_eq!(profile.camber_y()[4], 0.0, epsilon = 1e-12);
        assert_relative_eq!(
            profile.camber_y()[2],
            0.02 / 0.36 * (0.2 + 0.4 - 0.25),
            epsilon = 1e-12
        );

        // Upper and lower coincide at the leading edge
        assert_eq!(profile.upper()[0], profile.lower()[0]);

        // Upper surface lies above the lower surface everywhere else
        for i in 1..5 {
            assert!(profile.upper_y()[i] > profile.lower_y()[i]);
        }
    }

    #[test]
    fn naca_0012_is_symmetric() {
        let profile = generate(12, &ProfileOptions::default()).unwrap();
        assert_eq!(profile.len(), 1000);
        for i in 0..profile.len() {
            assert_eq!(profile.camber_y()[i], 0.0);
            assert_eq!(profile.upper_y()[i], -profile.lower_y()[i]);
            assert_eq!(profile.upper_x()[i], profile.lower_x()[i]);
            assert_eq!(profile.upper_x()[i], profile.stations()[i]);
        }
    }

    #[test_case(false, 0.00126)]
    #[test_case(true, 0.0)]
    fn trailing_edge_thickness(closed: bool, half: f64) {
        let options = ProfileOptions {
            closed_trailing_edge: closed,
            ..Default::default()
        };
        let profile = generate(12, &options).unwrap();
        let last = profile.len() - 1;
        assert_relative_eq!(profile.upper_y()[last], half, epsilon = 1e-12);
        assert_relative_eq!(profile.lower_y()[last], -half, epsilon = 1e-12);
        assert_eq!(profile.upper_y()[0], 0.0);
        assert_eq!(profile.lower_y()[0], 0.0);
    }

    #[test_case(2412)]
    #[test_case(23012)]
    #[test_case(23112)]
    #[test_case(641212)]
    fn generation_is_idempotent(designation: u32) {
        let options = ProfileOptions {
            alpha_deg: 3.0,
            chord: 1.5,
            ..Default::default()
        };
        let a = generate(designation, &options).unwrap();
        let b = generate(designation, &options).unwrap();
        assert_eq!(a, b);
    }

    #[test_case(1234567)]
    #[test_case(12345678)]
    #[test_case(123456789)]
    #[test_case(23312)]
    #[test_case(541212)]
    fn unsupported_designations(designation: u32) {
        let result = generate(designation, &ProfileOptions::default());
        assert!(matches!(result, Err(FoilError::UnsupportedSeries(_))));
    }

    #[test]
    fn naca_23012_camber_peak() {
        let profile = generate(23012, &linear(2001)).unwrap();
        let (i, y) = profile
            .camber_y()
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |a, (i, y)| if *y > a.1 { (i, *y) } else { a });

        assert_relative_eq!(profile.stations()[i], 0.15, epsilon = 2e-3);
        assert_relative_eq!(y, 0.0184, epsilon = 2e-4);
    }

    #[test]
    fn six_series_is_finite_and_symmetric_in_camber() {
        let profile = generate(641212, &linear(101)).unwrap();
        assert!(profile.upper().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        assert!(profile.lower().iter().all(|p| p.x.is_finite() && p.y.is_finite()));

        let c = profile.camber_y();
        for i in 0..c.len() {
            assert_relative_eq!(c[i], c[c.len() - 1 - i], epsilon = 1e-12);
        }
        assert_relative_eq!(c[50], 0.05516 * 0.2, epsilon = 1e-5);
        assert_eq!(profile.upper()[0], profile.lower()[0]);
    }

    #[test_case(0.0)]
    #[test_case(4.0)]
    fn six_series_open_trailing_edge(alpha_deg: f64) {
        let options = ProfileOptions {
            alpha_deg,
            ..linear(101)
        };
        let profile = generate(641212, &options).unwrap();
        let last = profile.len() - 1;
        let gap = profile.upper()[last] - profile.lower()[last];

        // The gap is the full trailing edge thickness, tilted only by alpha
        assert_relative_eq!(gap.norm(), 2.0 * 0.00126, epsilon = 1e-12);
        let a = alpha_deg.to_radians();
        assert_relative_eq!(gap.x, 2.0 * 0.00126 * a.sin(), epsilon = 1e-12);
        assert!(gap.y > 0.0);
    }

    #[test]
    fn chord_scales_all_coordinates() {
        let base = generate(2412, &linear(31)).unwrap();
        let options = ProfileOptions {
            chord: 2.5,
            ..linear(31)
        };
        let scaled = generate(2412, &options).unwrap();

        assert_eq!(base.stations(), scaled.stations());
        for (a, b) in base.upper().iter().zip(scaled.upper()) {
            assert_relative_eq!(a.coords * 2.5, b.coords, epsilon = 1e-12);
        }
        for (a, b) in base.lower().iter().zip(scaled.lower()) {
            assert_relative_eq!(a.coords * 2.5, b.coords, epsilon = 1e-12);
        }
    }

    #[test]
    fn alpha_raises_leading_edge() {
        let options = ProfileOptions {
            alpha_deg: 10.0,
            ..linear(5)
        };
        let profile = generate(12, &options).unwrap();
        let s = 10.0_f64.to_radians().sin();
        assert_relative_eq!(profile.camber_y()[0], 0.5 * s, epsilon = 1e-12);
        assert_relative_eq!(profile.camber_y()[2], 0.0, epsilon = 1e-12);
        assert_relative_eq!(profile.camber_y()[4], -0.5 * s, epsilon = 1e-12);

        // The thickness is rotated off the vertical by the tilt
        assert!(profile.upper_x()[2] > profile.stations()[2]);
        assert!(profile.lower_x()[2] < profile.stations()[2]);
    }

    #[test]
    fn camber_points_follow_stations() {
        let options = ProfileOptions {
            chord: 2.0,
            ..linear(11)
        };
        let profile = generate(4415, &options).unwrap();
        for (p, x) in profile.camber().iter().zip(profile.stations()) {
            assert_relative_eq!(p.x, x * 2.0, epsilon = 1e-12);
        }
    }

    #[test_case(0.0, 0.0, 100)]
    #[test_case(-1.0, 0.0, 100)]
    #[test_case(f64::NAN, 0.0, 100)]
    #[test_case(f64::INFINITY, 0.0, 100)]
    #[test_case(1.0, 90.0, 100)]
    #[test_case(1.0, f64::NAN, 100)]
    #[test_case(1.0, 0.0, 1)]
    fn invalid_options(chord: f64, alpha_deg: f64, station_count: usize) {
        let options = ProfileOptions {
            chord,
            alpha_deg,
            station_count,
            ..Default::default()
        };
        let result = generate(2412, &options);
        assert!(matches!(result, Err(FoilError::InvalidArgument(_))));
    }

    #[test]
    fn options_from_partial_json() {
        let options: ProfileOptions =
            serde_json::from_str(r#"{ "chord": 0.3, "spacing": "linear" }"#).unwrap();
        assert_eq!(options.chord, 0.3);
        assert_eq!(options.spacing, Spacing::Linear);
        assert_eq!(options.station_count, 1000);
    }
}
