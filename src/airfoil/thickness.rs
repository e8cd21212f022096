//! The NACA half-thickness distribution shared by every generated section.

/// Coefficient of the x^4 term for the historical open trailing edge
pub const OPEN_TE_X4: f64 = 0.1015;

/// Coefficient of the x^4 term which brings the thickness to zero at the trailing edge
pub const CLOSED_TE_X4: f64 = 0.1036;

/// Returns the half-thickness of the section, measured perpendicular to the camber line, as a
/// fraction of the chord at the chord fraction `x`.
///
/// # Arguments
///
/// * `x`: the chord fraction, from 0.0 at the leading edge to 1.0 at the trailing edge
/// * `thickness_ratio`: the maximum thickness as a fraction of the chord, 0.12 on a NACA 2412
/// * `closed_trailing_edge`: use the coefficient which closes the trailing edge instead of the
///   standard form, which leaves a small finite thickness there
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use foilgen::airfoil::half_thickness;
/// use approx::assert_relative_eq;
/// assert_eq!(half_thickness(0.0, 0.12, false), 0.0);
/// assert_relative_eq!(half_thickness(1.0, 0.12, false), 0.00126, epsilon = 1e-9);
/// ```
pub fn half_thickness(x: f64, thickness_ratio: f64, closed_trailing_edge: bool) -> f64 {
    let a4 = if closed_trailing_edge {
        CLOSED_TE_X4
    } else {
        OPEN_TE_X4
    };

    5.0 * thickness_ratio
        * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
            - a4 * x.powi(4))
}
