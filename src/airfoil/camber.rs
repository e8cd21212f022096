//! This module contains the mean camber lines of the NACA section families. Each mean line gives
//! the height of the camber line above the chord and its slope at a fraction of the chord between
//! 0.0 (leading edge) and 1.0 (trailing edge).

use crate::{FoilError, Result};
use std::f64::consts::PI;

/// A mean camber line expressed as a function of the chord fraction.
pub trait MeanLine {
    /// Return the height of the camber line above the chord, as a fraction of the chord, at the
    /// chord fraction `x`
    fn camber(&self, x: f64) -> f64;

    /// Return the slope dy/dx of the camber line at the chord fraction `x`. The slope may be
    /// infinite at the leading and trailing edges.
    fn slope(&self, x: f64) -> f64;
}

/// The two-parabola mean line of the four digit sections. For example, a NACA 2412 section has a
/// maximum camber of 2% of the chord located at 40% of the chord.
pub struct Naca4MeanLine {
    m: f64,
    p: f64,
}

impl Naca4MeanLine {
    /// Create a new four digit mean line.
    ///
    /// # Arguments
    ///
    /// * `max_camber`: the maximum camber as a fraction of the chord, for example 0.02 on a
    ///   NACA 2412
    /// * `max_camber_position`: the location of the maximum camber as a fraction of the chord,
    ///   for example 0.4 on a NACA 2412
    ///
    /// returns: Naca4MeanLine
    pub fn new(max_camber: f64, max_camber_position: f64) -> Self {
        Self {
            m: max_camber,
            p: max_camber_position,
        }
    }
}

impl MeanLine for Naca4MeanLine {
    fn camber(&self, x: f64) -> f64 {
        if self.m == 0.0 {
            0.0
        } else if x < self.p {
            (self.m / self.p.powi(2)) * (2.0 * self.p * x - x.powi(2))
        } else {
            (self.m / (1.0 - self.p).powi(2)) * ((1.0 - 2.0 * self.p) + 2.0 * self.p * x - x.powi(2))
        }
    }

    fn slope(&self, x: f64) -> f64 {
        if self.m == 0.0 {
            0.0
        } else if x < self.p {
            (2.0 * self.m / self.p.powi(2)) * (self.p - x)
        } else {
            (2.0 * self.m / (1.0 - self.p).powi(2)) * (self.p - x)
        }
    }
}

/// Break point `r` and `k1` of the normal five digit mean lines for a design lift coefficient of
/// 0.3, indexed by the camber position digit 1 to 5.
const NORMAL_CONSTANTS: [(f64, f64); 5] = [
    (0.0580, 361.400),
    (0.1260, 51.640),
    (0.2025, 15.957),
    (0.2900, 6.643),
    (0.3910, 3.230),
];

/// Break point `r`, `k1` and `k2/k1` of the reflexed five digit mean lines for a design lift
/// coefficient of 0.3, indexed by the camber position digit 2 to 5.
const REFLEXED_CONSTANTS: [(f64, f64, f64); 4] = [
    (0.1300, 51.990, 0.000764),
    (0.2170, 15.793, 0.00677),
    (0.3180, 6.520, 0.0303),
    (0.4410, 3.191, 0.1355),
];

/// The cubic mean line of the five digit sections. The normal form is a cubic forward of the
/// break point `r` and a straight line aft of it. The reflexed form is cubic on both sides of the
/// break point, with the aft cubic scaled by `k2/k1` to reduce aft loading.
///
/// The constants are empirical values tabulated for a design lift coefficient of 0.3, so the
/// camber is scaled linearly for other design lift coefficients.
pub struct Naca5MeanLine {
    r: f64,
    k1: f64,
    k2_k1: Option<f64>,
    scale: f64,
}

impl Naca5MeanLine {
    /// Create a new five digit mean line.
    ///
    /// # Arguments
    ///
    /// * `design_cl`: the design lift coefficient, 0.3 on a NACA 23012
    /// * `position`: the camber position digit, 3 on a NACA 23012
    /// * `reflexed`: true for the reflexed family (third digit 1)
    ///
    /// returns: Result<Naca5MeanLine, FoilError>
    pub fn try_new(design_cl: f64, position: u32, reflexed: bool) -> Result<Self> {
        let (r, k1, k2_k1) = if reflexed {
            let (r, k1, k21) = position
                .checked_sub(2)
                .and_then(|i| REFLEXED_CONSTANTS.get(i as usize))
                .ok_or_else(|| {
                    FoilError::UnsupportedSeries(format!(
                        "no reflexed five digit mean line for camber position digit {}",
                        position
                    ))
                })?;
            (*r, *k1, Some(*k21))
        } else {
            let (r, k1) = position
                .checked_sub(1)
                .and_then(|i| NORMAL_CONSTANTS.get(i as usize))
                .ok_or_else(|| {
                    FoilError::UnsupportedSeries(format!(
                        "no five digit mean line for camber position digit {}",
                        position
                    ))
                })?;
            (*r, *k1, None)
        };

        Ok(Self {
            r,
            k1,
            k2_k1,
            scale: design_cl / 0.3,
        })
    }
}

impl MeanLine for Naca5MeanLine {
    fn camber(&self, x: f64) -> f64 {
        let r = self.r;
        let k = self.k1 / 6.0;
        let y = match self.k2_k1 {
            None if x < r => k * (x.powi(3) - 3.0 * r * x.powi(2) + r.powi(2) * (3.0 - r) * x),
            None => k * r.powi(3) * (1.0 - x),
            Some(k21) => {
                let lead = if x < r { 1.0 } else { k21 };
                k * (lead * (x - r).powi(3) - k21 * (1.0 - r).powi(3) * x - r.powi(3) * x
                    + r.powi(3))
            }
        };
        y * self.scale
    }

    fn slope(&self, x: f64) -> f64 {
        let r = self.r;
        let k = self.k1 / 6.0;
        let dy = match self.k2_k1 {
            None if x < r => k * (3.0 * x.powi(2) - 6.0 * r * x + r.powi(2) * (3.0 - r)),
            None => -k * r.powi(3),
            Some(k21) => {
                let lead = if x < r { 1.0 } else { k21 };
                k * (3.0 * lead * (x - r).powi(2) - k21 * (1.0 - r).powi(3) - r.powi(3))
            }
        };
        dy * self.scale
    }
}

/// The uniform chordwise loading (a = 1.0) mean line used with the six series sections.
pub struct UniformLoadMeanLine {
    cli: f64,
}

impl UniformLoadMeanLine {
    /// Create a uniform load mean line for the design lift coefficient `cli`.
    pub fn new(cli: f64) -> Self {
        Self { cli }
    }
}

/// x * ln(x), continuous at zero
fn x_ln_x(x: f64) -> f64 {
    if x <= 0.0 { 0.0 } else { x * x.ln() }
}

impl MeanLine for UniformLoadMeanLine {
    fn camber(&self, x: f64) -> f64 {
        -(self.cli / (4.0 * PI)) * (x_ln_x(1.0 - x) + x_ln_x(x))
    }

    fn slope(&self, x: f64) -> f64 {
        if self.cli == 0.0 {
            0.0
        } else if x <= 0.0 {
            f64::INFINITY
        } else if x >= 1.0 {
            f64::NEG_INFINITY
        } else {
            (self.cli / (4.0 * PI)) * ((1.0 - x) / x).ln()
        }
    }
}
