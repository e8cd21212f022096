//! This module contains the decoding of integer NACA designations into the parameters of the
//! series they belong to.

use crate::airfoil::camber::{MeanLine, Naca4MeanLine, Naca5MeanLine, UniformLoadMeanLine};
use crate::{FoilError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The airfoil family selected by the number of digits in a designation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Series {
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

/// A NACA designation stored as its integer value. Leading zeros are not represented, so the
/// symmetric `0012` section is the integer `12`; every value below 1000 therefore counts as four
/// digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Designation(u32);

impl Designation {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Counts the decimal digits of the designation by stepping up through orders of magnitude,
    /// with a minimum of four.
    pub fn digit_count(&self) -> u32 {
        let value = self.0 as u64;
        let mut count = 1;
        let mut magnitude = 10u64;
        while value >= magnitude {
            count += 1;
            magnitude *= 10;
        }
        count.max(4)
    }

    /// Classifies the designation by its digit count. Seven and eight digit designations are
    /// recognized here even though no section can be generated for them.
    pub fn series(&self) -> Result<Series> {
        match self.digit_count() {
            4 => Ok(Series::Four),
            5 => Ok(Series::Five),
            6 => Ok(Series::Six),
            7 => Ok(Series::Seven),
            8 => Ok(Series::Eight),
            n => Err(FoilError::UnsupportedSeries(format!(
                "designation {} has {} digits",
                self.0, n
            ))),
        }
    }

    /// Returns the individual digits of the designation, most significant first, padded with
    /// leading zeros to the digit count.
    pub fn digits(&self) -> Vec<u32> {
        let count = self.digit_count();
        (0..count)
            .rev()
            .map(|i| (self.0 as u64 / 10u64.pow(i) % 10) as u32)
            .collect()
    }

    /// Decodes the designation into the parameters of its series, validating the digit values
    /// that select the camber formula.
    ///
    /// # Examples
    ///
    /// ```
    /// use foilgen::{Designation, NacaCode};
    /// let code = Designation::new(2412).decode().unwrap();
    /// assert_eq!(code, NacaCode::Four { max_camber: 2, camber_position: 4, thickness: 12 });
    /// ```
    pub fn decode(&self) -> Result<NacaCode> {
        let d = self.digits();
        let code = match self.series()? {
            Series::Four => NacaCode::Four {
                max_camber: d[0],
                camber_position: d[1],
                thickness: d[2] * 10 + d[3],
            },
            Series::Five => {
                if d[2] > 1 {
                    return Err(FoilError::UnsupportedSeries(format!(
                        "five digit designation {} has camber family digit {}, expected 0 or 1",
                        self, d[2]
                    )));
                }
                NacaCode::Five {
                    design_lift: d[0],
                    camber_position: d[1],
                    reflexed: d[2] == 1,
                    thickness: d[3] * 10 + d[4],
                }
            }
            Series::Six => {
                if d[0] != 6 {
                    return Err(FoilError::UnsupportedSeries(format!(
                        "six digit designation {} must start with 6 for the a=1.0 mean line",
                        self
                    )));
                }
                NacaCode::Six {
                    min_pressure_position: d[1],
                    low_drag_range: d[2],
                    design_lift: d[3],
                    thickness: d[4] * 10 + d[5],
                }
            }
            series => {
                return Err(FoilError::UnsupportedSeries(format!(
                    "no section formula for {:?} digit designation {}",
                    series, self
                )));
            }
        };

        // Building the mean line validates the remaining digit combinations
        code.mean_line()?;
        Ok(code)
    }
}

impl From<u32> for Designation {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Display for Designation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for Designation {
    type Err = FoilError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(FoilError::InvalidArgument(format!(
                "'{}' is not a decimal designation",
                s
            )));
        }

        s.parse::<u32>().map(Self).map_err(|_| {
            FoilError::UnsupportedSeries(format!("designation '{}' has too many digits", s))
        })
    }
}

/// The parameters of a decoded designation. Digit values are kept as the raw digits of the
/// designation; the mean line and thickness ratio are derived from them on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NacaCode {
    /// `MPTT`: maximum camber in percent, its position in tenths, thickness in percent
    Four {
        max_camber: u32,
        camber_position: u32,
        thickness: u32,
    },

    /// `LPQTT`: design lift coefficient in units of 0.15, camber position digit, reflex flag,
    /// thickness in percent
    Five {
        design_lift: u32,
        camber_position: u32,
        reflexed: bool,
        thickness: u32,
    },

    /// `6ABCTT`: position of minimum pressure in tenths, low drag range in tenths, design lift
    /// coefficient in tenths, thickness in percent
    Six {
        min_pressure_position: u32,
        low_drag_range: u32,
        design_lift: u32,
        thickness: u32,
    },
}

impl NacaCode {
    pub fn series(&self) -> Series {
        match self {
            NacaCode::Four { .. } => Series::Four,
            NacaCode::Five { .. } => Series::Five,
            NacaCode::Six { .. } => Series::Six,
        }
    }

    /// The maximum thickness of the section as a fraction of the chord
    pub fn thickness_ratio(&self) -> f64 {
        let t = match self {
            NacaCode::Four { thickness, .. } => thickness,
            NacaCode::Five { thickness, .. } => thickness,
            NacaCode::Six { thickness, .. } => thickness,
        };
        *t as f64 / 100.0
    }

    /// Builds the mean camber line for this code.
    pub fn mean_line(&self) -> Result<Box<dyn MeanLine>> {
        match *self {
            NacaCode::Four {
                max_camber,
                camber_position,
                ..
            } => {
                if max_camber > 0 && camber_position == 0 {
                    return Err(FoilError::UnsupportedSeries(format!(
                        "four digit camber of {}% needs a non-zero camber position",
                        max_camber
                    )));
                }
                Ok(Box::new(Naca4MeanLine::new(
                    max_camber as f64 / 100.0,
                    camber_position as f64 / 10.0,
                )))
            }
            NacaCode::Five {
                design_lift,
                camber_position,
                reflexed,
                ..
            } => Ok(Box::new(Naca5MeanLine::try_new(
                design_lift as f64 * 0.15,
                camber_position,
                reflexed,
            )?)),
            NacaCode::Six { design_lift, .. } => Ok(Box::new(UniformLoadMeanLine::new(
                design_lift as f64 / 10.0,
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 4)]
    #[test_case(12, 4)]
    #[test_case(2412, 4)]
    #[test_case(9999, 4)]
    #[test_case(10000, 5)]
    #[test_case(23012, 5)]
    #[test_case(641212, 6)]
    #[test_case(1234567, 7)]
    #[test_case(12345678, 8)]
    #[test_case(123456789, 9)]
    #[test_case(u32::MAX, 10)]
    fn digit_count(value: u32, expected: u32) {
        assert_eq!(Designation::new(value).digit_count(), expected);
    }

    #[test_case(2412, Series::Four)]
    #[test_case(23012, Series::Five)]
    #[test_case(641212, Series::Six)]
    #[test_case(1234567, Series::Seven)]
    #[test_case(12345678, Series::Eight)]
    fn classify(value: u32, expected: Series) {
        assert_eq!(Designation::new(value).series().unwrap(), expected);
    }

    #[test]
    fn nine_digits_not_classified() {
        let result = Designation::new(123456789).series();
        assert!(matches!(result, Err(FoilError::UnsupportedSeries(_))));
    }

    #[test]
    fn digits_are_zero_padded() {
        assert_eq!(Designation::new(12).digits(), vec![0, 0, 1, 2]);
        assert_eq!(Designation::new(23012).digits(), vec![2, 3, 0, 1, 2]);
    }

    #[test]
    fn decode_five_digit() {
        let code = Designation::new(23112).decode().unwrap();
        assert_eq!(
            code,
            NacaCode::Five {
                design_lift: 2,
                camber_position: 3,
                reflexed: true,
                thickness: 12
            }
        );
        assert_eq!(code.thickness_ratio(), 0.12);
    }

    #[test]
    fn decode_six_series() {
        let code = Designation::new(641212).decode().unwrap();
        assert_eq!(
            code,
            NacaCode::Six {
                min_pressure_position: 4,
                low_drag_range: 1,
                design_lift: 2,
                thickness: 12
            }
        );
        assert_eq!(code.series(), Series::Six);
    }

    #[test_case(1234567; "seven digits")]
    #[test_case(12345678; "eight digits")]
    #[test_case(23212; "five digit family digit 2")]
    #[test_case(23912; "five digit family digit 9")]
    #[test_case(26012; "five digit position without constants")]
    #[test_case(21112; "reflexed position without constants")]
    #[test_case(541212; "six digit loading digit not 6")]
    #[test_case(2012; "four digit camber without position")]
    fn decode_unsupported(value: u32) {
        let result = Designation::new(value).decode();
        assert!(matches!(result, Err(FoilError::UnsupportedSeries(_))));
    }

    #[test]
    fn symmetric_zero_position_allowed() {
        assert!(Designation::new(12).decode().is_ok());
    }

    #[test]
    fn parse_and_display() {
        let d: Designation = "0012".parse().unwrap();
        assert_eq!(d.value(), 12);
        assert_eq!(d.to_string(), "0012");

        let d: Designation = " 23012 ".parse().unwrap();
        assert_eq!(d.to_string(), "23012");

        assert!(matches!(
            "NACA".parse::<Designation>(),
            Err(FoilError::InvalidArgument(_))
        ));
        assert!(matches!(
            "99999999999".parse::<Designation>(),
            Err(FoilError::UnsupportedSeries(_))
        ));
    }
}
