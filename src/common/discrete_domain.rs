//! This module contains an abstraction for working with a discrete domain of scalar f64 values,
//! where the values are always ordered from the start of the domain to its end.

use serde::Serialize;
use std::f64::consts::PI;

/// Generate a discrete domain of values which are linearly spaced between `start` and `end` and
/// which have a total count of `n`. The first value will be `start` and the last value will be
/// `end`.
///
/// # Arguments
///
/// * `start`: the starting value of the domain, inclusive
/// * `end`: the ending value of the domain, inclusive
/// * `n`: the total number of discrete, evenly spaced values in the domain
///
/// returns: DiscreteDomain
///
/// # Examples
///
/// ```
/// use foilgen::common::linear_space;
/// let domain = linear_space(0.0, 1.0, 5);
/// assert_eq!(domain.values(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linear_space(start: f64, end: f64, n: usize) -> DiscreteDomain {
    spaced(start, end, n, |f| f)
}

/// Generate a discrete domain of `n` values between `start` and `end` following a cosine
/// distribution, so that the values are clustered towards both ends of the domain and sparse in
/// the middle. The value at index `i` is located at the fraction `(1 - cos(i * pi / (n - 1))) / 2`
/// of the way from `start` to `end`.
///
/// # Arguments
///
/// * `start`: the starting value of the domain, inclusive
/// * `end`: the ending value of the domain, inclusive
/// * `n`: the total number of discrete values in the domain
///
/// returns: DiscreteDomain
///
/// # Examples
///
/// ```
/// use foilgen::common::cosine_space;
/// let domain = cosine_space(0.0, 1.0, 9);
/// assert_eq!(domain.values()[0], 0.0);
/// assert_eq!(domain.values()[8], 1.0);
/// assert!(domain.values()[1] < 1.0 / 8.0);
/// ```
pub fn cosine_space(start: f64, end: f64, n: usize) -> DiscreteDomain {
    spaced(start, end, n, |f| (1.0 - (f * PI).cos()) * 0.5)
}

fn spaced<F>(start: f64, end: f64, n: usize, shape: F) -> DiscreteDomain
where
    F: Fn(f64) -> f64,
{
    if n < 2 {
        return DiscreteDomain {
            values: vec![start; n],
        };
    }

    let last = (n - 1) as f64;
    let values = (0..n)
        .map(|i| start + (end - start) * shape(i as f64 / last))
        .collect();
    DiscreteDomain { values }
}

/// A discrete domain of scalar f64 values, ordered from the first value generated to the last.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DiscreteDomain {
    values: Vec<f64>,
}

impl DiscreteDomain {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the differences between each pair of adjacent values in the domain
    pub fn gaps(&self) -> Vec<f64> {
        self.values.windows(2).map(|w| w[1] - w[0]).collect()
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}
