//! Cleaned series and the default cleaning strategy.

use std::ops::Deref;

use crate::{
    Clean,
    error::{Error, Result},
};

/// An ordered, non-empty sequence of finite values.
///
/// A series of a single value is the trivial series: it carries no shape.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanSeries(Box<[f64]>);

impl Deref for CleanSeries {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[f64]> for CleanSeries {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for CleanSeries {
    type Error = Error;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        Self::new(value)
    }
}

impl CleanSeries {
    /// Returns the series made of the given values if, and only if, there is at least one of
    /// them and all are finite.
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self> {
        let values = values.into();
        if values.is_empty() {
            return Err(Error::series("a series must have at least one value"));
        }

        if let Some(position) = values.iter().position(|value| !value.is_finite()) {
            return Err(Error::series(format!(
                "value at position {position} is not finite"
            )));
        }

        Ok(Self(values.into_boxed_slice()))
    }

    /// Returns the series that stands for degenerate input.
    pub fn trivial() -> Self {
        Self(Box::new([1.]))
    }

    /// Returns true if, and only if, the series has a single value.
    pub fn is_trivial(&self) -> bool {
        self.0.len() == 1
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn min(&self) -> f64 {
        self.0.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns the series with its values circularly shifted forward by the given amount of
    /// positions, so the value at `j` moves to `j + shift`.
    pub fn rolled(&self, shift: usize) -> Self {
        let mut values = self.0.to_vec();
        let len = values.len();
        values.rotate_right(shift % len);
        Self(values.into_boxed_slice())
    }
}

/// The default [`Clean`] strategy.
///
/// Missing values are those equal to the nodata marker, if any, and non-finite ones. Gaps
/// between valid values are filled by linear interpolation, while gaps at the ends of the series
/// take the nearest valid value. A series without valid values is trivial.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixSeries {
    pub nodata: Option<f64>,
}

impl Default for FixSeries {
    fn default() -> Self {
        Self {
            nodata: Some(-9999.),
        }
    }
}

impl FixSeries {
    pub fn with_nodata(mut self, nodata: Option<f64>) -> Self {
        self.nodata = nodata;
        self
    }

    fn is_valid(&self, value: f64) -> bool {
        value.is_finite() && self.nodata != Some(value)
    }
}

impl Clean for FixSeries {
    fn clean(&self, raw: &[f64]) -> CleanSeries {
        let known: Vec<usize> = (0..raw.len())
            .filter(|&position| self.is_valid(raw[position]))
            .collect();

        let (Some(&first), Some(&last)) = (known.first(), known.last()) else {
            return CleanSeries::trivial();
        };

        let values = (0..raw.len())
            .map(|position| {
                if position <= first {
                    return raw[first];
                }

                if position >= last {
                    return raw[last];
                }

                let next = known.partition_point(|&index| index < position);
                let (after, before) = (known[next], known[next - 1]);
                if after == position {
                    return raw[position];
                }

                let t = (position - before) as f64 / (after - before) as f64;
                raw[before] + t * (raw[after] - raw[before])
            })
            .collect::<Vec<_>>();

        CleanSeries(values.into_boxed_slice())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Clean,
        series::{CleanSeries, FixSeries},
    };

    #[test]
    fn fix_series() {
        struct Test {
            name: &'static str,
            raw: Vec<f64>,
            want: Vec<f64>,
        }

        vec![
            Test {
                name: "clean input",
                raw: vec![1., 2., 3.],
                want: vec![1., 2., 3.],
            },
            Test {
                name: "interior gap",
                raw: vec![1., -9999., f64::NAN, 4.],
                want: vec![1., 2., 3., 4.],
            },
            Test {
                name: "gaps at the ends",
                raw: vec![f64::INFINITY, 2., 3., -9999.],
                want: vec![2., 2., 3., 3.],
            },
            Test {
                name: "no valid values",
                raw: vec![-9999., f64::NAN],
                want: vec![1.],
            },
            Test {
                name: "empty input",
                raw: vec![],
                want: vec![1.],
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = FixSeries::default().clean(&test.raw);
            assert_eq!(got.as_slice(), test.want.as_slice(), "{}", test.name);
        });
    }

    #[test]
    fn fix_series_without_nodata() {
        let got = FixSeries::default()
            .with_nodata(None)
            .clean(&[-9999., 1.]);

        assert_eq!(got.as_slice(), &[-9999., 1.]);
    }

    #[test]
    fn clean_series_rejects_invalid_values() {
        assert!(CleanSeries::new(Vec::new()).is_err());
        assert!(CleanSeries::new(vec![1., f64::NAN]).is_err());
        assert!(CleanSeries::new(vec![1.]).is_ok_and(|series| series.is_trivial()));
    }

    #[test]
    fn rolled_series() {
        struct Test {
            name: &'static str,
            shift: usize,
            want: Vec<f64>,
        }

        vec![
            Test {
                name: "no shift",
                shift: 0,
                want: vec![1., 2., 3., 4.],
            },
            Test {
                name: "single shift",
                shift: 1,
                want: vec![4., 1., 2., 3.],
            },
            Test {
                name: "full turn",
                shift: 5,
                want: vec![4., 1., 2., 3.],
            },
        ]
        .into_iter()
        .for_each(|test| {
            let series = CleanSeries::new(vec![1., 2., 3., 4.]).expect("series is valid");
            assert_eq!(series.rolled(test.shift).as_slice(), test.want.as_slice(), "{}", test.name);
        });
    }
}
