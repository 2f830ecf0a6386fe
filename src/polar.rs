//! Mapping of series into the plain.

use std::f64::consts::TAU;

use crate::{cartesian::Point, series::CleanSeries};

/// The polar representation of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarRing {
    /// The closed boundary of the series' shape: its first point is repeated at the end.
    pub ring: Vec<Point<f64>>,
    /// The radius of each value in the series.
    pub radii: Vec<f64>,
    /// The angle of each value in the series.
    pub angles: Vec<f64>,
}

/// Maps each value of the series to a point at equally spaced angles over one full turn, being
/// the value its distance to the origin.
///
/// Series with negative values are shifted by their minimum, so no radius is negative.
pub fn map_to_polar(series: &CleanSeries) -> PolarRing {
    let len = series.len();
    let offset = series.min().min(0.);

    let radii: Vec<f64> = series.iter().map(|value| value - offset).collect();
    let angles: Vec<f64> = (0..len)
        .map(|index| TAU * index as f64 / len as f64)
        .collect();

    let mut ring: Vec<Point<f64>> = radii
        .iter()
        .zip(&angles)
        .map(|(&radius, &angle)| Point::from_polar(radius, angle))
        .collect();

    if let Some(&first) = ring.first() {
        ring.push(first);
    }

    PolarRing {
        ring,
        radii,
        angles,
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::{
        Distance,
        cartesian::Point,
        polar::map_to_polar,
        series::CleanSeries,
    };

    #[test]
    fn map_series_to_polar() {
        struct Test {
            name: &'static str,
            series: Vec<f64>,
            radii: Vec<f64>,
            ring: Vec<Point<f64>>,
        }

        vec![
            Test {
                name: "positive series",
                series: vec![1., 2., 1., 2.],
                radii: vec![1., 2., 1., 2.],
                ring: vec![
                    [1., 0.].into(),
                    [0., 2.].into(),
                    [-1., 0.].into(),
                    [0., -2.].into(),
                    [1., 0.].into(),
                ],
            },
            Test {
                name: "negative values are shifted",
                series: vec![-1., 1., 0., 1.],
                radii: vec![0., 2., 1., 2.],
                ring: vec![
                    [0., 0.].into(),
                    [0., 2.].into(),
                    [-1., 0.].into(),
                    [0., -2.].into(),
                    [0., 0.].into(),
                ],
            },
        ]
        .into_iter()
        .for_each(|test| {
            let series = CleanSeries::new(test.series).expect("series is valid");
            let got = map_to_polar(&series);

            assert_eq!(got.radii, test.radii, "{}", test.name);
            assert_eq!(got.angles, vec![0., FRAC_PI_2, PI, 3. * FRAC_PI_2], "{}", test.name);
            assert_eq!(got.ring.len(), test.ring.len(), "{}", test.name);
            got.ring.iter().zip(&test.ring).for_each(|(got, want)| {
                assert!(got.distance(want) < 1e-12, "{}: {got:?} != {want:?}", test.name);
            });
        });
    }
}
