use std::time::SystemTime;

use polarshape::{
    Engine, Error, FeatureVector, FixSeries, GeometryError, Polar, build_valid_polygon,
    cartesian::Planar, extract_features, map_to_polar, symmetric_distance,
};
use proptest::prelude::*;
use rand::Rng;

fn polar() -> Polar<Planar, FixSeries> {
    Polar::default()
}

fn series(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.1..10.0f64, len)
}

/// Series mixing zeros, negative values and runs of equal values, whose polar rings go
/// through the origin and repeat vertices.
fn rough_series(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<f64>> {
    let value = prop_oneof![
        3 => 0.1..10.0f64,
        1 => Just(0.),
        1 => -10.0..-0.1f64,
    ];

    prop::collection::vec((value, 1..3usize), len).prop_map(|runs| {
        runs.into_iter()
            .flat_map(|(value, times)| std::iter::repeat_n(value, times))
            .collect()
    })
}

fn pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (3..16usize).prop_flat_map(|len| (series(len..len + 1), series(len..len + 1)))
}

proptest! {
    #[test]
    fn area_is_never_negative(values in series(3..32)) {
        let area = polar().area_ts(&values).unwrap();
        prop_assert!(area >= 0.);
    }

    #[test]
    fn eccentricity_is_a_ratio(values in series(3..32)) {
        let eccentricity = polar().ecc_metric(&values).unwrap();
        prop_assert!((0. ..=1.).contains(&eccentricity));
    }

    #[test]
    fn seasonal_areas_add_up_to_the_area(values in series(3..32)) {
        let polar = polar();
        let area = polar.area_ts(&values).unwrap();
        let seasons: f64 = polar.area_season(&values).unwrap().into_iter().sum();
        prop_assert!((area - seasons).abs() <= 1e-9 * area.max(1.));
    }

    #[test]
    fn distance_to_itself_is_zero(values in series(3..32)) {
        let distance = symmetric_distance(&values, &values).unwrap();
        let area = polar().area_ts(&values).unwrap();
        prop_assert!(distance.abs() <= 1e-9 * area.max(1.));
    }

    #[test]
    fn rough_seasonal_areas_add_up_to_the_area(values in rough_series(3..24)) {
        let polar = polar();
        let Ok(area) = polar.area_ts(&values) else {
            // Rings collapsing into fewer than 3 points, or into no area, have no shape.
            return Ok(());
        };

        let seasons: f64 = polar.area_season(&values).unwrap().into_iter().sum();
        prop_assert!((area - seasons).abs() <= 1e-9 * area.max(1.), "{area} != {seasons}");
    }

    #[test]
    fn rough_distance_to_itself_is_zero(values in rough_series(3..24)) {
        let Ok(area) = polar().area_ts(&values) else {
            return Ok(());
        };

        let distance = symmetric_distance(&values, &values).unwrap();
        prop_assert!(distance.abs() <= 1e-9 * area.max(1.), "got {distance}");
    }

    /// Ties in the alignment search are broken on the smallest shift, which is not symmetric.
    /// Continuous random values never tie, so the distance is symmetric for them.
    #[test]
    fn distance_is_symmetric((lhs, rhs) in pair()) {
        let forward = symmetric_distance(&lhs, &rhs).unwrap();
        let backward = symmetric_distance(&rhs, &lhs).unwrap();
        prop_assert!(forward >= 0.);
        prop_assert!((forward - backward).abs() <= 1e-6 * forward.max(1.));
    }
}

#[test]
fn diamond_series() {
    let values = [1., 2., 1., 2.];

    let engine = Planar::default();
    let ring = map_to_polar(&polar().clean(&values)).ring;
    let polygon = build_valid_polygon(&engine, &ring).unwrap();
    assert!(engine.is_valid(&polygon));

    let features = extract_features(&values).unwrap();
    assert!((features.area() - 4.).abs() < 1e-9);
    features.seasonal_areas().into_iter().for_each(|area| {
        assert!((area - 1.).abs() < 1e-9);
    });

    assert!(features.polar_balance().abs() < 1e-9);
}

#[test]
fn disjoint_value_ranges_skip_the_alignment() {
    let lhs = [1., 1., 1., 1.];
    let rhs = [10., 10., 10., 10.];

    let alignment = polar().alignment(&lhs, &rhs).unwrap();
    assert_eq!(alignment.shift, None);

    let engine = Planar::default();
    let [subject, clip] = [lhs, rhs].map(|values| {
        let ring = map_to_polar(&polar().clean(&values)).ring;
        build_valid_polygon(&engine, &ring).unwrap()
    });

    let want = engine.area(&engine.symmetric_difference(&subject, &clip));
    assert!((alignment.distance - want).abs() < 1e-9);
    assert!((alignment.distance - 198.).abs() < 1e-9);
}

#[test]
fn series_of_different_length_are_not_comparable() {
    assert_eq!(
        symmetric_distance(&[1., 2., 3., 4.], &[1., 2., 3.]),
        Err(Error::LengthMismatch { left: 4, right: 3 })
    );
}

#[test]
fn degenerate_series() {
    assert_eq!(extract_features(&[7.]), Ok(FeatureVector::TRIVIAL));
    assert_eq!(extract_features(&[]), Ok(FeatureVector::TRIVIAL));
    assert_eq!(
        extract_features(&[1., 2.]),
        Err(GeometryError::TooFewPoints { distinct: 2 }.into())
    );
}

#[test]
#[ignore]
pub fn long_series() {
    type Sample = [f64; 1000];

    let mut rng = rand::rng();
    let lhs = rng.random::<Sample>();
    let rhs = rng.random::<Sample>();

    let start = SystemTime::now();
    let _ = symmetric_distance(&lhs, &rhs);
    let end = SystemTime::now();

    println!(
        "Duration: {} ms",
        end.duration_since(start).unwrap().as_millis()
    );
}
