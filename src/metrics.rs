//! The shape descriptors of a series.

use crate::{
    Distance, Engine,
    builder::{build_polygon, build_valid_polygon},
    config::{EccentricityAxes, GyrationMode},
    error::Result,
    polar::map_to_polar,
    season::season_quadrants,
    series::CleanSeries,
};

/// Returns the area enclosed by the polar shape of the series.
pub fn area_ts<E>(engine: &E, series: &CleanSeries) -> Result<f64>
where
    E: Engine,
{
    let polygon = build_valid_polygon(engine, &map_to_polar(series).ring)?;
    Ok(engine.area(&polygon))
}

/// Returns the area of the polar shape of the series lying on each season quadrant, in
/// counter-clockwise order starting at the top-right one.
pub fn area_season<E>(engine: &E, series: &CleanSeries) -> Result<[f64; 4]>
where
    E: Engine,
{
    let polygon = build_valid_polygon(engine, &map_to_polar(series).ring)?;
    let areas = season_quadrants(engine, &polygon)
        .map(|quadrant| engine.area(&engine.intersection(&quadrant, &polygon)));

    Ok([
        areas.top_right,
        areas.top_left,
        areas.bottom_left,
        areas.bottom_right,
    ])
}

/// Returns the ratio between the short and the long axis of the minimum rotated rectangle
/// enclosing the polar shape of the series.
///
/// Values near 0 stand for line-like shapes, while values near 1 for circle-like ones. A shape
/// collapsed into a single point has an eccentricity of 0.
pub fn ecc_metric<E>(engine: &E, series: &CleanSeries, axes: EccentricityAxes) -> Result<f64>
where
    E: Engine,
{
    let polygon = build_polygon(engine, &map_to_polar(series).ring)?;
    let Some(rectangle) = engine.minimum_rotated_rectangle(&polygon) else {
        return Ok(0.);
    };

    let (short, long) = match axes {
        EccentricityAxes::Sides => rectangle.sides(),
        EccentricityAxes::Bounds => {
            let envelope = rectangle.envelope();
            let (width, height) = (envelope.width(), envelope.height());
            (width.min(height), width.max(height))
        }
    };

    if long <= 0. {
        return Ok(0.);
    }

    Ok(short / long)
}

/// Returns the distance from the boundary of the polar shape of the series to its centroid.
pub fn gyration_radius<E>(engine: &E, series: &CleanSeries, mode: GyrationMode) -> Result<f64>
where
    E: Engine,
{
    let polygon = build_polygon(engine, &map_to_polar(series).ring)?;
    let Some(centroid) = engine.centroid(&polygon) else {
        return Ok(0.);
    };

    let exterior = engine.exterior(&polygon);
    let distances = match mode {
        GyrationMode::Mean => exterior
            .split_last()
            .map(|(_, vertices)| vertices)
            .unwrap_or_default(),
        GyrationMode::LastVertex => exterior
            .split_last()
            .map(|(last, _)| std::slice::from_ref(last))
            .unwrap_or_default(),
    }
    .iter()
    .map(|vertex| vertex.distance(&centroid))
    .collect::<Vec<_>>();

    if distances.is_empty() {
        return Ok(0.);
    }

    Ok(distances.iter().sum::<f64>() / distances.len() as f64)
}

/// Returns the population standard deviation of the seasonal areas of the series.
pub fn polar_balance<E>(engine: &E, series: &CleanSeries) -> Result<f64>
where
    E: Engine,
{
    Ok(standard_deviation(&area_season(engine, series)?))
}

/// Returns the angle of the largest radius in the polar representation of the series.
///
/// On ties, the first angle wins.
pub fn angle(series: &CleanSeries) -> f64 {
    let polar = map_to_polar(series);
    polar
        .radii
        .iter()
        .zip(&polar.angles)
        .fold(None, |best: Option<(f64, f64)>, (&radius, &angle)| match best {
            Some(best) if best.0 >= radius => Some(best),
            _ => Some((radius, angle)),
        })
        .map(|(_, angle)| angle)
        .unwrap_or_default()
}

fn standard_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.;
    }

    let len = values.len() as f64;
    let mean = values.iter().sum::<f64>() / len;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / len;

    variance.sqrt()
}
