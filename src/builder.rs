//! Construction of polygons from polar rings.

use tracing::warn;

use crate::{
    Engine,
    cartesian::Point,
    error::{Error, Result},
};

/// Returns the polygon enclosed by the given ring, as it is.
pub fn build_polygon<E>(engine: &E, ring: &[Point<f64>]) -> Result<E::Shape>
where
    E: Engine,
{
    engine.polygon(ring)
}

/// Returns the given polygon if it is valid, or its repaired version otherwise.
///
/// Fails if the repair does not yield a valid polygon.
pub fn ensure_valid<E>(engine: &E, polygon: E::Shape) -> Result<E::Shape>
where
    E: Engine,
{
    if engine.is_valid(&polygon) {
        return Ok(polygon);
    }

    warn!("repairing self-intersecting polygon");
    let repaired = engine.buffer_zero(&polygon);
    if !engine.is_valid(&repaired) {
        return Err(Error::InvalidPolygon);
    }

    Ok(repaired)
}

/// Returns the valid polygon enclosed by the given ring.
pub fn build_valid_polygon<E>(engine: &E, ring: &[Point<f64>]) -> Result<E::Shape>
where
    E: Engine,
{
    ensure_valid(engine, build_polygon(engine, ring)?)
}
