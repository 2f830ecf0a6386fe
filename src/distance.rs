//! Dissimilarity between the polar shapes of two series.

use tracing::{debug, trace};

use crate::{
    Engine,
    builder::build_valid_polygon,
    error::{Error, Result},
    polar::map_to_polar,
    series::CleanSeries,
};

/// The outcome of comparing two series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// The area of the symmetric difference between both polar shapes.
    pub distance: f64,
    /// The amount of positions the second series has been rolled to match the first one, if
    /// the alignment search took place.
    pub shift: Option<usize>,
}

/// Returns the amount of positions to roll the second series to get it closest, in Euclidean
/// norm, to the first one.
///
/// On ties the smallest shift wins. Swapping the series may then break the tie on a shift that
/// is not the opposite one, so the distance between two series is only symmetric when the
/// search has a single minimum.
pub fn best_shift(lhs: &CleanSeries, rhs: &CleanSeries) -> Result<usize> {
    if lhs.len() != rhs.len() {
        return Err(Error::length_mismatch(lhs.len(), rhs.len()));
    }

    let len = lhs.len();
    let (shift, norm) = (0..len).fold((0, f64::INFINITY), |(best, best_norm), shift| {
        let norm = lhs
            .iter()
            .enumerate()
            .map(|(position, value)| value - rhs[(position + len - shift) % len])
            .map(|difference| difference * difference)
            .sum::<f64>()
            .sqrt();

        trace!(shift, norm, "alignment candidate");
        if norm < best_norm {
            (shift, norm)
        } else {
            (best, best_norm)
        }
    });

    debug!(shift, norm, "best alignment found");
    Ok(shift)
}

/// Returns the area of the symmetric difference between the polar shapes of both series once
/// the second one has been aligned onto the first one.
///
/// Series whose value ranges do not overlap are compared as they are.
pub fn align<E>(engine: &E, lhs: &CleanSeries, rhs: &CleanSeries) -> Result<Alignment>
where
    E: Engine,
{
    if lhs.len() != rhs.len() {
        return Err(Error::length_mismatch(lhs.len(), rhs.len()));
    }

    let subject = build_valid_polygon(engine, &map_to_polar(lhs).ring)?;

    if lhs.min() > rhs.max() || rhs.min() > lhs.max() {
        debug!("disjoint value ranges, skipping alignment search");
        let clip = build_valid_polygon(engine, &map_to_polar(rhs).ring)?;
        return Ok(Alignment {
            distance: engine.area(&engine.symmetric_difference(&subject, &clip)),
            shift: None,
        });
    }

    let shift = best_shift(lhs, rhs)?;
    let clip = build_valid_polygon(engine, &map_to_polar(&rhs.rolled(shift)).ring)?;

    Ok(Alignment {
        distance: engine.area(&engine.symmetric_difference(&subject, &clip)),
        shift: Some(shift),
    })
}
