//! Reconstruction of self-touching and self-crossing polygons.

use std::cmp::Ordering;

use num_traits::Float;

use crate::{IsClose, Tolerance};

use super::{Point, Polygon};

/// Returns the simple polygons covering the same region as the given one.
///
/// The boundary is cut at every point where it touches or crosses itself and split into simple
/// loops. Loops enclosing no area are dropped. Loops following the dominant orientation of the
/// boundary become outer boundaries, oriented counter-clockwise, unless they lie inside another
/// outer boundary. Loops with the opposite orientation are kept as clockwise holes when they lie
/// inside an outer boundary, and dropped otherwise.
pub(crate) fn repair<T>(polygon: &Polygon<T>, tolerance: &Tolerance<T>) -> Vec<Polygon<T>>
where
    T: Float,
{
    let polygon = polygon.clone().deduplicated(tolerance);
    if polygon.vertices.len() < 3 {
        return Vec::new();
    }

    let scale = polygon
        .envelope()
        .map(|envelope| envelope.width() * envelope.height())
        .unwrap_or_else(T::zero);

    let loops: Vec<Polygon<T>> = split(node(&polygon, tolerance), tolerance)
        .into_iter()
        .filter(|candidate| candidate.vertices.len() >= 3)
        .filter(|candidate| !is_negligible(candidate.signed_area(), scale, tolerance))
        .collect();

    let total = loops
        .iter()
        .fold(T::zero(), |total, candidate| total + candidate.signed_area());

    let dominant = if !is_negligible(total, scale, tolerance) {
        total.signum()
    } else {
        loops
            .iter()
            .map(Polygon::signed_area)
            .fold(T::zero(), |largest, area| {
                if area.abs() > largest.abs() {
                    area
                } else {
                    largest
                }
            })
            .signum()
    };

    let (outers, inners): (Vec<_>, Vec<_>) = loops
        .into_iter()
        .partition(|candidate| candidate.signed_area().signum() == dominant);

    let outers: Vec<Polygon<T>> = outers
        .iter()
        .enumerate()
        .filter(|(position, candidate)| {
            !outers.iter().enumerate().any(|(other, container)| {
                other != *position && encloses(container, candidate, tolerance)
            })
        })
        .map(|(_, candidate)| counter_clockwise(candidate.clone()))
        .collect();

    let holes: Vec<Polygon<T>> = inners
        .into_iter()
        .filter(|candidate| {
            outers
                .iter()
                .any(|container| encloses(container, candidate, tolerance))
        })
        .map(|candidate| counter_clockwise(candidate).reversed())
        .collect();

    outers.into_iter().chain(holes).collect()
}

/// Returns the boundary of the polygon with a vertex inserted at every point where it touches
/// or crosses itself.
fn node<T>(polygon: &Polygon<T>, tolerance: &Tolerance<T>) -> Vec<Point<T>>
where
    T: Float,
{
    let edges: Vec<_> = polygon.edges().collect();

    let mut noded = Vec::with_capacity(polygon.vertices.len());
    for (position, edge) in edges.iter().enumerate() {
        let mut cuts: Vec<(T, Point<T>)> = edges
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != position)
            .flat_map(|(_, other)| {
                edge.intersection(other)
                    .into_iter()
                    .chain([*other.from, *other.to])
                    .filter(|point| edge.contains(point, tolerance))
            })
            .map(|point| (edge.parameter(&point), point))
            .filter(|(parameter, point)| {
                *parameter > T::zero()
                    && *parameter < T::one()
                    && !point.is_close(edge.from, tolerance)
                    && !point.is_close(edge.to, tolerance)
            })
            .collect();

        cuts.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        noded.push(*edge.from);
        noded.extend(cuts.into_iter().map(|(_, point)| point));
    }

    noded.dedup_by(|next, prev| next.is_close(prev, tolerance));
    noded
}

/// Splits the closed path through the given points into loops that do not visit any point
/// twice.
fn split<T>(points: Vec<Point<T>>, tolerance: &Tolerance<T>) -> Vec<Polygon<T>>
where
    T: Float,
{
    let mut loops = Vec::new();
    let mut path: Vec<Point<T>> = Vec::with_capacity(points.len());

    for point in points {
        if let Some(position) = path
            .iter()
            .position(|visited| visited.is_close(&point, tolerance))
        {
            loops.push(Polygon {
                vertices: path.split_off(position),
            });
        }

        path.push(point);
    }

    loops.push(Polygon { vertices: path });
    loops
}

/// Returns true if, and only if, every vertex of the inner polygon is covered by the outer one
/// and the latter is the largest of both.
fn encloses<T>(outer: &Polygon<T>, inner: &Polygon<T>, tolerance: &Tolerance<T>) -> bool
where
    T: Float,
{
    outer.area() > inner.area()
        && inner
            .vertices
            .iter()
            .all(|vertex| outer.covers(vertex, tolerance))
}

fn counter_clockwise<T>(polygon: Polygon<T>) -> Polygon<T>
where
    T: Float,
{
    if polygon.is_clockwise() {
        polygon.reversed()
    } else {
        polygon
    }
}

/// Returns true if, and only if, the given area is irrelevant compared to the given scale.
fn is_negligible<T>(area: T, scale: T, tolerance: &Tolerance<T>) -> bool
where
    T: Float,
{
    area.abs() <= T::max(
        tolerance.relative.into_inner() * scale,
        tolerance.absolute.into_inner(),
    )
}
