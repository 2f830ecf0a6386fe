use std::cmp::Ordering;

use num_traits::Float;

use crate::Distance;

use super::{Envelope, Point, determinant::Determinant};

/// A rectangle of arbitrary orientation in the plain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle<T> {
    /// The corners of the rectangle, in order along its boundary.
    ///
    /// Degenerate rectangles repeat corners: a segment has two pairs of equal corners, and a
    /// point has all four corners equal.
    pub corners: [Point<T>; 4],
}

impl<T> Rectangle<T>
where
    T: Float,
{
    /// Returns the length of the short and the long side of the rectangle, in that order.
    pub fn sides(&self) -> (T, T) {
        let [a, b, _, d] = &self.corners;
        let (first, second) = (a.distance(b), a.distance(d));
        (first.min(second), first.max(second))
    }

    /// Returns the area of the rectangle.
    pub fn area(&self) -> T {
        let (short, long) = self.sides();
        short * long
    }

    /// Returns the axis-aligned bounding box of the rectangle.
    pub fn envelope(&self) -> Envelope<T> {
        let [first, ..] = self.corners;
        Envelope::from_points(&self.corners).unwrap_or(Envelope {
            min: first,
            max: first,
        })
    }
}

/// Returns the convex hull of the given points in counter-clockwise order, without repeated nor
/// collinear vertices.
pub(crate) fn convex_hull<T>(points: &[Point<T>]) -> Vec<Point<T>>
where
    T: Float,
{
    let mut points = points.to_vec();
    points.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });
    points.dedup();

    if points.len() < 3 {
        return points;
    }

    let mut hull = monotone_chain(points.iter());
    hull.extend(monotone_chain(points.iter().rev()));
    hull
}

/// Returns the half of the convex hull swept by the given sorted points, without its last
/// vertex.
fn monotone_chain<'a, T>(points: impl Iterator<Item = &'a Point<T>>) -> Vec<Point<T>>
where
    T: Float + 'a,
{
    let mut chain: Vec<Point<T>> = Vec::new();
    for point in points {
        while chain.len() >= 2
            && Determinant::from([&chain[chain.len() - 2], &chain[chain.len() - 1], point])
                .into_inner()
                <= T::zero()
        {
            chain.pop();
        }

        chain.push(*point);
    }

    chain.pop();
    chain
}

/// Returns the rectangle of minimum area enclosing all the given points, if any.
///
/// Every edge of the convex hull is tried as the direction of one of the sides of the
/// rectangle; on ties the first candidate wins.
pub(crate) fn minimum_rotated_rectangle<T>(points: &[Point<T>]) -> Option<Rectangle<T>>
where
    T: Float,
{
    let hull = convex_hull(points);
    match hull.as_slice() {
        [] => return None,
        [point] => {
            return Some(Rectangle {
                corners: [*point; 4],
            });
        }
        [from, to] => {
            return Some(Rectangle {
                corners: [*from, *to, *to, *from],
            });
        }
        _ => {}
    }

    let len = hull.len();
    (0..len)
        .filter_map(|position| {
            let [from, to] = [&hull[position], &hull[(position + 1) % len]];
            let length = from.distance(to);
            if length.is_zero() {
                return None;
            }

            let axis = Point {
                x: (to.x - from.x) / length,
                y: (to.y - from.y) / length,
            };

            let normal = Point {
                x: -axis.y,
                y: axis.x,
            };

            let project = |point: &Point<T>| {
                (
                    point.x * axis.x + point.y * axis.y,
                    point.x * normal.x + point.y * normal.y,
                )
            };

            let (first_u, first_v) = project(from);
            let [min_u, max_u, min_v, max_v] = hull.iter().map(project).fold(
                [first_u, first_u, first_v, first_v],
                |[min_u, max_u, min_v, max_v], (u, v)| {
                    [min_u.min(u), max_u.max(u), min_v.min(v), max_v.max(v)]
                },
            );

            let unproject = |u: T, v: T| Point {
                x: u * axis.x + v * normal.x,
                y: u * axis.y + v * normal.y,
            };

            let area = (max_u - min_u) * (max_v - min_v);
            Some((
                area,
                Rectangle {
                    corners: [
                        unproject(min_u, min_v),
                        unproject(max_u, min_v),
                        unproject(max_u, max_v),
                        unproject(min_u, max_v),
                    ],
                },
            ))
        })
        .fold(None, |best: Option<(T, Rectangle<T>)>, candidate| match best {
            Some(best) if best.0 <= candidate.0 => Some(best),
            _ => Some(candidate),
        })
        .map(|(_, rectangle)| rectangle)
}
