use num_traits::Float;

use crate::{IsClose, Tolerance};

use super::{Envelope, Point, Segment, determinant::Determinant};

/// A polygon in the plain.
#[derive(Debug, Clone)]
pub struct Polygon<T> {
    /// The ordered list of vertices describing the polygon.
    ///
    /// The closing vertex is implicit: the last vertex connects back to the first one.
    pub vertices: Vec<Point<T>>,
}

impl<T, P> From<Vec<P>> for Polygon<T>
where
    P: Into<Point<T>>,
{
    fn from(vertices: Vec<P>) -> Self {
        Self {
            vertices: vertices.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T> PartialEq for Polygon<T>
where
    T: Clone + PartialEq,
{
    /// Two polygons are equal if, and only if, they have the same vertices describing the same
    /// boundary.
    fn eq(&self, other: &Self) -> bool {
        let len = self.vertices.len();
        if len != other.vertices.len() {
            return false;
        }

        let mut double = other.vertices.clone();
        double.extend_from_slice(&other.vertices);

        (0..len.max(1)).any(|padding| double[padding..padding + len] == self.vertices)
    }
}

impl<T> IntoIterator for Polygon<T> {
    type Item = Point<T>;
    type IntoIter = std::vec::IntoIter<Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<T> Polygon<T> {
    /// Returns an ordered iterator over all the vertices of the polygon.
    ///
    /// By definition, a polygon is a closed shape, hence the latest point of the iterator equals
    /// the very first.
    pub fn vertices(&self) -> impl Iterator<Item = &Point<T>> {
        self.vertices.iter().chain(self.vertices.first())
    }

    /// Returns an ordered iterator over all the [`Segment`]s of this polygon.
    pub fn edges(&self) -> impl Iterator<Item = Segment<'_, T>> {
        self.vertices()
            .zip(self.vertices().skip(1))
            .map(Segment::from)
    }

    /// Returns this polygon with the reversed winding.
    pub fn reversed(mut self) -> Self {
        self.vertices.reverse();
        self
    }
}

impl<T> Polygon<T>
where
    T: Float,
{
    /// Returns the area enclosed by the polygon, positive if the polygon is oriented
    /// counter-clockwise and negative otherwise.
    pub fn signed_area(&self) -> T {
        self.moments().0
    }

    /// Returns the area enclosed by the polygon.
    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    /// Returns true if, and only if, this polygon is oriented clockwise.
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < T::zero()
    }

    /// Returns the signed area of the polygon together with its first moments of area.
    pub(crate) fn moments(&self) -> (T, T, T) {
        let two = T::one() + T::one();
        let (area, x, y) = self
            .edges()
            .fold((T::zero(), T::zero(), T::zero()), |(area, x, y), segment| {
                let cross = segment.from.x * segment.to.y - segment.to.x * segment.from.y;
                (
                    area + cross,
                    x + (segment.from.x + segment.to.x) * cross,
                    y + (segment.from.y + segment.to.y) * cross,
                )
            });

        let six = two + two + two;
        (area / two, x / six, y / six)
    }

    /// Returns the center of mass of the polygon, if any.
    ///
    /// When the polygon encloses no area the centroid of its boundary is returned instead, and
    /// the mean of its vertices when the boundary has no length either.
    pub fn centroid(&self) -> Option<Point<T>> {
        let (area, x, y) = self.moments();
        if !area.is_zero() {
            return Some(Point {
                x: x / area,
                y: y / area,
            });
        }

        boundary_centroid(std::slice::from_ref(self))
    }

    /// Returns the axis-aligned bounding box of the polygon, if any.
    pub fn envelope(&self) -> Option<Envelope<T>> {
        Envelope::from_points(&self.vertices)
    }

    /// Returns the closed list of coordinates of the polygon's boundary.
    pub fn exterior(&self) -> Vec<Point<T>> {
        self.vertices().copied().collect()
    }

    /// Returns the amount of times self winds around the given [`Point`].
    pub fn winding(&self, point: &Point<T>) -> isize {
        self.edges().fold(0, |wn, segment| {
            let side = Determinant::from([segment.from, segment.to, point]).into_inner();
            if segment.from.y <= point.y && segment.to.y > point.y && side > T::zero() {
                wn + 1
            } else if segment.from.y > point.y && segment.to.y <= point.y && side < T::zero() {
                wn - 1
            } else {
                wn
            }
        })
    }

    /// Returns true if, and only if, the given point lies on the boundary of the polygon.
    pub fn is_boundary(&self, point: &Point<T>, tolerance: &Tolerance<T>) -> bool {
        self.edges().any(|segment| segment.contains(point, tolerance))
    }

    /// Returns true if, and only if, the given point is enclosed by the polygon or lies on its
    /// boundary.
    pub fn covers(&self, point: &Point<T>, tolerance: &Tolerance<T>) -> bool {
        self.winding(point) != 0 || self.is_boundary(point, tolerance)
    }

    /// Returns this polygon without repeated consecutive vertices.
    pub fn deduplicated(mut self, tolerance: &Tolerance<T>) -> Self {
        self.vertices.dedup_by(|next, prev| next.is_close(prev, tolerance));
        while self.vertices.len() > 1
            && self
                .vertices
                .last()
                .zip(self.vertices.first())
                .is_some_and(|(last, first)| last.is_close(first, tolerance))
        {
            self.vertices.pop();
        }

        self
    }

    /// Returns the amount of different vertices in the polygon.
    pub fn distinct_vertices(&self, tolerance: &Tolerance<T>) -> usize {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(position, vertex)| {
                !self.vertices[..*position]
                    .iter()
                    .any(|seen| seen.is_close(vertex, tolerance))
            })
            .count()
    }

    /// Returns true if, and only if, the polygon is convex and winds exactly once around its
    /// interior.
    ///
    /// Repeated consecutive vertices are ignored, so they never hide a concave turn.
    pub fn is_convex(&self, tolerance: &Tolerance<T>) -> bool {
        let polygon = self.clone().deduplicated(tolerance);
        let len = polygon.vertices.len();
        if len < 3 {
            return false;
        }

        let mut sign = T::zero();
        let mut turning = T::zero();
        for position in 0..len {
            let [a, b, c] = [
                &polygon.vertices[position],
                &polygon.vertices[(position + 1) % len],
                &polygon.vertices[(position + 2) % len],
            ];

            let cross = Determinant::from([a, b, c]).into_inner();
            if !cross.is_zero() {
                if !sign.is_zero() && cross.signum() != sign {
                    return false;
                }

                sign = cross.signum();
            }

            let dot = (b.x - a.x) * (c.x - b.x) + (b.y - a.y) * (c.y - b.y);
            turning = turning + cross.atan2(dot);
        }

        let full_turn = T::from(std::f64::consts::TAU).unwrap_or_else(T::zero);
        !sign.is_zero() && (turning.abs() - full_turn).abs() < full_turn / (T::one() + T::one())
    }

    /// Returns true if, and only if, the boundary of the polygon does not touch nor cross itself
    /// and encloses some area.
    ///
    /// Repeated consecutive vertices are allowed.
    pub fn is_simple(&self, tolerance: &Tolerance<T>) -> bool {
        let polygon = self.clone().deduplicated(tolerance);
        let len = polygon.vertices.len();
        if len < 3 || polygon.signed_area().is_zero() {
            return false;
        }

        let edges: Vec<_> = polygon.edges().collect();
        edges.iter().enumerate().all(|(i, edge)| {
            edges.iter().enumerate().skip(i + 1).all(|(j, other)| {
                if j == i + 1 {
                    !is_spike(edge, other)
                } else if i == 0 && j == len - 1 {
                    !is_spike(other, edge)
                } else {
                    edge.intersection(other).is_none()
                        && !edge.contains(other.from, tolerance)
                        && !edge.contains(other.to, tolerance)
                        && !other.contains(edge.from, tolerance)
                        && !other.contains(edge.to, tolerance)
                }
            })
        })
    }

    /// Returns the triangles fanning out of the first vertex of the polygon.
    ///
    /// The sum of the signed areas of the triangles equals the signed area of the polygon, and
    /// so does the amount of times they wind around any point. Triangles enclosing no area are
    /// skipped.
    pub fn fan(&self) -> impl Iterator<Item = Polygon<T>> + '_ {
        let apex = self.vertices.first();
        self.vertices
            .windows(2)
            .skip(1)
            .filter_map(move |pair| {
                let apex = apex?;
                Some(Polygon {
                    vertices: vec![*apex, pair[0], pair[1]],
                })
            })
            .filter(|triangle| !triangle.signed_area().is_zero())
    }
}

/// Returns true if, and only if, the consecutive segments `from` and `to` fold back over each
/// other.
fn is_spike<T>(from: &Segment<'_, T>, to: &Segment<'_, T>) -> bool
where
    T: Float,
{
    let cross = Determinant::from([from.from, from.to, to.to]).into_inner();
    let dot = (from.to.x - from.from.x) * (to.to.x - to.from.x)
        + (from.to.y - from.from.y) * (to.to.y - to.from.y);

    cross.is_zero() && dot < T::zero()
}

/// Returns the length-weighted centroid of the boundaries of the given polygons, or the mean of
/// their vertices if the boundaries have no length.
pub(crate) fn boundary_centroid<T>(polygons: &[Polygon<T>]) -> Option<Point<T>>
where
    T: Float,
{
    let (length, x, y) = polygons
        .iter()
        .flat_map(|polygon| polygon.edges())
        .fold((T::zero(), T::zero(), T::zero()), |(length, x, y), segment| {
            let weight = segment.length();
            let midpoint = segment.midpoint();
            (length + weight, x + midpoint.x * weight, y + midpoint.y * weight)
        });

    if !length.is_zero() {
        return Some(Point {
            x: x / length,
            y: y / length,
        });
    }

    let (count, x, y) = polygons
        .iter()
        .flat_map(|polygon| polygon.vertices.iter())
        .fold((T::zero(), T::zero(), T::zero()), |(count, x, y), vertex| {
            (count + T::one(), x + vertex.x, y + vertex.y)
        });

    (!count.is_zero()).then(|| Point {
        x: x / count,
        y: y / count,
    })
}
