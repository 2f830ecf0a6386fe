use num_traits::Float;

use crate::Tolerance;

use super::{
    Envelope, Point, Polygon, Rectangle, clip::clip, hull::minimum_rotated_rectangle,
    polygon::boundary_centroid, repair::repair,
};

/// A region of the plain described by a combination of polygons.
///
/// Counter-clockwise polygons add their area to the region while clockwise ones subtract it.
/// Holes are therefore clockwise polygons enclosed by counter-clockwise ones, and the outcome of
/// a boolean operation is kept as such a signed decomposition.
#[derive(Debug, Clone)]
pub struct Shape<T> {
    /// The signed polygons describing the region.
    pub(crate) polygons: Vec<Polygon<T>>,
}

impl<T> Default for Shape<T> {
    fn default() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }
}

impl<T> From<Polygon<T>> for Shape<T>
where
    T: Float,
{
    fn from(value: Polygon<T>) -> Self {
        Self::new(value)
    }
}

impl<T> PartialEq for Shape<T>
where
    T: PartialEq + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        if self.polygons.len() != other.polygons.len() {
            return false;
        }

        self.polygons
            .iter()
            .all(|a| other.polygons.iter().any(|b| a.eq(b)))
    }
}

impl<T> Shape<T>
where
    T: Float,
{
    /// Creates a new shape from the given polygon, oriented counter-clockwise.
    pub fn new(value: impl Into<Polygon<T>>) -> Self {
        let polygon = value.into();

        Self {
            polygons: vec![if polygon.is_clockwise() {
                polygon.reversed()
            } else {
                polygon
            }],
        }
    }

    /// Returns the polygons describing the region.
    pub fn polygons(&self) -> &[Polygon<T>] {
        &self.polygons
    }

    /// Returns true if, and only if, the shape has no polygons.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Returns the area of the region.
    ///
    /// Rounding residue of signed decompositions never makes the area negative.
    pub fn area(&self) -> T {
        self.polygons
            .iter()
            .fold(T::zero(), |area, polygon| area + polygon.signed_area())
            .max(T::zero())
    }

    /// Returns the center of mass of the region, if any.
    pub fn centroid(&self) -> Option<Point<T>> {
        let (area, x, y) = self.polygons.iter().map(Polygon::moments).fold(
            (T::zero(), T::zero(), T::zero()),
            |(area, x, y), moments| (area + moments.0, x + moments.1, y + moments.2),
        );

        if !area.is_zero() {
            return Some(Point {
                x: x / area,
                y: y / area,
            });
        }

        boundary_centroid(&self.polygons)
    }

    /// Returns the axis-aligned bounding box of the region, if any.
    pub fn envelope(&self) -> Option<Envelope<T>> {
        Envelope::from_points(self.polygons.iter().flat_map(|polygon| &polygon.vertices))
    }

    /// Returns the closed boundary of the first polygon in the shape.
    pub fn exterior(&self) -> Vec<Point<T>> {
        self.polygons
            .first()
            .map(Polygon::exterior)
            .unwrap_or_default()
    }

    /// Returns true if, and only if, none of the polygons in the shape touches nor crosses
    /// itself.
    pub fn is_valid(&self, tolerance: &Tolerance<T>) -> bool {
        self.polygons
            .iter()
            .all(|polygon| polygon.is_simple(tolerance))
    }

    /// Returns the shape covering the same region as self whose polygons are all valid.
    ///
    /// Valid shapes are returned as they are, so repairing is idempotent.
    pub fn repaired(&self, tolerance: &Tolerance<T>) -> Self {
        if self.is_valid(tolerance) {
            return self.clone();
        }

        Self {
            polygons: self
                .polygons
                .iter()
                .flat_map(|polygon| {
                    if polygon.is_simple(tolerance) {
                        vec![polygon.clone()]
                    } else {
                        repair(polygon, tolerance)
                    }
                })
                .collect(),
        }
    }

    /// Returns the rectangle of minimum area enclosing the region, if any.
    pub fn minimum_rotated_rectangle(&self) -> Option<Rectangle<T>> {
        let vertices: Vec<Point<T>> = self
            .polygons
            .iter()
            .flat_map(|polygon| polygon.vertices.iter().copied())
            .collect();

        minimum_rotated_rectangle(&vertices)
    }

    /// Returns the intersection of self and rhs.
    pub fn intersection(&self, rhs: &Self, tolerance: &Tolerance<T>) -> Self {
        if let Some((window, sign)) = rhs.as_convex(tolerance) {
            return self.clip(window, sign);
        }

        if let Some((window, sign)) = self.as_convex(tolerance) {
            return rhs.clip(window, sign);
        }

        let lhs: Vec<_> = self.signed_triangles().collect();
        let rhs: Vec<_> = rhs.signed_triangles().collect();

        Self {
            polygons: lhs
                .iter()
                .flat_map(|(subject, subject_sign, subject_envelope)| {
                    rhs.iter()
                        .filter(move |(_, _, envelope)| subject_envelope.intersects(envelope))
                        .filter_map(move |(window, window_sign, _)| {
                            let piece = clip(subject, window)?;
                            Some(if subject_sign == window_sign {
                                piece
                            } else {
                                piece.reversed()
                            })
                        })
                })
                .collect(),
        }
    }

    /// Returns the region covered by exactly one of self and rhs.
    pub fn symmetric_difference(&self, rhs: &Self, tolerance: &Tolerance<T>) -> Self {
        let common = self.intersection(rhs, tolerance);

        Self {
            polygons: self
                .polygons
                .iter()
                .chain(&rhs.polygons)
                .cloned()
                .chain(
                    common
                        .polygons
                        .into_iter()
                        .flat_map(|polygon| {
                            let reversed = polygon.reversed();
                            [reversed.clone(), reversed]
                        }),
                )
                .collect(),
        }
    }

    /// Returns the single convex polygon of the shape, oriented counter-clockwise, together with
    /// the sign of its contribution to the area, if the shape is made of it alone.
    fn as_convex(&self, tolerance: &Tolerance<T>) -> Option<(Polygon<T>, bool)> {
        let [polygon] = self.polygons.as_slice() else {
            return None;
        };

        if !polygon.is_convex(tolerance) {
            return None;
        }

        let polygon = polygon.clone().deduplicated(tolerance);
        Some(if polygon.is_clockwise() {
            (polygon.reversed(), false)
        } else {
            (polygon, true)
        })
    }

    /// Returns the portion of self enclosed by the given convex window.
    fn clip(&self, window: Polygon<T>, positive: bool) -> Self {
        Self {
            polygons: self
                .polygons
                .iter()
                .filter_map(|polygon| clip(polygon, &window))
                .map(|piece| if positive { piece } else { piece.reversed() })
                .collect(),
        }
    }

    /// Returns the counter-clockwise triangles decomposing the shape, each with the sign of its
    /// contribution to the area and its envelope.
    fn signed_triangles(&self) -> impl Iterator<Item = (Polygon<T>, bool, Envelope<T>)> + '_ {
        self.polygons
            .iter()
            .flat_map(|polygon| polygon.fan())
            .filter_map(|triangle| {
                let envelope = triangle.envelope()?;
                Some(if triangle.is_clockwise() {
                    (triangle.reversed(), false, envelope)
                } else {
                    (triangle, true, envelope)
                })
            })
    }
}
