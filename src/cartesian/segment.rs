use num_traits::Float;

use crate::{Distance, IsClose, Tolerance};

use super::{Point, determinant::Determinant};

/// Represents the straight line between two endpoints.
#[derive(Debug)]
pub struct Segment<'a, T> {
    /// The first point in the segment.
    pub from: &'a Point<T>,
    /// The last point in the segment.
    pub to: &'a Point<T>,
}

impl<'a, T> From<(&'a Point<T>, &'a Point<T>)> for Segment<'a, T> {
    fn from((from, to): (&'a Point<T>, &'a Point<T>)) -> Self {
        Self { from, to }
    }
}

impl<T> Segment<'_, T>
where
    T: Float,
{
    /// Returns the distance between both endpoints of the segment.
    pub fn length(&self) -> T {
        self.from.distance(self.to)
    }

    /// Returns the middle point of the segment.
    pub fn midpoint(&self) -> Point<T> {
        let two = T::one() + T::one();
        Point {
            x: (self.from.x + self.to.x) / two,
            y: (self.from.y + self.to.y) / two,
        }
    }

    /// Returns true if, and only if, the given point lies on the segment, endpoints included.
    pub fn contains(&self, point: &Point<T>, tolerance: &Tolerance<T>) -> bool {
        let length = self.length();
        if length.is_zero() {
            return self.from.is_close(point, tolerance);
        }

        let margin = T::max(
            tolerance.relative.into_inner() * length,
            tolerance.absolute.into_inner(),
        );

        let offset = Determinant::from([self.from, self.to, point])
            .into_inner()
            .abs()
            / length;

        let along = self.parameter(point) * length;
        offset <= margin && along >= -margin && along - length <= margin
    }

    /// Returns the position of the given point along the segment, being 0 the origin of the
    /// segment and 1 its end.
    pub fn parameter(&self, point: &Point<T>) -> T {
        let dx = self.to.x - self.from.x;
        let dy = self.to.y - self.from.y;
        let squared = dx * dx + dy * dy;

        if squared.is_zero() {
            return T::zero();
        }

        ((point.x - self.from.x) * dx + (point.y - self.from.y) * dy) / squared
    }

    /// Returns the single [`Point`] at which self and rhs cross each other, if any.
    ///
    /// Parallel and coincident segments have no single crossing point, hence [`None`] is
    /// returned for them.
    pub fn intersection(&self, rhs: &Self) -> Option<Point<T>> {
        let determinant = Determinant::from([self, rhs]).into_inner();

        if determinant.is_zero() {
            return None;
        }

        let t = (rhs.from.x - self.from.x) * (rhs.to.y - rhs.from.y)
            - (rhs.from.y - self.from.y) * (rhs.to.x - rhs.from.x);

        // Predict if the division `t / determinant` will be in the range `[0,1]`
        if t.abs() > determinant.abs() || !t.is_zero() && t.signum() != determinant.signum() {
            return None;
        }

        let u = (rhs.from.x - self.from.x) * (self.to.y - self.from.y)
            - (rhs.from.y - self.from.y) * (self.to.x - self.from.x);

        // Predict if the division `u / determinant` will be in the range `[0,1]`
        if u.abs() > determinant.abs() || !u.is_zero() && u.signum() != determinant.signum() {
            return None;
        }

        let t = t / determinant;
        Some(Point {
            x: self.from.x + t * (self.to.x - self.from.x),
            y: self.from.y + t * (self.to.y - self.from.y),
        })
    }
}
