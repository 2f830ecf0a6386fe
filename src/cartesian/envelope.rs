use num_traits::Float;

use super::Point;

/// The axis-aligned bounding box of a geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Envelope<T> {
    /// The lower-left corner of the box.
    pub min: Point<T>,
    /// The upper-right corner of the box.
    pub max: Point<T>,
}

impl<T> Envelope<T>
where
    T: Float,
{
    /// Returns the smallest envelope containing all the given points, if any.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point<T>>) -> Option<Self>
    where
        T: 'a,
    {
        points.into_iter().fold(None, |envelope, point| {
            Some(match envelope {
                None => Self {
                    min: *point,
                    max: *point,
                },
                Some(Self { min, max }) => Self {
                    min: Point {
                        x: min.x.min(point.x),
                        y: min.y.min(point.y),
                    },
                    max: Point {
                        x: max.x.max(point.x),
                        y: max.y.max(point.y),
                    },
                },
            })
        })
    }

    /// Returns the horizontal extent of the envelope.
    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    /// Returns the vertical extent of the envelope.
    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }

    /// Returns the four corners of the envelope in counter-clockwise order, starting at the
    /// lower-left one.
    pub fn corners(&self) -> [Point<T>; 4] {
        [
            self.min,
            Point {
                x: self.max.x,
                y: self.min.y,
            },
            self.max,
            Point {
                x: self.min.x,
                y: self.max.y,
            },
        ]
    }

    /// Returns true if, and only if, self and rhs share at least one point.
    pub fn intersects(&self, rhs: &Self) -> bool {
        self.min.x <= rhs.max.x
            && rhs.min.x <= self.max.x
            && self.min.y <= rhs.max.y
            && rhs.min.y <= self.max.y
    }
}
