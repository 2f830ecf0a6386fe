use num_traits::Float;

use crate::{Distance, IsClose, Tolerance};

/// A point in the plain.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    /// The horizontal coordinate of the point.
    pub x: T,
    /// The vertical coordinate of the point.
    pub y: T,
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> Distance for Point<T>
where
    T: Float,
{
    type Distance = T;

    fn distance(&self, rhs: &Self) -> Self::Distance {
        (self.x - rhs.x).hypot(self.y - rhs.y)
    }
}

impl<T> IsClose for Point<T>
where
    T: IsClose<Tolerance = Tolerance<T>> + Copy,
{
    type Tolerance = Tolerance<T>;

    fn is_close(&self, rhs: &Self, tolerance: &Self::Tolerance) -> bool {
        self.x.is_close(&rhs.x, tolerance) && self.y.is_close(&rhs.y, tolerance)
    }
}

impl<T> Point<T>
where
    T: Float,
{
    /// Returns the cartesian point at the given polar coordinates.
    pub fn from_polar(radius: T, angle: T) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }
}

/// A constructor macro for the cartesian [`Point`].
#[macro_export]
macro_rules! cartesian_point {
    ($x:expr, $y:expr) => {
        $crate::cartesian::Point { x: $x, y: $y }
    };
}

pub use cartesian_point;

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::{
        Distance,
        cartesian::{Point, point::cartesian_point},
    };

    #[test]
    fn point_from_polar_coordinates() {
        struct Test {
            name: &'static str,
            radius: f64,
            angle: f64,
            want: Point<f64>,
        }

        vec![
            Test {
                name: "zero angle",
                radius: 2.,
                angle: 0.,
                want: cartesian_point!(2., 0.),
            },
            Test {
                name: "quarter turn",
                radius: 3.,
                angle: FRAC_PI_2,
                want: cartesian_point!(0., 3.),
            },
            Test {
                name: "half turn",
                radius: 1.,
                angle: PI,
                want: cartesian_point!(-1., 0.),
            },
            Test {
                name: "null radius",
                radius: 0.,
                angle: 1.,
                want: cartesian_point!(0., 0.),
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = Point::from_polar(test.radius, test.angle);
            assert!(got.distance(&test.want) < 1e-12, "{}", test.name);
        });
    }
}
