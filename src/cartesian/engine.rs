use crate::{
    Engine, Tolerance,
    error::{GeometryError, Result},
};

use super::{Envelope, Point, Polygon, Rectangle, Shape};

/// The planar [`Engine`] backed by the [`Shape`] type of this module.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Planar {
    /// The tolerance under which two vertices are considered the same.
    pub tolerance: Tolerance<f64>,
}

impl Default for Planar {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::new(1e-9, 1e-12),
        }
    }
}

impl Planar {
    pub fn with_tolerance(mut self, tolerance: Tolerance<f64>) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Engine for Planar {
    type Shape = Shape<f64>;

    fn polygon(&self, ring: &[Point<f64>]) -> Result<Self::Shape> {
        let mut vertices = ring.to_vec();
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }

        let polygon = Polygon { vertices };
        let distinct = polygon.distinct_vertices(&self.tolerance);
        if distinct < 3 {
            return Err(GeometryError::TooFewPoints { distinct }.into());
        }

        Ok(Shape::new(polygon))
    }

    fn rectangle(&self, envelope: &Envelope<f64>) -> Self::Shape {
        if envelope.width() <= 0. || envelope.height() <= 0. {
            return Shape::default();
        }

        Shape::new(envelope.corners().to_vec())
    }

    fn area(&self, shape: &Self::Shape) -> f64 {
        shape.area()
    }

    fn centroid(&self, shape: &Self::Shape) -> Option<Point<f64>> {
        shape.centroid()
    }

    fn is_valid(&self, shape: &Self::Shape) -> bool {
        shape.is_valid(&self.tolerance)
    }

    fn buffer_zero(&self, shape: &Self::Shape) -> Self::Shape {
        shape.repaired(&self.tolerance)
    }

    fn intersection(&self, lhs: &Self::Shape, rhs: &Self::Shape) -> Self::Shape {
        lhs.intersection(rhs, &self.tolerance)
    }

    fn symmetric_difference(&self, lhs: &Self::Shape, rhs: &Self::Shape) -> Self::Shape {
        lhs.symmetric_difference(rhs, &self.tolerance)
    }

    fn minimum_rotated_rectangle(&self, shape: &Self::Shape) -> Option<Rectangle<f64>> {
        shape.minimum_rotated_rectangle()
    }

    fn envelope(&self, shape: &Self::Shape) -> Option<Envelope<f64>> {
        shape.envelope()
    }

    fn exterior(&self, shape: &Self::Shape) -> Vec<Point<f64>> {
        shape.exterior()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Engine,
        cartesian::{Envelope, Planar, Point},
        error::{Error, GeometryError},
    };

    #[test]
    fn polygon_from_ring() {
        struct Test {
            name: &'static str,
            ring: Vec<Point<f64>>,
            want: Result<f64, Error>,
        }

        vec![
            Test {
                name: "closed square",
                ring: vec![
                    [0., 0.].into(),
                    [2., 0.].into(),
                    [2., 2.].into(),
                    [0., 2.].into(),
                    [0., 0.].into(),
                ],
                want: Ok(4.),
            },
            Test {
                name: "open clockwise square",
                ring: vec![[0., 0.].into(), [0., 2.].into(), [2., 2.].into(), [2., 0.].into()],
                want: Ok(4.),
            },
            Test {
                name: "two distinct points",
                ring: vec![[1., 0.].into(), [-1., 0.].into(), [1., 0.].into()],
                want: Err(GeometryError::TooFewPoints { distinct: 2 }.into()),
            },
            Test {
                name: "empty ring",
                ring: vec![],
                want: Err(GeometryError::TooFewPoints { distinct: 0 }.into()),
            },
        ]
        .into_iter()
        .for_each(|test| {
            let engine = Planar::default();
            let got = engine
                .polygon(&test.ring)
                .map(|shape| engine.area(&shape));

            assert_eq!(got, test.want, "{}", test.name);
        });
    }

    #[test]
    fn degenerate_rectangle_is_empty() {
        let engine = Planar::default();

        let flat = Envelope {
            min: [0., 0.].into(),
            max: [2., 0.].into(),
        };

        assert!(engine.rectangle(&flat).is_empty());

        let square = Envelope {
            min: [0., 0.].into(),
            max: [2., 2.].into(),
        };

        assert_eq!(engine.area(&engine.rectangle(&square)), 4.);
    }
}
