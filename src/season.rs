//! Partition of the plain into seasons.

use crate::{
    Engine,
    cartesian::{Envelope, Point},
};

/// The four quadrants of the plain, split at the origin, that approximate the seasons of a
/// series.
#[derive(Debug, Clone, PartialEq)]
pub struct Seasons<S> {
    pub top_left: S,
    pub top_right: S,
    pub bottom_left: S,
    pub bottom_right: S,
}

impl<S> Seasons<S> {
    /// Returns the quadrants in counter-clockwise order starting at the top-right one.
    pub fn counter_clockwise(&self) -> [&S; 4] {
        [
            &self.top_right,
            &self.top_left,
            &self.bottom_left,
            &self.bottom_right,
        ]
    }

    pub fn map<U>(self, mut f: impl FnMut(S) -> U) -> Seasons<U> {
        Seasons {
            top_left: f(self.top_left),
            top_right: f(self.top_right),
            bottom_left: f(self.bottom_left),
            bottom_right: f(self.bottom_right),
        }
    }
}

/// Returns the season quadrants of the given polygon.
///
/// The quadrants make up a grid symmetric about the origin that spans, on each axis, the
/// largest absolute coordinate of the polygon's envelope. The shape of the polygon is
/// otherwise irrelevant.
pub fn season_quadrants<E>(engine: &E, polygon: &E::Shape) -> Seasons<E::Shape>
where
    E: Engine,
{
    let (max_x, max_y) = engine
        .envelope(polygon)
        .map(|envelope| {
            (
                envelope.min.x.abs().max(envelope.max.x.abs()),
                envelope.min.y.abs().max(envelope.max.y.abs()),
            )
        })
        .unwrap_or_default();

    let cell = |min: [f64; 2], max: [f64; 2]| {
        engine.rectangle(&Envelope {
            min: Point::from(min),
            max: Point::from(max),
        })
    };

    Seasons {
        top_left: cell([-max_x, 0.], [0., max_y]),
        top_right: cell([0., 0.], [max_x, max_y]),
        bottom_left: cell([-max_x, -max_y], [0., 0.]),
        bottom_right: cell([0., -max_y], [max_x, 0.]),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Engine,
        cartesian::{Envelope, Planar, Shape},
        season::season_quadrants,
    };

    #[test]
    fn quadrants_are_symmetric_about_the_origin() {
        struct Test {
            name: &'static str,
            polygon: Shape<f64>,
            want: Envelope<f64>,
        }

        vec![
            Test {
                name: "polygon around the origin",
                polygon: Shape::new(vec![[1., 0.], [0., 2.], [-1., 0.], [0., -2.]]),
                want: Envelope {
                    min: [-1., -2.].into(),
                    max: [1., 2.].into(),
                },
            },
            Test {
                name: "polygon off the origin",
                polygon: Shape::new(vec![[1., 1.], [3., 1.], [3., 2.], [1., 2.]]),
                want: Envelope {
                    min: [-3., -2.].into(),
                    max: [3., 2.].into(),
                },
            },
        ]
        .into_iter()
        .for_each(|test| {
            let engine = Planar::default();
            let seasons = season_quadrants(&engine, &test.polygon);

            let quarter = test.want.width() * test.want.height() / 4.;
            seasons.counter_clockwise().into_iter().for_each(|quadrant| {
                assert_eq!(engine.area(quadrant), quarter, "{}", test.name);
            });

            assert_eq!(
                engine.envelope(&seasons.top_right).map(|envelope| envelope.max),
                Some(test.want.max),
                "{}",
                test.name
            );

            assert_eq!(
                engine.envelope(&seasons.bottom_left).map(|envelope| envelope.min),
                Some(test.want.min),
                "{}",
                test.name
            );
        });
    }

    #[test]
    fn flat_polygon_has_empty_quadrants() {
        let engine = Planar::default();
        let polygon = Shape::new(vec![[0., 0.], [1., 0.], [2., 0.]]);

        let seasons = season_quadrants(&engine, &polygon);
        assert!(seasons.counter_clockwise().into_iter().all(Shape::is_empty));
    }
}
