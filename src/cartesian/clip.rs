//! Clipping of polygons against convex windows.

use num_traits::Float;

use super::{Point, Polygon, determinant::Determinant};

/// Returns the portion of the subject enclosed by the given window, if any.
///
/// The window must be convex and oriented counter-clockwise. The subject may be of any shape
/// and orientation: the resulting polygon keeps the orientation of the subject and, although it
/// may contain degenerate edges running along the window's boundary when the subject is
/// concave, its signed area is exactly the signed area of the clipped region.
pub(crate) fn clip<T>(subject: &Polygon<T>, window: &Polygon<T>) -> Option<Polygon<T>>
where
    T: Float,
{
    let mut output = subject.vertices.clone();
    for edge in window.edges() {
        let Some(&last) = output.last() else {
            break;
        };

        let side = |point: &Point<T>| Determinant::from([edge.from, edge.to, point]).into_inner();
        let input = std::mem::take(&mut output);

        let mut previous = (last, side(&last));
        for current in input {
            let current = (current, side(&current));
            let is_inside = current.1 >= T::zero();
            let was_inside = previous.1 >= T::zero();

            if is_inside != was_inside {
                output.push(crossing(previous, current));
            }

            if is_inside {
                output.push(current.0);
            }

            previous = current;
        }
    }

    let clipped = Polygon { vertices: output };
    (clipped.vertices.len() >= 3 && !clipped.signed_area().is_zero()).then_some(clipped)
}

/// Being each argument a point and its signed distance to a line (scaled by a common factor),
/// returns the point at which the segment joining them crosses the line.
fn crossing<T>((from, from_side): (Point<T>, T), (to, to_side): (Point<T>, T)) -> Point<T>
where
    T: Float,
{
    let t = from_side / (from_side - to_side);
    Point {
        x: from.x + t * (to.x - from.x),
        y: from.y + t * (to.y - from.y),
    }
}

#[cfg(test)]
mod tests {
    use crate::cartesian::{Polygon, clip::clip};

    #[test]
    fn clip_against_convex_window() {
        struct Test {
            name: &'static str,
            subject: Polygon<f64>,
            window: Polygon<f64>,
            want: Option<f64>,
        }

        vec![
            Test {
                name: "overlapping squares",
                subject: vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.]].into(),
                window: vec![[2., 2.], [6., 2.], [6., 6.], [2., 6.]].into(),
                want: Some(4.),
            },
            Test {
                name: "subject enclosing window",
                subject: vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.]].into(),
                window: vec![[1., 1.], [3., 1.], [3., 3.], [1., 3.]].into(),
                want: Some(4.),
            },
            Test {
                name: "window enclosing subject",
                subject: vec![[1., 1.], [3., 1.], [3., 3.], [1., 3.]].into(),
                window: vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.]].into(),
                want: Some(4.),
            },
            Test {
                name: "clockwise subject keeps its orientation",
                subject: vec![[0., 0.], [0., 4.], [4., 4.], [4., 0.]].into(),
                window: vec![[2., 2.], [6., 2.], [6., 6.], [2., 6.]].into(),
                want: Some(-4.),
            },
            Test {
                name: "concave subject crossing the window twice",
                subject: vec![
                    [0., 0.],
                    [6., 0.],
                    [6., 4.],
                    [4., 4.],
                    [4., 1.],
                    [2., 1.],
                    [2., 4.],
                    [0., 4.],
                ]
                .into(),
                window: vec![[0., 2.], [6., 2.], [6., 6.], [0., 6.]].into(),
                want: Some(8.),
            },
            Test {
                name: "squares sharing an edge",
                subject: vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.]].into(),
                window: vec![[4., 0.], [8., 0.], [8., 4.], [4., 4.]].into(),
                want: None,
            },
            Test {
                name: "disjoint squares",
                subject: vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.]].into(),
                window: vec![[6., 6.], [10., 6.], [10., 10.], [6., 10.]].into(),
                want: None,
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = clip(&test.subject, &test.window).map(|polygon| polygon.signed_area());
            assert_eq!(got, test.want, "{}", test.name);
        });
    }
}
