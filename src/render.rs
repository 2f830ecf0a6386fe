//! Drawing of polar shapes.

use std::{fmt::Write as _, path::PathBuf};

use tracing::{debug, error};

use crate::{Render, cartesian::Point, season::Seasons, series::CleanSeries};

/// Everything there is to draw of a series.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    /// The clean series the shape comes from.
    pub series: &'a CleanSeries,
    /// The closed boundary of the polar shape of the series.
    pub polygon: Vec<Point<f64>>,
    /// The closed boundaries of the season quadrants.
    pub seasons: Seasons<Vec<Point<f64>>>,
}

impl Frame<'_> {
    /// Returns the largest absolute coordinate on each axis.
    pub fn extent(&self) -> (f64, f64) {
        self.seasons
            .counter_clockwise()
            .into_iter()
            .flatten()
            .chain(&self.polygon)
            .fold((0., 0.), |(x, y): (f64, f64), point| {
                (x.max(point.x.abs()), y.max(point.y.abs()))
            })
    }
}

impl<F> Render for F
where
    F: Fn(&Frame<'_>),
{
    fn render(&self, frame: &Frame<'_>) {
        self(frame)
    }
}

/// A [`Render`] that writes every frame as an SVG document into the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Svg {
    path: PathBuf,
}

impl Svg {
    const TOP_LEFT: &'static str = "#F7CF89";
    const TOP_RIGHT: &'static str = "#8BF789";
    const BOTTOM_LEFT: &'static str = "#D09A3C";
    const BOTTOM_RIGHT: &'static str = "#6CBEEA";
    const SHAPE: &'static str = "#EF8C78";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the SVG document drawing the given frame.
    pub fn document(frame: &Frame<'_>) -> String {
        let (width, height) = frame.extent();

        let mut document = String::new();
        let _ = writeln!(
            document,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            -width,
            -height,
            2. * width,
            2. * height
        );

        let _ = writeln!(document, r#"<g transform="scale(1,-1)" fill-opacity="0.5">"#);
        [
            (&frame.seasons.top_left, Self::TOP_LEFT),
            (&frame.seasons.top_right, Self::TOP_RIGHT),
            (&frame.seasons.bottom_left, Self::BOTTOM_LEFT),
            (&frame.seasons.bottom_right, Self::BOTTOM_RIGHT),
            (&frame.polygon, Self::SHAPE),
        ]
        .into_iter()
        .filter(|(ring, _)| !ring.is_empty())
        .for_each(|(ring, fill)| {
            let points = ring
                .iter()
                .map(|point| format!("{},{}", point.x, point.y))
                .collect::<Vec<_>>()
                .join(" ");

            let _ = writeln!(document, r#"<polygon points="{points}" fill="{fill}"/>"#);
        });

        document.push_str("</g>\n</svg>\n");
        document
    }
}

impl Render for Svg {
    fn render(&self, frame: &Frame<'_>) {
        match std::fs::write(&self.path, Self::document(frame)) {
            Ok(()) => debug!(path = %self.path.display(), "polar shape rendered"),
            Err(err) => error!(path = %self.path.display(), error = %err, "rendering polar shape"),
        }
    }
}
