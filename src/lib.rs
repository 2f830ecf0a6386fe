mod builder;
mod distance;
mod features;
mod metrics;
mod polar;
mod season;
mod series;
mod tolerance;

pub mod cartesian;
pub mod config;
pub mod error;
pub mod render;

pub use self::builder::{build_polygon, build_valid_polygon, ensure_valid};
pub use self::config::{Config, EccentricityAxes, GyrationMode};
pub use self::distance::{Alignment, align, best_shift};
pub use self::error::{Error, GeometryError, Result};
pub use self::features::{FeatureVector, Polar};
pub use self::metrics::{angle, area_season, area_ts, ecc_metric, gyration_radius, polar_balance};
pub use self::polar::{PolarRing, map_to_polar};
pub use self::season::{Seasons, season_quadrants};
pub use self::series::{CleanSeries, FixSeries};
pub use self::tolerance::{IsClose, Positive, Tolerance};

use self::{
    cartesian::{Envelope, Point, Rectangle},
    render::Frame,
};

/// A type whose distance to other instances of itself is defined.
pub trait Distance {
    /// The distance type.
    type Distance;

    /// Returns the distance between self and rhs.
    fn distance(&self, rhs: &Self) -> Self::Distance;
}

/// The geometric operations the polar shapes of series are measured with.
pub trait Engine {
    /// The type of region this engine operates on.
    type Shape: Clone;

    /// Returns the polygon enclosed by the given ring, without repairing it.
    ///
    /// Fails if the ring has less than 3 distinct points.
    fn polygon(&self, ring: &[Point<f64>]) -> Result<Self::Shape>;

    /// Returns the region covered by the given envelope, which is empty if the envelope
    /// encloses no area.
    fn rectangle(&self, envelope: &Envelope<f64>) -> Self::Shape;

    fn area(&self, shape: &Self::Shape) -> f64;

    fn centroid(&self, shape: &Self::Shape) -> Option<Point<f64>>;

    /// Returns true if, and only if, no boundary of the shape touches nor crosses itself.
    fn is_valid(&self, shape: &Self::Shape) -> bool;

    /// Returns the valid shape covering the same region as the given one.
    fn buffer_zero(&self, shape: &Self::Shape) -> Self::Shape;

    fn intersection(&self, lhs: &Self::Shape, rhs: &Self::Shape) -> Self::Shape;

    fn symmetric_difference(&self, lhs: &Self::Shape, rhs: &Self::Shape) -> Self::Shape;

    fn minimum_rotated_rectangle(&self, shape: &Self::Shape) -> Option<Rectangle<f64>>;

    fn envelope(&self, shape: &Self::Shape) -> Option<Envelope<f64>>;

    /// Returns the closed boundary of the shape.
    fn exterior(&self, shape: &Self::Shape) -> Vec<Point<f64>>;
}

/// A strategy to turn raw values into a [`CleanSeries`].
pub trait Clean {
    /// Returns the clean version of the given raw series, which is trivial if the raw values
    /// carry no shape.
    fn clean(&self, raw: &[f64]) -> CleanSeries;
}

/// A sink for the polar shapes of series.
pub trait Render {
    fn render(&self, frame: &Frame<'_>);
}

/// Returns the shape descriptors of the given raw series using the planar engine and the
/// default settings.
#[cfg(feature = "cartesian")]
pub fn extract_features(raw: &[f64]) -> Result<FeatureVector> {
    let polar: Polar<cartesian::Planar, FixSeries> = Polar::default();
    polar.features(raw)
}

/// Returns the dissimilarity between the polar shapes of both raw series using the planar
/// engine and the default settings.
#[cfg(feature = "cartesian")]
pub fn symmetric_distance(lhs: &[f64], rhs: &[f64]) -> Result<f64> {
    let polar: Polar<cartesian::Planar, FixSeries> = Polar::default();
    polar.distance(lhs, rhs)
}
