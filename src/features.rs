//! Feature extraction over raw series.

use std::fmt;

use tracing::{debug, instrument};

use crate::{
    Clean, Engine, Render,
    builder::build_polygon,
    config::Config,
    distance::{self, Alignment},
    error::Result,
    metrics,
    polar::map_to_polar,
    render::Frame,
    season::season_quadrants,
    series::{CleanSeries, FixSeries},
};

/// The shape descriptors of a series, in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureVector([f64; 9]);

impl From<FeatureVector> for [f64; 9] {
    fn from(value: FeatureVector) -> Self {
        value.0
    }
}

impl IntoIterator for FeatureVector {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 9>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FeatureVector {
    /// The name of each feature, in order.
    pub const NAMES: [&'static str; 9] = [
        "area",
        "area_q1",
        "area_q2",
        "area_q3",
        "area_q4",
        "eccentricity",
        "gyration_radius",
        "polar_balance",
        "angle",
    ];

    /// The features of a degenerate series.
    pub const TRIVIAL: Self = Self([1.; 9]);

    pub fn new(values: [f64; 9]) -> Self {
        Self(values)
    }

    pub fn as_array(&self) -> &[f64; 9] {
        &self.0
    }

    pub fn area(&self) -> f64 {
        self.0[0]
    }

    /// Returns the seasonal areas, in counter-clockwise order starting at the top-right
    /// quadrant.
    pub fn seasonal_areas(&self) -> [f64; 4] {
        [self.0[1], self.0[2], self.0[3], self.0[4]]
    }

    pub fn eccentricity(&self) -> f64 {
        self.0[5]
    }

    pub fn gyration_radius(&self) -> f64 {
        self.0[6]
    }

    pub fn polar_balance(&self) -> f64 {
        self.0[7]
    }

    pub fn angle(&self) -> f64 {
        self.0[8]
    }

    pub fn is_trivial(&self) -> bool {
        *self == Self::TRIVIAL
    }
}

/// Extracts shape descriptors from series through their polar representation.
pub struct Polar<E, C> {
    engine: E,
    cleaner: C,
    config: Config,
    renderer: Option<Box<dyn Render>>,
}

impl<E, C> fmt::Debug for Polar<E, C>
where
    E: fmt::Debug,
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polar")
            .field("engine", &self.engine)
            .field("cleaner", &self.cleaner)
            .field("config", &self.config)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

#[cfg(feature = "cartesian")]
impl Default for Polar<crate::cartesian::Planar, FixSeries> {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl<E> Polar<E, FixSeries> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            cleaner: FixSeries::default(),
            config: Config::default(),
            renderer: None,
        }
    }
}

impl<E, C> Polar<E, C> {
    pub fn with_cleaner<D>(self, cleaner: D) -> Polar<E, D> {
        Polar {
            engine: self.engine,
            cleaner,
            config: self.config,
            renderer: self.renderer,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_renderer(mut self, renderer: impl Render + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<E, C> Polar<E, C>
where
    E: Engine,
    C: Clean,
{
    /// Returns the given raw series once cleaned.
    pub fn clean(&self, raw: &[f64]) -> CleanSeries {
        self.cleaner.clean(raw)
    }

    /// Returns the shape descriptors of the given raw series.
    ///
    /// A series that is trivial once cleaned yields [`FeatureVector::TRIVIAL`] and no geometry
    /// is built for it.
    #[instrument(skip_all, fields(len = raw.len()))]
    pub fn features(&self, raw: &[f64]) -> Result<FeatureVector> {
        let series = self.clean(raw);
        if series.is_trivial() {
            debug!("trivial series");
            return Ok(FeatureVector::TRIVIAL);
        }

        let area = metrics::area_ts(&self.engine, &series)?;
        let [q1, q2, q3, q4] = metrics::area_season(&self.engine, &series)?;
        let eccentricity = metrics::ecc_metric(&self.engine, &series, self.config.eccentricity)?;
        let gyration = metrics::gyration_radius(&self.engine, &series, self.config.gyration)?;
        let balance = metrics::polar_balance(&self.engine, &series)?;
        let angle = metrics::angle(&series);

        if self.config.visualize {
            self.render(&series)?;
        }

        Ok(FeatureVector([
            area,
            q1,
            q2,
            q3,
            q4,
            eccentricity,
            gyration,
            balance,
            angle,
        ]))
    }

    pub fn area_ts(&self, raw: &[f64]) -> Result<f64> {
        metrics::area_ts(&self.engine, &self.clean(raw))
    }

    /// Returns the seasonal areas of the given raw series, in counter-clockwise order starting
    /// at the top-right quadrant.
    pub fn area_season(&self, raw: &[f64]) -> Result<[f64; 4]> {
        metrics::area_season(&self.engine, &self.clean(raw))
    }

    pub fn ecc_metric(&self, raw: &[f64]) -> Result<f64> {
        metrics::ecc_metric(&self.engine, &self.clean(raw), self.config.eccentricity)
    }

    pub fn gyration_radius(&self, raw: &[f64]) -> Result<f64> {
        metrics::gyration_radius(&self.engine, &self.clean(raw), self.config.gyration)
    }

    pub fn polar_balance(&self, raw: &[f64]) -> Result<f64> {
        metrics::polar_balance(&self.engine, &self.clean(raw))
    }

    pub fn angle(&self, raw: &[f64]) -> f64 {
        metrics::angle(&self.clean(raw))
    }

    /// Returns the dissimilarity between the polar shapes of both raw series.
    pub fn distance(&self, lhs: &[f64], rhs: &[f64]) -> Result<f64> {
        self.alignment(lhs, rhs).map(|alignment| alignment.distance)
    }

    /// Returns the dissimilarity between the polar shapes of both raw series together with the
    /// shift the second one has been aligned by.
    #[instrument(skip_all, fields(lhs = lhs.len(), rhs = rhs.len()))]
    pub fn alignment(&self, lhs: &[f64], rhs: &[f64]) -> Result<Alignment> {
        distance::align(&self.engine, &self.clean(lhs), &self.clean(rhs))
    }

    /// Returns the amount of positions to roll the second raw series to best match the first
    /// one.
    pub fn best_shift(&self, lhs: &[f64], rhs: &[f64]) -> Result<usize> {
        distance::best_shift(&self.clean(lhs), &self.clean(rhs))
    }

    /// Hands the polar shape of the series and its seasons to the renderer, if any.
    fn render(&self, series: &CleanSeries) -> Result<()> {
        let Some(renderer) = &self.renderer else {
            debug!("no renderer to visualize the series with");
            return Ok(());
        };

        let polygon = build_polygon(&self.engine, &map_to_polar(series).ring)?;
        let seasons = season_quadrants(&self.engine, &polygon)
            .map(|quadrant| self.engine.exterior(&quadrant));

        renderer.render(&Frame {
            series,
            polygon: self.engine.exterior(&polygon),
            seasons,
        });

        Ok(())
    }
}
