//! Settings of the feature extraction.

/// How the gyration radius averages the distance from the boundary to the centroid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GyrationMode {
    /// The mean distance over all the vertices of the boundary.
    #[default]
    Mean,
    /// The distance of the last coordinate of the closed boundary alone.
    LastVertex,
}

/// Which extents of the minimum rotated rectangle make up the eccentricity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EccentricityAxes {
    /// The short and the long side of the rectangle.
    #[default]
    Sides,
    /// The width and height of the axis-aligned bounds of the rectangle.
    Bounds,
}

/// The configuration of a [`Polar`](crate::Polar) facade.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub gyration: GyrationMode,
    pub eccentricity: EccentricityAxes,
    /// Whether to render the polar shape of every series whose features are extracted.
    pub visualize: bool,
}

impl Config {
    pub fn with_gyration(mut self, gyration: GyrationMode) -> Self {
        self.gyration = gyration;
        self
    }

    pub fn with_eccentricity(mut self, eccentricity: EccentricityAxes) -> Self {
        self.eccentricity = eccentricity;
        self
    }

    pub fn with_visualize(mut self, visualize: bool) -> Self {
        self.visualize = visualize;
        self
    }
}
