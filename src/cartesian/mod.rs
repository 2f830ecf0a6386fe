mod clip;
mod determinant;
#[cfg(feature = "cartesian")]
mod engine;
mod envelope;
mod hull;
mod point;
mod polygon;
mod repair;
mod segment;
mod shape;

#[cfg(feature = "cartesian")]
pub use self::engine::Planar;
pub use self::envelope::Envelope;
pub use self::hull::Rectangle;
pub use self::point::Point;
pub use self::polygon::Polygon;
pub use self::segment::Segment;
pub use self::shape::Shape;
