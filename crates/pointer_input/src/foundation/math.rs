//! Math utilities and types
//!
//! Provides the fundamental 2D math types used for pointer hit-testing.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Axis-aligned rectangle for 2D spatial queries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum corner (top-left in screen space)
    pub min: Point2,
    /// Maximum corner (bottom-right in screen space)
    pub max: Point2,
}

impl Rect {
    /// Create a new rectangle from min and max corners
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from its top-left corner and size
    pub fn from_top_left(top_left: Point2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    /// Create a rectangle centered at a point with given half-extents
    pub fn from_center_extents(center: Point2, extents: Vec2) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Get the center of the rectangle
    pub fn center(&self) -> Point2 {
        Point2::from((self.min.coords + self.max.coords) * 0.5)
    }

    /// Get the size (width, height) of the rectangle
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Check if this rectangle contains a point
    ///
    /// Containment is closed on all four edges: points exactly on an edge
    /// count as inside.
    pub fn contains_point(&self, point: Point2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y
    }

    /// Check if this rectangle intersects another rectangle
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y
    }
}
