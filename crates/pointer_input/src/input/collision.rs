//! Collision detection for pointer input
//!
//! Hit testing for rectangular regions. This is input system
//! responsibility - determining whether the cursor is over a region.

use crate::foundation::math::{Point2, Rect, Vec2};

/// Check if a point is inside a rectangle given by top-left corner and size
///
/// # Arguments
/// * `point` - The point to test, in the same coordinate space as the rect
/// * `top_left` - Top-left corner of the rectangle
/// * `size` - Size of the rectangle (width, height)
///
/// # Returns
/// `true` if the point is inside the rectangle, edges included
pub fn point_in_rect(point: Point2, top_left: Point2, size: Vec2) -> bool {
    Rect::from_top_left(top_left, size).contains_point(point)
}

/// Compute the rectangle covered by a region with the given bounds and origin
///
/// The origin offset is subtracted from `(0, 0)` to locate the region's
/// top-left corner; the bottom-right corner follows from the bounds.
pub fn region_rect(bounds: Vec2, origin: Vec2) -> Rect {
    let top_left = Point2::origin() - origin;
    Rect::from_top_left(top_left, bounds)
}

/// Check if a point is inside an origin-anchored region
///
/// # Arguments
/// * `point` - The point to test, in the mouse event coordinate space
/// * `bounds` - Region size (width, height)
/// * `origin` - Origin offset anchoring the region's top-left at `-origin`
///
/// # Returns
/// `true` if the point is inside the region, edges included
pub fn point_in_region(point: Point2, bounds: Vec2, origin: Vec2) -> bool {
    region_rect(bounds, origin).contains_point(point)
}
