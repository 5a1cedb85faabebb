//! Spatial collaborators for pointer regions
//!
//! A region's placement is owned by a collaborating spatial component, not
//! by the region itself. The region only reads the current offset, once per
//! hit test, through the [`OriginSource`] seam.

use std::cell::Cell;
use std::rc::Rc;

use crate::foundation::math::Vec2;

/// Read-only accessor for a region's origin offset
///
/// The origin is subtracted from `(0, 0)` to locate the region's top-left
/// corner, so an origin of `(20, 30)` anchors the region at `(-20, -30)`.
pub trait OriginSource {
    /// Get the current origin offset
    fn origin(&self) -> Vec2;
}

impl<F> OriginSource for F
where
    F: Fn() -> Vec2,
{
    fn origin(&self) -> Vec2 {
        self()
    }
}

/// Cloneable handle to an origin offset shared with a spatial component
///
/// The owning component moves the region by calling [`SharedOrigin::set`];
/// the pointer region holds a clone and only reads. Single-threaded by
/// design, matching the synchronous event model.
///
/// # Examples
/// ```
/// # use pointer_input::spatial::{OriginSource, SharedOrigin};
/// # use pointer_input::foundation::math::Vec2;
/// let origin = SharedOrigin::new(Vec2::new(20.0, 30.0));
/// let reader = origin.clone();
///
/// origin.set(Vec2::new(40.0, 30.0));
/// assert_eq!(reader.origin(), Vec2::new(40.0, 30.0));
/// ```
#[derive(Debug, Clone)]
pub struct SharedOrigin {
    offset: Rc<Cell<Vec2>>,
}

impl SharedOrigin {
    /// Create a new shared origin with the given initial offset
    pub fn new(offset: Vec2) -> Self {
        Self {
            offset: Rc::new(Cell::new(offset)),
        }
    }

    /// Get the current offset
    pub fn get(&self) -> Vec2 {
        self.offset.get()
    }

    /// Set the current offset
    ///
    /// Visible to every clone of this handle on the next read.
    pub fn set(&self, offset: Vec2) {
        self.offset.set(offset);
    }
}

impl Default for SharedOrigin {
    fn default() -> Self {
        Self::new(Vec2::zeros())
    }
}

impl OriginSource for SharedOrigin {
    fn origin(&self) -> Vec2 {
        self.get()
    }
}
