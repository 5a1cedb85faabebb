//! # Pointer Input
//!
//! Pointer-region interaction tracking for component-based 2D games.
//!
//! Translates raw mouse move/down/up events into region-relative
//! enter/move/leave/down/up/click callbacks for a rectangular region.
//!
//! ## Features
//!
//! - **Rectangular Hit Testing**: Closed-edge containment against an
//!   origin-anchored region
//! - **Interaction Lifecycle**: Hover and press tracking with synthetic
//!   click events derived from in-bounds down/up pairs
//! - **Ordered Listeners**: Per-event-kind registries invoked in
//!   registration order
//! - **Injected Collaborators**: The mouse event source and the spatial
//!   origin provider are explicit dependencies, not framework lookups
//!
//! ## Quick Start
//!
//! ```rust
//! use pointer_input::prelude::*;
//!
//! let mut mouse = Mouse::new();
//! let mut region = Pointer::new(PointerConfig::new(100.0, 100.0));
//! region.on_enter(|pos| println!("entered at ({}, {})", pos.x, pos.y));
//! region.on_click(|pos| println!("clicked at ({}, {})", pos.x, pos.y));
//!
//! // In your event loop: feed raw input to the mouse, push the resulting
//! // events into each interested region.
//! region.handle_event(&mouse.handle_cursor_moved(50.0, 50.0));
//! if let Some(event) = mouse.handle_button(MouseButton::Left, true) {
//!     region.handle_event(&event);
//! }
//! if let Some(event) = mouse.handle_button(MouseButton::Left, false) {
//!     region.handle_event(&event);
//! }
//!
//! assert!(region.is_inside_bounds());
//! assert!(!region.is_pressing());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod input;
pub mod spatial;

pub use config::{Config, ConfigError, PointerConfig};
pub use input::{Mouse, MouseButton, MouseEvent, Pointer};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, PointerConfig},
        foundation::math::{Point2, Rect, Vec2},
        input::{Mouse, MouseButton, MouseEvent, Pointer},
        spatial::{OriginSource, SharedOrigin},
    };
}
