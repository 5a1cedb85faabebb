//! Pointer input module
//!
//! Architecture:
//! - mouse: raw state tracking and the MouseEvent stream regions consume
//! - collision: rectangular hit testing
//! - registry: ordered per-event-kind listener lists
//! - pointer: the region interaction tracker tying the above together

pub mod collision;
pub mod mouse;
pub mod pointer;
pub mod registry;

// Re-export commonly used types
pub use mouse::{Mouse, MouseButton, MouseEvent};
pub use pointer::Pointer;
pub use registry::{CallbackRegistry, PointerCallback};
