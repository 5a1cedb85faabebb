//! Pointer region interaction tracking
//!
//! Translates mouse move/down/up events into region-relative
//! enter/move/leave/down/up/click callbacks for a single rectangular
//! region. The region's size is fixed at construction; its placement is
//! read from the injected [`OriginSource`] on every hit test.

use log::{debug, trace};

use crate::config::PointerConfig;
use crate::foundation::math::{Point2, Vec2};
use crate::input::collision;
use crate::input::mouse::{MouseButton, MouseEvent};
use crate::input::registry::CallbackRegistry;
use crate::spatial::OriginSource;

/// Interaction tracker for one rectangular region
///
/// Mouse events are pushed in through [`Pointer::handle_event`] (or the
/// per-stream `handle_*` methods) synchronously and in arrival order; every
/// listener for an event fires before the next event is handled.
///
/// # Usage
/// ```
/// use pointer_input::prelude::*;
///
/// let mut region = Pointer::new(PointerConfig::new(100.0, 100.0));
/// region.on_click(|pos| println!("clicked at ({}, {})", pos.x, pos.y));
///
/// let mut mouse = Mouse::new();
/// region.handle_event(&mouse.handle_cursor_moved(50.0, 50.0));
/// if let Some(event) = mouse.handle_button(MouseButton::Left, true) {
///     region.handle_event(&event);
/// }
/// assert!(region.is_pressing());
/// ```
pub struct Pointer {
    /// Region size (width, height), immutable after construction
    bounds: Vec2,

    /// Placement accessor owned by a collaborating spatial component
    origin: Option<Box<dyn OriginSource>>,

    /// Whether the cursor is currently inside the region
    inside_bounds: bool,

    /// Whether an unreleased press started inside the region
    pressing: bool,

    enter_listeners: CallbackRegistry,
    move_listeners: CallbackRegistry,
    leave_listeners: CallbackRegistry,
    down_listeners: CallbackRegistry,
    up_listeners: CallbackRegistry,
    click_listeners: CallbackRegistry,
}

impl Pointer {
    /// Create a region with the given bounds, anchored at `(0, 0)`
    pub fn new(config: PointerConfig) -> Self {
        debug!(
            "creating pointer region with bounds ({}, {})",
            config.bounds.x, config.bounds.y
        );
        Self {
            bounds: config.bounds,
            origin: None,
            inside_bounds: false,
            pressing: false,
            enter_listeners: CallbackRegistry::new(),
            move_listeners: CallbackRegistry::new(),
            leave_listeners: CallbackRegistry::new(),
            down_listeners: CallbackRegistry::new(),
            up_listeners: CallbackRegistry::new(),
            click_listeners: CallbackRegistry::new(),
        }
    }

    /// Anchor the region at the offset provided by a spatial collaborator
    ///
    /// The source is consulted on every hit test; moving the origin moves
    /// the region immediately.
    pub fn with_origin(mut self, source: impl OriginSource + 'static) -> Self {
        self.origin = Some(Box::new(source));
        self
    }

    /// Handle a cursor move in the shared coordinate space
    ///
    /// Entering the region fires `enter` listeners and then `move`
    /// listeners; moving within it fires `move` listeners only; exiting it
    /// fires `leave` listeners and nothing else.
    pub fn handle_move(&mut self, position: Point2) {
        if self.contains(position) {
            if !self.inside_bounds {
                trace!("cursor entered region at ({}, {})", position.x, position.y);
                self.enter_listeners.emit(position);
            }
            self.inside_bounds = true;

            self.move_listeners.emit(position);
        } else if self.inside_bounds {
            trace!("cursor left region at ({}, {})", position.x, position.y);
            self.leave_listeners.emit(position);
            self.inside_bounds = false;
        }
    }

    /// Handle a button press
    ///
    /// A press inside the region starts a pending click and fires `down`
    /// listeners. A press outside is a strict no-op: no listeners fire and
    /// an already-pending click is left untouched.
    pub fn handle_down(&mut self, position: Point2) {
        if self.contains(position) {
            self.pressing = true;
            trace!("press started in region at ({}, {})", position.x, position.y);
            self.down_listeners.emit(position);
        }
    }

    /// Handle a button release
    ///
    /// A release inside the region fires `up` listeners and then, if a
    /// press started inside the region and is still pending, `click`
    /// listeners. The pending press is cleared on every release, inside or
    /// outside the region.
    pub fn handle_up(&mut self, position: Point2) {
        if self.contains(position) {
            self.up_listeners.emit(position);
            if self.pressing {
                trace!("click completed at ({}, {})", position.x, position.y);
                self.click_listeners.emit(position);
            }
        }
        self.pressing = false;
    }

    /// Route a mouse event to the matching handler
    ///
    /// Only left-button presses and releases drive the down/up streams;
    /// other buttons are ignored, as are their releases. Cursor moves are
    /// button-agnostic.
    pub fn handle_event(&mut self, event: &MouseEvent) {
        match *event {
            MouseEvent::Moved { position } => self.handle_move(position),
            MouseEvent::ButtonPressed {
                button: MouseButton::Left,
                position,
            } => self.handle_down(position),
            MouseEvent::ButtonReleased {
                button: MouseButton::Left,
                position,
            } => self.handle_up(position),
            MouseEvent::ButtonPressed { .. } | MouseEvent::ButtonReleased { .. } => {}
        }
    }

    /// Register a listener for cursor entry into the region
    pub fn on_enter(&mut self, callback: impl FnMut(Point2) + 'static) {
        self.enter_listeners.add(Box::new(callback));
    }

    /// Register a listener for cursor moves inside the region
    pub fn on_move(&mut self, callback: impl FnMut(Point2) + 'static) {
        self.move_listeners.add(Box::new(callback));
    }

    /// Register a listener for cursor exit from the region
    pub fn on_leave(&mut self, callback: impl FnMut(Point2) + 'static) {
        self.leave_listeners.add(Box::new(callback));
    }

    /// Register a listener for presses starting inside the region
    pub fn on_down(&mut self, callback: impl FnMut(Point2) + 'static) {
        self.down_listeners.add(Box::new(callback));
    }

    /// Register a listener for releases inside the region
    pub fn on_up(&mut self, callback: impl FnMut(Point2) + 'static) {
        self.up_listeners.add(Box::new(callback));
    }

    /// Register a listener for completed clicks
    ///
    /// A click is a press and release that both land inside the region.
    pub fn on_click(&mut self, callback: impl FnMut(Point2) + 'static) {
        self.click_listeners.add(Box::new(callback));
    }

    /// Whether the cursor is currently inside the region
    pub fn is_inside_bounds(&self) -> bool {
        self.inside_bounds
    }

    /// Whether a press that started inside the region is still unreleased
    pub fn is_pressing(&self) -> bool {
        self.pressing
    }

    /// The region's size (width, height)
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    fn contains(&self, position: Point2) -> bool {
        collision::point_in_region(position, self.bounds, self.current_origin())
    }

    // Reads the source on every call; the offset is owned elsewhere and
    // must not be cached across events.
    fn current_origin(&self) -> Vec2 {
        self.origin
            .as_ref()
            .map_or_else(Vec2::zeros, |source| source.origin())
    }
}
