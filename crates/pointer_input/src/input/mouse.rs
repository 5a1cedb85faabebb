//! Mouse event source
//!
//! Tracks raw cursor and button state and turns window-level input into the
//! synchronous event stream that pointer regions consume. Regions never see
//! raw state, only [`MouseEvent`]s, delivered in arrival order.

use log::trace;

use crate::foundation::math::Point2;

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// A mouse event in the shared pointer coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEvent {
    /// Cursor moved to a new position
    Moved {
        /// New cursor position
        position: Point2,
    },
    /// A button transitioned from up to down
    ButtonPressed {
        /// Which button was pressed
        button: MouseButton,
        /// Cursor position at press time
        position: Point2,
    },
    /// A button transitioned from down to up
    ButtonReleased {
        /// Which button was released
        button: MouseButton,
        /// Cursor position at release time
        position: Point2,
    },
}

/// Mouse state tracker and event source
///
/// Feed it raw window input (`handle_cursor_moved`, `handle_button`) and
/// push the returned events into each interested region. Button events are
/// edge-detected: a press notification for a button that is already down
/// yields no event, and likewise for releases.
#[derive(Debug, Clone)]
pub struct Mouse {
    position: Point2,
    left_down: bool,
    right_down: bool,
    middle_down: bool,
}

impl Mouse {
    /// Create a new mouse state tracker
    pub fn new() -> Self {
        Self {
            position: Point2::origin(),
            left_down: false,
            right_down: false,
            middle_down: false,
        }
    }

    /// Update the cursor position
    ///
    /// # Arguments
    /// * `x` - Cursor X position (pixels from left)
    /// * `y` - Cursor Y position (pixels from top)
    pub fn handle_cursor_moved(&mut self, x: f32, y: f32) -> MouseEvent {
        self.position = Point2::new(x, y);
        MouseEvent::Moved {
            position: self.position,
        }
    }

    /// Update a button's state
    ///
    /// # Returns
    /// The press or release event, or `None` if the notification did not
    /// change the button's state.
    pub fn handle_button(&mut self, button: MouseButton, pressed: bool) -> Option<MouseEvent> {
        let down = self.button_state_mut(button);
        let was_down = *down;
        *down = pressed;

        if pressed && !was_down {
            trace!("{:?} button pressed at ({}, {})", button, self.position.x, self.position.y);
            Some(MouseEvent::ButtonPressed {
                button,
                position: self.position,
            })
        } else if !pressed && was_down {
            trace!("{:?} button released at ({}, {})", button, self.position.x, self.position.y);
            Some(MouseEvent::ButtonReleased {
                button,
                position: self.position,
            })
        } else {
            None
        }
    }

    /// Get the current cursor position
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Check whether a button is currently held down
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left_down,
            MouseButton::Right => self.right_down,
            MouseButton::Middle => self.middle_down,
        }
    }

    fn button_state_mut(&mut self, button: MouseButton) -> &mut bool {
        match button {
            MouseButton::Left => &mut self.left_down,
            MouseButton::Right => &mut self.right_down,
            MouseButton::Middle => &mut self.middle_down,
        }
    }
}

impl Default for Mouse {
    fn default() -> Self {
        Self::new()
    }
}
