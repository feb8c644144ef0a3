// Chunk: docs/chunks/editor_view - Input handler capability trait

//! Input handler trait definition.
//!
//! The widget core interprets its own input. A thin host adapter translates
//! toolkit-native events into the shared input types and calls the matching
//! method here; the core decides what the gesture means. This keeps the
//! model free of any toolkit dependency: the adapter is the only code that
//! knows what an `NSEvent` or `QMouseEvent` looks like.

use cell_edit_input::{Key, PointerEvent};

/// Result of handling a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The event was handled by this handler
    Yes,
    /// The event was not handled (should propagate or be ignored)
    No,
}

/// A component that interprets pointer, keyboard, and focus input.
///
/// Implemented by the widget core; invoked by the host adapter. The methods
/// mirror the discrete events a UI toolkit delivers:
///
/// - pointer press and move (with the button state on the event)
/// - key press (logical key, navigation contract only)
/// - focus gained / lost
pub trait InputHandler {
    /// Handle a pointer button press.
    ///
    /// The primary button places the cursor and starts a selection gesture;
    /// other buttons are ignored.
    fn handle_pointer_press(&mut self, event: PointerEvent);

    /// Handle pointer movement.
    ///
    /// Movement with the primary button held extends the selection gesture;
    /// hover (no buttons) is ignored.
    fn handle_pointer_move(&mut self, event: PointerEvent);

    /// Handle a key press, returning whether the key was consumed.
    fn handle_key(&mut self, key: Key) -> Handled;

    /// The widget gained keyboard focus.
    fn focus_gained(&mut self);

    /// The widget lost keyboard focus.
    fn focus_lost(&mut self);
}
