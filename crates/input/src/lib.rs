// Chunk: docs/chunks/input_events - Shared input event types
//
// This crate provides the input event types (Key, PointerEvent, Point)
// delivered to the widget core by a host adapter. It carries no dependency
// on any UI toolkit so the core stays framework-agnostic.

//! Input event types for keyboard and pointer handling.
//!
//! A host adapter translates its toolkit's native events (Qt, winit, test
//! harness) into these types and feeds them to the widget core's input
//! handler. The types are deliberately small: the navigation contract covers
//! exactly the four arrow keys, and pointer gestures are press and move.

/// A point in view coordinates: pixels from the top-left, y increasing
/// downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Logical keys the widget core navigates with.
///
/// The core's keyboard contract is cursor navigation only; a host that
/// receives other keys simply does not forward them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
}

/// Pointer buttons held during an event.
///
/// Press events carry the button that went down; move events carry the set
/// of buttons currently held (the drag mask).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerButtons {
    /// Primary (left) button
    pub primary: bool,
    /// Secondary (right) button
    pub secondary: bool,
}

impl PointerButtons {
    /// The primary button alone.
    pub fn primary() -> Self {
        Self {
            primary: true,
            secondary: false,
        }
    }

    /// Returns true if no button is held.
    pub fn is_empty(&self) -> bool {
        !self.primary && !self.secondary
    }
}

/// Kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// A button went down
    Press,
    /// The pointer moved (a drag when a button is held)
    Move,
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer event
    pub kind: PointerEventKind,
    /// Position in view coordinates (pixels from top-left)
    pub position: Point,
    /// Buttons involved: the pressed button for `Press`, the held mask
    /// for `Move`
    pub buttons: PointerButtons,
}

impl PointerEvent {
    /// Creates a primary-button press at the given point.
    pub fn press(position: Point) -> Self {
        Self {
            kind: PointerEventKind::Press,
            position,
            buttons: PointerButtons::primary(),
        }
    }

    /// Creates a move event with the given held-button mask.
    pub fn moved(position: Point, buttons: PointerButtons) -> Self {
        Self {
            kind: PointerEventKind::Move,
            position,
            buttons,
        }
    }

    /// Creates a primary-button drag to the given point.
    pub fn drag(position: Point) -> Self {
        Self::moved(position, PointerButtons::primary())
    }
}
