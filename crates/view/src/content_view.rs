// Chunk: docs/chunks/editor_view - Renderer-facing read surface

//! Read surface for the paint collaborator.
//!
//! On each redraw the renderer walks the lines, draws the text rows, then
//! draws the caret if the widget is focused and the selection highlight if
//! one is active. This trait is everything it needs; it cannot mutate the
//! document through it.
//!
//! The trait is object-safe, so a renderer can take `&dyn ContentView`
//! without knowing the concrete widget type.

use cell_edit_buffer::Position;

/// The document as the renderer sees it.
pub trait ContentView {
    /// Returns the number of lines to draw.
    fn line_count(&self) -> usize;

    /// Returns the content of `line`, or "" if `line` is out of bounds.
    fn line_content(&self, line: usize) -> &str;

    /// Returns the char count of `line`, or 0 if `line` is out of bounds.
    fn line_len(&self, line: usize) -> usize;

    /// Returns the cursor position for caret placement.
    fn cursor(&self) -> Position;

    /// Returns the selection as a document-ordered (start, end) pair, or
    /// `None` when nothing is selected.
    fn selection_range(&self) -> Option<(Position, Position)>;

    /// Returns true if the widget has keyboard focus (the caret draws only
    /// when focused).
    fn has_focus(&self) -> bool;
}
