// Chunk: docs/chunks/line_buffer - Line buffer with cursor and selection tracking
// Chunk: docs/chunks/range_editing - Coordinate-addressed range read/insert/delete

//! cell-edit-buffer: the line buffer & cursor model for the cell-edit widget.
//!
//! This crate owns the document state: an ordered list of text lines, the
//! cursor position, and the selection. It has no knowledge of pixels, fonts,
//! focus, or any UI toolkit; coordinate mapping and event plumbing live in
//! `cell-edit-view`.
//!
//! # Overview
//!
//! The main type is [`LineBuffer`], which provides:
//! - Wholesale text replacement with change detection ([`LineBuffer::set_text`])
//! - Range editing addressed by (line, column) coordinates
//! - Pure range reads ([`LineBuffer::text_in_range`])
//! - Cursor movement with line-wrap semantics
//! - An anchor/active selection for pointer-driven highlighting
//!
//! # Example
//!
//! ```
//! use cell_edit_buffer::{DirtyLines, LineBuffer, Position};
//!
//! let mut buffer = LineBuffer::from_text("abc\nde");
//!
//! // Delete across the line boundary: "a" merges with "e".
//! let dirty = buffer.delete_text(0, 1, 1, 1);
//! assert_eq!(dirty, DirtyLines::FromLine(0));
//! assert_eq!(buffer.line_count(), 1);
//! assert_eq!(buffer.line_content(0), "ae");
//!
//! // Cursor wraps across lines.
//! buffer.set_text("hi\nthere");
//! buffer.set_cursor(Position::new(0, 2));
//! buffer.move_right();
//! assert_eq!(buffer.cursor_position(), Position::new(1, 0));
//! ```
//!
//! # Bounds policy
//!
//! No operation panics or returns an error for out-of-range coordinates.
//! Mutations no-op (returning [`DirtyLines::None`]) and queries return
//! empty/zero values. See the module docs on [`LineBuffer`] for why.

mod line_buffer;
mod types;

pub use line_buffer::LineBuffer;
pub use types::{DirtyLines, Position, Selection};
