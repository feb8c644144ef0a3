// Chunk: docs/chunks/editor_view - Widget core composing model, metrics, and input

//! cell-edit-view: the framework-agnostic widget core for cell-edit.
//!
//! This crate composes the line buffer model from `cell-edit-buffer` with
//! everything a host toolkit needs to embed the widget: character-cell
//! metrics and content sizing, pixel↔cursor hit testing, pointer selection,
//! keyboard navigation, focus state, viewport scrolling, and change
//! notifications. It draws nothing and owns no window; the host supplies a
//! renderer and an input adapter.
//!
//! # Overview
//!
//! The main type is [`EditorView`]. The host wires it up through three
//! seams:
//!
//! - [`InputHandler`]: the adapter translates toolkit-native events into the
//!   shared input types and calls the matching handler method
//! - [`ContentView`]: the renderer reads lines, cursor, selection, and focus
//!   on each redraw
//! - [`EditorView::take_events`] / [`EditorView::take_dirty`]: drained after
//!   each input batch for notifications and the redraw region
//!
//! # Example
//!
//! ```
//! use cell_edit_view::input::{Key, Point, PointerEvent};
//! use cell_edit_view::{CellMetrics, EditorView, InputHandler, Position};
//!
//! let mut view = EditorView::with_text(CellMetrics::new(8.0, 16.0), "hello\nworld");
//!
//! // Click on the second line, then arrow up.
//! view.handle_pointer_press(PointerEvent::press(Point::new(30.0, 30.0)));
//! view.handle_key(Key::Up);
//! assert_eq!(view.cursor_position(), Position::new(0, 2));
//! ```

mod content_view;
mod editor_view;
mod events;
mod handler;
mod metrics;
mod palette;
mod viewport;

pub mod input;

pub use content_view::ContentView;
pub use editor_view::EditorView;
pub use events::EditorEvent;
pub use handler::{Handled, InputHandler};
pub use metrics::{CellMetrics, ContentSize, DEFAULT_MARGIN, MIN_CONTENT_WIDTH};
pub use palette::{Palette, Rgba};
pub use viewport::Viewport;

// Model types, re-exported so most hosts depend on this crate alone.
pub use cell_edit_buffer::{DirtyLines, LineBuffer, Position, Selection};
