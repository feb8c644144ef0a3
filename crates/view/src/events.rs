// Chunk: docs/chunks/view_events - Change notifications for the host

//! Change notifications emitted by the widget core.
//!
//! The core is synchronous: operations mutate state and queue an
//! [`EditorEvent`] describing what changed. The host drains the queue after
//! each batch of input (see `EditorView::take_events`) and forwards the
//! notifications to whoever observes the widget: a property binding, a
//! redraw scheduler, a test harness.
//!
//! Events carry no payload beyond what the observer needs to react; the
//! current state is always readable from the view itself.

use cell_edit_buffer::Position;

/// A change notification from the widget core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// The document content changed (replacement, insert, or delete).
    ContentChanged,

    /// The cursor position changed, or a navigation/pointer gesture
    /// re-asserted it. Carries the position after the operation.
    ///
    /// This fires for every handled navigation key and pointer gesture,
    /// including boundary no-ops, mirroring how the host widget re-anchors
    /// its caret on every input.
    CursorMoved(Position),

    /// The selection's anchor or active end changed.
    SelectionChanged,

    /// The `dummy_text` host property changed to a genuinely new value.
    DummyTextChanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moved_carries_position() {
        let event = EditorEvent::CursorMoved(Position::new(2, 7));
        assert_eq!(event, EditorEvent::CursorMoved(Position::new(2, 7)));
        assert_ne!(event, EditorEvent::CursorMoved(Position::new(2, 8)));
    }
}
