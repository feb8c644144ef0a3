// Chunk: docs/chunks/editor_view - Widget core composing model, metrics, and input
// Chunk: docs/chunks/cursor_hit_testing - Pixel-to-cursor coordinate mapping
// Chunk: docs/chunks/dummy_text_property - Host text property round-trip

//! The widget core: a line buffer composed with cell metrics, hit testing,
//! focus state, and change notifications.
//!
//! `EditorView` is what a host toolkit embeds. It owns the document model
//! and everything derived from it (content size, scroll state, the event
//! queue) but performs no drawing and registers no event handlers itself.
//! The host wires three seams:
//!
//! - an adapter translating native input into [`InputHandler`] calls
//! - a renderer reading the [`ContentView`] surface on each redraw
//! - a property binding driving [`EditorView::set_dummy_text`] and observing
//!   [`EditorEvent::DummyTextChanged`]
//!
//! After each batch of operations the host drains [`EditorView::take_events`]
//! for notifications and [`EditorView::take_dirty`] for the redraw region.

use std::collections::VecDeque;

use cell_edit_buffer::{DirtyLines, LineBuffer, Position, Selection};
use cell_edit_input::{Key, Point, PointerEvent, PointerEventKind};
use tracing::{debug, trace};

use crate::content_view::ContentView;
use crate::events::EditorEvent;
use crate::handler::{Handled, InputHandler};
use crate::metrics::{CellMetrics, ContentSize};
use crate::palette::Palette;
use crate::viewport::Viewport;

/// The lines a selection's highlight covers.
fn selection_lines(selection: &Selection) -> DirtyLines {
    if selection.is_empty() {
        return DirtyLines::None;
    }
    let (start, end) = selection.normalized();
    DirtyLines::Range {
        from: start.line,
        to: end.line + 1,
    }
}

/// A text-display widget core with cursor tracking and pointer selection.
///
/// All operations are synchronous and run on the host's event thread; the
/// `&mut self` receivers make re-entrant mutation unrepresentable.
#[derive(Debug)]
pub struct EditorView {
    buffer: LineBuffer,
    metrics: CellMetrics,
    viewport: Viewport,
    palette: Palette,
    content_size: ContentSize,
    focused: bool,
    /// Redraw region accumulated since the last `take_dirty`.
    dirty: DirtyLines,
    /// Notifications queued since the last `take_events`.
    events: VecDeque<EditorEvent>,
}

impl EditorView {
    /// Creates a view over an empty document.
    pub fn new(metrics: CellMetrics) -> Self {
        Self::with_text(metrics, "")
    }

    /// Creates a view over an initial text blob, split on `\n`.
    pub fn with_text(metrics: CellMetrics, text: &str) -> Self {
        let buffer = LineBuffer::from_text(text);
        let content_size = metrics.measure(&buffer);
        let viewport = Viewport::new(metrics.line_height);
        debug!(
            char_width = metrics.char_width,
            line_height = metrics.line_height,
            lines = buffer.line_count(),
            "editor view created"
        );
        Self {
            buffer,
            metrics,
            viewport,
            palette: Palette::default(),
            content_size,
            focused: false,
            dirty: DirtyLines::None,
            events: VecDeque::new(),
        }
    }

    // ==================== Read surface ====================

    /// Returns the number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    /// Returns the char count of `line`, or 0 if out of range.
    pub fn line_len(&self, line: usize) -> usize {
        self.buffer.line_len(line)
    }

    /// Returns the content of `line`, or "" if out of range.
    pub fn line_content(&self, line: usize) -> &str {
        self.buffer.line_content(line)
    }

    /// Serializes the whole document.
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Returns the cursor position.
    pub fn cursor_position(&self) -> Position {
        self.buffer.cursor_position()
    }

    /// Returns true if the selection covers at least one character.
    pub fn has_selection(&self) -> bool {
        self.buffer.has_selection()
    }

    /// Returns the selection in document order, or `None` when empty.
    pub fn selection_range(&self) -> Option<(Position, Position)> {
        self.buffer.selection_range()
    }

    /// Returns the cell metrics the view was created with.
    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    /// Returns the document's bounding size under the current metrics.
    pub fn content_size(&self) -> ContentSize {
        self.content_size
    }

    /// Returns the widget colors for the renderer.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replaces the widget colors; the whole view repaints.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.dirty.merge(DirtyLines::FromLine(0));
    }

    /// Returns the scroll state.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    // ==================== Events and redraw ====================

    /// Drains the queued change notifications.
    pub fn take_events(&mut self) -> Vec<EditorEvent> {
        self.events.drain(..).collect()
    }

    /// Drains the accumulated redraw region.
    pub fn take_dirty(&mut self) -> DirtyLines {
        std::mem::take(&mut self.dirty)
    }

    // ==================== Text property ====================
    // Chunk: docs/chunks/dummy_text_property - Host text property round-trip

    /// Returns the host-facing text property: the full serialization.
    pub fn dummy_text(&self) -> String {
        self.buffer.text()
    }

    /// Writes the host-facing text property.
    ///
    /// Fires `DummyTextChanged` (after the usual `ContentChanged`) only when
    /// the value actually differs from the current serialization.
    pub fn set_dummy_text(&mut self, text: &str) {
        if self.set_text(text) {
            self.events.push_back(EditorEvent::DummyTextChanged);
        }
    }

    // ==================== Editing ====================

    /// Replaces the whole document. No-op (and no notification) when `text`
    /// equals the current serialization; returns whether content changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        if !self.buffer.set_text(text) {
            return false;
        }
        debug!(lines = self.buffer.line_count(), "document text replaced");
        self.after_mutation(DirtyLines::FromLine(0), false);
        true
    }

    /// Inserts `text` into `line` at char index `col`.
    /// See [`LineBuffer::insert_text`] for the splice semantics and bounds
    /// policy.
    pub fn insert_text(&mut self, line: usize, col: usize, text: &str) -> DirtyLines {
        let dirty = self.buffer.insert_text(line, col, text);
        self.after_mutation(dirty, false);
        dirty
    }

    /// Removes a coordinate range.
    /// See [`LineBuffer::delete_text`] for the merge semantics and bounds
    /// policy.
    pub fn delete_text(
        &mut self,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> DirtyLines {
        let dirty = self
            .buffer
            .delete_text(start_line, start_col, end_line, end_col);
        self.after_mutation(dirty, false);
        dirty
    }

    /// Returns the content of a coordinate range. Pure query.
    pub fn text_in_range(
        &self,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> String {
        self.buffer
            .text_in_range(start_line, start_col, end_line, end_col)
    }

    /// Inserts `text` at the cursor and advances it.
    pub fn insert_at_cursor(&mut self, text: &str) -> DirtyLines {
        let dirty = self.buffer.insert_at_cursor(text);
        self.after_mutation(dirty, true);
        dirty
    }

    /// Deletes the character before the cursor (Backspace).
    pub fn delete_backward(&mut self) -> DirtyLines {
        let dirty = self.buffer.delete_backward();
        self.after_mutation(dirty, true);
        dirty
    }

    /// Deletes the character after the cursor (forward delete).
    pub fn delete_forward(&mut self) -> DirtyLines {
        let dirty = self.buffer.delete_forward();
        self.after_mutation(dirty, true);
        dirty
    }

    // ==================== Cursor movement ====================

    /// Moves the cursor left, wrapping to the previous line end.
    pub fn move_left(&mut self) {
        self.navigate(LineBuffer::move_left);
    }

    /// Moves the cursor right, wrapping to the next line start.
    pub fn move_right(&mut self) {
        self.navigate(LineBuffer::move_right);
    }

    /// Moves the cursor up one line, clamping the column.
    pub fn move_up(&mut self) {
        self.navigate(LineBuffer::move_up);
    }

    /// Moves the cursor down one line, clamping the column.
    pub fn move_down(&mut self) {
        self.navigate(LineBuffer::move_down);
    }

    /// Moves the cursor to column 0 of the current line.
    pub fn move_to_line_start(&mut self) {
        self.navigate(LineBuffer::move_to_line_start);
    }

    /// Moves the cursor past the last character of the current line.
    pub fn move_to_line_end(&mut self) {
        self.navigate(LineBuffer::move_to_line_end);
    }

    /// Sets the cursor to an arbitrary position, clamped.
    pub fn set_cursor(&mut self, pos: Position) {
        self.navigate(|buffer| buffer.set_cursor(pos));
    }

    /// Moves the cursor up by one window of lines and scrolls it into view.
    pub fn page_up(&mut self) {
        let page = self.viewport.page_lines();
        self.navigate(|buffer| {
            let pos = buffer.cursor_position();
            buffer.set_cursor(Position::new(pos.line.saturating_sub(page), pos.col));
        });
        self.ensure_cursor_visible();
    }

    /// Moves the cursor down by one window of lines and scrolls it into view.
    pub fn page_down(&mut self) {
        let page = self.viewport.page_lines();
        self.navigate(|buffer| {
            let pos = buffer.cursor_position();
            buffer.set_cursor(Position::new(pos.line + page, pos.col));
        });
        self.ensure_cursor_visible();
    }

    // ==================== Scrolling ====================

    /// Recomputes the visible line count from the window height.
    pub fn update_window_height(&mut self, height_px: f64) {
        self.viewport.update_size(height_px);
    }

    /// Scrolls by a pixel delta (positive = down), clamped to the content.
    pub fn scroll_by(&mut self, delta_px: f64) {
        let count = self.buffer.line_count();
        self.viewport.scroll_by(delta_px, count);
    }

    /// Scrolls so `line` sits at the top of the window.
    pub fn scroll_to_line(&mut self, line: usize) {
        let count = self.buffer.line_count();
        self.viewport.scroll_to_line(line, count);
    }

    /// Scrolls the minimum distance that brings the cursor line into view.
    pub fn ensure_cursor_visible(&mut self) {
        let line = self.buffer.cursor_position().line;
        let count = self.buffer.line_count();
        self.viewport.ensure_visible(line, count);
    }

    // ==================== Hit testing ====================
    // Chunk: docs/chunks/cursor_hit_testing - Pixel-to-cursor coordinate mapping

    /// Converts a pixel point into a cursor position.
    ///
    /// Total for any input: coordinates left of or above the text block
    /// clamp to the first cell, coordinates past the last line/column clamp
    /// to the last. The result always satisfies the cursor invariant, even
    /// for a point computed against a stale document.
    pub fn position_at_point(&self, point: Point) -> Position {
        let row = ((point.y - self.metrics.margin) / self.metrics.line_height).floor();
        let line = if row < 0.0 {
            0
        } else {
            (row as usize).min(self.buffer.line_count() - 1)
        };

        let cell = ((point.x - self.metrics.margin) / self.metrics.char_width).floor();
        let col = if cell < 0.0 {
            0
        } else {
            (cell as usize).min(self.buffer.line_len(line))
        };

        Position::new(line, col)
    }

    /// Converts a cursor position into the pixel origin of its cell.
    ///
    /// The inverse of [`EditorView::position_at_point`] for caret placement.
    /// Does not clamp; callers pass positions satisfying the invariant.
    pub fn point_at_position(&self, pos: Position) -> Point {
        Point::new(
            self.metrics.margin + pos.col as f64 * self.metrics.char_width,
            self.metrics.margin + pos.line as f64 * self.metrics.line_height,
        )
    }

    // ==================== Internal ====================

    /// Bookkeeping after a buffer mutation: recompute the content size,
    /// accumulate the redraw region, and queue notifications. No-op
    /// mutations stay silent.
    fn after_mutation(&mut self, dirty: DirtyLines, moves_cursor: bool) {
        if dirty.is_none() {
            return;
        }
        self.refresh_content_size();
        self.dirty.merge(dirty);
        self.events.push_back(EditorEvent::ContentChanged);
        if moves_cursor {
            self.events
                .push_back(EditorEvent::CursorMoved(self.buffer.cursor_position()));
        }
    }

    /// Runs a cursor movement and queues the notification.
    ///
    /// `CursorMoved` fires even when the movement was a boundary no-op; the
    /// caret re-anchors on every navigation input. The redraw region only
    /// grows when the cursor actually moved.
    fn navigate(&mut self, movement: impl FnOnce(&mut LineBuffer)) {
        let before = self.buffer.cursor_position();
        movement(&mut self.buffer);
        let after = self.buffer.cursor_position();
        if before != after {
            self.dirty.merge(DirtyLines::line(before.line));
            self.dirty.merge(DirtyLines::line(after.line));
        }
        self.events.push_back(EditorEvent::CursorMoved(after));
    }

    fn refresh_content_size(&mut self) {
        self.content_size = self.metrics.measure(&self.buffer);
        trace!(
            width = self.content_size.width,
            height = self.content_size.height,
            "content size recomputed"
        );
    }
}

impl Default for EditorView {
    fn default() -> Self {
        Self::new(CellMetrics::default())
    }
}

// =============================================================================
// Input handling
// =============================================================================
// Chunk: docs/chunks/pointer_selection - Pointer press/drag selection

impl InputHandler for EditorView {
    /// Primary-button press: place the cursor and collapse the selection
    /// gesture onto it.
    fn handle_pointer_press(&mut self, event: PointerEvent) {
        if event.kind != PointerEventKind::Press || !event.buttons.primary {
            return;
        }
        let pos = self.position_at_point(event.position);
        let before_cursor = self.buffer.cursor_position();
        let before_selection = self.buffer.selection();

        self.buffer.set_cursor(pos);
        self.buffer.begin_selection_at(pos);

        self.dirty.merge(DirtyLines::line(before_cursor.line));
        self.dirty.merge(DirtyLines::line(pos.line));
        self.events.push_back(EditorEvent::CursorMoved(pos));

        if self.buffer.selection() != before_selection {
            self.dirty.merge(selection_lines(&before_selection));
            self.events.push_back(EditorEvent::SelectionChanged);
        }
    }

    /// Primary-button drag: extend the selection's active end and carry the
    /// cursor with it.
    fn handle_pointer_move(&mut self, event: PointerEvent) {
        if event.kind != PointerEventKind::Move || !event.buttons.primary {
            return;
        }
        let pos = self.position_at_point(event.position);
        let before_cursor = self.buffer.cursor_position();
        let before_selection = self.buffer.selection();

        self.buffer.extend_selection_to(pos);
        self.buffer.set_cursor(pos);

        self.dirty.merge(DirtyLines::line(before_cursor.line));
        self.dirty.merge(DirtyLines::line(pos.line));
        self.events.push_back(EditorEvent::CursorMoved(pos));

        let after_selection = self.buffer.selection();
        if after_selection != before_selection {
            self.dirty.merge(selection_lines(&before_selection));
            self.dirty.merge(selection_lines(&after_selection));
            self.events.push_back(EditorEvent::SelectionChanged);
        }
    }

    fn handle_key(&mut self, key: Key) -> Handled {
        match key {
            Key::Left => self.move_left(),
            Key::Right => self.move_right(),
            Key::Up => self.move_up(),
            Key::Down => self.move_down(),
        }
        Handled::Yes
    }

    fn focus_gained(&mut self) {
        self.focused = true;
        // Repaint the caret line.
        self.dirty
            .merge(DirtyLines::line(self.buffer.cursor_position().line));
    }

    fn focus_lost(&mut self) {
        self.focused = false;
        self.dirty
            .merge(DirtyLines::line(self.buffer.cursor_position().line));
    }
}

// =============================================================================
// Renderer surface
// =============================================================================

impl ContentView for EditorView {
    fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    fn line_content(&self, line: usize) -> &str {
        self.buffer.line_content(line)
    }

    fn line_len(&self, line: usize) -> usize {
        self.buffer.line_len(line)
    }

    fn cursor(&self) -> Position {
        self.buffer.cursor_position()
    }

    fn selection_range(&self) -> Option<(Position, Position)> {
        self.buffer.selection_range()
    }

    fn has_focus(&self) -> bool {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 8x16 cells with the default 10px margin.
    fn test_view(text: &str) -> EditorView {
        EditorView::with_text(CellMetrics::new(8.0, 16.0), text)
    }

    /// Pixel point at the center of the cell for (line, col).
    fn cell_center(view: &EditorView, line: usize, col: usize) -> Point {
        let origin = view.point_at_position(Position::new(line, col));
        let m = view.metrics();
        Point::new(origin.x + m.char_width / 2.0, origin.y + m.line_height / 2.0)
    }

    // ==================== Hit testing ====================

    #[test]
    fn test_hit_test_cell_centers() {
        let view = test_view("hello\nworld");
        assert_eq!(
            view.position_at_point(cell_center(&view, 0, 0)),
            Position::new(0, 0)
        );
        assert_eq!(
            view.position_at_point(cell_center(&view, 1, 3)),
            Position::new(1, 3)
        );
    }

    #[test]
    fn test_hit_test_negative_coordinates_clamp_to_origin() {
        let view = test_view("hello");
        assert_eq!(
            view.position_at_point(Point::new(-100.0, -100.0)),
            Position::new(0, 0)
        );
    }

    #[test]
    fn test_hit_test_below_last_line_clamps() {
        let view = test_view("hello\nworld");
        let pos = view.position_at_point(Point::new(10.0, 10_000.0));
        assert_eq!(pos.line, 1);
    }

    #[test]
    fn test_hit_test_past_line_end_clamps_to_line_len() {
        let view = test_view("hi\nlonger line");
        let pos = view.position_at_point(Point::new(10_000.0, 10.0));
        assert_eq!(pos, Position::new(0, 2));
    }

    #[test]
    fn test_hit_test_inside_margin_maps_to_first_cell() {
        let view = test_view("hello");
        assert_eq!(
            view.position_at_point(Point::new(5.0, 5.0)),
            Position::new(0, 0)
        );
    }

    #[test]
    fn test_hit_test_always_satisfies_invariant() {
        let view = test_view("abc\nde\n");
        let probes = [
            Point::new(-50.0, -50.0),
            Point::new(0.0, 0.0),
            Point::new(1e6, 1e6),
            Point::new(-1.0, 1e6),
            Point::new(1e6, -1.0),
            Point::new(13.7, 42.2),
        ];
        for point in probes {
            let pos = view.position_at_point(point);
            assert!(pos.line < view.line_count(), "line invariant for {point:?}");
            assert!(
                pos.col <= view.line_len(pos.line),
                "col invariant for {point:?}"
            );
        }
    }

    #[test]
    fn test_round_trip_within_one_cell() {
        let view = test_view("hello\nworld");
        for (line, col) in [(0, 0), (0, 3), (1, 5)] {
            let point = cell_center(&view, line, col);
            let mapped = view.point_at_position(view.position_at_point(point));
            assert!((mapped.x - point.x).abs() <= view.metrics().char_width);
            assert!((mapped.y - point.y).abs() <= view.metrics().line_height);
        }
    }

    #[test]
    fn test_point_at_position_math() {
        let view = test_view("hello");
        let point = view.point_at_position(Position::new(2, 3));
        assert_eq!(point, Point::new(10.0 + 3.0 * 8.0, 10.0 + 2.0 * 16.0));
    }

    // ==================== Content size ====================

    #[test]
    fn test_content_size_tracks_mutations() {
        let mut view = test_view("x");
        let before = view.content_size();
        view.insert_text(0, 1, &"y".repeat(200));
        let after = view.content_size();
        assert!(after.width > before.width);
        assert_eq!(after.width, 2.0 * 10.0 + 201.0 * 8.0);
    }

    #[test]
    fn test_content_size_height_follows_line_count() {
        let mut view = test_view("a\nb\nc");
        assert_eq!(view.content_size().height, 20.0 + 3.0 * 16.0);
        view.delete_text(0, 1, 2, 0);
        assert_eq!(view.content_size().height, 20.0 + 1.0 * 16.0);
    }

    // ==================== set_text / dummy_text ====================

    #[test]
    fn test_set_text_queues_content_changed() {
        let mut view = test_view("old");
        view.set_text("new");
        assert_eq!(view.take_events(), vec![EditorEvent::ContentChanged]);
    }

    #[test]
    fn test_set_text_unchanged_queues_nothing() {
        let mut view = test_view("");
        view.set_text("a\nb");
        view.take_events();
        view.set_text("a\nb");
        assert!(view.take_events().is_empty());
    }

    #[test]
    fn test_dummy_text_round_trips() {
        let mut view = test_view("");
        view.set_dummy_text("line one\nline two");
        assert_eq!(view.dummy_text(), "line one\nline two");
    }

    #[test]
    fn test_set_dummy_text_fires_once_per_change() {
        let mut view = test_view("");
        view.set_dummy_text("a\nb");
        assert_eq!(
            view.take_events(),
            vec![EditorEvent::ContentChanged, EditorEvent::DummyTextChanged]
        );
        view.set_dummy_text("a\nb");
        assert!(view.take_events().is_empty());
    }

    #[test]
    fn test_dummy_text_reflects_edits() {
        let mut view = test_view("ab");
        view.insert_text(0, 1, "X");
        assert_eq!(view.dummy_text(), "aXb");
    }

    // ==================== Editing passthrough ====================

    #[test]
    fn test_insert_queues_content_changed_and_dirt() {
        let mut view = test_view("hello");
        let dirty = view.insert_text(0, 5, "!");
        assert_eq!(dirty, DirtyLines::line(0));
        assert_eq!(view.take_events(), vec![EditorEvent::ContentChanged]);
        assert_eq!(view.take_dirty(), DirtyLines::line(0));
    }

    #[test]
    fn test_invalid_insert_is_silent() {
        let mut view = test_view("hello");
        view.insert_text(9, 0, "x");
        assert!(view.take_events().is_empty());
        assert_eq!(view.take_dirty(), DirtyLines::None);
    }

    #[test]
    fn test_delete_across_lines_dirties_tail() {
        let mut view = test_view("abc\nde");
        let dirty = view.delete_text(0, 1, 1, 1);
        assert_eq!(dirty, DirtyLines::FromLine(0));
        assert_eq!(view.line_count(), 1);
        assert_eq!(view.line_content(0), "ae");
    }

    #[test]
    fn test_insert_at_cursor_queues_cursor_event() {
        let mut view = test_view("ab");
        view.set_cursor(Position::new(0, 1));
        view.take_events();
        view.insert_at_cursor("X");
        assert_eq!(
            view.take_events(),
            vec![
                EditorEvent::ContentChanged,
                EditorEvent::CursorMoved(Position::new(0, 2)),
            ]
        );
    }

    #[test]
    fn test_delete_backward_via_view() {
        let mut view = test_view("hello\nworld");
        view.set_cursor(Position::new(1, 0));
        view.take_events();
        let dirty = view.delete_backward();
        assert_eq!(dirty, DirtyLines::FromLine(0));
        assert_eq!(view.text(), "helloworld");
        assert_eq!(
            view.take_events(),
            vec![
                EditorEvent::ContentChanged,
                EditorEvent::CursorMoved(Position::new(0, 5)),
            ]
        );
    }

    // ==================== Pointer input ====================

    #[test]
    fn test_press_places_cursor() {
        let mut view = test_view("hello\nworld");
        let point = cell_center(&view, 1, 2);
        view.handle_pointer_press(PointerEvent::press(point));
        assert_eq!(view.cursor_position(), Position::new(1, 2));
        assert!(!view.has_selection());
        assert!(view
            .take_events()
            .contains(&EditorEvent::CursorMoved(Position::new(1, 2))));
    }

    #[test]
    fn test_press_then_drag_selects() {
        let mut view = test_view("hello\nworld");
        view.handle_pointer_press(PointerEvent::press(cell_center(&view, 0, 1)));
        view.handle_pointer_move(PointerEvent::drag(cell_center(&view, 1, 3)));
        assert!(view.has_selection());
        assert_eq!(
            view.selection_range(),
            Some((Position::new(0, 1), Position::new(1, 3)))
        );
        assert_eq!(view.cursor_position(), Position::new(1, 3));
    }

    #[test]
    fn test_drag_back_to_press_point_empties_selection() {
        let mut view = test_view("hello");
        let start = cell_center(&view, 0, 2);
        view.handle_pointer_press(PointerEvent::press(start));
        view.handle_pointer_move(PointerEvent::drag(cell_center(&view, 0, 4)));
        assert!(view.has_selection());
        view.handle_pointer_move(PointerEvent::drag(start));
        assert!(!view.has_selection());
    }

    #[test]
    fn test_drag_emits_selection_changed() {
        let mut view = test_view("hello");
        view.handle_pointer_press(PointerEvent::press(cell_center(&view, 0, 0)));
        view.take_events();
        view.handle_pointer_move(PointerEvent::drag(cell_center(&view, 0, 3)));
        let events = view.take_events();
        assert!(events.contains(&EditorEvent::SelectionChanged));
    }

    #[test]
    fn test_hover_without_buttons_is_ignored() {
        let mut view = test_view("hello");
        view.handle_pointer_move(PointerEvent::moved(
            cell_center(&view, 0, 3),
            Default::default(),
        ));
        assert_eq!(view.cursor_position(), Position::new(0, 0));
        assert!(view.take_events().is_empty());
    }

    #[test]
    fn test_secondary_button_press_is_ignored() {
        let mut view = test_view("hello");
        let mut event = PointerEvent::press(cell_center(&view, 0, 3));
        event.buttons.primary = false;
        event.buttons.secondary = true;
        view.handle_pointer_press(event);
        assert_eq!(view.cursor_position(), Position::new(0, 0));
        assert!(view.take_events().is_empty());
    }

    #[test]
    fn test_press_outside_content_clamps() {
        let mut view = test_view("hello\nworld");
        view.handle_pointer_press(PointerEvent::press(Point::new(-30.0, 9999.0)));
        assert_eq!(view.cursor_position(), Position::new(1, 0));
    }

    // ==================== Keyboard input ====================

    #[test]
    fn test_arrow_keys_navigate() {
        let mut view = test_view("hello\nworld");
        assert_eq!(view.handle_key(Key::Right), Handled::Yes);
        assert_eq!(view.cursor_position(), Position::new(0, 1));
        view.handle_key(Key::Down);
        assert_eq!(view.cursor_position(), Position::new(1, 1));
        view.handle_key(Key::Left);
        assert_eq!(view.cursor_position(), Position::new(1, 0));
        view.handle_key(Key::Up);
        assert_eq!(view.cursor_position(), Position::new(0, 0));
    }

    #[test]
    fn test_left_at_origin_is_idempotent() {
        let mut view = test_view("hello");
        view.handle_key(Key::Left);
        view.handle_key(Key::Left);
        view.handle_key(Key::Left);
        assert_eq!(view.cursor_position(), Position::new(0, 0));
    }

    #[test]
    fn test_right_at_document_end_is_idempotent() {
        let mut view = test_view("hello");
        view.set_cursor(Position::new(0, 5));
        view.handle_key(Key::Right);
        view.handle_key(Key::Right);
        assert_eq!(view.cursor_position(), Position::new(0, 5));
    }

    #[test]
    fn test_boundary_noop_still_notifies() {
        let mut view = test_view("hello");
        view.take_events();
        view.handle_key(Key::Left);
        assert_eq!(
            view.take_events(),
            vec![EditorEvent::CursorMoved(Position::new(0, 0))]
        );
        // But no redraw is needed: the caret did not move.
        assert_eq!(view.take_dirty(), DirtyLines::None);
    }

    #[test]
    fn test_navigation_dirties_both_caret_lines() {
        let mut view = test_view("hello\nworld");
        view.take_dirty();
        view.handle_key(Key::Down);
        assert_eq!(view.take_dirty(), DirtyLines::Range { from: 0, to: 2 });
    }

    // ==================== Focus ====================

    #[test]
    fn test_focus_toggles_and_repaints_caret_line() {
        let mut view = test_view("hello");
        assert!(!view.has_focus());
        view.focus_gained();
        assert!(view.has_focus());
        assert_eq!(view.take_dirty(), DirtyLines::line(0));
        view.focus_lost();
        assert!(!view.has_focus());
        assert_eq!(view.take_dirty(), DirtyLines::line(0));
    }

    // ==================== Paging and scrolling ====================

    #[test]
    fn test_page_down_moves_cursor_by_window() {
        let mut view = test_view(&vec!["line"; 50].join("\n"));
        view.update_window_height(10.0 * 16.0);
        view.page_down();
        assert_eq!(view.cursor_position(), Position::new(10, 0));
        // Cursor scrolled into view.
        assert!(view.viewport().visible_range(50).contains(&10));
    }

    #[test]
    fn test_page_up_saturates_at_top() {
        let mut view = test_view(&vec!["line"; 50].join("\n"));
        view.update_window_height(10.0 * 16.0);
        view.set_cursor(Position::new(3, 0));
        view.page_up();
        assert_eq!(view.cursor_position(), Position::new(0, 0));
    }

    #[test]
    fn test_page_down_clamps_to_last_line() {
        let mut view = test_view("a\nb\nc");
        view.update_window_height(10.0 * 16.0);
        view.page_down();
        assert_eq!(view.cursor_position().line, 2);
    }

    #[test]
    fn test_scroll_to_line_and_by() {
        let mut view = test_view(&vec!["line"; 50].join("\n"));
        view.update_window_height(10.0 * 16.0);
        view.scroll_to_line(5);
        assert_eq!(view.viewport().first_visible_line(), 5);
        view.scroll_by(-100.0 * 16.0);
        assert_eq!(view.viewport().scroll_offset_px(), 0.0);
    }

    // ==================== Renderer surface ====================

    #[test]
    fn test_content_view_surface() {
        let mut view = test_view("abc\nde");
        view.focus_gained();
        view.handle_pointer_press(PointerEvent::press(cell_center(&view, 1, 1)));
        let surface: &dyn ContentView = &view;
        assert_eq!(surface.line_count(), 2);
        assert_eq!(surface.line_content(0), "abc");
        assert_eq!(surface.cursor(), Position::new(1, 1));
        assert!(surface.has_focus());
        assert_eq!(surface.selection_range(), None);
    }

    // ==================== Dirty accumulation ====================

    #[test]
    fn test_take_dirty_merges_batch() {
        let mut view = test_view("aaa\nbbb\nccc");
        view.insert_text(0, 0, "x");
        view.insert_text(2, 0, "y");
        assert_eq!(view.take_dirty(), DirtyLines::Range { from: 0, to: 3 });
        assert_eq!(view.take_dirty(), DirtyLines::None);
    }
}
