// Chunk: docs/chunks/line_buffer - Line buffer with cursor and selection tracking
// Chunk: docs/chunks/range_editing - Coordinate-addressed range read/insert/delete

//! LineBuffer is the main public API for the text model.
//!
//! It stores the document as an ordered list of lines and tracks the cursor
//! as (line, column). Editing operations are addressed by (line, column)
//! coordinates rather than by a cursor-relative stream, which matches how a
//! host widget drives the model: hit-test a pixel, get a coordinate, edit at
//! that coordinate.
//!
//! Every mutation returns [`DirtyLines`] indicating which lines changed, so
//! downstream rendering can minimize redraws.
//!
//! # Bounds policy
//!
//! Invalid coordinates never panic and never return errors. Mutations with
//! out-of-range coordinates are silent no-ops (`DirtyLines::None`); queries
//! return empty/zero values. Input events may be computed against a stale
//! view of the document (a click hit-tested just before a replacement
//! landed), so rejecting them quietly is the correct behavior.

use crate::types::{DirtyLines, Position, Selection};

/// A text document as an ordered list of lines, with cursor and selection.
///
/// Invariants:
/// - at least one line always exists (an empty document is one empty line)
/// - lines store no trailing newline; `\n` is the implicit separator
/// - the cursor satisfies `line < line_count()` and `col <= line_len(line)`,
///   re-established after every mutation
#[derive(Debug, Clone)]
pub struct LineBuffer {
    lines: Vec<String>,
    cursor: Position,
    selection: Selection,
}

/// Returns the byte offset of char boundary `col` in `s`, or `None` if the
/// line has fewer than `col` chars. `col == char count` maps to `s.len()`.
fn byte_at_col(s: &str, col: usize) -> Option<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(col)
}

impl LineBuffer {
    /// Creates a buffer holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Position::default(),
            selection: Selection::default(),
        }
    }

    /// Creates a buffer from an initial text blob, split on `\n`.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
            cursor: Position::default(),
            selection: Selection::default(),
        }
    }

    // ==================== Accessors ====================

    /// Returns the number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the char count of `line`, or 0 if `line` is out of range.
    pub fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, |l| l.chars().count())
    }

    /// Returns the content of `line` (no trailing newline), or "" if `line`
    /// is out of range.
    pub fn line_content(&self, line: usize) -> &str {
        self.lines.get(line).map_or("", String::as_str)
    }

    /// Serializes the whole document, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Returns the current cursor position.
    pub fn cursor_position(&self) -> Position {
        self.cursor
    }

    /// Returns the current selection (possibly empty).
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Returns true if the selection covers at least one character.
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Returns the selection as a document-ordered (start, end) pair, or
    /// `None` when the selection is empty.
    pub fn selection_range(&self) -> Option<(Position, Position)> {
        self.selection.range()
    }

    // ==================== Wholesale replacement ====================

    /// Replaces the whole document by splitting `text` on `\n`.
    ///
    /// Compares against the current serialization first: assigning the text
    /// the document already holds is a no-op returning `false`, so the host
    /// can skip its change notification. Returns `true` when the content
    /// actually changed. The cursor is re-clamped and the selection
    /// collapses to it.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text() == text {
            return false;
        }
        self.lines = text.split('\n').map(str::to_owned).collect();
        self.clamp_cursor();
        self.selection.collapse_to(self.cursor);
        true
    }

    // ==================== Range editing ====================

    /// Inserts `text` into `line` at char index `col`.
    ///
    /// This is a plain splice into the line's character sequence: an embedded
    /// `\n` in `text` is inserted literally and does NOT split the line.
    /// Silent no-op if `line` is out of `[0, line_count)`, `col` is out of
    /// `[0, line_len(line)]`, or `text` is empty.
    pub fn insert_text(&mut self, line: usize, col: usize, text: &str) -> DirtyLines {
        if text.is_empty() {
            return DirtyLines::None;
        }
        let Some(target) = self.lines.get_mut(line) else {
            return DirtyLines::None;
        };
        let Some(at) = byte_at_col(target, col) else {
            return DirtyLines::None;
        };
        target.insert_str(at, text);
        self.clamp_cursor();
        DirtyLines::line(line)
    }

    /// Removes the coordinate range from (start_line, start_col) to
    /// (end_line, end_col).
    ///
    /// Same-line ranges remove chars `[start_col, end_col)`. Multi-line
    /// ranges keep the head of the start line and the tail of the end line:
    /// the two are merged into one line and everything between is dropped.
    /// The merged replacement is built first and the affected line range is
    /// replaced in one step, so no index bookkeeping survives a partial
    /// removal.
    ///
    /// Silent no-op if either line is out of range, `start_line > end_line`,
    /// or (same line) `start_col >= end_col` or `end_col > line_len`.
    /// Multi-line columns clamp to their line lengths.
    pub fn delete_text(
        &mut self,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> DirtyLines {
        if start_line >= self.lines.len() || end_line >= self.lines.len() {
            return DirtyLines::None;
        }
        if start_line > end_line {
            return DirtyLines::None;
        }

        let dirty = if start_line == end_line {
            let line = &mut self.lines[start_line];
            if start_col >= end_col {
                return DirtyLines::None;
            }
            let Some(end) = byte_at_col(line, end_col) else {
                return DirtyLines::None;
            };
            // start_col < end_col <= char count, so this boundary exists.
            let Some(start) = byte_at_col(line, start_col) else {
                return DirtyLines::None;
            };
            line.replace_range(start..end, "");
            DirtyLines::line(start_line)
        } else {
            let head_end = byte_at_col(&self.lines[start_line], start_col)
                .unwrap_or(self.lines[start_line].len());
            let tail_start =
                byte_at_col(&self.lines[end_line], end_col).unwrap_or(self.lines[end_line].len());

            let mut merged = String::from(&self.lines[start_line][..head_end]);
            merged.push_str(&self.lines[end_line][tail_start..]);

            self.lines[start_line] = merged;
            self.lines.drain(start_line + 1..=end_line);
            DirtyLines::FromLine(start_line)
        };

        self.clamp_cursor();
        dirty
    }

    /// Returns the content of the coordinate range as a single string with
    /// `\n` at line boundaries.
    ///
    /// Pure query: the document is never modified. Returns an empty string
    /// on any out-of-range coordinate, including a same-line range with
    /// `start_col > end_col`.
    pub fn text_in_range(
        &self,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> String {
        if start_line >= self.lines.len() || end_line >= self.lines.len() {
            return String::new();
        }
        if start_line > end_line {
            return String::new();
        }

        if start_line == end_line {
            let line = &self.lines[start_line];
            if start_col > end_col {
                return String::new();
            }
            let (Some(start), Some(end)) =
                (byte_at_col(line, start_col), byte_at_col(line, end_col))
            else {
                return String::new();
            };
            return line[start..end].to_owned();
        }

        let (Some(start), Some(end)) = (
            byte_at_col(&self.lines[start_line], start_col),
            byte_at_col(&self.lines[end_line], end_col),
        ) else {
            return String::new();
        };

        let mut out = String::from(&self.lines[start_line][start..]);
        for line in start_line + 1..end_line {
            out.push('\n');
            out.push_str(&self.lines[line]);
        }
        out.push('\n');
        out.push_str(&self.lines[end_line][..end]);
        out
    }

    // ==================== Cursor movement ====================

    /// Sets the cursor to an arbitrary position, clamped to valid bounds.
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.clamp_position(pos);
    }

    /// Moves the cursor left by one character.
    ///
    /// At the start of a line, wraps to the end of the previous line.
    /// At the start of the document, does nothing.
    pub fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.line_len(self.cursor.line);
        }
    }

    /// Moves the cursor right by one character.
    ///
    /// At the end of a line, wraps to the start of the next line.
    /// At the end of the document, does nothing.
    pub fn move_right(&mut self) {
        if self.cursor.col < self.line_len(self.cursor.line) {
            self.cursor.col += 1;
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.col = 0;
        }
    }

    /// Moves the cursor up one line, clamping the column to the target
    /// line's length. On the first line, does nothing.
    pub fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.line));
        }
    }

    /// Moves the cursor down one line, clamping the column to the target
    /// line's length. On the last line, does nothing.
    pub fn move_down(&mut self) {
        if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.line));
        }
    }

    /// Moves the cursor to column 0 of the current line.
    pub fn move_to_line_start(&mut self) {
        self.cursor.col = 0;
    }

    /// Moves the cursor past the last character of the current line.
    pub fn move_to_line_end(&mut self) {
        self.cursor.col = self.line_len(self.cursor.line);
    }

    /// Moves the cursor to (0, 0).
    pub fn move_to_document_start(&mut self) {
        self.cursor = Position::default();
    }

    /// Moves the cursor past the last character of the last line.
    pub fn move_to_document_end(&mut self) {
        let last = self.line_count() - 1;
        self.cursor = Position::new(last, self.line_len(last));
    }

    // ==================== Selection ====================
    // Chunk: docs/chunks/pointer_selection - Pointer press/drag selection

    /// Starts a selection gesture: both ends collapse to `pos` (clamped).
    pub fn begin_selection_at(&mut self, pos: Position) {
        let pos = self.clamp_position(pos);
        self.selection.collapse_to(pos);
    }

    /// Extends the active end of the selection to `pos` (clamped), leaving
    /// the anchor where the gesture started.
    pub fn extend_selection_to(&mut self, pos: Position) {
        let pos = self.clamp_position(pos);
        self.selection.extend_to(pos);
    }

    /// Collapses the selection to the cursor.
    pub fn clear_selection(&mut self) {
        self.selection.collapse_to(self.cursor);
    }

    // ==================== Cursor-relative editing ====================

    /// Inserts `text` at the cursor and advances the cursor past it.
    ///
    /// Same splice semantics as [`LineBuffer::insert_text`]: an embedded
    /// `\n` does not split the line, and the cursor advances by the char
    /// count of `text` within the current line.
    pub fn insert_at_cursor(&mut self, text: &str) -> DirtyLines {
        let dirty = self.insert_text(self.cursor.line, self.cursor.col, text);
        if !dirty.is_none() {
            self.cursor.col += text.chars().count();
        }
        dirty
    }

    /// Deletes the character before the cursor (Backspace).
    ///
    /// At column 0 the current line joins the previous one and the cursor
    /// lands at the join point. No-op at (0, 0).
    pub fn delete_backward(&mut self) -> DirtyLines {
        if self.cursor.col > 0 {
            let target = Position::new(self.cursor.line, self.cursor.col - 1);
            let dirty = self.delete_text(target.line, target.col, target.line, target.col + 1);
            if !dirty.is_none() {
                self.cursor = target;
            }
            dirty
        } else if self.cursor.line > 0 {
            let prev = self.cursor.line - 1;
            let join = Position::new(prev, self.line_len(prev));
            let dirty = self.delete_text(join.line, join.col, self.cursor.line, 0);
            if !dirty.is_none() {
                self.cursor = join;
            }
            dirty
        } else {
            DirtyLines::None
        }
    }

    /// Deletes the character after the cursor (forward delete).
    ///
    /// At the end of a line the next line joins the current one; the cursor
    /// stays in place. No-op at the end of the document.
    pub fn delete_forward(&mut self) -> DirtyLines {
        let pos = self.cursor;
        if pos.col < self.line_len(pos.line) {
            self.delete_text(pos.line, pos.col, pos.line, pos.col + 1)
        } else if pos.line + 1 < self.line_count() {
            // Joining the next line keeps the cursor at the join point.
            self.delete_text(pos.line, pos.col, pos.line + 1, 0)
        } else {
            DirtyLines::None
        }
    }

    // ==================== Internal ====================

    /// Clamps a position into the cursor invariant range.
    fn clamp_position(&self, pos: Position) -> Position {
        let line = pos.line.min(self.line_count() - 1);
        let col = pos.col.min(self.line_len(line));
        Position::new(line, col)
    }

    /// Re-establishes the cursor and selection invariants after a mutation.
    fn clamp_cursor(&mut self) {
        self.cursor = self.clamp_position(self.cursor);
        self.selection.anchor = self.clamp_position(self.selection.anchor);
        self.selection.active = self.clamp_position(self.selection.active);
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
