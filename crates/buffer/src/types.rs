// Chunk: docs/chunks/line_buffer - Line buffer with cursor and selection tracking

/// Position in the document as (line, column), both 0-indexed.
///
/// The column counts char units, not bytes. A column equal to the line's
/// length is valid and means "after the last character".
///
/// Field order matters: the derived `Ord` compares by line first, then by
/// column, which is document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// An anchor/active pair of positions.
///
/// The anchor is where the selection gesture started; the active end follows
/// the pointer. Neither end is required to precede the other; consumers that
/// need document order call [`Selection::normalized`]. The selection is empty
/// (no highlight) exactly when the two ends coincide.
// Chunk: docs/chunks/pointer_selection - Pointer press/drag selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Where the selection started.
    pub anchor: Position,
    /// The end that moves as the selection is extended.
    pub active: Position,
}

impl Selection {
    /// Creates an empty selection with both ends at `pos`.
    pub fn collapsed(pos: Position) -> Self {
        Self {
            anchor: pos,
            active: pos,
        }
    }

    /// Returns true if the selection covers no characters.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Moves both ends to `pos`, emptying the selection.
    pub fn collapse_to(&mut self, pos: Position) {
        self.anchor = pos;
        self.active = pos;
    }

    /// Moves the active end to `pos`, leaving the anchor in place.
    pub fn extend_to(&mut self, pos: Position) {
        self.active = pos;
    }

    /// Returns the two ends in document order (start <= end).
    pub fn normalized(&self) -> (Position, Position) {
        if self.anchor <= self.active {
            (self.anchor, self.active)
        } else {
            (self.active, self.anchor)
        }
    }

    /// Returns the normalized range, or `None` when the selection is empty.
    pub fn range(&self) -> Option<(Position, Position)> {
        if self.is_empty() {
            None
        } else {
            Some(self.normalized())
        }
    }
}

/// Which lines a mutation touched.
///
/// Mutations report the smallest region the renderer must repaint. Values
/// merge, so a batch of operations can be collapsed into a single region
/// before the next paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirtyLines {
    /// Nothing changed (no-op mutation).
    #[default]
    None,
    /// Lines in the half-open range [from, to) changed.
    Range { from: usize, to: usize },
    /// Everything from `from` to the end of the document changed.
    /// Reported when lines are merged or the document is replaced, since
    /// every subsequent line shifts.
    FromLine(usize),
}

impl DirtyLines {
    /// A single dirtied line.
    pub fn line(line: usize) -> Self {
        DirtyLines::Range {
            from: line,
            to: line + 1,
        }
    }

    /// Returns true if no lines were dirtied.
    pub fn is_none(&self) -> bool {
        matches!(self, DirtyLines::None)
    }

    /// Returns the first dirtied line, if any.
    pub fn start_line(&self) -> Option<usize> {
        match self {
            DirtyLines::None => None,
            DirtyLines::Range { from, .. } | DirtyLines::FromLine(from) => Some(*from),
        }
    }

    /// Merges another region into this one, producing the smallest region
    /// covering both.
    pub fn merge(&mut self, other: DirtyLines) {
        *self = match (*self, other) {
            (DirtyLines::None, _) => other,
            (_, DirtyLines::None) => return,

            (DirtyLines::FromLine(a), other) | (other, DirtyLines::FromLine(a)) => {
                // FromLine absorbs anything that follows its start.
                let b = other.start_line().unwrap_or(a);
                DirtyLines::FromLine(a.min(b))
            }

            (DirtyLines::Range { from: a, to: b }, DirtyLines::Range { from: c, to: d }) => {
                DirtyLines::Range {
                    from: a.min(c),
                    to: b.max(d),
                }
            }
        };
    }
}
