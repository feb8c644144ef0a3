// Chunk: docs/chunks/cell_metrics - Character-cell metrics and content sizing

//! Character-cell metrics and content sizing.
//!
//! The widget assumes a strictly monospaced font: every character cell has
//! the same width and every line the same height. With that assumption,
//! layout is plain arithmetic:
//!
//! - x = margin + column * char_width
//! - y = margin + line * line_height
//!
//! Metrics are measured once by the host (from its font system) and stay
//! fixed for the document's lifetime. This module has no font loading; the
//! host passes in the numbers.

use cell_edit_buffer::LineBuffer;

/// Default inset between the widget edge and the text block, in pixels.
pub const DEFAULT_MARGIN: f64 = 10.0;

/// Content width never reports smaller than this, so a short document still
/// claims a usable widget width.
pub const MIN_CONTENT_WIDTH: f64 = 800.0;

/// Fixed per-cell font metrics, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    /// Advance width of a single character cell
    pub char_width: f64,
    /// Height of a line, including inter-line spacing
    pub line_height: f64,
    /// Inset between the widget edge and the text block
    pub margin: f64,
}

impl CellMetrics {
    /// Creates metrics with the default margin.
    pub fn new(char_width: f64, line_height: f64) -> Self {
        Self {
            char_width,
            line_height,
            margin: DEFAULT_MARGIN,
        }
    }

    /// Creates metrics with an explicit margin.
    pub fn with_margin(char_width: f64, line_height: f64, margin: f64) -> Self {
        Self {
            char_width,
            line_height,
            margin,
        }
    }

    /// Computes the bounding size of a document under these metrics.
    ///
    /// Width is the widest line plus margins on both sides, floored at
    /// [`MIN_CONTENT_WIDTH`]; height is every line plus margins.
    pub fn measure(&self, buffer: &LineBuffer) -> ContentSize {
        let mut width = MIN_CONTENT_WIDTH;
        for line in 0..buffer.line_count() {
            let line_width = 2.0 * self.margin + buffer.line_len(line) as f64 * self.char_width;
            width = width.max(line_width);
        }
        ContentSize {
            width,
            height: 2.0 * self.margin + buffer.line_count() as f64 * self.line_height,
        }
    }
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

/// Bounding size of the laid-out document, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentSize {
    pub width: f64,
    pub height: f64,
}
