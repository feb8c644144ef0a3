// Chunk: docs/chunks/viewport_scrolling - Uniform-row scroll arithmetic

//! Scroll arithmetic for the widget's uniform-height lines.
//!
//! The viewport maps the visible window onto the document: given a scroll
//! offset in pixels and the widget height, it answers which lines are on
//! screen and keeps the offset within the scrollable range. It is a pure
//! data structure with no buffer access and no platform calls, so all of it
//! is testable with plain numbers.
//!
//! The offset is tracked in floating-point pixels so a host with smooth
//! trackpad scrolling can scroll by fractional lines. The first visible
//! line is derived as `(scroll_offset_px / line_height).floor()`.

use std::ops::Range;

/// Scroll state for a list of uniform-height lines.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Distance from the top of the content to the top of the window, px
    scroll_offset_px: f64,
    /// How many whole lines fit in the window
    visible_lines: usize,
    /// Height of each line, px
    line_height: f64,
}

impl Viewport {
    /// Creates a viewport with the given line height, scrolled to the top
    /// with zero visible lines. Call [`Viewport::update_size`] once the
    /// window height is known.
    pub fn new(line_height: f64) -> Self {
        Self {
            scroll_offset_px: 0.0,
            visible_lines: 0,
            line_height,
        }
    }

    /// Returns the line height in pixels.
    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// Recomputes the visible line count from the window height.
    pub fn update_size(&mut self, window_height_px: f64) {
        self.visible_lines = if window_height_px > 0.0 {
            (window_height_px / self.line_height).floor() as usize
        } else {
            0
        };
    }

    /// Returns how many whole lines fit in the window.
    pub fn visible_lines(&self) -> usize {
        self.visible_lines
    }

    /// Returns the scroll offset in pixels.
    pub fn scroll_offset_px(&self) -> f64 {
        self.scroll_offset_px
    }

    /// Returns the first (possibly partially) visible line.
    pub fn first_visible_line(&self) -> usize {
        (self.scroll_offset_px / self.line_height).floor() as usize
    }

    /// Returns the range of lines the renderer should draw.
    ///
    /// Includes one extra line past the visible count so a partially
    /// scrolled line at the bottom edge still gets painted.
    pub fn visible_range(&self, line_count: usize) -> Range<usize> {
        let first = self.first_visible_line().min(line_count);
        let last = (first + self.visible_lines + 1).min(line_count);
        first..last
    }

    /// Sets the scroll offset, clamped to the scrollable range for a
    /// document of `line_count` lines.
    pub fn set_scroll_offset(&mut self, offset_px: f64, line_count: usize) {
        let max_offset =
            line_count.saturating_sub(self.visible_lines) as f64 * self.line_height;
        self.scroll_offset_px = offset_px.clamp(0.0, max_offset);
    }

    /// Scrolls by a pixel delta (positive = down), clamped.
    pub fn scroll_by(&mut self, delta_px: f64, line_count: usize) {
        self.set_scroll_offset(self.scroll_offset_px + delta_px, line_count);
    }

    /// Scrolls so `line` sits at the top of the window.
    pub fn scroll_to_line(&mut self, line: usize, line_count: usize) {
        self.set_scroll_offset(line as f64 * self.line_height, line_count);
    }

    /// Scrolls the minimum distance that brings `line` fully into view.
    /// No-op when the line is already visible.
    pub fn ensure_visible(&mut self, line: usize, line_count: usize) {
        let first = self.first_visible_line();
        if line < first {
            self.scroll_to_line(line, line_count);
        } else if self.visible_lines > 0 && line >= first + self.visible_lines {
            let top = line + 1 - self.visible_lines;
            self.scroll_to_line(top, line_count);
        }
    }

    /// Returns the cursor travel distance for a page-wise movement: one
    /// window of lines, at least 1.
    pub fn page_lines(&self) -> usize {
        self.visible_lines.max(1)
    }
}
