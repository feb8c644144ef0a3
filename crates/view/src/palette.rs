// Chunk: docs/chunks/editor_view - Stock widget colors

//! Widget colors exposed to the paint collaborator.
//!
//! The core does no drawing, but it owns the color choices so every host
//! renders the widget the same way. The renderer reads the palette alongside
//! the line content and cursor position on each redraw.

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// The widget's color set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Text color
    pub text: Rgba,
    /// Widget background
    pub background: Rgba,
    /// Caret color
    pub cursor: Rgba,
    /// Selection highlight
    pub selection: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: Rgba::opaque(0, 0, 0),
            background: Rgba::opaque(255, 255, 255),
            cursor: Rgba::opaque(0, 0, 255),
            // Light blue
            selection: Rgba::opaque(173, 216, 230),
        }
    }
}
