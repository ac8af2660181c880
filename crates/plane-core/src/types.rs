// File: crates/plane-core/src/types.rs
// Summary: Shared geometry and style types (rect, segment, color, margins, text style).

/// Default surface width in pixels.
pub const WIDTH: f32 = 500.0;
/// Default surface height in pixels.
pub const HEIGHT: f32 = 500.0;

/// A point in surface-pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A generated line segment in surface-pixel coordinates.
/// Immutable once produced; regenerated every frame, never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn horizontal(x1: f32, x2: f32, y: f32) -> Self {
        Self::new(Point::new(x1, y), Point::new(x2, y))
    }

    pub fn vertical(x: f32, y1: f32, y2: f32) -> Self {
        Self::new(Point::new(x, y1), Point::new(x, y2))
    }
}

/// An axis-aligned region of the drawing surface.
/// Width and height are clamped to zero at construction so a rectangle
/// squeezed out by oversized margins stays degenerate rather than inverted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Renderer-agnostic 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed 0xRRGGBB value; high-order byte is ignored.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Pack back to 0xRRGGBB.
    pub const fn to_rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// One surface margin: width in pixels plus the fill color painted over it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub width: f32,
    pub color: Color,
}

impl Margin {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// The four surface margins. The grid rectangle is the surface minus these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub top: Margin,
    pub right: Margin,
    pub bottom: Margin,
    pub left: Margin,
}

impl Margins {
    pub const fn new(top: Margin, right: Margin, bottom: Margin, left: Margin) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(width: f32, color: Color) -> Self {
        let m = Margin::new(width, color);
        Self::new(m, m, m, m)
    }
}

impl Default for Margins {
    fn default() -> Self {
        let teal = Color::from_rgb(0x008080);
        Self::new(
            Margin::new(20.0, teal),
            Margin::new(20.0, teal),
            Margin::new(60.0, teal),
            Margin::new(60.0, teal),
        )
    }
}

/// Font selection handed across the canvas boundary for label drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub family: String,
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
}

impl TextStyle {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new("Monospaced", 8.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clamps_negative_extent() {
        let r = Rect::new(10.0, 10.0, -5.0, -5.0);
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 0.0);
        assert!(r.is_degenerate());
    }

    #[test]
    fn rect_center() {
        let r = Rect::new(0.0, 0.0, 400.0, 200.0);
        assert_eq!(r.center_x(), 200.0);
        assert_eq!(r.center_y(), 100.0);
    }

    #[test]
    fn color_round_trips_packed_rgb() {
        let c = Color::from_rgb(0xCBCBCB);
        assert_eq!(c, Color::new(0xCB, 0xCB, 0xCB));
        assert_eq!(c.to_rgb(), 0xCBCBCB);
    }
}
