// File: crates/plane-core/src/canvas.rs
// Summary: Immediate-mode drawing surface trait plus a recording canvas for headless use.

use crate::types::{Color, Point, Rect, Segment, TextStyle};

/// Abstract immediate-mode 2D surface.
///
/// The core draws one complete frame through this trait and never assumes
/// retained-mode drawing or double buffering; presenting the finished frame
/// is the caller's concern. Stroke width and color are current-state values
/// that apply to subsequent line draws.
pub trait Canvas {
    /// Fill `rect` with the current color.
    fn fill_rect(&mut self, rect: Rect);
    /// Draw `segment` with the current stroke width and color.
    fn draw_line(&mut self, segment: Segment);
    /// Draw `text` with its baseline-left corner at `at`, in the current color.
    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle);
    /// Measure `text` as (width, height) in pixels for label placement.
    fn text_size(&self, text: &str, style: &TextStyle) -> (f32, f32);

    fn set_color(&mut self, color: Color);
    fn color(&self) -> Color;
    fn set_stroke(&mut self, width: f32);
    fn stroke(&self) -> f32;
    /// Restrict subsequent drawing to `rect`; `None` clears the clip.
    fn set_clip(&mut self, rect: Option<Rect>);
    fn clip(&self) -> Option<Rect>;
}

/// One recorded drawing call, tagged with the state it was issued under.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Color,
    },
    Line {
        segment: Segment,
        color: Color,
        stroke: f32,
    },
    Text {
        text: String,
        at: Point,
        color: Color,
        size: f32,
    },
}

/// Canvas implementation that records every draw call instead of painting.
///
/// Used by tests to assert draw order, state discipline, and label content,
/// and by callers that want to replay a frame onto another backend. Text
/// metrics are approximated from the font size since no shaper is available.
#[derive(Debug)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
    color: Color,
    stroke: f32,
    clip: Option<Rect>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            color: Color::BLACK,
            stroke: 1.0,
            clip: None,
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Segments recorded so far, in draw order.
    pub fn lines(&self) -> Vec<Segment> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { segment, .. } => Some(*segment),
                _ => None,
            })
            .collect()
    }

    /// Label strings recorded so far, in draw order.
    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::FillRect {
            rect,
            color: self.color,
        });
    }

    fn draw_line(&mut self, segment: Segment) {
        self.ops.push(DrawOp::Line {
            segment,
            color: self.color,
            stroke: self.stroke,
        });
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            at,
            color: self.color,
            size: style.size,
        });
    }

    fn text_size(&self, text: &str, style: &TextStyle) -> (f32, f32) {
        // Rough monospace estimate, adequate for placement tests.
        (text.chars().count() as f32 * style.size * 0.6, style.size)
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_stroke(&mut self, width: f32) {
        self.stroke = width;
    }

    fn stroke(&self) -> f32 {
        self.stroke
    }

    fn set_clip(&mut self, rect: Option<Rect>) {
        self.clip = rect;
    }

    fn clip(&self) -> Option<Rect> {
        self.clip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_state_with_each_op() {
        let mut canvas = RecordingCanvas::new();
        canvas.set_color(Color::from_rgb(0x112233));
        canvas.set_stroke(2.5);
        canvas.draw_line(Segment::horizontal(0.0, 10.0, 5.0));

        match &canvas.ops()[0] {
            DrawOp::Line { color, stroke, .. } => {
                assert_eq!(*color, Color::from_rgb(0x112233));
                assert_eq!(*stroke, 2.5);
            }
            other => panic!("expected line op, got {other:?}"),
        }
    }

    #[test]
    fn clip_round_trips() {
        let mut canvas = RecordingCanvas::new();
        assert_eq!(canvas.clip(), None);
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        canvas.set_clip(Some(r));
        assert_eq!(canvas.clip(), Some(r));
        canvas.set_clip(None);
        assert_eq!(canvas.clip(), None);
    }
}
