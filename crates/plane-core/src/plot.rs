// File: crates/plane-core/src/plot.rs
// Summary: Pull-based plot-command stream: commands, shapes, and the execution context.

use crate::canvas::Canvas;
use crate::types::{Color, Point, Rect, Segment};

/// Source of plot commands, pulled fresh once per frame after the grid is
/// drawn. Never cached across frames.
pub type PlotSupplier = Box<dyn FnMut() -> Vec<Box<dyn PlotCommand>>>;

/// One user drawing command, executed against the per-frame plot context.
pub trait PlotCommand {
    fn execute(&self, ctx: &mut PlotContext<'_>);
}

/// Glyph drawn at a plotted point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlotShape {
    /// A small filled square, the default.
    #[default]
    Point,
    /// A segment-approximated circle outline.
    Circle,
    /// A four-armed cross.
    Cross,
}

impl PlotShape {
    fn draw(self, canvas: &mut dyn Canvas, center: Point) {
        match self {
            PlotShape::Point => {
                canvas.fill_rect(Rect::new(center.x - 1.0, center.y - 1.0, 2.0, 2.0));
            }
            PlotShape::Circle => {
                const SIDES: usize = 16;
                const RADIUS: f32 = 3.0;
                let mut prev = Point::new(center.x + RADIUS, center.y);
                for i in 1..=SIDES {
                    let angle = (i as f32) * std::f32::consts::TAU / SIDES as f32;
                    let next = Point::new(
                        center.x + RADIUS * angle.cos(),
                        center.y + RADIUS * angle.sin(),
                    );
                    canvas.draw_line(Segment::new(prev, next));
                    prev = next;
                }
            }
            PlotShape::Cross => {
                const ARM: f32 = 3.0;
                canvas.draw_line(Segment::horizontal(center.x - ARM, center.x + ARM, center.y));
                canvas.draw_line(Segment::vertical(center.x, center.y - ARM, center.y + ARM));
            }
        }
    }
}

/// Per-frame execution context handed to each plot command.
///
/// Owns the user-space to pixel-space transform for the current frame's grid
/// rectangle. Plot color and shape reset to their defaults at the start of
/// every frame; a command's change lasts only until the frame ends.
pub struct PlotContext<'a> {
    canvas: &'a mut dyn Canvas,
    grid_unit: f32,
    x_offset: f32,
    y_offset: f32,
    color: Color,
    shape: PlotShape,
}

impl<'a> PlotContext<'a> {
    pub fn new(
        canvas: &'a mut dyn Canvas,
        grid_rect: Rect,
        grid_unit: f32,
        color: Color,
    ) -> Self {
        Self {
            canvas,
            grid_unit,
            x_offset: grid_rect.x + (grid_rect.width - 1.0) / 2.0,
            y_offset: grid_rect.y + (grid_rect.height - 1.0) / 2.0,
            color,
            shape: PlotShape::default(),
        }
    }

    /// Map a user-space point to pixel space. The y sign flips because
    /// pixel space grows downward.
    pub fn to_pixel(&self, x: f32, y: f32) -> Point {
        Point::new(
            x * self.grid_unit + self.x_offset,
            -y * self.grid_unit + self.y_offset,
        )
    }

    /// Draw the current shape at the mapped location of `(x, y)`.
    pub fn plot_point(&mut self, x: f32, y: f32) {
        let center = self.to_pixel(x, y);
        let saved = self.canvas.color();
        self.canvas.set_color(self.color);
        self.shape.draw(self.canvas, center);
        self.canvas.set_color(saved);
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_shape(&mut self, shape: PlotShape) {
        self.shape = shape;
    }

    pub fn canvas(&mut self) -> &mut dyn Canvas {
        self.canvas
    }
}

/// Plot a single user-space point with the current shape and color.
#[derive(Clone, Copy, Debug)]
pub struct PlotPoint {
    pub x: f32,
    pub y: f32,
}

impl PlotCommand for PlotPoint {
    fn execute(&self, ctx: &mut PlotContext<'_>) {
        ctx.plot_point(self.x, self.y);
    }
}

/// Change the plot color for the remainder of the frame.
#[derive(Clone, Copy, Debug)]
pub struct SetPlotColor(pub Color);

impl PlotCommand for SetPlotColor {
    fn execute(&self, ctx: &mut PlotContext<'_>) {
        ctx.set_color(self.0);
    }
}

/// Change the plot shape for the remainder of the frame.
#[derive(Clone, Copy, Debug)]
pub struct SetPlotShape(pub PlotShape);

impl PlotCommand for SetPlotShape {
    fn execute(&self, ctx: &mut PlotContext<'_>) {
        ctx.set_shape(self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawOp, RecordingCanvas};

    #[test]
    fn transform_maps_origin_to_rect_center_offsets() {
        let mut canvas = RecordingCanvas::new();
        let rect = Rect::new(0.0, 0.0, 401.0, 201.0);
        let ctx = PlotContext::new(&mut canvas, rect, 50.0, Color::BLACK);
        assert_eq!(ctx.to_pixel(0.0, 0.0), Point::new(200.0, 100.0));
        assert_eq!(ctx.to_pixel(1.0, 0.0), Point::new(250.0, 100.0));
        assert_eq!(ctx.to_pixel(0.0, 1.0), Point::new(200.0, 50.0));
    }

    #[test]
    fn plot_point_uses_command_color_and_restores_canvas() {
        let mut canvas = RecordingCanvas::new();
        let rect = Rect::new(0.0, 0.0, 101.0, 101.0);
        let red = Color::from_rgb(0xFF0000);
        let mut ctx = PlotContext::new(&mut canvas, rect, 10.0, Color::BLACK);
        SetPlotColor(red).execute(&mut ctx);
        PlotPoint { x: 0.0, y: 0.0 }.execute(&mut ctx);

        match &canvas.ops()[0] {
            DrawOp::FillRect { color, .. } => assert_eq!(*color, red),
            other => panic!("expected fill op, got {other:?}"),
        }
        assert_eq!(canvas.color(), Color::BLACK);
    }

    #[test]
    fn cross_shape_draws_two_segments() {
        let mut canvas = RecordingCanvas::new();
        let rect = Rect::new(0.0, 0.0, 101.0, 101.0);
        let mut ctx = PlotContext::new(&mut canvas, rect, 10.0, Color::BLACK);
        SetPlotShape(PlotShape::Cross).execute(&mut ctx);
        PlotPoint { x: 1.0, y: 1.0 }.execute(&mut ctx);
        assert_eq!(canvas.lines().len(), 2);
    }
}
