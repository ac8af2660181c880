// File: crates/plane-core/src/graph.rs
// Summary: Frame orchestration: draws background, grid layers, axes, and tic labels.

use crate::canvas::Canvas;
use crate::generator::{LineGenerator, Orientation};
use crate::profile::Profile;
use crate::properties::{LineCategory, LineProperties};
use crate::types::{Point, Rect};

/// Padding between a horizontal tic line and the label to its right.
const HOR_LABEL_PADDING: f32 = 5.0;
/// Padding between a vertical tic line and the label below it.
const VERT_LABEL_PADDING: f32 = 3.0;

/// Renders one complete frame of the grid into a target rectangle.
///
/// Layers are drawn in a fixed order: background fill, grid lines, minor
/// tics, major tics, axes, then axis labels; the caller overlays the user
/// plot afterwards. A category whose numeric properties are malformed is
/// skipped rather than allowed to blank the frame, and canvas color/stroke
/// state is restored after every layer.
#[derive(Clone, Debug)]
pub struct GraphManager {
    rect: Rect,
}

impl GraphManager {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Update the bounding rectangle applied to subsequent draws.
    pub fn refresh(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Draw every layer of the grid in order.
    pub fn draw_all(&self, canvas: &mut dyn Canvas, profile: &Profile) {
        self.draw_background(canvas, profile);
        self.draw_grid_lines(canvas, profile);
        self.draw_minor_tics(canvas, profile);
        self.draw_major_tics(canvas, profile);
        self.draw_axes(canvas, profile);
        self.draw_labels(canvas, profile);
    }

    pub fn draw_background(&self, canvas: &mut dyn Canvas, profile: &Profile) {
        let saved = canvas.color();
        canvas.set_color(profile.graph().bg_color());
        canvas.fill_rect(self.rect);
        canvas.set_color(saved);
    }

    pub fn draw_grid_lines(&self, canvas: &mut dyn Canvas, profile: &Profile) {
        self.draw_category(canvas, profile, LineCategory::GridLines);
    }

    pub fn draw_minor_tics(&self, canvas: &mut dyn Canvas, profile: &Profile) {
        self.draw_category(canvas, profile, LineCategory::MinorTics);
    }

    pub fn draw_major_tics(&self, canvas: &mut dyn Canvas, profile: &Profile) {
        self.draw_category(canvas, profile, LineCategory::MajorTics);
    }

    /// Draw the x- and y-axes. Axes have no draw flag; they are always
    /// rendered, full span, through the origin.
    pub fn draw_axes(&self, canvas: &mut dyn Canvas, profile: &Profile) {
        let axes = profile.line_properties(LineCategory::Axes);
        if !axes.stroke().is_finite() {
            return;
        }
        let saved_color = canvas.color();
        let saved_stroke = canvas.stroke();
        if let Some(color) = axes.color() {
            canvas.set_color(color);
        }
        canvas.set_stroke(axes.stroke());
        for segment in LineGenerator::axes_of(self.rect) {
            canvas.draw_line(segment);
        }
        canvas.set_color(saved_color);
        canvas.set_stroke(saved_stroke);
    }

    /// Draw the numeric labels on the major tic lines. Labels are keyed to
    /// the major-tic spacing and the origin itself is never labeled (it has
    /// no line in the non-axial sequence).
    pub fn draw_labels(&self, canvas: &mut dyn Canvas, profile: &Profile) {
        if !profile.graph().font_draw() {
            return;
        }
        self.draw_oriented_labels(canvas, profile, Orientation::Horizontal);
        self.draw_oriented_labels(canvas, profile, Orientation::Vertical);
    }

    fn draw_category(
        &self,
        canvas: &mut dyn Canvas,
        profile: &Profile,
        category: LineCategory,
    ) {
        let props = profile.line_properties(category);
        if props.has_draw() && !props.draw() {
            return;
        }
        if !category_is_drawable(props) {
            return;
        }

        let generator = LineGenerator::new(
            self.rect,
            profile.grid_unit(),
            props.spacing(),
            props.length(),
            Orientation::Both,
        );
        let saved_color = canvas.color();
        let saved_stroke = canvas.stroke();
        if let Some(color) = props.color() {
            canvas.set_color(color);
        }
        canvas.set_stroke(props.stroke());
        for segment in generator.iter() {
            canvas.draw_line(segment);
        }
        canvas.set_color(saved_color);
        canvas.set_stroke(saved_stroke);
    }

    fn draw_oriented_labels(
        &self,
        canvas: &mut dyn Canvas,
        profile: &Profile,
        orientation: Orientation,
    ) {
        let major = profile.line_properties(LineCategory::MajorTics);
        let grid_unit = profile.grid_unit();
        // Labels are always keyed to the major-tic spacing; pixels between
        // consecutive major tics.
        let unit_spacing = grid_unit / major.spacing();
        if !unit_spacing.is_finite() || unit_spacing <= 0.0 {
            return;
        }

        let style = profile.graph().text_style();
        let saved_color = canvas.color();
        canvas.set_color(profile.graph().fg_color());

        let origin_x = self.rect.center_x();
        let origin_y = self.rect.center_y();
        let generator = LineGenerator::new(
            self.rect,
            grid_unit,
            major.spacing(),
            major.length(),
            orientation,
        );
        for segment in generator.iter() {
            let delta = match orientation {
                Orientation::Vertical => segment.end.x - origin_x,
                _ => origin_y - segment.start.y,
            };
            let value = delta / unit_spacing;
            let label = format!("{value:.2}");
            let (width, height) = canvas.text_size(&label, &style);
            let at = match orientation {
                // Right of the line's end, vertically centered on it.
                Orientation::Horizontal | Orientation::Both => Point::new(
                    segment.end.x + HOR_LABEL_PADDING,
                    segment.start.y + height / 2.0,
                ),
                // Below the line's bottom end, horizontally centered on it.
                Orientation::Vertical => Point::new(
                    segment.end.x - width / 2.0,
                    segment.end.y + height + VERT_LABEL_PADDING,
                ),
            };
            canvas.draw_text(&label, at, &style);
        }
        canvas.set_color(saved_color);
    }
}

/// A category draws only when its numeric properties are sane; a malformed
/// value skips the category instead of propagating.
fn category_is_drawable(props: &LineProperties) -> bool {
    if !props.stroke().is_finite() {
        return false;
    }
    if props.has_spacing() && !(props.spacing().is_finite() && props.spacing() > 0.0) {
        return false;
    }
    if props.has_length() && !props.length().is_finite() {
        return false;
    }
    true
}
