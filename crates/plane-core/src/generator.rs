// File: crates/plane-core/src/generator.rs
// Summary: Grid line generation for a bounding rectangle: axial and non-axial segments.

use crate::types::{Rect, Segment};

/// Which of the two non-axial sequences iteration yields.
/// The axial accessor is unaffected by this mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Both,
}

impl Orientation {
    pub fn has_horizontal(self) -> bool {
        matches!(self, Orientation::Horizontal | Orientation::Both)
    }

    pub fn has_vertical(self) -> bool {
        matches!(self, Orientation::Vertical | Orientation::Both)
    }
}

/// Generates the grid lines bounded by a rectangle.
///
/// The grid's origin is the exact center of the rectangle, and the two lines
/// through it (the axes) form their own category, available from [`axes`]
/// regardless of the construction parameters. Non-axial lines are walked
/// outward from the origin in steps of `grid_unit / lines_per_unit` and are
/// never emitted on the rectangle's edges nor on the axes themselves.
///
/// Ordering is part of the contract: horizontal lines are yielded strictly
/// ascending in y (top to bottom) and vertical lines strictly ascending in x
/// (left to right), because label drawing derives a line's numeric value
/// from its position in the sequence.
///
/// [`axes`]: LineGenerator::axes
#[derive(Clone, Debug)]
pub struct LineGenerator {
    rect: Rect,
    orientation: Orientation,
    horizontals: Vec<Segment>,
    verticals: Vec<Segment>,
}

impl LineGenerator {
    /// Build a generator over `rect`. `length` is the extent of each
    /// non-axial line, centered on the origin; any negative value means
    /// "span the full grid". A non-positive or non-finite spacing
    /// (`grid_unit / lines_per_unit`) produces empty non-axial sequences.
    pub fn new(
        rect: Rect,
        grid_unit: f32,
        lines_per_unit: f32,
        length: f32,
        orientation: Orientation,
    ) -> Self {
        let spacing = grid_unit / lines_per_unit;
        let hor_length = if length < 0.0 { rect.width } else { length };
        let vert_length = if length < 0.0 { rect.height } else { length };

        let (horizontals, verticals) = if spacing.is_finite() && spacing > 0.0 {
            (
                compute_horizontals(rect, spacing, hor_length),
                compute_verticals(rect, spacing, vert_length),
            )
        } else {
            (Vec::new(), Vec::new())
        };

        Self {
            rect,
            orientation,
            horizontals,
            verticals,
        }
    }

    /// The two axial lines of `rect`: the full-width horizontal line through
    /// its vertical center, then the full-height vertical line through its
    /// horizontal center.
    pub fn axes_of(rect: Rect) -> [Segment; 2] {
        [
            Segment::horizontal(rect.min_x(), rect.max_x(), rect.center_y()),
            Segment::vertical(rect.center_x(), rect.min_y(), rect.max_y()),
        ]
    }

    /// The axial lines of the encapsulated rectangle. Always exactly two,
    /// independent of orientation mask, length, and spacing.
    pub fn axes(&self) -> [Segment; 2] {
        Self::axes_of(self.rect)
    }

    /// Non-axial horizontal lines, top to bottom.
    pub fn horizontals(&self) -> &[Segment] {
        &self.horizontals
    }

    /// Non-axial vertical lines, left to right.
    pub fn verticals(&self) -> &[Segment] {
        &self.verticals
    }

    pub fn horizontal_count(&self) -> usize {
        self.horizontals.len()
    }

    pub fn vertical_count(&self) -> usize {
        self.verticals.len()
    }

    /// Iterate the non-axial lines selected by the orientation mask,
    /// horizontals first.
    pub fn iter(&self) -> impl Iterator<Item = Segment> + '_ {
        let hor = self
            .orientation
            .has_horizontal()
            .then_some(self.horizontals.as_slice())
            .unwrap_or_default();
        let vert = self
            .orientation
            .has_vertical()
            .then_some(self.verticals.as_slice())
            .unwrap_or_default();
        hor.iter().chain(vert.iter()).copied()
    }
}

impl<'a> IntoIterator for &'a LineGenerator {
    type Item = Segment;
    type IntoIter = Box<dyn Iterator<Item = Segment> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

fn compute_horizontals(rect: Rect, spacing: f32, length: f32) -> Vec<Segment> {
    let origin_x = rect.center_x();
    let origin_y = rect.center_y();
    let x1 = origin_x - length / 2.0;
    let x2 = origin_x + length / 2.0;

    let mut above = Vec::new();
    let mut yco = origin_y - spacing;
    while yco > rect.min_y() {
        above.push(Segment::horizontal(x1, x2, yco));
        let next = yco - spacing;
        // f32 precision can stall the walk when spacing is tiny relative
        // to the coordinate; bail out instead of spinning.
        if next >= yco {
            break;
        }
        yco = next;
    }
    above.reverse();

    let mut lines = above;
    let mut yco = origin_y + spacing;
    while yco < rect.max_y() {
        lines.push(Segment::horizontal(x1, x2, yco));
        let next = yco + spacing;
        if next <= yco {
            break;
        }
        yco = next;
    }
    lines
}

fn compute_verticals(rect: Rect, spacing: f32, length: f32) -> Vec<Segment> {
    let origin_x = rect.center_x();
    let origin_y = rect.center_y();
    let y1 = origin_y - length / 2.0;
    let y2 = origin_y + length / 2.0;

    let mut left = Vec::new();
    let mut xco = origin_x - spacing;
    while xco > rect.min_x() {
        left.push(Segment::vertical(xco, y1, y2));
        let next = xco - spacing;
        if next >= xco {
            break;
        }
        xco = next;
    }
    left.reverse();

    let mut lines = left;
    let mut xco = origin_x + spacing;
    while xco < rect.max_x() {
        lines.push(Segment::vertical(xco, y1, y2));
        let next = xco + spacing;
        if next <= xco {
            break;
        }
        xco = next;
    }
    lines
}
