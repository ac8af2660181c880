// File: crates/plane-core/src/properties.rs
// Summary: Per-category line property sets and the main surface property set.

use crate::config::{keys, ConfigStore};
use crate::types::{Color, TextStyle};

/// The four fixed categories of drawable line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineCategory {
    Axes,
    GridLines,
    MajorTics,
    MinorTics,
}

impl LineCategory {
    pub const ALL: [LineCategory; 4] = [
        LineCategory::Axes,
        LineCategory::GridLines,
        LineCategory::MajorTics,
        LineCategory::MinorTics,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LineCategory::Axes => "Axes",
            LineCategory::GridLines => "GridLines",
            LineCategory::MajorTics => "MajorTics",
            LineCategory::MinorTics => "MinorTics",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Axes" => Some(LineCategory::Axes),
            "GridLines" => Some(LineCategory::GridLines),
            "MajorTics" => Some(LineCategory::MajorTics),
            "MinorTics" => Some(LineCategory::MinorTics),
            _ => None,
        }
    }

    /// Store keys for this category: (draw, stroke, length, spacing, color).
    /// `None` marks a field the category does not carry.
    fn store_keys(
        self,
    ) -> (
        Option<&'static str>,
        Option<&'static str>,
        Option<&'static str>,
        Option<&'static str>,
        Option<&'static str>,
    ) {
        match self {
            // Axes are always drawn, always full span, and pinned to the
            // origin, so draw/length/spacing do not apply.
            LineCategory::Axes => {
                (None, Some(keys::AXIS_WEIGHT), None, None, Some(keys::AXIS_COLOR))
            }
            // Grid lines always span the full grid; no length.
            LineCategory::GridLines => (
                Some(keys::GRID_LINE_DRAW),
                Some(keys::GRID_LINE_WEIGHT),
                None,
                Some(keys::GRID_LINE_LPU),
                Some(keys::GRID_LINE_COLOR),
            ),
            LineCategory::MajorTics => (
                Some(keys::TIC_MAJOR_DRAW),
                Some(keys::TIC_MAJOR_WEIGHT),
                Some(keys::TIC_MAJOR_LEN),
                Some(keys::TIC_MAJOR_MPU),
                Some(keys::TIC_MAJOR_COLOR),
            ),
            LineCategory::MinorTics => (
                Some(keys::TIC_MINOR_DRAW),
                Some(keys::TIC_MINOR_WEIGHT),
                Some(keys::TIC_MINOR_LEN),
                Some(keys::TIC_MINOR_MPU),
                Some(keys::TIC_MINOR_COLOR),
            ),
        }
    }
}

/// Configuration record for one category of line.
///
/// Each of the five fields is optional; which ones are populated is fixed by
/// the category at construction. Reading an inapplicable field returns a
/// documented sentinel (false, -1.0, `None`) and writing one is a silent
/// no-op, so one generic consumer can treat all four categories uniformly,
/// probing capability through the `has_*` methods.
#[derive(Clone, Debug, PartialEq)]
pub struct LineProperties {
    category: LineCategory,
    draw: Option<bool>,
    stroke: Option<f32>,
    length: Option<f32>,
    spacing: Option<f32>,
    color: Option<Color>,
}

impl LineProperties {
    /// Build the property set for `category`, populated from `store`.
    pub fn new(category: LineCategory, store: &ConfigStore) -> Self {
        let mut set = Self {
            category,
            draw: None,
            stroke: None,
            length: None,
            spacing: None,
            color: None,
        };
        set.reset(store);
        set
    }

    pub fn category(&self) -> LineCategory {
        self.category
    }

    /// Reload every applicable field from the backing store.
    pub fn reset(&mut self, store: &ConfigStore) {
        let (draw, stroke, length, spacing, color) = self.category.store_keys();
        self.draw = draw.and_then(|k| store.as_bool(k));
        self.stroke = stroke.and_then(|k| store.as_f32(k));
        self.length = length.and_then(|k| store.as_f32(k));
        self.spacing = spacing.and_then(|k| store.as_f32(k));
        self.color = color.and_then(|k| store.as_color(k));
    }

    /// Write every applicable field back to the backing store.
    pub fn apply(&self, store: &mut ConfigStore) {
        let (draw, stroke, length, spacing, color) = self.category.store_keys();
        if let (Some(key), Some(v)) = (draw, self.draw) {
            store.set_bool(key, v);
        }
        if let (Some(key), Some(v)) = (stroke, self.stroke) {
            store.set_f32(key, v);
        }
        if let (Some(key), Some(v)) = (length, self.length) {
            store.set_f32(key, v);
        }
        if let (Some(key), Some(v)) = (spacing, self.spacing) {
            store.set_f32(key, v);
        }
        if let (Some(key), Some(v)) = (color, self.color) {
            store.set_color(key, v);
        }
    }

    pub fn has_draw(&self) -> bool {
        self.draw.is_some()
    }

    pub fn has_stroke(&self) -> bool {
        self.stroke.is_some()
    }

    pub fn has_length(&self) -> bool {
        self.length.is_some()
    }

    pub fn has_spacing(&self) -> bool {
        self.spacing.is_some()
    }

    pub fn has_color(&self) -> bool {
        self.color.is_some()
    }

    pub fn draw(&self) -> bool {
        self.draw.unwrap_or(false)
    }

    pub fn stroke(&self) -> f32 {
        self.stroke.unwrap_or(-1.0)
    }

    /// Line length in pixels; -1.0 means "span the full grid".
    pub fn length(&self) -> f32 {
        self.length.unwrap_or(-1.0)
    }

    /// Lines per grid unit.
    pub fn spacing(&self) -> f32 {
        self.spacing.unwrap_or(-1.0)
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn set_draw(&mut self, draw: bool) {
        if self.has_draw() {
            self.draw = Some(draw);
        }
    }

    pub fn set_stroke(&mut self, stroke: f32) {
        if self.has_stroke() {
            self.stroke = Some(stroke);
        }
    }

    pub fn set_length(&mut self, length: f32) {
        if self.has_length() {
            self.length = Some(length);
        }
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        if self.has_spacing() {
            self.spacing = Some(spacing);
        }
    }

    pub fn set_color(&mut self, color: Color) {
        if self.has_color() {
            self.color = Some(color);
        }
    }
}

/// Font weight/slant for axis labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn name(self) -> &'static str {
        match self {
            FontStyle::Plain => "PLAIN",
            FontStyle::Bold => "BOLD",
            FontStyle::Italic => "ITALIC",
            FontStyle::BoldItalic => "BOLD_ITALIC",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "BOLD" => FontStyle::Bold,
            "ITALIC" => FontStyle::Italic,
            "BOLD_ITALIC" => FontStyle::BoldItalic,
            _ => FontStyle::Plain,
        }
    }
}

/// Configuration record for the main drawing surface: colors, label font,
/// and the preferred surface width.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphProperties {
    bg_color: Color,
    fg_color: Color,
    font_name: String,
    font_size: f32,
    font_style: FontStyle,
    font_draw: bool,
    width: f32,
}

impl GraphProperties {
    pub fn new(store: &ConfigStore) -> Self {
        let mut props = Self {
            bg_color: Color::WHITE,
            fg_color: Color::BLACK,
            font_name: "Monospaced".to_string(),
            font_size: 8.0,
            font_style: FontStyle::Plain,
            font_draw: true,
            width: crate::types::WIDTH,
        };
        props.reset(store);
        props
    }

    pub fn reset(&mut self, store: &ConfigStore) {
        if let Some(c) = store.as_color(keys::MW_BG_COLOR) {
            self.bg_color = c;
        }
        if let Some(c) = store.as_color(keys::LABEL_FONT_COLOR) {
            self.fg_color = c;
        }
        if let Some(n) = store.as_string(keys::LABEL_FONT_NAME) {
            self.font_name = n;
        }
        if let Some(s) = store.as_f32(keys::LABEL_FONT_SIZE) {
            self.font_size = s;
        }
        if let Some(s) = store.as_string(keys::LABEL_FONT_STYLE) {
            self.font_style = FontStyle::from_name(&s);
        }
        if let Some(d) = store.as_bool(keys::LABEL_DRAW) {
            self.font_draw = d;
        }
        if let Some(w) = store.as_f32(keys::MW_WIDTH) {
            self.width = w;
        }
    }

    pub fn apply(&self, store: &mut ConfigStore) {
        store.set_color(keys::MW_BG_COLOR, self.bg_color);
        store.set_color(keys::LABEL_FONT_COLOR, self.fg_color);
        store.set(keys::LABEL_FONT_NAME, self.font_name.clone());
        store.set_f32(keys::LABEL_FONT_SIZE, self.font_size);
        store.set(keys::LABEL_FONT_STYLE, self.font_style.name());
        store.set_bool(keys::LABEL_DRAW, self.font_draw);
        store.set_f32(keys::MW_WIDTH, self.width);
    }

    pub fn bg_color(&self) -> Color {
        self.bg_color
    }

    pub fn set_bg_color(&mut self, color: Color) {
        self.bg_color = color;
    }

    pub fn fg_color(&self) -> Color {
        self.fg_color
    }

    pub fn set_fg_color(&mut self, color: Color) {
        self.fg_color = color;
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    pub fn set_font_name(&mut self, name: impl Into<String>) {
        self.font_name = name.into();
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    pub fn set_font_style(&mut self, style: FontStyle) {
        self.font_style = style;
    }

    pub fn font_draw(&self) -> bool {
        self.font_draw
    }

    pub fn set_font_draw(&mut self, draw: bool) {
        self.font_draw = draw;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// The label font as a canvas-boundary text style.
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            family: self.font_name.clone(),
            size: self.font_size,
            bold: matches!(self.font_style, FontStyle::Bold | FontStyle::BoldItalic),
            italic: matches!(self.font_style, FontStyle::Italic | FontStyle::BoldItalic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_capabilities() {
        let store = ConfigStore::new();
        let axes = LineProperties::new(LineCategory::Axes, &store);
        assert!(!axes.has_draw());
        assert!(axes.has_stroke());
        assert!(!axes.has_length());
        assert!(!axes.has_spacing());
        assert!(axes.has_color());
    }

    #[test]
    fn inapplicable_reads_yield_sentinels() {
        let store = ConfigStore::new();
        let axes = LineProperties::new(LineCategory::Axes, &store);
        assert!(!axes.draw());
        assert_eq!(axes.length(), -1.0);
        assert_eq!(axes.spacing(), -1.0);

        let grid = LineProperties::new(LineCategory::GridLines, &store);
        assert_eq!(grid.length(), -1.0);
        assert!(grid.color().is_some());
    }

    #[test]
    fn inapplicable_writes_are_ignored() {
        let store = ConfigStore::new();
        let mut axes = LineProperties::new(LineCategory::Axes, &store);
        axes.set_draw(true);
        assert!(!axes.draw());
        axes.set_length(10.0);
        assert_eq!(axes.length(), -1.0);
        // Applicable writes stick.
        axes.set_stroke(4.0);
        assert_eq!(axes.stroke(), 4.0);
    }

    #[test]
    fn apply_round_trips_through_store() {
        let mut store = ConfigStore::new();
        let mut major = LineProperties::new(LineCategory::MajorTics, &store);
        major.set_spacing(4.0);
        major.set_color(Color::from_rgb(0x336699));
        major.apply(&mut store);

        let reloaded = LineProperties::new(LineCategory::MajorTics, &store);
        assert_eq!(reloaded.spacing(), 4.0);
        assert_eq!(reloaded.color(), Some(Color::from_rgb(0x336699)));
    }

    #[test]
    fn graph_properties_text_style() {
        let mut store = ConfigStore::new();
        store.set(keys::LABEL_FONT_STYLE, "BOLD_ITALIC");
        let graph = GraphProperties::new(&store);
        let style = graph.text_style();
        assert_eq!(style.family, "Monospaced");
        assert!(style.bold);
        assert!(style.italic);
    }

    #[test]
    fn category_names_round_trip() {
        for cat in LineCategory::ALL {
            assert_eq!(LineCategory::from_name(cat.name()), Some(cat));
        }
        assert_eq!(LineCategory::from_name("Bogus"), None);
    }
}
