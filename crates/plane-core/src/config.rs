// File: crates/plane-core/src/config.rs
// Summary: String-keyed configuration store with typed accessors and system defaults.

use std::collections::HashMap;

use crate::types::Color;

/// Property names understood by the store. Grouped by the component they
/// configure; line-category names are suffixed per category.
pub mod keys {
    pub const GRID_UNIT: &str = "gridUnit";

    pub const MW_BG_COLOR: &str = "mwBgColor";
    pub const MW_WIDTH: &str = "mwWidth";

    pub const LABEL_FONT_COLOR: &str = "labelFontColor";
    pub const LABEL_FONT_NAME: &str = "labelFontName";
    pub const LABEL_FONT_SIZE: &str = "labelFontSize";
    pub const LABEL_FONT_STYLE: &str = "labelFontStyle";
    pub const LABEL_DRAW: &str = "labelDraw";

    pub const AXIS_COLOR: &str = "axisColor";
    pub const AXIS_WEIGHT: &str = "axisWeight";

    pub const GRID_LINE_COLOR: &str = "gridLineColor";
    pub const GRID_LINE_WEIGHT: &str = "gridLineWeight";
    pub const GRID_LINE_LPU: &str = "gridLineLpu";
    pub const GRID_LINE_DRAW: &str = "gridLineDraw";

    pub const TIC_MAJOR_COLOR: &str = "ticMajorColor";
    pub const TIC_MAJOR_WEIGHT: &str = "ticMajorWeight";
    pub const TIC_MAJOR_LEN: &str = "ticMajorLen";
    pub const TIC_MAJOR_MPU: &str = "ticMajorMpu";
    pub const TIC_MAJOR_DRAW: &str = "ticMajorDraw";

    pub const TIC_MINOR_COLOR: &str = "ticMinorColor";
    pub const TIC_MINOR_WEIGHT: &str = "ticMinorWeight";
    pub const TIC_MINOR_LEN: &str = "ticMinorLen";
    pub const TIC_MINOR_MPU: &str = "ticMinorMpu";
    pub const TIC_MINOR_DRAW: &str = "ticMinorDraw";

    pub const MARGIN_TOP_WIDTH: &str = "marginTopWidth";
    pub const MARGIN_TOP_BG_COLOR: &str = "marginTopBgColor";
    pub const MARGIN_RIGHT_WIDTH: &str = "marginRightWidth";
    pub const MARGIN_RIGHT_BG_COLOR: &str = "marginRightBgColor";
    pub const MARGIN_BOTTOM_WIDTH: &str = "marginBottomWidth";
    pub const MARGIN_BOTTOM_BG_COLOR: &str = "marginBottomBgColor";
    pub const MARGIN_LEFT_WIDTH: &str = "marginLeftWidth";
    pub const MARGIN_LEFT_BG_COLOR: &str = "marginLeftBgColor";
}

/// Backing store for every configurable property.
///
/// Values are kept as strings and parsed on access, matching the line-based
/// persistence format consumed by the external parser. The store is an
/// explicitly passed handle; nothing in the core reaches for ambient global
/// state.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    values: HashMap<String, String>,
}

impl ConfigStore {
    /// A store seeded with the system defaults.
    pub fn new() -> Self {
        use keys::*;
        let mut store = Self {
            values: HashMap::new(),
        };
        store.set(GRID_UNIT, "65");

        store.set(MW_BG_COLOR, "0xE6E6E6");
        store.set(MW_WIDTH, "500");

        store.set(LABEL_FONT_COLOR, "0x000000");
        store.set(LABEL_FONT_NAME, "Monospaced");
        store.set(LABEL_FONT_SIZE, "8");
        store.set(LABEL_FONT_STYLE, "PLAIN");
        store.set(LABEL_DRAW, "true");

        store.set(AXIS_COLOR, "0x000000");
        store.set(AXIS_WEIGHT, "2");

        store.set(GRID_LINE_COLOR, "0xCBCBCB");
        store.set(GRID_LINE_WEIGHT, "1");
        store.set(GRID_LINE_LPU, "2");
        store.set(GRID_LINE_DRAW, "true");

        store.set(TIC_MAJOR_COLOR, "0x000000");
        store.set(TIC_MAJOR_WEIGHT, "5");
        store.set(TIC_MAJOR_LEN, "16");
        store.set(TIC_MAJOR_MPU, "2");
        store.set(TIC_MAJOR_DRAW, "true");

        store.set(TIC_MINOR_COLOR, "0x000000");
        store.set(TIC_MINOR_WEIGHT, "2");
        store.set(TIC_MINOR_LEN, "6");
        store.set(TIC_MINOR_MPU, "10");
        store.set(TIC_MINOR_DRAW, "true");

        store.set(MARGIN_TOP_WIDTH, "20");
        store.set(MARGIN_TOP_BG_COLOR, "0x008080");
        store.set(MARGIN_RIGHT_WIDTH, "20");
        store.set(MARGIN_RIGHT_BG_COLOR, "0x008080");
        store.set(MARGIN_BOTTOM_WIDTH, "60");
        store.set(MARGIN_BOTTOM_BG_COLOR, "0x008080");
        store.set(MARGIN_LEFT_WIDTH, "60");
        store.set(MARGIN_LEFT_BG_COLOR, "0x008080");

        store
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn set_f32(&mut self, key: &str, value: f32) {
        self.set(key, value.to_string());
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, value.to_string());
    }

    pub fn set_color(&mut self, key: &str, value: Color) {
        self.set(key, format!("0x{:06X}", value.to_rgb()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn as_f32(&self, key: &str) -> Option<f32> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }

    pub fn as_bool(&self, key: &str) -> Option<bool> {
        self.get(key)
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
    }

    pub fn as_color(&self, key: &str) -> Option<Color> {
        self.get(key).and_then(parse_color)
    }

    pub fn as_string(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.trim().to_string())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    let hex = v
        .strip_prefix("0x")
        .or_else(|| v.strip_prefix("0X"))
        .or_else(|| v.strip_prefix('#'));
    match hex {
        Some(h) => u32::from_str_radix(h, 16).ok().map(Color::from_rgb),
        None => v.parse::<u32>().ok().map(Color::from_rgb),
    }
}
