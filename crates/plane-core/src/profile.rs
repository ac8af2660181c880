// File: crates/plane-core/src/profile.rs
// Summary: Aggregate of all display properties for one rendering session.

use crate::config::{keys, ConfigStore};
use crate::error::PlaneError;
use crate::properties::{GraphProperties, LineCategory, LineProperties};
use crate::types::Color;

/// The full set of configuration values for one rendering session: the grid
/// unit, the surface properties, and one line property set per category.
///
/// A profile is created once, owned by the surface controller, and mutated
/// in place by configuration-editing code. [`reset`] reloads every field
/// from the backing store and [`apply`] writes every field back; the profile
/// is never partially reconstructed mid-render.
///
/// [`reset`]: Profile::reset
/// [`apply`]: Profile::apply
#[derive(Clone, Debug)]
pub struct Profile {
    grid_unit: f32,
    graph: GraphProperties,
    lines: [LineProperties; 4],
}

impl Profile {
    pub fn new(store: &ConfigStore) -> Self {
        Self {
            grid_unit: store.as_f32(keys::GRID_UNIT).unwrap_or(65.0),
            graph: GraphProperties::new(store),
            lines: LineCategory::ALL.map(|cat| LineProperties::new(cat, store)),
        }
    }

    /// Reload every property from the backing store.
    pub fn reset(&mut self, store: &ConfigStore) {
        if let Some(unit) = store.as_f32(keys::GRID_UNIT) {
            self.grid_unit = unit;
        }
        self.graph.reset(store);
        for set in &mut self.lines {
            set.reset(store);
        }
    }

    /// Write every property back to the backing store.
    pub fn apply(&self, store: &mut ConfigStore) {
        store.set_f32(keys::GRID_UNIT, self.grid_unit);
        self.graph.apply(store);
        for set in &self.lines {
            set.apply(store);
        }
    }

    /// Pixels per mathematical unit.
    pub fn grid_unit(&self) -> f32 {
        self.grid_unit
    }

    pub fn set_grid_unit(&mut self, grid_unit: f32) {
        self.grid_unit = grid_unit;
    }

    pub fn graph(&self) -> &GraphProperties {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut GraphProperties {
        &mut self.graph
    }

    pub fn line_properties(&self, category: LineCategory) -> &LineProperties {
        &self.lines[index_of(category)]
    }

    pub fn line_properties_mut(&mut self, category: LineCategory) -> &mut LineProperties {
        &mut self.lines[index_of(category)]
    }

    /// Look up a line property set by its category name. Names outside the
    /// four fixed categories are a configuration-wiring defect and fatal.
    pub fn line_properties_by_name(&self, name: &str) -> Result<&LineProperties, PlaneError> {
        LineCategory::from_name(name)
            .map(|cat| self.line_properties(cat))
            .ok_or_else(|| PlaneError::UnknownCategory {
                name: name.to_string(),
            })
    }

    /// Export the profile as `name: value` lines grouped under `class:`
    /// markers, grid unit first, for the external persistence collaborator.
    /// Inapplicable fields are omitted.
    pub fn properties(&self) -> Vec<String> {
        let mut out = Vec::new();
        out.push(format!("gridUnit: {}", self.grid_unit));

        out.push("class: Graph".to_string());
        out.push(format_color("bgColor", self.graph.bg_color()));
        out.push(format_color("fgColor", self.graph.fg_color()));
        out.push(format!("draw: {}", self.graph.font_draw()));
        out.push(format!("fontName: {}", self.graph.font_name()));
        out.push(format!("fontSize: {}", self.graph.font_size()));
        out.push(format!("fontStyle: {}", self.graph.font_style().name()));

        for set in &self.lines {
            out.push(format!("class: {}", set.category().name()));
            if let Some(color) = set.color() {
                out.push(format_color("color", color));
            }
            if set.has_draw() {
                out.push(format!("draw: {}", set.draw()));
            }
            if set.has_length() {
                out.push(format!("length: {}", set.length()));
            }
            if set.has_spacing() {
                out.push(format!("spacing: {}", set.spacing()));
            }
            if set.has_stroke() {
                out.push(format!("stroke: {}", set.stroke()));
            }
        }
        out
    }
}

fn index_of(category: LineCategory) -> usize {
    LineCategory::ALL
        .iter()
        .position(|&c| c == category)
        .unwrap_or(0)
}

fn format_color(label: &str, color: Color) -> String {
    format!("{label}: 0x{:06X}", color.to_rgb())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name_matches_typed_lookup() {
        let store = ConfigStore::new();
        let profile = Profile::new(&store);
        for cat in LineCategory::ALL {
            let by_name = profile.line_properties_by_name(cat.name()).unwrap();
            assert_eq!(by_name, profile.line_properties(cat));
        }
    }

    #[test]
    fn unknown_category_is_fatal() {
        let store = ConfigStore::new();
        let profile = Profile::new(&store);
        let err = profile.line_properties_by_name("TicsMajor").unwrap_err();
        assert_eq!(
            err,
            PlaneError::UnknownCategory {
                name: "TicsMajor".to_string()
            }
        );
    }

    #[test]
    fn reset_discards_in_place_edits() {
        let store = ConfigStore::new();
        let mut profile = Profile::new(&store);
        profile.set_grid_unit(120.0);
        profile
            .line_properties_mut(LineCategory::GridLines)
            .set_draw(false);

        profile.reset(&store);
        assert_eq!(profile.grid_unit(), 65.0);
        assert!(profile.line_properties(LineCategory::GridLines).draw());
    }

    #[test]
    fn apply_persists_edits() {
        let mut store = ConfigStore::new();
        let mut profile = Profile::new(&store);
        profile.set_grid_unit(80.0);
        profile
            .line_properties_mut(LineCategory::MinorTics)
            .set_draw(false);
        profile.apply(&mut store);

        let reloaded = Profile::new(&store);
        assert_eq!(reloaded.grid_unit(), 80.0);
        assert!(!reloaded.line_properties(LineCategory::MinorTics).draw());
    }

    #[test]
    fn properties_export_groups_by_class() {
        let store = ConfigStore::new();
        let profile = Profile::new(&store);
        let lines = profile.properties();
        assert!(lines[0].starts_with("gridUnit:"));
        assert!(lines.contains(&"class: Axes".to_string()));
        assert!(lines.contains(&"class: MinorTics".to_string()));
        // Axes carry no draw/length/spacing entries.
        let axes_at = lines.iter().position(|l| l == "class: Axes").unwrap();
        let next_class = lines[axes_at + 1..]
            .iter()
            .position(|l| l.starts_with("class:"))
            .unwrap();
        let axes_fields = &lines[axes_at + 1..axes_at + 1 + next_class];
        assert!(axes_fields.iter().all(|l| {
            l.starts_with("color:") || l.starts_with("stroke:")
        }));
    }

    #[test]
    fn exported_keys_are_camel_case() {
        let store = ConfigStore::new();
        let profile = Profile::new(&store);
        let lines = profile.properties();
        assert!(lines.iter().any(|l| l.starts_with("fontName:")));
        assert!(lines.iter().any(|l| l.starts_with("fontSize:")));
        assert!(lines.iter().any(|l| l.starts_with("fontStyle:")));
        for line in &lines {
            let key = line.split(':').next().unwrap();
            assert!(!key.contains('_'), "snake_case key in export: {line}");
        }
    }
}
