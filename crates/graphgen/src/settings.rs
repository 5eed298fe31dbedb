use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// CSS named colors edges are painted with, as `#rrggbb`.
pub const CSS_PALETTE: &[&str] = &[
    "#f0f8ff", // aliceblue
    "#7fffd4", // aquamarine
    "#0000ff", // blue
    "#8a2be2", // blueviolet
    "#a52a2a", // brown
    "#5f9ea0", // cadetblue
    "#7fff00", // chartreuse
    "#d2691e", // chocolate
    "#ff7f50", // coral
    "#6495ed", // cornflowerblue
    "#dc143c", // crimson
    "#00008b", // darkblue
    "#b8860b", // darkgoldenrod
    "#006400", // darkgreen
    "#8b008b", // darkmagenta
    "#ff8c00", // darkorange
    "#9932cc", // darkorchid
    "#e9967a", // darksalmon
    "#2f4f4f", // darkslategray
    "#00ced1", // darkturquoise
    "#ff1493", // deeppink
    "#1e90ff", // dodgerblue
    "#b22222", // firebrick
    "#228b22", // forestgreen
    "#ff00ff", // fuchsia
    "#ffd700", // gold
    "#808080", // gray
    "#adff2f", // greenyellow
    "#ff69b4", // hotpink
    "#cd5c5c", // indianred
    "#4b0082", // indigo
    "#f0e68c", // khaki
    "#7cfc00", // lawngreen
    "#20b2aa", // lightseagreen
    "#32cd32", // limegreen
    "#800000", // maroon
    "#66cdaa", // mediumaquamarine
    "#ba55d3", // mediumorchid
    "#3cb371", // mediumseagreen
    "#191970", // midnightblue
    "#000080", // navy
    "#808000", // olive
    "#ffa500", // orange
    "#da70d6", // orchid
    "#98fb98", // palegreen
    "#db7093", // palevioletred
    "#cd853f", // peru
    "#dda0dd", // plum
    "#800080", // purple
    "#ff0000", // red
    "#4169e1", // royalblue
    "#8b4513", // saddlebrown
    "#fa8072", // salmon
    "#2e8b57", // seagreen
    "#a0522d", // sienna
    "#87ceeb", // skyblue
    "#6a5acd", // slateblue
    "#00ff7f", // springgreen
    "#4682b4", // steelblue
    "#d2b48c", // tan
    "#008080", // teal
    "#ff6347", // tomato
    "#40e0d0", // turquoise
    "#ee82ee", // violet
    "#f5deb3", // wheat
    "#9acd32", // yellowgreen
];

/// Parses `#rrggbb` (or `#rrggbbaa`).
pub fn parse_color(hex: &str) -> Option<Color32> {
    Color32::from_hex(hex.trim()).ok()
}

/// Visual style shared by every renderer.
///
/// All fields have defaults, so a style file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsStyle {
    pub title: String,
    /// Node radius in pixels.
    pub node_radius: f32,
    pub node_fill: String,
    pub node_stroke: String,
    /// Label font size in pixels.
    pub label_size: f32,
    pub caption_size: f32,
    /// Column the connection caption wraps at.
    pub caption_width: usize,
    pub background: String,
    pub palette: Vec<String>,
    /// Iterations of the spring layout.
    pub spring_iterations: usize,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            title: "Randomly Generated Graph with Colored Edges and Node Borders".to_string(),
            node_radius: 13.5,
            node_fill: "#add8e6".to_string(),
            node_stroke: "#000000".to_string(),
            label_size: 11.0,
            caption_size: 8.0,
            caption_width: 80,
            background: "#ffffff".to_string(),
            palette: CSS_PALETTE.iter().map(ToString::to_string).collect(),
            spring_iterations: 100,
        }
    }
}

impl SettingsStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_node_radius(mut self, radius: f32) -> Self {
        self.node_radius = radius;
        self
    }

    pub fn with_node_fill(mut self, color: impl Into<String>) -> Self {
        self.node_fill = color.into();
        self
    }

    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_spring_iterations(mut self, iterations: usize) -> Self {
        self.spring_iterations = iterations;
        self
    }

    pub fn node_fill_color(&self) -> Color32 {
        parse_color(&self.node_fill).unwrap_or(Color32::LIGHT_BLUE)
    }

    pub fn node_stroke_color(&self) -> Color32 {
        parse_color(&self.node_stroke).unwrap_or(Color32::BLACK)
    }

    pub fn background_color(&self) -> Color32 {
        parse_color(&self.background).unwrap_or(Color32::WHITE)
    }

    /// Palette entries that parse; [`Self::validate`] guarantees at least one.
    pub fn palette_colors(&self) -> Vec<Color32> {
        self.palette.iter().filter_map(|c| parse_color(c)).collect()
    }

    /// # Errors
    /// Returns [`RenderError::InvalidParameter`] for a non-positive size, an
    /// unparsable color or an empty palette.
    pub fn validate(&self) -> Result<(), RenderError> {
        for (name, value) in [
            ("node_radius", self.node_radius),
            ("label_size", self.label_size),
            ("caption_size", self.caption_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RenderError::invalid(
                    name,
                    format!("must be greater than 0 (got {value})"),
                ));
            }
        }
        if self.caption_width == 0 {
            return Err(RenderError::invalid("caption_width", "must be at least 1"));
        }
        for (name, value) in [
            ("node_fill", &self.node_fill),
            ("node_stroke", &self.node_stroke),
            ("background", &self.background),
        ] {
            if parse_color(value).is_none() {
                return Err(RenderError::invalid(
                    name,
                    format!("is not a #rrggbb color (got {value:?})"),
                ));
            }
        }
        if self.palette.is_empty() {
            return Err(RenderError::invalid("palette", "must list at least one color"));
        }
        if let Some(bad) = self.palette.iter().find(|c| parse_color(c).is_none()) {
            return Err(RenderError::invalid(
                "palette",
                format!("contains an invalid color {bad:?}"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_parses() {
        let style = SettingsStyle::default();
        assert!(style.validate().is_ok());
        assert_eq!(style.palette_colors().len(), CSS_PALETTE.len());
        assert_eq!(style.node_fill_color(), Color32::from_rgb(0xad, 0xd8, 0xe6));
    }

    #[test]
    fn bad_colors_are_reported_by_name() {
        let err = SettingsStyle::new()
            .with_node_fill("lightblue")
            .validate()
            .expect_err("names are not hex");
        assert!(err.to_string().starts_with("node_fill"));

        let err = SettingsStyle::new()
            .with_palette(Vec::<String>::new())
            .validate()
            .expect_err("empty palette");
        assert!(err.to_string().starts_with("palette"));
    }
}
