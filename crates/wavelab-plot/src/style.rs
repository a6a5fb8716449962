//! Plot style presets.
//!
//! A [`PlotStyle`] captures the cosmetic choices a figure is rendered
//! with. Styles serialize to TOML so a preferred preset can live next to
//! a paper's sources and be loaded per project.

use crate::{PlotError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// (1 + √5) / 2 — useful for figure aspect ratios.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// The classic 10-color qualitative cycle.
const TAB10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Cosmetic settings for rendering a figure.
///
/// # TOML Format
///
/// ```toml
/// width = 640
/// height = 396
/// grid = true
/// grid_color = "gray"
/// grid_dotted = true
/// line_width = 0.8
/// font_size = 10.0
/// legend_frame = false
/// top_spine = false
/// right_spine = false
/// color_cycle = ["#1f77b4", "#ff7f0e"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Whether to draw a background grid.
    pub grid: bool,
    /// Grid line color.
    pub grid_color: String,
    /// Whether grid lines are dotted rather than solid.
    pub grid_dotted: bool,
    /// Stroke width for line series.
    pub line_width: f64,
    /// Base font size in points.
    pub font_size: f64,
    /// Whether the legend gets a frame box.
    pub legend_frame: bool,
    /// Whether to draw the top axis spine.
    pub top_spine: bool,
    /// Whether to draw the right axis spine.
    pub right_spine: bool,
    /// Series color cycle (hex or named colors).
    pub color_cycle: Vec<String>,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 640,
            height: (640.0 / GOLDEN_RATIO) as u32,
            grid: false,
            grid_color: "gray".to_string(),
            grid_dotted: true,
            line_width: 1.5,
            font_size: 12.0,
            legend_frame: true,
            top_spine: true,
            right_spine: true,
            color_cycle: TAB10.iter().map(|&c| c.to_string()).collect(),
        }
    }
}

impl PlotStyle {
    /// Academic paper preset: dotted gray grid, thin lines, frameless
    /// legend, hidden top/right spines. `font_scale` multiplies the base
    /// font size (0.7 is a sensible default for two-column layouts).
    pub fn paper(font_scale: f64) -> Self {
        Self {
            grid: true,
            line_width: 0.8,
            font_size: 12.0 * font_scale,
            legend_frame: false,
            top_spine: false,
            right_spine: false,
            ..Self::default()
        }
    }

    /// Parse a style from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a style preset from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| PlotError::read_file(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Save this style as a TOML preset.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text).map_err(|e| PlotError::write_file(path, e))
    }

    /// Color for the `idx`-th series, cycling through the palette.
    pub fn color(&self, idx: usize) -> &str {
        if self.color_cycle.is_empty() {
            "#000000"
        } else {
            &self.color_cycle[idx % self.color_cycle.len()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paper_preset_matches_expectations() {
        let style = PlotStyle::paper(0.7);
        assert!(style.grid);
        assert!(!style.legend_frame);
        assert!(!style.top_spine);
        assert!(!style.right_spine);
        assert!((style.font_size - 8.4).abs() < 1e-9);
        assert!((style.line_width - 0.8).abs() < 1e-9);
    }

    #[test]
    fn color_cycle_wraps() {
        let style = PlotStyle::default();
        assert_eq!(style.color(0), "#1f77b4");
        assert_eq!(style.color(10), "#1f77b4");
        assert_eq!(style.color(11), "#ff7f0e");
    }

    #[test]
    fn toml_roundtrip() {
        let style = PlotStyle::paper(1.0);
        let text = toml::to_string_pretty(&style).unwrap();
        let back = PlotStyle::from_toml_str(&text).unwrap();
        assert_eq!(style, back);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let style = PlotStyle::from_toml_str("grid = true\nline_width = 0.5\n").unwrap();
        assert!(style.grid);
        assert!((style.line_width - 0.5).abs() < 1e-9);
        assert_eq!(style.width, 640);
        assert_eq!(style.color_cycle.len(), 10);
    }

    #[test]
    fn golden_ratio_value() {
        assert!((GOLDEN_RATIO - (1.0 + 5.0f64.sqrt()) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn load_missing_file_names_path() {
        let err = PlotStyle::load("/no/such/style.toml").unwrap_err();
        assert!(err.to_string().contains("/no/such/style.toml"), "got: {err}");
    }
}
