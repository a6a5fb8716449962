//! SVG and CSV renderers for figures.
//!
//! Renderers return text; [`crate::FigureWriter`] is responsible for
//! putting it on disk. Keeping them pure makes the output testable
//! without touching the filesystem.

use crate::figure::{Figure, Series};
use crate::hatch::{DEFAULT_HATCHES, assign_hatches, hatch_pattern_id, hatch_svg_pattern};
use crate::style::PlotStyle;
use std::fmt::Write;

const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 28.0;
const MARGIN_BOTTOM: f64 = 40.0;
const TICKS: usize = 5;

/// Escape text for SVG/XML content.
fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Compact tick label: two decimals with trailing zeros trimmed.
fn format_tick(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Maps data coordinates into the pixel plot area (y grows downward).
struct Mapper {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
    left: f64,
    top: f64,
    w: f64,
    h: f64,
}

impl Mapper {
    fn new(bounds: (f64, f64, f64, f64), style: &PlotStyle) -> Self {
        let (mut x0, mut x1, mut y0, mut y1) = bounds;
        // Degenerate ranges would divide by zero; widen them symmetrically.
        if x1 - x0 < f64::EPSILON {
            x0 -= 0.5;
            x1 += 0.5;
        }
        if y1 - y0 < f64::EPSILON {
            y0 -= 0.5;
            y1 += 0.5;
        }
        Self {
            x0,
            x1,
            y0,
            y1,
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            w: f64::from(style.width) - MARGIN_LEFT - MARGIN_RIGHT,
            h: f64::from(style.height) - MARGIN_TOP - MARGIN_BOTTOM,
        }
    }

    fn px(&self, x: f64, y: f64) -> (f64, f64) {
        let fx = (x - self.x0) / (self.x1 - self.x0);
        let fy = (y - self.y0) / (self.y1 - self.y0);
        (self.left + fx * self.w, self.top + (1.0 - fy) * self.h)
    }
}

/// Fill color for the `idx`-th series.
fn series_color<'a>(series: &'a Series, idx: usize, style: &'a PlotStyle) -> &'a str {
    match series {
        Series::Bars {
            color: Some(c), ..
        } => c,
        _ => style.color(idx),
    }
}

/// Render a figure to an SVG document.
///
/// Axes, optional dotted grid, color-cycled polylines, white-edged
/// hatched bars, and a de-duplicated legend, all controlled by the
/// style. An empty figure renders to a blank canvas with the title.
pub fn render_svg(figure: &Figure, style: &PlotStyle) -> String {
    let mut svg = String::new();
    let fs = style.font_size;

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = style.width,
        h = style.height
    );
    let _ = writeln!(
        svg,
        r#"<rect width="{}" height="{}" fill="white"/>"#,
        style.width, style.height
    );

    if !figure.title.is_empty() {
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="{:.1}" font-family="serif">{}</text>"#,
            f64::from(style.width) / 2.0,
            MARGIN_TOP / 2.0 + fs / 2.0,
            fs * 1.2,
            xml_escape(&figure.title)
        );
    }

    let Some(bounds) = figure.data_bounds() else {
        svg.push_str("</svg>\n");
        return svg;
    };
    let map = Mapper::new(bounds, style);

    // Hatch assignment: one fill color per bar series, colors bound to
    // hatches in encounter order.
    let bar_colors: Vec<String> = figure
        .series
        .iter()
        .enumerate()
        .filter(|(_, s)| matches!(s, Series::Bars { .. }))
        .map(|(i, s)| series_color(s, i, style).to_string())
        .collect();
    let bar_hatches = assign_hatches(&bar_colors, &DEFAULT_HATCHES);

    // Pattern definitions for the hatches actually used.
    let mut defined: Vec<&str> = Vec::new();
    for hatch in &bar_hatches {
        if let Some(content) = hatch_svg_pattern(hatch)
            && !defined.contains(&hatch.as_str())
        {
            if defined.is_empty() {
                svg.push_str("<defs>\n");
            }
            let _ = writeln!(
                svg,
                r#"<pattern id="{}" width="6" height="6" patternUnits="userSpaceOnUse">{}</pattern>"#,
                hatch_pattern_id(hatch),
                content
            );
            defined.push(hatch);
        }
    }
    if !defined.is_empty() {
        svg.push_str("</defs>\n");
    }

    // Grid and tick labels.
    for t in 0..=TICKS {
        let f = t as f64 / TICKS as f64;
        let xv = map.x0 + f * (map.x1 - map.x0);
        let yv = map.y0 + f * (map.y1 - map.y0);
        let (gx, _) = map.px(xv, map.y0);
        let (_, gy) = map.px(map.x0, yv);
        let dash = if style.grid_dotted {
            r#" stroke-dasharray="1,3""#
        } else {
            ""
        };

        if style.grid {
            let _ = writeln!(
                svg,
                r#"<line x1="{gx:.1}" y1="{:.1}" x2="{gx:.1}" y2="{:.1}" stroke="{}" stroke-width="0.8" opacity="0.5"{dash}/>"#,
                map.top,
                map.top + map.h,
                style.grid_color
            );
            let _ = writeln!(
                svg,
                r#"<line x1="{:.1}" y1="{gy:.1}" x2="{:.1}" y2="{gy:.1}" stroke="{}" stroke-width="0.8" opacity="0.5"{dash}/>"#,
                map.left,
                map.left + map.w,
                style.grid_color
            );
        }

        let _ = writeln!(
            svg,
            r#"<text x="{gx:.1}" y="{:.1}" text-anchor="middle" font-size="{fs:.1}" font-family="serif">{}</text>"#,
            map.top + map.h + fs + 4.0,
            format_tick(xv)
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{gy:.1}" text-anchor="end" font-size="{fs:.1}" font-family="serif">{}</text>"#,
            map.left - 4.0,
            format_tick(yv)
        );
    }

    // Spines: left and bottom always, top and right per style.
    let (x_lo, x_hi) = (map.left, map.left + map.w);
    let (y_lo, y_hi) = (map.top, map.top + map.h);
    let mut spines = vec![
        (x_lo, y_lo, x_lo, y_hi), // left
        (x_lo, y_hi, x_hi, y_hi), // bottom
    ];
    if style.top_spine {
        spines.push((x_lo, y_lo, x_hi, y_lo));
    }
    if style.right_spine {
        spines.push((x_hi, y_lo, x_hi, y_hi));
    }
    for (x1, y1, x2, y2) in spines {
        let _ = writeln!(
            svg,
            r#"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="black" stroke-width="0.8"/>"#
        );
    }

    // Series.
    let mut bar_seen = 0usize;
    for (idx, series) in figure.series.iter().enumerate() {
        let color = series_color(series, idx, style);
        match series {
            Series::Line { points, .. } => {
                if points.is_empty() {
                    continue;
                }
                let mut path = String::new();
                for &(x, y) in points {
                    let (px, py) = map.px(x, y);
                    let _ = write!(path, "{px:.1},{py:.1} ");
                }
                let _ = writeln!(
                    svg,
                    r#"<polyline points="{}" fill="none" stroke="{color}" stroke-width="{:.2}"/>"#,
                    path.trim_end(),
                    style.line_width
                );
            }
            Series::Bars { values, .. } => {
                let hatch = &bar_hatches[bar_seen];
                bar_seen += 1;
                let slot = map.w / (map.x1 - map.x0).max(1.0);
                let bar_w = slot * 0.8;
                for (i, &v) in values.iter().enumerate() {
                    let (cx, top_y) = map.px(i as f64, v.max(0.0));
                    let (_, base_y) = map.px(i as f64, v.min(0.0));
                    let x = cx - bar_w / 2.0;
                    let h = (base_y - top_y).abs();
                    let _ = writeln!(
                        svg,
                        r#"<rect x="{x:.1}" y="{top_y:.1}" width="{bar_w:.1}" height="{h:.1}" fill="{color}" stroke="white" stroke-width="1"/>"#
                    );
                    if hatch_svg_pattern(hatch).is_some() {
                        let _ = writeln!(
                            svg,
                            r#"<rect x="{x:.1}" y="{top_y:.1}" width="{bar_w:.1}" height="{h:.1}" fill="url(#{})" stroke="none"/>"#,
                            hatch_pattern_id(hatch)
                        );
                    }
                }
            }
        }
    }

    // Axis labels.
    if !figure.x_label.is_empty() {
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="{fs:.1}" font-family="serif">{}</text>"#,
            map.left + map.w / 2.0,
            f64::from(style.height) - 6.0,
            xml_escape(&figure.x_label)
        );
    }
    if !figure.y_label.is_empty() {
        let cy = map.top + map.h / 2.0;
        let _ = writeln!(
            svg,
            r#"<text x="12" y="{cy:.1}" text-anchor="middle" font-size="{fs:.1}" font-family="serif" transform="rotate(-90 12 {cy:.1})">{}</text>"#,
            xml_escape(&figure.y_label)
        );
    }

    // Legend: de-duplicated labels, swatch colored like the first series
    // carrying the label.
    let entries = figure.legend_entries();
    if !entries.is_empty() {
        let row = fs * 1.4;
        let lx = map.left + map.w - 110.0;
        let ly = map.top + 8.0;
        if style.legend_frame {
            let _ = writeln!(
                svg,
                r#"<rect x="{:.1}" y="{:.1}" width="106" height="{:.1}" fill="white" stroke="black" stroke-width="0.5"/>"#,
                lx - 4.0,
                ly - 4.0,
                entries.len() as f64 * row + 4.0
            );
        }
        for (e, label) in entries.iter().enumerate() {
            let color = figure
                .series
                .iter()
                .enumerate()
                .find(|(_, s)| s.label() == *label)
                .map_or("#000000", |(i, s)| series_color(s, i, style));
            let y = ly + e as f64 * row + fs / 2.0;
            let _ = writeln!(
                svg,
                r#"<line x1="{lx:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{color}" stroke-width="2"/>"#,
                lx + 18.0
            );
            let _ = writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" font-size="{fs:.1}" font-family="serif">{}</text>"#,
                lx + 24.0,
                y + fs / 3.0,
                xml_escape(label)
            );
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Render a figure's data to CSV in long format.
///
/// Columns: `series,index,x,y`. Bar series use the bar position as x.
pub fn render_csv(figure: &Figure) -> String {
    let mut csv = String::from("series,index,x,y\n");
    for series in &figure.series {
        let label = series.label();
        match series {
            Series::Line { points, .. } => {
                for (i, &(x, y)) in points.iter().enumerate() {
                    let _ = writeln!(csv, "{label},{i},{x},{y}");
                }
            }
            Series::Bars { values, .. } => {
                for (i, &v) in values.iter().enumerate() {
                    let _ = writeln!(csv, "{label},{i},{i},{v}");
                }
            }
        }
    }
    csv
}
