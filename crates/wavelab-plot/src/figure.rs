//! Figure and series model.

/// A single plottable data series.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    /// A polyline through (x, y) points.
    Line {
        /// Legend label (empty labels are kept out of the legend).
        label: String,
        /// Data points in drawing order.
        points: Vec<(f64, f64)>,
    },
    /// A bar group, one bar per value, drawn at integer positions.
    Bars {
        /// Legend label.
        label: String,
        /// Bar heights.
        values: Vec<f64>,
        /// Explicit fill color; `None` falls back to the style's cycle.
        color: Option<String>,
    },
}

impl Series {
    /// Convenience constructor for a line series.
    pub fn line(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Series::Line {
            label: label.into(),
            points,
        }
    }

    /// Convenience constructor for a bar series.
    pub fn bars(label: impl Into<String>, values: Vec<f64>) -> Self {
        Series::Bars {
            label: label.into(),
            values,
            color: None,
        }
    }

    /// The series' legend label.
    pub fn label(&self) -> &str {
        match self {
            Series::Line { label, .. } | Series::Bars { label, .. } => label,
        }
    }
}

/// A figure: a titled collection of series plus axis labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    /// Figure title.
    pub title: String,
    /// X-axis label.
    pub x_label: String,
    /// Y-axis label.
    pub y_label: String,
    /// Plotted series, in draw order.
    pub series: Vec<Series>,
}

impl Figure {
    /// Create an empty figure with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the axis labels.
    pub fn with_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    /// Append a series.
    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Legend labels with duplicates filtered out, first occurrence wins.
    ///
    /// Overlaying related series often repeats a label (one entry per
    /// subplot-equivalent); the legend should show each label once.
    /// Empty labels never appear.
    pub fn legend_entries(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for s in &self.series {
            let label = s.label();
            if !label.is_empty() && !seen.contains(&label) {
                seen.push(label);
            }
        }
        seen
    }

    /// Data bounds as (x_min, x_max, y_min, y_max), `None` when no
    /// series holds any data. Bars contribute their integer positions on
    /// x and always include zero on y.
    pub fn data_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        let mut grow = |x: f64, y: f64| {
            let b = bounds.get_or_insert((x, x, y, y));
            b.0 = b.0.min(x);
            b.1 = b.1.max(x);
            b.2 = b.2.min(y);
            b.3 = b.3.max(y);
        };

        for s in &self.series {
            match s {
                Series::Line { points, .. } => {
                    for &(x, y) in points {
                        grow(x, y);
                    }
                }
                Series::Bars { values, .. } => {
                    for (i, &v) in values.iter().enumerate() {
                        grow(i as f64, v);
                        grow(i as f64, 0.0);
                    }
                }
            }
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_deduplicates_keeping_first() {
        let mut fig = Figure::new("t");
        fig.push(Series::line("a", vec![(0.0, 0.0)]));
        fig.push(Series::line("b", vec![(0.0, 0.0)]));
        fig.push(Series::line("a", vec![(1.0, 1.0)]));
        fig.push(Series::line("b", vec![(1.0, 1.0)]));
        assert_eq!(fig.legend_entries(), vec!["a", "b"]);
    }

    #[test]
    fn empty_labels_stay_out_of_legend() {
        let mut fig = Figure::new("t");
        fig.push(Series::line("", vec![(0.0, 0.0)]));
        fig.push(Series::line("x", vec![(0.0, 0.0)]));
        assert_eq!(fig.legend_entries(), vec!["x"]);
    }

    #[test]
    fn empty_figure_has_no_legend_or_bounds() {
        let fig = Figure::new("t");
        assert!(fig.legend_entries().is_empty());
        assert!(fig.data_bounds().is_none());
    }

    #[test]
    fn bounds_cover_lines_and_bars() {
        let mut fig = Figure::new("t");
        fig.push(Series::line("l", vec![(-2.0, 5.0), (3.0, -1.0)]));
        fig.push(Series::bars("b", vec![7.0, -3.0]));
        let (x0, x1, y0, y1) = fig.data_bounds().unwrap();
        assert_eq!((x0, x1), (-2.0, 3.0));
        assert_eq!((y0, y1), (-3.0, 7.0));
    }

    #[test]
    fn bar_bounds_include_zero() {
        let mut fig = Figure::new("t");
        fig.push(Series::bars("b", vec![2.0, 4.0]));
        let (_, _, y0, _) = fig.data_bounds().unwrap();
        assert_eq!(y0, 0.0);
    }
}
