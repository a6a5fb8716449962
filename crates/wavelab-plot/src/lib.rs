//! Wavelab Plot - figure construction and multi-format export.
//!
//! A small plotting layer for research figures:
//!
//! - [`figure`] - Figure and series model with de-duplicated legends
//! - [`style`] - TOML-loadable style presets (grid, color cycle, sizing)
//! - [`hatch`] - Hatch-pattern assignment for black & white printable bars
//! - [`render`] - SVG and CSV renderers
//! - [`writer`] - [`FigureWriter`] exporting one figure to several formats
//!
//! Figures render to hand-written SVG text; raster (PNG) and PDF output
//! are produced by handing the SVG to an external converter command.
//!
//! ## Example
//!
//! ```rust,ignore
//! use wavelab_plot::{Figure, FigureFormat, FigureWriter, PlotStyle, Series};
//!
//! let mut fig = Figure::new("Impulse response");
//! fig.push(Series::line("measured", points));
//!
//! let writer = FigureWriter::new("figures", vec![FigureFormat::Svg, FigureFormat::Csv]);
//! writer.write("ir/measured", &fig, &PlotStyle::paper(0.7))?;
//! ```

mod error;
pub mod figure;
pub mod hatch;
pub mod render;
pub mod style;
mod writer;

pub use error::PlotError;
pub use figure::{Figure, Series};
pub use hatch::{DEFAULT_HATCHES, assign_hatches};
pub use render::{render_csv, render_svg};
pub use style::{GOLDEN_RATIO, PlotStyle};
pub use writer::{FigureFormat, FigureWriter};

/// Convenience result type for plotting operations.
pub type Result<T> = std::result::Result<T, PlotError>;
