//! Multi-format figure export.

use crate::figure::Figure;
use crate::render::{render_csv, render_svg};
use crate::style::PlotStyle;
use crate::{PlotError, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use wavelab_core::invoke_command;

/// Output formats a [`FigureWriter`] can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureFormat {
    /// Native SVG output.
    Svg,
    /// Raw series data in long CSV format.
    Csv,
    /// Raster output via the external converter.
    Png,
    /// Vector output via the external converter.
    Pdf,
}

impl FigureFormat {
    /// File extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            FigureFormat::Svg => "svg",
            FigureFormat::Csv => "csv",
            FigureFormat::Png => "png",
            FigureFormat::Pdf => "pdf",
        }
    }

    /// Whether producing this format needs the external converter.
    fn needs_converter(self) -> bool {
        matches!(self, FigureFormat::Png | FigureFormat::Pdf)
    }
}

impl std::fmt::Display for FigureFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for FigureFormat {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "svg" => Ok(FigureFormat::Svg),
            "csv" => Ok(FigureFormat::Csv),
            "png" => Ok(FigureFormat::Png),
            "pdf" => Ok(FigureFormat::Pdf),
            other => Err(PlotError::UnknownFormat(other.to_string())),
        }
    }
}

/// Writes figures below a root directory in several formats at once.
///
/// The file name passed to [`FigureWriter::write`] may contain
/// subdirectories; missing ones are created. PNG and PDF are produced by
/// rendering SVG first and handing it to a converter command template in
/// which `{input}`, `{output}`, and `{format}` are substituted, e.g.
/// `rsvg-convert -f {format} -o {output} {input}`.
#[derive(Debug, Clone)]
pub struct FigureWriter {
    figures_root: PathBuf,
    formats: Vec<FigureFormat>,
    converter: Option<String>,
}

impl FigureWriter {
    /// Create a writer for the given root and output formats.
    pub fn new(figures_root: impl Into<PathBuf>, formats: Vec<FigureFormat>) -> Self {
        Self {
            figures_root: figures_root.into(),
            formats,
            converter: None,
        }
    }

    /// Set the converter command template used for PNG and PDF output.
    pub fn with_converter(mut self, template: impl Into<String>) -> Self {
        self.converter = Some(template.into());
        self
    }

    /// The root directory figures are written below.
    pub fn figures_root(&self) -> &Path {
        &self.figures_root
    }

    /// Write `figure` as `figures_root/file_name.ext` for every
    /// configured format, creating parent directories as needed.
    /// Returns the paths written.
    pub fn write(
        &self,
        file_name: &str,
        figure: &Figure,
        style: &PlotStyle,
    ) -> Result<Vec<PathBuf>> {
        let base = self.figures_root.join(file_name);
        if let Some(parent) = base.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| PlotError::create_dir(parent, e))?;
        }

        // Converter formats reuse one SVG rendering.
        let svg = render_svg(figure, style);
        let mut written = Vec::with_capacity(self.formats.len());

        for &format in &self.formats {
            let path = base.with_extension(format.extension());
            match format {
                FigureFormat::Svg => {
                    std::fs::write(&path, &svg).map_err(|e| PlotError::write_file(&path, e))?;
                }
                FigureFormat::Csv => {
                    std::fs::write(&path, render_csv(figure))
                        .map_err(|e| PlotError::write_file(&path, e))?;
                }
                FigureFormat::Png | FigureFormat::Pdf => {
                    self.convert(&base, &path, format, &svg)?;
                }
            }
            written.push(path);
        }

        Ok(written)
    }

    /// Produce a converter-backed format from rendered SVG text.
    fn convert(
        &self,
        base: &Path,
        output: &Path,
        format: FigureFormat,
        svg: &str,
    ) -> Result<()> {
        debug_assert!(format.needs_converter());
        let Some(template) = &self.converter else {
            return Err(PlotError::ConverterRequired { format });
        };

        // The converter reads from a file; stage the SVG next to the
        // output unless it is being written anyway.
        let svg_path = base.with_extension("svg");
        let staged = !self.formats.contains(&FigureFormat::Svg);
        if staged || !svg_path.exists() {
            std::fs::write(&svg_path, svg).map_err(|e| PlotError::write_file(&svg_path, e))?;
        }

        let command = template
            .replace("{input}", &svg_path.display().to_string())
            .replace("{output}", &output.display().to_string())
            .replace("{format}", format.extension());
        let result = invoke_command(&command);

        if staged {
            let _ = std::fs::remove_file(&svg_path);
        }
        result?;
        Ok(())
    }
}
