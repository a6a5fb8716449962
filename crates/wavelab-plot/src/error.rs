//! Error types for plotting operations.

use crate::writer::FigureFormat;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or exporting figures.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a TOML style preset
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize a TOML style preset
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A format requiring an external converter was requested without one
    #[error("format '{format}' requires a converter command (see FigureWriter::with_converter)")]
    ConverterRequired {
        /// The format that could not be produced.
        format: FigureFormat,
    },

    /// The external converter command failed
    #[error("converter failed: {0}")]
    Converter(#[from] wavelab_core::Error),

    /// Unrecognized figure format name
    #[error("unknown figure format: {0} (expected svg, csv, png, or pdf)")]
    UnknownFormat(String),
}

impl PlotError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlotError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlotError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlotError::CreateDir {
            path: path.into(),
            source,
        }
    }
}
