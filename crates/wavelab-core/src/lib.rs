//! Wavelab Core - signal-level helpers for audio research workflows.
//!
//! This crate provides the numeric building blocks shared by the rest of
//! the workspace:
//!
//! - [`normalize`] - Standardize raw sample buffers to `f32` without
//!   changing the sound level
//! - [`xcorr`] - Full-mode cross-correlation with lag axis and peak
//!   detection (direct and FFT implementations)
//! - [`align`] - Cross-correlation based time alignment of a signal to a
//!   reference, with sign correction and zero fill
//! - [`shell`] - Shell-command invocation with captured output
//!
//! ## Example
//!
//! ```rust,ignore
//! use wavelab_core::align_signals;
//!
//! // Shift-compensate a recording against a reference take
//! let aligned = align_signals(&recording, &reference);
//! assert_eq!(aligned.len(), recording.len());
//! ```

pub mod align;
pub mod normalize;
pub mod shell;
pub mod xcorr;

pub use align::{Alignment, align_signals, apply_alignment, estimate_alignment};
pub use normalize::{RawSamples, normalize, normalize_pcm};
pub use shell::invoke_command;
pub use xcorr::{peak_lag, xcorr_full, xcorr_full_fft};

/// Error types for core signal operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// PCM bit depth outside the supported 8/16/24/32 set.
    #[error("unsupported PCM bit depth: {0} (expected 8, 16, 24, or 32)")]
    UnsupportedBitDepth(u16),

    /// A shell command exited with a non-zero status.
    #[error("command exited with {status}: {stderr}")]
    CommandFailed {
        /// Exit status reported by the shell.
        status: std::process::ExitStatus,
        /// Captured standard error output.
        stderr: String,
    },

    /// Standard I/O error (e.g. the shell could not be spawned).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
