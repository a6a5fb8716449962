//! WAV file I/O for the wavelab helpers.
//!
//! This crate wraps `hound` with the level-preserving normalization from
//! [`wavelab_core::normalize`]: whatever encoding a file uses, samples
//! come back as `f32` in a nominal [-1, 1] range.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wavelab_io::{read_wav, write_wav};
//!
//! let (samples, spec) = read_wav("take.wav")?;
//! let aligned = wavelab_core::align_signals(&samples, &reference);
//! write_wav("aligned.wav", &aligned, spec)?;
//! ```

mod wav;

pub use wav::{WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, write_wav};

/// Error types for WAV I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Sample normalization error (e.g. unsupported bit depth).
    #[error("normalization error: {0}")]
    Normalize(#[from] wavelab_core::Error),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for WAV I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
