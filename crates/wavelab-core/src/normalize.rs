//! Sample buffer normalization.
//!
//! WAV files store samples in several encodings - signed integers of
//! various widths, unsigned 8-bit, or IEEE floats. These helpers
//! standardize any of them to `f32` in a nominal [-1, 1] range without
//! changing the sound level: integer data is scaled by the maximum
//! positive value of its type, float data passes through unmodified.

use crate::{Error, Result};

/// A raw sample buffer as produced by a WAV loader, before level
/// standardization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawSamples {
    /// 32-bit IEEE float samples (already normalized).
    F32(Vec<f32>),
    /// 64-bit IEEE float samples.
    F64(Vec<f64>),
    /// Unsigned 8-bit PCM (offset binary in WAV files).
    U8(Vec<u8>),
    /// Signed 16-bit PCM.
    I16(Vec<i16>),
    /// Signed 32-bit PCM.
    I32(Vec<i32>),
}

impl RawSamples {
    /// Number of samples in the buffer.
    pub fn len(&self) -> usize {
        match self {
            RawSamples::F32(v) => v.len(),
            RawSamples::F64(v) => v.len(),
            RawSamples::U8(v) => v.len(),
            RawSamples::I16(v) => v.len(),
            RawSamples::I32(v) => v.len(),
        }
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Standardize a raw sample buffer to `f32`.
///
/// Float variants are returned as-is (`F64` narrowed to `f32`); integer
/// variants are divided by the maximum positive value of their type, so
/// a full-scale integer signal maps to ±1.0. Note that unsigned 8-bit
/// data is scaled by 255 without recentering, matching the historical
/// behavior of this helper; use [`normalize_pcm`] on sign-extended words
/// when a zero-centered result is needed.
pub fn normalize(raw: &RawSamples) -> Vec<f32> {
    match raw {
        RawSamples::F32(v) => v.clone(),
        RawSamples::F64(v) => v.iter().map(|&s| s as f32).collect(),
        RawSamples::U8(v) => v.iter().map(|&s| f32::from(s) / f32::from(u8::MAX)).collect(),
        RawSamples::I16(v) => v.iter().map(|&s| f32::from(s) / f32::from(i16::MAX)).collect(),
        RawSamples::I32(v) => v.iter().map(|&s| s as f32 / i32::MAX as f32).collect(),
    }
}

/// Scale sign-extended PCM words to `f32` in [-1, 1).
///
/// `hound` yields all integer formats as sign-extended `i32` values;
/// the scale factor depends on the declared bit depth. Bit depths other
/// than 8, 16, 24, or 32 fail with [`Error::UnsupportedBitDepth`].
pub fn normalize_pcm(samples: &[i32], bits_per_sample: u16) -> Result<Vec<f32>> {
    if !matches!(bits_per_sample, 8 | 16 | 24 | 32) {
        return Err(Error::UnsupportedBitDepth(bits_per_sample));
    }
    let max_val = (1i64 << (bits_per_sample - 1)) as f32;
    Ok(samples.iter().map(|&s| s as f32 / max_val).collect())
}
