//! WAV file reading and writing.

use crate::Result;
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;
use wavelab_core::normalize_pcm;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// WAV file specification.
#[derive(Debug, Clone, Copy)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample (e.g., 8, 16, 24, 32).
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = reader.len() as u64; // total across all channels
    let num_frames = total_samples / u64::from(spec.channels);
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// Read a WAV file as normalized f32 samples along with its spec.
///
/// Float files pass through unchanged; integer PCM is standardized
/// through [`wavelab_core::normalize_pcm`] so the level is preserved
/// regardless of bit depth. Multi-channel files are mixed down to mono
/// by averaging channels.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, WavSpec)> {
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let channels = spec.channels as usize;

    let samples: Vec<f32> = match reader.spec().sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let raw = reader
                .into_samples::<i32>()
                .collect::<std::result::Result<Vec<_>, _>>()?;
            normalize_pcm(&raw, spec.bits_per_sample)?
        }
    };

    let mono = if channels > 1 {
        samples
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    Ok((mono, spec))
}

/// Write samples to a WAV file.
///
/// A 32-bit spec writes IEEE float; anything else is scaled and clamped
/// to integer PCM at the requested depth.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f32], spec: WavSpec) -> Result<()> {
    let mut mono_spec = spec;
    mono_spec.channels = 1;
    let mut writer = WavWriter::create(path, hound::WavSpec::from(mono_spec))?;

    if mono_spec.bits_per_sample == 32 {
        for &sample in samples {
            writer.write_sample(sample)?;
        }
    } else {
        let max_val = (1i32 << (mono_spec.bits_per_sample - 1)) as f32;
        for &sample in samples {
            let int_sample = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
            writer.write_sample(int_sample)?;
        }
    }

    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn ramp(n: usize) -> Vec<f32> {
        (0..n).map(|i| (i as f32 / n as f32) * 1.8 - 0.9).collect()
    }

    #[test]
    fn roundtrip_f32() {
        let samples = ramp(1000);
        let spec = WavSpec::default();

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &samples, spec).unwrap();

        let (loaded, loaded_spec) = read_wav(file.path()).unwrap();
        assert_eq!(loaded_spec.sample_rate, 48000);
        assert_eq!(loaded.len(), samples.len());
        for (a, b) in samples.iter().zip(loaded.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn roundtrip_i16_preserves_level() {
        let samples = ramp(1000);
        let spec = WavSpec {
            sample_rate: 44100,
            bits_per_sample: 16,
            ..WavSpec::default()
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &samples, spec).unwrap();

        let (loaded, loaded_spec) = read_wav(file.path()).unwrap();
        assert_eq!(loaded_spec.bits_per_sample, 16);
        // 16-bit quantization error stays below one step
        for (a, b) in samples.iter().zip(loaded.iter()) {
            assert!((a - b).abs() < 0.001);
        }
    }

    #[test]
    fn roundtrip_i8() {
        let samples = ramp(200);
        let spec = WavSpec {
            bits_per_sample: 8,
            ..WavSpec::default()
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &samples, spec).unwrap();

        let (loaded, _) = read_wav(file.path()).unwrap();
        for (a, b) in samples.iter().zip(loaded.iter()) {
            assert!((a - b).abs() < 0.02);
        }
    }

    #[test]
    fn stereo_mixes_down_to_mono() {
        // Write an interleaved stereo file directly through hound.
        let file = NamedTempFile::new().unwrap();
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 48000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(file.path(), spec).unwrap();
        for _ in 0..100 {
            writer.write_sample(0.2f32).unwrap();
            writer.write_sample(0.6f32).unwrap();
        }
        writer.finalize().unwrap();

        let (mono, loaded_spec) = read_wav(file.path()).unwrap();
        assert_eq!(loaded_spec.channels, 2);
        assert_eq!(mono.len(), 100);
        for &s in &mono {
            assert!((s - 0.4).abs() < 1e-6);
        }
    }

    #[test]
    fn info_reports_duration_and_format() {
        let samples = ramp(48000);
        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &samples, WavSpec::default()).unwrap();

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.channels, 1);
        assert_eq!(info.num_frames, 48000);
        assert!((info.duration_secs - 1.0).abs() < 1e-9);
        assert_eq!(info.format, WavFormat::IeeeFloat);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_wav("definitely/not/here.wav").is_err());
    }
}
