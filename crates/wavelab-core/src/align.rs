//! Cross-correlation based time alignment.
//!
//! Given a signal and a reference of possibly different lengths, estimate
//! the lag and sign that maximize their correlation magnitude, then shift
//! (and negate, if the best match is anti-phase) the signal so it lines
//! up with the reference. Positions that no source sample maps to are
//! left at exactly zero.
//!
//! Typical use is compensating the unknown capture offset between two
//! recordings of the same material, e.g. a processed take versus the dry
//! reference.

use crate::xcorr::{peak_lag, xcorr_full, xcorr_full_fft};

/// Above this combined length the FFT correlation path is used; below
/// it the direct sum is cheaper than planning transforms.
const FFT_THRESHOLD: usize = 4096;

/// Estimated offset of a signal relative to a reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alignment {
    /// Lag in samples: the signal matches the reference delayed by this
    /// many samples. Positive means the signal starts late.
    pub lag: i64,
    /// Whether the best match was with the signal negated (anti-phase).
    pub inverted: bool,
    /// Correlation value at the peak (signed).
    pub peak: f32,
}

/// Estimate the lag and sign aligning `x` to `x_ref`.
///
/// Computes the full cross-correlation of `x` against `x_ref` (FFT path
/// for large inputs) and picks the lag of maximum absolute value. If
/// either input is empty the result is the identity alignment.
pub fn estimate_alignment(x: &[f32], x_ref: &[f32]) -> Alignment {
    if x.is_empty() || x_ref.is_empty() {
        return Alignment {
            lag: 0,
            inverted: false,
            peak: 0.0,
        };
    }

    let corr = if x.len() + x_ref.len() > FFT_THRESHOLD {
        xcorr_full_fft(x, x_ref)
    } else {
        xcorr_full(x, x_ref)
    };
    let (lag, peak) = peak_lag(&corr, x_ref.len());

    Alignment {
        lag,
        inverted: peak < 0.0,
        peak,
    }
}

/// Shift and sign-correct `x` according to an [`Alignment`].
///
/// Returns a zero-initialized buffer of `x.len()` with
/// `out[n] = s · x[n + lag]` wherever `n + lag` falls inside `x`
/// (`s = -1` when inverted). The non-overlapping region stays zero.
pub fn apply_alignment(x: &[f32], alignment: &Alignment) -> Vec<f32> {
    let mut out = vec![0.0f32; x.len()];
    let sign = if alignment.inverted { -1.0f32 } else { 1.0 };

    for (n, slot) in out.iter_mut().enumerate() {
        let m = n as i64 + alignment.lag;
        if m >= 0 && (m as usize) < x.len() {
            *slot = sign * x[m as usize];
        }
    }

    out
}

/// Align `x` to `x_ref`: [`estimate_alignment`] + [`apply_alignment`].
///
/// The output always has the length of `x`.
pub fn align_signals(x: &[f32], x_ref: &[f32]) -> Vec<f32> {
    let alignment = estimate_alignment(x, x_ref);
    apply_alignment(x, &alignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Simple reproducible PRNG for white noise.
    fn white_noise(n: usize, seed: u32) -> Vec<f32> {
        let mut state = seed;
        (0..n)
            .map(|_| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                (state as i32 as f32) / (i32::MAX as f32)
            })
            .collect()
    }

    #[test]
    fn self_alignment_is_identity() {
        let x = white_noise(500, 7);
        let alignment = estimate_alignment(&x, &x);
        assert_eq!(alignment.lag, 0);
        assert!(!alignment.inverted);
        assert_eq!(align_signals(&x, &x), x);
    }

    #[test]
    fn late_signal_is_pulled_forward() {
        // x is the reference delayed by 25 samples
        let x_ref = white_noise(400, 11);
        let delay = 25usize;
        let mut x = vec![0.0f32; x_ref.len()];
        x[delay..].copy_from_slice(&x_ref[..x_ref.len() - delay]);

        let alignment = estimate_alignment(&x, &x_ref);
        assert_eq!(alignment.lag, delay as i64);

        let aligned = align_signals(&x, &x_ref);
        for (n, (&a, &r)) in aligned.iter().zip(x_ref.iter()).enumerate() {
            assert!(
                (a - r).abs() < 1e-6 || a == 0.0,
                "sample {n}: aligned={a}, ref={r}"
            );
        }
        // Tail past the overlap stays zero
        assert!(aligned[x_ref.len() - delay..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn early_signal_is_pushed_back() {
        // x is the reference advanced by 25 samples
        let x_ref = white_noise(400, 13);
        let advance = 25usize;
        let mut x = vec![0.0f32; x_ref.len()];
        x[..x_ref.len() - advance].copy_from_slice(&x_ref[advance..]);

        let alignment = estimate_alignment(&x, &x_ref);
        assert_eq!(alignment.lag, -(advance as i64));

        let aligned = align_signals(&x, &x_ref);
        for (n, (&a, &r)) in aligned.iter().zip(x_ref.iter()).enumerate() {
            assert!(
                (a - r).abs() < 1e-6 || a == 0.0,
                "sample {n}: aligned={a}, ref={r}"
            );
        }
        // Leading gap stays zero
        assert!(aligned[..advance].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn inverted_signal_is_negated_back() {
        let x_ref = white_noise(300, 17);
        let x: Vec<f32> = x_ref.iter().map(|&v| -v).collect();

        let alignment = estimate_alignment(&x, &x_ref);
        assert_eq!(alignment.lag, 0);
        assert!(alignment.inverted);

        let aligned = align_signals(&x, &x_ref);
        for (&a, &r) in aligned.iter().zip(x_ref.iter()) {
            assert!((a - r).abs() < 1e-6);
        }
    }

    #[test]
    fn output_length_follows_input() {
        let x = white_noise(250, 19);
        let x_ref = white_noise(700, 23);
        assert_eq!(align_signals(&x, &x_ref).len(), x.len());
        assert_eq!(align_signals(&x_ref, &x).len(), x_ref.len());
    }

    #[test]
    fn empty_inputs_are_graceful() {
        let x = white_noise(10, 29);
        assert!(align_signals(&[], &x).is_empty());
        assert_eq!(align_signals(&x, &[]), x);
        let alignment = estimate_alignment(&x, &[]);
        assert_eq!(alignment.lag, 0);
        assert!(!alignment.inverted);
    }

    #[test]
    fn large_inputs_take_fft_path() {
        // Combined length above the threshold exercises xcorr_full_fft.
        let x_ref = white_noise(3000, 31);
        let delay = 111usize;
        let mut x = vec![0.0f32; x_ref.len() + delay];
        x[delay..].copy_from_slice(&x_ref);

        let alignment = estimate_alignment(&x, &x_ref);
        assert_eq!(alignment.lag, delay as i64);
        assert!(!alignment.inverted);
    }
}
