//! Full-mode cross-correlation with lag axis and peak detection.
//!
//! Cross-correlation measures the similarity of two signals as a function
//! of the time shift (lag) applied to one of them. The aligner in
//! [`crate::align`] uses it to estimate by how many samples a recording is
//! offset from a reference.
//!
//! # Conventions
//!
//! Both implementations here compute the *full* correlation, covering
//! every lag at which the two signals overlap by at least one sample:
//!
//! ```text
//! R(τ) = Σ_{n} x[n + τ] · y[n],    τ ∈ [-(len_y - 1), len_x - 1]
//! ```
//!
//! The output has length `len_x + len_y - 1` and entry `i` holds
//! `R(i - (len_y - 1))`. A peak at positive τ means x contains y delayed
//! by τ samples.
//!
//! # FFT-based computation
//!
//! For long signals the O(len_x · len_y) direct sum is expensive. The FFT
//! method exploits the correlation theorem:
//!
//! ```text
//! R = IFFT( FFT(x) · conj(FFT(y)) )
//! ```
//!
//! with zero-padding to avoid circular wrap-around.
//!
//! # References
//!
//! - Oppenheim & Schafer, "Discrete-Time Signal Processing" (3rd ed.), §2.8.

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

/// Compute the direct time-domain full cross-correlation.
///
/// Time complexity O(len_x · len_y). For large signals prefer
/// [`xcorr_full_fft`], which is O(n log n).
///
/// # Returns
///
/// `Vec<f32>` of length `x.len() + y.len() - 1`, entry `i` holding
/// `R(τ)` for `τ = i as i64 - (y.len() as i64 - 1)`. Empty if either
/// input is empty.
pub fn xcorr_full(x: &[f32], y: &[f32]) -> Vec<f32> {
    if x.is_empty() || y.is_empty() {
        return Vec::new();
    }
    let min_lag = -(y.len() as i64 - 1);
    let max_lag = x.len() as i64 - 1;
    let mut result = vec![0.0f32; x.len() + y.len() - 1];

    for (out_i, lag) in (min_lag..=max_lag).enumerate() {
        let mut sum = 0.0f32;
        for (n, &yv) in y.iter().enumerate() {
            let m = n as i64 + lag;
            if m >= 0 && (m as usize) < x.len() {
                sum += x[m as usize] * yv;
            }
        }
        result[out_i] = sum;
    }

    result
}

/// Compute the full cross-correlation via FFT.
///
/// Same layout as [`xcorr_full`]. Both signals are zero-padded to the
/// next power of two at or above `x.len() + y.len() - 1` so the circular
/// correlation matches the linear one; the inverse transform is
/// rescaled by `1 / fft_size` because rustfft leaves it unnormalized.
pub fn xcorr_full_fft(x: &[f32], y: &[f32]) -> Vec<f32> {
    if x.is_empty() || y.is_empty() {
        return Vec::new();
    }
    let out_len = x.len() + y.len() - 1;
    let fft_size = out_len.next_power_of_two().max(2);

    let mut planner = FftPlanner::new();
    let forward = planner.plan_fft_forward(fft_size);
    let inverse = planner.plan_fft_inverse(fft_size);

    let mut buf_x: Vec<Complex<f32>> = x.iter().map(|&v| Complex::new(v, 0.0)).collect();
    buf_x.resize(fft_size, Complex::new(0.0, 0.0));
    let mut buf_y: Vec<Complex<f32>> = y.iter().map(|&v| Complex::new(v, 0.0)).collect();
    buf_y.resize(fft_size, Complex::new(0.0, 0.0));

    forward.process(&mut buf_x);
    forward.process(&mut buf_y);

    // R = IFFT(X · conj(Y)): positive lags land at indices 0, 1, …,
    // negative lags at fft_size-1, fft_size-2, …
    for (cx, cy) in buf_x.iter_mut().zip(buf_y.iter()) {
        *cx *= cy.conj();
    }
    inverse.process(&mut buf_x);

    let scale = 1.0 / fft_size as f32;
    let min_lag = -(y.len() as i64 - 1);
    let max_lag = x.len() as i64 - 1;
    let mut result = vec![0.0f32; out_len];
    for (out_i, lag) in (min_lag..=max_lag).enumerate() {
        let fft_idx = if lag >= 0 {
            lag as usize
        } else {
            (fft_size as i64 + lag) as usize
        };
        result[out_i] = buf_x[fft_idx].re * scale;
    }

    result
}

/// Find the lag of maximum absolute correlation and its signed value.
///
/// `ref_len` is the length of the second (`y`) argument the correlation
/// was computed with; it converts the array index back to a signed lag.
/// Maximum *absolute* value is used so that strongly negative
/// (anti-phase) matches are found too; the returned value keeps its
/// sign.
///
/// Returns `(0, 0.0)` for an empty correlation.
pub fn peak_lag(correlation: &[f32], ref_len: usize) -> (i64, f32) {
    let Some((best_idx, &best_val)) = correlation.iter().enumerate().max_by(|(_, a), (_, b)| {
        a.abs()
            .partial_cmp(&b.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    }) else {
        return (0, 0.0);
    };

    (best_idx as i64 - (ref_len as i64 - 1), best_val)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn sine(freq: f32, sr: f32, n: usize) -> Vec<f32> {
        (0..n)
            .map(|i| (2.0 * PI * freq * i as f32 / sr).sin())
            .collect()
    }

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
    fn output_length_is_full_mode() {
        let corr = xcorr_full(&[1.0, 2.0, 3.0], &[1.0, 1.0]);
        assert_eq!(corr.len(), 4);
    }

    #[test]
    fn known_small_case() {
        // x = [1, 2, 3], y = [1, 1]:
        // τ=-1: x[0]·y[1] = 1
        // τ= 0: x[0]·y[0] + x[1]·y[1] = 3
        // τ= 1: x[1]·y[0] + x[2]·y[1] = 5
        // τ= 2: x[2]·y[0] = 3
        let corr = xcorr_full(&[1.0, 2.0, 3.0], &[1.0, 1.0]);
        assert_eq!(corr, vec![1.0, 3.0, 5.0, 3.0]);
    }

    #[test]
    fn autocorrelation_peaks_at_zero_lag() {
        let x = white_noise(512, 0xC0FFEE);
        let corr = xcorr_full(&x, &x);
        let (lag, value) = peak_lag(&corr, x.len());
        assert_eq!(lag, 0);
        assert!(value > 0.0);
    }

    #[test]
    fn delayed_copy_peaks_at_delay() {
        let delay = 37usize;
        let n = 400;
        let y = sine(10.0, 1000.0, n);
        // x contains y starting at `delay`
        let mut x = vec![0.0f32; n + delay];
        x[delay..].copy_from_slice(&y);

        let corr = xcorr_full(&x, &y);
        let (lag, _) = peak_lag(&corr, y.len());
        assert_eq!(lag, delay as i64, "expected peak at lag {delay}, got {lag}");
    }

    #[test]
    fn inverted_copy_peaks_negative() {
        let y = white_noise(256, 42);
        let x: Vec<f32> = y.iter().map(|&v| -v).collect();
        let corr = xcorr_full(&x, &y);
        let (lag, value) = peak_lag(&corr, y.len());
        assert_eq!(lag, 0);
        assert!(value < 0.0, "anti-phase peak should be negative: {value}");
    }

    #[test]
    fn fft_matches_direct() {
        let x = white_noise(300, 1);
        let y = white_noise(211, 2);
        let direct = xcorr_full(&x, &y);
        let fft = xcorr_full_fft(&x, &y);
        assert_eq!(direct.len(), fft.len());
        for (i, (&d, &f)) in direct.iter().zip(fft.iter()).enumerate() {
            assert!(
                (d - f).abs() < 1e-2,
                "mismatch at index {i}: direct={d:.5}, fft={f:.5}"
            );
        }
    }

    #[test]
    fn empty_inputs_give_empty_output() {
        assert!(xcorr_full(&[], &[1.0]).is_empty());
        assert!(xcorr_full(&[1.0], &[]).is_empty());
        assert!(xcorr_full_fft(&[], &[1.0]).is_empty());
        assert_eq!(peak_lag(&[], 0), (0, 0.0));
    }
}
