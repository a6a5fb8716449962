//! Alignment correctness under shift, sign, and length variation.
//!
//! Each case builds a signal/reference pair with a known relationship and
//! checks that every aligned sample either matches the reference or is
//! exactly zero (the zero-filled non-overlap region).

use wavelab_core::align_signals;

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

/// Circular shift by `shift` (positive shifts right, like `np.roll`).
fn roll(x: &[f32], shift: i64) -> Vec<f32> {
    let n = x.len() as i64;
    (0..n)
        .map(|i| x[((i - shift).rem_euclid(n)) as usize])
        .collect()
}

/// Every result sample must be close to the expectation or exactly zero.
fn assert_close_or_zero(result: &[f32], expected: &[f32]) {
    assert_eq!(result.len(), expected.len());
    let mut matched = 0usize;
    for (i, (&r, &e)) in result.iter().zip(expected.iter()).enumerate() {
        if r == 0.0 {
            continue;
        }
        assert!((r - e).abs() < 1e-4, "sample {i}: result={r}, expected={e}");
        matched += 1;
    }
    // A degenerate all-zero result would pass the loop vacuously.
    assert!(
        matched * 2 > result.len(),
        "fewer than half the samples matched ({matched}/{})",
        result.len()
    );
}

#[test]
fn rolled_right_aligns_back() {
    let base = white_noise(1000, 0xA11C);
    let rolled = roll(&base, 10);
    assert_close_or_zero(&align_signals(&rolled, &base), &base);
}

#[test]
fn rolled_left_aligns_back() {
    let base = white_noise(1000, 0xA11C);
    let rolled = roll(&base, -10);
    assert_close_or_zero(&align_signals(&rolled, &base), &base);
}

#[test]
fn identity_alignment() {
    let base = white_noise(1000, 0xA11C);
    assert_close_or_zero(&align_signals(&base, &base), &base);
}

#[test]
fn reference_with_random_tail() {
    let base = white_noise(1000, 0xA11C);
    let mut ext = base.clone();
    ext.extend_from_slice(&white_noise(100, 0xBEEF));
    assert_close_or_zero(&align_signals(&base, &ext), &ext[..base.len()]);
}

#[test]
fn reference_with_zero_tail() {
    let base = white_noise(1000, 0xA11C);
    let mut ext = base.clone();
    ext.extend_from_slice(&[0.0; 100]);
    assert_close_or_zero(&align_signals(&base, &ext), &ext[..base.len()]);
}

#[test]
fn reference_padded_both_sides() {
    let base = white_noise(1000, 0xA11C);
    let mut ext = vec![0.0f32; 100];
    ext.extend_from_slice(&base);
    ext.extend_from_slice(&[0.0; 100]);
    // Expectation: 100 zeros followed by the first 900 base samples.
    assert_close_or_zero(&align_signals(&base, &ext), &ext[..base.len()]);
}

#[test]
fn inverted_and_shifted() {
    let base = white_noise(800, 0xF00D);
    let delay = 33usize;
    let mut x = vec![0.0f32; base.len()];
    for n in delay..base.len() {
        x[n] = -base[n - delay];
    }
    assert_close_or_zero(&align_signals(&x, &base), &base);
}
