//! Radix-2 fast Fourier transform over complex coefficients.
//!
//! One shared transform serves the whole correlation engine: an in-place
//! iterative FFT (bit-reversal permutation followed by butterfly passes)
//! plus an integer convolution helper built on top of it. Input length
//! must be a power of two; [`convolve`] handles the padding.

use std::f64::consts::PI;
use std::ops::{Add, Mul, Sub};

/// A complex coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// Reverse the low `log` bits of `num`.
fn bit_reverse(num: usize, log: u32) -> usize {
    let mut result = 0;
    for i in 0..log {
        if num & (1 << i) != 0 {
            result |= 1 << (log - i - 1);
        }
    }
    result
}

/// In-place transform. `a.len()` must be a power of two.
fn transform(a: &mut [Complex], invert: bool) {
    let n = a.len();
    debug_assert!(n.is_power_of_two());
    let log = n.trailing_zeros();

    for i in 0..n {
        let j = bit_reverse(i, log);
        if i < j {
            a.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        let angle = 2.0 * PI / len as f64 * if invert { -1.0 } else { 1.0 };
        let root = Complex::new(angle.cos(), angle.sin());
        for chunk in a.chunks_exact_mut(len) {
            let mut w = Complex::new(1.0, 0.0);
            let (lo, hi) = chunk.split_at_mut(len / 2);
            for (u, v) in lo.iter_mut().zip(hi.iter_mut()) {
                let twisted = *v * w;
                let even = *u;
                *u = even + twisted;
                *v = even - twisted;
                w = w * root;
            }
        }
        len <<= 1;
    }

    // The 1/N normalization belongs to the inverse direction, applied
    // exactly once.
    if invert {
        let scale = 1.0 / n as f64;
        for value in a.iter_mut() {
            value.re *= scale;
            value.im *= scale;
        }
    }
}

/// Forward transform, in place.
pub fn forward(a: &mut [Complex]) {
    transform(a, false);
}

/// Inverse transform, in place, including the `1/N` normalization.
pub fn inverse(a: &mut [Complex]) {
    transform(a, true);
}

/// Smallest power of two strictly greater than `len`.
pub fn padded_size(len: usize) -> usize {
    (len + 1).next_power_of_two()
}

/// Convolve two integer sequences via the frequency domain.
///
/// The result has length `padded_size(a.len() + b.len())`; coefficient
/// `k` is `sum over i+j == k of a[i] * b[j]`. Real parts are rounded to
/// the nearest integer, so inputs must be small enough for the rounding
/// error to stay below one half (indicator vectors easily qualify).
pub fn convolve(a: &[u32], b: &[u32]) -> Vec<i64> {
    let deg = padded_size(a.len() + b.len());

    let mut fa = vec![Complex::default(); deg];
    for (slot, &value) in fa.iter_mut().zip(a) {
        slot.re = f64::from(value);
    }
    let mut fb = vec![Complex::default(); deg];
    for (slot, &value) in fb.iter_mut().zip(b) {
        slot.re = f64::from(value);
    }

    forward(&mut fa);
    forward(&mut fb);
    for (x, y) in fa.iter_mut().zip(fb.iter()) {
        *x = *x * *y;
    }
    inverse(&mut fa);

    fa.iter().map(|c| c.re.round() as i64).collect()
}
