//! Alignment scoring via per-symbol convolution.
//!
//! For every alignment shift of `pattern` against `text`, the number of
//! coinciding positions is the sum, over each alphabet symbol, of the
//! convolution of the symbol's indicator vector over `text` with its
//! reversed indicator vector over `pattern`. Each position holds exactly
//! one symbol value, so summing the channels counts every matching
//! position exactly once.

use aligndiff_core::Alphabet;

use crate::fft;

/// Maximum number of position-wise equal characters over all alignment
/// shifts of `pattern` against `text`.
///
/// The caller must ensure `text.len() >= pattern.len()`; the roles are
/// not symmetric and this function does not reorder its arguments.
/// Returns a value in `[0, pattern.len()]`; an empty input scores 0.
pub fn alignment_score(text: &[u8], pattern: &[u8], alphabet: &Alphabet) -> usize {
    let n = text.len();
    let m = pattern.len();
    debug_assert!(n >= m, "caller must pass the longer sequence as text");

    if m == 0 {
        return 0;
    }

    let mut per_shift = vec![0usize; n - m + 1];

    for symbol in alphabet.symbols() {
        // A symbol absent from the pattern contributes nothing at any shift.
        if !pattern.contains(&symbol) {
            continue;
        }

        let text_hits: Vec<u32> = text.iter().map(|&b| u32::from(b == symbol)).collect();
        let pattern_hits: Vec<u32> = pattern
            .iter()
            .rev()
            .map(|&b| u32::from(b == symbol))
            .collect();

        let coefficients = fft::convolve(&text_hits, &pattern_hits);

        // Coefficient m-1+i counts this symbol's matches at shift i.
        for (shift, total) in per_shift.iter_mut().enumerate() {
            *total += coefficients[m - 1 + shift].max(0) as usize;
        }
    }

    per_shift.into_iter().max().unwrap_or(0)
}
