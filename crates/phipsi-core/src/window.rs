//! Sliding-window chunking.
//!
//! For every shift in `0..window` the sequence is cut, starting at `shift`, into
//! consecutive non-overlapping blocks of `window` elements. Short trailing blocks
//! are dropped. Blocks are emitted shift-major: every block of shift 0, then every
//! block of shift 1, and so on. All array builders enumerate windows through this
//! module so their rows stay aligned.
//!
//! Sampling every shift gives each interior position a chance to be a window
//! center, at the cost of `window`-fold more rows than a single partition.

/// Iterate over the shift-major windows of `sequence`.
///
/// A sequence shorter than `window` yields nothing, as does `window == 0`.
/// Shifts at or past the end of the sequence are never visited.
pub fn windows<T>(sequence: &[T], window: usize) -> impl Iterator<Item = &[T]> + '_ {
    (0..window.min(sequence.len())).flat_map(move |shift| {
        sequence
            .get(shift..)
            .unwrap_or_default()
            .chunks(window)
            .filter(move |block| block.len() == window)
    })
}

/// The element at `window / 2` of every window, in window order.
///
/// For even `window` this is the element just past the midpoint.
pub fn centers<T: Copy>(sequence: &[T], window: usize) -> impl Iterator<Item = T> + '_ {
    windows(sequence, window).map(move |block| block[window / 2])
}

/// Number of windows [`windows`] yields for a sequence of `len` elements.
pub fn window_count(len: usize, window: usize) -> usize {
    (0..window.min(len))
        .map(|shift| (len - shift) / window)
        .sum()
}
