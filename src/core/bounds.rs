//! Geometry helpers: how many ticks fit on one terminal line.

use terminal_size::{Width, terminal_size};

/// Current terminal width, if stdout is a terminal.
#[inline]
#[must_use]
pub fn terminal_width() -> Option<Width> {
    terminal_size().map(|(w, _)| w)
}

/// Shrink `requested` so `label + " " + bars + " " + number` fits in `term`.
///
/// Never returns less than one tick.
#[inline]
#[must_use]
pub fn fit_width(requested: usize, Width(cols): Width, label_cols: usize, value_cols: usize) -> usize {
    let room = usize::from(cols).saturating_sub(label_cols + 1 + 1 + value_cols);
    requested.min(room).max(1)
}
