//! Drives normalization + row rendering over a whole selection.

use std::io::{self, Write};

use crate::{
    core::config::ChartConfig,
    render::{
        normalize::{extrema, normalize_with},
        row::{Row, render_row},
    },
};

/// Lazily pair every label/value with its bar length.
///
/// Labels are left-aligned and padded to the longest one (in chars).
/// Block counts are truncated toward zero and capped at `width`, so a
/// degenerate series passed through unscaled cannot run off the line.
#[allow(clippy::cast_possible_truncation)]
pub fn rows<'a>(
    labels: &'a [String],
    values: &'a [f64],
    normalized: &'a [f64],
    width: usize,
) -> impl Iterator<Item = Row> + 'a {
    let val_min = extrema(values).map_or(0.0, |(lo, _)| lo);
    let pad = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let cap = i64::try_from(width).unwrap_or(i64::MAX);

    labels
        .iter()
        .zip(values)
        .zip(normalized)
        .map(move |((label, &value), &len)| Row {
            label: format!("{label:<pad$}:"),
            value,
            blocks: (len as i64).min(cap),
            val_min,
        })
}

/// Print one line per `(label, value)` pair, in input order.
pub fn chart<W: Write>(
    out: &mut W,
    labels: &[String],
    values: &[f64],
    cfg: &ChartConfig,
) -> io::Result<()> {
    let normalized = normalize_with(values, cfg.width, cfg.scale);
    for row in rows(labels, values, &normalized, cfg.width) {
        render_row(out, &row, cfg)?;
    }
    Ok(())
}

/// Widest formatted number, for terminal fitting.
#[must_use]
pub fn value_columns(values: &[f64], cfg: &ChartConfig) -> usize {
    values
        .iter()
        .map(|&v| cfg.humanizer.format(v).chars().count())
        .max()
        .unwrap_or(0)
}
