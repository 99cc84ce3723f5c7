//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{BarColor, ColorError},
    config::{ChartConfig, ChartConfigBuilder, Scale},
    data::{RawDataset, Series},
    error::{ConfigError, DataError, FetchError, PlotError, SelectError},
    humanize::{Humanizer, humanize},
    range::{BoundPolicy, Selection, select},
    source::Source,
};

pub use render::{Row, chart, normalize, normalize_with, render_row, rows};

/// Convenience function: chart the `start..=end` window of an in-memory
/// series on stdout.
pub fn plot_series(
    series: &Series,
    start: Option<&str>,
    end: Option<&str>,
    cfg: &ChartConfig,
) -> Result<(), PlotError> {
    use std::io::{Write, stdout};

    let sel = series.select(start, end, BoundPolicy::Strict)?;
    if sel.is_empty() {
        return Err(PlotError::EmptyData);
    }
    let mut out = stdout().lock();
    chart(&mut out, sel.labels, sel.values, cfg)?;
    out.flush()?;
    Ok(())
}
