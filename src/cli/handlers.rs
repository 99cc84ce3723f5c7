use std::{
    io::{Write, stdout},
    time::{Duration, Instant},
};

use tracing::{debug, info};

use crate::{
    core::{
        bounds::{fit_width, terminal_width},
        color::{BarColor, COLOR_NAMES},
        config::ChartConfig,
        data::{RawDataset, Series},
        error::PlotError,
        range::BoundPolicy,
    },
    render::{chart, value_columns},
};

use super::parse::{PlotArgs, ViewArgs};

pub fn plot(a: PlotArgs, timeout: Duration) -> Result<(), PlotError> {
    let raw = a.source.source().load(timeout)?;
    let series = Series::from_raw(&raw)?;

    let policy = if a.lenient {
        BoundPolicy::Lenient
    } else {
        BoundPolicy::Strict
    };
    let sel = series.select(Some(&a.start), Some(&a.end), policy)?;
    if sel.is_empty() {
        return Err(PlotError::EmptyData);
    }

    let mut cfg = ChartConfig::builder()
        .width(a.width)
        .scale(a.scale.into())
        .abbreviate_from(a.abbreviate_from)
        .tick(a.tick)
        .small_tick(a.small_tick)
        .color_opt(a.color)
        .build()?;

    if a.fit {
        if let Some(term) = terminal_width() {
            let label_cols = sel.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 1;
            let fitted = fit_width(cfg.width, term, label_cols, value_columns(sel.values, &cfg));
            if fitted != cfg.width {
                info!(requested = cfg.width, fitted, "bar width shrunk to fit the terminal");
                cfg.width = fitted;
            }
        }
    }

    let t_render = Instant::now();
    let mut out = stdout().lock();
    chart(&mut out, sel.labels, sel.values, &cfg)?;
    out.flush()?;
    debug!(
        rows = sel.len(),
        elapsed_us = t_render.elapsed().as_micros(),
        "chart rendered"
    );
    Ok(())
}

/// Pretty-print the raw mapping, untouched, so valid dates can be looked up.
pub fn view(a: &ViewArgs, timeout: Duration) -> Result<(), PlotError> {
    let raw = a.source.source().load(timeout)?;
    let mut out = stdout().lock();
    write_raw(&mut out, &raw)?;
    out.flush()?;
    Ok(())
}

/// Indented JSON in document order, newline-terminated.
fn write_raw<W: Write>(out: &mut W, raw: &RawDataset) -> Result<(), PlotError> {
    serde_json::to_writer_pretty(&mut *out, raw)?;
    writeln!(out)?;
    Ok(())
}

/// Sample bar in every named color + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    for name in COLOR_NAMES {
        if let Ok(c) = BarColor::from_name(name) {
            println!("{} {name}", c.paint("▇▇▇▇"));
        }
    }
    println!(
        "{} #505050 (or any other #RRGGBB)\n",
        BarColor::Rgb(0x50, 0x50, 0x50).paint("▇▇▇▇")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "plotter";
    println!(
        "
Example invocations
-------------------
• Inspect the data  : {bin} view --url https://example.com/series.json
• Plot a window     : {bin} plot --url https://example.com/series.json \\
                        --start 14-01-2022 --end 01-11-2022
• From a file       : {bin} plot --file series.json --start 14-01-2022 --end 01-11-2022
• From stdin        : curl -s https://example.com/series.json | {bin} plot --file - \\
                        --start 14-01-2022 --end 01-11-2022
• Range scaling     : {bin} plot --file series.json --start 14-01-2022 --end 01-11-2022 --scale range
• Colored, fitted   : {bin} plot --file series.json --start 14-01-2022 --end 01-11-2022 --color blue --fit
• Debug logging     : {bin} --debug plot --file series.json --start 14-01-2022 --end 01-11-2022
"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_keeps_document_order() {
        let raw: RawDataset =
            serde_json::from_str(r#"{"03-01-2022": 3, "01-01-2022": "1", "02-01-2022": 2.5}"#)
                .unwrap();
        let mut buf = Vec::new();
        write_raw(&mut buf, &raw).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\n  \"03-01-2022\": 3,\n  \"01-01-2022\": \"1\",\n  \"02-01-2022\": 2.5\n}\n"
        );
    }
}
