//! One line of the horizontal chart.
//!
//! ```text
//! 01-01-2022: ▇▇ 2
//! 02-01-2022: ▇▇▇ 3
//! 03-01-2022: ▏ 0
//! ```

use std::io::{self, Write};

use crate::core::config::ChartConfig;

/// Everything needed to print one line. Built per row and dropped after.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Padded label, colon included.
    pub label: String,
    pub value: f64,
    /// Normalized length truncated toward zero.
    pub blocks: i64,
    /// Smallest value of the whole selection.
    pub val_min: f64,
}

impl Row {
    /// A non-negligible value whose bar truncates to nothing still gets a
    /// small tick, and so does an exact zero.
    #[inline]
    #[must_use]
    pub fn wants_small_tick(&self) -> bool {
        (self.blocks < 1 && (self.value > self.val_min || self.value > 0.0)) || self.value == 0.0
    }
}

/// Write `<label> <ticks> <number>` plus a newline.
pub fn render_row<W: Write>(out: &mut W, row: &Row, cfg: &ChartConfig) -> io::Result<()> {
    let bar: String = if row.wants_small_tick() {
        cfg.small_tick.to_string()
    } else {
        let n = usize::try_from(row.blocks).unwrap_or(0);
        std::iter::repeat_n(cfg.tick, n).collect()
    };
    let bar = match &cfg.color {
        Some(c) if !bar.is_empty() => c.paint(&bar),
        _ => bar,
    };
    writeln!(out, "{} {bar} {}", row.label, cfg.humanizer.format(row.value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::BarColor;

    fn line(row: &Row, cfg: &ChartConfig) -> String {
        let mut buf = Vec::new();
        render_row(&mut buf, row, cfg).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn row(value: f64, blocks: i64, val_min: f64) -> Row {
        Row {
            label: "a:".into(),
            value,
            blocks,
            val_min,
        }
    }

    #[test]
    fn full_ticks() {
        let cfg = ChartConfig::default();
        assert_eq!(line(&row(3.0, 3, 1.0), &cfg), "a: ▇▇▇ 3 \n");
    }

    #[test]
    fn small_tick_for_truncated_values() {
        let cfg = ChartConfig::default();
        assert_eq!(line(&row(10.0, 0, 0.0), &cfg), "a: ▏ 10 \n");
        // above the minimum, even when negative
        assert_eq!(line(&row(-2.0, 0, -5.0), &cfg), "a: ▏ -2 \n");
    }

    #[test]
    fn zero_always_gets_small_tick() {
        let cfg = ChartConfig::default();
        assert_eq!(line(&row(0.0, 0, 0.0), &cfg), "a: ▏ 0 \n");
        assert_eq!(line(&row(0.0, 5, 0.0), &cfg), "a: ▏ 0 \n");
    }

    #[test]
    fn minimum_negative_has_no_bar() {
        let cfg = ChartConfig::default();
        assert_eq!(line(&row(-5.0, -3, -5.0), &cfg), "a:  -5 \n");
    }

    #[test]
    fn custom_glyphs_and_color() {
        let cfg = ChartConfig::builder()
            .tick('#')
            .small_tick('|')
            .color(BarColor::Basic(31))
            .build()
            .unwrap();
        assert_eq!(line(&row(2.0, 2, 1.0), &cfg), "a: \x1b[31m##\x1b[0m 2 \n");
        assert_eq!(line(&row(1.0, 0, 0.5), &cfg), "a: \x1b[31m|\x1b[0m 1 \n");
    }
}
