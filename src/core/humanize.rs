//! Human-readable magnitudes: `125000` → `"125.0 K"`.

use crate::core::constants::{ABBREVIATE_FROM, DECIMAL_PRECISION, UNITS};

/// Abbreviates magnitudes at or above `abbreviate_from` with a K/M/B unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Humanizer {
    pub abbreviate_from: f64,
}

impl Default for Humanizer {
    fn default() -> Self {
        Self {
            abbreviate_from: ABBREVIATE_FROM,
        }
    }
}

impl Humanizer {
    #[must_use]
    pub fn new(abbreviate_from: f64) -> Self {
        Self { abbreviate_from }
    }

    /// `"{number} {unit}"`; the unit may be empty but the space is always there.
    ///
    /// * `0` is `"0 "`.
    /// * Magnitudes below the threshold print verbatim: `99999` → `"99999 "`.
    ///   The sign stays: `-5` → `"-5 "`.
    /// * Anything past billions stays in `B`.
    #[must_use]
    pub fn format(&self, num: f64) -> String {
        if num == 0.0 {
            return format!("0 {}", UNITS[0]);
        }
        let magnitude = num.abs();
        if magnitude < self.abbreviate_from {
            return format!("{num} {}", UNITS[0]);
        }

        let (index, divisor) = unit_index(magnitude);
        let scaled = if num < 0.0 {
            -(magnitude / divisor)
        } else {
            magnitude / divisor
        };

        let mut out = rounded(scaled, DECIMAL_PRECISION);
        out.push(' ');
        out.push_str(UNITS[index]);
        out
    }
}

/// Format with the default 100 000 threshold.
#[inline]
#[must_use]
pub fn humanize(num: f64) -> String {
    Humanizer::default().format(num)
}

/// `floor(log_1000(magnitude))`, clamped to the known units, plus `1000^index`.
///
/// Walks powers of 1000 instead of dividing logarithms, which lands
/// `1e9` on 2.999… and picks the wrong unit.
fn unit_index(magnitude: f64) -> (usize, f64) {
    let mut index = 0;
    let mut divisor = 1.0;
    while index + 1 < UNITS.len() && magnitude >= divisor * 1000.0 {
        index += 1;
        divisor *= 1000.0;
    }
    (index, divisor)
}

/// Round once, on the exact value, then drop trailing zeros but keep one
/// fractional digit: `125.0`, `12.55`, `1.0`.
fn rounded(x: f64, decimals: usize) -> String {
    let mut s = format!("{x:.decimals$}");
    if s.contains('.') {
        let keep = s.trim_end_matches('0').len();
        s.truncate(keep);
        if s.ends_with('.') {
            s.push('0');
        }
    }
    s
}
