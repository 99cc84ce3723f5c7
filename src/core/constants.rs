//! A collection of constants.

/// Unit suffixes, one per power of 1000.
pub const UNITS: [&str; 4] = ["", "K", "M", "B"];

/// Magnitudes below this are printed as-is, without a unit.
pub const ABBREVIATE_FROM: f64 = 100_000.0;

/// Numbers are rounded to the third decimal place once abbreviated.
///
/// 19.5611 M becomes 19.561 M
pub const DECIMAL_PRECISION: usize = 3;

/// One full block of bar length
pub const TICK: char = '▇';
/// Marker for values whose bar truncates to nothing
pub const SMALL_TICK: char = '▏';

/// Bar budget, in ticks, of the largest value
pub const DEFAULT_WIDTH: usize = 50;

/// Upper bound on a single fetch
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
