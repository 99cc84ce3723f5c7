//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod humanize;
pub mod range;
pub mod source;

// re-export frequently-used items for convenience
pub use color::{BarColor, ColorError};
pub use config::{ChartConfig, ChartConfigBuilder, Scale};
pub use constants::{ABBREVIATE_FROM, DEFAULT_WIDTH, SMALL_TICK, TICK, UNITS};
pub use data::{RawDataset, Series};
pub use error::{ConfigError, DataError, FetchError, PlotError, SelectError};
pub use humanize::{Humanizer, humanize};
pub use range::{BoundPolicy, Selection, select};
pub use source::Source;
