pub mod chart;
pub mod normalize;
pub mod row;

pub use chart::{chart, rows, value_columns};
pub use normalize::{normalize, normalize_with};
pub use row::{Row, render_row};
