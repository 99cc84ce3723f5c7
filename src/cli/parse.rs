use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::{
    color::BarColor,
    config::Scale,
    constants::{ABBREVIATE_FROM, DEFAULT_TIMEOUT_SECS, DEFAULT_WIDTH, SMALL_TICK, TICK},
    source::Source,
};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "plotter",
    version,
    about = "Simple CLI tool to print graphs in the terminal"
)]
pub struct Cli {
    /// Give up on the data source after this many seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Emit debug logs on stderr (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot graphs
    Plot(PlotArgs),
    /// Inspect your data
    View(ViewArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// Exactly one of `--url` / `--file`.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// URL of the API endpoint
    #[arg(long)]
    pub url: Option<String>,

    /// Read the JSON from a file instead (use `-` for stdin)
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,
}

impl SourceArgs {
    #[must_use]
    pub fn source(&self) -> Source {
        match (&self.url, &self.file) {
            (Some(url), _) => Source::Url(url.clone()),
            (None, Some(path)) => Source::from_path(path),
            (None, None) => Source::Stdin,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ScaleArg {
    /// Largest value fills the width
    Max,
    /// Smallest value starts at zero, largest fills the width
    Range,
}

impl From<ScaleArg> for Scale {
    fn from(s: ScaleArg) -> Self {
        match s {
            ScaleArg::Max => Scale::Max,
            ScaleArg::Range => Scale::Range,
        }
    }
}

/// `plotter plot …`
#[derive(Parser, Debug)]
pub struct PlotArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Start date in the form dd-MM-YYYY, for example, 14-01-2022
    #[arg(long)]
    pub start: String,

    /// End date in the form dd-MM-YYYY, for example, 01-11-2022
    #[arg(long)]
    pub end: String,

    /// Bar length, in ticks, of the largest value
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// How values map onto the bar width
    #[arg(long, value_enum, default_value_t = ScaleArg::Max)]
    pub scale: ScaleArg,

    /// Abbreviate numbers (K/M/B) from this magnitude up
    #[arg(long, default_value_t = ABBREVIATE_FROM)]
    pub abbreviate_from: f64,

    /// Glyph for one block of bar
    #[arg(long, default_value_t = TICK)]
    pub tick: char,

    /// Glyph for values whose bar rounds to nothing
    #[arg(long, default_value_t = SMALL_TICK)]
    pub small_tick: char,

    /// Bar color (name or `#RRGGBB`)
    #[arg(long)]
    pub color: Option<BarColor>,

    /// Shrink the bars to fit the terminal width
    #[arg(long)]
    pub fit: bool,

    /// Warn about unknown dates and ignore them instead of failing
    #[arg(long)]
    pub lenient: bool,
}

/// `plotter view …`
#[derive(Parser, Debug)]
pub struct ViewArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}
