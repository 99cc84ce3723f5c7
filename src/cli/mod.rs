mod handlers;
pub mod logging;
pub mod parse;

use std::time::Duration;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::PlotError;

pub fn run() -> Result<(), PlotError> {
    let cli = parse::Cli::parse();
    logging::init(cli.debug);
    let timeout = Duration::from_secs(cli.timeout);

    match cli.cmd {
        parse::Command::Plot(a) => handlers::plot(a, timeout),
        parse::Command::View(a) => handlers::view(&a, timeout),
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
