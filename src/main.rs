use std::process::ExitCode;

fn main() -> ExitCode {
    match plotter::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("\n{hint}");
            }
            ExitCode::FAILURE
        }
    }
}
