use std::process::ExitCode;

use mv_cli::commands;
use mv_cli::config::PrintConfig;

fn main() -> ExitCode {
    mv_cli::init_logging();

    let args: Vec<String> = std::env::args().collect();
    let stdout = std::io::stdout();
    match commands::print(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => mv_cli::report::<PrintConfig>(&args, &e),
    }
}
