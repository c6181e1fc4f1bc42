use std::process::ExitCode;

use mv_cli::commands;
use mv_cli::config::SerialConfig;

fn main() -> ExitCode {
    mv_cli::init_logging();

    let args: Vec<String> = std::env::args().collect();
    match commands::serial(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => mv_cli::report::<SerialConfig>(&args, &e),
    }
}
