use std::process::ExitCode;

use mv_cli::commands;
use mv_cli::config::ParallelConfig;
use mv_core::TimingHarness;

fn main() -> ExitCode {
    let timer = TimingHarness::start();
    mv_cli::init_logging();

    let args: Vec<String> = std::env::args().collect();
    match commands::parallel(timer, &args) {
        Ok(sample) => {
            eprintln!("{sample}");
            ExitCode::SUCCESS
        }
        Err(e) => mv_cli::report::<ParallelConfig>(&args, &e),
    }
}
