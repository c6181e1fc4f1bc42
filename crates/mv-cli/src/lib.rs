//! `mv-cli` - command-line front ends for the matvec tools.
//!
//! - `pth_matrix_vector`: threaded y = A @ x with timing on stderr
//! - `matrix_vector`: serial reference product
//! - `make_matrix`: random matrix generator
//! - `print_matrix`: pretty-printer

pub mod commands;
pub mod config;
pub mod error;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

pub use config::ToolConfig;
pub use error::{CliError, Result};

/// Install the stderr log subscriber, filtered by `RUST_LOG`.
///
/// With `RUST_LOG` unset only errors are shown, so tool output on stderr
/// stays machine-readable.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print `err` (and the usage text for usage errors) to stderr and return
/// the matching exit status.
pub fn report<C: ToolConfig>(args: &[String], err: &CliError) -> ExitCode {
    eprintln!("Error: {err}");
    if err.is_usage() {
        let program = args.first().map(String::as_str).unwrap_or("matvec");
        eprint!("{}", C::usage(program));
    }
    ExitCode::from(err.exit_code())
}
