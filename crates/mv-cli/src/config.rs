//! Positional command-line configuration for each tool.

use std::path::PathBuf;

use crate::error::{CliError, Result};

/// A tool's configuration, parsed from `argv` (program name first).
pub trait ToolConfig: Sized {
    /// Positional argument synopsis, e.g. `<file_A> <file_x>`.
    const SYNOPSIS: &'static str;
    /// Lines printed under the synopsis in the usage text.
    const ABOUT: &'static [&'static str];
    /// Example arguments shown in the usage text.
    const EXAMPLE: &'static str;

    /// Parse positional arguments (excluding the program name).
    fn from_positional(args: &[String]) -> Result<Self>;

    fn from_args(args: &[String]) -> Result<Self> {
        let positional = args.get(1..).unwrap_or_default();
        Self::from_positional(positional)
    }

    fn usage(program: &str) -> String {
        let mut text = format!("Usage: {program} {}\n", Self::SYNOPSIS);
        for line in Self::ABOUT {
            text.push_str("  ");
            text.push_str(line);
            text.push('\n');
        }
        text.push_str(&format!("  Example: {program} {}\n", Self::EXAMPLE));
        text
    }
}

fn expect_count(args: &[String], n: usize) -> Result<()> {
    if args.len() != n {
        return Err(CliError::Usage(format!(
            "expected {n} arguments, got {}",
            args.len()
        )));
    }
    Ok(())
}

/// Parse a strictly positive integer argument.
pub fn parse_positive(name: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::Usage(format!(
            "{name} must be a positive integer, got '{value}'"
        ))),
    }
}

/// `pth_matrix_vector <file_A> <file_x> <file_y> <num_threads>`
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelConfig {
    pub matrix: PathBuf,
    pub vector: PathBuf,
    pub output: PathBuf,
    pub workers: usize,
}

impl ToolConfig for ParallelConfig {
    const SYNOPSIS: &'static str = "<file_A> <file_x> <file_y> <num_threads>";
    const ABOUT: &'static [&'static str] = &[
        "Multiplies matrix A by vector x using a pool of worker threads",
        "Stores result in y and prints timing to stderr",
    ];
    const EXAMPLE: &'static str = "A.mat x.mat y.mat 4";

    fn from_positional(args: &[String]) -> Result<Self> {
        expect_count(args, 4)?;
        Ok(ParallelConfig {
            matrix: PathBuf::from(&args[0]),
            vector: PathBuf::from(&args[1]),
            output: PathBuf::from(&args[2]),
            workers: parse_positive("number of threads", &args[3])?,
        })
    }
}

/// `matrix_vector <file_A> <file_x> <file_y>`
#[derive(Debug, Clone, PartialEq)]
pub struct SerialConfig {
    pub matrix: PathBuf,
    pub vector: PathBuf,
    pub output: PathBuf,
}

impl ToolConfig for SerialConfig {
    const SYNOPSIS: &'static str = "<file_A> <file_x> <file_y>";
    const ABOUT: &'static [&'static str] = &[
        "Multiplies matrix A by vector x serially",
        "Stores result in y",
    ];
    const EXAMPLE: &'static str = "A.mat x.mat y.mat";

    fn from_positional(args: &[String]) -> Result<Self> {
        expect_count(args, 3)?;
        Ok(SerialConfig {
            matrix: PathBuf::from(&args[0]),
            vector: PathBuf::from(&args[1]),
            output: PathBuf::from(&args[2]),
        })
    }
}

/// `make_matrix <file_name> <rows> <cols>`
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateConfig {
    pub output: PathBuf,
    pub rows: usize,
    pub cols: usize,
}

impl GenerateConfig {
    /// Environment variable holding an optional `u64` RNG seed.
    pub const SEED_VAR: &'static str = "MATRIX_SEED";

    /// Reads the seed from `MATRIX_SEED`, if set.
    pub fn seed_from_env() -> Result<Option<u64>> {
        match std::env::var(Self::SEED_VAR) {
            Ok(value) => parse_seed(&value).map(Some),
            Err(_) => Ok(None),
        }
    }
}

fn parse_seed(value: &str) -> Result<u64> {
    value.trim().parse::<u64>().map_err(|_| {
        CliError::Usage(format!(
            "{} must be an unsigned integer, got '{value}'",
            GenerateConfig::SEED_VAR
        ))
    })
}

impl ToolConfig for GenerateConfig {
    const SYNOPSIS: &'static str = "<file_name> <rows> <cols>";
    const ABOUT: &'static [&'static str] = &[
        "Creates a binary matrix file with random double values in [0, 10)",
        "Set MATRIX_SEED for reproducible output",
    ];
    const EXAMPLE: &'static str = "A.mat 100 50";

    fn from_positional(args: &[String]) -> Result<Self> {
        expect_count(args, 3)?;
        Ok(GenerateConfig {
            output: PathBuf::from(&args[0]),
            rows: parse_positive("rows", &args[1])?,
            cols: parse_positive("cols", &args[2])?,
        })
    }
}

/// `print_matrix <file_name>`
#[derive(Debug, Clone, PartialEq)]
pub struct PrintConfig {
    pub input: PathBuf,
}

impl ToolConfig for PrintConfig {
    const SYNOPSIS: &'static str = "<file_name>";
    const ABOUT: &'static [&'static str] = &["Prints a binary matrix file to the screen"];
    const EXAMPLE: &'static str = "A.mat";

    fn from_positional(args: &[String]) -> Result<Self> {
        expect_count(args, 1)?;
        Ok(PrintConfig {
            input: PathBuf::from(&args[0]),
        })
    }
}
