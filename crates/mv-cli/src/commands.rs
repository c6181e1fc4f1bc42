//! The body of each tool, separated from `main` so it can be tested.

use std::io::Write;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use mv_core::error::try_zeroed;
use mv_core::{Matrix, SerialBackend, Shape, TimingHarness, TimingSample, WorkerPool};
use mv_io::{random_matrix, read_matrix, write_matrix, write_vector, MatrixDisplay};

use crate::config::{GenerateConfig, ParallelConfig, PrintConfig, SerialConfig, ToolConfig};
use crate::error::{CliError, Result};

/// Reads A and x and checks that `A @ x` is defined.
fn load_operands(matrix_path: &Path, vector_path: &Path) -> Result<(Matrix, Matrix)> {
    let a = read_matrix(matrix_path).map_err(|source| CliError::Read {
        role: "matrix A",
        source,
    })?;
    let x = read_matrix(vector_path).map_err(|source| CliError::Read {
        role: "vector x",
        source,
    })?;
    a.check_matvec(&x)?;
    Ok((a, x))
}

/// Threaded y = A @ x. `timer` must have been started before `args` were parsed.
///
/// Nothing is written to the output file unless the product succeeded.
pub fn parallel(mut timer: TimingHarness, args: &[String]) -> Result<TimingSample> {
    let config = ParallelConfig::from_args(args)?;
    let (a, x) = load_operands(&config.matrix, &config.vector)?;
    let pool = WorkerPool::new(config.workers)?;
    let mut y = try_zeroed("result vector", a.rows())?;

    timer.measure_work(|| pool.run(a.data(), x.data(), &mut y, a.cols()))?;

    write_vector(&config.output, &y).map_err(CliError::Write)?;
    let sample = timer.finish(a.rows(), pool.workers());
    info!(
        rows = sample.rows,
        cols = a.cols(),
        workers = sample.workers,
        compute_secs = sample.compute.as_secs_f64(),
        "parallel product complete"
    );
    Ok(sample)
}

/// Serial reference y = A @ x.
pub fn serial(args: &[String]) -> Result<Matrix> {
    let config = SerialConfig::from_args(args)?;
    let (a, x) = load_operands(&config.matrix, &config.vector)?;
    let y = a.matvec(&x, &SerialBackend::new())?;
    write_vector(&config.output, y.data()).map_err(CliError::Write)?;
    info!(shape = %a.shape(), "serial product complete");
    Ok(y)
}

/// Writes a random matrix. Seeded from `MATRIX_SEED` when set.
pub fn generate(args: &[String]) -> Result<Shape> {
    let config = GenerateConfig::from_args(args)?;
    let mut rng = match GenerateConfig::seed_from_env()? {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let shape = Shape::new(config.rows, config.cols);
    let m = random_matrix(shape, &mut rng)?;
    write_matrix(&config.output, &m)?;
    info!(path = %config.output.display(), %shape, "generated matrix");
    Ok(shape)
}

/// Prints a matrix file to `out`.
pub fn print(args: &[String], out: &mut impl Write) -> Result<()> {
    let config = PrintConfig::from_args(args)?;
    let m = read_matrix(&config.input)?;
    write!(out, "{}", MatrixDisplay(&m))?;
    out.flush()?;
    Ok(())
}
