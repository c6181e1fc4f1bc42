use rand::Rng;

use mv_core::error::try_zeroed;
use mv_core::{MatVecError, Matrix, Result, Shape};

/// Upper bound (exclusive) of generated element values.
pub const MAX_VALUE: f64 = 10.0;

/// Fill a matrix of `shape` with uniform random values in `[0, MAX_VALUE)`.
///
/// Pass a seeded RNG (e.g. `StdRng::seed_from_u64`) for reproducible output.
pub fn random_matrix(shape: Shape, rng: &mut impl Rng) -> Result<Matrix> {
    let numel = shape
        .checked_numel()
        .ok_or(MatVecError::ShapeOverflow { shape })?;
    let mut data = try_zeroed("matrix", numel)?;
    for v in data.iter_mut() {
        *v = rng.gen::<f64>() * MAX_VALUE;
    }
    Matrix::new(data, shape)
}
