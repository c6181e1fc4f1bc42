use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use mv_core::{MatVecError, Matrix};

use crate::error::{MatrixFileError, Result};
use crate::header::{MatrixHeader, ELEMENT_LEN, HEADER_LEN};

/// Open and decode a binary matrix file.
///
/// The file length is checked against the header before anything else, then
/// the file is memory-mapped and the payload decoded into an owned buffer.
/// Bytes past the declared payload are ignored.
pub fn read_matrix(path: impl AsRef<Path>) -> Result<Matrix> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| MatrixFileError::io(path, e))?;
    let actual = file
        .metadata()
        .map_err(|e| MatrixFileError::io(path, e))?
        .len();
    if actual < HEADER_LEN as u64 {
        return Err(MatrixFileError::Truncated {
            path: path.to_path_buf(),
            expected: HEADER_LEN as u64,
            actual,
        });
    }

    // SAFETY: the map is read-only and dropped before returning; the decoded
    // data is copied out, so later changes to the file cannot be observed.
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| MatrixFileError::io(path, e))?;
    let matrix = decode_matrix(path, &mmap)?;
    debug!(path = %path.display(), shape = %matrix.shape(), "read matrix");
    Ok(matrix)
}

/// Decode a complete matrix file image. `path` is only used in errors.
pub fn decode_matrix(path: &Path, bytes: &[u8]) -> Result<Matrix> {
    let truncated = |expected: u64| MatrixFileError::Truncated {
        path: path.to_path_buf(),
        expected,
        actual: bytes.len() as u64,
    };

    let header = MatrixHeader::from_bytes(bytes).ok_or_else(|| truncated(HEADER_LEN as u64))?;
    let shape = header
        .shape()
        .ok_or_else(|| MatrixFileError::InvalidDimensions {
            path: path.to_path_buf(),
            rows: header.rows,
            cols: header.cols,
        })?;

    let too_large = || MatrixFileError::TooLarge {
        rows: shape.rows(),
        cols: shape.cols(),
    };
    let expected = header
        .payload_len()
        .and_then(|len| len.checked_add(HEADER_LEN as u64))
        .ok_or_else(too_large)?;
    if (bytes.len() as u64) < expected {
        return Err(truncated(expected));
    }

    let numel = shape.checked_numel().ok_or_else(too_large)?;
    let mut data = Vec::new();
    data.try_reserve_exact(numel)
        .map_err(|_| MatVecError::Allocation {
            what: "matrix data",
            elements: numel,
        })?;

    let payload = &bytes[HEADER_LEN..HEADER_LEN + numel * ELEMENT_LEN];
    for chunk in payload.chunks_exact(ELEMENT_LEN) {
        let mut buf = [0u8; ELEMENT_LEN];
        buf.copy_from_slice(chunk);
        data.push(f64::from_ne_bytes(buf));
    }

    Ok(Matrix::new(data, shape)?)
}
