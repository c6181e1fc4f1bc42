use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use mv_core::{Matrix, Shape};

use crate::error::{MatrixFileError, Result};
use crate::header::MatrixHeader;

/// Write `matrix` to `path` in the binary matrix format, replacing any
/// existing file.
///
/// The data goes to a temporary file in the same directory which is renamed
/// over `path` only once fully written, so a failed write leaves `path`
/// untouched.
pub fn write_matrix(path: impl AsRef<Path>, matrix: &Matrix) -> Result<()> {
    write_raw(path.as_ref(), matrix.shape(), matrix.data())
}

/// Write `y` to `path` as an `m`x1 column vector.
pub fn write_vector(path: impl AsRef<Path>, y: &[f64]) -> Result<()> {
    write_raw(path.as_ref(), Shape::column(y.len()), y)
}

fn write_raw(path: &Path, shape: Shape, data: &[f64]) -> Result<()> {
    let header = MatrixHeader::for_shape(shape).ok_or(MatrixFileError::TooLarge {
        rows: shape.rows(),
        cols: shape.cols(),
    })?;

    replace_file(path, |writer| {
        header.write(writer)?;
        for v in data {
            writer.write_all(&v.to_ne_bytes())?;
        }
        Ok(())
    })?;

    debug!(path = %path.display(), %shape, "wrote matrix");
    Ok(())
}

/// Fills a sibling temporary file with `fill` and renames it to `path`.
/// On any error the temporary file is removed and `path` is not modified.
fn replace_file(
    path: &Path,
    fill: impl FnOnce(&mut BufWriter<&mut File>) -> io::Result<()>,
) -> Result<()> {
    let io = |e| MatrixFileError::io(path, e);
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        fill(&mut writer).map_err(io)?;
        writer.flush().map_err(io)?;
    }
    tmp.persist(path).map_err(|e| io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_matrix;

    #[test]
    fn test_matrix_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.mat");
        let data = vec![1.0, -0.0, f64::MIN_POSITIVE, 1e300, 3.25, -7.5];
        let a = Matrix::new(data, Shape::new(2, 3)).unwrap();

        write_matrix(&path, &a).unwrap();
        let back = read_matrix(&path).unwrap();

        assert_eq!(back.shape(), a.shape());
        let same = a
            .data()
            .iter()
            .zip(back.data())
            .all(|(x, y)| x.to_bits() == y.to_bits());
        assert!(same, "{:?} != {:?}", a.data(), back.data());
    }

    #[test]
    fn test_vector_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("y.mat");
        write_vector(&path, &[6.0, 15.0]).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 8 + 2 * 8);
        assert_eq!(&bytes[0..4], &2i32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &1i32.to_ne_bytes());
        assert_eq!(&bytes[8..16], &6.0f64.to_ne_bytes());
        assert_eq!(&bytes[16..24], &15.0f64.to_ne_bytes());
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("y.mat");
        std::fs::write(&path, b"stale contents that are longer than the result").unwrap();

        write_vector(&path, &[1.5]).unwrap();
        assert_eq!(std::fs::read(&path).unwrap().len(), 8 + 8);
        assert_eq!(read_matrix(&path).unwrap().data(), &[1.5]);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_write_leaves_target_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("y.mat");
        std::fs::write(&path, b"previous").unwrap();

        let err = replace_file(&path, |writer| {
            writer.write_all(&[0u8; 12])?;
            Err(io::Error::new(io::ErrorKind::Other, "device full"))
        })
        .unwrap_err();

        assert!(matches!(err, MatrixFileError::Io { .. }));
        assert_eq!(std::fs::read(&path).unwrap(), b"previous");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_write_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("y.mat");
        let result = replace_file(&path, |_| Err(io::Error::new(io::ErrorKind::Other, "boom")));
        assert!(result.is_err());
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("y.mat");
        let err = write_vector(&path, &[1.0]).unwrap_err();
        assert!(matches!(err, MatrixFileError::Io { .. }));
    }
}
