//! Triangle soup `.tri` files.
//!
//! The first token is the number of triangles; the rest are coordinates,
//! three per corner and three corners per triangle, with no ids. Line breaks
//! carry no meaning.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use diredge_types::{Point3, TriangleSoup};
use tracing::debug;

use crate::error::{IoError, IoResult};
use crate::open;

/// Coordinates per triangle.
const VALUES_PER_TRIANGLE: usize = 9;

/// Load a triangle soup from a `.tri` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a token is not a number, or
/// the number of triangles differs from the declared count.
///
/// # Example
///
/// ```no_run
/// use diredge_io::load_tri;
///
/// let soup = load_tri("bunny.tri").unwrap();
/// let mesh = soup.to_indexed();
/// ```
pub fn load_tri<P: AsRef<Path>>(path: P) -> IoResult<TriangleSoup> {
    let path = path.as_ref();
    let soup = read_tri(open(path)?)?;
    debug!("Read {} triangles from {}", soup.len(), path.display());
    Ok(soup)
}

/// Read a triangle soup in `.tri` format.
///
/// # Errors
///
/// See [`load_tri`].
pub fn read_tri<R: Read>(mut reader: R) -> IoResult<TriangleSoup> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut tokens = text.split_whitespace();
    let declared: usize = tokens
        .next()
        .ok_or_else(|| IoError::invalid_content("empty triangle soup, expected a triangle count"))?
        .parse()?;

    let values = tokens
        .map(str::parse::<f64>)
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() % VALUES_PER_TRIANGLE != 0 {
        return Err(IoError::invalid_content(format!(
            "{} coordinates do not form whole triangles",
            values.len()
        )));
    }
    let found = values.len() / VALUES_PER_TRIANGLE;
    if found != declared {
        return Err(IoError::InvalidFaceCount {
            expected: declared,
            got: found,
        });
    }

    let triangles = values
        .chunks_exact(VALUES_PER_TRIANGLE)
        .map(|t| {
            [
                Point3::new(t[0], t[1], t[2]),
                Point3::new(t[3], t[4], t[5]),
                Point3::new(t[6], t[7], t[8]),
            ]
        })
        .collect();

    Ok(TriangleSoup { triangles })
}

/// Save a triangle soup as a `.tri` file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_tri<P: AsRef<Path>>(soup: &TriangleSoup, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_tri(soup, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a triangle soup in `.tri` format, one corner per line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_tri<W: Write>(soup: &TriangleSoup, writer: &mut W) -> IoResult<()> {
    writeln!(writer, "{}", soup.len())?;
    for p in soup.triangles.iter().flatten() {
        writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TWO_TRIANGLES: &str = "2
0 0 0
1 0 0
0 1 0
1 0 0 1 1 0
0 1 0
";

    #[test]
    fn reads_declared_triangles() {
        let soup = read_tri(TWO_TRIANGLES.as_bytes()).unwrap();
        assert_eq!(soup.len(), 2);
        assert_relative_eq!(soup.triangles[1][1], Point3::new(1.0, 1.0, 0.0));
        assert_eq!(soup.to_indexed().vertices.len(), 4);
    }

    #[test]
    fn count_must_match() {
        let text = TWO_TRIANGLES.replacen('2', "3", 1);
        assert!(matches!(
            read_tri(text.as_bytes()).unwrap_err(),
            IoError::InvalidFaceCount {
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn partial_triangle_is_invalid() {
        let text = format!("{TWO_TRIANGLES}0.5 0.5 0.5\n");
        assert!(matches!(
            read_tri(text.as_bytes()).unwrap_err(),
            IoError::InvalidContent { .. }
        ));
    }

    #[test]
    fn non_numeric_tokens() {
        assert!(matches!(
            read_tri("1\n0 0 zero 1 0 0 0 1 0".as_bytes()).unwrap_err(),
            IoError::ParseFloat(_)
        ));
        assert!(matches!(
            read_tri("two".as_bytes()).unwrap_err(),
            IoError::ParseInt(_)
        ));
        assert!(matches!(
            read_tri("".as_bytes()).unwrap_err(),
            IoError::InvalidContent { .. }
        ));
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two.tri");
        let soup = read_tri(TWO_TRIANGLES.as_bytes()).unwrap();

        save_tri(&soup, &path).unwrap();
        assert_eq!(load_tri(&path).unwrap(), soup);
    }
}
