//! Mesh file I/O for the directed-edge toolchain.
//!
//! Three plain-text formats, from least to most connectivity:
//!
//! - **`.tri`** - triangle soup: a triangle count followed by nine
//!   coordinates per triangle
//! - **`.face`** - indexed mesh: `Vertex` and `Face` records
//! - **`.diredge`** - directed-edge mesh: a `.face` file plus
//!   `FirstDirectedEdge` and `OtherHalf` records
//!
//! Readers check syntax only. Whether the records describe a consistent
//! mesh is decided by `diredge-topology`.
//!
//! # Example
//!
//! ```no_run
//! use diredge_io::{load_tri, save_face};
//!
//! let soup = load_tri("bunny.tri").unwrap();
//! save_face(&soup.to_indexed(), "bunny", "bunny.face").unwrap();
//! ```
//!
//! # Format Detection
//!
//! ```no_run
//! use diredge_io::load_indexed;
//!
//! // Any of the three formats, by extension
//! let mesh = load_indexed("cube.diredge").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod diredge;
mod error;
mod face;
mod records;
mod tri;

pub use diredge::{load_diredge, read_diredge, save_diredge, write_diredge};
pub use error::{IoError, IoResult};
pub use face::{load_face, read_face, save_face, write_face};
pub use tri::{load_tri, read_tri, save_tri, write_tri};

use std::fs::File;
use std::path::Path;

use diredge_types::IndexedMesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// Triangle soup.
    Tri,
    /// Indexed vertices and faces.
    Face,
    /// Indexed mesh with directed-edge connectivity.
    Diredge,
}

impl MeshFormat {
    /// Detect format from file extension.
    ///
    /// Returns `None` if the extension is not recognized.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "tri" => Some(Self::Tri),
            "face" => Some(Self::Face),
            "diredge" => Some(Self::Diredge),
            _ => None,
        }
    }

    /// Get the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Tri => "tri",
            Self::Face => "face",
            Self::Diredge => "diredge",
        }
    }
}

/// The object name written into file headers: the file stem of `path`.
#[must_use]
pub fn object_name<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_stem()
        .map_or_else(|| "mesh".to_string(), |s| s.to_string_lossy().into_owned())
}

/// Load the indexed mesh from a file of any supported format, detecting the
/// format from the extension.
///
/// Triangle soups are welded on exact coordinates. Connectivity records of a
/// `.diredge` file are dropped.
///
/// # Errors
///
/// Returns an error if:
/// - The file format cannot be determined from the extension
/// - The file cannot be read
/// - The file content is invalid for the detected format
pub fn load_indexed<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let format = MeshFormat::from_path(path).ok_or_else(|| IoError::UnknownFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    match format {
        MeshFormat::Tri => Ok(load_tri(path)?.to_indexed()),
        MeshFormat::Face => load_face(path),
        MeshFormat::Diredge => Ok(load_diredge(path)?.mesh),
    }
}

/// Open a file for reading, mapping a missing file to
/// [`IoError::FileNotFound`].
pub(crate) fn open(path: &Path) -> IoResult<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn format_from_path() {
        assert_eq!(MeshFormat::from_path("bunny.tri"), Some(MeshFormat::Tri));
        assert_eq!(MeshFormat::from_path("a/b/cube.FACE"), Some(MeshFormat::Face));
        assert_eq!(
            MeshFormat::from_path("/path/to/cube.diredge"),
            Some(MeshFormat::Diredge)
        );
        assert_eq!(MeshFormat::from_path("cube.stl"), None);
        assert_eq!(MeshFormat::from_path("cube"), None);
    }

    #[test]
    fn extension_matches_detection() {
        for format in [MeshFormat::Tri, MeshFormat::Face, MeshFormat::Diredge] {
            let name = format!("mesh.{}", format.extension());
            assert_eq!(MeshFormat::from_path(name), Some(format));
        }
    }

    #[test]
    fn object_name_is_stem() {
        assert_eq!(object_name("data/torus.face"), "torus");
        assert_eq!(object_name("cube"), "cube");
    }

    #[test]
    fn load_unknown_format() {
        assert!(matches!(
            load_indexed("model.xyz"),
            Err(IoError::UnknownFormat { ref extension }) if extension == "xyz"
        ));
    }

    #[test]
    fn load_each_format() {
        let dir = tempfile::tempdir().unwrap();
        let tri = dir.path().join("t.tri");
        std::fs::write(&tri, "1\n0 0 0\n1 0 0\n0 1 0\n").unwrap();

        let mesh = load_indexed(&tri).unwrap();
        assert_eq!(mesh.vertices.len(), 3);

        let face = dir.path().join("t.face");
        save_face(&mesh, "t", &face).unwrap();
        assert_eq!(load_indexed(&face).unwrap(), mesh);
    }
}
