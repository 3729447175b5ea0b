//! Indexed `.face` files: vertices plus faces referencing them by id.
//!
//! ```text
//! #
//! # Object Name: tetrahedron
//! # Vertices=4 Faces=4
//! #
//! Vertex 0	0 0 0
//! ...
//! Face 0	0 2 1
//! ...
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use diredge_types::IndexedMesh;
use tracing::debug;

use crate::error::IoResult;
use crate::open;
use crate::records::{read_records, write_header, Grammar};

/// Load an indexed mesh from a `.face` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a line carries a keyword
/// other than `Vertex` or `Face`, or a record is malformed.
///
/// # Example
///
/// ```no_run
/// use diredge_io::load_face;
///
/// let mesh = load_face("tetrahedron.face").unwrap();
/// println!("Loaded {} faces", mesh.faces.len());
/// ```
pub fn load_face<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let mesh = read_face(BufReader::new(open(path)?))?;
    debug!(
        "Read {} vertices, {} faces from {}",
        mesh.vertices.len(),
        mesh.faces.len(),
        path.display()
    );
    Ok(mesh)
}

/// Read an indexed mesh in `.face` format.
///
/// # Errors
///
/// See [`load_face`].
pub fn read_face<R: BufRead>(reader: R) -> IoResult<IndexedMesh> {
    Ok(read_records(reader, Grammar::Face)?.mesh)
}

/// Save an indexed mesh as a `.face` file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_face<P: AsRef<Path>>(mesh: &IndexedMesh, name: &str, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_face(mesh, name, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write an indexed mesh in `.face` format under the object name `name`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_face<W: Write>(mesh: &IndexedMesh, name: &str, writer: &mut W) -> IoResult<()> {
    write_header(writer, name, mesh.vertices.len(), mesh.faces.len())?;
    for v in &mesh.vertices {
        let p = &v.position;
        writeln!(writer, "Vertex {}\t{} {} {}", v.id, p.x, p.y, p.z)?;
    }
    for f in &mesh.faces {
        let [a, b, c] = f.vertices;
        writeln!(writer, "Face {}\t{a} {b} {c}", f.id)?;
    }
    Ok(())
}
