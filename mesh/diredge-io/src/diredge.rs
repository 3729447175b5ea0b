//! Directed-edge `.diredge` files.
//!
//! A `.face` file plus one `FirstDirectedEdge` line per vertex and one
//! `OtherHalf` line per directed edge, with `-1` for "none". Records are
//! returned exactly as read; linking and checking them against each other is
//! the topology crate's job.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use diredge_types::DirectedEdgeRecords;
use tracing::debug;

use crate::error::IoResult;
use crate::open;
use crate::records::{edge_token, read_records, write_header, Grammar};

/// Load directed-edge records from a `.diredge` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a line carries an unknown
/// keyword, or a record is malformed. List lengths are not checked here.
///
/// # Example
///
/// ```no_run
/// use diredge_io::load_diredge;
///
/// let records = load_diredge("cube.diredge").unwrap();
/// println!("{} twins", records.twins.len());
/// ```
pub fn load_diredge<P: AsRef<Path>>(path: P) -> IoResult<DirectedEdgeRecords> {
    let path = path.as_ref();
    let records = read_diredge(BufReader::new(open(path)?))?;
    debug!(
        "Read {} vertices, {} faces, {} twins from {}",
        records.mesh.vertices.len(),
        records.mesh.faces.len(),
        records.twins.len(),
        path.display()
    );
    Ok(records)
}

/// Read directed-edge records in `.diredge` format.
///
/// # Errors
///
/// See [`load_diredge`].
pub fn read_diredge<R: BufRead>(reader: R) -> IoResult<DirectedEdgeRecords> {
    read_records(reader, Grammar::Diredge)
}

/// Save directed-edge records as a `.diredge` file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_diredge<P: AsRef<Path>>(
    records: &DirectedEdgeRecords,
    name: &str,
    path: P,
) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_diredge(records, name, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write directed-edge records in `.diredge` format.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_diredge<W: Write>(
    records: &DirectedEdgeRecords,
    name: &str,
    writer: &mut W,
) -> IoResult<()> {
    let mesh = &records.mesh;
    write_header(writer, name, mesh.vertices.len(), mesh.faces.len())?;

    for v in &mesh.vertices {
        let p = &v.position;
        writeln!(writer, "Vertex {}\t{} {} {}", v.id, p.x, p.y, p.z)?;
    }
    for (v, &edge) in records.first_directed_edges.iter().enumerate() {
        writeln!(writer, "FirstDirectedEdge {v}\t{}", edge_token(edge))?;
    }
    for f in &mesh.faces {
        let [a, b, c] = f.vertices;
        writeln!(writer, "Face {}\t{a} {b} {c}", f.id)?;
    }
    for (e, &twin) in records.twins.iter().enumerate() {
        writeln!(writer, "OtherHalf {e}\t{}", edge_token(twin))?;
    }

    Ok(())
}
