//! Line grammar shared by `.face` and `.diredge` files.
//!
//! ```text
//! # comment lines and blank lines are skipped
//! Vertex <id> <x> <y> <z>
//! FirstDirectedEdge <vertex> <edge>     (.diredge only, -1 = none)
//! Face <id> <v0> <v1> <v2>
//! OtherHalf <edge> <twin>               (.diredge only, -1 = boundary)
//! ```
//!
//! Every kind of record must list its ids densely from zero, in order. Kinds
//! may be interleaved.

use std::io::{BufRead, Write};
use std::str::FromStr;

use diredge_types::{DirectedEdgeRecords, EdgeId, Point3, VertexId};

use crate::error::{IoError, IoResult};

/// Which record keywords a file may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Grammar {
    /// `Vertex` and `Face`.
    Face,
    /// `Vertex`, `Face`, `FirstDirectedEdge` and `OtherHalf`.
    Diredge,
}

/// One parsed line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Record {
    Vertex { id: VertexId, position: Point3<f64> },
    Face { id: u32, vertices: [VertexId; 3] },
    FirstDirectedEdge { vertex: VertexId, edge: Option<EdgeId> },
    OtherHalf { edge: EdgeId, twin: Option<EdgeId> },
}

/// Parse one line. Returns `None` for comments and blank lines.
pub(crate) fn parse_line(line_no: usize, line: &str, grammar: Grammar) -> IoResult<Option<Record>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let keyword = parts[0];
    let diredge = grammar == Grammar::Diredge;

    let record = match keyword {
        "Vertex" => {
            let [id, x, y, z] = values::<4>(line_no, keyword, &parts)?;
            Record::Vertex {
                id: number(line_no, id)?,
                position: Point3::new(number(line_no, x)?, number(line_no, y)?, number(line_no, z)?),
            }
        }
        "Face" => {
            let [id, a, b, c] = values::<4>(line_no, keyword, &parts)?;
            Record::Face {
                id: number(line_no, id)?,
                vertices: [number(line_no, a)?, number(line_no, b)?, number(line_no, c)?],
            }
        }
        "FirstDirectedEdge" if diredge => {
            let [vertex, edge] = values::<2>(line_no, keyword, &parts)?;
            Record::FirstDirectedEdge {
                vertex: number(line_no, vertex)?,
                edge: optional_edge(line_no, edge)?,
            }
        }
        "OtherHalf" if diredge => {
            let [edge, twin] = values::<2>(line_no, keyword, &parts)?;
            Record::OtherHalf {
                edge: number(line_no, edge)?,
                twin: optional_edge(line_no, twin)?,
            }
        }
        _ => {
            return Err(IoError::UnrecognizedRecord {
                line: line_no,
                keyword: keyword.to_string(),
            })
        }
    };

    Ok(Some(record))
}

/// The `N` values following the keyword.
fn values<'a, const N: usize>(
    line_no: usize,
    keyword: &str,
    parts: &[&'a str],
) -> IoResult<[&'a str; N]> {
    <[&str; N]>::try_from(&parts[1..]).map_err(|_| {
        IoError::malformed(
            line_no,
            format!(
                "{keyword} expects {N} values, found {}",
                parts.len() - 1
            ),
        )
    })
}

fn number<T: FromStr>(line_no: usize, token: &str) -> IoResult<T> {
    token
        .parse()
        .map_err(|_| IoError::malformed(line_no, format!("invalid number '{token}'")))
}

/// An edge id where `-1` means none.
fn optional_edge(line_no: usize, token: &str) -> IoResult<Option<EdgeId>> {
    match number::<i64>(line_no, token)? {
        -1 => Ok(None),
        e => EdgeId::try_from(e)
            .map(Some)
            .map_err(|_| IoError::malformed(line_no, format!("invalid edge id '{token}'"))),
    }
}

fn check_sequence(line_no: usize, keyword: &str, expected: usize, found: u32) -> IoResult<()> {
    if found as usize == expected {
        Ok(())
    } else {
        Err(IoError::malformed(
            line_no,
            format!("expected {keyword} {expected}, found {keyword} {found}"),
        ))
    }
}

/// Read every record of a file.
///
/// For [`Grammar::Face`] the edge lists of the result are always empty.
pub(crate) fn read_records<R: BufRead>(reader: R, grammar: Grammar) -> IoResult<DirectedEdgeRecords> {
    let mut records = DirectedEdgeRecords::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        let Some(record) = parse_line(line_no, &line, grammar)? else {
            continue;
        };

        match record {
            Record::Vertex { id, position } => {
                check_sequence(line_no, "Vertex", records.mesh.vertices.len(), id)?;
                records.mesh.push_vertex(position);
            }
            Record::Face { id, vertices } => {
                check_sequence(line_no, "Face", records.mesh.faces.len(), id)?;
                records.mesh.push_face(vertices);
            }
            Record::FirstDirectedEdge { vertex, edge } => {
                check_sequence(
                    line_no,
                    "FirstDirectedEdge",
                    records.first_directed_edges.len(),
                    vertex,
                )?;
                records.first_directed_edges.push(edge);
            }
            Record::OtherHalf { edge, twin } => {
                check_sequence(line_no, "OtherHalf", records.twins.len(), edge)?;
                records.twins.push(twin);
            }
        }
    }

    Ok(records)
}

/// Write the `#` header block.
pub(crate) fn write_header<W: Write>(
    writer: &mut W,
    name: &str,
    vertices: usize,
    faces: usize,
) -> IoResult<()> {
    writeln!(writer, "#")?;
    writeln!(writer, "# Object Name: {name}")?;
    writeln!(writer, "# Vertices={vertices} Faces={faces}")?;
    writeln!(writer, "#")?;
    Ok(())
}

/// Format an optional edge id, `-1` for none.
pub(crate) fn edge_token(edge: Option<EdgeId>) -> String {
    edge.map_or_else(|| "-1".to_string(), |e| e.to_string())
}
