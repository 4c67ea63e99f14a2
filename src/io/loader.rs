//! Readers for map (edge) files and package files.
//!
//! Both formats are headerless delimited text. Blank lines and lines starting
//! with `#` are skipped, fields are trimmed, and in whitespace mode any run of
//! spaces or tabs separates fields.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::Delimiter;
use crate::error::RoutingError;
use crate::graph::{EdgeRecord, LocationGraph};
use crate::models::{Package, PackageTable};

/// Errors raised while reading input files.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    Io(std::io::Error),
    /// The CSV reader failed.
    Csv(csv::Error),
    /// A line has the wrong shape or an unparsable field.
    Record {
        /// 1-based line number.
        line: u64,
        /// What was wrong with it.
        message: String,
    },
    /// The records could not be turned into a graph.
    Routing(RoutingError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Csv(e) => write!(f, "csv error: {e}"),
            Self::Record { line, message } => write!(f, "line {line}: {message}"),
            Self::Routing(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::Record { .. } => None,
            Self::Routing(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<RoutingError> for LoadError {
    fn from(e: RoutingError) -> Self {
        Self::Routing(e)
    }
}

/// Reads fixed-width records, deserializing each line into `T`.
fn read_records<R, T>(
    reader: R,
    delimiter: Delimiter,
    layout: &[&str],
) -> Result<Vec<T>, LoadError>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .delimiter(delimiter.as_byte())
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.records() {
        let raw = row?;
        let line = raw.position().map_or(0, |p| p.line());

        let fields: StringRecord = match delimiter {
            Delimiter::Whitespace => raw.iter().flat_map(str::split_whitespace).collect(),
            Delimiter::Byte(_) => raw.iter().collect(),
        };
        if fields.iter().all(str::is_empty) {
            continue;
        }
        // `comment` only matches `#` in column 0.
        if fields.get(0).is_some_and(|f| f.starts_with('#')) {
            continue;
        }
        if fields.len() != layout.len() {
            return Err(LoadError::Record {
                line,
                message: format!(
                    "expected {} fields ({}), found {}",
                    layout.len(),
                    layout.join(" "),
                    fields.len()
                ),
            });
        }

        let record = fields.deserialize(None).map_err(|e| LoadError::Record {
            line,
            message: e.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Reads `FROM TO DISTANCE` edge records.
///
/// # Examples
///
/// ```
/// use u_delivery::config::Delimiter;
/// use u_delivery::io::read_edges;
///
/// let text = "A B 2\nB C 3.5\n";
/// let edges = read_edges(text.as_bytes(), Delimiter::Whitespace).unwrap();
/// assert_eq!(edges.len(), 2);
/// assert_eq!(edges[1].distance, 3.5);
/// ```
pub fn read_edges<R: Read>(reader: R, delimiter: Delimiter) -> Result<Vec<EdgeRecord>, LoadError> {
    read_records(reader, delimiter, &["FROM", "TO", "DISTANCE"])
}

/// Reads `PACKAGE_ID DESTINATION` records into a package table.
///
/// A repeated package id replaces the earlier package.
pub fn read_packages<R: Read>(reader: R, delimiter: Delimiter) -> Result<PackageTable, LoadError> {
    let packages: Vec<Package> = read_records(reader, delimiter, &["PACKAGE_ID", "DESTINATION"])?;
    let mut table = PackageTable::new();
    for package in packages {
        if let Some(old) = table.insert(package) {
            warn!(id = %old.id, "duplicate package id, keeping the later record");
        }
    }
    Ok(table)
}

/// Reads a map file and builds the location graph from it.
pub fn load_graph(path: impl AsRef<Path>, delimiter: Delimiter) -> Result<LocationGraph, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), %delimiter, "reading map file");
    let edges = read_edges(File::open(path)?, delimiter)?;
    let graph = LocationGraph::from_edges(&edges)?;
    info!(
        path = %path.display(),
        locations = graph.size(),
        edges = graph.num_edges(),
        "loaded map data"
    );
    Ok(graph)
}

/// Reads a package file.
pub fn load_packages(path: impl AsRef<Path>, delimiter: Delimiter) -> Result<PackageTable, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), %delimiter, "reading package file");
    let table = read_packages(File::open(path)?, delimiter)?;
    info!(path = %path.display(), packages = table.len(), "loaded package data");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    const MAP: &str = "\
# from to distance
A B 2
B\tC   3

A C 10
C D 1.5
";

    #[test]
    fn test_read_edges_whitespace() {
        let edges = read_edges(MAP.as_bytes(), Delimiter::Whitespace).unwrap();
        assert_eq!(
            edges,
            vec![
                EdgeRecord::new("A", "B", 2.0),
                EdgeRecord::new("B", "C", 3.0),
                EdgeRecord::new("A", "C", 10.0),
                EdgeRecord::new("C", "D", 1.5),
            ]
        );
    }

    #[test]
    fn test_read_edges_indented_comment() {
        let text = "  # indented comment\nA B 2\n\t# tabbed\n";
        let edges = read_edges(text.as_bytes(), Delimiter::Whitespace).unwrap();
        assert_eq!(edges, vec![EdgeRecord::new("A", "B", 2.0)]);

        let text = " # note\nPKG001, B\n";
        let table = read_packages(text.as_bytes(), Delimiter::Byte(b',')).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_read_edges_comma() {
        let text = "A, B, 2\nB,C,3\n";
        let edges = read_edges(text.as_bytes(), Delimiter::Byte(b',')).unwrap();
        assert_eq!(edges[0], EdgeRecord::new("A", "B", 2.0));
        assert_eq!(edges[1], EdgeRecord::new("B", "C", 3.0));
    }

    #[test]
    fn test_read_edges_bad_distance() {
        let text = "A B 2\nB C far\n";
        match read_edges(text.as_bytes(), Delimiter::Whitespace) {
            Err(LoadError::Record { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected record error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_edges_wrong_field_count() {
        let text = "A B\n";
        let err = read_edges(text.as_bytes(), Delimiter::Whitespace).unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 1: expected 3 fields (FROM TO DISTANCE), found 2"
        );
    }

    #[test]
    fn test_read_packages() {
        let text = "PKG001 B\nPKG002 D\nPKG003 B\nPKG002 C\n";
        let table = read_packages(text.as_bytes(), Delimiter::Whitespace).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.get("PKG002").map(|p| p.destination.clone()),
            Some(Location::new("C"))
        );
        assert_eq!(table.pending(), vec![Location::new("B"), Location::new("C")]);
    }

    #[test]
    fn test_negative_distance_rejected_on_build() {
        let edges = read_edges("A B -4\n".as_bytes(), Delimiter::Whitespace).unwrap();
        let err = LocationGraph::from_edges(&edges).map_err(LoadError::from).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Routing(RoutingError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_graph("definitely/not/here.txt", Delimiter::Whitespace).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
