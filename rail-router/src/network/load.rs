//! Loading line sets from JSON.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use super::LoadError;
use crate::domain::{DomainError, Line};
use crate::graph::{self, Graph};

/// A validated collection of lines.
///
/// Line identifiers are non-blank and unique. Station lists are taken as
/// given; the graph builder tolerates empty lines and repeated names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSet {
    lines: Vec<Line>,
}

impl LineSet {
    /// Validate a collection of lines.
    pub fn new(lines: Vec<Line>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for line in &lines {
            if line.id.as_str().trim().is_empty() {
                return Err(DomainError::EmptyLineId);
            }
            if !seen.insert(&line.id) {
                return Err(DomainError::DuplicateLine(line.id.clone()));
            }
        }
        Ok(Self { lines })
    }

    /// Parse a JSON array of lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_router::network::LineSet;
    ///
    /// let json = r#"[
    ///     {"id": "Red", "stations": [
    ///         {"name": "Harbour", "coords": [0, 64, 0]},
    ///         {"name": "Market", "coords": [30, 64, 40]}
    ///     ]}
    /// ]"#;
    /// let lines = LineSet::from_json_str(json).unwrap();
    /// assert_eq!(lines.len(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let lines: Vec<Line> = serde_json::from_str(json)?;
        Ok(Self::new(lines)?)
    }

    /// Read and parse a JSON line file.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_json_str(&contents)?;
        debug!(path = %path.display(), lines = set.len(), "Loaded line data");
        Ok(set)
    }

    /// The lines, in file order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Build the routing graph for these lines.
    pub fn build_graph(&self) -> Graph {
        graph::build(&self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, LineId, Station};
    use tempfile::tempdir;

    const TWO_LINES: &str = r#"[
        {"id": "Red", "stations": [
            {"name": "West", "coords": [-10, 64, 0]},
            {"name": "Central", "coords": [0, 64, 0]}
        ]},
        {"id": "Blue", "stations": [
            {"name": "Central", "coords": [0, 70, 0]},
            {"name": "South", "coords": [0, 70, 10]}
        ]}
    ]"#;

    #[test]
    fn parse_lines() {
        let set = LineSet::from_json_str(TWO_LINES).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.lines()[0].id, LineId::new("Red"));
        assert_eq!(set.lines()[1].stations[1].name, "South");
        assert_eq!(
            set.lines()[1].stations[0].coords,
            Coordinate::new(0.0, 70.0, 0.0)
        );
    }

    #[test]
    fn build_graph_from_set() {
        let set = LineSet::from_json_str(TWO_LINES).unwrap();
        let graph = set.build_graph();

        assert_eq!(graph.len(), 4);
        assert_eq!(graph.nodes_for_station("Central").len(), 2);
    }

    #[test]
    fn empty_array() {
        let set = LineSet::from_json_str("[]").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn empty_station_list_accepted() {
        let set = LineSet::from_json_str(r#"[{"id": "Ghost", "stations": []}]"#).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.build_graph().is_empty());
    }

    #[test]
    fn reject_malformed_json() {
        let err = LineSet::from_json_str(r#"[{"id": "Red"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));

        let err = LineSet::from_json_str("not json").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn reject_duplicate_line() {
        let json = r#"[
            {"id": "Red", "stations": []},
            {"id": "Red", "stations": []}
        ]"#;
        let err = LineSet::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Domain(DomainError::DuplicateLine(ref id)) if id.as_str() == "Red"
        ));
    }

    #[test]
    fn reject_blank_line_id() {
        let lines = vec![Line::new(
            LineId::new(" "),
            vec![Station::new("A", Coordinate::default())],
        )];
        assert_eq!(LineSet::new(lines), Err(DomainError::EmptyLineId));
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lines.json");
        std::fs::write(&path, TWO_LINES).unwrap();

        let set = LineSet::from_path(&path).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn missing_file() {
        let err = LineSet::from_path(Path::new("/nonexistent/lines.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
