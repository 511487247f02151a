//! Route summaries as same-line segments.
//!
//! A raw path lists every (station, line) node, including both sides of
//! each transfer. For display it is folded into runs on a single line,
//! giving one entry per "ride line X from A to B" instruction.

use crate::domain::{Coordinate, LineId};
use crate::router::PathNode;

/// A maximal run of a path on one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub line: LineId,

    /// Stations in travel order, without consecutive repeats.
    pub stations: Vec<String>,

    /// Coordinate where the segment is boarded.
    pub start: Coordinate,

    /// Coordinate of the last station appended.
    pub end: Coordinate,
}

impl Segment {
    fn open(node: &PathNode) -> Self {
        Self {
            line: node.line.clone(),
            stations: vec![node.station.clone()],
            start: node.coords,
            end: node.coords,
        }
    }

    /// First station of the segment.
    pub fn first_station(&self) -> &str {
        &self.stations[0]
    }

    /// Last station of the segment.
    pub fn last_station(&self) -> &str {
        &self.stations[self.stations.len() - 1]
    }

    /// Number of stations in the segment.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false: a segment holds at least its boarding station.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Fold a path into maximal same-line segments.
///
/// A new segment starts whenever the line changes. Within a segment a
/// station is appended only if it differs from the previous one, so the
/// transfer station appears once at the end of one segment and once at the
/// start of the next.
///
/// # Examples
///
/// ```
/// use rail_router::domain::{Coordinate, LineId};
/// use rail_router::router::PathNode;
/// use rail_router::segments::simplify;
///
/// let at = |s: &str, l: &str| PathNode::new(s, LineId::new(l), Coordinate::default());
/// let path = [at("A", "L1"), at("B", "L1"), at("B", "L2"), at("C", "L2")];
///
/// let segments = simplify(&path);
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].stations, ["A", "B"]);
/// assert_eq!(segments[1].stations, ["B", "C"]);
/// ```
pub fn simplify(path: &[PathNode]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for node in path {
        match segments.last_mut() {
            Some(current) if current.line == node.line => {
                if current.last_station() != node.station {
                    current.stations.push(node.station.clone());
                    current.end = node.coords;
                }
            }
            _ => segments.push(Segment::open(node)),
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(station: &str, line: &str, x: f64) -> PathNode {
        PathNode::new(station, LineId::new(line), Coordinate::new(x, 64.0, 0.0))
    }

    #[test]
    fn empty_path() {
        assert!(simplify(&[]).is_empty());
    }

    #[test]
    fn single_node() {
        let segments = simplify(&[at("A", "L1", 0.0)]);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].stations, vec!["A"]);
        assert_eq!(segments[0].start, segments[0].end);
        assert_eq!(segments[0].first_station(), "A");
        assert_eq!(segments[0].last_station(), "A");
    }

    #[test]
    fn transfer_splits_segments() {
        let path = [
            at("A", "L1", 0.0),
            at("B", "L1", 1.0),
            at("B", "L2", 1.0),
            at("C", "L2", 2.0),
        ];
        let segments = simplify(&path);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].line, LineId::new("L1"));
        assert_eq!(segments[0].stations, vec!["A", "B"]);
        assert_eq!(segments[1].line, LineId::new("L2"));
        assert_eq!(segments[1].stations, vec!["B", "C"]);
    }

    #[test]
    fn coordinates_track_ends() {
        let path = [
            at("A", "L1", 0.0),
            at("B", "L1", 1.0),
            at("C", "L1", 2.0),
            at("C", "L2", 2.5),
            at("D", "L2", 9.0),
        ];
        let segments = simplify(&path);

        assert_eq!(segments[0].start.x, 0.0);
        assert_eq!(segments[0].end.x, 2.0);
        assert_eq!(segments[1].start.x, 2.5);
        assert_eq!(segments[1].end.x, 9.0);
    }

    #[test]
    fn repeated_station_on_same_line_collapses() {
        let path = [at("A", "L1", 0.0), at("A", "L1", 5.0), at("B", "L1", 1.0)];
        let segments = simplify(&path);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].stations, vec!["A", "B"]);
        // The collapsed repeat does not move the end
        assert_eq!(segments[0].end.x, 1.0);
    }

    #[test]
    fn returning_to_a_line_opens_new_segment() {
        let path = [
            at("A", "L1", 0.0),
            at("A", "L2", 0.0),
            at("B", "L2", 1.0),
            at("B", "L1", 1.0),
        ];
        let segments = simplify(&path);

        let lines: Vec<&str> = segments.iter().map(|s| s.line.as_str()).collect();
        assert_eq!(lines, vec!["L1", "L2", "L1"]);
        assert_eq!(segments[0].len(), 1);
        assert_eq!(segments[1].stations, vec!["A", "B"]);
    }
}
