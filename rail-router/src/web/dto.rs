//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::router::{PathNode, PathResult};
use crate::segments::Segment;

/// Request to find a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Start station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// Rank by transfers before distance (defaults to server config)
    pub prefer_fewer_transfers: Option<bool>,
}

/// A stop in a route.
#[derive(Debug, Serialize)]
pub struct PathNodeResult {
    pub station: String,
    pub line: String,
    pub coords: [f64; 3],
}

impl PathNodeResult {
    /// Convert from a path node.
    pub fn from_node(node: &PathNode) -> Self {
        Self {
            station: node.station.clone(),
            line: node.line.to_string(),
            coords: node.coords.into(),
        }
    }
}

/// A same-line run of a route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub line: String,
    pub stations: Vec<String>,
    pub start: [f64; 3],
    pub end: [f64; 3],
}

impl SegmentResult {
    /// Convert from a segment.
    pub fn from_segment(segment: &Segment) -> Self {
        Self {
            line: segment.line.to_string(),
            stations: segment.stations.clone(),
            start: segment.start.into(),
            end: segment.end.into(),
        }
    }
}

/// Response for a route query.
///
/// An unreachable or unknown destination is reported as `found: false`
/// with empty lists and zero totals.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub found: bool,
    pub transfers: usize,
    pub distance: f64,
    pub lines: Vec<String>,
    pub path: Vec<PathNodeResult>,
    pub segments: Vec<SegmentResult>,
}

impl RouteResponse {
    /// Convert from a search result.
    pub fn from_result(result: &PathResult) -> Self {
        let segments = result
            .route()
            .map(|route| route.segments())
            .unwrap_or_default();

        Self {
            found: result.is_found(),
            transfers: result.transfers(),
            distance: result.distance(),
            lines: result.lines().iter().map(ToString::to_string).collect(),
            path: result.path().iter().map(PathNodeResult::from_node).collect(),
            segments: segments.iter().map(SegmentResult::from_segment).collect(),
        }
    }
}

/// Response listing known stations.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<String>,
}
