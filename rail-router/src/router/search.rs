//! Multi-source shortest-path search.

use std::collections::{BTreeSet, BinaryHeap};

use tracing::{debug, trace};

use super::config::RouterConfig;
use super::cost::{Cost, Label, State};
use crate::domain::{Coordinate, LineId};
use crate::graph::{Graph, NodeId};
use crate::segments::{Segment, simplify};

/// One stop along a found route.
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode {
    pub station: String,
    pub line: LineId,
    pub coords: Coordinate,
}

impl PathNode {
    /// Create a new path node.
    pub fn new(station: impl Into<String>, line: LineId, coords: Coordinate) -> Self {
        Self {
            station: station.into(),
            line,
            coords,
        }
    }
}

/// A route between two stations.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Nodes from start to end inclusive.
    pub path: Vec<PathNode>,

    /// Number of line changes.
    pub transfers: usize,

    /// Total planar distance travelled.
    pub distance: f64,

    /// Distinct lines used.
    pub lines: BTreeSet<LineId>,
}

impl Route {
    /// Fold the path into same-line segments.
    pub fn segments(&self) -> Vec<Segment> {
        simplify(&self.path)
    }
}

/// Outcome of a route query.
#[derive(Debug, Clone, PartialEq)]
pub enum PathResult {
    Found(Route),
    /// Unknown endpoint, or no connection between them.
    NotFound,
}

impl PathResult {
    /// Returns true if a route was found.
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    /// The found route, if any.
    pub fn route(&self) -> Option<&Route> {
        match self {
            PathResult::Found(route) => Some(route),
            PathResult::NotFound => None,
        }
    }

    /// Path nodes; empty when not found.
    pub fn path(&self) -> &[PathNode] {
        self.route().map(|r| r.path.as_slice()).unwrap_or(&[])
    }

    /// Transfer count; zero when not found.
    pub fn transfers(&self) -> usize {
        self.route().map_or(0, |r| r.transfers)
    }

    /// Total distance; zero when not found.
    pub fn distance(&self) -> f64 {
        self.route().map_or(0.0, |r| r.distance)
    }

    /// Lines used; empty when not found.
    pub fn lines(&self) -> BTreeSet<LineId> {
        self.route().map(|r| r.lines.clone()).unwrap_or_default()
    }
}

/// Find the best route between two station names.
///
/// Uses the default [`RouterConfig`] with the given transfer preference.
/// See [`find_path_with`].
pub fn find_path(graph: &Graph, start: &str, end: &str, prefer_fewer_transfers: bool) -> PathResult {
    find_path_with(
        graph,
        start,
        end,
        &RouterConfig::with_preference(prefer_fewer_transfers),
    )
}

/// Find the best route between two station names under `config`.
///
/// Every line serving `start` is a possible entry and every line serving
/// `end` a possible exit. Returns [`PathResult::NotFound`] if either name is
/// unknown or no route connects them. Identical names yield a single-node
/// route on the first line serving that station.
///
/// Equal-cost candidates are settled in the order they were discovered, so
/// repeated queries on the same graph return the same route.
pub fn find_path_with(graph: &Graph, start: &str, end: &str, config: &RouterConfig) -> PathResult {
    let entries = graph.nodes_for_station(start);
    if entries.is_empty() || !graph.has_station(end) {
        debug!(start, end, "Unknown station in route query");
        return PathResult::NotFound;
    }

    if start == end {
        return PathResult::Found(reconstruct(graph, &[], entries[0], Label::ORIGIN));
    }

    let mut labels: Vec<Option<Label>> = vec![None; graph.len()];
    let mut previous: Vec<Option<NodeId>> = vec![None; graph.len()];
    let mut visited = vec![false; graph.len()];
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    for &entry in entries {
        labels[entry.index()] = Some(Label::ORIGIN);
        heap.push(State {
            cost: Cost::of(Label::ORIGIN, config),
            seq,
            node: entry,
        });
        seq += 1;
    }

    let mut settled = 0usize;
    while let Some(State { node, .. }) = heap.pop() {
        if visited[node.index()] {
            continue;
        }
        visited[node.index()] = true;
        settled += 1;

        let Some(label) = labels[node.index()] else {
            continue;
        };
        let current = graph.node(node);

        trace!(
            station = current.station(),
            line = %current.line(),
            distance = label.distance,
            transfers = label.transfers,
            "Settled node"
        );

        if current.station() == end {
            let route = reconstruct(graph, &previous, node, label);
            debug!(
                start,
                end,
                settled,
                transfers = route.transfers,
                distance = route.distance,
                "Route found"
            );
            return PathResult::Found(route);
        }

        for edge in &current.edges {
            let next = edge.target;
            if visited[next.index()] {
                continue;
            }

            let candidate = Label {
                distance: label.distance + edge.distance,
                transfers: label.transfers + usize::from(edge.is_transfer),
            };
            let candidate_cost = Cost::of(candidate, config);

            let improves = match labels[next.index()] {
                None => true,
                Some(best) => candidate_cost.is_better_than(&Cost::of(best, config)),
            };
            if improves {
                labels[next.index()] = Some(candidate);
                previous[next.index()] = Some(node);
                heap.push(State {
                    cost: candidate_cost,
                    seq,
                    node: next,
                });
                seq += 1;
            }
        }
    }

    debug!(start, end, settled, "No route between stations");
    PathResult::NotFound
}

/// Walk predecessor links back from `last` and assemble the route.
fn reconstruct(graph: &Graph, previous: &[Option<NodeId>], last: NodeId, label: Label) -> Route {
    let mut ids = vec![last];
    let mut cursor = last;
    while let Some(prev) = previous.get(cursor.index()).copied().flatten() {
        ids.push(prev);
        cursor = prev;
    }
    ids.reverse();

    let path: Vec<PathNode> = ids
        .into_iter()
        .map(|id| {
            let node = graph.node(id);
            PathNode::new(node.station(), node.line().clone(), node.coords)
        })
        .collect();
    let lines = path.iter().map(|p| p.line.clone()).collect();

    Route {
        path,
        transfers: label.transfers,
        distance: label.distance,
        lines,
    }
}
