//! Station graph keyed by (station name, line) pairs.
//!
//! The same physical station served by two lines is two nodes joined by
//! zero-weight transfer edges. A [`Graph`] is built once per line-set
//! snapshot by [`build`] and is read-only afterwards, so it can be shared
//! across concurrent route queries behind an `Arc`.

mod builder;

use std::collections::HashMap;

use crate::domain::{Coordinate, LineId};

pub use builder::build;

/// Index of a node in a [`Graph`].
///
/// Only meaningful for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Identity of a graph node: a station on a particular line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeKey {
    pub station: String,
    pub line: LineId,
}

impl NodeKey {
    /// Create a new key.
    pub fn new(station: impl Into<String>, line: LineId) -> Self {
        Self {
            station: station.into(),
            line,
        }
    }
}

/// A directed arc to another node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Node at the far end.
    pub target: NodeId,

    /// Planar distance; exactly zero for transfers.
    pub distance: f64,

    /// Whether traversing this edge changes line.
    pub is_transfer: bool,
}

/// A station on one line, with its outgoing edges.
#[derive(Debug, Clone)]
pub struct Node {
    pub key: NodeKey,
    pub coords: Coordinate,
    pub edges: Vec<Edge>,
}

impl Node {
    /// Station name of this node.
    pub fn station(&self) -> &str {
        &self.key.station
    }

    /// Line this node belongs to.
    pub fn line(&self) -> &LineId {
        &self.key.line
    }
}

/// Immutable routing graph.
///
/// Nodes are stored in insertion order (line order, then station order
/// within each line); this order is the deterministic tie-break used by the
/// router.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<NodeKey, NodeId>,
    by_station: HashMap<String, Vec<NodeId>>,
}

impl Graph {
    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Look up a node id by key.
    pub fn find(&self, station: &str, line: &LineId) -> Option<NodeId> {
        self.by_station
            .get(station)?
            .iter()
            .copied()
            .find(|id| self.nodes[id.0].key.line == *line)
    }

    /// Key of the node with this id.
    pub fn key(&self, id: NodeId) -> &NodeKey {
        &self.nodes[id.0].key
    }

    /// All nodes for a station name, one per serving line, in insertion order.
    pub fn nodes_for_station(&self, station: &str) -> &[NodeId] {
        self.by_station
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if any line serves a station with this name.
    pub fn has_station(&self, station: &str) -> bool {
        self.by_station.contains_key(station)
    }

    /// Distinct station names, sorted.
    pub fn station_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_station.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over all nodes with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Insert a node, or refresh the coordinate of an existing one.
    fn upsert(&mut self, key: NodeKey, coords: Coordinate) -> NodeId {
        if let Some(&id) = self.index.get(&key) {
            self.nodes[id.0].coords = coords;
            return id;
        }

        let id = NodeId(self.nodes.len());
        self.by_station
            .entry(key.station.clone())
            .or_default()
            .push(id);
        self.index.insert(key.clone(), id);
        self.nodes.push(Node {
            key,
            coords,
            edges: Vec::new(),
        });
        id
    }

    fn add_edge(&mut self, from: NodeId, edge: Edge) {
        let edges = &mut self.nodes[from.0].edges;
        if !edges.iter().any(|e| e.target == edge.target) {
            edges.push(edge);
        }
    }
}
