//! Graph construction from line data.

use std::collections::HashMap;

use tracing::debug;

use super::{Edge, Graph, NodeId, NodeKey};
use crate::domain::{Line, LineId};

/// Build a routing graph from a set of lines.
///
/// Every (station, line) pair becomes one node. Adjacent stations on a line
/// are joined in both directions by edges weighted with their planar
/// distance, and nodes sharing a station name are joined pairwise by
/// zero-weight transfer edges.
///
/// Construction never fails. Lines without stations are skipped. A station
/// name repeated within one line collapses to a single node whose
/// coordinate is the last occurrence's.
pub fn build(lines: &[Line]) -> Graph {
    let mut graph = Graph::default();

    // Station name -> lines serving it. Lives only for this call.
    let mut served_by: HashMap<&str, Vec<&LineId>> = HashMap::new();

    // First pass: nodes.
    let mut line_nodes: Vec<Vec<NodeId>> = Vec::with_capacity(lines.len());
    for line in lines {
        if line.stations.is_empty() {
            debug!(line = %line.id, "Skipping line without stations");
        }
        let ids = line
            .stations
            .iter()
            .map(|station| {
                let serving = served_by.entry(station.name.as_str()).or_default();
                if !serving.contains(&&line.id) {
                    serving.push(&line.id);
                }
                graph.upsert(NodeKey::new(&station.name, line.id.clone()), station.coords)
            })
            .collect();
        line_nodes.push(ids);
    }

    // Second pass: edges.
    let mut transfers = 0;
    for (line, ids) in lines.iter().zip(&line_nodes) {
        for (i, station) in line.stations.iter().enumerate() {
            let here = ids[i];

            if i > 0 {
                let prev = &line.stations[i - 1];
                graph.add_edge(
                    here,
                    Edge {
                        target: ids[i - 1],
                        distance: station.coords.planar_distance(&prev.coords),
                        is_transfer: false,
                    },
                );
            }

            if i + 1 < line.stations.len() {
                let next = &line.stations[i + 1];
                graph.add_edge(
                    here,
                    Edge {
                        target: ids[i + 1],
                        distance: station.coords.planar_distance(&next.coords),
                        is_transfer: false,
                    },
                );
            }

            let Some(serving) = served_by.get(station.name.as_str()) else {
                continue;
            };
            for other in serving.iter().filter(|other| ***other != line.id) {
                let Some(target) = graph.find(&station.name, other) else {
                    continue;
                };
                let before = graph.node(here).edges.len();
                graph.add_edge(
                    here,
                    Edge {
                        target,
                        distance: 0.0,
                        is_transfer: true,
                    },
                );
                transfers += graph.node(here).edges.len() - before;
            }
        }
    }

    debug!(
        lines = lines.len(),
        nodes = graph.len(),
        edges = graph.edge_count(),
        transfers,
        "Built station graph"
    );

    graph
}
