//! Search labels and their ordering.

use std::cmp::Ordering;

use super::config::{CostModel, RouterConfig};
use crate::graph::NodeId;

/// Best known way to reach a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Label {
    pub(super) distance: f64,
    pub(super) transfers: usize,
}

impl Label {
    pub(super) const ORIGIN: Label = Label {
        distance: 0.0,
        transfers: 0,
    };
}

/// Comparable cost of a label: compared on `primary`, then `secondary`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Cost {
    primary: f64,
    secondary: f64,
}

impl Cost {
    /// Cost of a label under the given configuration.
    pub(super) fn of(label: Label, config: &RouterConfig) -> Self {
        let transfers = label.transfers as f64;
        if !config.prefer_fewer_transfers {
            return Cost {
                primary: label.distance + transfers * config.secondary_penalty,
                secondary: 0.0,
            };
        }
        match config.cost_model {
            CostModel::Lexicographic => Cost {
                primary: transfers,
                secondary: label.distance,
            },
            CostModel::Weighted => Cost {
                primary: transfers * config.transfer_penalty + label.distance,
                secondary: 0.0,
            },
        }
    }

    /// Total order; distances are finite so `total_cmp` agrees with `<`.
    pub(super) fn total_cmp(&self, other: &Self) -> Ordering {
        self.primary
            .total_cmp(&other.primary)
            .then_with(|| self.secondary.total_cmp(&other.secondary))
    }

    pub(super) fn is_better_than(&self, other: &Self) -> bool {
        self.total_cmp(other) == Ordering::Less
    }
}

/// Heap entry. Ties in cost pop in push order.
#[derive(Debug, Clone, Copy)]
pub(super) struct State {
    pub(super) cost: Cost,
    pub(super) seq: u64,
    pub(super) node: NodeId,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by (cost, seq), reversed from standard Rust BinaryHeap
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
