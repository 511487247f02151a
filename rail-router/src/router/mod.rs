//! Route search over the station graph.
//!
//! This module answers: "what is the best way from station A to station B?"
//!
//! The search is a multi-source Dijkstra: every node carrying the start
//! name is a source and the first settled node carrying the destination
//! name ends the search. Costs are (distance, transfers) pairs ordered
//! according to [`RouterConfig`], which by default puts fewer transfers
//! ahead of shorter distance.

mod config;
mod cost;
mod search;

pub use config::{CostModel, RouterConfig};
pub use search::{PathNode, PathResult, Route, find_path, find_path_with};
