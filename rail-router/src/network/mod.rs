//! Line data sources and the live routing graph.
//!
//! Line sets are read from a JSON file and turned into a [`Graph`] snapshot.
//! When the data changes the whole graph is rebuilt and swapped in; queries
//! already running keep the snapshot they started with.
//!
//! [`Graph`]: crate::graph::Graph

mod error;
mod load;
mod snapshot;

pub use error::LoadError;
pub use load::LineSet;
pub use snapshot::NetworkSnapshot;
