//! Domain types for the rail network.
//!
//! Lines and stations as they arrive from the data source, plus the
//! world-space coordinates used for distance weights. Station names are
//! plain strings: they are the cross-line matching key and carry no
//! further structure.

mod coord;
mod error;
mod line;

pub use coord::Coordinate;
pub use error::DomainError;
pub use line::{Line, LineId, Station};
