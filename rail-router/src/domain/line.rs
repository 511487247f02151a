//! Lines and the stations they call at.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Coordinate, DomainError};

/// Identifier of a rail line, unique across a network.
///
/// # Examples
///
/// ```
/// use rail_router::domain::LineId;
///
/// let red = LineId::parse("Red").unwrap();
/// assert_eq!(red.as_str(), "Red");
///
/// // Blank identifiers are rejected
/// assert!(LineId::parse("  ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// Wrap an identifier without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse an identifier, rejecting blank strings.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.trim().is_empty() {
            return Err(DomainError::EmptyLineId);
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station as it appears within one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Name shared by every line calling here; the transfer matching key.
    pub name: String,

    /// World-space position.
    pub coords: Coordinate,
}

impl Station {
    /// Create a new station.
    pub fn new(name: impl Into<String>, coords: Coordinate) -> Self {
        Self {
            name: name.into(),
            coords,
        }
    }
}

/// A rail line: an identifier and its stations in running order.
///
/// Running order defines adjacency only; trains may be ridden either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub stations: Vec<Station>,
}

impl Line {
    /// Create a new line.
    pub fn new(id: LineId, stations: Vec<Station>) -> Self {
        Self { id, stations }
    }

    /// Returns true if the line calls at a station with this name.
    pub fn calls_at(&self, name: &str) -> bool {
        self.stations.iter().any(|s| s.name == name)
    }
}
