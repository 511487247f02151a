//! Domain error types.
//!
//! These errors represent structural problems in line data detected while
//! loading it. Graph construction and routing never fail.

use super::LineId;

/// Domain-level errors for line data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Line identifier is empty or whitespace
    #[error("line identifier must not be empty")]
    EmptyLineId,

    /// Two lines in one set share an identifier
    #[error("duplicate line identifier: {0}")]
    DuplicateLine(LineId),
}
