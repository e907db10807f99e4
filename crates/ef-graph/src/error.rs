//! Graph-specific error types.

use ef_core::RoomId;

use crate::section::Section;

/// Structural violations detected before a section reaches a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A section starts and ends in the same room.
    SelfLoop { room: RoomId },

    /// The same (source, target) pair was given twice for a new network.
    DuplicateSection { section: Section },

    /// The reverse of this section already exists.
    OpposingSection { section: Section },

    /// A new network needs at least `min` sections.
    TooFewSections { count: usize, min: usize },

    /// The graph would have no room without incoming or without outgoing sections.
    MissingTerminals,
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::SelfLoop { room } => {
                write!(f, "section loops back into room {}", room)
            }
            GraphError::DuplicateSection { section } => {
                write!(f, "duplicate section {}", section)
            }
            GraphError::OpposingSection { section } => {
                write!(f, "section {} opposes an existing section", section)
            }
            GraphError::TooFewSections { count, min } => {
                write!(
                    f,
                    "a new network needs at least {} sections (got {})",
                    min, count
                )
            }
            GraphError::MissingTerminals => {
                write!(f, "network must keep at least one start and one target room")
            }
        }
    }
}

impl std::error::Error for GraphError {}

pub type GraphResult<T> = Result<T, GraphError>;
