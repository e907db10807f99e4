//! ef-core: stable foundation for escapeflow.
//!
//! Contains:
//! - ids (compact arena IDs for graph objects)
//! - labels (room and network identifiers)
//! - numeric (flow/capacity integer type + capacity parsing)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod labels;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{EfError, EfResult};
pub use ids::*;
pub use labels::{NetworkId, RoomId};
pub use numeric::*;
