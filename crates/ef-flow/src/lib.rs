//! Maximum-flow engine for escape networks.
//!
//! This crate computes exact integer maximum flow with the Edmonds–Karp
//! method: augmenting paths are found by breadth-first search over a residual
//! network that is rebuilt from the graph before every search. Results are
//! memoized per (start, end) room pair until the owning graph changes.

pub mod engine;
pub mod pair;
pub mod residual;
pub mod search;

pub use engine::{FlowEngine, FlowStats, edmonds_karp};
pub use pair::{FlowRecord, RoutePair};
pub use residual::ResidualNetwork;
pub use search::{AugmentingPath, shortest_augmenting_path};
