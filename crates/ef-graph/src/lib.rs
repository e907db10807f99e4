//! ef-graph: graph/model layer for escapeflow.
//!
//! Provides:
//! - Core graph data structures (Edge, Graph) over an edge arena
//! - Sections, the textual `<room><capacity><room>` unit of input
//! - Validating graph builder for new networks
//! - Validation of single-section extensions of existing graphs
//!
//! # Example
//!
//! ```
//! use ef_graph::{GraphBuilder, Section};
//!
//! let mut builder = GraphBuilder::new("HQ");
//! builder.add_section(Section::parse_parts("a", 3, "b").unwrap());
//! builder.add_section(Section::parse_parts("b", 2, "c").unwrap());
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edges().len(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod section;
pub mod validate;

// Re-exports for ergonomics
pub use builder::{GraphBuilder, MIN_SECTIONS};
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, EdgeInsert, EdgeKind, Graph};
pub use section::Section;
pub use validate::validate_extension;
