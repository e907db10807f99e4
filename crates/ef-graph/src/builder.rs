//! Validating builder for new networks.

use crate::error::GraphResult;
use crate::graph::Graph;
use crate::section::Section;
use crate::validate;

/// Fewest sections a new network may be created with.
pub const MIN_SECTIONS: usize = 2;

/// Builder for constructing a network graph from its initial sections.
///
/// Use `add_section` to collect sections, then call `build()` to validate
/// them and freeze them into a `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    name: String,
    sections: Vec<Section>,
}

impl GraphBuilder {
    /// Create a new empty builder for the named network.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// Queue a section. Nothing is checked until `build()`.
    pub fn add_section(&mut self, section: Section) -> &mut Self {
        self.sections.push(section);
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Validate the sections and build the graph.
    pub fn build(self) -> GraphResult<Graph> {
        validate::validate_sections(&self.sections)?;

        let mut graph = Graph::new(self.name);
        for section in &self.sections {
            graph.add_section(section);
        }

        validate::validate_terminals(&graph)?;
        tracing::debug!(
            network = graph.name(),
            rooms = graph.node_count(),
            sections = graph.edges().len(),
            "built network graph"
        );
        Ok(graph)
    }
}
