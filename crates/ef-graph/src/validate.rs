//! Graph validation logic.
//!
//! The graph itself accepts any edge; these checks run first so that only
//! structurally valid networks reach it.

use std::collections::HashSet;

use ef_core::RoomId;

use crate::builder::MIN_SECTIONS;
use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::section::Section;

/// Validate the initial sections of a new network, in input order.
pub(crate) fn validate_sections(sections: &[Section]) -> GraphResult<()> {
    let mut seen: HashSet<(&RoomId, &RoomId)> = HashSet::new();

    for section in sections {
        if section.is_loop() {
            return Err(GraphError::SelfLoop {
                room: section.source.clone(),
            });
        }

        // Only sections given earlier count as opposing
        if seen.contains(&(&section.target, &section.source)) {
            return Err(GraphError::OpposingSection {
                section: section.clone(),
            });
        }

        if !seen.insert((&section.source, &section.target)) {
            return Err(GraphError::DuplicateSection {
                section: section.clone(),
            });
        }
    }

    if seen.len() < MIN_SECTIONS {
        return Err(GraphError::TooFewSections {
            count: seen.len(),
            min: MIN_SECTIONS,
        });
    }

    Ok(())
}

/// The graph must keep at least one room without incoming and one without outgoing corridors.
pub(crate) fn validate_terminals(graph: &Graph) -> GraphResult<()> {
    if graph.has_source() && graph.has_sink() {
        Ok(())
    } else {
        Err(GraphError::MissingTerminals)
    }
}

/// Check that adding one section to an existing graph keeps it valid.
///
/// Re-adding an existing section is allowed (it overwrites the capacity).
/// The terminal check runs against a snapshot so `graph` is never touched.
pub fn validate_extension(graph: &Graph, section: &Section) -> GraphResult<()> {
    if section.is_loop() {
        return Err(GraphError::SelfLoop {
            room: section.source.clone(),
        });
    }

    if graph.edge(&section.target, &section.source).is_some() {
        return Err(GraphError::OpposingSection {
            section: section.clone(),
        });
    }

    let mut hypothetical = graph.snapshot();
    hypothetical.add_section(section);
    validate_terminals(&hypothetical)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(s: &str, c: i64, t: &str) -> Section {
        Section::parse_parts(s, c, t).unwrap()
    }

    fn chain() -> Graph {
        let mut g = Graph::new("T");
        g.add_section(&section("a", 3, "b"));
        g.add_section(&section("b", 2, "c"));
        g
    }

    #[test]
    fn validate_empty_sections() {
        assert_eq!(
            validate_sections(&[]),
            Err(GraphError::TooFewSections { count: 0, min: 2 })
        );
    }

    #[test]
    fn validate_self_loop() {
        let result = validate_sections(&[section("a", 1, "a"), section("a", 1, "b")]);
        assert!(matches!(result, Err(GraphError::SelfLoop { .. })));
    }

    #[test]
    fn validate_duplicate() {
        let result = validate_sections(&[section("a", 1, "b"), section("a", 7, "b")]);
        assert!(matches!(result, Err(GraphError::DuplicateSection { .. })));
    }

    #[test]
    fn validate_opposing() {
        let result = validate_sections(&[section("a", 1, "b"), section("b", 1, "a")]);
        assert!(matches!(result, Err(GraphError::OpposingSection { .. })));
    }

    #[test]
    fn extension_allows_overwrite_and_growth() {
        let g = chain();
        assert!(validate_extension(&g, &section("a", 9, "b")).is_ok());
        assert!(validate_extension(&g, &section("c", 1, "d")).is_ok());
    }

    #[test]
    fn extension_rejects_opposing_and_loops() {
        let g = chain();
        assert!(matches!(
            validate_extension(&g, &section("b", 1, "a")),
            Err(GraphError::OpposingSection { .. })
        ));
        assert!(matches!(
            validate_extension(&g, &section("c", 1, "c")),
            Err(GraphError::SelfLoop { .. })
        ));
    }

    #[test]
    fn extension_rejects_losing_sink() {
        // c -> a closes the only sink and the only source
        let g = chain();
        assert_eq!(
            validate_extension(&g, &section("c", 1, "a")),
            Err(GraphError::MissingTerminals)
        );
        assert_eq!(g.edges().len(), 2);
    }
}
