//! Sections: one directed corridor with a capacity, as users write it.

use core::fmt;

use ef_core::{EfResult, Flow, RoomId, parse_capacity};

/// A directed, capacitated corridor between two rooms.
///
/// Displays as `<source><capacity><target>`, e.g. `a5b`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Section {
    pub source: RoomId,
    pub target: RoomId,
    pub capacity: Flow,
}

impl Section {
    pub fn new(source: RoomId, target: RoomId, capacity: Flow) -> Self {
        Self {
            source,
            target,
            capacity,
        }
    }

    /// Build a section from unvalidated parts.
    pub fn parse_parts(source: &str, capacity: Flow, target: &str) -> EfResult<Self> {
        let capacity = parse_capacity(&capacity.to_string())?;
        Ok(Self::new(
            RoomId::parse(source)?,
            RoomId::parse(target)?,
            capacity,
        ))
    }

    /// Same endpoints, direction swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.target.clone(), self.source.clone(), self.capacity)
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Sections are identified by their endpoints only.
    pub fn same_endpoints(&self, other: &Section) -> bool {
        self.source == other.source && self.target == other.target
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.source, self.capacity, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_concatenates_parts() {
        let s = Section::parse_parts("ab", 12, "c").unwrap();
        assert_eq!(s.to_string(), "ab12c");
    }

    #[test]
    fn parse_parts_rejects_bad_input() {
        assert!(Section::parse_parts("A", 1, "b").is_err());
        assert!(Section::parse_parts("a", 0, "b").is_err());
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let s = Section::parse_parts("a", 4, "b").unwrap();
        let r = s.reversed();
        assert_eq!(r.source, s.target);
        assert_eq!(r.target, s.source);
        assert!(!r.same_endpoints(&s));
    }
}
