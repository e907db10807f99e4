//! Cache keys and report rows.

use core::fmt;

use ef_core::{Flow, RoomId};

/// Ordered (start, end) room pair a flow was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePair {
    pub start: RoomId,
    pub end: RoomId,
}

impl RoutePair {
    pub fn new(start: RoomId, end: RoomId) -> Self {
        Self { start, end }
    }
}

/// One memoized result, as reported to users.
///
/// Field order gives the report order: flow, then start, then end.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FlowRecord {
    pub flow: Flow,
    pub start: RoomId,
    pub end: RoomId,
}

impl fmt::Display for FlowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.flow, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(flow: Flow, start: &str, end: &str) -> FlowRecord {
        FlowRecord {
            flow,
            start: RoomId::parse(start).unwrap(),
            end: RoomId::parse(end).unwrap(),
        }
    }

    #[test]
    fn records_sort_by_flow_then_rooms() {
        let mut rows = vec![
            record(7, "a", "d"),
            record(2, "b", "c"),
            record(2, "a", "z"),
            record(2, "a", "c"),
        ];
        rows.sort();
        let shown: Vec<String> = rows.iter().map(ToString::to_string).collect();
        assert_eq!(shown, ["2 a c", "2 a z", "2 b c", "7 a d"]);
    }
}
