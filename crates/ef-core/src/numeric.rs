use crate::{EfError, EfResult};

/// Integer type for capacities and flow values.
///
/// 64 bits so that summing many edge flows cannot overflow.
pub type Flow = i64;

/// Bottleneck sentinel meaning "no constraint seen yet".
///
/// Never a real capacity: capacities are bounded by [`MAX_CAPACITY`].
pub const UNBOUNDED_FLOW: Flow = Flow::MAX / 2;

/// Largest accepted section capacity.
pub const MAX_CAPACITY: Flow = i32::MAX as Flow;

/// Parse a decimal capacity token (leading zeros allowed) into `1..=MAX_CAPACITY`.
pub fn parse_capacity(text: &str) -> EfResult<Flow> {
    let invalid = || EfError::InvalidCapacity {
        text: text.to_string(),
    };
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let value: Flow = text.parse().map_err(|_| invalid())?;
    if (1..=MAX_CAPACITY).contains(&value) {
        Ok(value)
    } else {
        Err(invalid())
    }
}
