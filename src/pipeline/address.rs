//! Free-text headquarters address parsing.

use crate::models::ParsedAddress;

/// Split a `"City, State[, Country]"` headquarters string into structured
/// fields.
///
/// Segment 0 is the city, segment 1 the state, and an optional segment 2 the
/// country (present only for non-US headquarters). Never fails: missing
/// segments come back as empty strings and simply fail to match downstream.
pub fn parse_headquarters(raw: &str) -> ParsedAddress {
    let mut segments = raw.splitn(3, ", ");
    let city = segments.next().unwrap_or("").trim().to_string();
    let state = segments.next().unwrap_or("").trim().to_string();
    let country = segments
        .next()
        .map(|segment| segment.trim().to_string())
        .filter(|segment| !segment.is_empty());

    ParsedAddress { city, state, country }
}
