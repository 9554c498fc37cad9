//! City name corrections applied before boundary lookup.
//!
//! Company-reported headquarters cities frequently name a suburb, campus, or
//! historical municipality that is not present in the federal boundary
//! dataset. This table rewrites those names to the display name the boundary
//! files actually use. It is inherently incomplete; extend it as new roster
//! entries fail to match.

/// Ordered (reported name, boundary name) substitutions.
pub const CITY_ALIASES: &[(&str, &str)] = &[
    ("New York City", "New York"),
    ("Saint Paul", "Minneapolis"),
    ("Indianapolis", "Indianapolis city (balance)"),
    ("Dulles", "Sterling"),
    ("Tysons Corner", "Tysons"),
    ("Wallingford", "Wallingford Center"),
    ("Bloomfield", "Hartford"),
    ("Farmington", "Hartford"),
    ("Purchase", "Harrison"),
    ("Penfield", "Rochester"),
    ("Ewing", "Trenton"),
    ("Teaneck", "Hackensack"),
    ("Parsippany", "Morristown"),
    ("Washington County", "Beaverton"),
    ("Boise", "Boise City"),
    ("Nashville", "Nashville-Davidson metropolitan government (balance)"),
    ("North Reading", "Reading"),
    ("Acton", "Boston"),
    ("Mayfield Village", "Mayfield Heights"),
    ("Hunt Valley", "Baltimore"),
    ("Wayne", "Philadelphia"),
];

/// Rewrite a reported city name to its boundary-dataset equivalent.
/// Names without a correction pass through unchanged.
pub fn resolve_city(reported: &str) -> &str {
    CITY_ALIASES
        .iter()
        .find(|(from, _)| *from == reported)
        .map(|(_, to)| *to)
        .unwrap_or(reported)
}
