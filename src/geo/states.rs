//! Static registry of US states and outlying regions.
//!
//! The census boundary files are keyed by two-digit fips code, so this table
//! is the bridge between the state names that appear in headquarters strings
//! and the boundary dataset.

/// One US state (or outlying region) with its boundary-file code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub fips: &'static str,
}

/// Every state the boundary dataset can cover. Immutable reference data.
pub const STATES: &[State] = &[
    State { name: "Alabama", abbreviation: "AL", fips: "01" },
    State { name: "Alaska", abbreviation: "AK", fips: "02" },
    State { name: "Arizona", abbreviation: "AZ", fips: "04" },
    State { name: "Arkansas", abbreviation: "AR", fips: "05" },
    State { name: "California", abbreviation: "CA", fips: "06" },
    State { name: "Colorado", abbreviation: "CO", fips: "08" },
    State { name: "Connecticut", abbreviation: "CT", fips: "09" },
    State { name: "Delaware", abbreviation: "DE", fips: "10" },
    State { name: "District Of Columbia", abbreviation: "DC", fips: "11" },
    State { name: "Florida", abbreviation: "FL", fips: "12" },
    State { name: "Georgia", abbreviation: "GA", fips: "13" },
    State { name: "Hawaii", abbreviation: "HI", fips: "15" },
    State { name: "Idaho", abbreviation: "ID", fips: "16" },
    State { name: "Illinois", abbreviation: "IL", fips: "17" },
    State { name: "Indiana", abbreviation: "IN", fips: "18" },
    State { name: "Iowa", abbreviation: "IA", fips: "19" },
    State { name: "Kansas", abbreviation: "KS", fips: "20" },
    State { name: "Kentucky", abbreviation: "KY", fips: "21" },
    State { name: "Louisiana", abbreviation: "LA", fips: "22" },
    State { name: "Maine", abbreviation: "ME", fips: "23" },
    State { name: "Maryland", abbreviation: "MD", fips: "24" },
    State { name: "Massachusetts", abbreviation: "MA", fips: "25" },
    State { name: "Michigan", abbreviation: "MI", fips: "26" },
    State { name: "Minnesota", abbreviation: "MN", fips: "27" },
    State { name: "Mississippi", abbreviation: "MS", fips: "28" },
    State { name: "Missouri", abbreviation: "MO", fips: "29" },
    State { name: "Montana", abbreviation: "MT", fips: "30" },
    State { name: "Nebraska", abbreviation: "NE", fips: "31" },
    State { name: "Nevada", abbreviation: "NV", fips: "32" },
    State { name: "New Hampshire", abbreviation: "NH", fips: "33" },
    State { name: "New Jersey", abbreviation: "NJ", fips: "34" },
    State { name: "New Mexico", abbreviation: "NM", fips: "35" },
    State { name: "New York", abbreviation: "NY", fips: "36" },
    State { name: "North Carolina", abbreviation: "NC", fips: "37" },
    State { name: "North Dakota", abbreviation: "ND", fips: "38" },
    State { name: "Ohio", abbreviation: "OH", fips: "39" },
    State { name: "Oklahoma", abbreviation: "OK", fips: "40" },
    State { name: "Oregon", abbreviation: "OR", fips: "41" },
    State { name: "Pennsylvania", abbreviation: "PA", fips: "42" },
    State { name: "Puerto Rico", abbreviation: "PR", fips: "72" },
    State { name: "Rhode Island", abbreviation: "RI", fips: "44" },
    State { name: "South Carolina", abbreviation: "SC", fips: "45" },
    State { name: "South Dakota", abbreviation: "SD", fips: "46" },
    State { name: "Tennessee", abbreviation: "TN", fips: "47" },
    State { name: "Texas", abbreviation: "TX", fips: "48" },
    State { name: "Utah", abbreviation: "UT", fips: "49" },
    State { name: "Vermont", abbreviation: "VT", fips: "50" },
    State { name: "Virginia", abbreviation: "VA", fips: "51" },
    State { name: "Virgin Islands", abbreviation: "VI", fips: "78" },
    State { name: "Washington", abbreviation: "WA", fips: "53" },
    State { name: "West Virginia", abbreviation: "WV", fips: "54" },
    State { name: "Wisconsin", abbreviation: "WI", fips: "55" },
    State { name: "Wyoming", abbreviation: "WY", fips: "56" },
];

/// Look up a state by its full display name, exact match.
pub fn by_name(name: &str) -> Option<&'static State> {
    STATES.iter().find(|state| state.name == name)
}

/// Boundary-file fips code for a state name.
pub fn fips_for_name(name: &str) -> Option<&'static str> {
    by_name(name).map(|state| state.fips)
}
