use serde::{Deserialize, Serialize};

/// One roster row as published in the source table. Sector metadata is
/// opaque pass-through; only the symbol, headquarters, and CIK drive joins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Security")]
    pub security: String,
    #[serde(rename = "Headquarters Location")]
    pub headquarters: String,
    #[serde(rename = "CIK")]
    pub cik: String,
    #[serde(rename = "GICS Sector", default, skip_serializing_if = "Option::is_none")]
    pub gics_sector: Option<String>,
    #[serde(rename = "GICS Sub-Industry", default, skip_serializing_if = "Option::is_none")]
    pub gics_sub_industry: Option<String>,
}

/// A headquarters string split into its comma-delimited segments.
///
/// `country` is populated only for the 3-field shape, which marks non-US
/// headquarters expected to fail geometry resolution downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    pub city: String,
    pub state: String,
    pub country: Option<String>,
}

impl ParsedAddress {
    pub fn is_domestic(&self) -> bool {
        self.country.is_none()
    }
}

/// Roster row enriched with derived location keys. `fips` stays `None` when
/// the parsed state is not in the registry; the row is retained regardless.
#[derive(Debug, Clone)]
pub struct LocatedCompany {
    pub company: Company,
    /// Alias-resolved city name, ready for boundary lookup.
    pub city: String,
    pub state: String,
    pub fips: Option<&'static str>,
}
