//! Shared data models spanning the pipeline layers.

pub mod aggregate;
pub mod company;

pub use aggregate::{CityAggregate, CityKey, CityRecord, Coverage};
pub use company::{Company, LocatedCompany, ParsedAddress};
