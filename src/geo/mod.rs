//! Geographic reference data and the boundary lookup index.

pub mod aliases;
pub mod index;
pub mod states;

pub use aliases::{resolve_city, CITY_ALIASES};
pub use index::{CityBoundary, GeometryIndex};
pub use states::{by_name, fips_for_name, State, STATES};
