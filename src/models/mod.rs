//! Models Module
//!
//! Serde shapes of the catalog resources consumed from the upstream API.

mod location;
mod pokemon;

pub use location::{AreaDetail, Encounter, LocationAreaPage, NamedResource};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
