//! Built-in catalog data.

pub mod charms;
pub mod combinations;
pub mod houses;

pub use charms::{CHARMS, standard_charms};
pub use combinations::{COMBINATIONS, CombinationDef, standard_combinations};
pub use houses::{HOUSES, standard_houses};
