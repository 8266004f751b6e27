pub mod fuels;
pub mod plant;

pub use fuels::Fuels;
pub use plant::{Plant, PlantType, CO2_TONS_PER_MWH};
