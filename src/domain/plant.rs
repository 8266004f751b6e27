use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::Fuels;
use crate::error::DispatchError;

/// Tons of CO2 emitted per MWh of gas-fired electrical output.
pub const CO2_TONS_PER_MWH: f64 = 0.3;

/// The three supported generation technologies.
///
/// Behavior differences live entirely in `Plant::capacity` and
/// `Plant::marginal_cost`; adding a technology means adding a variant and a
/// match arm in each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    /// Gas-fired unit; pays for gas and CO2 allowances.
    Gasfired,
    /// Kerosine-fired peaker; pays for kerosine only.
    Turbojet,
    /// Wind turbine; free to run, output limited by current wind.
    Windturbine,
}

impl FromStr for PlantType {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gasfired" => Ok(Self::Gasfired),
            "turbojet" => Ok(Self::Turbojet),
            "windturbine" => Ok(Self::Windturbine),
            other => Err(DispatchError::UnrecognizedPlantType(other.to_string())),
        }
    }
}

impl std::fmt::Display for PlantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Gasfired => "gasfired",
            Self::Turbojet => "turbojet",
            Self::Windturbine => "windturbine",
        };
        write!(f, "{s}")
    }
}

/// A single generation unit, immutable for the lifetime of one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub name: String,
    pub plant_type: PlantType,
    /// Fraction of fuel energy converted to electrical output, in (0, 1].
    /// Ignored for cost purposes by wind turbines.
    pub efficiency: f64,
    /// Minimum stable output in MWh once the unit is running.
    pub pmin: f64,
    /// Nameplate maximum output in MWh.
    pub pmax: f64,
}

impl Plant {
    /// Builds a plant from a wire descriptor, failing fast on an unknown
    /// type discriminant.
    pub fn from_descriptor(
        name: &str,
        plant_type: &str,
        efficiency: f64,
        pmin: f64,
        pmax: f64,
    ) -> Result<Self, DispatchError> {
        Ok(Self {
            name: name.to_string(),
            plant_type: plant_type.parse()?,
            efficiency,
            pmin,
            pmax,
        })
    }

    /// Maximum output the plant can deliver right now.
    ///
    /// Fuel prices never limit thermal output, only its cost; wind limits
    /// turbine output proportionally to availability.
    pub fn capacity(&self, fuels: &Fuels) -> f64 {
        match self.plant_type {
            PlantType::Gasfired | PlantType::Turbojet => self.pmax,
            PlantType::Windturbine => {
                self.pmax * fuels.wind_percent / 100.0 / self.efficiency
            }
        }
    }

    /// Cost in euro of producing one additional MWh.
    pub fn marginal_cost(&self, fuels: &Fuels) -> f64 {
        match self.plant_type {
            PlantType::Gasfired => {
                fuels.gas_price / self.efficiency + CO2_TONS_PER_MWH * fuels.co2_price
            }
            PlantType::Turbojet => fuels.kerosine_price / self.efficiency,
            PlantType::Windturbine => 0.0,
        }
    }
}
