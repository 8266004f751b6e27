use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fuel market state for a single planning request.
///
/// Field names on the wire follow the market feed keys; a key that is absent
/// from the payload is read as 0 (no availability, free fuel).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Validate)]
pub struct Fuels {
    /// Gas price in euro per MWh of fuel energy.
    #[serde(rename = "gas(euro/MWh)", default)]
    #[validate(range(min = 0.0))]
    pub gas_price: f64,

    /// Kerosine price in euro per MWh of fuel energy.
    #[serde(rename = "kerosine(euro/MWh)", default)]
    #[validate(range(min = 0.0))]
    pub kerosine_price: f64,

    /// CO2 allowance price in euro per ton.
    #[serde(rename = "co2(euro/ton)", default)]
    #[validate(range(min = 0.0))]
    pub co2_price: f64,

    /// Current wind availability, 0..=100.
    #[serde(rename = "wind(%)", default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub wind_percent: f64,
}
