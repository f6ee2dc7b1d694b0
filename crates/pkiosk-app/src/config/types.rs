//! Settings data model

use serde::{Deserialize, Serialize};

use pkiosk_core::PriceList;

/// User-adjustable settings, loaded from `config.toml`.
///
/// Every table and field is optional in the file; anything missing keeps
/// its default, so a partial file is always valid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pricing: PricingSettings,
    pub simulation: SimulationSettings,
}

/// Per-page rates in whole pesos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSettings {
    pub black_white: u32,
    pub color: u32,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            black_white: 2,
            color: 5,
        }
    }
}

impl PricingSettings {
    pub fn price_list(&self) -> PriceList {
        PriceList {
            black_white: self.black_white,
            color: self.color,
        }
    }
}

/// Pacing of the simulated hardware.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Multiplier on every scripted delay; 1.0 is production pacing.
    pub time_scale: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}
