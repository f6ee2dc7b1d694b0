//! Configuration loading and data model

mod settings;
mod types;

pub use settings::{default_config_path, load_settings};
pub use types::{PricingSettings, Settings, SimulationSettings};
