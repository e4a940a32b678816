//! Runtime configuration for the settings panel.
//!
//! These are the policy constants used by the panel, in centipercent and
//! milliseconds. They are separate from the TOML-deserialized schema in
//! `slipset_config`; `conversions` bridges the two.

use crate::status::Preset;

/// Debounce policy for the custom slippage field.
#[derive(Debug, Clone, Copy)]
pub struct DebounceCfg {
    /// Quiet period in milliseconds before held text is evaluated.
    pub quiet_ms: u64,
}

impl Default for DebounceCfg {
    fn default() -> Self {
        Self { quiet_ms: 150 }
    }
}

/// Classification bounds in centipercent.
#[derive(Debug, Clone, Copy)]
pub struct BoundsCfg {
    /// Hard upper bound; above it the entry is rejected outright.
    pub max_cp: i32,
    /// Strictly below this, the transaction may fail from ordinary movement.
    pub low_risk_cp: i32,
    /// Strictly above this, the transaction may be frontrun.
    pub high_risk_cp: i32,
}

impl Default for BoundsCfg {
    fn default() -> Self {
        Self {
            max_cp: 5000,     // 50%
            low_risk_cp: 10,  // 0.1%
            high_risk_cp: 500, // 5%
        }
    }
}

/// The three fixed preset values in centipercent.
#[derive(Debug, Clone, Copy)]
pub struct PresetCfg {
    pub low_cp: i32,
    pub mid_cp: i32,
    pub high_cp: i32,
}

impl Default for PresetCfg {
    fn default() -> Self {
        Self {
            low_cp: 10,   // 0.1%
            mid_cp: 50,   // 0.5% (suggested)
            high_cp: 100, // 1%
        }
    }
}

impl PresetCfg {
    /// The centipercent value behind a preset choice.
    pub fn value_cp(&self, preset: Preset) -> i32 {
        match preset {
            Preset::Low => self.low_cp,
            Preset::Mid => self.mid_cp,
            Preset::High => self.high_cp,
        }
    }
}
