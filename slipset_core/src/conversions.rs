//! `From` implementations bridging `slipset_config` types to core types.
//!
//! The TOML schema speaks percent floats; the core speaks centipercent
//! integers. Quantization happens exactly once, here.

use crate::config::{BoundsCfg, DebounceCfg, PresetCfg};
use crate::fixed_point::pct_to_cp;

impl From<&slipset_config::Debounce> for DebounceCfg {
    fn from(c: &slipset_config::Debounce) -> Self {
        Self {
            quiet_ms: c.quiet_ms,
        }
    }
}

impl From<&slipset_config::Bounds> for BoundsCfg {
    fn from(c: &slipset_config::Bounds) -> Self {
        Self {
            max_cp: pct_to_cp(c.max_pct),
            low_risk_cp: pct_to_cp(c.low_risk_pct),
            high_risk_cp: pct_to_cp(c.high_risk_pct),
        }
    }
}

impl From<&slipset_config::Presets> for PresetCfg {
    fn from(c: &slipset_config::Presets) -> Self {
        Self {
            low_cp: pct_to_cp(c.low_pct),
            mid_cp: pct_to_cp(c.mid_pct),
            high_cp: pct_to_cp(c.high_pct),
        }
    }
}
