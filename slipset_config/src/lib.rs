#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schemas for the slippage/deadline settings panel.
//!
//! All policy constants live here rather than as literals in the core:
//! the debounce quiet period, the classification bounds, and the preset
//! percentages. `Config` is deserialized from TOML and validated; every
//! section has defaults matching the shipped policy, so an empty document
//! is a valid config.
use serde::Deserialize;

/// Debounce policy for custom slippage text.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct Debounce {
    /// Quiet period in milliseconds before the held text is evaluated.
    pub quiet_ms: u64,
}

impl Default for Debounce {
    fn default() -> Self {
        Self { quiet_ms: 150 }
    }
}

/// Classification bounds, in percent.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct Bounds {
    /// Hard upper bound; values above it are rejected outright.
    pub max_pct: f32,
    /// Values strictly below this are flagged as likely to fail.
    pub low_risk_pct: f32,
    /// Values strictly above this are flagged as frontrunnable.
    pub high_risk_pct: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            max_pct: 50.0,
            low_risk_pct: 0.1,
            high_risk_pct: 5.0,
        }
    }
}

/// The three fixed preset percentages.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct Presets {
    pub low_pct: f32,
    pub mid_pct: f32,
    pub high_pct: f32,
}

impl Default for Presets {
    fn default() -> Self {
        Self {
            low_pct: 0.1,
            mid_pct: 0.5,
            high_pct: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub debounce: Debounce,
    pub bounds: Bounds,
    pub presets: Presets,
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

/// True when `pct` is finite and representable with at most two decimal
/// places, i.e. exactly expressible in integer hundredths of a percent.
fn has_two_decimals(pct: f32) -> bool {
    if !pct.is_finite() {
        return false;
    }
    let scaled = pct * 100.0;
    (scaled - scaled.round()).abs() < 1e-3
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        // Debounce
        if self.debounce.quiet_ms == 0 {
            eyre::bail!("debounce.quiet_ms must be >= 1");
        }
        if self.debounce.quiet_ms > 60_000 {
            eyre::bail!("debounce.quiet_ms is unreasonably large (>60s)");
        }

        // Bounds
        for (name, v) in [
            ("bounds.max_pct", self.bounds.max_pct),
            ("bounds.low_risk_pct", self.bounds.low_risk_pct),
            ("bounds.high_risk_pct", self.bounds.high_risk_pct),
        ] {
            if !v.is_finite() {
                eyre::bail!("{name} must be finite");
            }
            if !has_two_decimals(v) {
                eyre::bail!("{name} must have at most two decimal places");
            }
        }
        // Ordering is checked on quantized values, mirroring the runtime
        // conversion: what must stay ordered is the integer hundredths the
        // core sees, not the raw floats.
        let to_cp = |v: f32| (v * 100.0).round() as i64;

        if self.bounds.low_risk_pct <= 0.0 {
            eyre::bail!("bounds.low_risk_pct must be > 0");
        }
        if to_cp(self.bounds.low_risk_pct) >= to_cp(self.bounds.high_risk_pct) {
            eyre::bail!("bounds.low_risk_pct must be < bounds.high_risk_pct");
        }
        if to_cp(self.bounds.high_risk_pct) >= to_cp(self.bounds.max_pct) {
            eyre::bail!("bounds.high_risk_pct must be < bounds.max_pct");
        }
        if to_cp(self.bounds.max_pct) > 10_000 {
            eyre::bail!("bounds.max_pct must be <= 100");
        }

        // Presets
        let p = &self.presets;
        for (name, v) in [
            ("presets.low_pct", p.low_pct),
            ("presets.mid_pct", p.mid_pct),
            ("presets.high_pct", p.high_pct),
        ] {
            if !v.is_finite() || to_cp(v) < 1 || to_cp(v) > to_cp(self.bounds.max_pct) {
                eyre::bail!("{name} must be in (0, bounds.max_pct]");
            }
            if !has_two_decimals(v) {
                eyre::bail!("{name} must have at most two decimal places");
            }
        }
        if !(to_cp(p.low_pct) < to_cp(p.mid_pct) && to_cp(p.mid_pct) < to_cp(p.high_pct)) {
            eyre::bail!("presets must be strictly increasing: low < mid < high");
        }

        // Logging
        if let Some(level) = &self.logging.level
            && !["trace", "debug", "info", "warn", "error"].contains(&level.as_str())
        {
            eyre::bail!("logging.level must be one of trace|debug|info|warn|error");
        }
        if let Some(rotation) = &self.logging.rotation
            && !["never", "daily", "hourly"].contains(&rotation.as_str())
        {
            eyre::bail!("logging.rotation must be one of never|daily|hourly");
        }

        Ok(())
    }
}
