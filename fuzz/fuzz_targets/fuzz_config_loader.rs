#![no_main]
use libfuzzer_sys::fuzz_target;

use slipset_core::{BoundsCfg, DebounceCfg, PresetCfg};

fuzz_target!(|data: &str| {
    // We fuzz TOML parsing of Config and ensure it never panics and rejects invalids gracefully.
    // Accept both parse errors and validation errors, but do not allow panics.
    let parsed = toml::from_str::<slipset_config::Config>(data);
    match parsed {
        Ok(cfg) => {
            // Ensure validate() does not panic, and that anything it accepts
            // survives quantization with its ordering intact.
            if cfg.validate().is_ok() {
                let bounds = BoundsCfg::from(&cfg.bounds);
                assert!(bounds.low_risk_cp >= 0);
                assert!(bounds.low_risk_cp < bounds.high_risk_cp);
                assert!(bounds.high_risk_cp <= bounds.max_cp);
                assert!(bounds.max_cp <= 10_000);

                let presets = PresetCfg::from(&cfg.presets);
                assert!(presets.low_cp > 0);
                assert!(presets.low_cp < presets.mid_cp);
                assert!(presets.mid_cp < presets.high_cp);
                assert!(presets.high_cp <= bounds.max_cp);

                let debounce = DebounceCfg::from(&cfg.debounce);
                assert!((1..=60_000).contains(&debounce.quiet_ms));
            }
        }
        Err(_e) => {
            // parse error is acceptable
        }
    }
});
