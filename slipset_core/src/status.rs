//! Mode and warning taxonomy for the slippage setting.

/// One of the three fixed, pre-validated slippage choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Low,
    Mid,
    High,
}

/// Which input source is active; exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlippageMode {
    PresetLow,
    PresetMid,
    PresetHigh,
    Custom,
}

impl From<Preset> for SlippageMode {
    fn from(p: Preset) -> Self {
        match p {
            Preset::Low => SlippageMode::PresetLow,
            Preset::Mid => SlippageMode::PresetMid,
            Preset::High => SlippageMode::PresetHigh,
        }
    }
}

/// Derived advisory state for the custom slippage field.
///
/// `EmptyInput` and `OutOfRange` block propagation; `HighRisk` and `LowRisk`
/// are soft advisories and the value still propagates. Never set directly by
/// input handling; always recomputed from the held text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    None,
    EmptyInput,
    OutOfRange,
    HighRisk,
    LowRisk,
}
