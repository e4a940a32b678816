pub mod clock;

pub use clock::{Clock, ManualClock, MonotonicClock};

/// Externally visible validity of the committed slippage value.
///
/// `Invalid` blocks propagation (empty or out-of-range input); `Warning` is a
/// usable-but-risky value; `Valid` covers everything else, including the
/// soft low-risk advisory which is carried separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
    Warning,
}

/// Callbacks to the external owner of the settings panel.
///
/// Slippage values are integer hundredths of a percent (37 = 0.37%).
/// Implementations must not call back into the panel.
pub trait SettingsSink {
    fn slippage_changed(
        &mut self,
        hundredths_pct: i32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    fn slippage_validity_changed(
        &mut self,
        validity: Validity,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    fn deadline_changed(
        &mut self,
        seconds: u64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

impl<T: SettingsSink + ?Sized> SettingsSink for Box<T> {
    fn slippage_changed(
        &mut self,
        hundredths_pct: i32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        (**self).slippage_changed(hundredths_pct)
    }

    fn slippage_validity_changed(
        &mut self,
        validity: Validity,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        (**self).slippage_validity_changed(validity)
    }

    fn deadline_changed(
        &mut self,
        seconds: u64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        (**self).deadline_changed(seconds)
    }
}
