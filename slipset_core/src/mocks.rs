//! Test and helper mocks for slipset_core

use slipset_traits::{SettingsSink, Validity};

/// What a `RecordingSink` saw, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    Slippage(i32),
    SlippageValidity(Validity),
    Deadline(u64),
}

/// A sink that records every emission; useful for asserting both values and
/// ordering in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Emitted>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the slippage values, in order.
    pub fn slippage_values(&self) -> Vec<i32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Emitted::Slippage(cp) => Some(*cp),
                _ => None,
            })
            .collect()
    }

    /// Only the validity transitions, in order.
    pub fn validities(&self) -> Vec<Validity> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Emitted::SlippageValidity(v) => Some(*v),
                _ => None,
            })
            .collect()
    }
}

impl SettingsSink for RecordingSink {
    fn slippage_changed(
        &mut self,
        hundredths_pct: i32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.events.push(Emitted::Slippage(hundredths_pct));
        Ok(())
    }

    fn slippage_validity_changed(
        &mut self,
        validity: Validity,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.events.push(Emitted::SlippageValidity(validity));
        Ok(())
    }

    fn deadline_changed(
        &mut self,
        seconds: u64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.events.push(Emitted::Deadline(seconds));
        Ok(())
    }
}

/// A sink that always errors; useful for exercising error propagation.
pub struct FailingSink;

impl SettingsSink for FailingSink {
    fn slippage_changed(
        &mut self,
        _hundredths_pct: i32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("failing sink")))
    }

    fn slippage_validity_changed(
        &mut self,
        _validity: Validity,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("failing sink")))
    }

    fn deadline_changed(
        &mut self,
        _seconds: u64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("failing sink")))
    }
}
