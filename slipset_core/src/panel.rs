//! The settings panel state machine.
//!
//! `PanelCore` is generic over the sink so the hot path is statically
//! dispatched; the boxed public wrapper lives in `builder`. The panel never
//! spawns threads or sleeps: the debounce is an armed timestamp checked by
//! `poll()` against the injected clock, so the host drives all timing and
//! tests run on a manual clock.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace};

use slipset_traits::{Clock, SettingsSink, Validity};

use crate::classify::check_bounds;
use crate::config::{BoundsCfg, DebounceCfg, PresetCfg};
use crate::error::{Result, map_sink_error};
use crate::fixed_point::format_cp;
use crate::grammar::{is_digit_run, is_partial_decimal};
use crate::status::{Preset, SlippageMode, Warning};

/// Generic panel core. Use `Panel::builder()` for the boxed wrapper or
/// `build_panel` for a statically-dispatched instance.
pub struct PanelCore<K: SettingsSink> {
    pub(crate) sink: K,
    pub(crate) debounce: DebounceCfg,
    pub(crate) bounds: BoundsCfg,
    pub(crate) presets: PresetCfg,
    pub(crate) clock: Arc<dyn Clock + Send + Sync>,
    pub(crate) epoch: Instant,

    pub(crate) mode: SlippageMode,
    pub(crate) custom_text: String,
    /// Milliseconds-since-epoch at which the held text was last edited;
    /// `Some` means an evaluation is pending.
    pub(crate) armed_at_ms: Option<u64>,
    pub(crate) warning: Warning,
    pub(crate) validity: Validity,
    pub(crate) slippage_cp: i32,

    pub(crate) deadline_text: String,
    pub(crate) deadline_s: u64,
}

impl<K: SettingsSink> PanelCore<K> {
    /// Offer one keystroke's worth of custom slippage text (the whole field
    /// content, not a delta). Text outside the partial-decimal grammar is
    /// dropped without touching any state; accepted text switches the panel
    /// to custom mode, replaces the held text, and restarts the quiet period.
    ///
    /// Returns whether the text was accepted. Nothing is emitted here;
    /// evaluation happens in `poll()` once the field goes quiet.
    pub fn slippage_input(&mut self, text: &str) -> bool {
        if !is_partial_decimal(text) {
            trace!(text, "slippage keystroke rejected");
            return false;
        }
        self.mode = SlippageMode::Custom;
        self.custom_text.clear();
        self.custom_text.push_str(text);
        self.armed_at_ms = Some(self.clock.ms_since(self.epoch));
        trace!(text, "slippage text held, debounce armed");
        true
    }

    /// Check the debounce and evaluate the held text if the quiet period has
    /// elapsed. Returns whether an evaluation fired.
    pub fn poll(&mut self) -> Result<bool> {
        let Some(armed_at) = self.armed_at_ms else {
            return Ok(false);
        };
        let now = self.clock.ms_since(self.epoch);
        if now.saturating_sub(armed_at) < self.debounce.quiet_ms {
            return Ok(false);
        }
        self.armed_at_ms = None;
        self.evaluate_held()?;
        Ok(true)
    }

    /// Milliseconds until the pending evaluation is due (0 when due now), or
    /// `None` when no evaluation is pending. Hosts can use this to schedule
    /// the next `poll()` instead of spinning.
    pub fn next_poll_in(&self) -> Option<u64> {
        let armed_at = self.armed_at_ms?;
        let due = armed_at.saturating_add(self.debounce.quiet_ms);
        Some(due.saturating_sub(self.clock.ms_since(self.epoch)))
    }

    /// Select one of the three fixed presets. Bypasses the grammar and the
    /// debounce entirely: any pending evaluation is cancelled and the preset
    /// value propagates immediately, clearing whatever warning the custom
    /// field had raised. The held text is kept so switching back to custom
    /// re-evaluates it.
    pub fn select_preset(&mut self, preset: Preset) -> Result<()> {
        self.armed_at_ms = None;
        self.mode = SlippageMode::from(preset);
        self.warning = Warning::None;
        self.validity = Validity::Valid;
        let cp = self.presets.value_cp(preset);
        self.slippage_cp = cp;
        debug!(?preset, cp, "preset selected");
        self.sink
            .slippage_changed(cp)
            .map_err(|e| eyre::Report::new(map_sink_error(&*e)))?;
        self.sink
            .slippage_validity_changed(Validity::Valid)
            .map_err(|e| eyre::Report::new(map_sink_error(&*e)))?;
        Ok(())
    }

    /// Switch to the custom field. The held text is evaluated immediately,
    /// so returning to an out-of-range entry re-raises its error rather than
    /// silently keeping the preset value's clean state.
    pub fn select_custom(&mut self) -> Result<()> {
        self.mode = SlippageMode::Custom;
        self.armed_at_ms = None;
        self.evaluate_held()
    }

    /// Offer deadline field text (minutes, digits only). Non-digit text and
    /// values whose seconds conversion overflows are dropped without state
    /// change. Accepted non-empty text emits the converted seconds at once;
    /// the deadline field has no debounce.
    pub fn deadline_input(&mut self, text: &str) -> Result<bool> {
        if !is_digit_run(text) {
            trace!(text, "deadline keystroke rejected");
            return Ok(false);
        }
        if text.is_empty() {
            self.deadline_text.clear();
            return Ok(true);
        }
        let Some(seconds) = text
            .parse::<u64>()
            .ok()
            .and_then(|minutes| minutes.checked_mul(60))
        else {
            trace!(text, "deadline minutes overflow");
            return Ok(false);
        };
        self.deadline_text.clear();
        self.deadline_text.push_str(text);
        self.deadline_s = seconds;
        debug!(seconds, "deadline changed");
        self.sink
            .deadline_changed(seconds)
            .map_err(|e| eyre::Report::new(map_sink_error(&*e)))?;
        Ok(true)
    }

    /// Classify the held text and emit the outcome: validity first, then the
    /// value when one survives classification.
    fn evaluate_held(&mut self) -> Result<()> {
        let c = check_bounds(&self.custom_text, &self.bounds);
        self.warning = c.warning;
        self.validity = c.validity;
        debug!(
            text = %self.custom_text,
            warning = ?c.warning,
            validity = ?c.validity,
            "custom slippage evaluated"
        );
        self.sink
            .slippage_validity_changed(c.validity)
            .map_err(|e| eyre::Report::new(map_sink_error(&*e)))?;
        if let Some(cp) = c.value_cp {
            self.slippage_cp = cp;
            self.sink
                .slippage_changed(cp)
                .map_err(|e| eyre::Report::new(map_sink_error(&*e)))?;
        }
        Ok(())
    }

    /// Reconcile an externally seeded slippage value into panel state.
    /// Called once during construction, after fields are initialized.
    ///
    /// A seed equal to a preset value lights that preset and re-propagates
    /// it. Any other seed that renders into the input grammar becomes held
    /// custom text with an evaluation pending. Seeds that cannot render
    /// (negative, or at least 100%) are left alone and the panel stays on
    /// the default preset without emitting.
    pub(crate) fn seed_slippage(&mut self, cp: i32) -> Result<()> {
        if cp == self.presets.low_cp {
            return self.select_preset(Preset::Low);
        }
        if cp == self.presets.mid_cp {
            return self.select_preset(Preset::Mid);
        }
        if cp == self.presets.high_cp {
            return self.select_preset(Preset::High);
        }
        let text = format_cp(cp);
        if is_partial_decimal(&text) {
            // Held only; slippage_cp moves iff the pending evaluation
            // propagates the value, same as the keystroke path.
            self.mode = SlippageMode::Custom;
            self.custom_text = text;
            self.armed_at_ms = Some(self.clock.ms_since(self.epoch));
        } else {
            debug!(cp, "seed value not representable, keeping default preset");
        }
        Ok(())
    }

    pub fn mode(&self) -> SlippageMode {
        self.mode
    }

    pub fn warning(&self) -> Warning {
        self.warning
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// The most recently propagated slippage in centipercent.
    pub fn slippage_cp(&self) -> i32 {
        self.slippage_cp
    }

    /// The custom field's held text.
    pub fn custom_text(&self) -> &str {
        &self.custom_text
    }

    pub fn deadline_text(&self) -> &str {
        &self.deadline_text
    }

    /// The most recently propagated deadline in seconds.
    pub fn deadline_seconds(&self) -> u64 {
        self.deadline_s
    }

    pub fn is_evaluation_pending(&self) -> bool {
        self.armed_at_ms.is_some()
    }
}

/// Render a seeded deadline (seconds) back into the minutes field. Seconds
/// not divisible by 60 produce a fractional minute the grammar would not
/// accept as a keystroke; the field simply echoes what it was given.
pub(crate) fn format_deadline_minutes(seconds: u64) -> String {
    if seconds % 60 == 0 {
        (seconds / 60).to_string()
    } else {
        (seconds as f64 / 60.0).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_minutes_formatting() {
        assert_eq!(format_deadline_minutes(600), "10");
        assert_eq!(format_deadline_minutes(60), "1");
        assert_eq!(format_deadline_minutes(630), "10.5");
        assert_eq!(format_deadline_minutes(0), "0");
    }
}
