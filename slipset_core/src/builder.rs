//! Type-state builder for `Panel` and generic `build_panel` constructor.
//!
//! The builder enforces at compile time that a sink and the initial values
//! are provided before `build()` is available. `try_build()` is always
//! available for dynamic checks.

use std::marker::PhantomData;
use std::sync::Arc;

use slipset_traits::clock::{Clock, MonotonicClock};
use slipset_traits::{SettingsSink, Validity};

use crate::config::{BoundsCfg, DebounceCfg, PresetCfg};
use crate::error::{BuildError, Result};
use crate::panel::{PanelCore, format_deadline_minutes};
use crate::status::{Preset, SlippageMode, Warning};

// ── Public dynamic-dispatch wrapper ──────────────────────────────────────────

/// Public dynamic (boxed) panel that preserves a concrete API via composition.
pub struct Panel {
    pub(crate) inner: PanelCore<Box<dyn SettingsSink>>,
}

impl core::fmt::Debug for Panel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Panel")
            .field("mode", &self.inner.mode)
            .field("custom_text", &self.inner.custom_text)
            .field("warning", &self.inner.warning)
            .field("slippage_cp", &self.inner.slippage_cp)
            .field("deadline_s", &self.inner.deadline_s)
            .finish()
    }
}

impl Panel {
    /// Start building a Panel.
    pub fn builder() -> PanelBuilder<Missing, Missing> {
        PanelBuilder::default()
    }

    /// Offer custom slippage text; see `PanelCore::slippage_input`.
    pub fn slippage_input(&mut self, text: &str) -> bool {
        self.inner.slippage_input(text)
    }

    /// Drive the debounce; see `PanelCore::poll`.
    pub fn poll(&mut self) -> Result<bool> {
        self.inner.poll()
    }

    /// Milliseconds until the pending evaluation is due, if any.
    pub fn next_poll_in(&self) -> Option<u64> {
        self.inner.next_poll_in()
    }

    /// Select a fixed preset, propagating it immediately.
    pub fn select_preset(&mut self, preset: Preset) -> Result<()> {
        self.inner.select_preset(preset)
    }

    /// Switch to the custom field and re-evaluate its held text.
    pub fn select_custom(&mut self) -> Result<()> {
        self.inner.select_custom()
    }

    /// Offer deadline minutes text; see `PanelCore::deadline_input`.
    pub fn deadline_input(&mut self, text: &str) -> Result<bool> {
        self.inner.deadline_input(text)
    }

    pub fn mode(&self) -> SlippageMode {
        self.inner.mode()
    }

    pub fn warning(&self) -> Warning {
        self.inner.warning()
    }

    pub fn validity(&self) -> Validity {
        self.inner.validity()
    }

    pub fn slippage_cp(&self) -> i32 {
        self.inner.slippage_cp()
    }

    pub fn custom_text(&self) -> &str {
        self.inner.custom_text()
    }

    pub fn deadline_text(&self) -> &str {
        self.inner.deadline_text()
    }

    pub fn deadline_seconds(&self) -> u64 {
        self.inner.deadline_seconds()
    }

    pub fn is_evaluation_pending(&self) -> bool {
        self.inner.is_evaluation_pending()
    }
}

// ── Type-state markers ───────────────────────────────────────────────────────

pub struct Missing;
pub struct Set;

/// Builder for `Panel`. All fields are validated on `build()`.
pub struct PanelBuilder<K, I> {
    sink: Option<Box<dyn SettingsSink>>,
    debounce: Option<DebounceCfg>,
    bounds: Option<BoundsCfg>,
    presets: Option<PresetCfg>,
    clock: Option<Box<dyn Clock + Send + Sync>>,
    initial_slippage_cp: Option<i32>,
    initial_deadline_s: Option<u64>,
    _k: PhantomData<K>,
    _i: PhantomData<I>,
}

impl Default for PanelBuilder<Missing, Missing> {
    fn default() -> Self {
        Self {
            sink: None,
            debounce: None,
            bounds: None,
            presets: None,
            clock: None,
            initial_slippage_cp: None,
            initial_deadline_s: None,
            _k: PhantomData,
            _i: PhantomData,
        }
    }
}

/// Validate configuration and construct a seeded `PanelCore`.
///
/// This is the single source of truth for validation and construction,
/// used by both `PanelBuilder::try_build()` and `build_panel()`.
fn validate_and_build<K: SettingsSink>(
    sink: K,
    debounce: DebounceCfg,
    bounds: BoundsCfg,
    presets: PresetCfg,
    clock: Option<Box<dyn Clock + Send + Sync>>,
    initial_slippage_cp: i32,
    initial_deadline_s: u64,
) -> Result<PanelCore<K>> {
    // ── Validation ───────────────────────────────────────────────────────────
    if !(1..=60_000).contains(&debounce.quiet_ms) {
        return Err(eyre::Report::new(BuildError::InvalidConfig(
            "quiet_ms must be in 1..=60000",
        )));
    }
    if bounds.low_risk_cp < 0 {
        return Err(eyre::Report::new(BuildError::InvalidConfig(
            "low risk bound must be >= 0",
        )));
    }
    if bounds.low_risk_cp >= bounds.high_risk_cp {
        return Err(eyre::Report::new(BuildError::InvalidConfig(
            "low risk bound must be below high risk bound",
        )));
    }
    if bounds.high_risk_cp >= bounds.max_cp {
        return Err(eyre::Report::new(BuildError::InvalidConfig(
            "high risk bound must be below the hard maximum",
        )));
    }
    if bounds.max_cp > 10_000 {
        return Err(eyre::Report::new(BuildError::InvalidConfig(
            "hard maximum must be <= 100%",
        )));
    }
    if presets.low_cp <= 0 {
        return Err(eyre::Report::new(BuildError::InvalidConfig(
            "preset values must be > 0",
        )));
    }
    if !(presets.low_cp < presets.mid_cp && presets.mid_cp < presets.high_cp) {
        return Err(eyre::Report::new(BuildError::InvalidConfig(
            "preset values must be strictly increasing",
        )));
    }
    if presets.high_cp > bounds.max_cp {
        return Err(eyre::Report::new(BuildError::InvalidConfig(
            "preset values must not exceed the hard maximum",
        )));
    }
    // ── Construction ─────────────────────────────────────────────────────────
    let clock: Arc<dyn Clock + Send + Sync> = match clock {
        Some(b) => Arc::from(b),
        None => Arc::new(MonotonicClock::new()),
    };
    let epoch = clock.now();

    let mut core = PanelCore {
        sink,
        debounce,
        bounds,
        presets,
        clock,
        epoch,
        mode: SlippageMode::PresetHigh,
        custom_text: String::new(),
        armed_at_ms: None,
        warning: Warning::None,
        validity: Validity::Valid,
        slippage_cp: presets.high_cp,
        deadline_text: format_deadline_minutes(initial_deadline_s),
        deadline_s: initial_deadline_s,
    };
    core.seed_slippage(initial_slippage_cp)?;
    Ok(core)
}

impl<K, I> PanelBuilder<K, I> {
    /// Fallible build available in any type-state; returns detailed error for
    /// missing pieces.
    pub fn try_build(self) -> Result<Panel> {
        let sink = self
            .sink
            .ok_or_else(|| eyre::Report::new(BuildError::MissingSink))?;
        let initial_cp = self
            .initial_slippage_cp
            .ok_or_else(|| eyre::Report::new(BuildError::MissingInitial))?;
        let initial_deadline_s = self
            .initial_deadline_s
            .ok_or_else(|| eyre::Report::new(BuildError::MissingInitial))?;

        let inner = validate_and_build(
            sink,
            self.debounce.unwrap_or_default(),
            self.bounds.unwrap_or_default(),
            self.presets.unwrap_or_default(),
            self.clock,
            initial_cp,
            initial_deadline_s,
        )?;

        Ok(Panel { inner })
    }
}

/// Chainable setters that do not affect type-state.
impl<K, I> PanelBuilder<K, I> {
    pub fn with_debounce(mut self, debounce: DebounceCfg) -> Self {
        self.debounce = Some(debounce);
        self
    }
    pub fn with_bounds(mut self, bounds: BoundsCfg) -> Self {
        self.bounds = Some(bounds);
        self
    }
    pub fn with_presets(mut self, presets: PresetCfg) -> Self {
        self.presets = Some(presets);
        self
    }
    /// Take all tunables from a loaded configuration file.
    pub fn with_config(mut self, cfg: &slipset_config::Config) -> Self {
        self.debounce = Some(DebounceCfg::from(&cfg.debounce));
        self.bounds = Some(BoundsCfg::from(&cfg.bounds));
        self.presets = Some(PresetCfg::from(&cfg.presets));
        self
    }
    /// Provide a custom clock implementation; defaults to `MonotonicClock`
    /// when not provided.
    pub fn with_clock(mut self, clock: Box<dyn Clock + Send + Sync>) -> Self {
        self.clock = Some(clock);
        self
    }
}

// Setters that advance type-state
impl<I> PanelBuilder<Missing, I> {
    pub fn with_sink(self, sink: impl SettingsSink + 'static) -> PanelBuilder<Set, I> {
        PanelBuilder {
            sink: Some(Box::new(sink)),
            debounce: self.debounce,
            bounds: self.bounds,
            presets: self.presets,
            clock: self.clock,
            initial_slippage_cp: self.initial_slippage_cp,
            initial_deadline_s: self.initial_deadline_s,
            _k: PhantomData,
            _i: PhantomData,
        }
    }
}

impl<K> PanelBuilder<K, Missing> {
    /// Seed the panel with the owner's current slippage (centipercent) and
    /// deadline (seconds).
    pub fn with_initial(self, slippage_cp: i32, deadline_s: u64) -> PanelBuilder<K, Set> {
        PanelBuilder {
            sink: self.sink,
            debounce: self.debounce,
            bounds: self.bounds,
            presets: self.presets,
            clock: self.clock,
            initial_slippage_cp: Some(slippage_cp),
            initial_deadline_s: Some(deadline_s),
            _k: PhantomData,
            _i: PhantomData,
        }
    }
}

impl PanelBuilder<Set, Set> {
    /// Validate and build the Panel. Only available when the sink and the
    /// initial values are set.
    pub fn build(self) -> Result<Panel> {
        self.try_build()
    }
}

/// Generic, statically-dispatched alias using the unified core.
pub type PanelG<K> = PanelCore<K>;

/// Build a generic, statically-dispatched `PanelG` from a concrete sink.
///
/// Delegates to the shared `validate_and_build` — no duplicated validation
/// logic.
pub fn build_panel<K>(
    sink: K,
    debounce: Option<DebounceCfg>,
    bounds: Option<BoundsCfg>,
    presets: Option<PresetCfg>,
    clock: Option<Box<dyn Clock + Send + Sync>>,
    initial_slippage_cp: i32,
    initial_deadline_s: u64,
) -> Result<PanelG<K>>
where
    K: SettingsSink + 'static,
{
    validate_and_build(
        sink,
        debounce.unwrap_or_default(),
        bounds.unwrap_or_default(),
        presets.unwrap_or_default(),
        clock,
        initial_slippage_cp,
        initial_deadline_s,
    )
}
