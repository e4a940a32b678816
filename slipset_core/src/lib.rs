#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Core slippage/deadline panel logic (host-agnostic).
//!
//! This crate provides the UI-independent validation engine for a swap
//! settings panel. All outbound effects go through the
//! `slipset_traits::SettingsSink` trait; all timing goes through
//! `slipset_traits::Clock`, so hosts decide when to poll and tests run on a
//! manual clock.
//!
//! ## Architecture
//!
//! - **Grammar**: Partial-input recognizers for both text fields (`grammar`)
//! - **Classification**: Bounds checks and warnings (`classify`)
//! - **Panel**: Debounce and mode state machine (`panel`)
//! - **Builder**: Type-state construction and seeding (`builder`)
//! - **Configuration**: Runtime tunables (`config`), bridged from the TOML
//!   schema in `slipset_config` by `conversions`
//!
//! ## Fixed-Point Arithmetic
//!
//! Slippage is handled in **centipercent** (cp, 1 cp = 0.01%) using `i32` for
//! deterministic behavior. See `fixed_point` for parsing, formatting, and
//! quantization.

pub mod builder;
pub mod classify;
pub mod config;
mod conversions;
pub mod error;
pub mod fixed_point;
pub mod grammar;
pub mod mocks;
pub mod panel;
pub mod status;

pub use builder::{Missing, Panel, PanelBuilder, PanelG, Set, build_panel};
pub use classify::{Classification, check_bounds};
pub use config::{BoundsCfg, DebounceCfg, PresetCfg};
pub use error::{BuildError, PanelError, Result};
pub use panel::PanelCore;
pub use status::{Preset, SlippageMode, Warning};

pub use slipset_traits::{Clock, ManualClock, MonotonicClock, SettingsSink, Validity};
