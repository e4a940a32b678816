use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum PanelError {
    #[error("sink error: {0}")]
    Sink(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid state: {0}")]
    State(String),
}

#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("missing sink")]
    MissingSink,
    #[error("missing initial slippage/deadline values")]
    MissingInitial,
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

/// Map a trait-boundary error from the sink to a typed `PanelError`.
///
/// The `SettingsSink` trait uses `Box<dyn Error + Send + Sync>` for maximum
/// flexibility; everything the owner reports is folded into `Sink`.
pub fn map_sink_error(e: &(dyn std::error::Error + 'static)) -> PanelError {
    PanelError::Sink(e.to_string())
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
