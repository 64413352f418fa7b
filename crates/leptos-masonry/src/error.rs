use thiserror::Error;

/// Misconfiguration of the grid. These indicate a caller bug, not data variance.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid column count: {0} (must be at least 1)")]
    InvalidColumnCount(usize),

    #[error("Invalid intersection threshold: {0} (must be within 0..=1)")]
    InvalidThreshold(f64),

    #[error("Breakpoint table is empty")]
    EmptyBreakpoints,

    #[error("Breakpoint table has no row starting at width 0")]
    MissingBaseBreakpoint,

    #[error("Malformed grid config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Failure to set up viewport observation. Always recovered by failing open.
#[derive(Error, Debug)]
pub enum ObserverError {
    #[error("IntersectionObserver is not available")]
    Unsupported,

    #[error("IntersectionObserver construction failed: {0}")]
    Js(String),
}
