//! Leptos Masonry Utilities
//!
//! Column balancing, breakpoint policy and viewport visibility tracking for
//! masonry feeds. The layout and tracking logic is plain Rust; `observer` and
//! `resize` hold the thin browser glue around it.

mod balance;
mod config;
mod error;
mod observer;
mod resize;
mod viewport;
mod visibility;

pub use balance::{assign_columns, height_proxy, Column, MasonryItem, DEFAULT_ASPECT_RATIO};
pub use config::{BreakpointRow, BreakpointTable, GridConfig, ObserverOptions};
pub use error::{LayoutError, ObserverError};
pub use observer::{Intersection, ViewportObserver};
pub use resize::use_viewport;
pub use viewport::{Breakpoint, Orientation, Viewport};
pub use visibility::{ItemState, SentinelTrigger, VisibilityTracker};
