//! Notification balloon layout.
//!
//! Balloons are stacked top-to-bottom in a single column at the trailing edge
//! of a container. When they no longer fit, the oldest are evicted. Balloons
//! that carry a [`LayoutEntry`] share a common width and a shadow-aware gap.
//!
//! * [`BalloonLayout`] - coordinator owning the balloon sequence
//! * [`Packing`], [`place()`] - pure column packing and positioning
//! * [`MeasureCache`] - one size query per balloon per pass
//! * [`Debouncer`], [`drive`] - deferred relayout after container resizes
//!
//! The crate is single-threaded: balloons and containers are shared through
//! `Rc` and run on the UI thread or a [`tokio::task::LocalSet`].
#![cfg_attr(test, allow(unused_crate_dependencies))]

mod balloon;
mod clock;
mod config;
mod container;
mod coordinator;
mod debounce;
mod driver;
mod entry;
mod error;
mod invariants;
mod measure;
mod metrics;
mod pack;
mod place;
mod spacing;
#[cfg(test)]
mod test_support;

pub use balloon::{Balloon, BalloonHandle, DisposeHook};
pub use clock::{Clock, ManualClock, SystemClock, TokioClock};
pub use config::{DEFAULT_EDGE_PADDING, LayoutConfig};
pub use container::{Container, ResizeListener, SurfaceAnchor, ToolPane};
pub use coordinator::BalloonLayout;
pub use debounce::{DEFAULT_RELAYOUT_DEBOUNCE, Debouncer, TimerHandle};
pub use driver::drive;
pub use entry::{LayoutCallback, LayoutEntry};
pub use error::{ConfigError, LayoutError, Result};
pub use measure::{EntryMap, MeasureCache};
pub use metrics::LayoutMetrics;
pub use pack::Packing;
pub use place::{Slot, place};
pub use spacing::{DEFAULT_FLAT_GAP, DEFAULT_STACKED_GAP, DEFAULT_TOP_PADDING, GapMode, SpacingRule};
