//! # mmp-types
//!
//! Shared type definitions for the mini media player volume slider.
//! This crate contains the slider state, the gesture actions that mutate it,
//! and the pure helpers (geometry, reducers, render snapshots, throttling)
//! used by mmp-core and both frontends.
//!
//! Nothing here touches a UI runtime: every function is a plain mutation of
//! `SliderState` or a pure computation, so the frontends only have to adapt
//! their native events into [`SliderAction`]s.

pub mod action;
pub mod geometry;
pub mod reduce;
pub mod state;
pub mod throttle;
pub mod view;

pub use action::*;
pub use geometry::{
    clamp_pct, pointer_pct, quantize_volume, touch_pct, DAMPING_FACTOR, TAP_THRESHOLD_PCT,
    VOLUME_STEP,
};
pub use throttle::Throttle;
pub use view::{SliderView, TICKS};

// Re-export all state types at crate root for convenience
pub use state::*;
