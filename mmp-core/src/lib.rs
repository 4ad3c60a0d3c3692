//! # mmp-core
//!
//! Runtime side of the mini media player volume slider: the stateful
//! `VolumeSlider` component, the host media-player seam, and configuration.
//! Independent of any UI framework.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::time::Instant;
//! use mmp_core::config::Config;
//! use mmp_core::slider::VolumeSlider;
//! use mmp_types::PointerSample;
//!
//! // 1. Build the slider from configuration (embedded + user override)
//! let config = Config::load();
//! let mut slider = VolumeSlider::from_config(&config);
//!
//! // 2. Listen for changes
//! let changes = slider.subscribe();
//!
//! // 3. Feed gestures from the frontend's event handlers
//! let outcome = slider.clicked(PointerSample::new(50.0, 200.0), Instant::now());
//!
//! // 4. Drain changes and read the committed value
//! for _ in changes.try_iter() {
//!     println!("volume {}", slider.value());
//! }
//!
//! // 5. Poll for renders from the event loop (throttled)
//! if let Some(view) = slider.poll(Instant::now()) { /* draw view */ }
//! ```
//!
//! ## Module Overview
//!
//! - [`slider`]: `VolumeSlider`: state, render throttle, change subscribers
//! - [`player`]: `MediaPlayer` host trait and the in-memory `LocalPlayer`
//! - [`config`]: TOML configuration loading (slider settings and theme fallbacks)

pub mod config;
pub mod player;
pub mod slider;
