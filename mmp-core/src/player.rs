//! Host media-player seam.
//!
//! The slider doesn't own the authoritative volume; the host's player model
//! does. `MediaPlayer` is the binding point, `LocalPlayer` an in-process model
//! for the bundled frontends and tests.

use serde::{Deserialize, Serialize};

/// Host-side media player as seen by the slider.
pub trait MediaPlayer {
    fn name(&self) -> &str;
    /// Current volume, 0.0..=1.0
    fn volume_level(&self) -> f64;
    /// Set the volume, 0.0..=1.0
    fn set_volume_level(&mut self, level: f64);
    fn is_muted(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalPlayer {
    pub name: String,
    pub volume_level: f64,
    pub muted: bool,
}

impl LocalPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            volume_level: 0.0,
            muted: false,
        }
    }

    pub fn with_volume(mut self, level: f64) -> Self {
        self.volume_level = level.clamp(0.0, 1.0);
        self
    }
}

impl MediaPlayer for LocalPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn volume_level(&self) -> f64 {
        self.volume_level
    }

    fn set_volume_level(&mut self, level: f64) {
        let level = level.clamp(0.0, 1.0);
        log::debug!("player {}: volume {:.3}", self.name, level);
        self.volume_level = level;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}
