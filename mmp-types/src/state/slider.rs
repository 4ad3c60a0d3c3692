//! Slider value model and gesture state.

use serde::{Deserialize, Serialize};

/// Nominal volume range of the host device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for VolumeBounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
        }
    }
}

impl VolumeBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `value` expressed as a percentage of `max`. Falls back to the raw value
    /// when `max` is not positive.
    pub fn pct_of_max(&self, value: f64) -> f64 {
        if self.max > 0.0 {
            value / self.max * 100.0
        } else {
            value
        }
    }
}

/// Touch gesture lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum GestureState {
    #[default]
    Idle,
    /// A finger is down on the track.
    Dragging {
        /// Touch percentage when the finger went down
        start_pct: f64,
        /// Committed value at that moment, as a percentage of max
        start_value_pct: f64,
    },
}

impl GestureState {
    pub fn is_active(&self) -> bool {
        matches!(self, GestureState::Dragging { .. })
    }
}

/// Construction-time settings for a slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderSettings {
    pub bounds: VolumeBounds,
    pub initial_value: f64,
    /// Static decibel readout
    pub display_db: f64,
    /// Re-render throttle window in milliseconds
    pub throttle_ms: u64,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            bounds: VolumeBounds::default(),
            initial_value: 0.0,
            display_db: 0.0,
            throttle_ms: 500,
        }
    }
}

/// State of one volume slider.
///
/// `value` is the committed percentage and the single source of truth for the
/// filled track. `handle_left` is the visual marker: it equals `value` whenever
/// the gesture is idle and is driven by the drag handler while a finger is down.
/// Both are kept as separate fields so neither is derived behind the other's back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderState {
    value: f64,
    pub handle_left: f64,
    pub handle_bg_size: f64,
    pub bounds: VolumeBounds,
    pub display_db: f64,
    pub gesture: GestureState,
}

impl Default for SliderState {
    fn default() -> Self {
        Self::new(&SliderSettings::default())
    }
}

impl SliderState {
    pub fn new(settings: &SliderSettings) -> Self {
        let value = settings.initial_value;
        Self {
            value,
            handle_left: value,
            handle_bg_size: value,
            bounds: settings.bounds,
            display_db: settings.display_db,
            gesture: GestureState::Idle,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn touch_active(&self) -> bool {
        self.gesture.is_active()
    }

    /// The value setter. Stores `v` as given (callers clamp), keeps the track
    /// fill in step, and mirrors into the handle unless a drag owns it.
    pub fn set_value(&mut self, v: f64) {
        self.value = v;
        self.handle_bg_size = v;
        if !self.touch_active() {
            self.handle_left = v;
        }
    }

    /// Whether `value` and `handle_left` are within [0, 100].
    pub fn in_range(&self) -> bool {
        (0.0..=100.0).contains(&self.value) && (0.0..=100.0).contains(&self.handle_left)
    }
}
