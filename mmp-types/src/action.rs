//! Action types for the slider.
//!
//! Actions are the gesture and value intents a frontend feeds into the
//! reducers. Frontends translate their native events (DOM click/touch,
//! terminal mouse) into these before anything touches state.

use serde::{Deserialize, Serialize};

/// A pointer click on the track, in element-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Horizontal offset of the pointer inside the track element.
    pub offset_x: f64,
    /// Width of the track element.
    pub width: f64,
}

impl PointerSample {
    pub fn new(offset_x: f64, width: f64) -> Self {
        Self { offset_x, width }
    }
}

/// A single touch point together with the track geometry it was read against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchSample {
    /// Horizontal client coordinate of the changed touch point.
    pub client_x: f64,
    /// Left edge of the track element in the same coordinate space.
    pub element_left: f64,
    /// Width of the track element.
    pub element_width: f64,
    /// False when the runtime has handed the gesture to scrolling.
    pub cancelable: bool,
}

impl TouchSample {
    pub fn new(client_x: f64, element_left: f64, element_width: f64) -> Self {
        Self {
            client_x,
            element_left,
            element_width,
            cancelable: true,
        }
    }

    /// Mark the sample as belonging to a passive (scroll) gesture.
    pub fn passive(mut self) -> Self {
        self.cancelable = false;
        self
    }
}

/// Slider actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SliderAction {
    /// Click on the track
    Click(PointerSample),
    /// Finger down on the track
    TouchStart(TouchSample),
    /// Finger moved while down
    TouchMove(TouchSample),
    /// Finger lifted
    TouchEnd(TouchSample),
    /// Runtime aborted the touch gesture
    TouchCancel,
    /// Commit a percentage and notify listeners
    UpdateValue(f64),
    /// Store a value without notifying (host binding path)
    SetValue(f64),
    /// Step the value by whole volume steps (keyboard)
    Nudge(i32),
}

/// Side effects of reducing one action, for the frontend to act on.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SliderOutcome {
    /// The action was processed (false for guarded no-ops)
    pub handled: bool,
    /// A change notification must be emitted
    pub changed: bool,
    /// The value setter ran and wants a throttled re-render
    pub value_set: bool,
    /// The handle moved and wants an immediate re-render
    pub handle_moved: bool,
    /// Quantized raw volume computed by the commit, if any
    pub quantized: Option<u32>,
    /// Stop the native event from bubbling to ancestors
    pub stop_propagation: bool,
    /// Suppress the runtime's default handling of the native event
    pub prevent_default: bool,
}

impl SliderOutcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            ..Self::default()
        }
    }

    /// Fold another outcome into this one (later commit wins for `quantized`).
    pub fn merge(&mut self, other: SliderOutcome) {
        self.handled |= other.handled;
        self.changed |= other.changed;
        self.value_set |= other.value_set;
        self.handle_moved |= other.handle_moved;
        self.stop_propagation |= other.stop_propagation;
        self.prevent_default |= other.prevent_default;
        if other.quantized.is_some() {
            self.quantized = other.quantized;
        }
    }
}

/// Events emitted to the slider's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliderEvent {
    /// The committed value changed. Carries no payload: read the slider's value.
    Change,
}

impl SliderEvent {
    /// Whether the event crosses component encapsulation boundaries.
    pub fn composed(&self) -> bool {
        match self {
            SliderEvent::Change => true,
        }
    }
}
