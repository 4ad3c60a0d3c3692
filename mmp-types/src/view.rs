//! Render snapshot of a slider.
//!
//! A `SliderView` is copied out of `SliderState` at render time; everything a
//! frontend draws is a pure function of it.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::SliderState;

/// Tick mark positions, in percent of the track width.
pub const TICKS: [u8; 9] = [10, 20, 30, 40, 50, 60, 70, 80, 90];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderView {
    /// Filled track size
    pub value: f64,
    /// Handle offset
    pub handle_left: f64,
    pub handle_bg_size: f64,
    /// Decibel readout
    pub display_db: f64,
}

impl SliderView {
    pub fn from_state(state: &SliderState) -> Self {
        Self {
            value: state.value(),
            handle_left: state.handle_left,
            handle_bg_size: state.handle_bg_size,
            display_db: state.display_db,
        }
    }

    pub fn label(&self) -> String {
        format!("{} dB", self.display_db)
    }

    pub fn track_style(&self) -> String {
        format!("background-size: {}%", self.value)
    }

    pub fn handle_style(&self) -> String {
        format!("left: {}%", self.handle_left)
    }

    pub fn tick_style(tick: u8) -> String {
        format!("left: {}%", tick)
    }

    /// Static HTML for the slider, for hosts that render markup directly.
    pub fn to_markup(&self) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<div class=\"volume-slider\" style=\"{}\">",
            self.track_style()
        );
        let _ = write!(html, "<div class=\"db center-align\">{}</div>", self.label());
        for tick in TICKS {
            let _ = write!(
                html,
                "<div class=\"volumetick\" style=\"{}\"></div>",
                Self::tick_style(tick)
            );
        }
        let _ = write!(
            html,
            "<div class=\"volumehandler\" style=\"{}\"></div>",
            self.handle_style()
        );
        html.push_str("</div>");
        html
    }
}
