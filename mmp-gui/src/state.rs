//! State management for the GUI.
//!
//! Wraps the `VolumeSlider` and the player it drives. Lives behind an
//! `Rc<RefCell<_>>` rather than a Dioxus signal: only the rendered
//! `SliderView` is reactive, so throttled renders stay throttled.

use std::time::Instant;

use mmp_core::config::Config;
use mmp_core::player::{LocalPlayer, MediaPlayer};
use mmp_core::slider::{ChangeReceiver, VolumeSlider};
use mmp_types::{SliderAction, SliderOutcome, SliderTheme, SliderView};

/// Shared state wrapper for the GUI.
pub struct SharedState {
    pub slider: VolumeSlider,
    pub player: LocalPlayer,
    pub theme: SliderTheme,
    changes: ChangeReceiver,
}

impl SharedState {
    pub fn new() -> Self {
        let config = Config::load();
        let mut slider = VolumeSlider::from_config(&config);
        let player = LocalPlayer::new("Living Room").with_volume(0.35);
        slider.sync_from_player(&player, Instant::now());
        let changes = slider.subscribe();

        Self {
            slider,
            player,
            theme: config.theme(),
            changes,
        }
    }

    /// Dispatch an action to the slider and forward any committed change to the player.
    pub fn dispatch(&mut self, action: &SliderAction) -> SliderOutcome {
        let outcome = self.slider.dispatch(action, Instant::now());
        if self.changes.try_iter().count() > 0 {
            self.slider.apply_to_player(&mut self.player);
        }
        outcome
    }

    /// Pull host volume and collect a render if one is due.
    pub fn poll(&mut self, now: Instant) -> Option<SliderView> {
        self.slider.sync_from_player(&self.player, now);
        self.slider.poll(now)
    }

    pub fn player_name(&self) -> &str {
        self.player.name()
    }
}
