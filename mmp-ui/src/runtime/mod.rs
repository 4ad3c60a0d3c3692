//! App runtime coordinator.
//!
//! Splits the event loop into two subsystems:
//! - `input`: event polling, mapping onto slider actions, player writes
//! - `render`: throttled slider renders and frame drawing

mod input;
mod render;

use std::time::{Duration, Instant};

use mmp_core::config::Config;
use mmp_core::player::LocalPlayer;
use mmp_core::slider::{ChangeReceiver, VolumeSlider};
use mmp_types::{SliderTheme, SliderView};
use ratatui::layout::Rect;

use crate::terminal::TerminalBackend;

/// Longest wait for input when no render is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Top-level runtime that owns the slider and the player it drives.
pub struct AppRuntime {
    pub(crate) slider: VolumeSlider,
    pub(crate) player: LocalPlayer,
    pub(crate) changes: ChangeReceiver,
    pub(crate) theme: SliderTheme,

    // Per-frame state
    pub(crate) view: SliderView,
    pub(crate) track_area: Rect,
    pub(crate) render_needed: bool,
}

impl AppRuntime {
    pub fn new(config: &Config, player: LocalPlayer) -> Self {
        let mut slider = VolumeSlider::from_config(config);
        let now = Instant::now();
        slider.sync_from_player(&player, now);
        let changes = slider.subscribe();
        let view = slider.poll(now).unwrap_or_else(|| slider.view());

        Self {
            slider,
            player,
            changes,
            theme: config.theme(),
            view,
            track_area: Rect::default(),
            render_needed: true,
        }
    }

    /// How long the loop may block on input before the next throttled
    /// render is due.
    pub(crate) fn poll_timeout(&self, now: Instant) -> Duration {
        match self.slider.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, backend: &mut TerminalBackend) -> std::io::Result<()> {
        loop {
            if self.process_events(backend) {
                break;
            }
            self.process_tick(Instant::now());
            self.maybe_render(backend)?;
        }
        Ok(())
    }
}

/// Public entry point: load config, build the runtime and drive it.
pub fn run(backend: &mut TerminalBackend, player_name: &str) -> std::io::Result<()> {
    let config = Config::load();
    let player = LocalPlayer::new(player_name).with_volume(0.35);
    let mut runtime = AppRuntime::new(&config, player);
    log::info!("volume card for {}", player_name);
    runtime.run(backend)
}
