//! Input processing: poll events, map them onto slider actions, and write
//! committed changes through to the player.

use std::time::Instant;

use mmp_types::SliderAction;

use super::AppRuntime;
use crate::input::{key_action, mouse_action, AppEvent, KeyCode};
use crate::terminal::TerminalBackend;

impl AppRuntime {
    /// Process input events. Returns true if the app should quit.
    pub(crate) fn process_events(&mut self, backend: &mut TerminalBackend) -> bool {
        let timeout = self.poll_timeout(Instant::now());
        match backend.poll_event(timeout) {
            Some(event) => self.handle_event(event, Instant::now()),
            None => false,
        }
    }

    pub(crate) fn handle_event(&mut self, event: AppEvent, now: Instant) -> bool {
        let action = match event {
            AppEvent::Key(KeyCode::Char('q')) | AppEvent::Key(KeyCode::Escape) => return true,
            AppEvent::Key(key) => key_action(key),
            AppEvent::Mouse(mouse) => mouse_action(&mouse, self.track_area),
            AppEvent::Resize(_, _) => {
                self.render_needed = true;
                None
            }
        };
        if let Some(action) = action {
            self.apply_action(&action, now);
        }
        false
    }

    pub(crate) fn apply_action(&mut self, action: &SliderAction, now: Instant) {
        self.slider.dispatch(action, now);
        if self.changes.try_iter().count() > 0 {
            self.slider.apply_to_player(&mut self.player);
        }
    }

    /// Pull the player's volume and collect any render the slider has due.
    pub(crate) fn process_tick(&mut self, now: Instant) {
        self.slider.sync_from_player(&self.player, now);
        if let Some(view) = self.slider.poll(now) {
            self.view = view;
            self.render_needed = true;
        }
    }
}
