//! The stateful volume slider component.
//!
//! `VolumeSlider` wraps the pure reducers with the parts that need memory
//! across events: the re-render throttle, change subscribers, and the last
//! quantized device volume. Frontends own one per card and feed it
//! `SliderAction`s from their native event handlers.

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};

use mmp_types::reduce::reduce_action;
use mmp_types::{
    PointerSample, SliderAction, SliderEvent, SliderOutcome, SliderSettings, SliderState,
    SliderView, Throttle, TouchSample,
};

use crate::config::Config;
use crate::player::MediaPlayer;

/// Receiving end of a `VolumeSlider::subscribe` registration.
pub type ChangeReceiver = Receiver<SliderEvent>;

/// Host volume differences below this are treated as the same position.
const SYNC_EPSILON_PCT: f64 = 1e-6;

pub struct VolumeSlider {
    state: SliderState,
    render_throttle: Throttle<()>,
    render_due: bool,
    last_quantized: Option<u32>,
    subscribers: Vec<Sender<SliderEvent>>,
}

impl VolumeSlider {
    pub fn new(settings: &SliderSettings) -> Self {
        Self {
            state: SliderState::new(settings),
            render_throttle: Throttle::new(Duration::from_millis(settings.throttle_ms)),
            render_due: true,
            last_quantized: None,
            subscribers: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.slider_settings())
    }

    /// Committed percentage.
    pub fn value(&self) -> f64 {
        self.state.value()
    }

    pub fn handle_left(&self) -> f64 {
        self.state.handle_left
    }

    pub fn touch_active(&self) -> bool {
        self.state.touch_active()
    }

    /// Raw device volume computed by the most recent commit, rounded to the
    /// volume step. Not forwarded anywhere; hosts that want stepped volumes
    /// read it after a `Change`.
    pub fn quantized_volume(&self) -> Option<u32> {
        self.last_quantized
    }

    /// Register for `Change` notifications. Dropped receivers are pruned on
    /// the next emit.
    pub fn subscribe(&mut self) -> ChangeReceiver {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Snapshot of the current state for rendering.
    pub fn view(&self) -> SliderView {
        SliderView::from_state(&self.state)
    }

    /// Apply an action. This is the single entry point for state mutation.
    pub fn dispatch(&mut self, action: &SliderAction, now: Instant) -> SliderOutcome {
        let out = reduce_action(action, &mut self.state);
        if !out.handled {
            log::trace!("volume slider: ignored {:?}", action);
            return out;
        }
        if !self.state.in_range() {
            log::warn!(
                "volume slider: value {} outside 0..=100 after {:?}",
                self.state.value(),
                action
            );
        }

        if out.value_set && self.render_throttle.call(now, ()).is_some() {
            self.render_due = true;
        }
        if out.handle_moved {
            self.render_due = true;
        }
        if let Some(quantized) = out.quantized {
            self.last_quantized = Some(quantized);
        }
        if out.changed {
            log::debug!(
                "volume slider: value {:.2} (device {:?})",
                self.state.value(),
                self.last_quantized
            );
            self.emit(SliderEvent::Change);
        }
        out
    }

    /// The value setter: stores `v`, schedules a throttled render, and moves
    /// the handle unless a drag owns it. Does not notify.
    pub fn set_value(&mut self, v: f64, now: Instant) -> SliderOutcome {
        self.dispatch(&SliderAction::SetValue(v), now)
    }

    /// Commit `pct` and notify. Negative percentages are ignored.
    pub fn update_value(&mut self, pct: f64, now: Instant) -> SliderOutcome {
        self.dispatch(&SliderAction::UpdateValue(pct), now)
    }

    pub fn clicked(&mut self, sample: PointerSample, now: Instant) -> SliderOutcome {
        self.dispatch(&SliderAction::Click(sample), now)
    }

    pub fn touch_start(&mut self, sample: TouchSample, now: Instant) -> SliderOutcome {
        self.dispatch(&SliderAction::TouchStart(sample), now)
    }

    pub fn touch_move(&mut self, sample: TouchSample, now: Instant) -> SliderOutcome {
        self.dispatch(&SliderAction::TouchMove(sample), now)
    }

    pub fn touch_end(&mut self, sample: TouchSample, now: Instant) -> SliderOutcome {
        self.dispatch(&SliderAction::TouchEnd(sample), now)
    }

    pub fn touch_cancel(&mut self, now: Instant) -> SliderOutcome {
        self.dispatch(&SliderAction::TouchCancel, now)
    }

    /// Returns a fresh view when a render is due: immediately after handle
    /// movement, and at most once per throttle window for value changes.
    pub fn poll(&mut self, now: Instant) -> Option<SliderView> {
        if self.render_throttle.poll(now).is_some() {
            self.render_due = true;
        }
        if !self.render_due {
            return None;
        }
        self.render_due = false;
        Some(self.view())
    }

    /// When the throttle will next release a pending render.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.render_throttle.has_pending() {
            self.render_throttle.deadline()
        } else {
            None
        }
    }

    /// Pull the host's volume into the slider through the setter.
    pub fn sync_from_player(&mut self, player: &dyn MediaPlayer, now: Instant) -> SliderOutcome {
        let pct = (player.volume_level() * 100.0).clamp(0.0, 100.0);
        if (pct - self.state.value()).abs() < SYNC_EPSILON_PCT {
            return SliderOutcome::none();
        }
        self.set_value(pct, now)
    }

    /// Push the committed percentage to the host.
    pub fn apply_to_player(&self, player: &mut dyn MediaPlayer) {
        player.set_volume_level((self.state.value() / 100.0).clamp(0.0, 1.0));
    }

    fn emit(&mut self, event: SliderEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}

impl Default for VolumeSlider {
    fn default() -> Self {
        Self::new(&SliderSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::LocalPlayer;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn touch(pct: f64) -> TouchSample {
        TouchSample::new(pct * 2.0, 0.0, 200.0)
    }

    fn drain(rx: &Receiver<SliderEvent>) -> usize {
        rx.try_iter().count()
    }

    #[test]
    fn update_value_emits_one_change_per_commit() {
        let t0 = Instant::now();
        let mut slider = VolumeSlider::default();
        let rx = slider.subscribe();
        for pct in [0.0, 10.0, 55.5, 100.0] {
            slider.update_value(pct, t0);
            assert_eq!(slider.value(), pct);
            assert_eq!(rx.try_recv(), Ok(SliderEvent::Change));
            assert!(rx.try_recv().is_err());
        }
    }

    #[test]
    fn negative_commit_is_silent() {
        let t0 = Instant::now();
        let mut slider = VolumeSlider::default();
        slider.update_value(20.0, t0);
        let rx = slider.subscribe();
        slider.update_value(-3.0, t0);
        assert_eq!(slider.value(), 20.0);
        assert_eq!(drain(&rx), 0);
    }

    #[test]
    fn set_value_does_not_notify() {
        let t0 = Instant::now();
        let mut slider = VolumeSlider::default();
        let rx = slider.subscribe();
        slider.set_value(40.0, t0);
        assert_eq!(slider.value(), 40.0);
        assert_eq!(slider.handle_left(), 40.0);
        assert_eq!(drain(&rx), 0);
    }

    #[test]
    fn out_of_range_set_value_is_stored_as_given() {
        let t0 = Instant::now();
        let mut slider = VolumeSlider::default();
        let out = slider.set_value(140.0, t0);
        assert!(out.handled);
        assert_eq!(slider.value(), 140.0);
        assert!(!slider.state.in_range());
    }

    #[test]
    fn click_scenario() {
        let t0 = Instant::now();
        let mut slider = VolumeSlider::default();
        let rx = slider.subscribe();
        let out = slider.clicked(PointerSample::new(50.0, 200.0), t0);
        assert!(out.stop_propagation);
        assert_eq!(slider.value(), 25.0);
        assert_eq!(slider.handle_left(), 25.0);
        assert_eq!(drain(&rx), 1);
        assert_eq!(slider.quantized_volume(), Some(25));
    }

    #[test]
    fn drag_then_tap_scenario() {
        let t0 = Instant::now();
        let mut slider = VolumeSlider::default();
        slider.set_value(30.0, t0);
        let rx = slider.subscribe();

        slider.touch_start(touch(30.0), t0);
        assert!(slider.touch_active());
        slider.touch_move(touch(20.0), t0 + ms(16));
        let dragged = 30.0 - (30.0 - 20.0) / 3.0;
        assert!((slider.value() - dragged).abs() < 1e-9);
        assert!((slider.handle_left() - dragged).abs() < 1e-9);

        slider.touch_end(touch(28.0), t0 + ms(32));
        assert!(!slider.touch_active());
        assert!((slider.value() - 28.0).abs() < 1e-9);
        assert!((slider.handle_left() - 28.0).abs() < 1e-9);
        assert_eq!(drain(&rx), 2);
    }

    #[test]
    fn passive_touch_sequence_changes_nothing() {
        let t0 = Instant::now();
        let mut slider = VolumeSlider::default();
        slider.set_value(30.0, t0);
        let rx = slider.subscribe();
        slider.touch_start(touch(30.0).passive(), t0);
        slider.touch_move(touch(80.0).passive(), t0);
        assert_eq!(slider.value(), 30.0);
        assert_eq!(slider.handle_left(), 30.0);
        assert_eq!(drain(&rx), 0);
    }

    #[test]
    fn host_sync_during_drag_keeps_handle_on_finger() {
        let t0 = Instant::now();
        let mut slider = VolumeSlider::default();
        slider.set_value(50.0, t0);
        slider.touch_start(touch(50.0), t0);
        slider.touch_move(touch(80.0), t0);
        let handle = slider.handle_left();

        let player = LocalPlayer::new("Den").with_volume(0.1);
        slider.sync_from_player(&player, t0);
        assert!((slider.value() - 10.0).abs() < 1e-9);
        assert_eq!(slider.handle_left(), handle);

        slider.touch_cancel(t0);
        assert!((slider.handle_left() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn long_release_after_host_sync_lands_handle_on_value() {
        let t0 = Instant::now();
        let mut slider = VolumeSlider::default();
        slider.set_value(50.0, t0);
        slider.touch_start(touch(50.0), t0);
        slider.touch_move(touch(80.0), t0);

        let player = LocalPlayer::new("Den").with_volume(0.1);
        slider.sync_from_player(&player, t0);
        slider.poll(t0);

        let out = slider.touch_end(touch(80.0), t0 + ms(10));
        assert!(out.handle_moved);
        assert!(!slider.touch_active());
        assert!((slider.handle_left() - 10.0).abs() < 1e-9);
        let view = slider.poll(t0 + ms(10)).unwrap();
        assert!((view.handle_left - 10.0).abs() < 1e-9);
    }

    #[test]
    fn long_release_after_nudge_lands_handle_on_value() {
        let t0 = Instant::now();
        let mut slider = VolumeSlider::default();
        slider.set_value(50.0, t0);
        slider.touch_start(touch(50.0), t0);
        slider.touch_move(touch(80.0), t0);
        slider.dispatch(&SliderAction::Nudge(-4), t0);
        assert!((slider.value() - 40.0).abs() < 1e-9);

        slider.touch_end(touch(80.0), t0);
        assert!((slider.handle_left() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn apply_to_player_writes_committed_level() {
        let t0 = Instant::now();
        let mut slider = VolumeSlider::default();
        let mut player = LocalPlayer::new("Den");
        slider.update_value(45.0, t0);
        slider.apply_to_player(&mut player);
        assert!((player.volume_level() - 0.45).abs() < 1e-9);

        assert_eq!(slider.sync_from_player(&player, t0), SliderOutcome::none());
    }

    #[test]
    fn value_renders_are_throttled() {
        let t0 = Instant::now();
        let mut slider = VolumeSlider::default();
        assert!(slider.poll(t0).is_some());

        // Leading edge renders at once
        slider.set_value(10.0, t0);
        assert_eq!(slider.poll(t0).map(|v| v.value), Some(10.0));

        slider.set_value(20.0, t0 + ms(100));
        slider.set_value(30.0, t0 + ms(200));
        slider.set_value(40.0, t0 + ms(300));
        assert!(slider.poll(t0 + ms(300)).is_none());
        assert_eq!(slider.next_deadline(), Some(t0 + ms(500)));

        // One trailing render with the latest value
        assert_eq!(slider.poll(t0 + ms(500)).map(|v| v.value), Some(40.0));
        assert!(slider.poll(t0 + ms(501)).is_none());
    }

    #[test]
    fn handle_movement_renders_immediately() {
        let t0 = Instant::now();
        let mut slider = VolumeSlider::default();
        slider.poll(t0);
        slider.touch_start(touch(50.0), t0);
        slider.touch_move(touch(60.0), t0 + ms(10));
        assert!(slider.poll(t0 + ms(10)).is_some());
        slider.touch_move(touch(70.0), t0 + ms(20));
        let view = slider.poll(t0 + ms(20)).unwrap();
        assert!((view.handle_left - slider.handle_left()).abs() < 1e-9);
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let t0 = Instant::now();
        let mut slider = VolumeSlider::default();
        let keep = slider.subscribe();
        drop(slider.subscribe());
        slider.update_value(5.0, t0);
        assert_eq!(slider.subscribers.len(), 1);
        assert_eq!(drain(&keep), 1);
    }
}
