//! Pure state-mutation reducers for the volume slider.
//!
//! These functions are the single source of truth for action → state mutations.
//! mmp-core's `VolumeSlider` and both frontends route every gesture through here.
//!
//! Reducers are pure: they mutate `SliderState` only and describe what else
//! should happen in the returned `SliderOutcome`. They do NOT:
//! - Emit change events
//! - Schedule or perform renders
//! - Touch the host media player

mod gesture;
mod value;

pub use value::{set_value, update_value};

use crate::{SliderAction, SliderOutcome, SliderState, VOLUME_STEP};

/// Apply an action's state mutations to the given state.
pub fn reduce_action(action: &SliderAction, state: &mut SliderState) -> SliderOutcome {
    match action {
        SliderAction::Click(sample) => gesture::click(sample, state),
        SliderAction::TouchStart(sample) => gesture::touch_start(sample, state),
        SliderAction::TouchMove(sample) => gesture::touch_move(sample, state),
        SliderAction::TouchEnd(sample) => gesture::touch_end(sample, state),
        SliderAction::TouchCancel => gesture::touch_cancel(state),
        SliderAction::UpdateValue(pct) => update_value(*pct, state),
        SliderAction::SetValue(v) => set_value(*v, state),
        SliderAction::Nudge(steps) => {
            let pct = (state.value() + *steps as f64 * VOLUME_STEP as f64).clamp(0.0, 100.0);
            let before = state.handle_left;
            let mut out = update_value(pct, state);
            // Draw the handle right away, unless a drag is holding it
            out.handle_moved = state.handle_left != before;
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GestureState, PointerSample, SliderEvent, TouchSample};

    #[test]
    fn nudge_steps_by_volume_step_and_clamps() {
        let mut state = SliderState::default();
        state.set_value(50.0);
        let out = reduce_action(&SliderAction::Nudge(1), &mut state);
        assert!(out.changed);
        assert_eq!(state.value(), 55.0);

        reduce_action(&SliderAction::Nudge(-20), &mut state);
        assert_eq!(state.value(), 0.0);

        reduce_action(&SliderAction::Nudge(40), &mut state);
        assert_eq!(state.value(), 100.0);
    }

    #[test]
    fn nudge_moves_handle_only_when_idle() {
        let mut state = SliderState::default();
        state.set_value(50.0);
        let out = reduce_action(&SliderAction::Nudge(1), &mut state);
        assert!(out.handle_moved);
        assert_eq!(state.handle_left, 55.0);

        state.gesture = GestureState::Dragging {
            start_pct: 55.0,
            start_value_pct: 55.0,
        };
        let out = reduce_action(&SliderAction::Nudge(-1), &mut state);
        assert!(out.changed);
        assert!(!out.handle_moved);
        assert_eq!(state.value(), 50.0);
        assert_eq!(state.handle_left, 55.0);
    }

    #[test]
    fn nudge_during_drag_then_long_release_lands_handle_on_value() {
        let mut state = SliderState::default();
        state.set_value(50.0);
        let track = |pct: f64| TouchSample::new(pct * 2.0, 0.0, 200.0);
        reduce_action(&SliderAction::TouchStart(track(50.0)), &mut state);
        reduce_action(&SliderAction::TouchMove(track(80.0)), &mut state);
        reduce_action(&SliderAction::Nudge(-4), &mut state);
        assert_eq!(state.value(), 40.0);

        let out = reduce_action(&SliderAction::TouchEnd(track(80.0)), &mut state);
        assert!(out.handle_moved);
        assert!(!state.touch_active());
        assert_eq!(state.handle_left, 40.0);
    }

    #[test]
    fn click_scenario_width_200_offset_50() {
        let mut state = SliderState::default();
        let out = reduce_action(
            &SliderAction::Click(PointerSample::new(50.0, 200.0)),
            &mut state,
        );
        assert_eq!(state.value(), 25.0);
        assert_eq!(state.handle_left, 25.0);
        assert!(out.changed);
        assert!(out.stop_propagation);
        assert!(SliderEvent::Change.composed());
    }
}
