use crate::{
    clamp_pct, pointer_pct, touch_pct, GestureState, PointerSample, SliderOutcome, SliderState,
    TouchSample, DAMPING_FACTOR, TAP_THRESHOLD_PCT,
};

use super::value::update_value;

pub(super) fn click(sample: &PointerSample, state: &mut SliderState) -> SliderOutcome {
    let Some(pct) = pointer_pct(sample.offset_x, sample.width) else {
        return SliderOutcome::none();
    };
    state.handle_left = pct;
    let mut out = update_value(pct, state);
    out.handle_moved = true;
    out.stop_propagation = true;
    out
}

pub(super) fn touch_start(sample: &TouchSample, state: &mut SliderState) -> SliderOutcome {
    let Some(pct) = sample_pct(sample) else {
        return SliderOutcome::none();
    };
    state.gesture = GestureState::Dragging {
        start_pct: pct,
        start_value_pct: state.bounds.pct_of_max(state.value()),
    };
    SliderOutcome::handled()
}

pub(super) fn touch_move(sample: &TouchSample, state: &mut SliderState) -> SliderOutcome {
    // Scroll and other passive gestures pass through untouched
    if !sample.cancelable {
        return SliderOutcome::none();
    }
    let GestureState::Dragging {
        start_pct,
        start_value_pct,
    } = state.gesture
    else {
        return SliderOutcome::none();
    };
    let Some(pct) = sample_pct(sample) else {
        return SliderOutcome::none();
    };

    let out_pct = clamp_pct(start_value_pct - (start_pct - pct) / DAMPING_FACTOR);
    state.handle_left = out_pct;
    let mut out = update_value(out_pct, state);
    out.handle_moved = true;
    out
}

pub(super) fn touch_end(sample: &TouchSample, state: &mut SliderState) -> SliderOutcome {
    if !sample.cancelable {
        return SliderOutcome::none();
    }
    let mut out = SliderOutcome {
        handled: true,
        prevent_default: true,
        ..SliderOutcome::default()
    };
    let GestureState::Dragging { start_pct, .. } = std::mem::take(&mut state.gesture) else {
        return out;
    };

    // A short touch lands exactly where the finger was, not on the damped track
    if let Some(pct) = sample_pct(sample) {
        if (pct - start_pct).abs() < TAP_THRESHOLD_PCT {
            state.handle_left = pct;
            out.merge(update_value(pct, state));
            out.handle_moved = true;
            return out;
        }
    }
    // The value may have been written from elsewhere mid-drag
    out.handle_moved = realign_handle(state);
    out
}

pub(super) fn touch_cancel(state: &mut SliderState) -> SliderOutcome {
    if !state.touch_active() {
        return SliderOutcome::none();
    }
    state.gesture = GestureState::Idle;
    SliderOutcome {
        handled: true,
        handle_moved: realign_handle(state),
        ..SliderOutcome::default()
    }
}

/// Put an idle handle back on the value. Returns whether it moved.
fn realign_handle(state: &mut SliderState) -> bool {
    let moved = state.handle_left != state.value();
    state.handle_left = state.value();
    moved
}

fn sample_pct(sample: &TouchSample) -> Option<f64> {
    touch_pct(sample.client_x, sample.element_left, sample.element_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Track at x = 100..300 so client_x = 100 + 2 * pct.
    fn at(pct: f64) -> TouchSample {
        TouchSample::new(100.0 + pct * 2.0, 100.0, 200.0)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn state_at(value: f64) -> SliderState {
        let mut state = SliderState::default();
        state.set_value(value);
        state
    }

    #[test]
    fn touch_start_records_start_and_enters_dragging() {
        let mut state = state_at(30.0);
        let out = touch_start(&at(40.0), &mut state);
        assert!(out.handled);
        assert!(!out.changed);
        assert_eq!(
            state.gesture,
            GestureState::Dragging {
                start_pct: 40.0,
                start_value_pct: 30.0,
            }
        );
    }

    #[test]
    fn touch_start_value_pct_is_relative_to_max() {
        let mut state = state_at(30.0);
        state.bounds.max = 60.0;
        touch_start(&at(40.0), &mut state);
        assert_eq!(
            state.gesture,
            GestureState::Dragging {
                start_pct: 40.0,
                start_value_pct: 50.0,
            }
        );
    }

    #[test]
    fn touch_move_applies_damping() {
        let mut state = state_at(30.0);
        touch_start(&at(30.0), &mut state);
        let out = touch_move(&at(20.0), &mut state);
        let expected = 30.0 - (30.0 - 20.0) / 3.0;
        assert!(out.changed);
        assert!(approx(state.value(), expected));
        assert!(approx(state.handle_left, expected));

        touch_move(&at(60.0), &mut state);
        assert!(approx(state.value(), 40.0));
    }

    #[test]
    fn touch_move_clamps_to_range() {
        let mut state = state_at(95.0);
        touch_start(&at(0.0), &mut state);
        touch_move(&at(100.0), &mut state);
        assert_eq!(state.value(), 100.0);

        let mut state = state_at(5.0);
        touch_start(&at(100.0), &mut state);
        touch_move(&at(0.0), &mut state);
        assert_eq!(state.value(), 0.0);
        assert_eq!(state.handle_left, 0.0);
    }

    #[test]
    fn passive_move_changes_nothing() {
        let mut state = state_at(30.0);
        touch_start(&at(30.0), &mut state);
        let before = state.clone();
        let out = touch_move(&at(90.0).passive(), &mut state);
        assert_eq!(out, SliderOutcome::none());
        assert_eq!(state, before);
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut state = state_at(30.0);
        let out = touch_move(&at(90.0), &mut state);
        assert!(!out.handled);
        assert_eq!(state.value(), 30.0);
    }

    #[test]
    fn short_release_is_a_tap_at_release_point() {
        let mut state = state_at(50.0);
        touch_start(&at(30.0), &mut state);
        touch_move(&at(26.0), &mut state);
        let out = touch_end(&at(28.0), &mut state);
        assert!(out.changed);
        assert!(out.prevent_default);
        assert!(!state.touch_active());
        assert!(approx(state.value(), 28.0));
        assert!(approx(state.handle_left, 28.0));
    }

    #[test]
    fn long_release_keeps_dragged_value() {
        let mut state = state_at(50.0);
        touch_start(&at(30.0), &mut state);
        touch_move(&at(60.0), &mut state);
        let dragged = state.value();
        let out = touch_end(&at(60.0), &mut state);
        assert!(!out.changed);
        assert!(out.prevent_default);
        assert!(!state.touch_active());
        assert_eq!(state.value(), dragged);
        assert_eq!(state.handle_left, dragged);
    }

    #[test]
    fn long_release_realigns_handle_after_outside_write() {
        let mut state = state_at(50.0);
        touch_start(&at(50.0), &mut state);
        touch_move(&at(80.0), &mut state);
        assert!(approx(state.handle_left, 60.0));

        // Host volume arrives through the setter mid-drag
        state.set_value(10.0);
        assert!(approx(state.handle_left, 60.0));

        let out = touch_end(&at(80.0), &mut state);
        assert!(!out.changed);
        assert!(out.handle_moved);
        assert!(!state.touch_active());
        assert_eq!(state.handle_left, 10.0);
    }

    #[test]
    fn long_release_after_plain_drag_reports_no_handle_move() {
        let mut state = state_at(50.0);
        touch_start(&at(50.0), &mut state);
        touch_move(&at(80.0), &mut state);
        let out = touch_end(&at(80.0), &mut state);
        assert!(!out.handle_moved);
        assert_eq!(state.handle_left, state.value());
    }

    #[test]
    fn passive_release_is_ignored() {
        let mut state = state_at(50.0);
        touch_start(&at(30.0), &mut state);
        let out = touch_end(&at(30.0).passive(), &mut state);
        assert!(!out.handled);
        assert!(state.touch_active());
    }

    #[test]
    fn cancel_realigns_handle_with_value() {
        let mut state = state_at(50.0);
        touch_start(&at(30.0), &mut state);
        state.handle_left = 12.0;
        let out = touch_cancel(&mut state);
        assert!(out.handle_moved);
        assert!(!out.changed);
        assert!(!state.touch_active());
        assert_eq!(state.handle_left, 50.0);

        assert_eq!(touch_cancel(&mut state), SliderOutcome::none());
    }

    #[test]
    fn click_with_zero_width_is_ignored() {
        let mut state = state_at(10.0);
        let out = click(&PointerSample::new(5.0, 0.0), &mut state);
        assert!(!out.handled);
        assert_eq!(state.value(), 10.0);
    }

    #[test]
    fn click_sets_value_to_offset_fraction() {
        for (x, w) in [(0.0, 100.0), (37.0, 100.0), (120.0, 300.0), (300.0, 300.0)] {
            let mut state = SliderState::default();
            let out = click(&PointerSample::new(x, w), &mut state);
            assert!(out.changed);
            assert!(approx(state.value(), x / w * 100.0));
            assert!(approx(state.handle_left, state.value()));
        }
    }
}
