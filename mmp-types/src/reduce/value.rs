use crate::{quantize_volume, SliderOutcome, SliderState};

/// Commit a percentage: the only path that produces a change notification.
///
/// Negative (and NaN) percentages are dropped without touching state.
pub fn update_value(pct: f64, state: &mut SliderState) -> SliderOutcome {
    if !(pct >= 0.0) {
        return SliderOutcome::none();
    }
    let quantized = quantize_volume(state.bounds.max, pct);
    let mut out = set_value(pct, state);
    out.changed = true;
    out.quantized = Some(quantized);
    out
}

/// Run the value setter without notifying listeners.
///
/// The handle mirror the setter performs rides on the same throttled render
/// as the value, so only `value_set` is reported.
pub fn set_value(v: f64, state: &mut SliderState) -> SliderOutcome {
    state.set_value(v);
    SliderOutcome {
        handled: true,
        value_set: true,
        ..SliderOutcome::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GestureState;

    #[test]
    fn update_value_sets_value_and_reports_change() {
        for pct in [0.0, 0.5, 25.0, 33.3, 50.0, 99.0, 100.0] {
            let mut state = SliderState::default();
            let out = update_value(pct, &mut state);
            assert_eq!(state.value(), pct);
            assert!(out.changed);
            assert!(out.value_set);
        }
    }

    #[test]
    fn update_value_ignores_negative() {
        let mut state = SliderState::default();
        state.set_value(40.0);
        let out = update_value(-0.1, &mut state);
        assert_eq!(state.value(), 40.0);
        assert!(!out.changed);
        assert!(!out.handled);

        let out = update_value(f64::NAN, &mut state);
        assert_eq!(state.value(), 40.0);
        assert!(!out.changed);
    }

    #[test]
    fn update_value_reports_quantized_volume() {
        let mut state = SliderState::default();
        let out = update_value(33.0, &mut state);
        assert_eq!(out.quantized, Some(35));
    }

    #[test]
    fn set_value_never_notifies() {
        let mut state = SliderState::default();
        let out = set_value(10.0, &mut state);
        assert!(!out.handle_moved);
        assert_eq!(state.handle_left, 10.0);

        state.gesture = GestureState::Dragging {
            start_pct: 10.0,
            start_value_pct: 10.0,
        };
        let out = set_value(20.0, &mut state);
        assert!(out.value_set);
        assert!(!out.changed);
        assert_eq!(state.handle_left, 10.0);
    }
}
