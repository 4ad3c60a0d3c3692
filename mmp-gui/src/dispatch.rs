//! Dispatch helpers for components.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use dioxus::prelude::*;
use mmp_types::{SliderAction, SliderOutcome, SliderView};

use crate::state::SharedState;

/// Handle to the slider state plus the reactive view it renders into.
#[derive(Clone)]
pub struct SliderHandle {
    state: Rc<RefCell<SharedState>>,
    view: Signal<SliderView>,
}

impl SliderHandle {
    pub fn new(state: Rc<RefCell<SharedState>>, view: Signal<SliderView>) -> Self {
        Self { state, view }
    }

    pub fn view(&self) -> Signal<SliderView> {
        self.view
    }

    pub fn player_name(&self) -> String {
        self.state.borrow().player_name().to_string()
    }

    pub fn stylesheet(&self) -> String {
        self.state.borrow().theme.stylesheet()
    }

    /// Publish a render if the slider has one due.
    pub fn tick(&self) {
        let due = self.state.borrow_mut().poll(Instant::now());
        if let Some(next) = due {
            let mut view = self.view;
            view.set(next);
        }
    }
}

/// Hook to get the slider handle for dispatching actions.
pub fn use_dispatch() -> SliderHandle {
    use_context::<SliderHandle>()
}

/// Extension trait for dispatching actions on the slider handle.
pub trait DispatchExt {
    fn dispatch_action(&self, action: SliderAction) -> SliderOutcome;
}

impl DispatchExt for SliderHandle {
    fn dispatch_action(&self, action: SliderAction) -> SliderOutcome {
        let outcome = self.state.borrow_mut().dispatch(&action);
        // Handle movement renders now; value-only changes wait for the throttle
        self.tick();
        outcome
    }
}
