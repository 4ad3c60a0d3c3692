//! Root application component and state initialization.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use crate::components::MediaCard;
use crate::dispatch::SliderHandle;
use crate::state::SharedState;

const CARD_CSS: &str = include_str!("styles/card.css");

/// Poll period for throttled renders, ~30fps.
const POLL_INTERVAL: Duration = Duration::from_millis(33);

/// Root application component.
#[component]
pub fn App() -> Element {
    let shared = use_hook(|| Rc::new(RefCell::new(SharedState::new())));
    let view = use_signal(|| shared.borrow().slider.view());
    let handle = use_context_provider(|| SliderHandle::new(shared.clone(), view));

    // Release throttled renders as their windows elapse
    let poll_handle = handle.clone();
    use_future(move || {
        let handle = poll_handle.clone();
        async move {
            loop {
                handle.tick();
                async_std::task::sleep(POLL_INTERVAL).await;
            }
        }
    });

    let slider_css = handle.stylesheet();

    rsx! {
        style { {CARD_CSS} }
        style { {slider_css} }
        div { class: "app",
            MediaCard {}
        }
    }
}
