//! Media player card hosting the volume slider.

use dioxus::prelude::*;

use crate::components::VolumeSlider;
use crate::dispatch::use_dispatch;

/// Card with the player name, current volume and the slider.
#[component]
pub fn MediaCard() -> Element {
    let handle = use_dispatch();
    let view = handle.view();
    let name = handle.player_name();
    let volume = view.read().value.round();

    rsx! {
        div { class: "media-card",
            div { class: "player-name", "{name}" }
            div { class: "player-volume", "Volume {volume}%" }
            VolumeSlider {}
        }
    }
}
