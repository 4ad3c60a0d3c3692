//! Volume slider component: filled track, tick marks and drag handle.

use std::rc::Rc;

use dioxus::prelude::*;
use mmp_types::{PointerSample, SliderAction, SliderView, TouchSample, TICKS};

use crate::components::touch::TouchClassifier;
use crate::dispatch::{use_dispatch, DispatchExt};

/// Client-space box of the track element, measured after mount.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct TrackGeometry {
    left: f64,
    width: f64,
}

impl TrackGeometry {
    fn pointer(&self, client_x: f64) -> PointerSample {
        PointerSample::new(client_x - self.left, self.width)
    }

    fn touch(&self, client_x: f64, cancelable: bool) -> TouchSample {
        TouchSample {
            client_x,
            element_left: self.left,
            element_width: self.width,
            cancelable,
        }
    }

    /// Take a new width reported by a resize before the full re-measure lands.
    fn resized(self, width: f64) -> Self {
        Self { width, ..self }
    }
}

async fn measure(track: Rc<MountedData>, mut geometry: Signal<TrackGeometry>) {
    match track.get_client_rect().await {
        Ok(rect) => geometry.set(TrackGeometry {
            left: rect.origin.x,
            width: rect.size.width,
        }),
        Err(e) => log::warn!("could not measure volume track: {:?}", e),
    }
}

fn remeasure(track: Signal<Option<Rc<MountedData>>>, geometry: Signal<TrackGeometry>) {
    let mounted = track.peek().clone();
    if let Some(mounted) = mounted {
        spawn(measure(mounted, geometry));
    }
}

fn changed_touch(evt: &TouchEvent) -> Option<(f64, f64)> {
    evt.data().touches_changed().first().map(|touch| {
        let point = touch.client_coordinates();
        (point.x, point.y)
    })
}

/// Horizontal volume slider driven by clicks and touch drags.
#[component]
pub fn VolumeSlider() -> Element {
    let handle = use_dispatch();
    let view = handle.view();
    let mut track = use_signal(|| None::<Rc<MountedData>>);
    let mut geometry = use_signal(TrackGeometry::default);
    let mut classifier = use_signal(TouchClassifier::default);

    let on_click = {
        let handle = handle.clone();
        move |evt: MouseEvent| {
            let client_x = evt.data().client_coordinates().x;
            let sample = geometry.peek().pointer(client_x);
            let outcome = handle.dispatch_action(SliderAction::Click(sample));
            if outcome.stop_propagation {
                evt.stop_propagation();
            }
            remeasure(track, geometry);
        }
    };

    let on_touch_start = {
        let handle = handle.clone();
        move |evt: TouchEvent| {
            let Some((x, y)) = changed_touch(&evt) else {
                return;
            };
            classifier.write().begin(x, y);
            let sample = geometry.peek().touch(x, true);
            handle.dispatch_action(SliderAction::TouchStart(sample));
        }
    };

    let on_touch_move = {
        let handle = handle.clone();
        move |evt: TouchEvent| {
            let Some((x, y)) = changed_touch(&evt) else {
                return;
            };
            let cancelable = classifier.write().track(x, y);
            let sample = geometry.peek().touch(x, cancelable);
            handle.dispatch_action(SliderAction::TouchMove(sample));
        }
    };

    let on_touch_end = {
        let handle = handle.clone();
        move |evt: TouchEvent| {
            let Some((x, y)) = changed_touch(&evt) else {
                return;
            };
            let cancelable = classifier.write().finish(x, y);
            let outcome = if cancelable {
                let sample = geometry.peek().touch(x, true);
                handle.dispatch_action(SliderAction::TouchEnd(sample))
            } else {
                // The page scrolled instead; drop the gesture
                handle.dispatch_action(SliderAction::TouchCancel)
            };
            if outcome.prevent_default {
                evt.prevent_default();
            }
            remeasure(track, geometry);
        }
    };

    let on_resize = move |evt: ResizeEvent| {
        match evt.data().get_border_box_size() {
            Ok(size) => {
                let resized = geometry.peek().resized(size.width);
                geometry.set(resized);
            }
            Err(e) => log::debug!("volume track resize without size: {:?}", e),
        }
        // Left edge moves too when the card reflows
        remeasure(track, geometry);
    };

    let on_touch_cancel = {
        let handle = handle.clone();
        move |_evt: TouchEvent| {
            classifier.write().reset();
            handle.dispatch_action(SliderAction::TouchCancel);
        }
    };

    let snapshot = *view.read();

    rsx! {
        div { class: "mmp-volume",
            div {
                class: "volume-slider",
                style: "{snapshot.track_style()}",
                onmounted: move |evt: MountedEvent| async move {
                    let mounted = evt.data();
                    track.set(Some(mounted.clone()));
                    measure(mounted, geometry).await;
                },
                onresize: on_resize,
                onclick: on_click,
                ontouchstart: on_touch_start,
                ontouchmove: on_touch_move,
                ontouchend: on_touch_end,
                ontouchcancel: on_touch_cancel,
                div { class: "db center-align", "{snapshot.label()}" }
                for tick in TICKS {
                    div {
                        key: "{tick}",
                        class: "volumetick",
                        style: "{SliderView::tick_style(tick)}",
                    }
                }
                div { class: "volumehandler", style: "{snapshot.handle_style()}" }
            }
        }
    }
}
