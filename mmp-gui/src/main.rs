//! mmp GUI - desktop media card with the volume slider
//!
//! A Dioxus-based alternative to the terminal card (mmp-ui).

mod app;
mod components;
mod dispatch;
mod state;

fn main() {
    env_logger::init();
    log::info!("Starting mmp GUI");
    dioxus::launch(app::App);
}
