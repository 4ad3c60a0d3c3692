//! UI components for the mmp GUI.

mod media_card;
mod touch;
mod volume_slider;

pub use media_card::MediaCard;
pub use volume_slider::VolumeSlider;
