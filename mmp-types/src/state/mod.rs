pub mod slider;
pub mod theme;

pub use slider::{GestureState, SliderSettings, SliderState, VolumeBounds};
pub use theme::{SliderTheme, ThemeColor};
