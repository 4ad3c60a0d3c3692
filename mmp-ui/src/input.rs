//! Terminal input events and their mapping onto slider actions.
//!
//! A terminal has no touch input, so the mouse stands in for a finger:
//! press, drag and release drive the same gesture machine as touch start,
//! move and end. A press and release in place is therefore a tap.

use mmp_types::{SliderAction, TouchSample};
use ratatui::layout::Rect;

/// Mouse button identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Types of mouse events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    Drag(MouseButton),
    ScrollUp,
    ScrollDown,
}

/// Mouse event with position and type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub column: u16,
    pub row: u16,
}

/// Key codes the card reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Escape,
    Left,
    Right,
    Home,
    End,
    Other,
}

/// Top-level input event: keyboard, mouse, or resize
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    Key(KeyCode),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Map a mouse event to a slider action, given the track's screen area.
///
/// Presses only start a gesture on the track itself; drags and releases are
/// forwarded wherever they happen so a drag can leave the track.
pub fn mouse_action(event: &MouseEvent, track: Rect) -> Option<SliderAction> {
    let on_track = event.column >= track.x
        && event.column < track.x.saturating_add(track.width)
        && event.row >= track.y
        && event.row < track.y.saturating_add(track.height);

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) if on_track => {
            Some(SliderAction::TouchStart(track_sample(event.column, track)))
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            Some(SliderAction::TouchMove(track_sample(event.column, track)))
        }
        MouseEventKind::Up(MouseButton::Left) => {
            Some(SliderAction::TouchEnd(track_sample(event.column, track)))
        }
        MouseEventKind::ScrollUp if on_track => Some(SliderAction::Nudge(1)),
        MouseEventKind::ScrollDown if on_track => Some(SliderAction::Nudge(-1)),
        _ => None,
    }
}

/// Map a key to a slider action.
pub fn key_action(key: KeyCode) -> Option<SliderAction> {
    match key {
        KeyCode::Left => Some(SliderAction::Nudge(-1)),
        KeyCode::Right => Some(SliderAction::Nudge(1)),
        KeyCode::Home => Some(SliderAction::UpdateValue(0.0)),
        KeyCode::End => Some(SliderAction::UpdateValue(100.0)),
        _ => None,
    }
}

/// First column is 0%, last column is 100%.
fn track_sample(column: u16, track: Rect) -> TouchSample {
    TouchSample::new(
        column as f64,
        track.x as f64,
        track.width.saturating_sub(1) as f64,
    )
}
