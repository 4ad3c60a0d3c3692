//! Drag-vs-scroll classification for touch gestures.
//!
//! The webview doesn't tell us whether a touch event is cancelable, so the
//! first decisive movement of each gesture decides it: mostly horizontal is a
//! drag on the slider, mostly vertical is a page scroll that must pass through.

/// Movement (px) below which a gesture stays undecided.
const SLOP_PX: f64 = 6.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum TouchMode {
    #[default]
    Idle,
    Undecided,
    Drag,
    Scroll,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TouchClassifier {
    origin: (f64, f64),
    mode: TouchMode,
}

impl TouchClassifier {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.origin = (x, y);
        self.mode = TouchMode::Undecided;
    }

    /// Classify a move; returns whether it is cancelable (a slider drag).
    pub fn track(&mut self, x: f64, y: f64) -> bool {
        if self.mode == TouchMode::Undecided {
            let dx = (x - self.origin.0).abs();
            let dy = (y - self.origin.1).abs();
            if dx.max(dy) >= SLOP_PX {
                self.mode = if dy > dx {
                    TouchMode::Scroll
                } else {
                    TouchMode::Drag
                };
                log::trace!("touch classified as {:?}", self.mode);
            }
        }
        self.mode != TouchMode::Scroll
    }

    /// Finish the gesture; returns whether the release is cancelable.
    pub fn finish(&mut self, x: f64, y: f64) -> bool {
        let cancelable = self.track(x, y);
        self.mode = TouchMode::Idle;
        cancelable
    }

    pub fn reset(&mut self) {
        self.mode = TouchMode::Idle;
    }
}
