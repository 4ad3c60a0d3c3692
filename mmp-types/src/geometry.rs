//! Pointer and touch geometry: converting element coordinates to percentages.

/// Divisor applied to finger displacement while dragging.
pub const DAMPING_FACTOR: f64 = 3.0;

/// Releases closer than this (in percentage points) to the touch start are taps.
pub const TAP_THRESHOLD_PCT: f64 = 5.0;

/// Raw device volume granularity.
pub const VOLUME_STEP: u32 = 5;

/// Clamp a percentage into [0, 100].
pub fn clamp_pct(pct: f64) -> f64 {
    pct.clamp(0.0, 100.0)
}

/// Percentage of a click at `offset_x` inside an element `width` wide.
///
/// Returns `None` when the geometry can't produce a percentage (zero or
/// negative width, non-finite inputs).
pub fn pointer_pct(offset_x: f64, width: f64) -> Option<f64> {
    if !(width > 0.0) || !offset_x.is_finite() || !width.is_finite() {
        return None;
    }
    Some(clamp_pct(offset_x / width * 100.0))
}

/// Percentage of a touch at `client_x` over an element starting at `element_left`.
pub fn touch_pct(client_x: f64, element_left: f64, element_width: f64) -> Option<f64> {
    pointer_pct(client_x - element_left, element_width)
}

/// Raw device volume for `pct` of `max`, rounded to the nearest [`VOLUME_STEP`].
pub fn quantize_volume(max: f64, pct: f64) -> u32 {
    let step = VOLUME_STEP as f64;
    let raw = ((max * pct / 100.0) / step).round() * step;
    raw.max(0.0) as u32
}
