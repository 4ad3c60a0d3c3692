//! Theme definitions for the volume slider.
//!
//! The host dashboard owns the real theme through CSS custom properties. The
//! values here are the fallbacks used when the host doesn't define a property,
//! and the colors the terminal frontend draws with.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ThemeColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::new(r, g, b))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

/// Slider theme: border geometry plus accent colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderTheme {
    pub border_radius_px: u16,
    pub border_width_px: u16,
    pub border_color: ThemeColor,
    /// Tick marks
    pub primary: ThemeColor,
    /// Drag handle
    pub dark_primary: ThemeColor,
    /// Track background
    pub background: ThemeColor,
}

impl Default for SliderTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl SliderTheme {
    /// Home-dashboard light defaults
    pub fn light() -> Self {
        Self {
            border_radius_px: 12,
            border_width_px: 1,
            border_color: ThemeColor::new(0xe0, 0xe0, 0xe0),
            primary: ThemeColor::new(0x03, 0xa9, 0xf4),
            dark_primary: ThemeColor::new(0x02, 0x88, 0xd1),
            background: ThemeColor::new(0xfa, 0xfa, 0xfa),
        }
    }

    /// Stylesheet for the slider host, track, ticks and handle.
    ///
    /// Every themable value goes through a custom property so the host can
    /// override it; the theme only supplies the fallback.
    pub fn stylesheet(&self) -> String {
        let radius = format!("var(--ha-card-border-radius, {}px)", self.border_radius_px);
        let width = format!("var(--ha-card-border-width, {}px)", self.border_width_px);
        let border_color = format!(
            "var(--ha-card-border-color, var(--divider-color, {}))",
            self.border_color.to_hex()
        );
        let primary = format!("var(--primary-color, {})", self.primary.to_hex());
        let dark_primary = format!("var(--dark-primary-color, {})", self.dark_primary.to_hex());
        let background = format!(
            "var(--primary-background-color, {})",
            self.background.to_hex()
        );

        let mut css = String::new();
        let _ = write!(
            css,
            ".mmp-volume {{ width: 100%; position: relative; height: 2em; cursor: pointer; \
             border-radius: {radius}; border-width: {width}; border-style: solid; \
             border-color: {border_color}; }}\n"
        );
        let _ = write!(
            css,
            ".volume-slider {{ position: relative; height: 100%; \
             background-color: {background}; background-repeat: repeat-y; \
             background-image: linear-gradient(280deg, rgba(0, 0, 0, 0.3), rgba(0, 0, 0, 0.3)); \
             border-radius: {radius}; border-width: {width}; border-style: solid; \
             border-color: {border_color}; }}\n"
        );
        let _ = write!(
            css,
            ".volumetick {{ width: 0; height: 0; border-style: solid; \
             border-width: 6px 2px 0 2px; \
             border-color: {primary} transparent transparent transparent; \
             top: 0; position: absolute; margin-left: -2px; pointer-events: none; }}\n"
        );
        let _ = write!(
            css,
            ".volumehandler {{ width: 0; height: 0; border-style: solid; \
             border-width: 15px 5px 0 5px; \
             border-color: {dark_primary} transparent transparent transparent; \
             position: absolute; top: 0; margin-left: -5px; pointer-events: none; }}\n"
        );
        css.push_str(".db { text-align: center; margin-top: 4pt; }\n");
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(
            ThemeColor::from_hex("#e0e0e0"),
            Some(ThemeColor::new(224, 224, 224))
        );
        assert_eq!(
            ThemeColor::from_hex("03a9f4"),
            Some(ThemeColor::new(3, 169, 244))
        );
        assert_eq!(ThemeColor::from_hex("#fff"), None);
        assert_eq!(ThemeColor::from_hex("#gg0000"), None);
    }

    #[test]
    fn hex_output_is_lowercase_six_digits() {
        assert_eq!(ThemeColor::new(2, 136, 209).to_hex(), "#0288d1");
    }

    #[test]
    fn stylesheet_exposes_host_custom_properties() {
        let css = SliderTheme::default().stylesheet();
        for prop in [
            "--ha-card-border-radius, 12px",
            "--ha-card-border-width, 1px",
            "--ha-card-border-color",
            "--divider-color, #e0e0e0",
            "--primary-color, #03a9f4",
            "--dark-primary-color, #0288d1",
            "--primary-background-color, #fafafa",
        ] {
            assert!(css.contains(prop), "missing {prop} in\n{css}");
        }
    }

    #[test]
    fn stylesheet_uses_theme_fallbacks() {
        let theme = SliderTheme {
            border_radius_px: 4,
            primary: ThemeColor::new(255, 0, 0),
            ..SliderTheme::default()
        };
        let css = theme.stylesheet();
        assert!(css.contains("--ha-card-border-radius, 4px"));
        assert!(css.contains("--primary-color, #ff0000"));
    }
}
