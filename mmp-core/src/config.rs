use std::path::{Path, PathBuf};

use serde::Deserialize;

use mmp_types::{SliderSettings, SliderTheme, ThemeColor, VolumeBounds};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

/// Bounds for `slider.throttle_ms`: one 60fps frame up to five seconds.
const THROTTLE_MS_RANGE: (u64, u64) = (16, 5_000);

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    slider: SliderConfig,
    #[serde(default)]
    theme: ThemeConfig,
}

#[derive(Deserialize, Default)]
struct SliderConfig {
    min: Option<f64>,
    max: Option<f64>,
    throttle_ms: Option<u64>,
    display_db: Option<f64>,
    initial_value: Option<f64>,
}

#[derive(Deserialize, Default)]
struct ThemeConfig {
    border_radius: Option<u16>,
    border_width: Option<u16>,
    border_color: Option<String>,
    primary_color: Option<String>,
    dark_primary_color: Option<String>,
    primary_background_color: Option<String>,
}

pub struct Config {
    slider: SliderConfig,
    theme: ThemeConfig,
}

impl Config {
    /// Embedded defaults, overridden field by field by the user config file.
    pub fn load() -> Self {
        match user_config_path() {
            Some(path) => Self::load_with_override(&path),
            None => Self::embedded(),
        }
    }

    /// Embedded defaults overridden by `path`, if it exists and parses.
    pub fn load_with_override(path: &Path) -> Self {
        let mut config = Self::embedded();
        if !path.exists() {
            return config;
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                Ok(user) => {
                    merge_slider(&mut config.slider, user.slider);
                    merge_theme(&mut config.theme, user.theme);
                }
                Err(e) => {
                    log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                }
            },
            Err(e) => {
                log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
            }
        }
        config
    }

    /// Parse a complete config document, without the embedded defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| e.to_string())?;
        Ok(Config {
            slider: file.slider,
            theme: file.theme,
        })
    }

    fn embedded() -> Self {
        // Embedded at compile time; always parses
        let base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");
        Config {
            slider: base.slider,
            theme: base.theme,
        }
    }

    /// Slider construction settings, with out-of-range values clamped.
    pub fn slider_settings(&self) -> SliderSettings {
        let fallback = SliderSettings::default();
        let max = self.slider.max.unwrap_or(fallback.bounds.max).max(1.0);
        let min = self.slider.min.unwrap_or(fallback.bounds.min).clamp(0.0, max);
        SliderSettings {
            bounds: VolumeBounds::new(min, max),
            initial_value: self
                .slider
                .initial_value
                .unwrap_or(fallback.initial_value)
                .clamp(0.0, 100.0),
            display_db: self.slider.display_db.unwrap_or(fallback.display_db),
            throttle_ms: self
                .slider
                .throttle_ms
                .unwrap_or(fallback.throttle_ms)
                .clamp(THROTTLE_MS_RANGE.0, THROTTLE_MS_RANGE.1),
        }
    }

    pub fn theme(&self) -> SliderTheme {
        let fallback = SliderTheme::default();
        SliderTheme {
            border_radius_px: self.theme.border_radius.unwrap_or(fallback.border_radius_px),
            border_width_px: self.theme.border_width.unwrap_or(fallback.border_width_px),
            border_color: color_or(&self.theme.border_color, fallback.border_color),
            primary: color_or(&self.theme.primary_color, fallback.primary),
            dark_primary: color_or(&self.theme.dark_primary_color, fallback.dark_primary),
            background: color_or(&self.theme.primary_background_color, fallback.background),
        }
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mmp").join("config.toml"))
}

fn color_or(value: &Option<String>, fallback: ThemeColor) -> ThemeColor {
    match value.as_deref() {
        Some(s) => ThemeColor::from_hex(s).unwrap_or_else(|| {
            log::warn!(target: "config", "ignoring invalid color {:?}", s);
            fallback
        }),
        None => fallback,
    }
}

fn merge_slider(base: &mut SliderConfig, user: SliderConfig) {
    if user.min.is_some() {
        base.min = user.min;
    }
    if user.max.is_some() {
        base.max = user.max;
    }
    if user.throttle_ms.is_some() {
        base.throttle_ms = user.throttle_ms;
    }
    if user.display_db.is_some() {
        base.display_db = user.display_db;
    }
    if user.initial_value.is_some() {
        base.initial_value = user.initial_value;
    }
}

fn merge_theme(base: &mut ThemeConfig, user: ThemeConfig) {
    if user.border_radius.is_some() {
        base.border_radius = user.border_radius;
    }
    if user.border_width.is_some() {
        base.border_width = user.border_width;
    }
    if user.border_color.is_some() {
        base.border_color = user.border_color;
    }
    if user.primary_color.is_some() {
        base.primary_color = user.primary_color;
    }
    if user.dark_primary_color.is_some() {
        base.dark_primary_color = user.dark_primary_color;
    }
    if user.primary_background_color.is_some() {
        base.primary_background_color = user.primary_background_color;
    }
}
