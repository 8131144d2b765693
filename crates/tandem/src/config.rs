//! Viewer configuration
//!
//! Loaded from `<config_dir>/tandem/config.toml` when present; every
//! field falls back to a default, so a partial file is fine.

use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub view: ViewConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Show the vertical scrollbar
    pub scrollbar: bool,
    /// Spaces substituted for a tab when rendering
    pub tab_width: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scrollbar: true,
            tab_width: 4,
        }
    }
}

/// Theme colors as `#rrggbb` strings, resolved to a [`Palette`] at startup
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub added: String,
    pub removed: String,
    pub context: String,
    pub line_number: String,
    pub header: String,
    pub blank_bg: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            added: "#4caf50".to_string(),
            removed: "#f44336".to_string(),
            context: "#c0c0c0".to_string(),
            line_number: "#606060".to_string(),
            header: "#e0e0e0".to_string(),
            blank_bg: "#2d2d2d".to_string(),
        }
    }
}

/// Resolved theme colors
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub added: Color,
    pub removed: Color,
    pub context: Color,
    pub line_number: Color,
    pub header: Color,
    pub blank_bg: Color,
}

impl Theme {
    pub fn palette(&self) -> Palette {
        let defaults = Theme::default();
        let resolve = |value: &str, fallback: &str| {
            parse_hex_color(value)
                .or_else(|| parse_hex_color(fallback))
                .unwrap_or(Color::Reset)
        };
        Palette {
            added: resolve(&self.added, &defaults.added),
            removed: resolve(&self.removed, &defaults.removed),
            context: resolve(&self.context, &defaults.context),
            line_number: resolve(&self.line_number, &defaults.line_number),
            header: resolve(&self.header, &defaults.header),
            blank_bg: resolve(&self.blank_bg, &defaults.blank_bg),
        }
    }
}

/// Parse a `#rrggbb` color string
fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tandem").join("config.toml"))
}

/// Load the user config, falling back to defaults when the file is absent
pub fn load() -> Result<Config> {
    let Some(path) = config_path() else {
        return Ok(Config::default());
    };
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config at {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#4caf50"), Some(Color::Rgb(0x4c, 0xaf, 0x50)));
        assert_eq!(parse_hex_color("#FFFFFF"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("4caf50"), None);
        assert_eq!(parse_hex_color("#xyzxyz"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        // six bytes but not six ASCII digits
        assert_eq!(parse_hex_color("#\u{1EFF}\u{1EFF}"), None);
    }

    #[test]
    fn test_partial_config_falls_back() {
        let config: Config = toml::from_str(
            r##"
            [theme]
            added = "#00ff00"

            [view]
            scrollbar = false
            "##,
        )
        .unwrap();

        assert_eq!(config.theme.added, "#00ff00");
        assert_eq!(config.theme.removed, Theme::default().removed);
        assert!(!config.view.scrollbar);
        assert_eq!(config.view.tab_width, 4);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.view.scrollbar);
        assert_eq!(config.theme.context, Theme::default().context);
    }

    #[test]
    fn test_bad_color_resolves_to_default() {
        let theme = Theme {
            added: "not-a-color".to_string(),
            ..Theme::default()
        };
        let palette = theme.palette();
        assert_eq!(palette.added, Color::Rgb(0x4c, 0xaf, 0x50));
    }
}
