use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

pub const DEFAULT_THEME: &str = "default";
pub const HIGH_CONTRAST_THEME: &str = "high-contrast";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub word_available: String,
    pub word_placed: String,
    pub word_focused_fg: String,
    pub word_focused_bg: String,
    pub text_pending: String,
    pub accent: String,
    pub accent_dim: String,
    pub border: String,
    pub border_focused: String,
    pub header_bg: String,
    pub header_fg: String,
    pub bar_filled: String,
    pub bar_empty: String,
    pub error: String,
    pub warning: String,
    pub success: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // User themes dir first
        let user_theme_path = Config::config_dir()
            .join("themes")
            .join(format!("{name}.toml"));
        if let Ok(content) = fs::read_to_string(&user_theme_path) {
            match toml::from_str::<Theme>(&content) {
                Ok(theme) => return Some(theme),
                Err(err) => tracing::warn!(path = %user_theme_path.display(), %err, "bad user theme"),
            }
        }

        let filename = format!("{name}.toml");
        let file = ThemeAssets::get(&filename)?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    /// Theme for the current settings: high contrast wins over the chosen
    /// theme, and a background colour replaces the theme's own.
    pub fn for_config(config: &Config) -> Self {
        let name = if config.high_contrast {
            HIGH_CONTRAST_THEME
        } else {
            config.theme.as_str()
        };
        let mut theme = Self::load(name).unwrap_or_default();
        if let Some(bg) = config.background_color.hex() {
            theme.colors.bg = bg.to_string();
        }
        theme
    }

    /// Bundled theme names plus any `*.toml` in the user themes dir.
    pub fn available_themes() -> Vec<String> {
        let mut names: Vec<String> = ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect();
        if let Ok(entries) = fs::read_dir(Config::config_dir().join("themes")) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml")
                    && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                    && !names.iter().any(|n| n == stem)
                {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        names
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load(DEFAULT_THEME).unwrap_or_else(|| Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#1e1e2e".to_string(),
            fg: "#cdd6f4".to_string(),
            word_available: "#a6e3a1".to_string(),
            word_placed: "#89dceb".to_string(),
            word_focused_fg: "#1e1e2e".to_string(),
            word_focused_bg: "#f9e2af".to_string(),
            text_pending: "#6c7086".to_string(),
            accent: "#cba6f7".to_string(),
            accent_dim: "#45475a".to_string(),
            border: "#45475a".to_string(),
            border_focused: "#f9e2af".to_string(),
            header_bg: "#313244".to_string(),
            header_fg: "#cdd6f4".to_string(),
            bar_filled: "#89b4fa".to_string(),
            bar_empty: "#313244".to_string(),
            error: "#f38ba8".to_string(),
            warning: "#f9e2af".to_string(),
            success: "#a6e3a1".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6
            && let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            )
        {
            return Color::Rgb(r, g, b);
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn word_available(&self) -> Color { Self::parse_color(&self.word_available) }
    pub fn word_placed(&self) -> Color { Self::parse_color(&self.word_placed) }
    pub fn word_focused_fg(&self) -> Color { Self::parse_color(&self.word_focused_fg) }
    pub fn word_focused_bg(&self) -> Color { Self::parse_color(&self.word_focused_bg) }
    pub fn text_pending(&self) -> Color { Self::parse_color(&self.text_pending) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn accent_dim(&self) -> Color { Self::parse_color(&self.accent_dim) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn bar_filled(&self) -> Color { Self::parse_color(&self.bar_filled) }
    pub fn bar_empty(&self) -> Color { Self::parse_color(&self.bar_empty) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn warning(&self) -> Color { Self::parse_color(&self.warning) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackgroundColor;

    #[test]
    fn bundled_themes_parse() {
        let names = Theme::available_themes();
        for name in [DEFAULT_THEME, HIGH_CONTRAST_THEME, "pastel"] {
            assert!(names.iter().any(|n| n == name), "{name} missing");
            assert!(Theme::load(name).is_some(), "{name} does not parse");
        }
    }

    #[test]
    fn parse_color_handles_bad_input() {
        assert_eq!(ThemeColors::parse_color("#ff0080"), Color::Rgb(255, 0, 128));
        assert_eq!(ThemeColors::parse_color("nope"), Color::White);
    }

    #[test]
    fn high_contrast_and_background_override() {
        let config = Config {
            high_contrast: true,
            background_color: BackgroundColor::Blue,
            ..Config::default()
        };
        let theme = Theme::for_config(&config);
        assert_eq!(theme.name, HIGH_CONTRAST_THEME);
        assert_eq!(theme.colors.bg, "#1a2a3a");
    }
}
