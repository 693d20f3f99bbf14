use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    #[default]
    Normal,
    Large,
    #[serde(alias = "x-large")]
    XLarge,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Normal, FontSize::Large, FontSize::XLarge];

    pub fn label(self) -> &'static str {
        match self {
            FontSize::Normal => "Normal",
            FontSize::Large => "Grande",
            FontSize::XLarge => "Muy Grande",
        }
    }

    /// Horizontal padding inside a word chip, in cells.
    pub fn chip_padding(self) -> usize {
        match self {
            FontSize::Normal => 1,
            FontSize::Large => 2,
            FontSize::XLarge => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundColor {
    #[default]
    Default,
    Blue,
    Yellow,
    Pink,
}

impl BackgroundColor {
    pub const ALL: [BackgroundColor; 4] = [
        BackgroundColor::Default,
        BackgroundColor::Blue,
        BackgroundColor::Yellow,
        BackgroundColor::Pink,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BackgroundColor::Default => "Predeterminado",
            BackgroundColor::Blue => "Azul Claro",
            BackgroundColor::Yellow => "Amarillo Suave",
            BackgroundColor::Pink => "Rosa Suave",
        }
    }

    /// Hex override for the theme background, `None` keeps the theme's own.
    pub fn hex(self) -> Option<&'static str> {
        match self {
            BackgroundColor::Default => None,
            BackgroundColor::Blue => Some("#1a2a3a"),
            BackgroundColor::Yellow => Some("#3a3520"),
            BackgroundColor::Pink => Some("#3a2230"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Normal => "Normal",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Easy,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub font_size: FontSize,
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default)]
    pub background_color: BackgroundColor,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_speech_enabled")]
    pub speech_enabled: bool,
    #[serde(default = "default_speech_command")]
    pub speech_command: String,
    #[serde(default = "default_speech_args")]
    pub speech_args: Vec<String>,
}

fn default_theme() -> String {
    "default".to_string()
}
fn default_speech_enabled() -> bool {
    true
}
fn default_speech_command() -> String {
    "espeak-ng".to_string()
}
// Spanish voice, a little slower and higher than the engine defaults.
fn default_speech_args() -> Vec<String> {
    ["-v", "es", "-s", "155", "-p", "55"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_size: FontSize::default(),
            high_contrast: false,
            background_color: BackgroundColor::default(),
            difficulty: Difficulty::default(),
            theme: default_theme(),
            speech_enabled: default_speech_enabled(),
            speech_command: default_speech_command(),
            speech_args: default_speech_args(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ordena")
    }

    fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Reset `theme` to the default when it names no known theme.
    pub fn validate(&mut self, valid_themes: &[String]) {
        if !valid_themes.iter().any(|t| *t == self.theme) {
            self.theme = default_theme();
        }
    }

    pub fn cycle_font_size(&mut self, forward: bool) {
        self.font_size = cycle(&FontSize::ALL, self.font_size, forward);
    }

    pub fn cycle_background(&mut self, forward: bool) {
        self.background_color = cycle(&BackgroundColor::ALL, self.background_color, forward);
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let len = options.len();
    let idx = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    options[next]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.font_size, FontSize::Normal);
        assert!(!config.high_contrast);
        assert_eq!(config.background_color, BackgroundColor::Default);
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert!(config.speech_enabled);
        assert_eq!(config.speech_command, "espeak-ng");
    }

    #[test]
    fn test_config_reads_settings_values() {
        let toml_str = r#"
font_size = "xlarge"
high_contrast = true
background_color = "pink"
difficulty = "easy"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.font_size, FontSize::XLarge);
        assert!(config.high_contrast);
        assert_eq!(config.background_color, BackgroundColor::Pink);
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.theme, "default");
    }

    #[test]
    fn test_config_rejects_unknown_font_size() {
        let result: Result<Config, _> = toml::from_str(r#"font_size = "huge""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.difficulty = Difficulty::Easy;
        config.background_color = BackgroundColor::Blue;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.difficulty, Difficulty::Easy);
        assert_eq!(loaded.background_color, BackgroundColor::Blue);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.theme, "default");
    }

    #[test]
    fn test_validate_resets_unknown_theme() {
        let mut config = Config::default();
        config.theme = "neon".to_string();
        config.validate(&["default".to_string(), "pastel".to_string()]);
        assert_eq!(config.theme, "default");

        config.theme = "pastel".to_string();
        config.validate(&["default".to_string(), "pastel".to_string()]);
        assert_eq!(config.theme, "pastel");
    }

    #[test]
    fn test_cycle_wraps_both_directions() {
        let mut config = Config::default();
        config.cycle_font_size(false);
        assert_eq!(config.font_size, FontSize::XLarge);
        config.cycle_font_size(true);
        assert_eq!(config.font_size, FontSize::Normal);

        config.background_color = BackgroundColor::Pink;
        config.cycle_background(true);
        assert_eq!(config.background_color, BackgroundColor::Default);
    }
}
