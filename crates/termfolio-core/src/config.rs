//! Widget configuration.
//!
//! A small TOML file controls the display strings, the palette name, and
//! the window geometry presets. Every field has a default so a missing
//! file renders a usable widget.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Smallest window the chrome can render into.
pub const MIN_WINDOW_WIDTH: usize = 24;
pub const MIN_WINDOW_HEIGHT: usize = 6;

/// Window geometry presets in terminal cells.
///
/// The maximize toggle switches between the `small` and `large` presets;
/// `origin` is the initial top-left position inside the host frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowGeometry {
    pub small: (usize, usize),
    pub large: (usize, usize),
    pub origin: (usize, usize),
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            small: (64, 16),
            large: (96, 28),
            origin: (4, 2),
        }
    }
}

impl WindowGeometry {
    /// Clamp presets to the chrome minimums and keep `large` >= `small`.
    #[must_use]
    pub fn normalized(self) -> Self {
        let small = (
            self.small.0.max(MIN_WINDOW_WIDTH),
            self.small.1.max(MIN_WINDOW_HEIGHT),
        );
        let large = (self.large.0.max(small.0), self.large.1.max(small.1));
        Self {
            small,
            large,
            origin: self.origin,
        }
    }
}

/// Display strings and presentation knobs for one widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Window title shown in the chrome row.
    pub title: String,
    /// Working-directory string for the prompt row.
    pub path_line: String,
    /// Branch label for the prompt row.
    pub branch: String,
    /// Info string echoed on the second header row.
    pub info_text: String,
    /// Palette name resolved by the TUI theme table.
    pub palette: String,
    pub window: WindowGeometry,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "guest@termfolio".to_owned(),
            path_line: "~/portfolio".to_owned(),
            branch: "main".to_owned(),
            info_text: "use h/j/k/l or arrows, yy to mark a line".to_owned(),
            palette: "default".to_owned(),
            window: WindowGeometry::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        Ok(config.normalized())
    }

    /// Load a config file, failing on unreadable or malformed input.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| ConfigError::Io(format!("{}: {err}", path.display())))?;
        Self::from_toml(&raw)
    }

    /// Load a config file, falling back to defaults when it is absent.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    #[must_use]
    fn normalized(mut self) -> Self {
        self.window = self.window.normalized();
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read config file: {0}")]
    Io(String),
    #[error("parse config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn default_config_is_normalized() {
        let config = WidgetConfig::default();
        assert_eq!(config.window, config.window.normalized());
        assert_eq!(config.palette, "default");
    }

    #[test]
    fn from_toml_accepts_partial_documents() {
        let config = WidgetConfig::from_toml("title = \"demo\"").expect("parse partial config");
        assert_eq!(config.title, "demo");
        assert_eq!(config.branch, "main");
    }

    #[test]
    fn from_toml_reads_window_geometry() {
        let raw = r#"
            [window]
            small = [40, 12]
            large = [120, 32]
            origin = [10, 3]
        "#;
        let config = WidgetConfig::from_toml(raw).expect("parse geometry");
        assert_eq!(config.window.small, (40, 12));
        assert_eq!(config.window.large, (120, 32));
        assert_eq!(config.window.origin, (10, 3));
    }

    #[test]
    fn normalization_enforces_chrome_minimums() {
        let raw = r#"
            [window]
            small = [4, 2]
            large = [8, 3]
        "#;
        let config = WidgetConfig::from_toml(raw).expect("parse tiny geometry");
        assert_eq!(config.window.small, (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
        assert!(config.window.large.0 >= config.window.small.0);
        assert!(config.window.large.1 >= config.window.small.1);
    }

    #[test]
    fn from_toml_rejects_malformed_documents() {
        let err = WidgetConfig::from_toml("title = ").expect_err("expected parse failure");
        assert!(err.to_string().starts_with("parse config:"));
    }

    #[test]
    fn load_or_default_handles_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.toml");
        let config = WidgetConfig::load_or_default(&path).expect("default config");
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn load_reads_a_real_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("termfolio.toml");
        std::fs::write(&path, "info_text = \"hello\"").expect("write config");
        let config = WidgetConfig::load(&path).expect("load config");
        assert_eq!(config.info_text, "hello");
    }
}
