//! Palette name resolution for the widget.

use termfolio_surface::style::{ThemeKind, ThemeSpec};

pub const PALETTE_ORDER: [&str; 3] = ["default", "light", "high-contrast"];

/// Resolve a palette name to a theme, defaulting on unknown names.
#[must_use]
pub fn resolve_theme(name: &str) -> ThemeSpec {
    let trimmed = name.trim().to_ascii_lowercase();
    match trimmed.as_str() {
        "light" => ThemeSpec::for_kind(ThemeKind::Light),
        "high-contrast" => ThemeSpec::for_kind(ThemeKind::HighContrast),
        _ => ThemeSpec::for_kind(ThemeKind::Dark),
    }
}

/// Next palette name in cycle order.
#[must_use]
pub fn cycle_theme(current: &str) -> &'static str {
    let current = current.trim().to_ascii_lowercase();
    let index = PALETTE_ORDER
        .iter()
        .position(|name| *name == current)
        .unwrap_or(0);
    PALETTE_ORDER[(index + 1) % PALETTE_ORDER.len()]
}

/// Palette override from the environment, if set and non-empty.
#[must_use]
pub fn env_palette_override() -> Option<String> {
    std::env::var("TERMFOLIO_PALETTE")
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_theme_defaults_to_dark() {
        assert_eq!(resolve_theme("unknown").kind, ThemeKind::Dark);
        assert_eq!(resolve_theme("  DEFAULT ").kind, ThemeKind::Dark);
    }

    #[test]
    fn resolve_theme_matches_named_palettes() {
        assert_eq!(resolve_theme("light").kind, ThemeKind::Light);
        assert_eq!(resolve_theme("high-contrast").kind, ThemeKind::HighContrast);
    }

    #[test]
    fn cycle_theme_wraps_and_normalizes() {
        assert_eq!(cycle_theme("default"), "light");
        assert_eq!(cycle_theme("light"), "high-contrast");
        assert_eq!(cycle_theme("high-contrast"), "default");
        assert_eq!(cycle_theme("  UNKNOWN "), "light");
    }
}
