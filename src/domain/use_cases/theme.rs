use crate::entities::theme::{Theme, ThemeResolution, ThemeSource};

/// Resolves the visitor's colour theme.
///
/// Constructed once from configuration and handed to handlers through
/// `AppState`; it holds no per-visitor state.
#[derive(Debug, Clone, Copy)]
pub struct ThemeStore {
    default_theme: Theme,
}

impl ThemeStore {
    pub fn new(default_theme: Theme) -> Self {
        ThemeStore { default_theme }
    }

    /// Stored preference first, then the OS hint, then the configured default.
    /// Unrecognised values are skipped.
    pub fn resolve(&self, stored: Option<&str>, system_hint: Option<&str>) -> ThemeResolution {
        if let Some(theme) = stored.and_then(|s| s.parse::<Theme>().ok()) {
            return ThemeResolution { theme, source: ThemeSource::Stored };
        }

        if let Some(theme) = system_hint.and_then(parse_system_hint) {
            return ThemeResolution { theme, source: ThemeSource::System };
        }

        ThemeResolution {
            theme: self.default_theme,
            source: ThemeSource::Default,
        }
    }

    pub fn toggle(&self, current: Theme) -> Theme {
        current.toggled()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        ThemeStore::new(Theme::default())
    }
}

// Client hints may arrive quoted, e.g. `"dark"`.
fn parse_system_hint(hint: &str) -> Option<Theme> {
    hint.trim().trim_matches('"').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preference_wins() {
        let store = ThemeStore::default();
        let resolved = store.resolve(Some("dark"), Some("light"));
        assert_eq!(resolved, ThemeResolution { theme: Theme::Dark, source: ThemeSource::Stored });
    }

    #[test]
    fn falls_back_to_system_hint() {
        let store = ThemeStore::default();
        let resolved = store.resolve(None, Some("\"dark\""));
        assert_eq!(resolved, ThemeResolution { theme: Theme::Dark, source: ThemeSource::System });
    }

    #[test]
    fn invalid_values_fall_through_to_default() {
        let store = ThemeStore::new(Theme::Dark);
        let resolved = store.resolve(Some("purple"), Some("sepia"));
        assert_eq!(resolved, ThemeResolution { theme: Theme::Dark, source: ThemeSource::Default });
    }

    #[test]
    fn toggle_flips() {
        let store = ThemeStore::default();
        assert_eq!(store.toggle(Theme::Light), Theme::Dark);
        assert_eq!(store.toggle(Theme::Dark), Theme::Light);
    }
}
