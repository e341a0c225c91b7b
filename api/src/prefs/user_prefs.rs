use std::str::FromStr;

use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;

use super::theme::Theme;
use crate::slot::KeyValueSlot;

/// Slot key holding the theme name.
pub const THEME_KEY: &str = "theme";

/// Represents all user prefs. Read from the local slot at startup and written
/// back whenever one changes.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    theme: Theme,
}

impl UserPrefs {
    /// Reads prefs from the slot. Unknown or missing values fall back to the
    /// defaults.
    pub fn load(slot: &dyn KeyValueSlot) -> Self {
        let theme = slot
            .get(THEME_KEY)
            .and_then(|name| Theme::from_str(&name).ok())
            .unwrap_or_default();
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Changes the theme and writes it to the slot. A failed write is logged;
    /// the in-memory value still changes.
    pub fn set_theme(&mut self, theme: Theme, slot: &dyn KeyValueSlot) {
        self.theme = theme;
        if let Err(e) = slot.set(THEME_KEY, theme.as_str()) {
            warn!("could not persist theme: {e:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::MemorySlot;

    #[test]
    fn defaults_to_light_when_slot_is_empty_or_garbage() {
        let slot = MemorySlot::new();
        assert_eq!(UserPrefs::load(&slot).theme(), Theme::Light);

        slot.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(UserPrefs::load(&slot).theme(), Theme::Light);
    }

    #[test]
    fn theme_changes_survive_a_reload() {
        let slot = MemorySlot::new();
        let mut prefs = UserPrefs::load(&slot);
        prefs.set_theme(prefs.theme().toggled(), &slot);

        assert_eq!(slot.get(THEME_KEY).as_deref(), Some("dark"));
        assert!(UserPrefs::load(&slot).theme().is_dark());
    }
}
