//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result};

/// Navigator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// Priority of the toolbar hook (default: 999, after core entries).
    pub menu_priority: i32,

    /// Slug of the companion plugin that adds its own entry when active.
    pub companion_plugin: String,

    /// Asset path of the icon shown on the top-level entry.
    pub brand_icon: String,

    /// Asset path of the companion entry's icon.
    pub companion_icon: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            menu_priority: 999,
            companion_plugin: "headspinui/headspinui.php".to_string(),
            brand_icon: "images/breakdance-icon.png".to_string(),
            companion_icon: "images/headspin-icon.png".to_string(),
        }
    }
}

impl NavigatorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let menu_priority = non_empty("NAVIGATOR_MENU_PRIORITY")
            .unwrap_or_else(|| defaults.menu_priority.to_string())
            .trim()
            .parse()
            .context("NAVIGATOR_MENU_PRIORITY must be a valid i32")?;

        let companion_plugin =
            non_empty("NAVIGATOR_COMPANION_PLUGIN").unwrap_or(defaults.companion_plugin);

        let brand_icon = non_empty("NAVIGATOR_BRAND_ICON").unwrap_or(defaults.brand_icon);

        let companion_icon =
            non_empty("NAVIGATOR_COMPANION_ICON").unwrap_or(defaults.companion_icon);

        Ok(Self {
            menu_priority,
            companion_plugin,
            brand_icon,
            companion_icon,
        })
    }
}
