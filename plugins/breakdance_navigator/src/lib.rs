//! Breakdance Navigator.
//!
//! Adds a quick-access menu to the admin toolbar listing recently edited
//! builder pages, templates, headers, footers, global blocks and popups,
//! alongside shortcuts to the builder's settings and a few external links.
//!
//! The host calls two callbacks: [`Navigator::admin_bar_menu`] while the
//! toolbar is being built and [`Navigator::enqueue_admin_bar_styles`] while
//! stylesheets are collected. [`Navigator::hooks`] says where to attach them.

pub mod assembler;
pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod lister;
pub mod style;

use navigator_sdk::prelude::*;
use tracing::debug;

pub use assembler::{MenuAssembler, ROOT_ID, Visibility};
pub use category::Category;
pub use config::NavigatorConfig;
pub use error::{NavigatorError, NavigatorResult};
pub use lister::ContentLister;

/// Callback name for toolbar construction.
pub const ADMIN_BAR_CALLBACK: &str = "add_admin_bar_menu";

/// Callback name for stylesheet collection.
pub const STYLES_CALLBACK: &str = "enqueue_admin_bar_styles";

/// The plugin instance registered with the host.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    config: NavigatorConfig,
}

impl Navigator {
    pub fn new(config: NavigatorConfig) -> Self {
        Self { config }
    }

    /// Create a navigator configured from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(NavigatorConfig::from_env()?))
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Host hooks this plugin attaches to.
    ///
    /// Styles attach on both admin and front-end requests.
    pub fn hooks(&self) -> Vec<HookRegistration> {
        vec![
            HookRegistration::new("admin_bar_menu", ADMIN_BAR_CALLBACK)
                .priority(self.config.menu_priority),
            HookRegistration::new("admin_enqueue_scripts", STYLES_CALLBACK),
            HookRegistration::new("wp_enqueue_scripts", STYLES_CALLBACK),
        ]
    }

    /// Nodes for the current request, parents first.
    pub fn menu_nodes<S: Site + ?Sized>(&self, site: &S) -> Vec<NavigationNode> {
        let visibility = Visibility::resolve(site, &self.config);
        MenuAssembler::new(&self.config).assemble(site, visibility)
    }

    /// Toolbar hook: add the navigator's nodes to `bar`.
    pub fn admin_bar_menu<S, B>(&self, site: &S, bar: &mut B) -> NavigatorResult<()>
    where
        S: Site + ?Sized,
        B: AdminBar + ?Sized,
    {
        for node in self.menu_nodes(site) {
            bar.add_node(node)?;
        }
        Ok(())
    }

    /// Style hook: attach the separator rule when the toolbar is showing.
    pub fn enqueue_admin_bar_styles<S, R>(&self, site: &S, styles: &mut R) -> NavigatorResult<()>
    where
        S: Site + ?Sized,
        R: StyleRegistry + ?Sized,
    {
        if !site.is_admin_bar_showing() {
            debug!("admin bar hidden, skipping navigator styles");
            return Ok(());
        }
        styles.add_inline_style(style::ADMIN_BAR_HANDLE, &style::separator_css())?;
        Ok(())
    }
}
