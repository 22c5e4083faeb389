//! Host services the navigator consumes and the toolbar contract it feeds.
//!
//! A host adapter implements these traits over the real application; tests
//! implement them in memory.

use crate::error::HostResult;
use crate::types::{ContentQuery, ContentRecord, NavigationNode};

/// Read access to the host's content store.
pub trait ContentStore {
    /// Run a bounded, ordered, filtered query.
    ///
    /// Implementations must honour `query.limit` and return records in the
    /// requested order. Ties in the sort key are left to the store.
    fn query_records(&self, query: &ContentQuery) -> HostResult<Vec<ContentRecord>>;
}

/// The request-scoped view of the host application.
pub trait Site: ContentStore {
    /// Whether the current user holds a capability (e.g., "edit_posts").
    fn current_user_can(&self, capability: &str) -> bool;

    /// Whether another plugin, identified by its slug, is active.
    fn is_plugin_active(&self, plugin: &str) -> bool;

    /// Whether the admin toolbar will be rendered on this request.
    fn is_admin_bar_showing(&self) -> bool;

    /// Absolute URL for a path on the public site.
    fn site_url(&self, path: &str) -> String;

    /// Absolute URL for a path in the admin area.
    fn admin_url(&self, path: &str) -> String;

    /// Absolute URL for a file shipped with this plugin.
    fn plugin_asset_url(&self, file: &str) -> String;
}

/// The admin toolbar being built for the current request.
pub trait AdminBar {
    /// Add a node. Parents must be added before their children.
    fn add_node(&mut self, node: NavigationNode) -> HostResult<()>;
}

/// The stylesheet queue being collected for the current request.
pub trait StyleRegistry {
    /// Attach inline CSS to an already registered stylesheet handle.
    fn add_inline_style(&mut self, handle: &str, css: &str) -> HostResult<()>;
}

/// Base URLs of a site, joined with relative paths the way the host does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrls {
    site: String,
    admin: String,
    assets: String,
}

impl SiteUrls {
    /// Site base plus the base URL of the calling plugin's assets.
    ///
    /// The admin base is derived from the site URL.
    pub fn new(site: &str, assets: &str) -> Self {
        let site = site.trim_end_matches('/').to_string();
        Self {
            admin: format!("{site}/wp-admin/"),
            assets: ensure_trailing_slash(assets),
            site,
        }
    }

    pub fn site_url(&self, path: &str) -> String {
        format!("{}/{}", self.site, path.trim_start_matches('/'))
    }

    pub fn admin_url(&self, path: &str) -> String {
        format!("{}{}", self.admin, path.trim_start_matches('/'))
    }

    pub fn asset_url(&self, file: &str) -> String {
        format!("{}{}", self.assets, file.trim_start_matches('/'))
    }
}

fn ensure_trailing_slash(base: &str) -> String {
    format!("{}/", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_url_joins_query_path() {
        let urls = SiteUrls::new("https://example.com/", "https://example.com/assets/");
        assert_eq!(
            urls.site_url("/?breakdance=builder&id=12"),
            "https://example.com/?breakdance=builder&id=12"
        );
    }

    #[test]
    fn admin_url_uses_admin_base() {
        let urls = SiteUrls::new("https://example.com", "https://example.com/assets/");
        assert_eq!(
            urls.admin_url("edit.php?post_type=page"),
            "https://example.com/wp-admin/edit.php?post_type=page"
        );
    }

    #[test]
    fn asset_base_gets_single_trailing_slash() {
        let urls = SiteUrls::new("https://example.com", "https://cdn.example.com/nav//");
        assert_eq!(
            urls.admin_url("/admin.php?page=headspin"),
            "https://example.com/wp-admin/admin.php?page=headspin"
        );
        assert_eq!(
            urls.asset_url("/images/icon.png"),
            "https://cdn.example.com/nav/images/icon.png"
        );
        assert_eq!(
            urls.asset_url("images/icon.png"),
            "https://cdn.example.com/nav/images/icon.png"
        );
    }
}
