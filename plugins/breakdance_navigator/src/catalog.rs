//! Static menu entries: settings tabs, external links, credits.

use navigator_sdk::prelude::*;

pub const SETTINGS_ID: &str = "bdn-settings";
pub const SETTINGS_SEPARATOR_CLASS: &str = "bdn-settings-separator";
pub const LINKS_ID: &str = "bdn-links";
pub const ABOUT_ID: &str = "bdn-about";

const SETTINGS_PATH: &str = "admin.php?page=breakdance_settings";

/// A fixed (key, label, destination) entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub url: &'static str,
}

const fn entry(key: &'static str, label: &'static str, url: &'static str) -> StaticEntry {
    StaticEntry { key, label, url }
}

/// Builder settings tabs as (tab key, label).
pub const SETTINGS_TABS: &[(&str, &str)] = &[
    ("license", "License"),
    ("global_styles", "Global Styles"),
    ("theme_disabler", "Theme"),
    ("woocommerce", "WooCommerce"),
    ("permissions", "User Access"),
    ("maintenance-mode", "Maintenance"),
    ("bloat_eliminator", "Performance"),
    ("api_keys", "API Keys"),
    ("post_types", "Post Types"),
    ("advanced", "Advanced"),
    ("privacy", "Privacy"),
    ("design_library", "Design Library"),
    ("header_footer", "Custom Code"),
    ("tools", "Tools"),
    ("ai", "AI Assistant"),
];

/// Community and ecosystem sites.
pub const LINKS: &[StaticEntry] = &[
    entry("breakdance", "Breakdance", "https://breakdance.com/ref/325/"),
    entry(
        "breakdance-fb-group",
        "Breakdance FB Group",
        "https://www.facebook.com/groups/5118076864894234",
    ),
    entry("headspin", "Headspin", "https://headspinui.com/"),
    entry("moreblocks", "Moreblocks", "https://moreblocks.com/"),
    entry("breakerblocks", "Breakerblocks", "https://breakerblocks.com/"),
    entry("bdlibraryawesome", "BD Library Awesome", "https://bdlibraryawesome.com/"),
    entry("flowmattic", "Flowmattic", "https://flowmattic.com/integrations/?aff=97"),
];

/// Author and project links.
pub const ABOUT_LINKS: &[StaticEntry] = &[
    entry("author", "Author: Peter Kulcsár", "https://peterkulcsar.dev/"),
    entry(
        "github",
        "Plugin on GitHub",
        "https://github.com/beamkiller/breakdance-navigator",
    ),
    entry("buymeacoffee", "Buy Me a Coffee", "https://buymeacoffee.com/peter.kulcsar"),
];

/// Admin path of a settings tab.
pub fn settings_tab_path(tab: &str) -> String {
    format!("{SETTINGS_PATH}&tab={}", urlencoding::encode(tab))
}

/// The Settings submenu followed by one node per tab.
pub fn settings_nodes<S: Site + ?Sized>(site: &S, root: &str) -> Vec<NavigationNode> {
    let mut nodes = Vec::with_capacity(SETTINGS_TABS.len() + 1);
    nodes.push(
        NavigationNode::new(SETTINGS_ID, esc_html("Settings"))
            .href(esc_url(&site.admin_url(SETTINGS_PATH)))
            .parent(root)
            .class(SETTINGS_SEPARATOR_CLASS),
    );
    nodes.extend(SETTINGS_TABS.iter().map(|(tab, label)| {
        NavigationNode::new(format!("{SETTINGS_ID}-{}", sanitize_key(tab)), esc_html(label))
            .href(esc_url(&site.admin_url(&settings_tab_path(tab))))
            .parent(SETTINGS_ID)
    }));
    nodes
}

/// A placeholder submenu followed by its external links, opened in new tabs.
pub fn link_group(id: &str, label: &str, root: &str, entries: &[StaticEntry]) -> Vec<NavigationNode> {
    let mut nodes = Vec::with_capacity(entries.len() + 1);
    nodes.push(NavigationNode::new(id, esc_html(label)).parent(root));
    nodes.extend(entries.iter().map(|e| {
        NavigationNode::new(format!("{id}-{}", sanitize_key(e.key)), esc_html(e.label))
            .href(esc_url(e.url))
            .parent(id)
            .new_tab()
    }));
    nodes
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use navigator_test_utils::{TestSite, editor_user};

    #[test]
    fn settings_tabs_link_to_their_tab() {
        let site = TestSite::new(editor_user());
        let nodes = settings_nodes(&site, "root");

        assert_eq!(nodes.len(), SETTINGS_TABS.len() + 1);
        assert_eq!(nodes[0].id, SETTINGS_ID);
        assert_eq!(nodes[0].meta.class.as_deref(), Some(SETTINGS_SEPARATOR_CLASS));

        let maintenance = nodes
            .iter()
            .find(|n| n.id == "bdn-settings-maintenance-mode")
            .unwrap();
        assert_eq!(maintenance.title, "Maintenance");
        assert_eq!(
            maintenance.href,
            "https://example.com/wp-admin/admin.php?page=breakdance_settings&tab=maintenance-mode"
        );
        assert!(nodes[1..].iter().all(|n| n.parent.as_deref() == Some(SETTINGS_ID)));
    }

    #[test]
    fn tab_keys_are_url_encoded() {
        assert_eq!(
            settings_tab_path("a&b"),
            "admin.php?page=breakdance_settings&tab=a%26b"
        );
    }

    #[test]
    fn link_group_opens_in_new_tabs() {
        let nodes = link_group(LINKS_ID, "Links", "root", LINKS);

        assert_eq!(nodes[0].href, "#");
        assert_eq!(nodes[0].parent.as_deref(), Some("root"));
        assert_eq!(nodes.len(), LINKS.len() + 1);
        for node in &nodes[1..] {
            assert_eq!(node.parent.as_deref(), Some(LINKS_ID));
            assert_eq!(node.meta.target.as_deref(), Some("_blank"));
            assert!(node.href.starts_with("https://"));
        }
        assert_eq!(nodes[2].id, "bdn-links-breakdance-fb-group");
    }

    #[test]
    fn about_links_escape_labels() {
        let nodes = link_group(ABOUT_ID, "About", "root", ABOUT_LINKS);
        assert_eq!(nodes[1].id, "bdn-about-author");
        assert_eq!(nodes[1].title, "Author: Peter Kulcsár");
    }
}
