//! Menu tree assembly.
//!
//! Produces the full node list for one render pass: the top-level entry,
//! one submenu per content category with its recent records, the static
//! admin shortcuts, and the link collections. Parents always precede their
//! children, so the list can be replayed straight into an [`AdminBar`].

use navigator_sdk::prelude::*;
use tracing::debug;

use crate::catalog::{self, ABOUT_ID, ABOUT_LINKS, LINKS, LINKS_ID};
use crate::category::Category;
use crate::config::NavigatorConfig;
use crate::lister::ContentLister;

/// Id of the top-level entry.
pub const ROOT_ID: &str = "bdn-breakdance-navigator";

/// Capability required to see the navigator.
pub const EDIT_CAPABILITY: &str = "edit_posts";

pub const FORM_SUBMISSIONS_ID: &str = "bdn-form-submissions";
pub const DESIGN_LIBRARY_ID: &str = "bdn-design-library";
pub const COMPANION_ID: &str = "bdn-headspin";

const ICON_STYLE: &str = "width:16px;height:16px;padding-right:6px;vertical-align:middle;";

/// What the current request is allowed to see.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    /// The user may edit content.
    pub can_edit: bool,
    /// The companion plugin is active.
    pub companion_active: bool,
}

impl Visibility {
    /// Resolve against the site. The plugin lookup only runs for editors.
    pub fn resolve<S: Site + ?Sized>(site: &S, config: &NavigatorConfig) -> Self {
        let can_edit = site.current_user_can(EDIT_CAPABILITY);
        let companion_active = can_edit && site.is_plugin_active(&config.companion_plugin);
        Self {
            can_edit,
            companion_active,
        }
    }
}

/// Builds the navigator's node list.
#[derive(Debug, Clone)]
pub struct MenuAssembler<'a> {
    config: &'a NavigatorConfig,
    lister: ContentLister,
}

impl<'a> MenuAssembler<'a> {
    pub fn new(config: &'a NavigatorConfig) -> Self {
        Self {
            config,
            lister: ContentLister::new(),
        }
    }

    /// All nodes for one render, parents first. Empty for non-editors.
    pub fn assemble<S: Site + ?Sized>(&self, site: &S, visibility: Visibility) -> Vec<NavigationNode> {
        if !visibility.can_edit {
            debug!("user cannot edit content, navigator hidden");
            return Vec::new();
        }

        let mut nodes = vec![self.root_node(site)];

        for category in Category::ALL {
            nodes.push(category_node(site, category));
            nodes.extend(self.lister.list(site, category));
        }

        nodes.push(admin_node(
            site,
            FORM_SUBMISSIONS_ID,
            "Form Submissions",
            "edit.php?post_type=breakdance_form_res",
        ));
        nodes.push(admin_node(
            site,
            DESIGN_LIBRARY_ID,
            "Design Library",
            "admin.php?page=breakdance_design_library",
        ));
        nodes.extend(catalog::settings_nodes(site, ROOT_ID));

        if visibility.companion_active {
            nodes.push(self.companion_node(site));
        }

        nodes.extend(catalog::link_group(LINKS_ID, "Links", ROOT_ID, LINKS));
        nodes.extend(catalog::link_group(ABOUT_ID, "About", ROOT_ID, ABOUT_LINKS));

        debug!(
            nodes = nodes.len(),
            companion = visibility.companion_active,
            "assembled navigator menu"
        );
        nodes
    }

    fn root_node<S: Site + ?Sized>(&self, site: &S) -> NavigationNode {
        NavigationNode::new(ROOT_ID, icon_title(site, &self.config.brand_icon, "Breakdance Nav"))
    }

    fn companion_node<S: Site + ?Sized>(&self, site: &S) -> NavigationNode {
        NavigationNode::new(COMPANION_ID, icon_title(site, &self.config.companion_icon, "Headspin"))
            .href(esc_url(&site.admin_url("admin.php?page=headspin")))
            .parent(ROOT_ID)
    }
}

/// Submenu entry for a category, linking to its list view.
fn category_node<S: Site + ?Sized>(site: &S, category: Category) -> NavigationNode {
    admin_node(site, category.submenu_id(), category.label(), category.list_path())
}

fn admin_node<S: Site + ?Sized>(site: &S, id: &str, label: &str, path: &str) -> NavigationNode {
    NavigationNode::new(id, esc_html(label))
        .href(esc_url(&site.admin_url(path)))
        .parent(ROOT_ID)
}

/// A label preceded by a small icon, restricted to a bare `<img>`.
fn icon_title<S: Site + ?Sized>(site: &S, icon: &str, label: &str) -> String {
    let src = esc_url(&site.plugin_asset_url(icon));
    kses_icon_label(&format!(
        "<img src=\"{}\" style=\"{ICON_STYLE}\" alt=\"\">{}",
        esc_html(&src),
        esc_html(label)
    ))
}
