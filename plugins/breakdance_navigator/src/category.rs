//! Builder content categories and their admin-area coordinates.

use std::fmt;

/// A kind of content the page builder manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Page,
    Template,
    Header,
    Footer,
    GlobalBlock,
    Popup,
}

impl Category {
    /// All categories, in menu order.
    pub const ALL: [Category; 6] = [
        Category::Page,
        Category::Template,
        Category::Header,
        Category::Footer,
        Category::GlobalBlock,
        Category::Popup,
    ];

    /// Content type machine name in the host store.
    pub fn post_type(&self) -> &'static str {
        match self {
            Category::Page => "page",
            Category::Template => "breakdance_template",
            Category::Header => "breakdance_header",
            Category::Footer => "breakdance_footer",
            Category::GlobalBlock => "breakdance_block",
            Category::Popup => "breakdance_popup",
        }
    }

    /// Id of the submenu node that lists this category.
    pub fn submenu_id(&self) -> &'static str {
        match self {
            Category::Page => "bdn-pages",
            Category::Template => "bdn-templates",
            Category::Header => "bdn-headers",
            Category::Footer => "bdn-footers",
            Category::GlobalBlock => "bdn-global-blocks",
            Category::Popup => "bdn-popups",
        }
    }

    /// Slug used in per-record node ids.
    pub fn node_slug(&self) -> &'static str {
        match self {
            Category::Page => "page",
            Category::Template => "template",
            Category::Header => "header",
            Category::Footer => "footer",
            Category::GlobalBlock => "block",
            Category::Popup => "popup",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Page => "Pages",
            Category::Template => "Templates",
            Category::Header => "Headers",
            Category::Footer => "Footers",
            Category::GlobalBlock => "Global Blocks",
            Category::Popup => "Popups",
        }
    }

    /// Admin path of the category's list view.
    pub fn list_path(&self) -> &'static str {
        match self {
            Category::Page => "edit.php?post_type=page",
            Category::Template => "admin.php?page=breakdance_template",
            Category::Header => "admin.php?page=breakdance_header",
            Category::Footer => "admin.php?page=breakdance_footer",
            Category::GlobalBlock => "admin.php?page=breakdance_block",
            Category::Popup => "admin.php?page=breakdance_popup",
        }
    }

    /// Metadata key a record must carry to be listed (pages only).
    pub fn required_meta(&self) -> Option<&'static str> {
        match self {
            Category::Page => Some("_breakdance_data"),
            _ => None,
        }
    }

    /// Whether auto-generated fallback records are hidden.
    pub fn hides_fallbacks(&self) -> bool {
        !matches!(self, Category::Page)
    }

    /// Deterministic node id for a record of this category.
    pub fn node_id(&self, record_id: u64) -> String {
        format!("bdn-{}-{record_id}", self.node_slug())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_namespaced_per_category() {
        assert_eq!(Category::Page.node_id(42), "bdn-page-42");
        assert_eq!(Category::GlobalBlock.node_id(42), "bdn-block-42");
        assert_ne!(Category::Header.node_id(1), Category::Footer.node_id(1));
    }

    #[test]
    fn post_types_are_distinct() {
        let mut types: Vec<_> = Category::ALL.iter().map(|c| c.post_type()).collect();
        types.sort_unstable();
        types.dedup();
        assert_eq!(types.len(), Category::ALL.len());
    }

    #[test]
    fn only_pages_keep_fallbacks_and_need_builder_meta() {
        assert!(!Category::Page.hides_fallbacks());
        assert_eq!(Category::Page.required_meta(), Some("_breakdance_data"));
        for category in &Category::ALL[1..] {
            assert!(category.hides_fallbacks());
            assert_eq!(category.required_meta(), None);
        }
    }

    #[test]
    fn submenu_ids_are_distinct() {
        let mut ids: Vec<_> = Category::ALL.iter().map(|c| c.submenu_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Category::ALL.len());
    }
}
