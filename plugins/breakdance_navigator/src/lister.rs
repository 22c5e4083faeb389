//! Recent-content listing per category.
//!
//! One bounded query per category, newest edits first, each record mapped
//! to a node that deep-links into the builder.

use std::collections::HashSet;

use navigator_sdk::prelude::*;
use tracing::{debug, warn};

use crate::category::Category;

/// Upper bound on records listed under one category.
pub const MAX_ITEMS_PER_CATEGORY: usize = 10;

/// Title prefix the builder gives its auto-generated placeholder records.
pub const FALLBACK_PREFIX: &str = "Fallback: ";

/// Whether a title marks an auto-generated fallback record.
pub fn is_fallback(title: &str) -> bool {
    title.starts_with(FALLBACK_PREFIX)
}

/// Site path that opens a record in the builder.
pub fn builder_edit_path(record_id: u64) -> String {
    format!("/?breakdance=builder&id={record_id}")
}

/// Lists recently edited records of a category as toolbar nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentLister;

impl ContentLister {
    pub fn new() -> Self {
        Self
    }

    /// The store query issued for a category.
    pub fn query_for(category: Category) -> ContentQuery {
        let query = ContentQuery::recent(category.post_type(), MAX_ITEMS_PER_CATEGORY);
        match category.required_meta() {
            Some(key) => query.meta_exists(key),
            None => query,
        }
    }

    /// Nodes for the most recently modified published records of `category`.
    ///
    /// At most [`MAX_ITEMS_PER_CATEGORY`] rows of the result are considered,
    /// even from a store that ignores the limit. Hidden fallbacks and repeated
    /// ids within those rows are dropped, not replaced. A failed query lists
    /// nothing.
    pub fn list<S: Site + ?Sized>(&self, site: &S, category: Category) -> Vec<NavigationNode> {
        let query = Self::query_for(category);
        let records = match site.query_records(&query) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    category = %category,
                    post_type = category.post_type(),
                    error = %e,
                    "content query failed, listing nothing"
                );
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let nodes: Vec<NavigationNode> = records
            .iter()
            .take(MAX_ITEMS_PER_CATEGORY)
            .filter(|r| !(category.hides_fallbacks() && is_fallback(&r.title)))
            .filter(|r| {
                let first = seen.insert(r.id);
                if !first {
                    warn!(category = %category, id = r.id, "duplicate record in query result");
                }
                first
            })
            .map(|r| Self::node_for(site, category, r))
            .collect();

        debug!(
            category = %category,
            fetched = records.len(),
            listed = nodes.len(),
            "listed builder content"
        );
        nodes
    }

    /// Map one record to its node under the category submenu.
    pub fn node_for<S: Site + ?Sized>(
        site: &S,
        category: Category,
        record: &ContentRecord,
    ) -> NavigationNode {
        NavigationNode::new(category.node_id(record.id), esc_html(&record.title))
            .href(esc_url(&site.site_url(&builder_edit_path(record.id))))
            .parent(category.submenu_id())
    }
}
