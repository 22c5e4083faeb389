//! Core types shared between the navigator and its host.
//!
//! Records flow in from the host's content store; navigation nodes flow back
//! out to the host's admin toolbar. Both sides serialize as JSON so a host
//! adapter can forward them across whatever boundary it has.

use serde::{Deserialize, Serialize};

/// A content record as exposed by the host's content store.
///
/// The navigator only ever reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Host-assigned numeric identifier.
    pub id: u64,

    /// Record title as stored (unescaped).
    pub title: String,

    /// Content type machine name (e.g., "page", "breakdance_template").
    pub post_type: String,

    /// Publication status.
    pub status: PostStatus,

    /// Unix timestamp of the last modification.
    pub modified: i64,

    /// Metadata keys present on the record.
    #[serde(default)]
    pub meta_keys: Vec<String>,
}

impl ContentRecord {
    /// Check whether the record carries a metadata key.
    pub fn has_meta(&self, key: &str) -> bool {
        self.meta_keys.iter().any(|k| k == key)
    }
}

/// Publication status of a content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Publish,
    Draft,
    Pending,
    Private,
    Trash,
}

/// Field a content query is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    Modified,
}

/// Sort direction. The navigator only ever asks for newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Order {
    Desc,
}

/// A bounded, ordered, filtered query against the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentQuery {
    pub post_type: String,
    pub status: PostStatus,
    pub limit: usize,
    pub order_by: OrderBy,
    pub order: Order,
    /// Only match records carrying this metadata key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_exists: Option<String>,
}

impl ContentQuery {
    /// Published records of `post_type`, most recently modified first.
    pub fn recent(post_type: impl Into<String>, limit: usize) -> Self {
        Self {
            post_type: post_type.into(),
            status: PostStatus::Publish,
            limit,
            order_by: OrderBy::Modified,
            order: Order::Desc,
            meta_exists: None,
        }
    }

    pub fn meta_exists(mut self, key: impl Into<String>) -> Self {
        self.meta_exists = Some(key.into());
        self
    }

    /// Check whether a record satisfies the query's filters.
    ///
    /// Limit and ordering are not considered.
    pub fn matches(&self, record: &ContentRecord) -> bool {
        record.post_type == self.post_type
            && record.status == self.status
            && self
                .meta_exists
                .as_deref()
                .is_none_or(|key| record.has_meta(key))
    }
}

/// Optional presentation hints attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMeta {
    /// Extra CSS class on the node's list element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Link target (e.g., "_blank").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl NodeMeta {
    pub fn is_empty(&self) -> bool {
        self.class.is_none() && self.target.is_none()
    }
}

/// A single admin toolbar entry.
///
/// `title` is HTML and is rendered as-is by the toolbar, so callers escape
/// text before building a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationNode {
    pub id: String,
    pub title: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "NodeMeta::is_empty")]
    pub meta: NodeMeta,
}

impl NavigationNode {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            href: "#".into(),
            parent: None,
            meta: NodeMeta::default(),
        }
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = href.into();
        self
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.meta.class = Some(class.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.meta.target = Some(target.into());
        self
    }

    /// Open the link in a new browser tab.
    pub fn new_tab(self) -> Self {
        self.target("_blank")
    }
}

/// Where a plugin callback is attached on the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookRegistration {
    /// Host hook name (e.g., "admin_bar_menu").
    pub hook: String,
    /// Plugin callback attached to the hook.
    pub callback: String,
    /// Lower runs earlier.
    pub priority: i32,
}

impl HookRegistration {
    pub fn new(hook: impl Into<String>, callback: impl Into<String>) -> Self {
        Self {
            hook: hook.into(),
            callback: callback.into(),
            priority: 10,
        }
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn record(post_type: &str, status: PostStatus, meta: &[&str]) -> ContentRecord {
        ContentRecord {
            id: 7,
            title: "Home".into(),
            post_type: post_type.into(),
            status,
            modified: 1_700_000_000,
            meta_keys: meta.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn query_matches_type_and_status() {
        let query = ContentQuery::recent("page", 10);
        assert!(query.matches(&record("page", PostStatus::Publish, &[])));
        assert!(!query.matches(&record("page", PostStatus::Draft, &[])));
        assert!(!query.matches(&record("post", PostStatus::Publish, &[])));
    }

    #[test]
    fn query_meta_exists_filter() {
        let query = ContentQuery::recent("page", 10).meta_exists("_breakdance_data");
        assert!(query.matches(&record("page", PostStatus::Publish, &["_breakdance_data"])));
        assert!(!query.matches(&record("page", PostStatus::Publish, &["_edit_lock"])));
    }

    #[test]
    fn node_serializes_to_add_node_shape() {
        let node = NavigationNode::new("bdn-links-github", "GitHub")
            .href("https://github.com/")
            .parent("bdn-links")
            .new_tab();

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "bdn-links-github",
                "title": "GitHub",
                "href": "https://github.com/",
                "parent": "bdn-links",
                "meta": { "target": "_blank" }
            })
        );
    }

    #[test]
    fn root_node_omits_parent_and_meta() {
        let json = serde_json::to_value(NavigationNode::new("root", "Root")).unwrap();
        assert!(json.get("parent").is_none());
        assert!(json.get("meta").is_none());
        assert_eq!(json["href"], "#");
    }

    #[test]
    fn query_serializes_for_remote_hosts() {
        let json = serde_json::to_value(ContentQuery::recent("breakdance_popup", 10)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "post_type": "breakdance_popup",
                "status": "publish",
                "limit": 10,
                "order_by": "modified",
                "order": "DESC"
            })
        );
    }
}
