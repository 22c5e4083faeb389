//! Navigator test utilities.
//!
//! Helpers for integration testing: an in-memory content store that honours
//! the query contract, a configurable site, record and user builders, and
//! assertion helpers for toolbar output.

use std::cell::Cell;

use navigator_sdk::prelude::*;

/// Base timestamp used by record builders.
pub const BASE_TIME: i64 = 1_700_000_000;

/// Metadata key the page builder stores its layout under.
pub const BUILDER_DATA_META: &str = "_breakdance_data";

/// Create a published test record.
pub fn test_record(post_type: &str, id: u64, title: &str) -> TestRecord {
    TestRecord {
        id,
        post_type: post_type.to_string(),
        title: title.to_string(),
        status: PostStatus::Publish,
        modified: BASE_TIME,
        meta_keys: Vec::new(),
    }
}

/// Create a published page that was edited with the builder.
pub fn builder_page(id: u64, title: &str) -> TestRecord {
    test_record("page", id, title).with_meta(BUILDER_DATA_META)
}

/// A content record builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestRecord {
    pub id: u64,
    pub post_type: String,
    pub title: String,
    pub status: PostStatus,
    pub modified: i64,
    pub meta_keys: Vec<String>,
}

impl TestRecord {
    /// Set the modification time as an offset from [`BASE_TIME`].
    pub fn modified_at(mut self, offset: i64) -> Self {
        self.modified = BASE_TIME + offset;
        self
    }

    /// Set as draft.
    pub fn draft(mut self) -> Self {
        self.status = PostStatus::Draft;
        self
    }

    /// Set a status.
    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    /// Add a metadata key.
    pub fn with_meta(mut self, key: &str) -> Self {
        self.meta_keys.push(key.to_string());
        self
    }

    pub fn build(self) -> ContentRecord {
        ContentRecord {
            id: self.id,
            title: self.title,
            post_type: self.post_type,
            status: self.status,
            modified: self.modified,
            meta_keys: self.meta_keys,
        }
    }
}

impl From<TestRecord> for ContentRecord {
    fn from(record: TestRecord) -> Self {
        record.build()
    }
}

/// A content store backed by a vector.
///
/// Filters, sorts and limits exactly as a real store would. Sorting is
/// stable, so records sharing a timestamp keep insertion order. Records are
/// not deduplicated: inserting an id twice returns it twice.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<ContentRecord>,
    failing: bool,
    unbounded: bool,
    queries: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record.
    pub fn insert(&mut self, record: impl Into<ContentRecord>) {
        self.records.push(record.into());
    }

    /// Make every query fail.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Ignore `query.limit` and return every match.
    pub fn unbounded(mut self) -> Self {
        self.unbounded = true;
        self
    }

    /// Number of queries served so far.
    pub fn query_count(&self) -> usize {
        self.queries.get()
    }
}

impl ContentStore for MemoryStore {
    fn query_records(&self, query: &ContentQuery) -> HostResult<Vec<ContentRecord>> {
        self.queries.set(self.queries.get() + 1);
        if self.failing {
            return Err(HostError::QueryFailed("store unavailable".into()));
        }

        let mut matches: Vec<ContentRecord> = self
            .records
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect();

        match query.order {
            Order::Desc => matches.sort_by(|a, b| b.modified.cmp(&a.modified)),
        }
        if !self.unbounded {
            matches.truncate(query.limit);
        }

        Ok(matches)
    }
}

/// Create a test user holding the given capabilities.
pub fn test_user(capabilities: &[&str]) -> TestUser {
    TestUser {
        capabilities: capabilities.iter().map(|s| s.to_string()).collect(),
    }
}

/// Create a user who may edit content.
pub fn editor_user() -> TestUser {
    test_user(&["read", "edit_posts"])
}

/// Create a user who may only read.
pub fn subscriber_user() -> TestUser {
    test_user(&["read"])
}

/// A test user builder.
#[derive(Debug, Clone)]
pub struct TestUser {
    pub capabilities: Vec<String>,
}

impl TestUser {
    /// Add a capability.
    pub fn with_capability(mut self, capability: &str) -> Self {
        self.capabilities.push(capability.to_string());
        self
    }

    /// Check if user has a capability.
    pub fn can(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|c| c == capability)
    }
}

/// A site with a configurable user, plugin set and content.
#[derive(Debug)]
pub struct TestSite {
    pub user: TestUser,
    pub store: MemoryStore,
    pub active_plugins: Vec<String>,
    pub admin_bar_showing: bool,
    pub urls: SiteUrls,
}

impl TestSite {
    /// A site at `https://example.com` viewed by `user`.
    pub fn new(user: TestUser) -> Self {
        Self {
            user,
            store: MemoryStore::new(),
            active_plugins: Vec::new(),
            admin_bar_showing: true,
            urls: SiteUrls::new(
                "https://example.com",
                "https://example.com/wp-content/plugins/breakdance-navigator/",
            ),
        }
    }

    /// Add a record to the store.
    pub fn with_record(mut self, record: impl Into<ContentRecord>) -> Self {
        self.store.insert(record);
        self
    }

    /// Add several records to the store.
    pub fn with_records<R: Into<ContentRecord>>(
        mut self,
        records: impl IntoIterator<Item = R>,
    ) -> Self {
        for record in records {
            self.store.insert(record);
        }
        self
    }

    /// Mark a plugin as active.
    pub fn with_plugin(mut self, plugin: &str) -> Self {
        self.active_plugins.push(plugin.to_string());
        self
    }

    /// Render without the admin bar.
    pub fn without_admin_bar(mut self) -> Self {
        self.admin_bar_showing = false;
        self
    }

    /// Make every content query fail.
    pub fn with_failing_store(mut self) -> Self {
        self.store = std::mem::take(&mut self.store).failing();
        self
    }

    /// Make the store ignore query limits.
    pub fn with_unbounded_store(mut self) -> Self {
        self.store = std::mem::take(&mut self.store).unbounded();
        self
    }
}

impl ContentStore for TestSite {
    fn query_records(&self, query: &ContentQuery) -> HostResult<Vec<ContentRecord>> {
        self.store.query_records(query)
    }
}

impl Site for TestSite {
    fn current_user_can(&self, capability: &str) -> bool {
        self.user.can(capability)
    }

    fn is_plugin_active(&self, plugin: &str) -> bool {
        self.active_plugins.iter().any(|p| p == plugin)
    }

    fn is_admin_bar_showing(&self) -> bool {
        self.admin_bar_showing
    }

    fn site_url(&self, path: &str) -> String {
        self.urls.site_url(path)
    }

    fn admin_url(&self, path: &str) -> String {
        self.urls.admin_url(path)
    }

    fn plugin_asset_url(&self, file: &str) -> String {
        self.urls.asset_url(file)
    }
}

/// A style queue that records what was added.
#[derive(Debug, Default)]
pub struct RecordingStyles {
    pub inline: Vec<(String, String)>,
}

impl StyleRegistry for RecordingStyles {
    fn add_inline_style(&mut self, handle: &str, css: &str) -> HostResult<()> {
        self.inline.push((handle.to_string(), css.to_string()));
        Ok(())
    }
}

/// An admin bar that refuses every node.
#[derive(Debug, Default)]
pub struct RejectingBar;

impl AdminBar for RejectingBar {
    fn add_node(&mut self, node: NavigationNode) -> HostResult<()> {
        Err(HostError::Rejected(format!("node '{}' refused", node.id)))
    }
}

/// Assertion helpers for toolbar output.
pub mod assert {
    use std::collections::HashSet;

    use navigator_sdk::types::NavigationNode;
    use serde_json::Value;

    /// Assert that a JSON value has a specific key.
    pub fn has_key(value: &Value, key: &str) {
        assert!(
            value.get(key).is_some(),
            "Expected JSON to have key '{key}', got: {value}"
        );
    }

    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that a string does not contain a substring.
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected string to NOT contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that node ids are unique.
    pub fn unique_ids(nodes: &[NavigationNode]) {
        let mut seen = HashSet::new();
        for node in nodes {
            assert!(seen.insert(node.id.as_str()), "Duplicate node id '{}'", node.id);
        }
    }

    /// Assert that every parent appears before its children.
    pub fn parents_first(nodes: &[NavigationNode]) {
        let mut seen = HashSet::new();
        for node in nodes {
            if let Some(parent) = node.parent.as_deref() {
                assert!(
                    seen.contains(parent),
                    "Node '{}' appears before its parent '{parent}'",
                    node.id
                );
            }
            seen.insert(node.id.as_str());
        }
    }
}
