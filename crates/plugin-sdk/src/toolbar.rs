//! In-process admin toolbar.
//!
//! Collects nodes through the [`AdminBar`] contract, enforcing that parents
//! arrive before their children, and renders the result as admin-bar markup
//! or as the JSON array a remote host would replay through its own
//! "add node" call.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{HostError, HostResult};
use crate::escape::{esc_html, esc_url};
use crate::host::AdminBar;
use crate::types::NavigationNode;

/// An ordered tree of toolbar nodes.
#[derive(Debug, Clone, Default)]
pub struct Toolbar {
    nodes: Vec<NavigationNode>,
    positions: HashMap<String, usize>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[NavigationNode] {
        &self.nodes
    }

    pub fn get(&self, id: &str) -> Option<&NavigationNode> {
        self.positions.get(id).map(|&i| &self.nodes[i])
    }

    /// Nodes without a parent, in insertion order.
    pub fn roots(&self) -> Vec<&NavigationNode> {
        self.nodes.iter().filter(|n| n.parent.is_none()).collect()
    }

    /// Direct children of a node, in insertion order.
    pub fn children_of(&self, id: &str) -> Vec<&NavigationNode> {
        self.nodes
            .iter()
            .filter(|n| n.parent.as_deref() == Some(id))
            .collect()
    }

    /// Serialize as an array of add-node argument objects.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(&self.nodes)
    }

    /// Render the toolbar as nested admin-bar list markup.
    pub fn render_html(&self) -> String {
        let mut html = String::from("<ul id=\"wp-admin-bar-root-default\" class=\"ab-top-menu\">");
        for root in self.roots() {
            self.render_node(root, &mut html);
        }
        html.push_str("</ul>");
        html
    }

    fn render_node(&self, node: &NavigationNode, html: &mut String) {
        let children = self.children_of(&node.id);

        let mut classes = Vec::new();
        if !children.is_empty() {
            classes.push("menupop");
        }
        if let Some(class) = node.meta.class.as_deref() {
            classes.push(class);
        }

        html.push_str(&format!("<li id=\"wp-admin-bar-{}\"", esc_html(&node.id)));
        if !classes.is_empty() {
            html.push_str(&format!(" class=\"{}\"", esc_html(&classes.join(" "))));
        }
        html.push_str(&format!(
            "><a class=\"ab-item\" href=\"{}\"",
            esc_html(&esc_url(&node.href))
        ));
        if let Some(target) = node.meta.target.as_deref() {
            html.push_str(&format!(" target=\"{}\"", esc_html(target)));
        }
        html.push('>');
        html.push_str(&node.title);
        html.push_str("</a>");

        if !children.is_empty() {
            html.push_str("<div class=\"ab-sub-wrapper\"><ul class=\"ab-submenu\">");
            for child in children {
                self.render_node(child, html);
            }
            html.push_str("</ul></div>");
        }

        html.push_str("</li>");
    }

    /// Whether `id` is `ancestor` or sits somewhere below it.
    fn is_within(&self, id: &str, ancestor: &str) -> bool {
        let mut current = Some(id);
        while let Some(cur) = current {
            if cur == ancestor {
                return true;
            }
            current = self.get(cur).and_then(|n| n.parent.as_deref());
        }
        false
    }
}

impl AdminBar for Toolbar {
    fn add_node(&mut self, node: NavigationNode) -> HostResult<()> {
        if let Some(parent) = node.parent.as_deref() {
            if !self.positions.contains_key(parent) {
                return Err(HostError::UnknownParent {
                    id: node.id.clone(),
                    parent: parent.to_string(),
                });
            }
            if self.positions.contains_key(&node.id) && self.is_within(parent, &node.id) {
                return Err(HostError::Rejected(format!(
                    "moving '{}' under '{parent}' would create a cycle",
                    node.id
                )));
            }
        }

        match self.positions.get(&node.id) {
            Some(&i) => self.nodes[i] = node,
            None => {
                self.positions.insert(node.id.clone(), self.nodes.len());
                self.nodes.push(node);
            }
        }
        Ok(())
    }
}
