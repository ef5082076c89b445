//! Current multi-selection state
//!
//! Ordered, duplicate-free set of standin nodes. The editor replaces or
//! mutates it on discrete UI events and passes it by parameter into the
//! apply path; nothing else holds selection state.

use crate::directory::{DirectoryEntry, NodeDirectory};
use crate::host::ProxyNodeRef;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    nodes: Vec<ProxyNodeRef>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[ProxyNodeRef] {
        &self.nodes
    }

    pub fn contains(&self, node: &ProxyNodeRef) -> bool {
        self.nodes.contains(node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Replace the whole selection, dropping duplicates but keeping order.
    pub fn replace(&mut self, nodes: Vec<ProxyNodeRef>) {
        self.nodes.clear();
        for node in nodes {
            if !self.nodes.contains(&node) {
                self.nodes.push(node);
            }
        }
    }

    /// Collapse the selection to a single node.
    pub fn select_only(&mut self, node: ProxyNodeRef) {
        self.nodes.clear();
        self.nodes.push(node);
    }

    /// Add the node if absent, remove it if present.
    pub fn toggle(&mut self, node: &ProxyNodeRef) {
        if let Some(index) = self.nodes.iter().position(|n| n == node) {
            self.nodes.remove(index);
        } else {
            self.nodes.push(node.clone());
        }
    }

    /// Select every entry of the given listing, in listing order.
    pub fn select_all(&mut self, entries: &[DirectoryEntry]) {
        self.replace(entries.iter().map(|e| e.node.clone()).collect());
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Drop nodes that are no longer present in the directory.
    pub fn retain_known(&mut self, directory: &NodeDirectory) {
        self.nodes.retain(|n| directory.contains(n));
    }
}
