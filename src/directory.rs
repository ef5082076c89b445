//! Standin node directory
//!
//! Read-only view over the host scene: enumerates every node of the
//! monitored standin type, normalizes the decorated names for display and
//! keeps the result sorted for the list panel. The directory never writes
//! to the host.

use log::debug;

use crate::constants::scene;
use crate::host::{ProxyNodeRef, SceneHost};

/// One directory row: the host node plus its display label
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryEntry {
    /// Decorated host-side node, used for attribute writes
    pub node: ProxyNodeRef,
    /// Normalized name shown in the list
    pub label: String,
}

/// Sorted, filterable listing of all standin nodes in the scene
#[derive(Debug, Default)]
pub struct NodeDirectory {
    entries: Vec<DirectoryEntry>,
}

impl NodeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the directory from the host.
    ///
    /// Entries come back sorted by label, case-sensitive lexicographic
    /// ascending; the sort is stable so equal labels keep host order.
    pub fn refresh(&mut self, host: &dyn SceneHost) {
        self.entries = host
            .list_nodes_of_type(scene::STANDIN_NODE_TYPE)
            .into_iter()
            .map(|node| {
                let label = display_label(node.name());
                DirectoryEntry { node, label }
            })
            .collect();
        self.entries.sort_by(|a, b| a.label.cmp(&b.label));
        debug!(
            "directory refreshed: {} {} nodes",
            self.entries.len(),
            scene::STANDIN_NODE_TYPE
        );
    }

    /// Full directory contents in sorted order.
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Entries whose label contains `needle`, case-insensitively.
    ///
    /// An empty needle returns the full directory. Order is preserved.
    pub fn filter(&self, needle: &str) -> Vec<DirectoryEntry> {
        filter_entries(&self.entries, needle)
    }

    pub fn contains(&self, node: &ProxyNodeRef) -> bool {
        self.entries.iter().any(|e| &e.node == node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Case-insensitive substring filter over a slice of entries.
pub fn filter_entries(entries: &[DirectoryEntry], needle: &str) -> Vec<DirectoryEntry> {
    if needle.is_empty() {
        return entries.to_vec();
    }
    let needle = needle.to_lowercase();
    entries
        .iter()
        .filter(|e| e.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Strip one trailing shape decoration from a host node name.
fn display_label(name: &str) -> String {
    name.strip_suffix(scene::SHAPE_SUFFIX)
        .unwrap_or(name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    fn directory_of(names: &[&str]) -> NodeDirectory {
        let mut host = MemoryHost::new();
        for name in names {
            host.add_standin(name, "", 0);
        }
        let mut directory = NodeDirectory::new();
        directory.refresh(&host);
        directory
    }

    #[test]
    fn test_refresh_sorts_case_sensitive_ascending() {
        let directory = directory_of(&["propB", "Zebra", "alpha", "propA"]);
        let labels: Vec<&str> = directory.entries().iter().map(|e| e.label.as_str()).collect();

        // Uppercase sorts before lowercase in lexicographic byte order
        assert_eq!(labels, vec!["Zebra", "alpha", "propA", "propB"]);
    }

    #[test]
    fn test_refresh_strips_shape_suffix_for_display_only() {
        let directory = directory_of(&["cityShape"]);
        let entry = &directory.entries()[0];

        assert_eq!(entry.label, "city");
        assert_eq!(entry.node.name(), "cityShape");
    }

    #[test]
    fn test_empty_filter_returns_full_directory_in_order() {
        let directory = directory_of(&["propC", "propA", "propB"]);
        let filtered = directory.filter("");

        assert_eq!(filtered, directory.entries().to_vec());
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let directory = directory_of(&["propA", "propB", "propC"]);

        assert_eq!(directory.filter("prop").len(), 3);

        let only_b = directory.filter("B");
        assert_eq!(only_b.len(), 1);
        assert_eq!(only_b[0].label, "propB");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let directory = directory_of(&["propA", "propB", "setDressing"]);
        let once = directory.filter("prop");
        let twice = filter_entries(&once, "prop");

        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_with_no_match_is_empty() {
        let directory = directory_of(&["propA"]);
        assert!(directory.filter("zzz").is_empty());
    }
}
