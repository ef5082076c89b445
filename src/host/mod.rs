//! Host scene-graph seam
//!
//! The manager never talks to the authoring application directly; every
//! scene query and attribute write goes through the [`SceneHost`] trait so
//! the same core drives a live host binding, the in-memory host in tests,
//! and the standalone demo binary.

use serde::{Deserialize, Serialize};

pub mod memory;

pub use memory::MemoryHost;

/// Opaque reference to a node owned by the host scene.
///
/// Carries the decorated host-side name; display normalization happens in
/// the directory, not here, so writes always address the real node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProxyNodeRef(String);

impl ProxyNodeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProxyNodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value types accepted by host attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Integer(i32),
    String(String),
    Boolean(bool),
    /// Normalized RGB triple, each channel in [0, 1]
    Color3([f32; 3]),
}

/// Scene-graph command surface the manager depends on
pub trait SceneHost {
    /// All nodes of the given type currently in the scene, in host order.
    fn list_nodes_of_type(&self, node_type: &str) -> Vec<ProxyNodeRef>;

    /// Read a single attribute value.
    fn get_attribute(&self, node: &ProxyNodeRef, attribute: &str) -> Result<AttributeValue, String>;

    /// Write a single attribute value.
    fn set_attribute(
        &mut self,
        node: &ProxyNodeRef,
        attribute: &str,
        value: AttributeValue,
    ) -> Result<(), String>;
}
