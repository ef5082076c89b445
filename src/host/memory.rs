//! In-memory scene host
//!
//! Backs the standalone demo binary and the test suite. Nodes live in a
//! flat list keyed by name; every successful write is recorded so tests can
//! assert on write ordering, and individual nodes can be set to refuse
//! writes to exercise the fail-soft apply path.

use std::collections::HashMap;

use serde::Deserialize;

use crate::constants::scene;
use crate::host::{AttributeValue, ProxyNodeRef, SceneHost};

/// One attribute write accepted by the host
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedWrite {
    pub node: String,
    pub attribute: String,
    pub value: AttributeValue,
}

#[derive(Debug, Clone)]
struct MemoryNode {
    name: String,
    node_type: String,
    attributes: HashMap<String, AttributeValue>,
}

/// Scene seed format accepted by [`MemoryHost::from_json`]
#[derive(Debug, Deserialize)]
struct SceneSeed {
    #[serde(default)]
    standins: Vec<StandinSeed>,
}

#[derive(Debug, Deserialize)]
struct StandinSeed {
    name: String,
    #[serde(default)]
    dso: String,
    #[serde(default)]
    mode: i32,
}

/// In-memory [`SceneHost`] implementation
#[derive(Debug, Default)]
pub struct MemoryHost {
    nodes: Vec<MemoryNode>,
    writes: Vec<RecordedWrite>,
    refuse_writes: Vec<String>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo scene used by the standalone binary.
    pub fn sample_scene() -> Self {
        let mut host = Self::new();
        host.add_standin("vehicleShape", "/show/assets/vehicle/vehicle.ass", 0);
        host.add_standin("cityShape", "/show/assets/city/city.ass", 0);
        host.add_standin("treeBShape", "/show/assets/veg/treeB.ass", 6);
        host.add_standin("treeAShape", "/show/assets/veg/treeA.ass", 6);
        host.add_standin("crowdShape", "/show/assets/crowd/crowd.ass", 3);
        host.add_node("renderCam", "camera");
        host
    }

    /// Build a host from a JSON scene seed: `{"standins": [{"name": ...,
    /// "dso": ..., "mode": ...}]}`.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let seed: SceneSeed =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse scene seed: {}", e))?;

        let mut host = Self::new();
        for standin in seed.standins {
            host.add_standin(&standin.name, &standin.dso, standin.mode);
        }
        Ok(host)
    }

    /// Add a node of an arbitrary type with no attributes.
    pub fn add_node(&mut self, name: &str, node_type: &str) {
        self.nodes.push(MemoryNode {
            name: name.to_string(),
            node_type: node_type.to_string(),
            attributes: HashMap::new(),
        });
    }

    /// Add a standin node with the usual attribute set.
    pub fn add_standin(&mut self, name: &str, cache_path: &str, mode: i32) {
        let mut attributes = HashMap::new();
        attributes.insert(scene::ATTR_MODE.to_string(), AttributeValue::Integer(mode));
        attributes.insert(
            scene::ATTR_CACHE_PATH.to_string(),
            AttributeValue::String(cache_path.to_string()),
        );
        attributes.insert(
            scene::ATTR_OVERRIDE_ENABLED.to_string(),
            AttributeValue::Boolean(false),
        );
        self.nodes.push(MemoryNode {
            name: name.to_string(),
            node_type: scene::STANDIN_NODE_TYPE.to_string(),
            attributes,
        });
    }

    /// Remove a node, as if it was deleted in the host application.
    pub fn remove_node(&mut self, name: &str) {
        self.nodes.retain(|n| n.name != name);
    }

    /// Make every future write to the named node fail.
    pub fn refuse_writes_to(&mut self, name: &str) {
        self.refuse_writes.push(name.to_string());
    }

    /// Writes accepted so far, in order.
    pub fn writes(&self) -> &[RecordedWrite] {
        &self.writes
    }

    fn node(&self, name: &str) -> Option<&MemoryNode> {
        self.nodes.iter().find(|n| n.name == name)
    }
}

impl SceneHost for MemoryHost {
    fn list_nodes_of_type(&self, node_type: &str) -> Vec<ProxyNodeRef> {
        self.nodes
            .iter()
            .filter(|n| n.node_type == node_type)
            .map(|n| ProxyNodeRef::new(&n.name))
            .collect()
    }

    fn get_attribute(&self, node: &ProxyNodeRef, attribute: &str) -> Result<AttributeValue, String> {
        let found = self
            .node(node.name())
            .ok_or_else(|| format!("No node named '{}'", node))?;
        found
            .attributes
            .get(attribute)
            .cloned()
            .ok_or_else(|| format!("Node '{}' has no attribute '{}'", node, attribute))
    }

    fn set_attribute(
        &mut self,
        node: &ProxyNodeRef,
        attribute: &str,
        value: AttributeValue,
    ) -> Result<(), String> {
        if self.refuse_writes.iter().any(|n| n == node.name()) {
            return Err(format!("Write to '{}.{}' refused", node, attribute));
        }
        let found = self
            .nodes
            .iter_mut()
            .find(|n| n.name == node.name())
            .ok_or_else(|| format!("No node named '{}'", node))?;
        found
            .attributes
            .insert(attribute.to_string(), value.clone());
        self.writes.push(RecordedWrite {
            node: node.name().to_string(),
            attribute: attribute.to_string(),
            value,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_filters_by_node_type() {
        let host = MemoryHost::sample_scene();
        let standins = host.list_nodes_of_type(scene::STANDIN_NODE_TYPE);

        assert_eq!(standins.len(), 5);
        assert!(standins.iter().all(|n| n.name() != "renderCam"));
    }

    #[test]
    fn test_from_json_seeds_standins() {
        let host = MemoryHost::from_json(
            r#"{"standins": [{"name": "rockShape", "dso": "/show/rock.ass", "mode": 2}]}"#,
        )
        .expect("seed should parse");

        let node = ProxyNodeRef::new("rockShape");
        assert_eq!(
            host.get_attribute(&node, scene::ATTR_MODE),
            Ok(AttributeValue::Integer(2))
        );
        assert_eq!(
            host.get_attribute(&node, scene::ATTR_CACHE_PATH),
            Ok(AttributeValue::String("/show/rock.ass".to_string()))
        );
    }

    #[test]
    fn test_from_json_rejects_malformed_seed() {
        assert!(MemoryHost::from_json("not json").is_err());
    }

    #[test]
    fn test_refused_write_leaves_attribute_untouched() {
        let mut host = MemoryHost::sample_scene();
        host.refuse_writes_to("cityShape");

        let node = ProxyNodeRef::new("cityShape");
        let before = host.get_attribute(&node, scene::ATTR_MODE).unwrap();
        let result = host.set_attribute(&node, scene::ATTR_MODE, AttributeValue::Integer(4));

        assert!(result.is_err());
        assert_eq!(host.get_attribute(&node, scene::ATTR_MODE).unwrap(), before);
        assert!(host.writes().is_empty());
    }

    #[test]
    fn test_write_to_unknown_node_fails() {
        let mut host = MemoryHost::new();
        let result = host.set_attribute(
            &ProxyNodeRef::new("ghost"),
            scene::ATTR_MODE,
            AttributeValue::Integer(1),
        );
        assert!(result.is_err());
    }
}
