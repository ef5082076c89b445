//! Bulk attribute application
//!
//! Takes the current selection and one uniform edit and fans the write out
//! over every selected node. Writes are independent per node: a failure is
//! recorded and the fan-out continues, so one bad node never blocks the
//! rest. The caller gets every per-node outcome plus an aggregate status.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::scene;
use crate::host::{AttributeValue, ProxyNodeRef, SceneHost};
use crate::selection::Selection;

/// Display representations for a standin proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    BoundingBox = 0,
    PerObjectBoundingBox = 1,
    Polywire = 2,
    Wireframe = 3,
    PointCloud = 4,
    ShadedPolywire = 5,
    Shaded = 6,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 7] = [
        DisplayMode::BoundingBox,
        DisplayMode::PerObjectBoundingBox,
        DisplayMode::Polywire,
        DisplayMode::Wireframe,
        DisplayMode::PointCloud,
        DisplayMode::ShadedPolywire,
        DisplayMode::Shaded,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DisplayMode::BoundingBox => "Bounding Box",
            DisplayMode::PerObjectBoundingBox => "Per Object Bounding Box",
            DisplayMode::Polywire => "Polywire",
            DisplayMode::Wireframe => "Wireframe",
            DisplayMode::PointCloud => "Point Cloud",
            DisplayMode::ShadedPolywire => "Shaded Polywire",
            DisplayMode::Shaded => "Shaded",
        }
    }

    pub fn as_index(&self) -> i32 {
        *self as i32
    }

    pub fn from_index(index: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_index() == index)
    }
}

/// One uniform edit applied to every selected node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeEdit {
    Mode(DisplayMode),
    CachePath(String),
    /// Normalized RGB, each channel in [0, 1]
    WireColor([f32; 3]),
}

impl AttributeEdit {
    /// Host attribute this edit writes.
    pub fn attribute(&self) -> &'static str {
        match self {
            AttributeEdit::Mode(_) => scene::ATTR_MODE,
            AttributeEdit::CachePath(_) => scene::ATTR_CACHE_PATH,
            AttributeEdit::WireColor(_) => scene::ATTR_WIRE_COLOR,
        }
    }

    /// Short human label used in status messages.
    pub fn label(&self) -> &'static str {
        match self {
            AttributeEdit::Mode(_) => "view mode",
            AttributeEdit::CachePath(_) => "cache file",
            AttributeEdit::WireColor(_) => "wire color",
        }
    }

    fn value(&self) -> AttributeValue {
        match self {
            AttributeEdit::Mode(mode) => AttributeValue::Integer(mode.as_index()),
            AttributeEdit::CachePath(path) => AttributeValue::String(path.clone()),
            AttributeEdit::WireColor(rgb) => AttributeValue::Color3(*rgb),
        }
    }
}

/// Outcome of the write attempt on one node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeOutcome {
    pub node: ProxyNodeRef,
    pub result: Result<(), String>,
}

/// Aggregate view of an [`ApplyReport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyStatus {
    /// Apply was requested with nothing selected; no writes happened
    NothingSelected,
    /// Every node took the edit
    Applied(usize),
    /// Some nodes took the edit, some refused it
    Partial { applied: usize, failed: usize },
    /// Every node refused the edit
    Failed(usize),
}

/// Per-node outcomes of one bulk apply
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyReport {
    pub outcomes: Vec<NodeOutcome>,
}

impl ApplyReport {
    pub fn status(&self) -> ApplyStatus {
        let total = self.outcomes.len();
        if total == 0 {
            return ApplyStatus::NothingSelected;
        }
        let failed = self.outcomes.iter().filter(|o| o.result.is_err()).count();
        match failed {
            0 => ApplyStatus::Applied(total),
            f if f == total => ApplyStatus::Failed(total),
            f => ApplyStatus::Partial {
                applied: total - f,
                failed: f,
            },
        }
    }
}

/// Apply one edit to every node in the selection.
///
/// An empty selection performs zero host writes and reports
/// [`ApplyStatus::NothingSelected`]; the operation is skipped, not an error.
pub fn apply(host: &mut dyn SceneHost, selection: &Selection, edit: &AttributeEdit) -> ApplyReport {
    if selection.is_empty() {
        debug!("apply {} skipped: nothing selected", edit.attribute());
        return ApplyReport::default();
    }

    let mut outcomes = Vec::with_capacity(selection.len());
    for node in selection.nodes() {
        let result = apply_one(host, node, edit);
        if let Err(reason) = &result {
            warn!("write to '{}' failed: {}", node, reason);
        }
        outcomes.push(NodeOutcome {
            node: node.clone(),
            result,
        });
    }
    debug!(
        "applied {} to {} of {} nodes",
        edit.attribute(),
        outcomes.iter().filter(|o| o.result.is_ok()).count(),
        outcomes.len()
    );
    ApplyReport { outcomes }
}

fn apply_one(host: &mut dyn SceneHost, node: &ProxyNodeRef, edit: &AttributeEdit) -> Result<(), String> {
    match edit {
        // The override flag must be on before the color attribute takes
        // effect; the color write is still attempted when the flag write
        // fails so the node ends up as converged as the host allows.
        AttributeEdit::WireColor(_) => {
            let flag = host.set_attribute(
                node,
                scene::ATTR_OVERRIDE_ENABLED,
                AttributeValue::Boolean(true),
            );
            let color = host.set_attribute(node, edit.attribute(), edit.value());
            flag.and(color)
        }
        _ => host.set_attribute(node, edit.attribute(), edit.value()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    fn selection_of(names: &[&str]) -> Selection {
        let mut selection = Selection::new();
        selection.replace(names.iter().map(|n| ProxyNodeRef::new(*n)).collect());
        selection
    }

    fn standin_host(names: &[&str]) -> MemoryHost {
        let mut host = MemoryHost::new();
        for name in names {
            host.add_standin(name, "/show/old.ass", 0);
        }
        host
    }

    #[test]
    fn test_apply_sets_attribute_on_every_selected_node() {
        let mut host = standin_host(&["aShape", "bShape", "cShape"]);
        let selection = selection_of(&["aShape", "bShape", "cShape"]);

        let report = apply(
            &mut host,
            &selection,
            &AttributeEdit::Mode(DisplayMode::Shaded),
        );

        assert_eq!(report.status(), ApplyStatus::Applied(3));
        for name in ["aShape", "bShape", "cShape"] {
            assert_eq!(
                host.get_attribute(&ProxyNodeRef::new(name), scene::ATTR_MODE),
                Ok(AttributeValue::Integer(6))
            );
        }
    }

    #[test]
    fn test_empty_selection_is_reported_not_written() {
        let mut host = standin_host(&["aShape"]);
        let selection = Selection::new();

        let report = apply(
            &mut host,
            &selection,
            &AttributeEdit::CachePath("/show/new.ass".to_string()),
        );

        assert_eq!(report.status(), ApplyStatus::NothingSelected);
        assert!(host.writes().is_empty());
    }

    #[test]
    fn test_cache_path_apply_writes_dso() {
        let mut host = standin_host(&["aShape"]);
        let selection = selection_of(&["aShape"]);

        apply(
            &mut host,
            &selection,
            &AttributeEdit::CachePath("/show/new.ass".to_string()),
        );

        assert_eq!(
            host.get_attribute(&ProxyNodeRef::new("aShape"), scene::ATTR_CACHE_PATH),
            Ok(AttributeValue::String("/show/new.ass".to_string()))
        );
    }

    #[test]
    fn test_wire_color_enables_override_before_color_write() {
        let mut host = standin_host(&["aShape"]);
        let selection = selection_of(&["aShape"]);

        apply(
            &mut host,
            &selection,
            &AttributeEdit::WireColor([1.0, 0.5, 0.0]),
        );

        let attributes: Vec<&str> = host.writes().iter().map(|w| w.attribute.as_str()).collect();
        assert_eq!(
            attributes,
            vec![scene::ATTR_OVERRIDE_ENABLED, scene::ATTR_WIRE_COLOR]
        );
        assert_eq!(
            host.get_attribute(&ProxyNodeRef::new("aShape"), scene::ATTR_OVERRIDE_ENABLED),
            Ok(AttributeValue::Boolean(true))
        );
    }

    #[test]
    fn test_one_bad_node_does_not_stop_the_fan_out() {
        let mut host = standin_host(&["aShape", "bShape", "cShape"]);
        host.refuse_writes_to("bShape");
        let selection = selection_of(&["aShape", "bShape", "cShape"]);

        let report = apply(
            &mut host,
            &selection,
            &AttributeEdit::Mode(DisplayMode::PointCloud),
        );

        assert_eq!(
            report.status(),
            ApplyStatus::Partial {
                applied: 2,
                failed: 1
            }
        );
        // The node after the failing one was still written
        assert_eq!(
            host.get_attribute(&ProxyNodeRef::new("cShape"), scene::ATTR_MODE),
            Ok(AttributeValue::Integer(4))
        );
    }

    #[test]
    fn test_all_nodes_failing_reports_total_failure() {
        let mut host = standin_host(&["aShape", "bShape"]);
        host.refuse_writes_to("aShape");
        host.refuse_writes_to("bShape");
        let selection = selection_of(&["aShape", "bShape"]);

        let report = apply(
            &mut host,
            &selection,
            &AttributeEdit::Mode(DisplayMode::Wireframe),
        );

        assert_eq!(report.status(), ApplyStatus::Failed(2));
    }

    #[test]
    fn test_display_mode_index_round_trip() {
        for mode in DisplayMode::ALL {
            assert_eq!(DisplayMode::from_index(mode.as_index()), Some(mode));
        }
        assert_eq!(DisplayMode::from_index(7), None);
    }
}
