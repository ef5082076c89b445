//! Panel implementations for the standin manager window
//!
//! Panels own widget state only. Anything that touches the host comes back
//! to the editor as a [`PanelCommand`] so every UI action maps to exactly
//! one core call plus a status report.

pub mod attribute;
pub mod directory;

pub use attribute::AttributePanel;
pub use directory::DirectoryPanel;

use crate::apply::AttributeEdit;

/// Host-touching actions a panel hands back to the editor for dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum PanelCommand {
    /// Rebuild the directory from the host and prune the selection
    Reload,
    /// Open the native file dialog for the cache path field
    BrowseCachePath,
    /// Apply one edit to the current selection
    Apply(AttributeEdit),
}
