//! Standin manager core library
//!
//! Exposes the node directory, selection and bulk-apply core with clean
//! separation from the egui shell in [`editor`].

pub mod apply;
pub mod color;
pub mod constants;
pub mod directory;
pub mod editor;
pub mod host;
pub mod selection;
pub mod theme;


// Re-export commonly used types
pub use apply::{apply, ApplyReport, ApplyStatus, AttributeEdit, DisplayMode, NodeOutcome};
pub use directory::{DirectoryEntry, NodeDirectory};
pub use host::{AttributeValue, MemoryHost, ProxyNodeRef, SceneHost};
pub use selection::Selection;
