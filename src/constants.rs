//! Application-wide constants and default values
//!
//! Centralized location for all hard-coded values to improve maintainability

/// Main window geometry
pub mod window {
    /// Default window size
    pub const DEFAULT_SIZE: [f32; 2] = [505.0, 305.0];

    /// Minimum window size
    pub const MIN_SIZE: [f32; 2] = [420.0, 260.0];
}

/// Names the host scene graph uses for the monitored standin type
pub mod scene {
    /// Node type enumerated by the directory
    pub const STANDIN_NODE_TYPE: &str = "aiStandIn";

    /// Trailing decoration stripped from node names for display
    pub const SHAPE_SUFFIX: &str = "Shape";

    /// Display mode attribute (integer enum)
    pub const ATTR_MODE: &str = "mode";

    /// Referenced cache file path attribute
    pub const ATTR_CACHE_PATH: &str = "dso";

    /// Flag enabling per-node drawing overrides; must be set before the
    /// wire color attribute takes effect
    pub const ATTR_OVERRIDE_ENABLED: &str = "overrideEnabled";

    /// Override wire color attribute (normalized RGB)
    pub const ATTR_WIRE_COLOR: &str = "overrideColorRGB";
}

/// Status bar behavior
pub mod status {
    /// How long a transient status message stays visible (milliseconds)
    pub const MESSAGE_TIMEOUT_MS: u64 = 4000;
}

/// UI spacing and sizing constants
pub mod ui {
    /// Default width of the directory side panel
    pub const DIRECTORY_PANEL_WIDTH: f32 = 165.0;

    /// Minimum width of the directory side panel
    pub const DIRECTORY_PANEL_MIN_WIDTH: f32 = 150.0;

    /// Row height for the standin list
    pub const LIST_ROW_HEIGHT: f32 = 18.0;

    /// Size of the small Open/Set buttons next to the path field
    pub const PATH_BUTTON_SIZE: [f32; 2] = [35.0, 18.0];

    /// Maximum width of the view mode selector
    pub const COMBO_WIDTH: f32 = 170.0;
}
