//! Centralized theme and styling constants for the standin manager
//!
//! Single source of truth for the colors used throughout the application.

use egui::Color32;

/// Color palette for the standin manager
pub struct Colors {
    // Status bar backgrounds
    pub status_success: Color32,
    pub status_partial: Color32,
    pub status_error: Color32,
    pub status_text: Color32,

    // Panel colors
    pub panel_background: Color32,
}

impl Colors {
    /// Get the default color palette
    pub fn default() -> Self {
        Self {
            // Status bar backgrounds
            status_success: Color32::from_rgb(32, 117, 39),
            status_partial: Color32::from_rgb(150, 110, 30),
            status_error: Color32::from_rgb(135, 35, 35),
            status_text: Color32::from_rgb(235, 235, 235),

            // Panel colors
            panel_background: Color32::from_rgb(28, 28, 28),
        }
    }
}
