//! Attribute panel: view mode, cache file path and wire color editors
//!
//! Each widget edits local UI state; pressing its apply control emits a
//! [`PanelCommand::Apply`] carrying the finished edit. Picking a view mode
//! in the combo applies immediately, matching the host tool's combo
//! behavior.

use egui::Ui;

use crate::apply::{AttributeEdit, DisplayMode};
use crate::color;
use crate::constants::ui as ui_constants;
use crate::editor::panels::PanelCommand;

/// Attribute panel renderer
pub struct AttributePanel;

impl AttributePanel {
    /// Build the attribute editing interface.
    pub fn build_interface(
        ui: &mut Ui,
        view_mode: &mut DisplayMode,
        cache_path: &mut String,
        wire_color: &mut [u8; 3],
    ) -> Vec<PanelCommand> {
        let mut commands = Vec::new();

        // Cache file path row
        ui.horizontal(|ui| {
            ui.label("File");
            ui.add(
                egui::TextEdit::singleline(cache_path)
                    .hint_text("Cache file path...")
                    .desired_width(ui.available_width() - 90.0),
            );
            if ui
                .add_sized(ui_constants::PATH_BUTTON_SIZE, egui::Button::new("Open"))
                .clicked()
            {
                commands.push(PanelCommand::BrowseCachePath);
            }
            if ui
                .add_sized(ui_constants::PATH_BUTTON_SIZE, egui::Button::new("Set"))
                .clicked()
            {
                commands.push(PanelCommand::Apply(AttributeEdit::CachePath(
                    cache_path.clone(),
                )));
            }
        });

        ui.add_space(6.0);

        // View mode row; selecting an entry applies it
        ui.horizontal(|ui| {
            ui.label("View Mode");
            egui::ComboBox::from_id_salt("view_mode")
                .width(ui_constants::COMBO_WIDTH)
                .selected_text(view_mode.display_name())
                .show_ui(ui, |ui| {
                    for mode in DisplayMode::ALL {
                        if ui
                            .selectable_value(view_mode, mode, mode.display_name())
                            .clicked()
                        {
                            commands.push(PanelCommand::Apply(AttributeEdit::Mode(mode)));
                        }
                    }
                });
        });

        ui.add_space(6.0);

        // Wire color row; the picker is 8-bit, the host gets floats
        ui.horizontal(|ui| {
            ui.label("Wire Color");
            egui::color_picker::color_edit_button_srgb(ui, wire_color);

            let rgb = color::normalized(*wire_color);
            ui.label(format!(
                "{:.3} {:.3} {:.3}",
                color::display_channel(rgb[0]),
                color::display_channel(rgb[1]),
                color::display_channel(rgb[2]),
            ));

            if ui.button("Apply").clicked() {
                commands.push(PanelCommand::Apply(AttributeEdit::WireColor(rgb)));
            }
        });

        commands
    }
}
