//! Directory panel: search box, standin list and selection buttons
//!
//! The list supports extended selection: plain click selects one row,
//! ctrl/cmd toggles a row, shift selects the range from the last clicked
//! row. Selection edits happen in place; only Reload goes back to the
//! editor as a command.

use egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::constants::ui as ui_constants;
use crate::directory::{DirectoryEntry, NodeDirectory};
use crate::editor::panels::PanelCommand;
use crate::selection::Selection;

/// Directory panel renderer
pub struct DirectoryPanel {
    /// Row index of the last plain/toggle click, anchor for shift ranges
    anchor: Option<usize>,
}

impl DirectoryPanel {
    pub fn new() -> Self {
        Self { anchor: None }
    }

    pub fn render(
        &mut self,
        ui: &mut Ui,
        directory: &NodeDirectory,
        selection: &mut Selection,
        filter_text: &mut String,
    ) -> Vec<PanelCommand> {
        let mut commands = Vec::new();

        // Search box; input restricted to the characters node names use
        let response = ui.add(
            egui::TextEdit::singleline(filter_text)
                .hint_text("Filter")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            filter_text.retain(|c| c.is_ascii_alphanumeric() || c == '_');
        }

        let visible = directory.filter(filter_text);
        let modifiers = ui.input(|i| i.modifiers);

        ui.add_space(4.0);

        // The table scrolls internally; keep room for the buttons below
        let list_height = (ui.available_height() - 60.0).max(ui_constants::LIST_ROW_HEIGHT);
        TableBuilder::new(ui)
            .striped(true)
            .sense(egui::Sense::click())
            .column(Column::remainder())
            .min_scrolled_height(ui_constants::LIST_ROW_HEIGHT)
            .max_scroll_height(list_height)
            .body(|body| {
                body.rows(ui_constants::LIST_ROW_HEIGHT, visible.len(), |mut row| {
                    let index = row.index();
                    let entry = &visible[index];
                    row.set_selected(selection.contains(&entry.node));
                    row.col(|ui| {
                        ui.label(&entry.label);
                    });
                    if row.response().clicked() {
                        self.handle_click(
                            selection,
                            &visible,
                            index,
                            modifiers.ctrl || modifiers.command,
                            modifiers.shift,
                        );
                    }
                });
            });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Select All").clicked() {
                selection.select_all(&visible);
            }
            if ui.button("Select None").clicked() {
                selection.clear();
            }
        });
        if ui.button("Reload").clicked() {
            commands.push(PanelCommand::Reload);
        }

        commands
    }

    fn handle_click(
        &mut self,
        selection: &mut Selection,
        visible: &[DirectoryEntry],
        index: usize,
        toggle: bool,
        range: bool,
    ) {
        if toggle {
            selection.toggle(&visible[index].node);
            self.anchor = Some(index);
        } else if range {
            let anchor = self.anchor.unwrap_or(index).min(visible.len() - 1);
            let (lo, hi) = (anchor.min(index), anchor.max(index));
            selection.replace(visible[lo..=hi].iter().map(|e| e.node.clone()).collect());
        } else {
            selection.select_only(visible[index].node.clone());
            self.anchor = Some(index);
        }
    }
}
