//! Editor shell: application state, command dispatch and window layout
//!
//! Owns the host handle, the directory, the selection and the pending edit
//! values. Panels report host-touching actions as [`PanelCommand`]s; the
//! shell dispatches each one into a single core call and turns the result
//! into a status bar message.

pub mod panels;
pub mod status;

use log::info;

use crate::apply::{self, ApplyReport, ApplyStatus, AttributeEdit, DisplayMode};
use crate::constants;
use crate::directory::NodeDirectory;
use crate::host::SceneHost;
use crate::selection::Selection;
use crate::theme::Colors;

use panels::{AttributePanel, DirectoryPanel, PanelCommand};
use status::{StatusBar, StatusKind};

/// Top-level application state for the standin manager window
pub struct StandinManagerApp {
    host: Box<dyn SceneHost>,
    directory: NodeDirectory,
    selection: Selection,
    filter_text: String,
    view_mode: DisplayMode,
    cache_path: String,
    wire_color: [u8; 3],
    directory_panel: DirectoryPanel,
    status: StatusBar,
    colors: Colors,
}

impl StandinManagerApp {
    /// Create the app and load the directory from the host.
    pub fn new(host: Box<dyn SceneHost>) -> Self {
        let mut app = Self {
            host,
            directory: NodeDirectory::new(),
            selection: Selection::new(),
            filter_text: String::new(),
            view_mode: DisplayMode::BoundingBox,
            cache_path: String::new(),
            wire_color: [128, 128, 128],
            directory_panel: DirectoryPanel::new(),
            status: StatusBar::new(),
            colors: Colors::default(),
        };
        app.reload();
        app
    }

    /// Window title carrying the crate version.
    pub fn window_title() -> String {
        format!("Standin Manager v{}", env!("CARGO_PKG_VERSION"))
    }

    fn dispatch(&mut self, command: PanelCommand) {
        match command {
            PanelCommand::Reload => self.reload(),
            PanelCommand::BrowseCachePath => self.browse_cache_path(),
            PanelCommand::Apply(edit) => self.apply_edit(edit),
        }
    }

    fn reload(&mut self) {
        self.directory.refresh(self.host.as_ref());
        self.selection.retain_known(&self.directory);
        info!("loaded {} standin nodes", self.directory.len());
    }

    fn apply_edit(&mut self, edit: AttributeEdit) {
        let report = apply::apply(self.host.as_mut(), &self.selection, &edit);
        self.report_status(&edit, &report);
    }

    fn report_status(&mut self, edit: &AttributeEdit, report: &ApplyReport) {
        match report.status() {
            ApplyStatus::NothingSelected => {
                self.status
                    .show_message(StatusKind::Error, "Nothing selected");
            }
            ApplyStatus::Applied(_) => {
                self.status.show_message(
                    StatusKind::Success,
                    format!("Changed {} successfully!", edit.label()),
                );
            }
            ApplyStatus::Partial { applied, failed } => {
                self.status.show_message(
                    StatusKind::Partial,
                    format!(
                        "Changed {} on {} of {} nodes",
                        edit.label(),
                        applied,
                        applied + failed
                    ),
                );
            }
            ApplyStatus::Failed(total) => {
                self.status.show_message(
                    StatusKind::Error,
                    format!("Failed to change {} on {} nodes", edit.label(), total),
                );
            }
        }
    }

    fn browse_cache_path(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Scene caches", &["ass", "ass.gz", "usd", "abc"])
            .add_filter("All Files", &["*"])
            .set_title("Open")
            .pick_file()
        {
            self.cache_path = path.display().to_string();
        }
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        let (fill, message) = match self.status.current() {
            Some((text, kind)) => (kind.background(&self.colors), Some(text.to_string())),
            None => (self.colors.panel_background, None),
        };

        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::default()
                    .fill(fill)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let text = message.unwrap_or_default();
                ui.label(egui::RichText::new(text).color(self.colors.status_text));
            });

        // Keep repainting while a message is up so it clears without input
        if let Some(remaining) = self.status.remaining() {
            ctx.request_repaint_after(remaining);
        }
    }
}

impl eframe::App for StandinManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands = Vec::new();

        self.render_status_bar(ctx);

        egui::SidePanel::left("directory_panel")
            .default_width(constants::ui::DIRECTORY_PANEL_WIDTH)
            .min_width(constants::ui::DIRECTORY_PANEL_MIN_WIDTH)
            .show(ctx, |ui| {
                commands.extend(self.directory_panel.render(
                    ui,
                    &self.directory,
                    &mut self.selection,
                    &mut self.filter_text,
                ));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(format!(
                "{} of {} standins selected",
                self.selection.len(),
                self.directory.len()
            ));
            ui.separator();
            commands.extend(AttributePanel::build_interface(
                ui,
                &mut self.view_mode,
                &mut self.cache_path,
                &mut self.wire_color,
            ));
        });

        for command in commands {
            self.dispatch(command);
        }
    }
}
