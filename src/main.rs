//! Standin Manager - bulk attribute editor for render standin proxies
//!
//! Lists every standin node in the scene, filters by name, and pushes
//! display mode / cache path / wire color edits onto the whole selection
//! at once.

use eframe::egui;

use standin_manager::constants;
use standin_manager::editor::StandinManagerApp;
use standin_manager::host::MemoryHost;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(constants::window::DEFAULT_SIZE)
            .with_min_inner_size(constants::window::MIN_SIZE),
        ..Default::default()
    };

    // Standalone builds run against the built-in sample scene; a host
    // integration supplies its own SceneHost at the same seam.
    let host = MemoryHost::sample_scene();

    eframe::run_native(
        &StandinManagerApp::window_title(),
        options,
        Box::new(|_cc| Ok(Box::new(StandinManagerApp::new(Box::new(host))))),
    )
}
