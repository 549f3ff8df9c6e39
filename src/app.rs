use std::path::Path;

use eframe::egui;

use crate::data::loader;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AirDashApp {
    pub state: AppState,
}

impl Default for AirDashApp {
    fn default() -> Self {
        let mut state = AppState::default();
        // The cleaned dataset ships at a fixed path; try it once at startup
        // and leave the error in the status bar if it is absent.
        panels::load_into_state(Path::new(loader::DEFAULT_DATA_PATH), &mut state);
        Self { state }
    }
}

impl eframe::App for AirDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: charts and commentary ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::dashboard(ui, &self.state);
        });
    }
}
