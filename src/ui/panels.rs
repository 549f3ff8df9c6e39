use std::path::Path;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader;
use crate::state::AppState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Static commentary
// ---------------------------------------------------------------------------

const PM25_ANALYSIS: &str = "Analysis: across the observed period the yearly \
PM2.5 average peaks in 2017. PM2.5 refers to very fine particles with a \
diameter below 2.5 micrometres, a primary driver of local air quality, so \
the PM2.5 level of a year is a good proxy for how clean its air was.";

const SHARE_ANALYSIS: &str = "Analysis: of the six measured components, CO \
makes up by far the largest share of the air at station Guanyuan, well ahead \
of every other component. SO2 contributes the smallest share.";

// ---------------------------------------------------------------------------
// Central panel – the dashboard itself
// ---------------------------------------------------------------------------

/// Render the two chart sections with their captions.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new("Air Quality Analysis").size(28.0));
    });
    ui.separator();

    if state.summaries.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No dataset loaded  (File → Open…)");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.add_space(8.0);
            ui.strong("PM2.5 distribution from 2013 until 2017");
            ui.separator();
            plot::yearly_line_chart(ui, state);
            ui.add_space(4.0);
            ui.label(PM25_ANALYSIS);

            ui.add_space(16.0);
            ui.strong("Air Component Distribution in Station Guanyuan");
            ui.separator();
            plot::feature_pie_chart(ui, state);
            ui.add_space(4.0);
            ui.label(SHARE_ANALYSIS);
            ui.add_space(8.0);
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload default data").clicked() {
                load_into_state(Path::new(loader::DEFAULT_DATA_PATH), state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records across {} years",
                ds.len(),
                ds.years.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open air quality data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        load_into_state(&path, state);
    }
}

/// Load a dataset file and ingest it into the app state.
pub fn load_into_state(path: &Path, state: &mut AppState) {
    state.loading = true;
    match loader::load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} records spanning years {:?}",
                dataset.len(),
                dataset.years
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load data: {e:#}");
            state.status_message = Some(format!("Failed to load data: {e:#}"));
            state.loading = false;
        }
    }
}
