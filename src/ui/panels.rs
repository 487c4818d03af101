use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::ViewMode;
use crate::state::{AppState, TOP_N_RANGE};

pub const TITLE: &str = "Visualizing the Academy Awards";
pub const DESCRIPTION: &str = "Explore the history of Oscar nominations and wins.";

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Title, description and dataset status line.
pub fn header(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading(TITLE);
    ui.label(DESCRIPTION);

    ui.horizontal(|ui: &mut Ui| {
        if let Some(ds) = &state.dataset {
            let matched = state.artifacts.as_ref().map_or(0, |a| a.matched_rows);
            ui.label(format!(
                "{} nominations loaded from {} ({}), {matched} matching",
                ds.len(),
                state.source_path().display(),
                ds.years
            ));
        }
        if ui.small_button("Reload data").clicked() {
            state.reload();
        }
    });
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Left side panel – control widgets
// ---------------------------------------------------------------------------

/// Render the control widgets. Edits land in `state.controls`; the caller
/// re-runs the pipeline afterwards.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    let Some(dataset) = state.dataset.clone() else {
        ui.label("No dataset loaded.");
        return;
    };
    let controls = &mut state.controls;

    // ---- View mode ----
    ui.strong("Select view:");
    for mode in [ViewMode::AllNominations, ViewMode::WinnersOnly] {
        ui.radio_value(&mut controls.view_mode, mode, mode.label());
    }
    ui.separator();

    // ---- Year range ----
    ui.strong("Select Year Range");
    let years = dataset.years.min..=dataset.years.max;
    let low_changed = ui
        .add(egui::Slider::new(&mut controls.year_low, years.clone()).text("from"))
        .changed();
    let high_changed = ui
        .add(egui::Slider::new(&mut controls.year_high, years).text("to"))
        .changed();
    if controls.year_low > controls.year_high {
        // Dragging one handle past the other pushes it along.
        if low_changed {
            controls.year_high = controls.year_low;
        } else if high_changed {
            controls.year_low = controls.year_high;
        }
    }
    ui.separator();

    // ---- Category ----
    ui.strong("Select Category");
    egui::ComboBox::from_id_salt("category")
        .selected_text(controls.category.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for category in &dataset.categories {
                ui.selectable_value(&mut controls.category, category.clone(), category);
            }
        });
    ui.separator();

    // ---- Top N ----
    ui.strong("Top N most nominated");
    ui.add(egui::Slider::new(&mut controls.top_n, TOP_N_RANGE));
    ui.separator();

    ui.checkbox(&mut controls.show_raw, "Show raw data");
}

// ---------------------------------------------------------------------------
// Fatal load error
// ---------------------------------------------------------------------------

/// Shown instead of the dashboard when the dataset could not be loaded.
pub fn load_error(ui: &mut Ui, state: &mut AppState) {
    let Some(err) = &state.load_error else {
        return;
    };
    let message = err.to_string();
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(40.0);
        ui.heading("Dataset unavailable");
        ui.label(RichText::new(message).color(Color32::RED));
        ui.add_space(8.0);
        if ui.button("Reload data").clicked() {
            state.reload();
        }
    });
}
