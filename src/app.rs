use eframe::egui::{self, ScrollArea, Ui};

use crate::data::source::DataSource;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AwardsExplorerApp {
    pub state: AppState,
}

impl AwardsExplorerApp {
    pub fn new(source: DataSource) -> Self {
        Self {
            state: AppState::new(source),
        }
    }
}

impl Default for AwardsExplorerApp {
    fn default() -> Self {
        Self::new(DataSource::default())
    }
}

impl eframe::App for AwardsExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and status ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui, &mut self.state);
        });

        if self.state.load_error.is_some() {
            egui::CentralPanel::default().show(ctx, |ui| {
                panels::load_error(ui, &mut self.state);
            });
            return;
        }

        // ---- Left side panel: controls ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // Any control edit above re-runs the pipeline before drawing.
        self.state.refresh();

        // ---- Central panel: chart and optional raw table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(artifacts) = &self.state.artifacts else {
                return;
            };
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    plot::nominee_chart(ui, &artifacts.chart);
                    if let Some(raw) = &artifacts.table {
                        ui.separator();
                        table::raw_table(ui, raw);
                    }
                });
        });
    }
}
