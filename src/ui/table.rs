use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::chart::TableArtifact;

const ROW_HEIGHT: f32 = 18.0;

/// Render the raw filtered rows.
pub fn raw_table(ui: &mut Ui, table: &TableArtifact) {
    ui.strong(format!("Raw data ({} rows)", table.rows.len()));

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(60.0), table.columns.len() - 1)
        .column(Column::remainder())
        .max_scroll_height(320.0)
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for name in table.columns {
                header.col(|ui| {
                    ui.strong(*name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, table.rows.len(), |mut row| {
                let record = &table.rows[row.index()];
                for cell in record {
                    row.col(|ui| {
                        ui.label(cell.as_str());
                    });
                }
            });
        });
}
