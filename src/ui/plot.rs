use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot, uniform_grid_spacer};

use crate::chart::{CHART_SIZE, ChartArtifact};

// ---------------------------------------------------------------------------
// Nominee bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the horizontal bar chart. Bar `i` sits at y = `i`, so the artifact's
/// bottom-to-top order is kept and the y axis shows nominee names.
pub fn nominee_chart(ui: &mut Ui, chart: &ChartArtifact) {
    ui.heading(&chart.title);
    if chart.is_empty() {
        ui.label("No nominations match the current selection.");
    }

    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            Bar::new(i as f64, bar.count as f64)
                .name(&bar.name)
                .fill(bar.color)
        })
        .collect();

    let hovers: Vec<String> = chart
        .bars
        .iter()
        .map(|bar| bar.hover_text(chart.value_label))
        .collect();
    let names: Vec<String> = chart.bars.iter().map(|bar| bar.name.clone()).collect();
    let top = chart.bars.len().max(1) as f64 - 0.5;

    let bar_chart = BarChart::new(bars)
        .horizontal()
        .width(0.7)
        .element_formatter(Box::new(move |bar: &Bar, _: &BarChart| {
            hovers
                .get(bar.argument.round() as usize)
                .cloned()
                .unwrap_or_default()
        }));

    Plot::new("nominee_chart")
        .width(CHART_SIZE[0])
        .height(CHART_SIZE[1])
        .x_axis_label(chart.value_label)
        .y_axis_label(chart.category_label)
        .y_axis_formatter(move |mark, _range| {
            let v = mark.value;
            if v < 0.0 || v.fract() != 0.0 {
                return String::new();
            }
            names.get(v as usize).cloned().unwrap_or_default()
        })
        .y_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .include_x(0.0)
        .include_x(1.0)
        .include_y(-0.5)
        .include_y(top)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(bar_chart);
        });
}
