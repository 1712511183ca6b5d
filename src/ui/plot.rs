use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Stroke, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, Plot, PlotPoints, Points, Polygon};

use super::color32;
use crate::data::filter_in_range;
use crate::figure::{PieFigure, ScatterFigure};
use crate::state::DashboardState;

/// Arc resolution: segments per full turn.
const PIE_SEGMENTS: f64 = 128.0;

const COLUMN_TITLES: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "Outcome",
    "Booster Version Category",
];

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Wedge outline from `start` to `end` radians, centred on the origin.
fn wedge(start: f64, end: f64) -> Vec<[f64; 2]> {
    let steps = (((end - start) / TAU) * PIE_SEGMENTS).ceil().max(1.0) as usize;
    std::iter::once([0.0, 0.0])
        .chain((0..=steps).map(|i| {
            let a = start + (end - start) * i as f64 / steps as f64;
            [a.cos(), a.sin()]
        }))
        .collect()
}

/// Render the pie: slices run clockwise from twelve o'clock.
pub fn pie_chart(ui: &mut Ui, figure: &PieFigure) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&figure.title);
    });

    let total = figure.total();
    if total == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches match the selection");
        });
        return;
    }

    Plot::new("success_pie_chart")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            let mut angle = FRAC_PI_2;
            for slice in figure.slices.iter().filter(|s| s.value > 0) {
                let sweep = TAU * slice.value as f64 / total as f64;
                let pct = 100.0 * slice.value as f64 / total as f64;
                plot_ui.polygon(
                    Polygon::new(PlotPoints::new(wedge(angle - sweep, angle)))
                        .fill_color(color32(slice.color))
                        .stroke(Stroke::new(1.0, color32(slice.color)))
                        .name(format!("{} ({}, {pct:.1}%)", slice.label, slice.value)),
                );
                angle -= sweep;
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Render payload vs outcome, one coloured series per booster category.
pub fn scatter_chart(ui: &mut Ui, figure: &ScatterFigure) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&figure.title);
    });

    Plot::new("success_payload_scatter_chart")
        .legend(Legend::default())
        .x_axis_label(figure.x_label)
        .y_axis_label(figure.y_label)
        .include_y(-0.25)
        .include_y(1.25)
        .include_x(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &figure.series {
                let points: PlotPoints = series
                    .points
                    .iter()
                    .map(|p| [p.payload_mass, f64::from(p.class)])
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&series.name)
                        .color(color32(series.color))
                        .radius(4.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Launch table (bottom panel)
// ---------------------------------------------------------------------------

/// Table of the launches passing the current site and payload filters.
pub fn launch_table(ui: &mut Ui, dashboard: &DashboardState) {
    let records = filter_in_range(dashboard.dataset(), dashboard.site(), dashboard.payload());

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in COLUMN_TITLES {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, records.len(), |mut row| {
                let rec = records[row.index()];
                row.col(|ui| {
                    ui.label(&rec.site);
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", rec.payload_mass));
                });
                row.col(|ui| {
                    ui.label(rec.outcome.label());
                });
                row.col(|ui| {
                    ui.label(&rec.booster_category);
                });
            });
        });
}
