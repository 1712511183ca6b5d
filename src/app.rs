use std::sync::Arc;

use eframe::egui;

use crate::data::LaunchDataset;
use crate::state::DashboardState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct LaunchDashApp {
    /// Dashboard state (None until a dataset is loaded).
    pub dashboard: Option<DashboardState>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl LaunchDashApp {
    pub fn with_dataset(dataset: LaunchDataset) -> Self {
        let mut app = Self::default();
        app.set_dataset(dataset);
        app
    }

    /// Replace the dataset; controls go back to their defaults.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.dashboard = Some(DashboardState::new(Arc::new(dataset)));
        self.status_message = None;
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, self);
        });

        let Some(dashboard) = self.dashboard.as_mut() else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open a launch dataset  (File → Open…)");
                });
            });
            return;
        };

        // ---- Left side panel: site + payload controls ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, dashboard);
            });

        // ---- Bottom panel: filtered launches ----
        egui::TopBottomPanel::bottom("launch_table")
            .resizable(true)
            .default_height(200.0)
            .show(ctx, |ui| {
                plot::launch_table(ui, dashboard);
            });

        // ---- Central panel: pie + scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                plot::pie_chart(&mut cols[0], dashboard.pie());
                plot::scatter_chart(&mut cols[1], dashboard.scatter());
            });
        });
    }
}
