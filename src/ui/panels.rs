use eframe::egui::{self, Color32, RichText, Ui};

use crate::app::LaunchDashApp;
use crate::controls::{site_options, SLIDER_MARKS, SLIDER_MAX, SLIDER_MIN};
use crate::data::{filter_in_range, PayloadRange};
use crate::state::{ControlChange, DashboardState};

// ---------------------------------------------------------------------------
// Left side panel – control widgets
// ---------------------------------------------------------------------------

/// Render the left control panel: site dropdown and payload range.
pub fn side_panel(ui: &mut Ui, dashboard: &mut DashboardState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Launch site ----
    ui.strong("Launch Site");
    let options = site_options(dashboard.dataset());
    let current = dashboard.site().clone();
    let current_label = options
        .iter()
        .find(|o| o.value == current)
        .map(|o| o.label.clone())
        .unwrap_or_else(|| current.to_string());

    let mut picked = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(current_label)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for opt in &options {
                if ui.selectable_label(opt.value == current, &opt.label).clicked() {
                    picked = Some(opt.value.clone());
                }
            }
        });
    if let Some(site) = picked.filter(|s| *s != current) {
        dashboard.apply(ControlChange::Site(site));
    }

    ui.add_space(8.0);
    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (Kg)");
    let PayloadRange { mut low, mut high } = dashboard.payload();
    let mut changed = false;
    changed |= ui
        .add(egui::Slider::new(&mut low, SLIDER_MIN..=SLIDER_MAX).text("min"))
        .changed();
    changed |= ui
        .add(egui::Slider::new(&mut high, SLIDER_MIN..=SLIDER_MAX).text("max"))
        .changed();

    let marks: Vec<&str> = SLIDER_MARKS.iter().map(|&(_, label)| label).collect();
    ui.label(RichText::new(marks.join("  ·  ")).small().weak());

    if changed {
        dashboard.apply(ControlChange::PayloadRange(PayloadRange::new(low, high)));
    }
    if ui.button("Reset range").clicked() {
        dashboard.apply(ControlChange::ResetPayloadRange);
    }
    if dashboard.payload().is_inverted() {
        ui.label(RichText::new("min is above max: nothing matches").color(Color32::YELLOW));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, app: &mut LaunchDashApp) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(app);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(dashboard) = &app.dashboard {
            let ds = dashboard.dataset();
            let visible = filter_in_range(ds, dashboard.site(), dashboard.payload()).len();
            ui.label(format!("{} launches loaded, {} shown", ds.len(), visible));
        }

        if let Some(msg) = &app.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(app: &mut LaunchDashApp) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => app.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                app.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
