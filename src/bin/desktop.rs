use eframe::egui;
use launch_dash::app::LaunchDashApp;
use launch_dash::config::ServerConfig;
use launch_dash::data::loader;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Start on the default dataset when it is present; File → Open… otherwise.
    let config = ServerConfig::from_env();
    let app = match loader::load_file(&config.data_path) {
        Ok(dataset) => LaunchDashApp::with_dataset(dataset),
        Err(e) => {
            log::warn!("No dataset at startup: {e:#}");
            LaunchDashApp::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
