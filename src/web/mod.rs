//! HTTP front-end: the dashboard page plus one JSON endpoint per chart.
//!
//! Each chart endpoint takes exactly the controls that chart depends on, so
//! the browser re-fetches only what a control change invalidates.

mod error;
mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::color::ColorMap;
use crate::controls::Controls;
use crate::data::LaunchDataset;

pub use error::{Result, ServerError};

/// Shared across all sessions; read-only after startup.
pub struct AppState {
    pub dataset: Arc<LaunchDataset>,
    pub controls: Controls,
    pub site_colors: ColorMap,
    pub booster_colors: ColorMap,
}

impl AppState {
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        Self {
            controls: Controls::for_dataset(&dataset),
            site_colors: ColorMap::new(&dataset.sites),
            booster_colors: ColorMap::new(&dataset.booster_categories),
            dataset,
        }
    }
}

/// Build the dashboard router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/controls", get(handlers::controls))
        .route("/api/pie", get(handlers::pie))
        .route("/api/scatter", get(handlers::scatter))
        .fallback(handlers::not_found)
        .with_state(state)
}
