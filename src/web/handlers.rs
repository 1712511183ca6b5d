use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::Uri,
    response::Html,
    Json,
};
use serde::Deserialize;

use super::error::{Result, ServerError};
use super::AppState;
use crate::controls::Controls;
use crate::data::{PayloadRange, SiteSelector};
use crate::figure::{pie_figure, scatter_figure, PieFigure, ScatterFigure};

const INDEX_HTML: &str = include_str!("../../assets/index.html");

#[derive(Debug, Deserialize)]
pub struct PieQuery {
    #[serde(default)]
    site: SiteSelector,
}

#[derive(Debug, Deserialize)]
pub struct ScatterQuery {
    #[serde(default)]
    site: SiteSelector,
    low: Option<f64>,
    high: Option<f64>,
}

/// GET / - Dashboard page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/controls - Dropdown options, slider bounds and defaults
pub async fn controls(State(state): State<Arc<AppState>>) -> Json<Controls> {
    Json(state.controls.clone())
}

/// GET /api/pie?site= - Pie figure for the selected site
pub async fn pie(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<PieQuery>, QueryRejection>,
) -> Result<Json<PieFigure>> {
    let Query(query) = query?;
    log::debug!("pie site={}", query.site);
    Ok(Json(pie_figure(&state.dataset, &query.site, &state.site_colors)))
}

/// GET /api/scatter?site=&low=&high= - Scatter figure for site and payload range
///
/// A missing bound falls back to the dataset's min/max payload.
pub async fn scatter(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<ScatterQuery>, QueryRejection>,
) -> Result<Json<ScatterFigure>> {
    let Query(query) = query?;
    let full = PayloadRange::full(&state.dataset);
    let range = PayloadRange::new(query.low.unwrap_or(full.low), query.high.unwrap_or(full.high));
    if !range.low.is_finite() || !range.high.is_finite() {
        return Err(ServerError::BadRequest(format!(
            "payload bounds must be finite, got [{}, {}]",
            range.low, range.high
        )));
    }

    log::debug!("scatter site={} payload=[{}, {}]", query.site, range.low, range.high);
    Ok(Json(scatter_figure(
        &state.dataset,
        &query.site,
        range,
        &state.booster_colors,
    )))
}

pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}
