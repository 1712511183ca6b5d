use serde::Serialize;

use super::filter::{filter_in_range, PayloadRange, SiteSelector};
use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Chart-ready shapes
// ---------------------------------------------------------------------------

/// One pie slice: category label and its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

/// One scatter point: payload (x), outcome class (y), booster category (colour key).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass: f64,
    pub class: u8,
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// Pie shaping
// ---------------------------------------------------------------------------

/// Counts for the pie chart.
///
/// * `All` – one slice per site (dataset order) whose value is the number of
///   successful launches from that site. This sums the class column, so a site
///   with only failures still gets a zero-valued slice.
/// * `Site(s)` – `Success` then `Failure` counts for that site; zero counts are
///   left out, so an unknown site produces no slices.
///
/// The payload range does not affect the pie.
pub fn shape_for_pie(dataset: &LaunchDataset, site: &SiteSelector) -> Vec<PieSlice> {
    match site {
        SiteSelector::All => dataset
            .sites
            .iter()
            .map(|s| PieSlice {
                label: s.clone(),
                value: dataset
                    .records
                    .iter()
                    .filter(|r| &r.site == s && r.outcome.is_success())
                    .count(),
            })
            .collect(),
        SiteSelector::Site(_) => {
            let records = filter_in_range(
                dataset,
                site,
                PayloadRange::new(f64::NEG_INFINITY, f64::INFINITY),
            );
            [Outcome::Success, Outcome::Failure]
                .into_iter()
                .map(|outcome| PieSlice {
                    label: outcome.label().to_string(),
                    value: records.iter().filter(|r| r.outcome == outcome).count(),
                })
                .filter(|slice| slice.value > 0)
                .collect()
        }
    }
}

// ---------------------------------------------------------------------------
// Scatter shaping
// ---------------------------------------------------------------------------

/// Pass the filtered rows through as (payload, class, booster) points.
pub fn shape_for_scatter(records: &[&LaunchRecord]) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|r| ScatterPoint {
            payload_mass: r.payload_mass,
            class: r.outcome.class(),
            booster_category: r.booster_category.clone(),
        })
        .collect()
}
