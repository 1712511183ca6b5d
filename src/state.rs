use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::{LaunchDataset, PayloadRange, SiteSelector};
use crate::figure::{pie_figure, scatter_figure, PieFigure, ScatterFigure};

// ---------------------------------------------------------------------------
// Control changes and the outputs they refresh
// ---------------------------------------------------------------------------

/// A single user edit to one of the two dashboard inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlChange {
    Site(SiteSelector),
    PayloadRange(PayloadRange),
    /// Restore the range to `[min_payload, max_payload]`.
    ResetPayloadRange,
}

/// Which outputs were recomputed by a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Refreshed {
    pub pie: bool,
    pub scatter: bool,
}

/// Output dependency graph:
///
/// ```text
///   site ──────────┬──► pie
///                  └──► scatter
///   payload range ─────► scatter
/// ```
impl ControlChange {
    pub fn affects(&self) -> Refreshed {
        match self {
            ControlChange::Site(_) => Refreshed {
                pie: true,
                scatter: true,
            },
            ControlChange::PayloadRange(_) | ControlChange::ResetPayloadRange => Refreshed {
                pie: false,
                scatter: true,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// Current control values and the figures derived from them.
pub struct DashboardState {
    dataset: Arc<LaunchDataset>,
    site_colors: ColorMap,
    booster_colors: ColorMap,

    site: SiteSelector,
    payload: PayloadRange,

    pie: PieFigure,
    scatter: ScatterFigure,
}

impl DashboardState {
    /// Start with all sites and the full payload range.
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        let site_colors = ColorMap::new(&dataset.sites);
        let booster_colors = ColorMap::new(&dataset.booster_categories);
        let site = SiteSelector::All;
        let payload = PayloadRange::full(&dataset);
        let pie = pie_figure(&dataset, &site, &site_colors);
        let scatter = scatter_figure(&dataset, &site, payload, &booster_colors);

        Self {
            dataset,
            site_colors,
            booster_colors,
            site,
            payload,
            pie,
            scatter,
        }
    }

    /// Apply one control change and recompute the outputs that depend on it.
    pub fn apply(&mut self, change: ControlChange) -> Refreshed {
        let refreshed = change.affects();
        match change {
            ControlChange::Site(site) => self.site = site,
            ControlChange::PayloadRange(range) => self.payload = range,
            ControlChange::ResetPayloadRange => self.payload = PayloadRange::full(&self.dataset),
        }

        if refreshed.pie {
            self.pie = pie_figure(&self.dataset, &self.site, &self.site_colors);
        }
        if refreshed.scatter {
            self.scatter =
                scatter_figure(&self.dataset, &self.site, self.payload, &self.booster_colors);
        }
        log::debug!(
            "site={} payload=[{}, {}] refreshed {:?}",
            self.site,
            self.payload.low,
            self.payload.high,
            refreshed
        );
        refreshed
    }

    pub fn dataset(&self) -> &Arc<LaunchDataset> {
        &self.dataset
    }

    pub fn site(&self) -> &SiteSelector {
        &self.site
    }

    pub fn payload(&self) -> PayloadRange {
        self.payload
    }

    pub fn pie(&self) -> &PieFigure {
        &self.pie
    }

    pub fn scatter(&self) -> &ScatterFigure {
        &self.scatter
    }

    pub fn booster_colors(&self) -> &ColorMap {
        &self.booster_colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{LaunchRecord, Outcome};

    fn state() -> DashboardState {
        DashboardState::new(Arc::new(LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 3000.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", 7000.0, Outcome::Success, "v1.1"),
        ])))
    }

    #[test]
    fn starts_with_all_sites_and_full_range() {
        let st = state();
        assert_eq!(st.site(), &SiteSelector::All);
        assert_eq!(st.payload(), PayloadRange::new(500.0, 7000.0));
        assert_eq!(st.pie().total(), 2);
        assert_eq!(st.scatter().len(), 3);
    }

    #[test]
    fn payload_change_only_refreshes_scatter() {
        let mut st = state();
        let pie_before = st.pie().clone();
        let refreshed = st.apply(ControlChange::PayloadRange(PayloadRange::new(0.0, 1000.0)));
        assert_eq!(
            refreshed,
            Refreshed {
                pie: false,
                scatter: true
            }
        );
        assert_eq!(st.pie(), &pie_before);
        assert_eq!(st.scatter().len(), 1);
    }

    #[test]
    fn site_change_refreshes_both() {
        let mut st = state();
        let refreshed = st.apply(ControlChange::Site(SiteSelector::site("KSC LC-39A")));
        assert!(refreshed.pie && refreshed.scatter);
        assert_eq!(st.pie().title, "Success rate of KSC LC-39A");
        assert_eq!(st.pie().slices.len(), 1);
        assert_eq!(st.scatter().len(), 1);
    }

    #[test]
    fn site_and_range_combine() {
        let mut st = state();
        st.apply(ControlChange::Site(SiteSelector::site("CCAFS LC-40")));
        st.apply(ControlChange::PayloadRange(PayloadRange::new(1000.0, 8000.0)));
        let payloads: Vec<f64> = st
            .scatter()
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.payload_mass))
            .collect();
        assert_eq!(payloads, vec![7000.0]);
    }

    #[test]
    fn reset_restores_dataset_bounds() {
        let mut st = state();
        st.apply(ControlChange::PayloadRange(PayloadRange::new(9000.0, 100.0)));
        assert!(st.scatter().is_empty());
        st.apply(ControlChange::ResetPayloadRange);
        assert_eq!(st.payload(), PayloadRange::new(500.0, 7000.0));
        assert_eq!(st.scatter().len(), 3);
    }
}
