use serde::Serialize;

use crate::data::{LaunchDataset, PayloadRange, SiteSelector};

// ---------------------------------------------------------------------------
// Fixed control configuration
// ---------------------------------------------------------------------------

/// Launch sites offered by the dropdown, in display order.
pub const KNOWN_SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

/// Label of the "ALL" dropdown entry.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// Payload slider bounds (kg).
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10_000.0;

/// Payload slider tick marks: (position, label).
pub const SLIDER_MARKS: [(f64, &str); 5] = [
    (0.0, "0 kg"),
    (2_500.0, "2500"),
    (5_000.0, "5000"),
    (7_500.0, "7500"),
    (10_000.0, "10000"),
];

// ---------------------------------------------------------------------------
// Control descriptors
// ---------------------------------------------------------------------------

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: SiteSelector,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Everything a front-end needs to draw the two controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Controls {
    pub sites: Vec<SiteOption>,
    pub default_site: SiteSelector,
    pub slider_min: f64,
    pub slider_max: f64,
    pub marks: Vec<SliderMark>,
    pub default_range: PayloadRange,
}

impl Controls {
    pub fn for_dataset(dataset: &LaunchDataset) -> Self {
        Controls {
            sites: site_options(dataset),
            default_site: SiteSelector::All,
            slider_min: SLIDER_MIN,
            slider_max: SLIDER_MAX,
            marks: SLIDER_MARKS
                .iter()
                .map(|&(value, label)| SliderMark {
                    value,
                    label: label.to_string(),
                })
                .collect(),
            default_range: PayloadRange::full(dataset),
        }
    }
}

/// "All Sites", the fixed site list, then any other site present in the data.
pub fn site_options(dataset: &LaunchDataset) -> Vec<SiteOption> {
    let extra = dataset
        .sites
        .iter()
        .map(String::as_str)
        .filter(|s| !KNOWN_SITES.contains(s));

    std::iter::once(SiteOption {
        label: ALL_SITES_LABEL.to_string(),
        value: SiteSelector::All,
    })
    .chain(KNOWN_SITES.iter().copied().chain(extra).map(|s| SiteOption {
        label: s.to_string(),
        value: SiteSelector::site(s),
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{LaunchRecord, Outcome};

    #[test]
    fn options_start_with_all_then_known_sites() {
        let ds = LaunchDataset::default();
        let labels: Vec<String> = site_options(&ds).into_iter().map(|o| o.label).collect();
        assert_eq!(
            labels,
            vec!["All Sites", "CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        );
    }

    #[test]
    fn unknown_sites_in_data_are_appended() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("KSC LC-39A", 100.0, Outcome::Success, "FT"),
            LaunchRecord::new("Kwajalein", 200.0, Outcome::Failure, "F1"),
        ]);
        let opts = site_options(&ds);
        assert_eq!(opts.len(), 6);
        assert_eq!(opts[5].value, SiteSelector::site("Kwajalein"));
    }

    #[test]
    fn default_range_spans_dataset() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("KSC LC-39A", 362.0, Outcome::Success, "FT"),
            LaunchRecord::new("KSC LC-39A", 9600.0, Outcome::Failure, "B5"),
        ]);
        let controls = Controls::for_dataset(&ds);
        assert_eq!(controls.default_range, PayloadRange::new(362.0, 9600.0));
        assert_eq!(controls.slider_max, 10_000.0);
        assert_eq!(controls.marks.first().map(|m| m.label.as_str()), Some("0 kg"));
        assert_eq!(controls.marks.len(), 5);
    }
}
