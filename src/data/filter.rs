use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::model::{LaunchDataset, LaunchRecord};

// ---------------------------------------------------------------------------
// Site selector: "ALL" sentinel or a concrete launch site
// ---------------------------------------------------------------------------

/// Text of the "no site constraint" sentinel.
pub const ALL_SITES: &str = "ALL";

/// Which launch site the dashboard is showing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelector {
    #[default]
    All,
    Site(String),
}

impl SiteSelector {
    pub fn site(name: impl Into<String>) -> Self {
        SiteSelector::Site(name.into())
    }

    /// Whether a record launched from `site` passes this selector.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelector::All => true,
            SiteSelector::Site(s) => s == site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelector::All => ALL_SITES,
            SiteSelector::Site(s) => s,
        }
    }
}

impl From<String> for SiteSelector {
    fn from(s: String) -> Self {
        if s == ALL_SITES {
            SiteSelector::All
        } else {
            SiteSelector::Site(s)
        }
    }
}

impl From<&str> for SiteSelector {
    fn from(s: &str) -> Self {
        SiteSelector::from(s.to_string())
    }
}

impl From<SiteSelector> for String {
    fn from(sel: SiteSelector) -> Self {
        match sel {
            SiteSelector::All => ALL_SITES.to_string(),
            SiteSelector::Site(s) => s,
        }
    }
}

impl FromStr for SiteSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SiteSelector::from(s))
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Payload range: inclusive [low, high] in kilograms
// ---------------------------------------------------------------------------

/// Inclusive payload mass window. An inverted window matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// The range spanning every record: `[min_payload, max_payload]`.
    pub fn full(dataset: &LaunchDataset) -> Self {
        Self::new(dataset.min_payload, dataset.max_payload)
    }

    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Return the records launched from `site` with payload in `[low, high]`.
///
/// * `SiteSelector::All` leaves the site unconstrained.
/// * An unknown site or an inverted range yields an empty result.
/// * Dataset order is preserved.
pub fn filter_records<'a>(
    dataset: &'a LaunchDataset,
    site: &SiteSelector,
    payload_low: f64,
    payload_high: f64,
) -> Vec<&'a LaunchRecord> {
    filter_in_range(dataset, site, PayloadRange::new(payload_low, payload_high))
}

/// Same as [`filter_records`] but takes a [`PayloadRange`].
pub fn filter_in_range<'a>(
    dataset: &'a LaunchDataset,
    site: &SiteSelector,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    dataset
        .records
        .iter()
        .filter(|rec| site.matches(&rec.site) && range.contains(rec.payload_mass))
        .collect()
}
