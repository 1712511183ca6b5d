use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Mission outcome as recorded in the `class` column (1 = success, 0 = failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Interpret a raw class value. Only `1` counts as a success.
    pub fn from_class(class: i64) -> Self {
        if class == 1 {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }

    /// The numeric class value (1 or 0).
    pub fn class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site, e.g. `CCAFS LC-40`.
    pub site: String,
    /// Payload mass in kilograms.
    pub payload_mass: f64,
    pub outcome: Outcome,
    /// Booster version category, e.g. `FT` or `B5`.
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_mass: f64,
        outcome: Outcome,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            payload_mass,
            outcome,
            booster_category: booster_category.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with values derived once at load time.
///
/// Never mutated after construction; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct LaunchDataset {
    /// All launches in file order.
    pub records: Vec<LaunchRecord>,
    /// Smallest payload mass over all records (0 when empty).
    pub min_payload: f64,
    /// Largest payload mass over all records (0 when empty).
    pub max_payload: f64,
    /// Distinct launch sites, first-appearance order.
    pub sites: Vec<String>,
    /// Distinct booster categories, first-appearance order.
    pub booster_categories: Vec<String>,
}

impl LaunchDataset {
    /// Build the derived indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for rec in &records {
            if !sites.contains(&rec.site) {
                sites.push(rec.site.clone());
            }
            if !booster_categories.contains(&rec.booster_category) {
                booster_categories.push(rec.booster_category.clone());
            }
            min_payload = min_payload.min(rec.payload_mass);
            max_payload = max_payload.max(rec.payload_mass);
        }

        if records.is_empty() {
            min_payload = 0.0;
            max_payload = 0.0;
        }

        LaunchDataset {
            records,
            min_payload,
            max_payload,
            sites,
            booster_categories,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_bounds_and_indices() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 3000.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", 7000.0, Outcome::Success, "v1.1"),
        ]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.min_payload, 500.0);
        assert_eq!(ds.max_payload, 7000.0);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(ds.booster_categories, vec!["v1.0", "v1.1"]);
    }

    #[test]
    fn empty_dataset_has_zero_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.min_payload, 0.0);
        assert_eq!(ds.max_payload, 0.0);
    }

    #[test]
    fn only_class_one_is_success() {
        assert_eq!(Outcome::from_class(1), Outcome::Success);
        assert_eq!(Outcome::from_class(0), Outcome::Failure);
        assert_eq!(Outcome::from_class(2), Outcome::Failure);
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.to_string(), "Failure");
    }
}
