//! Chart-ready figures: shaped data plus titles and colours.
//!
//! Both front-ends draw from these; the web one receives them as JSON.

use serde::{Serialize, Serializer};

use crate::color::{outcome_color, to_hex, ColorMap, Rgb};
use crate::data::filter::filter_in_range;
use crate::data::{
    shape_for_pie, shape_for_scatter, LaunchDataset, Outcome, PayloadRange, ScatterPoint,
    SiteSelector,
};

pub const PAYLOAD_AXIS: &str = "Payload Mass (kg)";
pub const CLASS_AXIS: &str = "class";

fn serialize_hex<S: Serializer>(c: &Rgb, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&to_hex(*c))
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColoredSlice {
    pub label: String,
    pub value: usize,
    #[serde(serialize_with = "serialize_hex")]
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<ColoredSlice>,
}

impl PieFigure {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Pie of successes per site (`All`) or success/failure split for one site.
///
/// `site_colors` colours the per-site slices; outcome slices are always
/// green/red.
pub fn pie_figure(dataset: &LaunchDataset, site: &SiteSelector, site_colors: &ColorMap) -> PieFigure {
    let title = match site {
        SiteSelector::All => "Success rate of Launch Sites".to_string(),
        SiteSelector::Site(s) => format!("Success rate of {s}"),
    };

    let slices = shape_for_pie(dataset, site)
        .into_iter()
        .map(|slice| {
            let color = match site {
                SiteSelector::All => site_colors.color_for(&slice.label),
                SiteSelector::Site(_) if slice.label == Outcome::Success.label() => {
                    outcome_color(Outcome::Success)
                }
                SiteSelector::Site(_) => outcome_color(Outcome::Failure),
            };
            ColoredSlice {
                label: slice.label,
                value: slice.value,
                color,
            }
        })
        .collect();

    PieFigure { title, slices }
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

/// Points of one booster category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    #[serde(serialize_with = "serialize_hex")]
    pub color: Rgb,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFigure {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: Vec<ScatterSeries>,
}

impl ScatterFigure {
    /// Total number of plotted points.
    pub fn len(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Payload vs outcome for the filtered launches, one series per booster
/// category in dataset order. Categories without points are left out.
pub fn scatter_figure(
    dataset: &LaunchDataset,
    site: &SiteSelector,
    range: PayloadRange,
    booster_colors: &ColorMap,
) -> ScatterFigure {
    let title = match site {
        SiteSelector::All => "Payload vs. Outcome for All Sites".to_string(),
        SiteSelector::Site(s) => format!("Payload vs. Outcome for {s}"),
    };

    let points = shape_for_scatter(&filter_in_range(dataset, site, range));

    let series = dataset
        .booster_categories
        .iter()
        .filter_map(|category| {
            let pts: Vec<ScatterPoint> = points
                .iter()
                .filter(|p| &p.booster_category == category)
                .cloned()
                .collect();
            (!pts.is_empty()).then(|| ScatterSeries {
                name: category.clone(),
                color: booster_colors.color_for(category),
                points: pts,
            })
        })
        .collect();

    ScatterFigure {
        title,
        x_label: PAYLOAD_AXIS,
        y_label: CLASS_AXIS,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{FAILURE_COLOR, SUCCESS_COLOR};
    use crate::data::LaunchRecord;

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 3000.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", 7000.0, Outcome::Success, "v1.1"),
            LaunchRecord::new("KSC LC-39A", 4200.0, Outcome::Success, "FT"),
        ])
    }

    #[test]
    fn site_pie_uses_outcome_colours() {
        let ds = dataset();
        let colors = ColorMap::new(&ds.sites);
        let fig = pie_figure(&ds, &SiteSelector::site("KSC LC-39A"), &colors);
        assert_eq!(fig.title, "Success rate of KSC LC-39A");
        assert_eq!(fig.slices[0].label, "Success");
        assert_eq!(fig.slices[0].color, SUCCESS_COLOR);
        assert_eq!(fig.slices[1].label, "Failure");
        assert_eq!(fig.slices[1].color, FAILURE_COLOR);
        assert_eq!(fig.total(), 2);
    }

    #[test]
    fn all_sites_pie_uses_site_colours() {
        let ds = dataset();
        let colors = ColorMap::new(&ds.sites);
        let fig = pie_figure(&ds, &SiteSelector::All, &colors);
        assert_eq!(fig.title, "Success rate of Launch Sites");
        assert_eq!(fig.slices[1].color, colors.color_for("KSC LC-39A"));
    }

    #[test]
    fn scatter_groups_by_booster_category() {
        let ds = dataset();
        let colors = ColorMap::new(&ds.booster_categories);
        let fig = scatter_figure(&ds, &SiteSelector::All, PayloadRange::new(0.0, 5000.0), &colors);
        let names: Vec<&str> = fig.series.iter().map(|s| s.name.as_str()).collect();
        // v1.1 only has a 7000 kg launch, outside the range.
        assert_eq!(names, vec!["v1.0", "FT"]);
        assert_eq!(fig.len(), 3);
        assert_eq!(fig.series[0].color, colors.color_for("v1.0"));
    }

    #[test]
    fn empty_selection_gives_empty_figures() {
        let ds = dataset();
        let colors = ColorMap::new(&ds.booster_categories);
        let site = SiteSelector::site("Vandenberg");
        assert!(pie_figure(&ds, &site, &colors).is_empty());
        assert!(scatter_figure(&ds, &site, PayloadRange::full(&ds), &colors).is_empty());
    }

    #[test]
    fn figures_serialize_colours_as_hex() {
        let ds = dataset();
        let colors = ColorMap::new(&ds.sites);
        let fig = pie_figure(&ds, &SiteSelector::site("CCAFS LC-40"), &colors);
        let json = serde_json::to_value(&fig).unwrap();
        assert_eq!(json["slices"][0]["color"], "#008000");
        assert_eq!(json["slices"][0]["value"], 2);
    }
}
