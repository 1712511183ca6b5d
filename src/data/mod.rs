/// Data layer: core types, loading, filtering and chart shaping.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset (min/max payload, sites)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site selector + payload range → matching records
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  shape    │  records → pie slices / scatter points
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod shape;

pub use filter::{filter_in_range, filter_records, PayloadRange, SiteSelector};
pub use model::{LaunchDataset, LaunchRecord, Outcome};
pub use shape::{shape_for_pie, shape_for_scatter, PieSlice, ScatterPoint};
