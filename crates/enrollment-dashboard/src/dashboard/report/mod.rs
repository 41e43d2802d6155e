mod summary;
pub mod views;

pub use summary::compute_view;
pub use views::{ChartKind, ChartSeries, DerivedView, FilterOptions, SeriesPoint};
