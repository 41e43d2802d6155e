//! Filter-and-aggregate pipeline behind the dashboard.
//!
//! ```text
//! CSV -> ingest (normalize + validate) -> Dataset
//!     -> filter (FilterSpec) -> FilteredView
//!     -> aggregate + comparison -> DerivedView
//! ```

pub mod aggregate;
pub mod comparison;
mod dataset;
pub mod domain;
pub mod filter;
pub mod ingest;
pub mod report;
mod router;

pub use dataset::Dataset;
pub use domain::{Department, MetricField, Record, Term, TermSelection};
pub use filter::{FilterSpec, FilteredView};
pub use ingest::{DatasetError, DatasetLoader, SchemaError};
pub use report::{compute_view, DerivedView, FilterOptions};
pub use router::{dashboard_router, ViewRequest};
