use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::dataset::Dataset;
use super::domain::TermSelection;
use super::filter::FilterSpec;
use super::report::{compute_view, DerivedView, FilterOptions};

/// Filter selection posted by a dashboard client.
///
/// Omitting `years` selects every year in the dataset; an explicit empty list selects none.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewRequest {
    #[serde(default)]
    pub years: Option<Vec<i32>>,
    #[serde(default)]
    pub term: TermSelection,
}

impl ViewRequest {
    pub fn into_filter(self, dataset: &Dataset) -> FilterSpec {
        match self.years {
            Some(years) => FilterSpec::new(years, self.term),
            None => FilterSpec::new(dataset.years(), self.term),
        }
    }
}

/// Router builder exposing the filter options and the derived view over one dataset.
pub fn dashboard_router(dataset: Arc<Dataset>) -> Router {
    Router::new()
        .route("/api/v1/dashboard/filters", get(filters_handler))
        .route("/api/v1/dashboard/view", post(view_handler))
        .with_state(dataset)
}

pub(crate) async fn filters_handler(State(dataset): State<Arc<Dataset>>) -> Json<FilterOptions> {
    Json(FilterOptions::from_dataset(&dataset))
}

pub(crate) async fn view_handler(
    State(dataset): State<Arc<Dataset>>,
    Json(request): Json<ViewRequest>,
) -> Json<DerivedView> {
    let filter = request.into_filter(&dataset);
    Json(compute_view(&dataset, &filter))
}
