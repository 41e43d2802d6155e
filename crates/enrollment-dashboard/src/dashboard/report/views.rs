use super::super::aggregate::{DepartmentTotal, Kpis, TermEnrollment, YearMean};
use super::super::comparison::DepartmentComparison;
use super::super::domain::TermSelection;
use super::super::filter::FilterSpec;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    GroupedBar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub x: String,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<&'static str>,
}

/// Chart-ready series handed to whatever renders the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points: Vec<SeriesPoint>,
}

/// Everything the dashboard shows for one filter selection. Recomputed on every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView {
    pub filter: FilterSpec,
    pub record_count: usize,
    pub kpis: Kpis,
    pub retention_trend: Vec<YearMean>,
    pub satisfaction_trend: Vec<YearMean>,
    pub department_enrollment: Vec<DepartmentTotal>,
    /// Only published when the term selection is [`TermSelection::All`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_enrollment: Option<Vec<TermEnrollment>>,
    pub department_comparison: Vec<DepartmentComparison>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermOption {
    pub value: TermSelection,
    pub label: &'static str,
}

/// Choices offered by the year and term controls, plus their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub terms: Vec<TermOption>,
    pub default_filter: FilterSpec,
}
