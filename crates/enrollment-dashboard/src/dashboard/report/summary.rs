use super::super::aggregate::{
    department_totals, enrollment_by_year_and_term, mean_by_year, Kpis, YearMean,
};
use super::super::comparison::compare_departments;
use super::super::dataset::Dataset;
use super::super::domain::{MetricField, TermSelection};
use super::super::filter::FilterSpec;
use super::views::{ChartKind, ChartSeries, DerivedView, FilterOptions, SeriesPoint, TermOption};
use tracing::debug;

/// Runs filter, aggregation and department comparison for one selection.
pub fn compute_view(dataset: &Dataset, filter: &FilterSpec) -> DerivedView {
    let view = dataset.filter(filter);
    debug!(
        years = filter.years.len(),
        term = filter.term.label(),
        records = view.len(),
        "computing dashboard view"
    );

    let term_enrollment = match filter.term {
        TermSelection::All => Some(enrollment_by_year_and_term(&view)),
        TermSelection::Spring | TermSelection::Fall => None,
    };

    DerivedView {
        filter: filter.clone(),
        record_count: view.len(),
        kpis: Kpis::from_view(&view),
        retention_trend: mean_by_year(&view, MetricField::RetentionRate),
        satisfaction_trend: mean_by_year(&view, MetricField::SatisfactionScore),
        department_enrollment: department_totals(&view),
        term_enrollment,
        department_comparison: compare_departments(&view),
    }
}

impl DerivedView {
    /// True when the selection matched no records; every aggregate is then zero or empty.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    pub fn series(&self) -> Vec<ChartSeries> {
        let mut series = vec![
            trend_series(
                "retention_trend",
                "Retention Rate Over Time",
                ChartKind::Line,
                MetricField::RetentionRate,
                &self.retention_trend,
            ),
            trend_series(
                "satisfaction_trend",
                "Student Satisfaction Over Time",
                ChartKind::Bar,
                MetricField::SatisfactionScore,
                &self.satisfaction_trend,
            ),
            ChartSeries {
                key: "department_enrollment",
                title: "Departmental Enrollment Breakdown",
                kind: ChartKind::Bar,
                x_label: "Department",
                y_label: "Enrolled",
                points: self
                    .department_enrollment
                    .iter()
                    .map(|total| SeriesPoint {
                        x: total.department_label.to_string(),
                        y: total.enrolled as f64,
                        group: None,
                    })
                    .collect(),
            },
        ];

        if let Some(term_enrollment) = &self.term_enrollment {
            series.push(ChartSeries {
                key: "term_enrollment",
                title: "Spring vs Fall Enrollment Over Time",
                kind: ChartKind::GroupedBar,
                x_label: "Year",
                y_label: "Enrolled Students",
                points: term_enrollment
                    .iter()
                    .map(|entry| SeriesPoint {
                        x: entry.year.to_string(),
                        y: entry.enrolled as f64,
                        group: Some(entry.term_label),
                    })
                    .collect(),
            });
        }

        series
    }
}

fn trend_series(
    key: &'static str,
    title: &'static str,
    kind: ChartKind,
    field: MetricField,
    trend: &[YearMean],
) -> ChartSeries {
    ChartSeries {
        key,
        title,
        kind,
        x_label: "Year",
        y_label: field.label(),
        points: trend
            .iter()
            .map(|point| SeriesPoint {
                x: point.year.to_string(),
                y: point.mean,
                group: None,
            })
            .collect(),
    }
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            years: dataset.years(),
            terms: TermSelection::ordered()
                .into_iter()
                .map(|value| TermOption {
                    value,
                    label: value.label(),
                })
                .collect(),
            default_filter: FilterSpec::all(dataset),
        }
    }
}
