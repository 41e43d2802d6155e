use super::domain::{Department, MetricField, Term};
use super::filter::FilteredView;
use serde::Serialize;
use std::collections::BTreeMap;

/// `numerator / denominator`, or 0 when the denominator is zero.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Count totals clamp at `u64::MAX` instead of overflowing.
fn sum_counts<I: Iterator<Item = u64>>(counts: I) -> u64 {
    counts.fold(0, u64::saturating_add)
}

pub fn total_applications(view: &FilteredView<'_>) -> u64 {
    sum_counts(view.iter().map(|record| record.applications))
}

pub fn total_admitted(view: &FilteredView<'_>) -> u64 {
    sum_counts(view.iter().map(|record| record.admitted))
}

pub fn total_enrolled(view: &FilteredView<'_>) -> u64 {
    sum_counts(view.iter().map(|record| record.enrolled))
}

/// Arithmetic mean of `field` over the view; 0 for an empty view.
pub fn mean(view: &FilteredView<'_>, field: MetricField) -> f64 {
    let sum: f64 = view.iter().map(|record| field.value(record)).sum();
    ratio(sum, view.len() as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kpis {
    pub applications: u64,
    pub admitted: u64,
    pub enrolled: u64,
    /// Admitted per application.
    pub acceptance_rate: f64,
    /// Enrolled per admitted student.
    pub yield_rate: f64,
}

impl Kpis {
    pub fn from_view(view: &FilteredView<'_>) -> Self {
        let applications = total_applications(view);
        let admitted = total_admitted(view);
        let enrolled = total_enrolled(view);

        Self {
            applications,
            admitted,
            enrolled,
            acceptance_rate: ratio(admitted as f64, applications as f64),
            yield_rate: ratio(enrolled as f64, admitted as f64),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearMean {
    pub year: i32,
    pub mean: f64,
}

/// One mean per distinct year in the view, ascending by year.
pub fn mean_by_year(view: &FilteredView<'_>, field: MetricField) -> Vec<YearMean> {
    let mut groups: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for record in view.iter() {
        let entry = groups.entry(record.year).or_default();
        entry.0 += field.value(record);
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(year, (sum, count))| YearMean {
            year,
            mean: ratio(sum, count as f64),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepartmentTotal {
    pub department: Department,
    pub department_label: &'static str,
    pub enrolled: u64,
}

/// Column sum per department, always one entry per department in fixed order.
pub fn department_totals(view: &FilteredView<'_>) -> Vec<DepartmentTotal> {
    Department::ordered()
        .into_iter()
        .map(|department| DepartmentTotal {
            department,
            department_label: department.label(),
            enrolled: department_enrolled(view, department),
        })
        .collect()
}

pub fn department_enrolled(view: &FilteredView<'_>, department: Department) -> u64 {
    sum_counts(view.iter().map(|record| record.departments.get(department)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TermEnrollment {
    pub year: i32,
    pub term: Term,
    pub term_label: &'static str,
    pub enrolled: u64,
}

/// Enrolled summed per (year, term) pair present in the view, ordered by year then term.
pub fn enrollment_by_year_and_term(view: &FilteredView<'_>) -> Vec<TermEnrollment> {
    let mut groups: BTreeMap<(i32, Term), u64> = BTreeMap::new();
    for record in view.iter() {
        let total = groups.entry((record.year, record.term)).or_default();
        *total = total.saturating_add(record.enrolled);
    }

    groups
        .into_iter()
        .map(|((year, term), enrolled)| TermEnrollment {
            year,
            term,
            term_label: term.label(),
            enrolled,
        })
        .collect()
}
