use super::aggregate::{department_enrolled, mean, ratio, total_enrolled};
use super::domain::{Department, MetricField};
use super::filter::FilteredView;
use serde::Serialize;

/// Enrollment-weighted comparison point for one department.
///
/// The scores scale the view-wide mean retention and satisfaction by the department's share of
/// total enrollment. The dataset carries no per-department rates, so this is not a
/// department's own retention or satisfaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepartmentComparison {
    pub department: Department,
    pub department_label: &'static str,
    pub weight: f64,
    pub avg_retention: f64,
    pub avg_satisfaction: f64,
}

pub fn department_weight(view: &FilteredView<'_>, department: Department) -> f64 {
    ratio(
        department_enrolled(view, department) as f64,
        total_enrolled(view) as f64,
    )
}

pub fn compare_departments(view: &FilteredView<'_>) -> Vec<DepartmentComparison> {
    let retention = mean(view, MetricField::RetentionRate);
    let satisfaction = mean(view, MetricField::SatisfactionScore);

    Department::ordered()
        .into_iter()
        .map(|department| {
            let weight = department_weight(view, department);
            DepartmentComparison {
                department,
                department_label: department.label(),
                weight,
                avg_retention: weight * retention,
                avg_satisfaction: weight * satisfaction,
            }
        })
        .collect()
}
