use super::dataset::Dataset;
use super::domain::{Record, TermSelection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Year and term constraints chosen by the user.
///
/// An empty year set selects nothing; it is not treated as "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub years: BTreeSet<i32>,
    #[serde(default)]
    pub term: TermSelection,
}

impl FilterSpec {
    pub fn new<I>(years: I, term: TermSelection) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        Self {
            years: years.into_iter().collect(),
            term,
        }
    }

    /// Default dashboard selection: every year present, both terms.
    pub fn all(dataset: &Dataset) -> Self {
        Self::new(dataset.years(), TermSelection::All)
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.years.contains(&record.year) && self.term.admits(record.term)
    }
}

/// Records that passed a [`FilterSpec`], borrowed from the source dataset in source order.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    records: Vec<&'a Record>,
}

impl<'a> FilteredView<'a> {
    pub fn new(records: Vec<&'a Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> FromIterator<&'a Record> for FilteredView<'a> {
    fn from_iter<T: IntoIterator<Item = &'a Record>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

pub fn apply<'a>(dataset: &'a Dataset, spec: &FilterSpec) -> FilteredView<'a> {
    if spec.years.is_empty() {
        return FilteredView::default();
    }

    dataset
        .records()
        .iter()
        .filter(|record| spec.matches(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::domain::{DepartmentEnrollment, Term};

    fn record(year: i32, term: Term, enrolled: u64) -> Record {
        Record {
            year,
            term,
            applications: enrolled * 4,
            admitted: enrolled * 2,
            enrolled,
            retention_rate: 80.0,
            satisfaction_score: 75.0,
            departments: DepartmentEnrollment::default(),
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            record(2015, Term::Spring, 100),
            record(2015, Term::Fall, 100),
            record(2016, Term::Spring, 120),
            record(2016, Term::Fall, 120),
        ])
    }

    #[test]
    fn empty_year_selection_yields_empty_view() {
        let dataset = dataset();
        let view = dataset.filter(&FilterSpec::new(Vec::<i32>::new(), TermSelection::All));
        assert!(view.is_empty());
    }

    #[test]
    fn filter_combines_year_and_term() {
        let dataset = dataset();
        let view = dataset.filter(&FilterSpec::new([2016], TermSelection::Fall));
        assert_eq!(view.len(), 1);
        assert_eq!(view.records()[0].year, 2016);
        assert_eq!(view.records()[0].term, Term::Fall);
    }

    #[test]
    fn default_spec_selects_everything_without_touching_source() {
        let dataset = dataset();
        let before = dataset.clone();
        let view = dataset.filter(&FilterSpec::all(&dataset));
        assert_eq!(view.len(), dataset.len());
        assert_eq!(dataset, before);
    }

    #[test]
    fn unknown_years_select_nothing() {
        let dataset = dataset();
        let view = dataset.filter(&FilterSpec::new([1999], TermSelection::All));
        assert!(view.is_empty());
    }
}
