use super::domain::Record;
use super::filter::{self, FilterSpec, FilteredView};
use std::collections::BTreeSet;

/// Immutable table of records, loaded once and shared for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years in ascending order.
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|record| record.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn filter(&self, spec: &FilterSpec) -> FilteredView<'_> {
        filter::apply(self, spec)
    }

    /// Every record in source order, without consulting a filter.
    pub fn view_all(&self) -> FilteredView<'_> {
        FilteredView::new(self.records.iter().collect())
    }
}
