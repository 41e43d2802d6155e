use serde::{Deserialize, Serialize};
use std::fmt;

/// Academic term a record was captured in. Spring sorts ahead of Fall within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    Spring,
    Fall,
}

impl Term {
    pub const fn ordered() -> [Self; 2] {
        [Self::Spring, Self::Fall]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Fall => "Fall",
        }
    }

    /// Case-insensitive match on the trimmed term name.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|term| term.label().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Term constraint selected by the dashboard user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermSelection {
    #[default]
    #[serde(alias = "All")]
    All,
    #[serde(alias = "Spring")]
    Spring,
    #[serde(alias = "Fall")]
    Fall,
}

impl TermSelection {
    pub const fn ordered() -> [Self; 3] {
        [Self::All, Self::Spring, Self::Fall]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Spring => "Spring",
            Self::Fall => "Fall",
        }
    }

    pub const fn term(self) -> Option<Term> {
        match self {
            Self::All => None,
            Self::Spring => Some(Term::Spring),
            Self::Fall => Some(Term::Fall),
        }
    }

    pub fn admits(self, term: Term) -> bool {
        self.term().map_or(true, |selected| selected == term)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Engineering,
    Business,
    Arts,
    Science,
}

impl Department {
    pub const fn ordered() -> [Self; 4] {
        [Self::Engineering, Self::Business, Self::Arts, Self::Science]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Business => "Business",
            Self::Arts => "Arts",
            Self::Science => "Science",
        }
    }

    /// Normalized CSV column holding this department's enrollment count.
    pub const fn column(self) -> &'static str {
        match self {
            Self::Engineering => "Engineering_Enrolled",
            Self::Business => "Business_Enrolled",
            Self::Arts => "Arts_Enrolled",
            Self::Science => "Science_Enrolled",
        }
    }
}

/// Per-record rate columns that can be averaged over a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    RetentionRate,
    SatisfactionScore,
}

impl MetricField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::RetentionRate => "Retention Rate (%)",
            Self::SatisfactionScore => "Satisfaction (%)",
        }
    }

    pub fn value(self, record: &Record) -> f64 {
        match self {
            Self::RetentionRate => record.retention_rate,
            Self::SatisfactionScore => record.satisfaction_score,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentEnrollment {
    pub engineering: u64,
    pub business: u64,
    pub arts: u64,
    pub science: u64,
}

impl DepartmentEnrollment {
    pub const fn get(&self, department: Department) -> u64 {
        match department {
            Department::Engineering => self.engineering,
            Department::Business => self.business,
            Department::Arts => self.arts,
            Department::Science => self.science,
        }
    }
}

/// One admissions/enrollment row for a single year and term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub year: i32,
    pub term: Term,
    pub applications: u64,
    pub admitted: u64,
    pub enrolled: u64,
    pub retention_rate: f64,
    pub satisfaction_score: f64,
    pub departments: DepartmentEnrollment,
}
