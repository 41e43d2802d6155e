use crate::dashboard::domain::Department;
use csv::StringRecord;
use std::collections::HashSet;

/// Raised when the normalized headers do not resolve to exactly one column per required field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("dataset is missing required column(s): {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("dataset has more than one column for: {}", .0.join(", "))]
    Duplicate(Vec<&'static str>),
}

pub(crate) struct ColumnSpec {
    pub(crate) canonical: &'static str,
    aliases: &'static [&'static str],
}

impl ColumnSpec {
    fn accepts(&self, header: &str) -> bool {
        self.canonical == header || self.aliases.contains(&header)
    }
}

pub(crate) const YEAR: &str = "Year";
pub(crate) const TERM: &str = "Term";
pub(crate) const APPLICATIONS: &str = "Applications";
pub(crate) const ADMITTED: &str = "Admitted";
pub(crate) const ENROLLED: &str = "Enrolled";
pub(crate) const RETENTION_RATE: &str = "Retention_Rate_(%)";
pub(crate) const SATISFACTION_SCORE: &str = "Student_Satisfaction_(%)";

pub(crate) const REQUIRED_COLUMNS: [ColumnSpec; 11] = [
    ColumnSpec {
        canonical: YEAR,
        aliases: &[],
    },
    ColumnSpec {
        canonical: TERM,
        aliases: &[],
    },
    ColumnSpec {
        canonical: APPLICATIONS,
        aliases: &[],
    },
    ColumnSpec {
        canonical: ADMITTED,
        aliases: &[],
    },
    ColumnSpec {
        canonical: ENROLLED,
        aliases: &[],
    },
    ColumnSpec {
        canonical: RETENTION_RATE,
        aliases: &["Retention_Rate", "RetentionRate"],
    },
    ColumnSpec {
        canonical: SATISFACTION_SCORE,
        aliases: &[
            "Student_Satisfaction",
            "Satisfaction_Score",
            "SatisfactionScore",
        ],
    },
    ColumnSpec {
        canonical: Department::Engineering.column(),
        aliases: &[],
    },
    ColumnSpec {
        canonical: Department::Business.column(),
        aliases: &[],
    },
    ColumnSpec {
        canonical: Department::Arts.column(),
        aliases: &[],
    },
    ColumnSpec {
        canonical: Department::Science.column(),
        aliases: &[],
    },
];

/// Rewrites normalized headers to their canonical names. Unknown columns pass through untouched.
pub(crate) fn canonicalize(normalized: &[String]) -> Result<StringRecord, SchemaError> {
    let mut seen: HashSet<&'static str> = HashSet::new();
    let mut duplicates: Vec<&'static str> = Vec::new();
    let mut canonical = StringRecord::new();

    for header in normalized {
        match REQUIRED_COLUMNS
            .iter()
            .find(|column| column.accepts(header))
        {
            Some(column) => {
                if !seen.insert(column.canonical) && !duplicates.contains(&column.canonical) {
                    duplicates.push(column.canonical);
                }
                canonical.push_field(column.canonical);
            }
            None => canonical.push_field(header),
        }
    }

    let missing: Vec<&'static str> = REQUIRED_COLUMNS
        .iter()
        .map(|column| column.canonical)
        .filter(|name| !seen.contains(name))
        .collect();

    if !missing.is_empty() {
        return Err(SchemaError::Missing(missing));
    }
    if !duplicates.is_empty() {
        return Err(SchemaError::Duplicate(duplicates));
    }
    Ok(canonical)
}
