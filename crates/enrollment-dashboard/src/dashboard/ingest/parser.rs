use super::normalizer::{coerce_year, normalize_headers};
use super::schema::{self, RETENTION_RATE, SATISFACTION_SCORE};
use super::DatasetError;
use crate::dashboard::domain::{DepartmentEnrollment, Record, Term};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<Record>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let normalized = normalize_headers(csv_reader.headers()?.iter());
    let canonical = schema::canonicalize(&normalized)?;
    csv_reader.set_headers(canonical);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<DashboardRow>().enumerate() {
        let row = row?;
        records.push(row.into_record(index + 1)?);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct DashboardRow {
    #[serde(rename = "Year", deserialize_with = "deserialize_year")]
    year: i32,
    #[serde(rename = "Term", deserialize_with = "deserialize_term")]
    term: Term,
    #[serde(rename = "Applications")]
    applications: u64,
    #[serde(rename = "Admitted")]
    admitted: u64,
    #[serde(rename = "Enrolled")]
    enrolled: u64,
    #[serde(rename = "Retention_Rate_(%)")]
    retention_rate: f64,
    #[serde(rename = "Student_Satisfaction_(%)")]
    satisfaction_score: f64,
    #[serde(rename = "Engineering_Enrolled")]
    engineering: u64,
    #[serde(rename = "Business_Enrolled")]
    business: u64,
    #[serde(rename = "Arts_Enrolled")]
    arts: u64,
    #[serde(rename = "Science_Enrolled")]
    science: u64,
}

impl DashboardRow {
    fn into_record(self, row: usize) -> Result<Record, DatasetError> {
        check_percentage(row, RETENTION_RATE, self.retention_rate)?;
        check_percentage(row, SATISFACTION_SCORE, self.satisfaction_score)?;

        Ok(Record {
            year: self.year,
            term: self.term,
            applications: self.applications,
            admitted: self.admitted,
            enrolled: self.enrolled,
            retention_rate: self.retention_rate,
            satisfaction_score: self.satisfaction_score,
            departments: DepartmentEnrollment {
                engineering: self.engineering,
                business: self.business,
                arts: self.arts,
                science: self.science,
            },
        })
    }
}

fn check_percentage(row: usize, column: &'static str, value: f64) -> Result<(), DatasetError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(DatasetError::OutOfRange { row, column, value })
    }
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    coerce_year(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("'{raw}' is not a valid year")))
}

fn deserialize_term<'de, D>(deserializer: D) -> Result<Term, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Term::parse(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("'{raw}' is not a term (expected Spring or Fall)"))
    })
}
