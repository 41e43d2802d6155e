mod normalizer;
mod parser;
mod schema;

use super::dataset::Dataset;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub use normalizer::{coerce_year, normalize_column_name, normalize_headers};
pub use schema::SchemaError;

/// Fatal problems encountered while loading the dashboard dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Load(#[from] std::io::Error),
    #[error("malformed dataset CSV: {0}")]
    Malformed(#[from] csv::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("row {row}: {column} value {value} is outside 0..=100")]
    OutOfRange {
        row: usize,
        column: &'static str,
        value: f64,
    },
}

pub struct DatasetLoader;

impl DatasetLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            years = dataset.years().len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
        let records = parser::parse_records(reader)?;
        debug!(records = records.len(), "parsed dataset rows");
        Ok(Dataset::new(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::domain::Term;
    use std::io::Cursor;

    const HEADER: &str = "Year,Term,Applications,Admitted,Enrolled,Retention Rate (%),Student Satisfaction (%),Engineering Enrolled,Business Enrolled,Arts Enrolled,Science Enrolled";

    fn csv_with(rows: &[&str]) -> String {
        let mut csv = HEADER.to_string();
        for row in rows {
            csv.push('\n');
            csv.push_str(row);
        }
        csv.push('\n');
        csv
    }

    #[test]
    fn loader_parses_raw_headers_and_padded_cells() {
        let csv = csv_with(&[
            "2015, spring ,2500,1500,750,85.0,78.0,225,187,150,188",
            "2015.0,Fall,2550,1530,765,85.0,78.2,229,191,153,192",
        ]);
        let dataset = DatasetLoader::from_reader(Cursor::new(csv)).expect("dataset loads");

        assert_eq!(dataset.len(), 2);
        let first = &dataset.records()[0];
        assert_eq!(first.year, 2015);
        assert_eq!(first.term, Term::Spring);
        assert_eq!(first.departments.business, 187);
        assert_eq!(dataset.records()[1].year, 2015);
        assert_eq!(dataset.records()[1].term, Term::Fall);
    }

    #[test]
    fn loader_accepts_already_normalized_headers() {
        let csv = "Year,Term,Applications,Admitted,Enrolled,Retention_Rate_(%),Student_Satisfaction_(%),Engineering_Enrolled,Business_Enrolled,Arts_Enrolled,Science_Enrolled\n\
2020,Fall,10,5,4,90,80,1,1,1,1\n";
        let dataset = DatasetLoader::from_reader(Cursor::new(csv)).expect("dataset loads");
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn loader_rejects_missing_columns() {
        let csv = "Year,Term,Applications,Admitted,Enrolled\n2015,Spring,1,1,1\n";
        let error = DatasetLoader::from_reader(Cursor::new(csv)).expect_err("schema error");

        match error {
            DatasetError::Schema(SchemaError::Missing(missing)) => {
                assert!(missing.contains(&"Retention_Rate_(%)"));
                assert!(missing.contains(&"Arts_Enrolled"));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn loader_rejects_retention_column_given_twice() {
        let csv = "Year,Term,Applications,Admitted,Enrolled,Retention Rate (%),RetentionRate,Student Satisfaction (%),Engineering Enrolled,Business Enrolled,Arts Enrolled,Science Enrolled
2015,Spring,1,1,1,80,81,70,1,0,0,0
";
        let error = DatasetLoader::from_reader(Cursor::new(csv)).expect_err("duplicate column");

        match error {
            DatasetError::Schema(SchemaError::Duplicate(columns)) => {
                assert_eq!(columns, vec!["Retention_Rate_(%)"]);
            }
            other => panic!("expected duplicate column error, got {other:?}"),
        }
    }

    #[test]
    fn loader_rejects_unknown_terms() {
        let csv = csv_with(&["2015,Summer,1,1,1,50,50,1,0,0,0"]);
        let error = DatasetLoader::from_reader(Cursor::new(csv)).expect_err("bad term");
        assert!(matches!(error, DatasetError::Malformed(_)));
    }

    #[test]
    fn loader_rejects_negative_counts() {
        let csv = csv_with(&["2015,Fall,-1,1,1,50,50,1,0,0,0"]);
        let error = DatasetLoader::from_reader(Cursor::new(csv)).expect_err("negative count");
        assert!(matches!(error, DatasetError::Malformed(_)));
    }

    #[test]
    fn loader_rejects_out_of_range_rates() {
        let csv = csv_with(&[
            "2015,Fall,1,1,1,50,50,1,0,0,0",
            "2016,Fall,1,1,1,50,140,1,0,0,0",
        ]);
        let error = DatasetLoader::from_reader(Cursor::new(csv)).expect_err("rate too high");

        match error {
            DatasetError::OutOfRange { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Student_Satisfaction_(%)");
                assert_eq!(value, 140.0);
            }
            other => panic!("expected range error, got {other:?}"),
        }
    }

    #[test]
    fn loader_from_path_propagates_io_errors() {
        let error = DatasetLoader::from_path("./does-not-exist.csv").expect_err("io error");
        assert!(matches!(error, DatasetError::Load(_)));
    }

    #[test]
    fn header_only_file_yields_empty_dataset() {
        let dataset =
            DatasetLoader::from_reader(Cursor::new(csv_with(&[]))).expect("dataset loads");
        assert!(dataset.is_empty());
        assert!(dataset.years().is_empty());
    }
}
