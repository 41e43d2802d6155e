use crate::config::ConfigError;
use crate::dashboard::DatasetError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Dataset(DatasetError),
    Render(serde_json::Error),
    Format(std::fmt::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Dataset(err) => write!(f, "dataset error: {}", err),
            AppError::Render(err) => write!(f, "render error: {}", err),
            AppError::Format(err) => write!(f, "format error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Dataset(err) => Some(err),
            AppError::Render(err) => Some(err),
            AppError::Format(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<DatasetError> for AppError {
    fn from(value: DatasetError) -> Self {
        Self::Dataset(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Render(value)
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(value: std::fmt::Error) -> Self {
        Self::Format(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::SchemaError;
    use std::error::Error as _;

    #[test]
    fn dataset_errors_name_the_missing_columns() {
        let error = AppError::from(DatasetError::Schema(SchemaError::Missing(vec!["Term"])));
        assert_eq!(
            error.to_string(),
            "dataset error: dataset is missing required column(s): Term"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn config_errors_keep_their_source() {
        let error = AppError::from(ConfigError::InvalidPort);
        assert!(error.to_string().starts_with("configuration error:"));
        let source = error.source().expect("config error source");
        assert_eq!(source.to_string(), ConfigError::InvalidPort.to_string());
    }

    #[test]
    fn format_errors_convert() {
        let error = AppError::from(std::fmt::Error);
        assert!(matches!(error, AppError::Format(_)));
        assert!(error.to_string().starts_with("format error:"));
    }
}
