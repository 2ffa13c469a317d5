use thiserror::Error;

pub type ShiftResult<T> = Result<T, ShiftError>;

#[derive(Error, Debug)]
pub enum ShiftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("failed to decode table: {0}")]
    Table(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("sheet '{name}' not found, available: {available:?}")]
    SheetNotFound { name: String, available: Vec<String> },

    #[error("workbook has several sheets, select one with --sheet, available: {available:?}")]
    SheetSelectionRequired { available: Vec<String> },

    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid value: {0}")]
    Invalid(String),
}
