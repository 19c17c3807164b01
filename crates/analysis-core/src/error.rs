use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Report not found: {0}")]
    NotFound(i64),

    #[error("Not authorized to access report {0}")]
    Unauthorized(i64),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}
