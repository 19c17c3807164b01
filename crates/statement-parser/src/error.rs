use analysis_core::AnalysisError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unreadable workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Workbook contains no worksheets")]
    EmptyWorkbook,

    #[error("Line items do not fit the report schema: {0}")]
    Schema(#[from] serde_json::Error),
}

impl From<ParseError> for AnalysisError {
    fn from(err: ParseError) -> Self {
        AnalysisError::Parse(err.to_string())
    }
}
