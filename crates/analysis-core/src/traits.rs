use async_trait::async_trait;
use crate::{AnalysisError, AnalysisResult, FinancialReport};

/// Trait for statement analysis engines
#[async_trait]
pub trait StatementAnalyzer: Send + Sync {
    async fn analyze(&self, report: &FinancialReport) -> Result<AnalysisResult, AnalysisError>;
}

/// Read access to persisted reports.
///
/// Implemented by the persistence layer; the engine only ever reads through it.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn get_report(&self, id: i64) -> Option<FinancialReport>;
}
