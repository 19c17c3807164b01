use analysis_core::{
    resolve_report, AnalysisError, AnalysisResult, BankruptcyAssessment, Caller, FinancialReport,
    ReportData, ReportStore, StatementAnalyzer,
};
use async_trait::async_trait;

use crate::bankruptcy::BankruptcyModel;
use crate::metrics::NormalizedMetrics;
use crate::ratios::RatioAnalyzer;

/// Runs every ratio block and every risk model over one report.
pub struct FinancialAnalysisEngine;

impl FinancialAnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Analyze bare statement data. The returned result carries no report identity.
    pub fn analyze_data(&self, data: &ReportData) -> AnalysisResult {
        let metrics = NormalizedMetrics::from_report(data);
        if metrics.is_degenerate() {
            tracing::warn!("Report has no asset totals; ratios over total assets use 1.0");
        }

        let ratios = RatioAnalyzer::new(&metrics);

        AnalysisResult {
            report_id: None,
            organization_name: None,
            period: None,
            vertical: ratios.vertical(),
            liquidity: ratios.liquidity(),
            profitability: ratios.profitability(),
            stability: ratios.stability(),
            activity: ratios.activity(),
            bankruptcy: BankruptcyAssessment {
                five_factor: BankruptcyModel::FiveFactor.evaluate(&metrics),
                four_factor: BankruptcyModel::FourFactor.evaluate(&metrics),
                regional_four_factor: BankruptcyModel::RegionalFourFactor.evaluate(&metrics),
            },
            scoring: BankruptcyModel::Scoring.evaluate(&metrics),
        }
    }

    pub fn perform_full_analysis(&self, report: &FinancialReport) -> AnalysisResult {
        tracing::info!(
            "Analyzing report {} ({}, {})",
            report.id,
            report.organization_name,
            report.period
        );

        let mut result = self.analyze_data(&report.data);
        result.report_id = Some(report.id);
        result.organization_name = Some(report.organization_name.clone());
        result.period = Some(report.period.clone());

        tracing::debug!(
            "Report {}: scoring {} ({}), five-factor {} ({})",
            report.id,
            result.scoring.score,
            result.scoring.conclusion,
            result.bankruptcy.five_factor.score,
            result.bankruptcy.five_factor.conclusion
        );
        result
    }

    /// Resolve a stored report on behalf of `caller` and analyze it.
    pub async fn analyze_by_id(
        &self,
        store: &dyn ReportStore,
        caller: &Caller,
        report_id: i64,
    ) -> Result<AnalysisResult, AnalysisError> {
        let report = resolve_report(store, caller, report_id).await?;
        Ok(self.perform_full_analysis(&report))
    }
}

#[async_trait]
impl StatementAnalyzer for FinancialAnalysisEngine {
    async fn analyze(&self, report: &FinancialReport) -> Result<AnalysisResult, AnalysisError> {
        Ok(self.perform_full_analysis(report))
    }
}

impl Default for FinancialAnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
