use analysis_core::{
    resolve_report, round_to, safe_percent, AnalysisError, Caller, CompareResponse, CompareRow,
    FinancialReport, ReportData, ReportStore, numeric::RATIO_PRECISION,
};
use fundamental_analysis::NormalizedMetrics;
use serde::{Deserialize, Serialize};

/// Indicators tracked by the period comparison, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Revenue,
    GrossProfit,
    SalesProfit,
    ProfitBeforeTax,
    NetProfit,
    TotalAssets,
    NonCurrentAssets,
    CurrentAssets,
    Equity,
    LongTermLiabilities,
    ShortTermLiabilities,
}

impl Indicator {
    /// Canonical row order of every comparison table.
    pub const ALL: [Indicator; 11] = [
        Indicator::Revenue,
        Indicator::GrossProfit,
        Indicator::SalesProfit,
        Indicator::ProfitBeforeTax,
        Indicator::NetProfit,
        Indicator::TotalAssets,
        Indicator::NonCurrentAssets,
        Indicator::CurrentAssets,
        Indicator::Equity,
        Indicator::LongTermLiabilities,
        Indicator::ShortTermLiabilities,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Indicator::Revenue => "revenue",
            Indicator::GrossProfit => "gross_profit",
            Indicator::SalesProfit => "sales_profit",
            Indicator::ProfitBeforeTax => "profit_before_tax",
            Indicator::NetProfit => "net_profit",
            Indicator::TotalAssets => "total_assets",
            Indicator::NonCurrentAssets => "total_non_current_assets",
            Indicator::CurrentAssets => "total_current_assets",
            Indicator::Equity => "equity",
            Indicator::LongTermLiabilities => "long_term_liabilities",
            Indicator::ShortTermLiabilities => "short_term_liabilities",
        }
    }

    pub fn to_label(&self) -> &'static str {
        match self {
            Indicator::Revenue => "Revenue",
            Indicator::GrossProfit => "Gross profit",
            Indicator::SalesProfit => "Profit from sales",
            Indicator::ProfitBeforeTax => "Profit before tax",
            Indicator::NetProfit => "Net profit",
            Indicator::TotalAssets => "Total assets",
            Indicator::NonCurrentAssets => "Non-current assets",
            Indicator::CurrentAssets => "Current assets",
            Indicator::Equity => "Equity",
            Indicator::LongTermLiabilities => "Long-term liabilities",
            Indicator::ShortTermLiabilities => "Short-term liabilities",
        }
    }

    pub fn value(&self, m: &NormalizedMetrics) -> f64 {
        match self {
            Indicator::Revenue => m.revenue,
            Indicator::GrossProfit => m.gross_profit,
            Indicator::SalesProfit => m.sales_profit,
            Indicator::ProfitBeforeTax => m.profit_before_tax,
            Indicator::NetProfit => m.net_profit,
            Indicator::TotalAssets => m.current_assets + m.non_current_assets,
            Indicator::NonCurrentAssets => m.non_current_assets,
            Indicator::CurrentAssets => m.current_assets,
            Indicator::Equity => m.equity,
            Indicator::LongTermLiabilities => m.long_liabilities,
            Indicator::ShortTermLiabilities => m.short_liabilities,
        }
    }
}

/// Period-over-period comparison of two reports.
#[derive(Clone, Default)]
pub struct ReportComparator;

impl ReportComparator {
    pub fn new() -> Self {
        Self
    }

    /// Compare a base period against a current period.
    pub fn compare(&self, base: &FinancialReport, current: &FinancialReport) -> CompareResponse {
        if base.organization_name != current.organization_name {
            tracing::warn!(
                "Comparing reports of different organizations: '{}' vs '{}'",
                base.organization_name,
                current.organization_name
            );
        }

        let rows = self.compare_data(&base.data, &current.data);
        tracing::info!(
            "Compared {} ({}) against {} ({}): {} rows",
            current.id,
            current.period,
            base.id,
            base.period,
            rows.len()
        );

        CompareResponse {
            organization: current.organization_name.clone(),
            period_base: base.period.clone(),
            period_current: current.period.clone(),
            rows,
        }
    }

    /// Diff rows for bare statement data, in [`Indicator::ALL`] order.
    pub fn compare_data(&self, base: &ReportData, current: &ReportData) -> Vec<CompareRow> {
        let base = NormalizedMetrics::from_report(base);
        let current = NormalizedMetrics::from_report(current);

        Indicator::ALL
            .iter()
            .map(|indicator| {
                Self::calculate_difference(*indicator, indicator.value(&base), indicator.value(&current))
            })
            .collect()
    }

    /// Resolve both reports on behalf of `caller`, then compare them.
    pub async fn compare_by_id(
        &self,
        store: &dyn ReportStore,
        caller: &Caller,
        base_id: i64,
        current_id: i64,
    ) -> Result<CompareResponse, AnalysisError> {
        let base = resolve_report(store, caller, base_id).await?;
        let current = resolve_report(store, caller, current_id).await?;
        Ok(self.compare(&base, &current))
    }

    fn calculate_difference(indicator: Indicator, value_base: f64, value_current: f64) -> CompareRow {
        let absolute_change = round_to(value_current - value_base, RATIO_PRECISION);

        CompareRow {
            indicator: indicator.name().to_string(),
            label: indicator.to_label().to_string(),
            value_base,
            value_current,
            absolute_change,
            growth_rate_percent: safe_percent(absolute_change, value_base),
        }
    }
}
