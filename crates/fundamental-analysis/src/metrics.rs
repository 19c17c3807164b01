use analysis_core::{normalize, ReportData};
use serde::{Deserialize, Serialize};

/// Null-free snapshot of the figures the analyzers read, built once per request.
///
/// `total_assets` is the sum of the two asset section totals. A report whose sum is
/// exactly zero gets `1.0` instead, so every ratio over total assets stays finite.
/// The stored balance total (line 1700) is not consulted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMetrics {
    pub non_current_assets: f64,
    pub current_assets: f64,
    pub total_assets: f64,
    pub inventory: f64,
    pub cash: f64,

    pub equity: f64,
    pub retained_earnings: f64,
    pub long_liabilities: f64,
    pub short_liabilities: f64,
    pub total_liabilities: f64,

    pub revenue: f64,
    pub cost_of_sales: f64,
    pub gross_profit: f64,
    pub sales_profit: f64,
    pub profit_before_tax: f64,
    pub net_profit: f64,
}

impl NormalizedMetrics {
    pub fn from_report(data: &ReportData) -> Self {
        let a = &data.assets;
        let l = &data.liabilities;
        let p = &data.profit_loss;

        let non_current_assets = normalize(a.total_non_current_assets);
        let current_assets = normalize(a.total_current_assets);
        let asset_sum = current_assets + non_current_assets;
        let total_assets = if asset_sum == 0.0 { 1.0 } else { asset_sum };

        let long_liabilities = normalize(l.total_long_term_liabilities);
        let short_liabilities = normalize(l.total_short_term_liabilities);

        Self {
            non_current_assets,
            current_assets,
            total_assets,
            inventory: normalize(a.inventory),
            cash: normalize(a.cash_and_equivalents),

            equity: normalize(l.total_capital),
            retained_earnings: normalize(l.retained_earnings),
            long_liabilities,
            short_liabilities,
            total_liabilities: short_liabilities + long_liabilities,

            revenue: normalize(p.revenue),
            cost_of_sales: normalize(p.cost_of_sales),
            gross_profit: normalize(p.gross_profit),
            sales_profit: normalize(p.sales_profit),
            profit_before_tax: normalize(p.profit_before_tax),
            net_profit: normalize(p.net_profit),
        }
    }

    /// Whether both asset section totals were zero or missing.
    pub fn is_degenerate(&self) -> bool {
        self.current_assets + self.non_current_assets == 0.0
    }
}

impl From<&ReportData> for NormalizedMetrics {
    fn from(data: &ReportData) -> Self {
        Self::from_report(data)
    }
}
