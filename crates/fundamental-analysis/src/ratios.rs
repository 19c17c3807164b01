use analysis_core::{
    round_to, safe_divide, safe_percent, ActivityRatios, LiquidityRatios, ProfitabilityRatios,
    StabilityRatios, VerticalAnalysis,
};

use crate::metrics::NormalizedMetrics;

const DAYS_IN_YEAR: f64 = 365.0;

/// Coefficient analysis over one normalized report.
pub struct RatioAnalyzer<'a> {
    m: &'a NormalizedMetrics,
}

impl<'a> RatioAnalyzer<'a> {
    pub fn new(metrics: &'a NormalizedMetrics) -> Self {
        Self { m: metrics }
    }

    /// Each balance sheet section as a share of total assets.
    pub fn vertical(&self) -> VerticalAnalysis {
        let m = self.m;
        VerticalAnalysis {
            non_current_assets_share: safe_divide(m.non_current_assets, m.total_assets),
            current_assets_share: safe_divide(m.current_assets, m.total_assets),
            equity_share: safe_divide(m.equity, m.total_assets),
            liabilities_share: safe_divide(m.long_liabilities + m.short_liabilities, m.total_assets),
        }
    }

    /// Current, quick and absolute liquidity against short-term liabilities.
    ///
    /// The quick ratio goes negative when inventory exceeds current assets.
    pub fn liquidity(&self) -> LiquidityRatios {
        let m = self.m;
        LiquidityRatios {
            current_ratio: safe_divide(m.current_assets, m.short_liabilities),
            quick_ratio: safe_divide(m.current_assets - m.inventory, m.short_liabilities),
            absolute_ratio: safe_divide(m.cash, m.short_liabilities),
        }
    }

    pub fn profitability(&self) -> ProfitabilityRatios {
        let m = self.m;
        ProfitabilityRatios {
            ros: safe_percent(m.net_profit, m.revenue),
            roa: safe_percent(m.net_profit, m.total_assets),
            roe: safe_percent(m.net_profit, m.equity),
        }
    }

    pub fn stability(&self) -> StabilityRatios {
        let m = self.m;
        StabilityRatios {
            autonomy: safe_divide(m.equity, m.total_assets),
            debt_to_equity: safe_divide(m.total_liabilities, m.equity),
        }
    }

    /// Asset turnover and inventory days.
    ///
    /// Cost of sales is stored as a negative expense, so its magnitude is used for the
    /// inventory period.
    pub fn activity(&self) -> ActivityRatios {
        let m = self.m;
        let inventory_days = if m.cost_of_sales != 0.0 {
            round_to(DAYS_IN_YEAR * m.inventory / m.cost_of_sales.abs(), 1)
        } else {
            0.0
        };

        ActivityRatios {
            asset_turnover: safe_divide(m.revenue, m.total_assets),
            inventory_days,
        }
    }
}
