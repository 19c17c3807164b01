use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Balance sheet sections I and II (non-current and current assets).
///
/// Section totals are supplied by the source document and are not guaranteed to equal
/// the sum of their sub-items; analyzers use the totals as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assets {
    // Section I: non-current assets
    pub intangible_assets: Option<f64>,
    pub research_and_dev_results: Option<f64>,
    pub intangible_search_assets: Option<f64>,
    pub tangible_search_assets: Option<f64>,
    pub fixed_assets: Option<f64>,
    pub income_bearing_investments: Option<f64>,
    pub long_term_financial_investments: Option<f64>,
    pub deferred_tax_assets: Option<f64>,
    pub other_non_current_assets: Option<f64>,
    pub total_non_current_assets: Option<f64>,

    // Section II: current assets
    pub inventory: Option<f64>,
    pub vat_receivable: Option<f64>,
    pub accounts_receivable: Option<f64>,
    pub financial_investments_sec_section: Option<f64>,
    pub cash_and_equivalents: Option<f64>,
    pub other_current_assets: Option<f64>,
    pub total_current_assets: Option<f64>,
}

/// Balance sheet sections III, IV and V (equity, long-term and short-term liabilities).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Liabilities {
    // Section III: capital and reserves
    pub authorized_capital: Option<f64>,
    pub own_shares_bought: Option<f64>,
    pub non_current_assets_revaluation: Option<f64>,
    pub additional_capital: Option<f64>,
    pub reserve_capital: Option<f64>,
    pub retained_earnings: Option<f64>,
    pub total_capital: Option<f64>,

    // Section IV: long-term liabilities
    pub long_term_borrowings: Option<f64>,
    pub deferred_tax_liabilities: Option<f64>,
    pub estimated_liabilities: Option<f64>,
    pub other_long_term_liabilities: Option<f64>,
    pub total_long_term_liabilities: Option<f64>,

    // Section V: short-term liabilities
    pub short_term_borrowings: Option<f64>,
    pub accounts_payable: Option<f64>,
    pub future_income: Option<f64>,
    pub estimated_short_term_liabilities: Option<f64>,
    pub other_short_term_liabilities: Option<f64>,
    pub total_short_term_liabilities: Option<f64>,

    pub total_balance_liabilities: Option<f64>,
}

/// Income statement line items.
///
/// Expense lines (cost of sales, commercial and administrative expenses) are
/// conventionally stored as negative figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitLoss {
    pub revenue: Option<f64>,
    pub cost_of_sales: Option<f64>,
    pub gross_profit: Option<f64>,
    pub commercial_expenses: Option<f64>,
    pub administrative_expenses: Option<f64>,
    pub sales_profit: Option<f64>,

    pub participation_income: Option<f64>,
    pub interest_receivable: Option<f64>,
    pub interest_payable: Option<f64>,
    pub other_income: Option<f64>,
    pub other_expenses: Option<f64>,
    pub profit_before_tax: Option<f64>,

    pub income_tax: Option<f64>,
    pub current_income_tax: Option<f64>,
    pub deferred_income_tax: Option<f64>,
    pub other_operations: Option<f64>,

    pub net_profit: Option<f64>,
}

/// The three statement sections the engine reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportData {
    pub assets: Assets,
    pub liabilities: Liabilities,
    pub profit_loss: ProfitLoss,
}

/// A stored report as handed over by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialReport {
    pub id: i64,
    pub user_id: i64,
    pub organization_name: String,
    pub period: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub data: ReportData,
}

/// Upload payload for a new report, before it has an id or an owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReportCreate {
    pub organization_name: String,
    pub period: String,
    #[serde(flatten)]
    pub data: ReportData,
}

impl FinancialReportCreate {
    /// Attach storage identity to an upload.
    pub fn into_report(self, id: i64, user_id: i64) -> FinancialReport {
        FinancialReport {
            id,
            user_id,
            organization_name: self.organization_name,
            period: self.period,
            created_at: Utc::now(),
            data: self.data,
        }
    }
}

/// Coarse risk bucket shared by every discriminant and scoring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Uncertain,
    High,
}

impl RiskLevel {
    pub fn to_label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Uncertain => "Uncertain",
            RiskLevel::High => "High",
        }
    }
}

/// Structure of the balance sheet as shares of total assets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalAnalysis {
    pub non_current_assets_share: f64,
    pub current_assets_share: f64,
    pub equity_share: f64,
    pub liabilities_share: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiquidityRatios {
    pub current_ratio: f64,
    pub quick_ratio: f64,
    pub absolute_ratio: f64,
}

/// Return ratios, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityRatios {
    pub ros: f64,
    pub roa: f64,
    pub roe: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityRatios {
    pub autonomy: f64,
    pub debt_to_equity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityRatios {
    pub asset_turnover: f64,
    pub inventory_days: f64,
}

/// Score and interpretation produced by one bankruptcy or scoring model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelVerdict {
    pub model: String,
    pub score: f64,
    pub risk: RiskLevel,
    pub conclusion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankruptcyAssessment {
    pub five_factor: ModelVerdict,
    pub four_factor: ModelVerdict,
    pub regional_four_factor: ModelVerdict,
}

/// Full analysis of a single report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub report_id: Option<i64>,
    pub organization_name: Option<String>,
    pub period: Option<String>,
    pub vertical: VerticalAnalysis,
    pub liquidity: LiquidityRatios,
    pub profitability: ProfitabilityRatios,
    pub stability: StabilityRatios,
    pub activity: ActivityRatios,
    pub bankruptcy: BankruptcyAssessment,
    pub scoring: ModelVerdict,
}

/// One line of a two-period comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareRow {
    pub indicator: String,
    pub label: String,
    pub value_base: f64,
    pub value_current: f64,
    pub absolute_change: f64,
    pub growth_rate_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareResponse {
    pub organization: String,
    pub period_base: String,
    pub period_current: String,
    pub rows: Vec<CompareRow>,
}
