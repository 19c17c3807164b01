use std::collections::HashMap;
use std::sync::LazyLock;

/// Statutory line codes of the balance sheet (1xxx) and the income statement (2xxx),
/// mapped to report field names.
pub const CODE_FIELD_MAP: &[(&str, &str)] = &[
    // Section I: non-current assets
    ("1110", "intangible_assets"),
    ("1120", "research_and_dev_results"),
    ("1130", "intangible_search_assets"),
    ("1140", "tangible_search_assets"),
    ("1150", "fixed_assets"),
    ("1160", "income_bearing_investments"),
    ("1170", "long_term_financial_investments"),
    ("1180", "deferred_tax_assets"),
    ("1190", "other_non_current_assets"),
    ("1100", "total_non_current_assets"),
    // Section II: current assets
    ("1210", "inventory"),
    ("1220", "vat_receivable"),
    ("1230", "accounts_receivable"),
    ("1240", "financial_investments_sec_section"),
    ("1250", "cash_and_equivalents"),
    ("1260", "other_current_assets"),
    ("1200", "total_current_assets"),
    // Section III: capital and reserves
    ("1310", "authorized_capital"),
    ("1320", "own_shares_bought"),
    ("1340", "non_current_assets_revaluation"),
    ("1350", "additional_capital"),
    ("1360", "reserve_capital"),
    ("1370", "retained_earnings"),
    ("1300", "total_capital"),
    // Section IV: long-term liabilities
    ("1410", "long_term_borrowings"),
    ("1420", "deferred_tax_liabilities"),
    ("1430", "estimated_liabilities"),
    ("1450", "other_long_term_liabilities"),
    ("1400", "total_long_term_liabilities"),
    // Section V: short-term liabilities
    ("1510", "short_term_borrowings"),
    ("1520", "accounts_payable"),
    ("1530", "future_income"),
    ("1540", "estimated_short_term_liabilities"),
    ("1550", "other_short_term_liabilities"),
    ("1500", "total_short_term_liabilities"),
    ("1700", "total_balance_liabilities"),
    // Income statement
    ("2110", "revenue"),
    ("2120", "cost_of_sales"),
    ("2100", "gross_profit"),
    ("2210", "commercial_expenses"),
    ("2220", "administrative_expenses"),
    ("2200", "sales_profit"),
    ("2310", "participation_income"),
    ("2320", "interest_receivable"),
    ("2330", "interest_payable"),
    ("2340", "other_income"),
    ("2350", "other_expenses"),
    ("2300", "profit_before_tax"),
    ("2410", "income_tax"),
    ("2460", "other_operations"),
    ("2400", "net_profit"),
];

static CODE_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CODE_FIELD_MAP.iter().copied().collect());

/// Look up the report field for a line code. Matching is exact: no trimming,
/// no case folding.
pub fn field_for_code(code: &str) -> Option<&'static str> {
    CODE_INDEX.get(code).copied()
}
