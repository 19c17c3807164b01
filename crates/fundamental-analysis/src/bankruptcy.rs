//! Bankruptcy prediction and borrower scoring models.
//!
//! Three linear discriminant models and one additive points model, all evaluated
//! over the same [`NormalizedMetrics`] snapshot:
//!
//! ```text
//! Five-factor (Altman, private firms):
//!   Z = 0.717*X1 + 0.847*X2 + 3.107*X3 + 0.420*X4 + 0.998*X5
//!   X1 = (current assets - short-term liabilities) / total assets
//!   X2 = retained earnings / total assets
//!   X3 = profit before tax / total assets
//!   X4 = equity / total liabilities
//!   X5 = revenue / total assets
//!
//! Four-factor (Taffler):
//!   Z = 0.53*X1 + 0.13*X2 + 0.18*X3 + 0.16*X4
//!   X1 = sales profit / short-term liabilities
//!   X2 = current assets / total liabilities
//!   X3 = short-term liabilities / total assets
//!   X4 = revenue / total assets
//!
//! Regional four-factor (IGEA R-model):
//!   R = 8.38*K1 + K2 + 0.054*K3 + 0.63*K4
//!   K1 = current assets / total assets
//!   K2 = net profit / equity
//!   K3 = revenue / total assets
//!   K4 = net profit / cost of sales   (a zero cost of sales divides by 1)
//! ```
//!
//! Discriminant scores are rounded to 3 places; thresholds are applied to the unrounded
//! score.

use analysis_core::{
    numeric::SCORE_PRECISION, round_to, safe_divide, ModelVerdict, RiskLevel,
};
use serde::{Deserialize, Serialize};

use crate::metrics::NormalizedMetrics;

/// One weighted input of a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factor {
    pub name: &'static str,
    pub value: f64,
    pub weight: f64,
}

impl Factor {
    fn new(name: &'static str, value: f64, weight: f64) -> Self {
        Self { name, value, weight }
    }

    fn contribution(&self) -> f64 {
        self.weight * self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankruptcyModel {
    FiveFactor,
    FourFactor,
    RegionalFourFactor,
    Scoring,
}

impl BankruptcyModel {
    pub const ALL: [BankruptcyModel; 4] = [
        BankruptcyModel::FiveFactor,
        BankruptcyModel::FourFactor,
        BankruptcyModel::RegionalFourFactor,
        BankruptcyModel::Scoring,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BankruptcyModel::FiveFactor => "five_factor",
            BankruptcyModel::FourFactor => "four_factor",
            BankruptcyModel::RegionalFourFactor => "regional_four_factor",
            BankruptcyModel::Scoring => "scoring",
        }
    }

    pub fn to_label(&self) -> &'static str {
        match self {
            BankruptcyModel::FiveFactor => "Altman five-factor Z-score",
            BankruptcyModel::FourFactor => "Taffler four-factor Z-score",
            BankruptcyModel::RegionalFourFactor => "IGEA four-factor R-score",
            BankruptcyModel::Scoring => "Borrower points scoring",
        }
    }

    /// The weighted inputs of the model. For the points model each factor is the
    /// number of points awarded, with unit weight.
    pub fn factors(&self, m: &NormalizedMetrics) -> Vec<Factor> {
        match self {
            BankruptcyModel::FiveFactor => vec![
                Factor::new("x1", safe_divide(m.current_assets - m.short_liabilities, m.total_assets), 0.717),
                Factor::new("x2", safe_divide(m.retained_earnings, m.total_assets), 0.847),
                Factor::new("x3", safe_divide(m.profit_before_tax, m.total_assets), 3.107),
                Factor::new("x4", safe_divide(m.equity, m.total_liabilities), 0.420),
                Factor::new("x5", safe_divide(m.revenue, m.total_assets), 0.998),
            ],
            BankruptcyModel::FourFactor => vec![
                Factor::new("x1", safe_divide(m.sales_profit, m.short_liabilities), 0.53),
                Factor::new("x2", safe_divide(m.current_assets, m.total_liabilities), 0.13),
                Factor::new("x3", safe_divide(m.short_liabilities, m.total_assets), 0.18),
                Factor::new("x4", safe_divide(m.revenue, m.total_assets), 0.16),
            ],
            BankruptcyModel::RegionalFourFactor => {
                // Unlike safe_divide, a zero cost of sales keeps the profit term alive.
                let cost_of_sales = if m.cost_of_sales == 0.0 { 1.0 } else { m.cost_of_sales };
                vec![
                    Factor::new("k1", safe_divide(m.current_assets, m.total_assets), 8.38),
                    Factor::new("k2", safe_divide(m.net_profit, m.equity), 1.0),
                    Factor::new("k3", safe_divide(m.revenue, m.total_assets), 0.054),
                    Factor::new("k4", safe_divide(m.net_profit, cost_of_sales), 0.63),
                ]
            }
            BankruptcyModel::Scoring => {
                let current_ratio = safe_divide(m.current_assets, m.short_liabilities);
                let autonomy = safe_divide(m.equity, m.total_assets);

                let liquidity_points = if current_ratio >= 2.0 {
                    30.0
                } else if current_ratio >= 1.0 {
                    15.0
                } else {
                    0.0
                };
                let autonomy_points = if autonomy >= 0.5 { 20.0 } else { 0.0 };
                let profit_points = if m.net_profit > 0.0 { 20.0 } else { 0.0 };

                vec![
                    Factor::new("liquidity", liquidity_points, 1.0),
                    Factor::new("autonomy", autonomy_points, 1.0),
                    Factor::new("profitability", profit_points, 1.0),
                ]
            }
        }
    }

    pub fn evaluate(&self, m: &NormalizedMetrics) -> ModelVerdict {
        let raw: f64 = self.factors(m).iter().map(Factor::contribution).sum();
        let (risk, conclusion) = self.classify(raw);

        let score = match self {
            BankruptcyModel::Scoring => raw,
            _ => round_to(raw, SCORE_PRECISION),
        };

        ModelVerdict {
            model: self.name().to_string(),
            score,
            risk,
            conclusion: conclusion.to_string(),
        }
    }

    fn classify(&self, score: f64) -> (RiskLevel, &'static str) {
        match self {
            BankruptcyModel::FiveFactor => {
                if score < 1.23 {
                    (RiskLevel::High, "high bankruptcy probability")
                } else if score > 2.9 {
                    (RiskLevel::Low, "financially stable")
                } else {
                    (RiskLevel::Uncertain, "zone of uncertainty")
                }
            }
            BankruptcyModel::FourFactor => {
                if score > 0.3 {
                    (RiskLevel::Low, "low risk")
                } else if score < 0.2 {
                    (RiskLevel::High, "high risk")
                } else {
                    (RiskLevel::Uncertain, "uncertain")
                }
            }
            BankruptcyModel::RegionalFourFactor => {
                if score < 0.42 {
                    (RiskLevel::High, "very high bankruptcy probability")
                } else {
                    (RiskLevel::Low, "low probability (under ~10%)")
                }
            }
            BankruptcyModel::Scoring => {
                if score >= 50.0 {
                    (RiskLevel::Low, "Class 1 (excellent)")
                } else if score >= 30.0 {
                    (RiskLevel::Uncertain, "Class 2 (average)")
                } else {
                    (RiskLevel::High, "Class 3 (poor)")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_core::ReportData;

    #[derive(Default)]
    struct Fixture {
        current_assets: f64,
        non_current_assets: f64,
        short_liabilities: f64,
        long_liabilities: f64,
        equity: f64,
        retained_earnings: f64,
        revenue: f64,
        cost_of_sales: f64,
        sales_profit: f64,
        profit_before_tax: f64,
        net_profit: f64,
    }

    impl Fixture {
        fn metrics(&self) -> NormalizedMetrics {
            let mut data = ReportData::default();
            data.assets.total_current_assets = Some(self.current_assets);
            data.assets.total_non_current_assets = Some(self.non_current_assets);
            data.liabilities.total_short_term_liabilities = Some(self.short_liabilities);
            data.liabilities.total_long_term_liabilities = Some(self.long_liabilities);
            data.liabilities.total_capital = Some(self.equity);
            data.liabilities.retained_earnings = Some(self.retained_earnings);
            data.profit_loss.revenue = Some(self.revenue);
            data.profit_loss.cost_of_sales = Some(self.cost_of_sales);
            data.profit_loss.sales_profit = Some(self.sales_profit);
            data.profit_loss.profit_before_tax = Some(self.profit_before_tax);
            data.profit_loss.net_profit = Some(self.net_profit);
            NormalizedMetrics::from_report(&data)
        }
    }

    fn factor(model: BankruptcyModel, m: &NormalizedMetrics, name: &str) -> f64 {
        model
            .factors(m)
            .into_iter()
            .find(|f| f.name == name)
            .map(|f| f.value)
            .unwrap()
    }

    #[test]
    fn test_five_factor_worked_example() {
        let m = Fixture {
            current_assets: 150.0,
            non_current_assets: 850.0,
            short_liabilities: 100.0,
            long_liabilities: 500.0,
            equity: 400.0,
            retained_earnings: 50.0,
            profit_before_tax: 80.0,
            revenue: 900.0,
            ..Default::default()
        }
        .metrics();

        assert_eq!(factor(BankruptcyModel::FiveFactor, &m, "x1"), 0.05);
        assert_eq!(factor(BankruptcyModel::FiveFactor, &m, "x4"), 0.6667);

        // 0.717*0.05 + 0.847*0.05 + 3.107*0.08 + 0.420*0.6667 + 0.998*0.9 = 1.504974
        let verdict = BankruptcyModel::FiveFactor.evaluate(&m);
        assert_eq!(verdict.score, 1.505);
        assert_eq!(verdict.risk, RiskLevel::Uncertain);
        assert_eq!(verdict.conclusion, "zone of uncertainty");
        assert_eq!(verdict.model, "five_factor");
    }

    #[test]
    fn test_five_factor_stable_and_distressed() {
        let stable = Fixture {
            current_assets: 800.0,
            non_current_assets: 200.0,
            short_liabilities: 100.0,
            equity: 900.0,
            retained_earnings: 300.0,
            profit_before_tax: 300.0,
            revenue: 2000.0,
            ..Default::default()
        }
        .metrics();
        let verdict = BankruptcyModel::FiveFactor.evaluate(&stable);
        assert_eq!(verdict.score, 7.464);
        assert_eq!(verdict.conclusion, "financially stable");

        let distressed = Fixture {
            current_assets: 100.0,
            non_current_assets: 900.0,
            short_liabilities: 300.0,
            long_liabilities: 400.0,
            equity: 300.0,
            retained_earnings: -100.0,
            profit_before_tax: -50.0,
            revenue: 200.0,
            ..Default::default()
        }
        .metrics();
        let verdict = BankruptcyModel::FiveFactor.evaluate(&distressed);
        assert_eq!(verdict.score, -0.004);
        assert_eq!(verdict.risk, RiskLevel::High);
        assert_eq!(verdict.conclusion, "high bankruptcy probability");
    }

    #[test]
    fn test_four_factor_zones() {
        let base = Fixture {
            current_assets: 300.0,
            non_current_assets: 700.0,
            short_liabilities: 200.0,
            long_liabilities: 300.0,
            sales_profit: 100.0,
            revenue: 1500.0,
            ..Default::default()
        };

        let verdict = BankruptcyModel::FourFactor.evaluate(&base.metrics());
        assert_eq!(verdict.score, 0.619);
        assert_eq!(verdict.conclusion, "low risk");

        let uncertain = Fixture { sales_profit: 20.0, revenue: 500.0, ..base };
        let verdict = BankruptcyModel::FourFactor.evaluate(&uncertain.metrics());
        assert_eq!(verdict.score, 0.247);
        assert_eq!(verdict.risk, RiskLevel::Uncertain);
        assert_eq!(verdict.conclusion, "uncertain");

        let weak = Fixture { sales_profit: -60.0, revenue: 500.0, ..base };
        let verdict = BankruptcyModel::FourFactor.evaluate(&weak.metrics());
        assert_eq!(verdict.score, 0.035);
        assert_eq!(verdict.conclusion, "high risk");
    }

    #[test]
    fn test_regional_k4_divides_by_one_without_cost_of_sales() {
        let m = Fixture { net_profit: 100.0, ..Default::default() }.metrics();
        assert_eq!(factor(BankruptcyModel::RegionalFourFactor, &m, "k4"), 100.0);

        let verdict = BankruptcyModel::RegionalFourFactor.evaluate(&m);
        assert_eq!(verdict.score, 63.0);
        assert_eq!(verdict.conclusion, "low probability (under ~10%)");
    }

    #[test]
    fn test_regional_high_probability() {
        let m = Fixture {
            current_assets: 100.0,
            non_current_assets: 900.0,
            equity: 500.0,
            revenue: 1000.0,
            cost_of_sales: -800.0,
            net_profit: -500.0,
            ..Default::default()
        }
        .metrics();

        // 8.38*0.1 - 1.0 + 0.054*1.0 + 0.63*0.625 = 0.28575
        let verdict = BankruptcyModel::RegionalFourFactor.evaluate(&m);
        assert_eq!(verdict.score, 0.286);
        assert_eq!(verdict.risk, RiskLevel::High);
        assert_eq!(verdict.conclusion, "very high bankruptcy probability");
    }

    #[test]
    fn test_scoring_awards_liquidity_points() {
        let m = Fixture {
            current_assets: 200.0,
            short_liabilities: 100.0,
            ..Default::default()
        }
        .metrics();
        assert_eq!(factor(BankruptcyModel::Scoring, &m, "liquidity"), 30.0);
        // Autonomy is 0 (no equity), no profit: 30 points
        let verdict = BankruptcyModel::Scoring.evaluate(&m);
        assert_eq!(verdict.score, 30.0);
        assert_eq!(verdict.conclusion, "Class 2 (average)");
    }

    #[test]
    fn test_scoring_boundaries_are_inclusive() {
        // current ratio exactly 1.0, autonomy exactly 0.5, profit exactly 0
        let m = Fixture {
            current_assets: 100.0,
            non_current_assets: 100.0,
            short_liabilities: 100.0,
            equity: 100.0,
            ..Default::default()
        }
        .metrics();
        assert_eq!(factor(BankruptcyModel::Scoring, &m, "liquidity"), 15.0);
        assert_eq!(factor(BankruptcyModel::Scoring, &m, "autonomy"), 20.0);
        assert_eq!(factor(BankruptcyModel::Scoring, &m, "profitability"), 0.0);
        assert_eq!(BankruptcyModel::Scoring.evaluate(&m).score, 35.0);

        // 30 + 20 = 50 is already class 1
        let m = Fixture {
            current_assets: 200.0,
            non_current_assets: 200.0,
            short_liabilities: 100.0,
            equity: 200.0,
            ..Default::default()
        }
        .metrics();
        let verdict = BankruptcyModel::Scoring.evaluate(&m);
        assert_eq!(verdict.score, 50.0);
        assert_eq!(verdict.risk, RiskLevel::Low);
        assert_eq!(verdict.conclusion, "Class 1 (excellent)");
    }

    #[test]
    fn test_scoring_points_are_whole_numbers() {
        let m = Fixture {
            current_assets: 150.0,
            non_current_assets: 850.0,
            short_liabilities: 100.0,
            equity: 300.0,
            net_profit: 1.0,
            ..Default::default()
        }
        .metrics();
        let verdict = BankruptcyModel::Scoring.evaluate(&m);
        assert_eq!(verdict.score, 35.0);
        assert_eq!(verdict.score.fract(), 0.0);
        assert_eq!(verdict.score as u32, 35);
    }

    #[test]
    fn test_scoring_poor_class() {
        let m = Fixture {
            current_assets: 150.0,
            non_current_assets: 850.0,
            short_liabilities: 100.0,
            net_profit: -1.0,
            ..Default::default()
        }
        .metrics();
        let verdict = BankruptcyModel::Scoring.evaluate(&m);
        assert_eq!(verdict.score, 15.0);
        assert_eq!(verdict.conclusion, "Class 3 (poor)");
    }

    #[test]
    fn test_degenerate_report_evaluates_every_model() {
        let m = NormalizedMetrics::from_report(&ReportData::default());
        for model in BankruptcyModel::ALL {
            let verdict = model.evaluate(&m);
            assert!(verdict.score.is_finite(), "{} produced {}", model.name(), verdict.score);
        }
        assert_eq!(BankruptcyModel::FiveFactor.evaluate(&m).score, 0.0);
        assert_eq!(BankruptcyModel::RegionalFourFactor.evaluate(&m).score, 0.0);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let m = Fixture {
            current_assets: 321.0,
            non_current_assets: 654.0,
            short_liabilities: 123.0,
            long_liabilities: 77.0,
            equity: 500.0,
            net_profit: 33.3,
            revenue: 999.0,
            cost_of_sales: -700.0,
            ..Default::default()
        }
        .metrics();
        for model in BankruptcyModel::ALL {
            let first = model.evaluate(&m);
            let second = model.evaluate(&m);
            assert_eq!(first.score.to_bits(), second.score.to_bits());
            assert_eq!(first, second);
        }
    }
}
