//! Fundamental Analysis
//!
//! Financial-health indicators for a single statement: balance sheet structure,
//! liquidity, profitability, stability and activity ratios, three bankruptcy
//! discriminant models and a borrower points score.

pub mod bankruptcy;
pub mod engine;
pub mod metrics;
pub mod ratios;

pub use bankruptcy::{BankruptcyModel, Factor};
pub use engine::FinancialAnalysisEngine;
pub use metrics::NormalizedMetrics;
pub use ratios::RatioAnalyzer;
