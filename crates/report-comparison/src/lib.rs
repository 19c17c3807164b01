pub mod comparison;

pub use comparison::{Indicator, ReportComparator};
