//! Statement Parser
//!
//! Recovers balance sheet and income statement line items from uploaded workbooks.
//! Lines are located by their statutory line code and the value is taken from the
//! first numeric cell to the right of the code.

pub mod code_map;
pub mod error;
pub mod extractor;

pub use code_map::{field_for_code, CODE_FIELD_MAP};
pub use error::ParseError;
pub use extractor::{
    report_from_line_items, scan_rows, HeuristicExtractor, LineItemSource, LineItems, MAX_SCAN_ROWS,
};
