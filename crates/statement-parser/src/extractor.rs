use std::collections::BTreeMap;
use std::io::Cursor;

use analysis_core::{Assets, FinancialReportCreate, Liabilities, ProfitLoss, ReportData};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};

use crate::code_map::field_for_code;
use crate::error::ParseError;

/// Only the first 100 rows of a sheet are inspected. Statement forms fit well inside
/// this bound; anything below it is ignored.
pub const MAX_SCAN_ROWS: u32 = 100;

/// Field name -> value, for the fields that could be located.
pub type LineItems = BTreeMap<&'static str, f64>;

/// Source of raw line items from uploaded statement bytes.
pub trait LineItemSource: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<LineItems, ParseError>;
}

/// Best-effort positional parser.
///
/// Every cell of the first worksheet whose text is a known line code is matched, and the
/// first numeric cell to its right in the same row becomes that line's value. When a code
/// appears in several rows, the last row with a numeric value wins. A partial result is a
/// valid result.
pub struct HeuristicExtractor;

impl HeuristicExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeuristicExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LineItemSource for HeuristicExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<LineItems, ParseError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(ParseError::EmptyWorkbook)??;

        let items = scan_range(&range);
        tracing::info!(
            "Recovered {} line items from a {}x{} sheet",
            items.len(),
            range.height(),
            range.width()
        );
        Ok(items)
    }
}

/// Scan a worksheet range, honouring its position on the sheet so that the row bound
/// applies to absolute sheet rows.
fn scan_range(range: &Range<Data>) -> LineItems {
    let first_row = range.start().map(|(row, _)| row).unwrap_or(0);
    let visible = MAX_SCAN_ROWS.saturating_sub(first_row) as usize;
    scan_rows(range.rows().take(visible))
}

/// Apply the code-match / right-scan heuristic to rows of cells.
pub fn scan_rows<'a, I>(rows: I) -> LineItems
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut items = LineItems::new();

    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            let Some(field) = cell_code(cell).and_then(|code| field_for_code(&code)) else {
                continue;
            };

            if let Some(value) = row[idx + 1..].iter().find_map(numeric_value) {
                tracing::debug!("Line {} -> {} = {}", cell, field, value);
                items.insert(field, value);
            }
        }
    }

    items
}

/// Text form of a cell as used for code matching. Whole-number cells match by their
/// integer text, so a code typed as a number still resolves.
fn cell_code(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(format!("{}", *f as i64)),
        _ => None,
    }
}

fn numeric_value(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        _ => None,
    }
}

/// Distribute extracted line items into the three report sections.
pub fn report_from_line_items(
    items: &LineItems,
    organization_name: impl Into<String>,
    period: impl Into<String>,
) -> Result<FinancialReportCreate, ParseError> {
    let fields: serde_json::Map<String, serde_json::Value> = items
        .iter()
        .map(|(field, value)| (field.to_string(), serde_json::json!(value)))
        .collect();
    let fields = serde_json::Value::Object(fields);

    let assets: Assets = serde_json::from_value(fields.clone())?;
    let liabilities: Liabilities = serde_json::from_value(fields.clone())?;
    let profit_loss: ProfitLoss = serde_json::from_value(fields)?;

    Ok(FinancialReportCreate {
        organization_name: organization_name.into(),
        period: period.into(),
        data: ReportData {
            assets,
            liabilities,
            profit_loss,
        },
    })
}
