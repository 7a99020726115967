//! Spreadsheet input: every worksheet becomes its own [`SourceTable`].

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use super::reader::SourceTable;
use crate::error::AppError;

/// File extensions read through the workbook reader instead of the CSV reader.
pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// One worksheet of a workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTable {
    pub sheet_name: String,
    pub table: SourceTable,
}

pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| WORKBOOK_EXTENSIONS.contains(&ext.as_str()))
}

/// Reads every non-empty worksheet, in workbook order.
///
/// The first row of a sheet's used range is its header row.
///
/// # Errors
/// * `AppError::InputNotFound` - the file does not exist
/// * `AppError::Workbook` - the file is not a readable workbook
pub fn read_workbook(path: &Path) -> Result<Vec<SheetTable>, AppError> {
    if !path.is_file() {
        return Err(AppError::input_not_found(path));
    }
    let mut workbook = open_workbook_auto(path)?;

    let mut sheets = Vec::new();
    for sheet_name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&sheet_name)?;
        let mut rows = range
            .rows()
            .map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
        let Some(headers) = rows.next() else {
            debug!("Sheet '{sheet_name}' in {} is empty, skipping", path.display());
            continue;
        };
        let table = SourceTable {
            headers,
            rows: rows.collect(),
        };
        debug!(
            "Read {} rows with headers {:?} from sheet '{sheet_name}'",
            table.rows.len(),
            table.headers
        );
        sheets.push(SheetTable { sheet_name, table });
    }

    Ok(sheets)
}

/// Cell text as it would appear in a CSV export of the sheet.
///
/// Whole-number floats lose their fraction so sweater `4` does not read as `4.0`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{}", *value as i64)
        }
        other => other.to_string(),
    }
}
