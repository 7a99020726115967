use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::workbook::{SheetTable, is_workbook, read_workbook};
use crate::error::AppError;
use crate::roster::PlayerRecord;

/// A CSV file as raw strings: the header row and every data row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Reads a CSV file into a [`SourceTable`].
///
/// Rows may have differing lengths; missing trailing cells are left to the caller.
///
/// # Errors
/// * `AppError::InputNotFound` - the file does not exist
/// * `AppError::Csv` / `AppError::Io` - the file cannot be read or parsed
pub fn read_table(path: &Path) -> Result<SourceTable, AppError> {
    if !path.is_file() {
        return Err(AppError::input_not_found(path));
    }
    let table = read_table_from_reader(File::open(path)?)?;
    debug!(
        "Read {} rows with headers {:?} from {}",
        table.rows.len(),
        table.headers,
        path.display()
    );
    Ok(table)
}

pub fn read_table_from_reader<R: Read>(rdr: R) -> Result<SourceTable, AppError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);

    let headers = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(SourceTable { headers, rows })
}

/// Reads a registration export as one table per source sheet.
///
/// Workbooks yield every non-empty worksheet. A CSV file is a single sheet
/// named after its file stem.
pub fn read_sources(path: &Path) -> Result<Vec<SheetTable>, AppError> {
    if is_workbook(path) {
        return read_workbook(path);
    }
    let sheet_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "roster".to_string());
    Ok(vec![SheetTable {
        sheet_name,
        table: read_table(path)?,
    }])
}

/// Reads an exported roster CSV back into records.
pub fn read_roster(path: &Path) -> Result<Vec<PlayerRecord>, AppError> {
    if !path.is_file() {
        return Err(AppError::input_not_found(path));
    }
    read_roster_from_reader(File::open(path)?)
}

pub fn read_roster_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerRecord>, AppError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut players = Vec::new();
    for result in reader.deserialize::<PlayerRecord>() {
        players.push(result?);
    }
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_table_flexible_rows() {
        let data = "\
Firstname,Lastname,Team,Sweater
Ann,Lee,12u red,4
Bo,Kim,12u red
,,,
";
        let table = read_table_from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["Firstname", "Lastname", "Team", "Sweater"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[1], vec!["Bo", "Kim", "12u red"]);
        assert_eq!(table.rows[2], vec!["", "", "", ""]);
    }

    #[test]
    fn test_read_table_quoted_fields() {
        let data = "Name,Team,Sweater\n\"Smith, John\",12u red,\"9\"\n";
        let table = read_table_from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.rows[0][0], "Smith, John");
    }

    #[test]
    fn test_read_roster_from_reader() {
        let data = "\
Firstname,Lastname,Team,Sweater
Ann,Lee,12U Red,04
";
        let players = read_roster_from_reader(data.as_bytes()).unwrap();
        assert_eq!(players, vec![PlayerRecord::new("Ann", "Lee", "12U Red", "04")]);
    }

    #[test]
    fn test_csv_source_is_one_sheet_named_after_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fall_signups.csv");
        std::fs::write(&path, "Name,Team,Sweater\nAnn Lee,12u red,4\n").unwrap();

        let sheets = read_sources(&path).unwrap();

        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].sheet_name, "fall_signups");
        assert_eq!(sheets[0].table.rows, vec![vec!["Ann Lee", "12u red", "4"]]);
    }

    #[test]
    fn test_read_table_missing_file() {
        let error = read_table(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(error, AppError::InputNotFound { .. }));
    }
}
