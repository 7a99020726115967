//! Mapping of source header names to column indices.

use crate::constants::headers::{FIRSTNAME, LASTNAME, SWEATER, TEAM};
use crate::error::AppError;

/// Accepted spellings for each logical column, compared case-insensitively
/// after whitespace is collapsed.
pub mod aliases {
    pub const FIRST_NAME: &[&str] = &["firstname", "first name", "players first name"];
    pub const LAST_NAME: &[&str] = &["lastname", "last name", "players last name"];
    pub const TEAM: &[&str] = &["team", "players team", "program"];
    pub const SWEATER: &[&str] = &["sweater", "jersey number", "number"];
    pub const FULL_NAME: &[&str] = &["name", "fullname", "full name"];
}

/// Where the player's name lives in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameColumns {
    Separate { first: usize, last: usize },
    Combined { name: usize },
}

/// Column indices the grouper reads from each raw row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub names: NameColumns,
    pub team: usize,
    pub sweater: usize,
}

impl ColumnMap {
    pub fn separate(first: usize, last: usize, team: usize, sweater: usize) -> Self {
        Self {
            names: NameColumns::Separate { first, last },
            team,
            sweater,
        }
    }

    pub fn combined(name: usize, team: usize, sweater: usize) -> Self {
        Self {
            names: NameColumns::Combined { name },
            team,
            sweater,
        }
    }

    /// Builds the mapping from a header row.
    ///
    /// Separate first/last columns win over a combined name column. Team and
    /// sweater columns are always required.
    ///
    /// # Errors
    /// [`AppError::MissingColumns`] naming every required column that was not found.
    pub fn from_headers<S: AsRef<str>>(headers: &[S], source_name: &str) -> Result<Self, AppError> {
        let first = find_column(headers, aliases::FIRST_NAME);
        let last = find_column(headers, aliases::LAST_NAME);
        let full = find_column(headers, aliases::FULL_NAME);
        let team = find_column(headers, aliases::TEAM);
        let sweater = find_column(headers, aliases::SWEATER);

        let mut missing = Vec::new();
        let names = match (first, last, full) {
            (Some(first), Some(last), _) => Some(NameColumns::Separate { first, last }),
            (_, _, Some(name)) => Some(NameColumns::Combined { name }),
            (first, last, None) => {
                if first.is_none() {
                    missing.push(FIRSTNAME.to_string());
                }
                if last.is_none() {
                    missing.push(LASTNAME.to_string());
                }
                None
            }
        };
        if team.is_none() {
            missing.push(TEAM.to_string());
        }
        if sweater.is_none() {
            missing.push(SWEATER.to_string());
        }

        match (names, team, sweater) {
            (Some(names), Some(team), Some(sweater)) => Ok(Self {
                names,
                team,
                sweater,
            }),
            _ => Err(AppError::missing_columns(source_name, missing)),
        }
    }
}

/// Normalizes a header for comparison: BOM stripped, whitespace collapsed, lowercase.
pub fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Index of the first header matching any of `accepted`.
pub fn find_column<S: AsRef<str>>(headers: &[S], accepted: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| accepted.contains(&normalize_header(header.as_ref()).as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_headers() {
        let map = ColumnMap::from_headers(&["Firstname", "Lastname", "Team", "Sweater"], "t")
            .unwrap();
        assert_eq!(map, ColumnMap::separate(0, 1, 2, 3));
    }

    #[test]
    fn test_lowercase_and_spaced_headers() {
        let map = ColumnMap::from_headers(&["team", "first name", "LAST  NAME", "sweater"], "t")
            .unwrap();
        assert_eq!(map, ColumnMap::separate(1, 2, 0, 3));
    }

    #[test]
    fn test_registration_export_headers() {
        let headers = [
            "Players First Name",
            "Players Last Name",
            "Players Team",
            "Jersey Number",
        ];
        let map = ColumnMap::from_headers(&headers, "t").unwrap();
        assert_eq!(map, ColumnMap::separate(0, 1, 2, 3));
    }

    #[test]
    fn test_combined_name_headers() {
        let map = ColumnMap::from_headers(&["Name", "Team", "Sweater"], "t").unwrap();
        assert_eq!(map, ColumnMap::combined(0, 1, 2));

        let map = ColumnMap::from_headers(&["Fullname", "Team", "Sweater", ""], "t").unwrap();
        assert_eq!(map, ColumnMap::combined(0, 1, 2));
    }

    #[test]
    fn test_separate_columns_win_over_combined() {
        let map =
            ColumnMap::from_headers(&["Name", "Firstname", "Lastname", "Team", "Sweater"], "t")
                .unwrap();
        assert_eq!(map, ColumnMap::separate(1, 2, 3, 4));
    }

    #[test]
    fn test_missing_columns_are_reported() {
        let error = ColumnMap::from_headers(&["Firstname", "Lastname", "Team"], "sheet.csv")
            .unwrap_err();
        match error {
            AppError::MissingColumns {
                source_name,
                missing,
            } => {
                assert_eq!(source_name, "sheet.csv");
                assert_eq!(missing, vec!["Sweater".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_name_columns_are_reported() {
        let error = ColumnMap::from_headers(&["Firstname", "Sweater"], "t").unwrap_err();
        match error {
            AppError::MissingColumns { missing, .. } => {
                assert_eq!(missing, vec!["Lastname", "Team"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_normalize_header_strips_bom() {
        assert_eq!(normalize_header("\u{feff}Firstname"), "firstname");
        assert_eq!(normalize_header("  Jersey   Number "), "jersey number");
    }
}
