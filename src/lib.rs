//! Youth hockey roster preparation library
//!
//! This library normalizes registration exports into per-team rosters:
//! player names and sweater numbers are canonicalized, team names are made
//! consistent and rows are grouped by team with roster size warnings.
//!
//! # Examples
//!
//! ```rust
//! use roster_prep::roster::{ColumnMap, RosterGrouper};
//!
//! let rows = vec![
//!     vec!["ben".to_string(), "SMITH".to_string(), "12u red".to_string(), "#9".to_string()],
//!     vec!["aj".to_string(), "li".to_string(), "12U RED".to_string(), "14".to_string()],
//! ];
//! let columns = ColumnMap::separate(0, 1, 2, 3);
//! let outcome = RosterGrouper::new(2).group_by_team(&rows, &columns);
//!
//! let red = outcome.roster.get("12U Red").unwrap();
//! assert_eq!(red[0].first_name, "Ben");
//! assert_eq!(red[1].first_name, "AJ");
//! assert_eq!(red[0].sweater_number, "9");
//! assert!(outcome.warnings.is_empty());
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod csv_io;
pub mod error;
pub mod logging;
pub mod photos;
pub mod roster;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{AppError, NameError};
pub use roster::{
    ColumnMap, GroupingOutcome, PlayerRecord, RosterGrouper, TeamRoster, canonicalize_team_name,
    normalize_name, normalize_sweater, split_full_name,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
