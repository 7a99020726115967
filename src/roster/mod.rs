//! Roster normalization core.
//!
//! - `player_names`: first/last name and sweater number canonicalization
//! - `teams`: team name canonicalization and file stems
//! - `columns`: header-to-column mapping for raw rows
//! - `grouping`: per-team bucketing with roster size checks
//! - `models`: `PlayerRecord` and `TeamRoster`

pub mod columns;
pub mod grouping;
pub mod models;
pub mod player_names;
pub mod teams;

pub use columns::{ColumnMap, NameColumns};
pub use grouping::{GroupingOutcome, GroupingStats, RosterGrouper, RosterSizeWarning};
pub use models::{PlayerRecord, TeamRoster};
pub use player_names::{normalize_name, normalize_sweater, split_full_name};
pub use teams::{canonicalize_team_name, team_file_stem};
