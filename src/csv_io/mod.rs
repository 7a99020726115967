//! CSV adapters around the roster core.
//!
//! - `reader`: raw source tables and exported rosters in
//! - `workbook`: spreadsheet sheets as source tables
//! - `writer`: per-team and per-file roster CSV out
//! - `summary`: per-team player counts over an export directory

pub mod reader;
pub mod summary;
pub mod workbook;
pub mod writer;

pub use reader::{SourceTable, read_roster, read_sources, read_table};
pub use workbook::{SheetTable, is_workbook, read_workbook};
pub use summary::{TeamCount, count_team_files, write_count_summary_file};
pub use writer::{ensure_output_dir, write_players, write_roster_file, write_team_rosters};
