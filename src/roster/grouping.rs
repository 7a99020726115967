//! Grouping raw roster rows into per-team rosters.
//!
//! Each row is normalized through the player name rules, bucketed under its
//! canonical team name, and every finished bucket is checked against the
//! minimum roster size. Problems with a single row are logged and counted in
//! [`GroupingStats`]; they never stop the batch.

use std::fmt;
use std::ops::AddAssign;

use tracing::{debug, warn};

use super::columns::{ColumnMap, NameColumns, aliases, normalize_header};
use super::models::{PlayerRecord, TeamRoster};
use super::player_names::{
    is_mixed_case, normalize_name, parse_sweater, split_full_name,
};
use super::teams::canonicalize_team_name;
use crate::constants::names::FULL_NAME_SUFFIXES;
use crate::constants::{DEFAULT_MIN_ROSTER_SIZE, DEFAULT_SWEATER};

/// Counters for one grouping run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupingStats {
    /// Players added to a roster
    pub players: usize,
    /// Rows without a team, skipped silently
    pub blank_rows_skipped: usize,
    /// Header rows repeated inside the data, skipped
    pub header_rows_skipped: usize,
    /// Rows dropped because the full name could not be split
    pub ambiguous_names_skipped: usize,
    /// Empty or suspicious name fields that were kept
    pub name_warnings: usize,
    /// Sweater numbers replaced by the default
    pub sweater_defaults: usize,
}

impl AddAssign for GroupingStats {
    fn add_assign(&mut self, other: Self) {
        self.players += other.players;
        self.blank_rows_skipped += other.blank_rows_skipped;
        self.header_rows_skipped += other.header_rows_skipped;
        self.ambiguous_names_skipped += other.ambiguous_names_skipped;
        self.name_warnings += other.name_warnings;
        self.sweater_defaults += other.sweater_defaults;
    }
}

/// Advisory: a team has fewer players than the configured minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSizeWarning {
    pub team_name: String,
    pub player_count: usize,
    pub min_roster_size: usize,
}

impl fmt::Display for RosterSizeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Team {} has {} players, fewer than {}",
            self.team_name, self.player_count, self.min_roster_size
        )
    }
}

/// Result of [`RosterGrouper::group_by_team`].
#[derive(Debug, Clone, Default)]
pub struct GroupingOutcome {
    pub roster: TeamRoster,
    pub stats: GroupingStats,
    pub warnings: Vec<RosterSizeWarning>,
}

/// Partitions raw rows into per-team rosters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterGrouper {
    min_roster_size: usize,
    preserve_mixed_case_last_names: bool,
}

impl Default for RosterGrouper {
    fn default() -> Self {
        Self {
            min_roster_size: DEFAULT_MIN_ROSTER_SIZE,
            preserve_mixed_case_last_names: true,
        }
    }
}

impl RosterGrouper {
    pub fn new(min_roster_size: usize) -> Self {
        Self {
            min_roster_size,
            ..Self::default()
        }
    }

    /// Keep hand-entered casing such as "DeLuca" for last names that are
    /// neither all-upper nor all-lower.
    pub fn with_preserve_mixed_case_last_names(mut self, preserve: bool) -> Self {
        self.preserve_mixed_case_last_names = preserve;
        self
    }

    /// Normalizes rows into player records, keeping source order.
    ///
    /// Rows with an empty team cell are skipped, as are header rows repeated
    /// inside the data (a team cell that reads like the team header). Cells
    /// past the end of a short row read as empty.
    pub fn normalize_rows<I, R>(
        &self,
        rows: I,
        columns: &ColumnMap,
    ) -> (Vec<PlayerRecord>, GroupingStats)
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[String]>,
    {
        let mut players = Vec::new();
        let mut stats = GroupingStats::default();

        for (index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            // Row 1 is the header
            let row_number = index + 2;

            let raw_team = cell(row, columns.team);
            if raw_team.trim().is_empty() {
                stats.blank_rows_skipped += 1;
                continue;
            }
            if aliases::TEAM.contains(&normalize_header(raw_team).as_str()) {
                debug!("Skipping repeated header at row {row_number}");
                stats.header_rows_skipped += 1;
                continue;
            }
            let team_name = canonicalize_team_name(raw_team);

            if let Some(record) = self.normalize_row(row, columns, team_name, row_number, &mut stats)
            {
                stats.players += 1;
                players.push(record);
            }
        }

        (players, stats)
    }

    /// Groups rows by canonical team name in a single pass.
    ///
    /// Skips the same rows as [`RosterGrouper::normalize_rows`]. Bucket order
    /// and the order within each bucket follow the source.
    pub fn group_by_team<I, R>(&self, rows: I, columns: &ColumnMap) -> GroupingOutcome
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[String]>,
    {
        let (players, stats) = self.normalize_rows(rows, columns);
        self.group_records(players, stats)
    }

    /// Buckets already normalized records and checks every roster size.
    pub fn group_records<I>(&self, players: I, stats: GroupingStats) -> GroupingOutcome
    where
        I: IntoIterator<Item = PlayerRecord>,
    {
        let mut roster = TeamRoster::new();
        for player in players {
            roster.push(player);
        }

        let warnings = self.check_roster_sizes(&roster);
        debug!(
            "Grouped {} players into {} teams ({} blank rows, {} header rows skipped)",
            stats.players,
            roster.team_count(),
            stats.blank_rows_skipped,
            stats.header_rows_skipped
        );

        GroupingOutcome {
            roster,
            stats,
            warnings,
        }
    }

    /// Size warnings for every team strictly below the minimum. Advisory only.
    pub fn check_roster_sizes(&self, roster: &TeamRoster) -> Vec<RosterSizeWarning> {
        roster
            .iter()
            .filter(|(_, players)| players.len() < self.min_roster_size)
            .map(|(team_name, players)| {
                let warning = RosterSizeWarning {
                    team_name: team_name.to_string(),
                    player_count: players.len(),
                    min_roster_size: self.min_roster_size,
                };
                warn!("{warning}");
                warning
            })
            .collect()
    }

    fn normalize_row(
        &self,
        row: &[String],
        columns: &ColumnMap,
        team_name: String,
        row_number: usize,
        stats: &mut GroupingStats,
    ) -> Option<PlayerRecord> {
        let (first_name, last_name) = match columns.names {
            NameColumns::Separate { first, last } => {
                let first_name = self.first_name(cell(row, first), &team_name, row_number, stats);
                let last_name = self.last_name(cell(row, last), &team_name, row_number, stats);
                (first_name, last_name)
            }
            NameColumns::Combined { name } => {
                let (first, last) = match split_full_name(cell(row, name)) {
                    Ok(parts) => parts,
                    Err(error) if !error.keeps_record() => {
                        warn!("Skipping row {row_number} (team {team_name}): {error}");
                        stats.ambiguous_names_skipped += 1;
                        return None;
                    }
                    Err(error) => {
                        warn!("Row {row_number} (team {team_name}): full name {error}");
                        stats.name_warnings += 1;
                        (String::new(), String::new())
                    }
                };
                let first_name = if first.is_empty() {
                    first
                } else {
                    self.first_name(&first, &team_name, row_number, stats)
                };
                let last_name = if last.is_empty() {
                    if !first_name.is_empty() {
                        warn!(
                            "Update needed - only one name: {first_name} (row {row_number}, team {team_name})"
                        );
                        stats.name_warnings += 1;
                    }
                    last
                } else {
                    recase_split_last_name(last)
                };
                (first_name, last_name)
            }
        };

        let raw_sweater = cell(row, columns.sweater);
        let sweater_number = match parse_sweater(Some(raw_sweater)) {
            Some(digits) => digits,
            None => {
                if !raw_sweater.trim().is_empty() {
                    warn!(
                        "Unparseable sweater number '{raw_sweater}' for {first_name} {last_name} (row {row_number}, team {team_name}), using {DEFAULT_SWEATER}"
                    );
                }
                stats.sweater_defaults += 1;
                DEFAULT_SWEATER.to_string()
            }
        };

        Some(PlayerRecord {
            first_name,
            last_name,
            team_name,
            sweater_number,
        })
    }

    fn first_name(
        &self,
        raw: &str,
        team_name: &str,
        row_number: usize,
        stats: &mut GroupingStats,
    ) -> String {
        match normalize_name(Some(raw), false) {
            Ok(name) => {
                if name.contains('.') {
                    warn!(
                        "Update needed - dot in first name: {name} (row {row_number}, team {team_name})"
                    );
                    stats.name_warnings += 1;
                }
                name
            }
            Err(error) => {
                warn!("First name {error} in row {row_number} (team {team_name})");
                stats.name_warnings += 1;
                String::new()
            }
        }
    }

    fn last_name(
        &self,
        raw: &str,
        team_name: &str,
        row_number: usize,
        stats: &mut GroupingStats,
    ) -> String {
        let trimmed = raw.trim();
        if self.preserve_mixed_case_last_names && is_mixed_case(trimmed) {
            return trimmed.to_string();
        }
        match normalize_name(Some(trimmed), true) {
            Ok(name) => name,
            Err(error) => {
                warn!("Last name {error} in row {row_number} (team {team_name})");
                stats.name_warnings += 1;
                String::new()
            }
        }
    }
}

/// Re-cases a last name from `split_full_name`. A trailing suffix is kept
/// as written so only the surname goes through the Mac/Mc rules.
fn recase_split_last_name(last: String) -> String {
    match last.rsplit_once(' ') {
        Some((surname, suffix)) if FULL_NAME_SUFFIXES.contains(&suffix) => {
            match normalize_name(Some(surname), true) {
                Ok(surname) => format!("{surname} {suffix}"),
                Err(_) => last,
            }
        }
        _ => normalize_name(Some(&last), true).unwrap_or(last),
    }
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}
