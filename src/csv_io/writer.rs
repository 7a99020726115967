use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::constants::headers::{FIRSTNAME, LASTNAME, SWEATER, TEAM};
use crate::error::AppError;
use crate::roster::{PlayerRecord, TeamRoster, team_file_stem};

/// Creates the output directory (and parents) if needed.
pub fn ensure_output_dir(dir: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dir).map_err(|e| AppError::output_dir(dir, e.to_string()))
}

/// Writes players as CSV with the `Firstname,Lastname,Team,Sweater` header.
///
/// The header is written even when `players` is empty.
pub fn write_players<W: Write>(writer: W, players: &[PlayerRecord]) -> Result<(), AppError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record([FIRSTNAME, LASTNAME, TEAM, SWEATER])?;
    for player in players {
        wtr.serialize(player)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `players` to `<dir>/<stem>.csv` and returns the path.
pub fn write_roster_file(
    dir: &Path,
    stem: &str,
    players: &[PlayerRecord],
) -> Result<PathBuf, AppError> {
    let path = dir.join(format!("{stem}.csv"));
    write_players(File::create(&path)?, players)?;
    info!("Wrote {} players to {}", players.len(), path.display());
    Ok(path)
}

/// Writes one CSV per team into `dir`, named by [`team_file_stem`].
///
/// Returns the written paths in roster order. Two teams that map to the same
/// file stem are merged into one file with a warning.
pub fn write_team_rosters(dir: &Path, roster: &TeamRoster) -> Result<Vec<PathBuf>, AppError> {
    ensure_output_dir(dir)?;

    let mut by_stem: Vec<(String, Vec<PlayerRecord>)> = Vec::new();
    let mut seen = HashSet::new();
    for (team_name, players) in roster.iter() {
        let stem = team_file_stem(team_name);
        if seen.insert(stem.clone()) {
            by_stem.push((stem, players.to_vec()));
        } else if let Some((_, existing)) = by_stem.iter_mut().find(|(s, _)| *s == stem) {
            warn!("Team {team_name} shares file name {stem}.csv with another team; merging");
            existing.extend_from_slice(players);
        }
    }

    by_stem
        .iter()
        .map(|(stem, players)| write_roster_file(dir, stem, players))
        .collect()
}
