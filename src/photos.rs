//! Matching player photos to a team roster for memory-mate printing.
//!
//! A photo directory holds one team photo (its name contains "Team Photo") and
//! one file per player whose name contains the player's last name, first name
//! and sweater number. The output CSV pairs each player with their photo.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, warn};

use crate::constants::headers::{FIRSTNAME, LASTNAME, SWEATER, TEAM};
use crate::constants::photos::{BLANK_PHOTO, MEMORY_MATE_SUFFIX, TEAM_PHOTO_MARKER};
use crate::csv_io::read_table;
use crate::error::AppError;
use crate::roster::PlayerRecord;
use crate::roster::columns::{aliases, find_column};

/// One row of the memory-mate CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryMateRow {
    #[serde(rename = "Lastname")]
    pub last_name: String,
    #[serde(rename = "Firstname")]
    pub first_name: String,
    #[serde(rename = "Sweater")]
    pub sweater_number: String,
    #[serde(rename = "Team")]
    pub team_name: String,
    #[serde(rename = "Photo")]
    pub photo: String,
    #[serde(rename = "TeamPhoto")]
    pub team_photo: String,
}

/// Outcome of cross-checking a roster against its photos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoCheck {
    pub unmatched_photos: Vec<PathBuf>,
    pub players_without_photo: Vec<PlayerRecord>,
}

impl PhotoCheck {
    pub fn is_ok(&self) -> bool {
        self.unmatched_photos.is_empty() && self.players_without_photo.is_empty()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Files in `dir`, sorted by path.
pub fn list_photo_entries(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    if !dir.is_dir() {
        return Err(AppError::input_not_found(dir));
    }
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            entries.push(path);
        }
    }
    entries.sort();
    Ok(entries)
}

/// The first entry whose file name contains "Team Photo".
pub fn find_team_photo(entries: &[PathBuf]) -> Option<&PathBuf> {
    entries
        .iter()
        .find(|entry| file_name(entry).contains(TEAM_PHOTO_MARKER))
}

/// The last entry whose file name contains both the player's last and first name.
pub fn match_player_photo<'a>(record: &PlayerRecord, entries: &'a [PathBuf]) -> Option<&'a PathBuf> {
    if record.first_name.is_empty() || record.last_name.is_empty() {
        return None;
    }
    entries.iter().rev().find(|entry| {
        let name = file_name(entry);
        name.contains(&record.last_name) && name.contains(&record.first_name)
    })
}

/// Strict match used for cross-checking: last name, first name and sweater number.
pub fn photo_matches_player(photo: &Path, record: &PlayerRecord) -> bool {
    let name = file_name(photo);
    !record.last_name.is_empty()
        && name.contains(&record.last_name)
        && name.contains(&record.first_name)
        && name.contains(&record.sweater_number)
}

/// Checks that every photo belongs to a player and every player has a photo.
pub fn check_photos(records: &[PlayerRecord], photos: &[PathBuf]) -> PhotoCheck {
    let unmatched_photos = photos
        .iter()
        .filter(|photo| !records.iter().any(|record| photo_matches_player(photo, record)))
        .cloned()
        .collect();
    let players_without_photo = records
        .iter()
        .filter(|record| !photos.iter().any(|photo| photo_matches_player(photo, record)))
        .cloned()
        .collect();

    PhotoCheck {
        unmatched_photos,
        players_without_photo,
    }
}

/// Pairs every player with their photo; players without one get "blank".
pub fn build_memory_mate_rows(
    records: &[PlayerRecord],
    photos: &[PathBuf],
    team_photo: &Path,
    team_name: Option<&str>,
) -> Vec<MemoryMateRow> {
    records
        .iter()
        .map(|record| {
            let photo = match match_player_photo(record, photos) {
                Some(photo) => photo.to_string_lossy().to_string(),
                None => {
                    warn!("Could not find player photo: {}", record.display_name());
                    BLANK_PHOTO.to_string()
                }
            };
            MemoryMateRow {
                last_name: record.last_name.clone(),
                first_name: record.first_name.clone(),
                sweater_number: record.sweater_number.clone(),
                team_name: team_name.unwrap_or(&record.team_name).to_string(),
                photo,
                team_photo: team_photo.to_string_lossy().to_string(),
            }
        })
        .collect()
}

pub fn write_memory_mate_csv<W: Write>(writer: W, rows: &[MemoryMateRow]) -> Result<(), AppError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// `<dir>/<stem>_mm.csv` next to the roster file.
pub fn memory_mate_path(roster_path: &Path) -> PathBuf {
    let stem = roster_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    roster_path.with_file_name(format!("{stem}{MEMORY_MATE_SUFFIX}.csv"))
}

/// Reads the roster used for photo matching.
///
/// Names are taken as written since the roster is expected to be an export of
/// this tool. The Team column may be absent only when `team_name` is given.
pub fn read_photo_roster(path: &Path, team_name: Option<&str>) -> Result<Vec<PlayerRecord>, AppError> {
    let table = read_table(path)?;
    let source_name = path.display().to_string();

    let last = find_column(&table.headers, &[aliases::LAST_NAME[0]]);
    let first = find_column(&table.headers, &[aliases::FIRST_NAME[0]]);
    let sweater = find_column(&table.headers, &[aliases::SWEATER[0]]);
    let team = find_column(&table.headers, &[aliases::TEAM[0]]);

    let (Some(last), Some(first), Some(sweater)) = (last, first, sweater) else {
        let missing = [(LASTNAME, last), (FIRSTNAME, first), (SWEATER, sweater)]
            .into_iter()
            .filter(|(_, index)| index.is_none())
            .map(|(header, _)| header.to_string())
            .collect();
        return Err(AppError::missing_columns(source_name, missing));
    };
    if team.is_none() && team_name.is_none() {
        return Err(AppError::missing_columns(source_name, vec![TEAM.to_string()]));
    }

    let cell = |row: &[String], index: usize| {
        row.get(index)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    };
    Ok(table
        .rows
        .iter()
        .map(|row| PlayerRecord {
            first_name: cell(row, first),
            last_name: cell(row, last),
            team_name: match (team_name, team) {
                (Some(name), _) => name.to_string(),
                (None, Some(index)) => cell(row, index),
                (None, None) => String::new(),
            },
            sweater_number: cell(row, sweater),
        })
        .collect())
}

/// Builds the memory-mate CSV for a roster and its photo directory.
///
/// # Errors
/// * `AppError::Photos` - no team photo, or photos and players do not match one-to-one
pub fn create_memory_mate_csv(
    roster_path: &Path,
    photo_dir: &Path,
    team_name: Option<&str>,
) -> Result<PathBuf, AppError> {
    let records = read_photo_roster(roster_path, team_name)?;

    let mut photos = list_photo_entries(photo_dir)?;
    let team_photo = find_team_photo(&photos)
        .cloned()
        .ok_or_else(|| AppError::photos_error("could not find team photo"))?;
    photos.retain(|photo| *photo != team_photo);

    let check = check_photos(&records, &photos);
    if !check.is_ok() {
        for photo in &check.unmatched_photos {
            error!("Could not find player for photo: {}", photo.display());
        }
        for player in &check.players_without_photo {
            error!(
                "Missing player photo: {} #{}",
                player.display_name(),
                player.sweater_number
            );
        }
        return Err(AppError::photos_error(format!(
            "{} photos without a player, {} players without a photo",
            check.unmatched_photos.len(),
            check.players_without_photo.len()
        )));
    }

    let rows = build_memory_mate_rows(&records, &photos, &team_photo, team_name);
    let output = memory_mate_path(roster_path);
    write_memory_mate_csv(File::create(&output)?, &rows)?;
    Ok(output)
}
