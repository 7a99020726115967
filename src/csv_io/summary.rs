use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::COUNT_SUMMARY_FILE;
use crate::constants::headers::{COUNT_PLAYERS, COUNT_TEAM_NAME};
use crate::error::AppError;
use crate::roster::teams::team_name_from_file_stem;

/// Player count for one exported team file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamCount {
    pub team_name: String,
    pub players: usize,
}

/// Number of data rows in a CSV file, header excluded.
pub fn count_csv_rows(path: &Path) -> Result<usize, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(File::open(path)?);
    let mut count = 0;
    for record in reader.records() {
        record?;
        count += 1;
    }
    Ok(count)
}

/// Counts players in every `*.csv` file of `dir`, sorted by team name.
///
/// The team name is the file stem with underscores turned back into spaces.
/// A previous count summary in the same directory is ignored.
pub fn count_team_files(dir: &Path) -> Result<Vec<TeamCount>, AppError> {
    if !dir.is_dir() {
        return Err(AppError::input_not_found(dir));
    }

    let mut counts = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        let is_summary = path
            .file_name()
            .is_some_and(|name| name == COUNT_SUMMARY_FILE);
        if !path.is_file() || !is_csv || is_summary {
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let players = count_csv_rows(&path)?;
        debug!("{}: {players} players", path.display());
        counts.push(TeamCount {
            team_name: team_name_from_file_stem(&stem),
            players,
        });
    }

    counts.sort_by(|a, b| a.team_name.cmp(&b.team_name));
    Ok(counts)
}

pub fn write_count_summary<W: Write>(writer: W, counts: &[TeamCount]) -> Result<(), AppError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([COUNT_TEAM_NAME, COUNT_PLAYERS])?;
    for count in counts {
        let players = count.players.to_string();
        wtr.write_record([count.team_name.as_str(), players.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the count summary to `path`, or to `per_team_count.csv` in the
/// current directory when no path is given.
pub fn write_count_summary_file(
    path: Option<&Path>,
    counts: &[TeamCount],
) -> Result<PathBuf, AppError> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(COUNT_SUMMARY_FILE));
    write_count_summary(File::create(&path)?, counts)?;
    Ok(path)
}
