use crate::cli::{Args, Command};
use crate::config::Config;
use crate::csv_io::{
    count_team_files, ensure_output_dir, is_workbook, read_sources, write_count_summary_file,
    write_roster_file, write_team_rosters,
};
use crate::error::AppError;
use crate::photos::create_memory_mate_csv;
use crate::roster::{
    ColumnMap, GroupingStats, PlayerRecord, RosterGrouper, RosterSizeWarning, team_file_stem,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// How exported rows are split into files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// One CSV per canonical team.
    ByTeam,
    /// One CSV per source sheet: a CSV input keeps its file stem, a workbook
    /// sheet is named after its title. Rows stay in source order, so the file
    /// mirrors the registration export it came from.
    ByFile,
}

/// Settings for a single export run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub input: PathBuf,
    pub mode: ExportMode,
    pub out_dir: PathBuf,
    pub min_roster_size: usize,
    pub preserve_mixed_case_last_names: bool,
}

impl ExportOptions {
    /// Options for `input` with values taken from `config`.
    pub fn from_config(input: impl Into<PathBuf>, mode: ExportMode, config: &Config) -> Self {
        Self {
            input: input.into(),
            mode,
            out_dir: PathBuf::from(&config.output_dir),
            min_roster_size: config.min_roster_size,
            preserve_mixed_case_last_names: config.preserve_mixed_case_last_names,
        }
    }
}

/// What an export run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub files: Vec<PathBuf>,
    pub teams: Vec<String>,
    pub stats: GroupingStats,
    pub warnings: Vec<RosterSizeWarning>,
}

impl ExportSummary {
    pub fn total_players(&self) -> usize {
        self.stats.players
    }
}

/// Reads one registration export, normalizes it and writes the roster CSVs.
///
/// CSV files and spreadsheet workbooks are accepted; every worksheet of a
/// workbook is a separate source sheet. All sheets feed one team grouping.
///
/// # Errors
/// * `AppError::InputNotFound` - the input file does not exist
/// * `AppError::MissingColumns` - team, sweater or name columns are missing in any sheet
/// * `AppError::Workbook` - the spreadsheet cannot be read
/// * `AppError::OutputDir` - the output directory cannot be created
pub fn export_roster_file(options: &ExportOptions) -> Result<ExportSummary, AppError> {
    let workbook = is_workbook(&options.input);
    let sheets = read_sources(&options.input)?;
    if sheets.is_empty() {
        warn!("No sheets with data in {}", options.input.display());
    }

    // Every sheet must map before anything is written
    let mut mapped = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let source_name = if workbook {
            format!("{} [{}]", options.input.display(), sheet.sheet_name)
        } else {
            options.input.display().to_string()
        };
        let columns = ColumnMap::from_headers(&sheet.table.headers, &source_name)?;
        mapped.push((sheet, columns));
    }

    let grouper = RosterGrouper::new(options.min_roster_size)
        .with_preserve_mixed_case_last_names(options.preserve_mixed_case_last_names);
    let mut stats = GroupingStats::default();
    let mut per_sheet: Vec<(String, Vec<PlayerRecord>)> = Vec::with_capacity(mapped.len());
    for (sheet, columns) in &mapped {
        let (players, sheet_stats) = grouper.normalize_rows(&sheet.table.rows, columns);
        stats += sheet_stats;
        let stem = if workbook {
            team_file_stem(&sheet.sheet_name)
        } else {
            sheet.sheet_name.clone()
        };
        per_sheet.push((stem, players));
    }

    let outcome = grouper.group_records(
        per_sheet
            .iter()
            .flat_map(|(_, players)| players.iter().cloned()),
        stats,
    );

    ensure_output_dir(&options.out_dir)?;
    let teams: Vec<String> = outcome.roster.team_names().map(str::to_string).collect();
    let files = match options.mode {
        ExportMode::ByTeam => write_team_rosters(&options.out_dir, &outcome.roster)?,
        ExportMode::ByFile => per_sheet
            .iter()
            .map(|(stem, players)| write_roster_file(&options.out_dir, stem, players))
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(ExportSummary {
        files,
        teams,
        stats: outcome.stats,
        warnings: outcome.warnings,
    })
}

/// Handles the `export` subcommand.
///
/// CLI values override the config for this run only.
pub fn handle_export_command(
    config: &Config,
    input: &Path,
    by_team: bool,
    out_dir: Option<&Path>,
    min_roster_size: Option<usize>,
) -> Result<ExportSummary, AppError> {
    let mode = if by_team {
        ExportMode::ByTeam
    } else {
        ExportMode::ByFile
    };
    let mut options = ExportOptions::from_config(input, mode, config);
    if let Some(out_dir) = out_dir {
        options.out_dir = out_dir.to_path_buf();
    }
    if let Some(min_roster_size) = min_roster_size {
        options.min_roster_size = min_roster_size;
    }

    info!("Exporting {} ({:?})", input.display(), mode);
    let summary = export_roster_file(&options)?;

    let stats = &summary.stats;
    if stats.header_rows_skipped > 0 {
        info!("{} repeated header rows skipped", stats.header_rows_skipped);
    }
    if stats.ambiguous_names_skipped > 0 {
        warn!(
            "{} rows skipped because the name could not be split",
            stats.ambiguous_names_skipped
        );
    }
    info!(
        "{} teams, {} name warnings, {} sweaters defaulted",
        summary.teams.len(),
        stats.name_warnings,
        stats.sweater_defaults
    );
    for file in &summary.files {
        println!("{}", file.display());
    }
    println!("Total players: {}", summary.total_players());

    Ok(summary)
}

/// Handles the `count` subcommand.
pub fn handle_count_command(dir: &Path, output: Option<&Path>) -> Result<PathBuf, AppError> {
    let counts = count_team_files(dir)?;
    let path = write_count_summary_file(output, &counts)?;
    let total: usize = counts.iter().map(|count| count.players).sum();
    info!(
        "Counted {total} players in {} team files, summary written to {}",
        counts.len(),
        path.display()
    );
    println!("Total players: {total}");
    Ok(path)
}

/// Handles the `photos` subcommand.
///
/// The photo directory defaults to the current directory.
pub fn handle_photos_command(
    roster: &Path,
    team_name: Option<&str>,
    photo_dir: Option<&Path>,
) -> Result<PathBuf, AppError> {
    let photo_dir = photo_dir.unwrap_or(Path::new("."));
    let team_name = team_name.map(str::trim);
    let output = create_memory_mate_csv(roster, photo_dir, team_name)?;
    info!("Memory-mate CSV written to {}", output.display());
    println!("{}", output.display());
    Ok(output)
}

/// Applies `config` subcommand updates to `config`.
///
/// Returns true when anything changed and the config should be saved.
pub fn apply_config_updates(
    config: &mut Config,
    min_roster_size: Option<usize>,
    output_dir: Option<&str>,
    log_file: Option<&str>,
    clear_log_file: bool,
) -> bool {
    let mut changed = false;

    if let Some(min_roster_size) = min_roster_size {
        config.min_roster_size = min_roster_size;
        changed = true;
    }

    if let Some(output_dir) = output_dir {
        config.output_dir = output_dir.to_string();
        changed = true;
    }

    if let Some(log_file) = log_file {
        config.log_file_path = Some(log_file.to_string());
        changed = true;
    } else if clear_log_file {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
        changed = true;
    }

    changed
}

/// Handles the `config` subcommand.
///
/// With no update flags the current settings are listed.
pub fn handle_config_command(
    mut config: Config,
    list: bool,
    min_roster_size: Option<usize>,
    output_dir: Option<&str>,
    log_file: Option<&str>,
    clear_log_file: bool,
) -> Result<(), AppError> {
    let changed = apply_config_updates(
        &mut config,
        min_roster_size,
        output_dir,
        log_file,
        clear_log_file,
    );

    if changed {
        config.validate()?;
        config.save()?;
        println!("Config updated successfully!");
    }

    if list || !changed {
        config.display();
    }

    Ok(())
}

/// Runs the parsed subcommand.
pub fn dispatch(args: Args, config: Config) -> Result<(), AppError> {
    match args.command {
        Command::Export {
            input,
            by_team,
            out_dir,
            min_roster_size,
        } => handle_export_command(
            &config,
            &input,
            by_team,
            out_dir.as_deref(),
            min_roster_size,
        )
        .map(|_| ()),
        Command::Count { dir, output } => {
            handle_count_command(&dir, output.as_deref()).map(|_| ())
        }
        Command::Photos {
            roster,
            team_name,
            path,
        } => handle_photos_command(&roster, team_name.as_deref(), path.as_deref()).map(|_| ()),
        Command::Config {
            list,
            min_roster_size,
            output_dir,
            log_file,
            clear_log_file,
        } => handle_config_command(
            config,
            list,
            min_roster_size,
            output_dir.as_deref(),
            log_file.as_deref(),
            clear_log_file,
        ),
    }
}
