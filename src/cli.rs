use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Youth hockey roster preparation
///
/// Normalizes registration exports into clean per-team rosters:
/// player names are titlecased, sweater numbers cleaned up and team
/// names made canonical. Teams below the minimum roster size are reported.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log debug details, including every name that was re-cased.
    #[arg(long = "debug", global = true, help_heading = "Logging")]
    pub debug: bool,

    /// Don't log to the terminal. The log file is still written.
    #[arg(short, long, global = true, help_heading = "Logging")]
    pub quiet: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Logging")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize a registration export and write roster CSVs.
    Export {
        /// Registration export: a CSV file or a spreadsheet workbook (.xlsx, .xls, .ods).
        input: PathBuf,

        /// Write one CSV per team instead of one CSV per input file or sheet.
        #[arg(long = "by-team")]
        by_team: bool,

        /// Directory for the written CSVs. Defaults to the configured output directory.
        #[arg(long = "out-dir", value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Warn about teams with fewer players than this.
        #[arg(long = "min-roster-size", value_name = "N")]
        min_roster_size: Option<usize>,
    },

    /// Count players in every team CSV of a directory.
    Count {
        /// Directory holding per-team CSVs.
        dir: PathBuf,

        /// Where to write the summary. Defaults to per_team_count.csv.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Match player photos to a roster and write a memory-mate CSV.
    Photos {
        /// Exported team roster CSV.
        roster: PathBuf,

        /// Team name to print instead of the roster's Team column.
        #[arg(long = "team-name")]
        team_name: Option<String>,

        /// Directory holding the photos. Defaults to the current directory.
        #[arg(long = "path", value_name = "DIR")]
        path: Option<PathBuf>,
    },

    /// Show or update the persisted configuration.
    Config {
        /// List current configuration settings
        #[arg(long = "list", short = 'l')]
        list: bool,

        /// Update the minimum roster size in config.
        #[arg(long = "set-min-roster-size", value_name = "N")]
        min_roster_size: Option<usize>,

        /// Update the output directory in config.
        #[arg(long = "set-output-dir", value_name = "DIR")]
        output_dir: Option<String>,

        /// Update log file path in config. This sets a persistent custom log file location.
        #[arg(long = "set-log-file", conflicts_with = "clear_log_file")]
        log_file: Option<String>,

        /// Clear the custom log file path from config. This reverts to using the default log location.
        #[arg(long = "clear-log-file")]
        clear_log_file: bool,
    },
}

impl Command {
    /// Config updates must work even when the current config fails to load.
    pub fn is_config(&self) -> bool {
        matches!(self, Command::Config { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_export_with_global_flags() {
        let args = Args::try_parse_from([
            "roster_prep",
            "export",
            "players.csv",
            "--by-team",
            "--min-roster-size",
            "7",
            "--quiet",
        ])
        .unwrap();

        assert!(args.quiet);
        assert!(!args.debug);
        match args.command {
            Command::Export {
                input,
                by_team,
                out_dir,
                min_roster_size,
            } => {
                assert_eq!(input, PathBuf::from("players.csv"));
                assert!(by_team);
                assert_eq!(out_dir, None);
                assert_eq!(min_roster_size, Some(7));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_set_and_clear_log_file_conflict() {
        let result = Args::try_parse_from([
            "roster_prep",
            "config",
            "--set-log-file",
            "/tmp/a.log",
            "--clear-log-file",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_config() {
        let args = Args::try_parse_from(["roster_prep", "config", "--list"]).unwrap();
        assert!(args.command.is_config());
        let args = Args::try_parse_from(["roster_prep", "count", "csv"]).unwrap();
        assert!(!args.command.is_config());
    }
}
