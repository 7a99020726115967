use crate::cli::Args;
use crate::config::Config;
use crate::constants::{APP_NAME, LOG_FILE_NAME};
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Splits the effective log file location into directory and file name.
///
/// The CLI flag wins over the config value, which wins over the default
/// `<config_dir>/roster_prep/logs/roster_prep.log`.
pub fn resolve_log_location(
    cli_log_file: Option<&str>,
    config_log_file: Option<&str>,
) -> (String, String) {
    match cli_log_file.or(config_log_file) {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path.parent().unwrap_or(Path::new("."));
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

fn env_filter(debug: bool) -> Result<EnvFilter, AppError> {
    let level = if debug { "debug" } else { "info" };
    let directive = format!("{APP_NAME}={level}")
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Sets up logging configuration for the application.
///
/// - Logs to stdout and a daily rolling file; `--quiet` keeps only the file
/// - `--debug` lowers the crate's level to debug
/// - Creates the log directory if it doesn't exist
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub fn setup_logging(
    args: &Args,
    config: Option<&Config>,
) -> Result<(String, WorkerGuard), AppError> {
    let config_log_path = config.and_then(|config| config.log_file_path.as_deref());
    let (log_dir, log_file_name) =
        resolve_log_location(args.log_file.as_deref(), config_log_path);

    if !Path::new(&log_dir).exists() {
        std::fs::create_dir_all(&log_dir).map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = if args.quiet {
        None
    } else {
        Some(
            fmt::Layer::new()
                .with_writer(stdout)
                .with_ansi(true)
                .with_target(false)
                .with_filter(env_filter(args.debug)?),
        )
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(env_filter(args.debug)?),
        )
        .try_init()
        .map_err(|e| AppError::log_setup_error(e.to_string()))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_log_file_wins() {
        let (dir, file) = resolve_log_location(Some("/tmp/cli/run.log"), Some("/tmp/cfg/x.log"));
        assert_eq!(dir, "/tmp/cli");
        assert_eq!(file, "run.log");
    }

    #[test]
    fn test_config_log_file_used_without_flag() {
        let (dir, file) = resolve_log_location(None, Some("/tmp/cfg/x.log"));
        assert_eq!(dir, "/tmp/cfg");
        assert_eq!(file, "x.log");
    }

    #[test]
    fn test_bare_file_name_logs_to_current_dir() {
        let (dir, file) = resolve_log_location(Some("run.log"), None);
        assert_eq!(dir, ".");
        assert_eq!(file, "run.log");
    }

    #[test]
    fn test_default_log_location() {
        let (dir, file) = resolve_log_location(None, None);
        assert_eq!(dir, Config::get_log_dir_path());
        assert_eq!(file, LOG_FILE_NAME);
    }

    #[test]
    fn test_env_filter_builds() {
        assert!(env_filter(false).is_ok());
        assert!(env_filter(true).is_ok());
    }
}
