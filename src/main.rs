// src/main.rs
use clap::Parser;
use roster_prep::cli::Args;
use roster_prep::commands;
use roster_prep::config::Config;
use roster_prep::error::AppError;
use roster_prep::logging::setup_logging;

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Config updates must stay possible when the saved config is invalid
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if args.command.is_config() => {
            eprintln!("Ignoring unreadable config: {e}");
            Config::default()
        }
        Err(e) => return Err(e),
    };

    let (log_file_path, _guard) = setup_logging(&args, Some(&config))?;
    tracing::debug!("Logs are being written to: {log_file_path}");

    let result = commands::dispatch(args, config);
    if let Err(e) = &result {
        tracing::error!("{e}");
    }
    result
}
