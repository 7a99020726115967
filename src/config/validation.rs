use crate::constants::MAX_MIN_ROSTER_SIZE;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Minimum roster size cannot exceed `MAX_MIN_ROSTER_SIZE`
/// - Output directory cannot be empty
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    min_roster_size: usize,
    output_dir: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if min_roster_size > MAX_MIN_ROSTER_SIZE {
        return Err(AppError::config_error(format!(
            "Minimum roster size {min_roster_size} is larger than {MAX_MIN_ROSTER_SIZE}"
        )));
    }

    if output_dir.trim().is_empty() {
        return Err(AppError::config_error("Output directory cannot be empty"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_config() {
        assert!(validate_config(10, "csv", &None).is_ok());
        assert!(validate_config(0, "csv", &None).is_ok());
    }

    #[test]
    fn test_roster_size_upper_bound() {
        assert!(validate_config(MAX_MIN_ROSTER_SIZE, "csv", &None).is_ok());
        assert!(validate_config(MAX_MIN_ROSTER_SIZE + 1, "csv", &None).is_err());
    }

    #[test]
    fn test_empty_output_dir() {
        let error = validate_config(10, "  ", &None).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Configuration error: Output directory cannot be empty"
        );
    }

    #[test]
    fn test_empty_log_path() {
        assert!(validate_config(10, "csv", &Some(String::new())).is_err());
    }

    #[test]
    fn test_log_path_parent_is_created() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("logs").join("run.log");

        validate_config(10, "csv", &Some(log_path.to_string_lossy().to_string())).unwrap();

        assert!(temp_dir.path().join("logs").is_dir());
    }
}
