//! Application-wide constants
//!
//! Header names, special-case name tables and default settings live here so the
//! normalization rules and the CSV adapters agree on them.

/// Rosters smaller than this trigger a size warning
pub const DEFAULT_MIN_ROSTER_SIZE: usize = 10;

/// Upper bound accepted for the configurable minimum roster size
pub const MAX_MIN_ROSTER_SIZE: usize = 100;

/// Default output directory for exported CSV files
pub const DEFAULT_OUTPUT_DIR: &str = "csv";

/// Sweater number used when the source has none or it has no digits
pub const DEFAULT_SWEATER: &str = "00";

/// Application name used for config and log locations
pub const APP_NAME: &str = "roster_prep";

/// Default log file name
pub const LOG_FILE_NAME: &str = "roster_prep.log";

/// Environment variable overrides for config values
pub mod env_vars {
    pub const MIN_ROSTER_SIZE: &str = "ROSTER_PREP_MIN_ROSTER_SIZE";
    pub const OUTPUT_DIR: &str = "ROSTER_PREP_OUTPUT_DIR";
    pub const LOG_FILE: &str = "ROSTER_PREP_LOG_FILE";
}

/// Column headers written to exported roster CSV files
pub mod headers {
    pub const FIRSTNAME: &str = "Firstname";
    pub const LASTNAME: &str = "Lastname";
    pub const TEAM: &str = "Team";
    pub const SWEATER: &str = "Sweater";

    /// Header row of the per-team count summary
    pub const COUNT_TEAM_NAME: &str = "Team Name";
    pub const COUNT_PLAYERS: &str = "Number of Players";
}

/// Special cases for name casing. Each entry exists for a real name seen in
/// league exports; none of them is meant as a general rule.
pub mod names {
    /// Two-letter first names rendered as Titlecase instead of all caps
    pub const TWO_LETTER_TITLECASE_EXCEPTIONS: &[&str] = &["ty"];

    /// Lowercase patterns that mark a Mac/Mc surname with a doubled `c`
    pub const MAC_PREFIX_PATTERNS: &[&str] = &["mcc", "macc"];

    /// Tokens kept fully uppercase in two-word names
    pub const UPPERCASE_SUFFIXES: &[&str] = &["ii", "iii", "iv"];

    /// Third tokens that make a 3-token full name "first + last suffix"
    pub const FULL_NAME_SUFFIXES: &[&str] = &["III", "II", "IV", "Jr."];

    /// Surname particles that join the following token into the last name
    pub const SURNAME_PARTICLES: &[&str] = &["Van"];

    /// Position marker some sheets append to the full name
    pub const GOALIE_MARKER: &str = " - Goalie";
}

/// Photo matching
pub mod photos {
    /// Substring identifying the team photo in a directory listing
    pub const TEAM_PHOTO_MARKER: &str = "Team Photo";

    /// Placeholder written when a player has no photo
    pub const BLANK_PHOTO: &str = "blank";

    /// Suffix appended to the roster file stem for the memory-mate CSV
    pub const MEMORY_MATE_SUFFIX: &str = "_mm";
}

/// Output file name of the per-team count summary
pub const COUNT_SUMMARY_FILE: &str = "per_team_count.csv";
