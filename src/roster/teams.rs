//! Team name canonicalization and team-derived file names.

use regex::Regex;
use std::sync::LazyLock;

use super::player_names::titlecase;

/// An age-group prefix such as `12U` glued to the rest of the name.
static AGE_GROUP_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+U)(\S)").expect("age group pattern is valid"));

/// Competitive tier marker; names containing it stay fully uppercase.
const COMPETITIVE_TIER: &str = "AAA";

/// Canonicalizes a team name to `<AGE GROUP> <Name>` form.
///
/// The name is uppercased, a glued age-group prefix gets its space back, and the
/// part after the age group is titlecased word by word unless it contains `AAA`.
/// Canonical names pass through unchanged.
///
/// # Examples
/// ```
/// use roster_prep::roster::teams::canonicalize_team_name;
///
/// assert_eq!(canonicalize_team_name("12u red"), "12U Red");
/// assert_eq!(canonicalize_team_name("13Uaaa"), "13U AAA");
/// assert_eq!(canonicalize_team_name("16U green giants"), "16U Green Giants");
/// assert_eq!(canonicalize_team_name("12U Red"), "12U Red");
/// ```
pub fn canonicalize_team_name(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    let spaced = AGE_GROUP_PREFIX.replace(&upper, "${1} ${2}");

    let Some((age_group, rest)) = spaced.split_once(' ') else {
        return spaced.to_string();
    };

    let words: Vec<&str> = rest.split_whitespace().collect();
    if words.is_empty() {
        return age_group.to_string();
    }

    let rest = if rest.contains(COMPETITIVE_TIER) {
        words.join(" ")
    } else {
        words
            .iter()
            .map(|word| titlecase(word))
            .collect::<Vec<_>>()
            .join(" ")
    };

    format!("{age_group} {rest}")
}

/// File stem for a team's CSV: every non-alphanumeric character becomes `_`.
///
/// # Examples
/// ```
/// use roster_prep::roster::teams::team_file_stem;
///
/// assert_eq!(team_file_stem("12U Red"), "12U_Red");
/// assert_eq!(team_file_stem("U9 Orange/Black"), "U9_Orange_Black");
/// ```
pub fn team_file_stem(team_name: &str) -> String {
    team_name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

/// Recovers a display team name from an exported file stem.
pub fn team_name_from_file_stem(stem: &str) -> String {
    stem.replace('_', " ")
}
