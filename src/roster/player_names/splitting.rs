//! Splitting a combined "Name" column into first and last name.

use crate::constants::names::{FULL_NAME_SUFFIXES, GOALIE_MARKER, SURNAME_PARTICLES};
use crate::error::NameError;

use super::formatting::titlecase;

/// Splits a full name into `(first, last)`.
///
/// A trailing `" - Goalie"` marker is dropped first. Then, by token count:
/// - 1 token: `(token, "")`, the caller treats the empty last name as a data-quality warning
/// - 2 tokens: `(first, last)`
/// - 3 tokens: a generational suffix (`III`, `II`, `IV`, `Jr.`) or a `Van` particle joins
///   into the last name; a parenthetical nickname joins into the first name; otherwise
///   the middle token joins the first name
/// - more: [`NameError::Ambiguous`]
///
/// # Examples
/// ```
/// use roster_prep::roster::player_names::split_full_name;
///
/// assert_eq!(
///     split_full_name("John Smith III").unwrap(),
///     ("John".to_string(), "Smith III".to_string())
/// );
/// assert_eq!(
///     split_full_name("John Van Damme").unwrap(),
///     ("John".to_string(), "Van Damme".to_string())
/// );
/// assert_eq!(
///     split_full_name("John").unwrap(),
///     ("John".to_string(), String::new())
/// );
/// ```
pub fn split_full_name(full_name: &str) -> Result<(String, String), NameError> {
    let trimmed = full_name.trim_end();
    let name = trimmed.strip_suffix(GOALIE_MARKER).unwrap_or(trimmed).trim();
    let tokens: Vec<&str> = name.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Err(NameError::Empty),
        [only] => Ok((titlecase(only), String::new())),
        [first, last] => Ok((titlecase(first), titlecase(last))),
        [first, middle, last] => {
            if let Some(suffix) = canonical_suffix(last) {
                Ok((titlecase(first), format!("{} {suffix}", titlecase(middle))))
            } else if is_surname_particle(middle) {
                Ok((
                    titlecase(first),
                    format!("{} {}", titlecase(middle), titlecase(last)),
                ))
            } else {
                // Parenthetical nickname or middle name: both stay with the first name
                Ok((
                    format!("{} {}", titlecase(first), titlecase(middle)),
                    titlecase(last),
                ))
            }
        }
        _ => Err(NameError::ambiguous(name, tokens.len())),
    }
}

/// Returns the canonical spelling of a generational suffix, if `token` is one.
fn canonical_suffix(token: &str) -> Option<&'static str> {
    FULL_NAME_SUFFIXES
        .iter()
        .find(|suffix| suffix.eq_ignore_ascii_case(token))
        .copied()
}

fn is_surname_particle(token: &str) -> bool {
    SURNAME_PARTICLES
        .iter()
        .any(|particle| particle.eq_ignore_ascii_case(token))
}
