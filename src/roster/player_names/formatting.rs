//! Name and sweater-number canonicalization.
//!
//! This module provides functions for:
//! - Titlecasing names the way rosters print them
//! - Normalizing a single first or last name field
//! - Cleaning sweater numbers down to their digits

use tracing::info;

use crate::constants::DEFAULT_SWEATER;
use crate::constants::names::{
    MAC_PREFIX_PATTERNS, TWO_LETTER_TITLECASE_EXCEPTIONS, UPPERCASE_SUFFIXES,
};
use crate::error::NameError;

/// Titlecases a string: a letter is uppercased when it does not follow an
/// alphanumeric character and lowercased otherwise.
///
/// # Examples
/// ```
/// use roster_prep::roster::player_names::titlecase;
///
/// assert_eq!(titlecase("o'neil"), "O'Neil");
/// assert_eq!(titlecase("JOHN (JACK)"), "John (Jack)");
/// assert_eq!(titlecase("green-giants"), "Green-Giants");
/// assert_eq!(titlecase("3rd"), "3rd");
/// ```
pub fn titlecase(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_alphanumeric = false;
    for c in value.chars() {
        if previous_alphanumeric {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        previous_alphanumeric = c.is_alphanumeric();
    }
    result
}

/// True when the value has both upper- and lowercase letters, e.g. "DeLuca".
pub fn is_mixed_case(value: &str) -> bool {
    value.chars().any(char::is_uppercase) && value.chars().any(char::is_lowercase)
}

/// Canonicalizes a single name field.
///
/// Rules are tried in order and the first match wins:
/// 1. two-letter names (`is_last_name` keeps them Titlecase, first names go all caps except "Ty")
/// 2. hyphenated names, each segment titlecased
/// 3. Mac/Mc surnames with a doubled `c`, re-cased to "McCarthy" style
/// 4. two-word names, with "III"/"IV" kept uppercase
/// 5. plain titlecase
///
/// # Errors
/// Returns [`NameError::Empty`] when the field is missing or blank.
///
/// # Examples
/// ```
/// use roster_prep::roster::player_names::normalize_name;
///
/// assert_eq!(normalize_name(Some("BEN"), false).unwrap(), "Ben");
/// assert_eq!(normalize_name(Some("AB"), false).unwrap(), "AB");
/// assert_eq!(normalize_name(Some("ty"), false).unwrap(), "Ty");
/// assert_eq!(normalize_name(Some("smith-jones"), true).unwrap(), "Smith-Jones");
/// assert_eq!(normalize_name(Some("mccarthy"), true).unwrap(), "McCarthy");
/// assert!(normalize_name(Some("   "), false).is_err());
/// ```
pub fn normalize_name(raw: Option<&str>, is_last_name: bool) -> Result<String, NameError> {
    let name = raw
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(NameError::Empty)?;

    if name.chars().count() == 2 {
        return Ok(format_two_letter_name(name, is_last_name));
    }

    if name.contains('-') {
        return Ok(name.split('-').map(titlecase).collect::<Vec<_>>().join("-"));
    }

    let lowercase = name.to_lowercase();
    if MAC_PREFIX_PATTERNS
        .iter()
        .any(|pattern| lowercase.contains(pattern))
    {
        let recased = recase_mac_prefix(&titlecase(name));
        info!("Found Mac/Mc double 'c' in name '{name}', using '{recased}'");
        return Ok(recased);
    }

    let words: Vec<&str> = name.split_whitespace().collect();
    if words.len() == 2 {
        return Ok(words
            .iter()
            .map(|word| {
                if UPPERCASE_SUFFIXES.contains(&word.to_lowercase().as_str()) {
                    word.to_uppercase()
                } else {
                    titlecase(word)
                }
            })
            .collect::<Vec<_>>()
            .join(" "));
    }

    Ok(titlecase(name))
}

fn format_two_letter_name(name: &str, is_last_name: bool) -> String {
    let titlecase_it = is_last_name
        || TWO_LETTER_TITLECASE_EXCEPTIONS.contains(&name.to_lowercase().as_str());
    if titlecase_it {
        let mut chars = name.chars();
        let mut result = String::new();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
        }
        for c in chars {
            result.extend(c.to_lowercase());
        }
        result
    } else {
        name.to_uppercase()
    }
}

/// Uppercases the second `c` of the first Mac/Mc pattern found in `name`.
fn recase_mac_prefix(name: &str) -> String {
    let mut chars: Vec<char> = name.chars().collect();
    let lowered: Vec<char> = chars.iter().map(char::to_ascii_lowercase).collect();

    let position = (0..lowered.len()).find_map(|start| {
        MAC_PREFIX_PATTERNS.iter().find_map(|pattern| {
            let pattern: Vec<char> = pattern.chars().collect();
            lowered[start..]
                .starts_with(&pattern)
                .then(|| start + pattern.len() - 1)
        })
    });

    if let Some(index) = position {
        chars[index] = chars[index].to_ascii_uppercase();
    }
    chars.into_iter().collect()
}

/// Extracts the digits of a sweater number, or `None` when there are none.
pub fn parse_sweater(raw: Option<&str>) -> Option<String> {
    let digits: String = raw
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    (!digits.is_empty()).then_some(digits)
}

/// Cleans a sweater number down to its digits, defaulting to `"00"`.
///
/// No re-padding and no range validation is applied.
///
/// # Examples
/// ```
/// use roster_prep::roster::player_names::normalize_sweater;
///
/// assert_eq!(normalize_sweater(Some("#17")), "17");
/// assert_eq!(normalize_sweater(Some("$@#00")), "00");
/// assert_eq!(normalize_sweater(Some("")), "00");
/// assert_eq!(normalize_sweater(None), "00");
/// ```
pub fn normalize_sweater(raw: Option<&str>) -> String {
    parse_sweater(raw).unwrap_or_else(|| DEFAULT_SWEATER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titlecase_basic() {
        assert_eq!(titlecase("ben"), "Ben");
        assert_eq!(titlecase("BEN"), "Ben");
        assert_eq!(titlecase("mary ann"), "Mary Ann");
        assert_eq!(titlecase(""), "");
    }

    #[test]
    fn test_titlecase_non_ascii() {
        assert_eq!(titlecase("SELÄNNE"), "Selänne");
        assert_eq!(titlecase("élodie"), "Élodie");
    }

    #[test]
    fn test_is_mixed_case() {
        assert!(is_mixed_case("DeLuca"));
        assert!(is_mixed_case("Smith"));
        assert!(!is_mixed_case("SMITH"));
        assert!(!is_mixed_case("smith"));
        assert!(!is_mixed_case("O'"));
    }

    #[test]
    fn test_normalize_name_trims() {
        assert_eq!(normalize_name(Some("  ben  "), false).unwrap(), "Ben");
    }

    #[test]
    fn test_normalize_name_empty_or_missing() {
        assert_eq!(normalize_name(None, false), Err(NameError::Empty));
        assert_eq!(normalize_name(Some(""), true), Err(NameError::Empty));
        assert_eq!(normalize_name(Some(" \t "), true), Err(NameError::Empty));
    }

    #[test]
    fn test_two_letter_first_names_go_uppercase() {
        assert_eq!(normalize_name(Some("AB"), false).unwrap(), "AB");
        assert_eq!(normalize_name(Some("aj"), false).unwrap(), "AJ");
        assert_eq!(normalize_name(Some("Cj"), false).unwrap(), "CJ");
    }

    #[test]
    fn test_two_letter_ty_exception() {
        assert_eq!(normalize_name(Some("ty"), false).unwrap(), "Ty");
        assert_eq!(normalize_name(Some("TY"), false).unwrap(), "Ty");
        assert_eq!(normalize_name(Some("tY"), false).unwrap(), "Ty");
    }

    #[test]
    fn test_two_letter_last_names_titlecase() {
        assert_eq!(normalize_name(Some("LI"), true).unwrap(), "Li");
        assert_eq!(normalize_name(Some("ng"), true).unwrap(), "Ng");
    }

    #[test]
    fn test_hyphenated_names() {
        assert_eq!(
            normalize_name(Some("smith-jones"), true).unwrap(),
            "Smith-Jones"
        );
        assert_eq!(
            normalize_name(Some("MARY-KATE"), false).unwrap(),
            "Mary-Kate"
        );
    }

    #[test]
    fn test_hyphen_wins_over_mac_prefix() {
        assert_eq!(
            normalize_name(Some("mccarthy-smith"), true).unwrap(),
            "Mccarthy-Smith"
        );
    }

    #[test]
    fn test_mac_prefix_recasing() {
        assert_eq!(normalize_name(Some("MCCARTHY"), true).unwrap(), "McCarthy");
        assert_eq!(
            normalize_name(Some("maccormick"), true).unwrap(),
            "MacCormick"
        );
        assert_eq!(normalize_name(Some("McCarthy"), true).unwrap(), "McCarthy");
    }

    #[test]
    fn test_mac_prefix_only_first_occurrence() {
        assert_eq!(
            normalize_name(Some("mccabe mccoy"), true).unwrap(),
            "McCabe Mccoy"
        );
    }

    #[test]
    fn test_mac_prefix_ignores_unrelated_double_c() {
        assert_eq!(
            normalize_name(Some("rebecca mccann"), false).unwrap(),
            "Rebecca McCann"
        );
    }

    #[test]
    fn test_two_word_names_keep_suffix_uppercase() {
        assert_eq!(normalize_name(Some("smith iii"), true).unwrap(), "Smith III");
        assert_eq!(normalize_name(Some("JONES IV"), true).unwrap(), "Jones IV");
        assert_eq!(normalize_name(Some("smith ii"), true).unwrap(), "Smith II");
        assert_eq!(normalize_name(Some("van doe"), true).unwrap(), "Van Doe");
    }

    #[test]
    fn test_default_titlecase() {
        assert_eq!(normalize_name(Some("BEN"), false).unwrap(), "Ben");
        assert_eq!(normalize_name(Some("o'neil"), true).unwrap(), "O'Neil");
        assert_eq!(
            normalize_name(Some("mary ann jo"), false).unwrap(),
            "Mary Ann Jo"
        );
    }

    #[test]
    fn test_normalize_name_is_stable_on_canonical_values() {
        for name in ["Ben", "AB", "Ty", "Smith-Jones", "McCarthy", "Smith III", "O'Neil"] {
            let once = normalize_name(Some(name), name != "AB" && name != "Ty").unwrap();
            let twice = normalize_name(Some(&once), name != "AB" && name != "Ty").unwrap();
            assert_eq!(once, twice, "normalizing '{name}' twice changed it");
        }
    }

    #[test]
    fn test_parse_sweater() {
        assert_eq!(parse_sweater(Some("12")), Some("12".to_string()));
        assert_eq!(parse_sweater(Some(" #7 ")), Some("7".to_string()));
        assert_eq!(parse_sweater(Some("N/A")), None);
        assert_eq!(parse_sweater(None), None);
    }

    #[test]
    fn test_normalize_sweater() {
        assert_eq!(normalize_sweater(Some("$@#00")), "00");
        assert_eq!(normalize_sweater(None), "00");
        assert_eq!(normalize_sweater(Some("")), "00");
        assert_eq!(normalize_sweater(Some("abc")), "00");
        assert_eq!(normalize_sweater(Some("007")), "007");
        assert_eq!(normalize_sweater(Some("12.0")), "120");
    }
}
