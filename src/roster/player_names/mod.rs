//! Player name normalization.
//!
//! The module is organized into two components:
//! - `formatting`: single-field canonicalization of names and sweater numbers
//! - `splitting`: splitting a combined full-name column into first and last name

mod formatting;
mod splitting;

pub use formatting::{
    is_mixed_case, normalize_name, normalize_sweater, parse_sweater, titlecase,
};
pub use splitting::split_full_name;
