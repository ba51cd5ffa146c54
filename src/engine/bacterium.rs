//! Organism name check: trimmed, case-insensitive equality.

use crate::util::fold_name;

/// `false` when either side is missing or blank.
pub fn bacterium_matches(expected: Option<&str>, submitted: Option<&str>) -> bool {
  match (expected.map(fold_name), submitted.map(fold_name)) {
    (Some(e), Some(s)) => !e.is_empty() && e == s,
    _ => false,
  }
}
