//! Remedial hint lookup for rejected tests.

use std::collections::HashMap;

/// Hint text registered for `test_id`, if any.
pub fn resolve_hint<'a>(hints: &'a HashMap<String, String>, test_id: &str) -> Option<&'a str> {
  hints.get(test_id).map(String::as_str)
}
