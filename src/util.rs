//! Small utility helpers used across modules.

/// Trim and case-fold a name for comparison.
pub fn fold_name(s: &str) -> String {
  s.trim().to_lowercase()
}

/// Turn a stored image reference into a URL the frontend can load.
/// Absolute URLs (and rooted paths) pass through; bare file names get `base` prefixed.
pub fn resolve_image_url(base: &str, image: &str) -> String {
  if image.starts_with("http://") || image.starts_with("https://") || image.starts_with('/') {
    image.to_string()
  } else {
    format!("{}/{}", base.trim_end_matches('/'), image)
  }
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request payloads.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut cut = max;
  while !s.is_char_boundary(cut) { cut -= 1; }
  format!("{}… ({} bytes total)", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_fold_name() {
    assert_eq!(fold_name("  Staphylococcus AUREUS "), "staphylococcus aureus");
    assert_eq!(fold_name("\t"), "");
  }

  #[test]
  fn test_resolve_image_url() {
    assert_eq!(resolve_image_url("/images/", "done.png"), "/images/done.png");
    assert_eq!(resolve_image_url("/images", "https://cdn.example.org/x.png"), "https://cdn.example.org/x.png");
    assert_eq!(resolve_image_url("/images", "/static/x.png"), "/static/x.png");
  }

  #[test]
  fn test_trunc_for_log_respects_char_boundaries() {
    assert_eq!(trunc_for_log("short", 10), "short");
    let t = trunc_for_log("Maitonäyte", 6);
    assert!(t.starts_with("Maiton"));
    assert!(t.ends_with("(11 bytes total)"));
  }
}
