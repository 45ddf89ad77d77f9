//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
/// This is intentionally simple (no nested/conditional logic).
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request/response payloads.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    s.to_string()
  } else {
    let cut = s
      .char_indices()
      .take_while(|(i, _)| *i <= max)
      .last()
      .map(|(i, _)| i)
      .unwrap_or(0);
    format!("{}… ({} bytes total)", &s[..cut], s.len())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fill_template_replaces_all_occurrences() {
    let out = fill_template("{a} and {b} and {a}", &[("a", "x"), ("b", "y")]);
    assert_eq!(out, "x and y and x");
  }

  #[test]
  fn fill_template_leaves_unknown_keys_alone() {
    let out = fill_template("{a} {missing}", &[("a", "x")]);
    assert_eq!(out, "x {missing}");
  }

  #[test]
  fn trunc_for_log_short_strings_pass_through() {
    assert_eq!(trunc_for_log("short", 10), "short");
  }

  #[test]
  fn trunc_for_log_appends_byte_count() {
    let out = trunc_for_log("abcdefghij", 4);
    assert!(out.starts_with("abcd"));
    assert!(out.contains("10 bytes total"));
  }
}
