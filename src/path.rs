//! Path utilities.
//!
//! Registry keys are absolute, slash-separated and lexically cleaned, so every
//! lookup goes through [`clean`] first.

/// Lexically clean a slash-separated path.
///
/// - Repeated separators collapse to one.
/// - `.` elements are dropped.
/// - `..` removes the preceding element; at the root it is dropped.
/// - No trailing slash is kept, except for the root itself.
///
/// Relative input stays relative (`"a/../b"` → `"b"`); an empty result
/// becomes `"."`.
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if matches!(parts.last(), Some(last) if *last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            _ => parts.push(part),
        }
    }

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Last element of a cleaned path; the root is its own base name.
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { "." } else { "/" };
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_collapses_separators() {
        assert_eq!(clean("//static///app.js"), "/static/app.js");
    }

    #[test]
    fn test_clean_dots() {
        assert_eq!(clean("/static/./js/../app.js"), "/static/app.js");
        assert_eq!(clean("/../index.html"), "/index.html");
        assert_eq!(clean("a/../../b"), "../b");
    }

    #[test]
    fn test_clean_root_and_trailing_slash() {
        assert_eq!(clean("/"), "/");
        assert_eq!(clean("/static/"), "/static");
        assert_eq!(clean(""), ".");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("/index.html"), "index.html");
        assert_eq!(base_name("/static/js/app.js"), "app.js");
        assert_eq!(base_name("/"), "/");
        assert_eq!(base_name("app.js"), "app.js");
    }
}
