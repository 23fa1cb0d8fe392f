//! Entry normalization and the plain-text list format

use std::collections::HashSet;

/// Trim surrounding whitespace, returning `None` for a blank entry.
///
/// This is the form written to disk by an append, so caller-provided case is
/// kept.
pub fn trimmed(item: &str) -> Option<&str> {
    let item = item.trim();
    if item.is_empty() {
        None
    } else {
        Some(item)
    }
}

/// Normalize an entry for lookup: trimmed and lowercased
pub fn normalize(item: &str) -> Option<String> {
    trimmed(item).map(str::to_lowercase)
}

/// Parse the contents of a list file into a set of normalized entries.
///
/// CRLF line endings are accepted, blank lines are skipped and duplicates
/// (including ones differing only in case) collapse.
pub fn parse_entries(content: &str) -> HashSet<String> {
    content
        .replace("\r\n", "\n")
        .split('\n')
        .filter_map(normalize)
        .collect()
}

/// Render entries as newline-separated lines without a trailing newline.
///
/// Lines are sorted so that two rewrites of the same set produce the same file.
pub fn render_entries<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let mut lines: Vec<&str> = entries.into_iter().map(String::as_str).collect();
    lines.sort_unstable();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Foo.Example "), Some("foo.example".to_string()));
        assert_eq!(normalize("bar"), Some("bar".to_string()));
    }

    #[test]
    fn test_normalize_blank_is_none() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("\t\r\n"), None);
    }

    #[test]
    fn test_trimmed_keeps_case() {
        assert_eq!(trimmed("  MixedCase\t"), Some("MixedCase"));
        assert_eq!(trimmed(" "), None);
    }

    #[test]
    fn test_parse_entries_folds_case_and_skips_blanks() {
        let parsed = parse_entries("Foo\nBar\n\nBAZ");
        assert_eq!(parsed, set(&["foo", "bar", "baz"]));
    }

    #[test]
    fn test_parse_entries_crlf() {
        let parsed = parse_entries("one\r\nTwo\r\n\r\n  three  \r\n");
        assert_eq!(parsed, set(&["one", "two", "three"]));
    }

    #[test]
    fn test_parse_entries_collapses_duplicates() {
        let parsed = parse_entries("Alice\nalice\n ALICE \nbob");
        assert_eq!(parsed, set(&["alice", "bob"]));
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_entries("").is_empty());
        assert!(parse_entries("\n\n   \n").is_empty());
    }

    #[test]
    fn test_render_entries_no_trailing_newline() {
        let entries = set(&["foo", "baz"]);
        assert_eq!(render_entries(&entries), "baz\nfoo");
    }

    #[test]
    fn test_render_empty_set() {
        let entries = HashSet::new();
        assert_eq!(render_entries(&entries), "");
    }

    #[test]
    fn test_render_then_parse_is_stable() {
        let entries = set(&["a", "b", "c"]);
        assert_eq!(parse_entries(&render_entries(&entries)), entries);
    }
}
