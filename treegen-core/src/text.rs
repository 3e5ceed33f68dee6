//! Whitespace normalization for generated and embedded text blocks.
//!
//! Comments and code snippets are authored as hand-indented multi-line
//! strings next to the schema that declares them. Before emission they are
//! reflowed with [`reindent`], and whole rendered files are cleaned up with
//! [`compact_blank_lines`].

use std::sync::LazyLock;

use regex::Regex;

/// Whitespace (excluding the newline itself) right before a line break.
static TRAILING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n]+\n").expect("valid regex"));

/// Two or more consecutive blank lines.
static BLANK_LINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Remove trailing whitespace from every line and collapse runs of blank
/// lines into a single blank line.
///
/// The result is stable: applying it again returns the same string.
///
/// # Example
///
/// ```
/// use treegen_core::compact_blank_lines;
///
/// assert_eq!(compact_blank_lines("a  \n\n\n\nb\n"), "a\n\nb\n");
/// ```
pub fn compact_blank_lines(text: &str) -> String {
    let stripped = TRAILING_WHITESPACE.replace_all(text, "\n");
    BLANK_LINE_RUNS.replace_all(&stripped, "\n\n").into_owned()
}

/// Strip the uniform indentation of a text block and prefix every line.
///
/// The first line is expected to start right after an opening quote, so the
/// amount to remove is the smallest indentation among the non-blank lines
/// that follow it. Lines keep any indentation beyond that amount, which
/// preserves nested code inside a snippet. Every line, blank ones included,
/// receives `prefix`.
///
/// Empty or whitespace-only input is returned unchanged.
///
/// # Example
///
/// ```
/// use treegen_core::reindent;
///
/// let comment = "first\n  second\n    third\n  fourth";
/// assert_eq!(
///     reindent(comment, "// "),
///     "// first\n// second\n//   third\n// fourth"
/// );
/// ```
pub fn reindent(text: &str, prefix: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return text.to_string();
    }

    let lines: Vec<&str> = trimmed.split('\n').collect();
    let strip_width = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);
    let strip_prefix = " ".repeat(strip_width);

    lines
        .iter()
        .map(|line| {
            let line = line.trim_end();
            let line = line.strip_prefix(strip_prefix.as_str()).unwrap_or(line);
            format!("{prefix}{line}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// [`reindent`] for optional text slots: `None` stays `None`.
pub fn reindent_opt(text: Option<&str>, prefix: &str) -> Option<String> {
    text.map(|text| reindent(text, prefix))
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_trailing_whitespace(s: &str) -> bool {
        s.split('\n')
            .rev()
            .skip(1)
            .any(|line| line.ends_with(|c: char| c.is_whitespace()))
    }

    #[test]
    fn test_compact_blank_lines() {
        let untrimmed = "\n\n\nbrevity   \n\n\nis the soul \n\nof wit\n\n\n\n\n";
        assert_eq!(
            compact_blank_lines(untrimmed),
            "\n\nbrevity\n\nis the soul\n\nof wit\n\n"
        );
    }

    #[test]
    fn test_compact_blank_lines_whitespace_only_lines() {
        assert_eq!(compact_blank_lines("a\n  \n \t \n\nb"), "a\n\nb");
        assert_eq!(compact_blank_lines("a\t\r\nb"), "a\nb");
    }

    #[test]
    fn test_compact_blank_lines_untouched() {
        assert_eq!(compact_blank_lines(""), "");
        assert_eq!(compact_blank_lines("a\n\nb\n"), "a\n\nb\n");
        // trailing spaces without a line break are left alone
        assert_eq!(compact_blank_lines("a  "), "a  ");
    }

    #[test]
    fn test_compact_blank_lines_idempotent() {
        let samples = [
            "",
            "\n",
            "\n\n\n",
            " \n \n \n",
            "x \n\n \n\t\n y  \n\n\n\nz",
            "\t\n\t\n",
            "line\r\n\r\n\r\n\r\nline",
            "  lead\n\n\n  \n    trail   ",
        ];

        for sample in samples {
            let once = compact_blank_lines(sample);
            let twice = compact_blank_lines(&once);
            assert_eq!(once, twice, "not idempotent for {sample:?}");
            assert!(!once.contains("\n\n\n"), "blank run left in {once:?}");
            assert!(
                !has_trailing_whitespace(&once),
                "trailing whitespace left in {once:?}"
            );
        }
    }

    #[test]
    fn test_reindent_comment() {
        let comment = "
    First line of comment, often rather short.

    Sometimes there is a much longer, rambling, multiline continuation which
    has a lot more detail.
      ";
        let expected = "// First line of comment, often rather short.\n\
                        // \n\
                        // Sometimes there is a much longer, rambling, multiline continuation which\n\
                        // has a lot more detail.";

        assert_eq!(reindent(comment, "// "), expected);
    }

    #[test]
    fn test_reindent_preserves_relative_indent() {
        let code = "first\n  second\n    third\n  fourth";
        assert_eq!(
            reindent(code, "// "),
            "// first\n// second\n//   third\n// fourth"
        );

        let nested = "header\n      a\n        b";
        assert_eq!(reindent(nested, ""), "header\na\n  b");
    }

    #[test]
    fn test_reindent_empty_passthrough() {
        assert_eq!(reindent("", "// "), "");
        assert_eq!(reindent("   \n\t  ", "// "), "   \n\t  ");
        assert_eq!(reindent_opt(None, "// "), None);
        assert_eq!(reindent_opt(Some(""), "// "), Some(String::new()));
    }

    #[test]
    fn test_reindent_single_line() {
        assert_eq!(reindent("   lonely line   ", "  // "), "  // lonely line");
        assert_eq!(reindent("no prefix", ""), "no prefix");
    }

    #[test]
    fn test_reindent_ignores_blank_lines_for_width() {
        // The whitespace-only line must not pull the strip width down to one.
        let text = "title\n     \n    body\n      more";
        assert_eq!(reindent(text, "# "), "# title\n# \n# body\n#   more");
    }

    #[test]
    fn test_reindent_strips_trailing_whitespace() {
        assert_eq!(reindent("a  \n  b \t\n  c", ""), "a\nb\nc");
    }

    #[test]
    fn test_reindent_tab_indent_is_kept() {
        // Only space indentation is removed; tabs count toward the width but
        // never match the space prefix.
        assert_eq!(reindent("a\n\tb", ""), "a\n\tb");
    }

    #[test]
    fn test_reindent_first_line_indent() {
        // The first line loses its indentation to the initial trim.
        assert_eq!(reindent("  a\n    b\n    c", "> "), "> a\n> b\n> c");
    }
}
