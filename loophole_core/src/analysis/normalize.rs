use once_cell::sync::Lazy;
use regex::Regex;

use super::builtin_regex;

static HORIZONTAL_SPACE: Lazy<Regex> = Lazy::new(|| builtin_regex(r"[ \t]+"));
static BLANK_LINE_RUNS: Lazy<Regex> = Lazy::new(|| builtin_regex(r"\n{3,}"));

/// Clean raw input before analysis.
///
/// Drops carriage returns, collapses runs of spaces and tabs to one space,
/// squeezes three or more newlines down to a single blank line, and trims.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let text = raw.replace('\r', "");
    let text = HORIZONTAL_SPACE.replace_all(&text, " ");
    let text = BLANK_LINE_RUNS.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\r\n\n "), "");
    }

    #[test]
    fn test_collapses_spaces_but_keeps_newlines() {
        assert_eq!(normalize("a  \t b\nc"), "a b\nc");
    }

    #[test]
    fn test_squeezes_blank_line_runs() {
        assert_eq!(normalize("a\r\n\r\n\r\n\r\nb"), "a\n\nb");
        assert_eq!(normalize("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize("\n  Rule one.  \n"), "Rule one.");
    }
}
