use once_cell::sync::Lazy;
use regex::Regex;

use super::builtin_regex;

/// Upper bound on extracted list items.
pub const MAX_BULLETS: usize = 10;

/// `-`, `•` or `*`, or `N.`, followed by whitespace.
static LIST_MARKER: Lazy<Regex> = Lazy::new(|| builtin_regex(r"^(?:[-•*]|[0-9]+\.)\s+"));

/// Pull list items out of raw input.
///
/// Works line by line on the text as given (not on sentences). Lines that do
/// not start with a list marker are skipped. Returns at most
/// [`MAX_BULLETS`] items, in input order, with the marker removed.
#[must_use]
pub fn extract_bullets(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter_map(|line| {
            LIST_MARKER
                .find(line)
                .map(|marker| line[marker.end()..].to_string())
        })
        .take(MAX_BULLETS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_styles() {
        let text = "- dash item\n• glyph item\n* star item\n12. numbered item";
        assert_eq!(
            extract_bullets(text),
            vec!["dash item", "glyph item", "star item", "numbered item"]
        );
    }

    #[test]
    fn test_skips_non_list_lines() {
        let text = "Intro line\n1) paren style\n-no space\n  - indented item  \n3.missing space";
        assert_eq!(extract_bullets(text), vec!["indented item"]);
    }

    #[test]
    fn test_handles_crlf() {
        assert_eq!(extract_bullets("- one\r\n- two\r\n"), vec!["one", "two"]);
    }

    #[test]
    fn test_capped_in_order() {
        let text: String = (1..=25).map(|i| format!("{i}. item {i}\n")).collect();
        let bullets = extract_bullets(&text);
        assert_eq!(bullets.len(), MAX_BULLETS);
        assert_eq!(bullets[0], "item 1");
        assert_eq!(bullets[9], "item 10");
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_bullets("").is_empty());
    }
}
