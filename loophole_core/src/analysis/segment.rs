use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{Sentence, builtin_regex};

static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| builtin_regex(r"\n+"));

/// Terminal punctuation, whitespace, then something that can open a sentence.
static BOUNDARY: Lazy<Regex> = Lazy::new(|| builtin_regex(r#"[.?!]\s+[A-Z“"(\[]"#));

/// Split normalized text into sentences.
///
/// Paragraph breaks are flattened first, so a sentence may span lines. A
/// boundary sits right after `.`, `?` or `!` when whitespace and then an
/// upper-case letter, opening quote or opening parenthesis follow.
///
/// This is a heuristic: abbreviations and numbered items followed by a capitalised
/// word ("approx. March", "step 2. The") are split as if they ended a sentence.
#[must_use]
pub fn segment(text: &str) -> Vec<Sentence> {
    let flat = NEWLINE_RUNS.replace_all(text, " ");

    let mut pieces = Vec::new();
    let mut start = 0;
    for boundary in BOUNDARY.find_iter(&flat) {
        // terminal punctuation is a single ASCII byte
        let cut = boundary.start() + 1;
        pieces.push(&flat[start..cut]);
        start = cut;
    }
    pieces.push(&flat[start..]);

    let sentences: Vec<Sentence> = pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .enumerate()
        .map(|(index, piece)| Sentence::new(index, piece))
        .collect();

    debug!("Segmented {} sentences", sentences.len());
    sentences
}
