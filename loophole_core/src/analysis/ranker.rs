//! Keyword, length and position scoring for key-sentence selection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Sentence, segment};
use crate::lexicon::KEYWORDS;

/// Bonus for each distinct keyword present in a sentence.
const KEYWORD_WEIGHT: f64 = 2.0;
/// Characters beyond this add nothing to the length term.
const LENGTH_CAP: usize = 220;
const LENGTH_DIVISOR: f64 = 60.0;
/// Bonus for the first sentence; shrinks by `POSITION_DECAY` per index and
/// reaches zero at index 25.
const POSITION_BONUS: f64 = 2.0;
const POSITION_DECAY: f64 = 0.08;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: f64,
}

/// Score a single sentence against `keywords`.
fn score<S: AsRef<str>>(sentence: &Sentence, keywords: &[S]) -> f64 {
    let lower = sentence.text.to_lowercase();
    let hits = keywords
        .iter()
        .map(|keyword| keyword.as_ref())
        .filter(|keyword| lower.contains(*keyword))
        .count();
    let length = sentence.text.chars().count().min(LENGTH_CAP);
    let position = (POSITION_BONUS - sentence.index as f64 * POSITION_DECAY).max(0.0);

    KEYWORD_WEIGHT * hits as f64 + length as f64 / LENGTH_DIVISOR + position
}

/// Score every sentence of `text`, in original order.
#[must_use]
pub fn score_sentences<S: AsRef<str>>(text: &str, keywords: &[S]) -> Vec<ScoredSentence> {
    score_all(segment(text), keywords)
}

fn score_all<S: AsRef<str>>(sentences: Vec<Sentence>, keywords: &[S]) -> Vec<ScoredSentence> {
    sentences
        .into_iter()
        .map(|sentence| {
            let score = score(&sentence, keywords);
            ScoredSentence { sentence, score }
        })
        .collect()
}

/// The `n` highest-scoring sentences of `text` using the built-in keywords.
///
/// See [`top_sentences_with`].
#[must_use]
pub fn top_sentences(text: &str, n: usize) -> Vec<Sentence> {
    top_sentences_with(text, n, KEYWORDS)
}

/// The `n` highest-scoring sentences of `text`, returned in original order.
///
/// When the text has no more than `n` sentences they are all returned
/// without scoring. Ties on score go to the earlier sentence.
#[must_use]
pub fn top_sentences_with<S: AsRef<str>>(text: &str, n: usize, keywords: &[S]) -> Vec<Sentence> {
    let sentences = segment(text);
    if sentences.len() <= n {
        return sentences;
    }

    let mut scored = score_all(sentences, keywords);

    // stable: equal scores keep index order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(n);
    debug!(
        "Selected {} key sentences, lowest score {:.3}",
        scored.len(),
        scored.last().map_or(0.0, |s| s.score)
    );

    let mut top: Vec<Sentence> = scored.into_iter().map(|s| s.sentence).collect();
    top.sort_by_key(|s| s.index);
    top
}
