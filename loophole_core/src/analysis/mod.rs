//! Text heuristics: normalization, sentence segmentation, bullet extraction,
//! sentence ranking and ambiguity detection.
//!
//! Every function here is pure and total: any input, including empty or
//! punctuation-free text, maps to a defined output.

mod ambiguity;
mod bullets;
mod normalize;
mod ranker;
mod segment;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub use ambiguity::{MAX_AMBIGUITIES, find_ambiguities, find_ambiguities_with};
pub use bullets::{MAX_BULLETS, extract_bullets};
pub use normalize::normalize;
pub use ranker::{ScoredSentence, score_sentences, top_sentences, top_sentences_with};
pub use segment::segment;

/// A sentence of normalized text and its position in the segmented sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub index: usize,
    pub text: String,
}

impl Sentence {
    #[must_use]
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Compile one of the built-in patterns.
#[expect(clippy::expect_used, reason = "built-in patterns are string literals")]
fn builtin_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}
