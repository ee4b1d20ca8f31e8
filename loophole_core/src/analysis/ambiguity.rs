use super::{Sentence, segment};
use crate::lexicon::AMBIGUITY_TRIGGERS;

/// Upper bound on flagged sentences.
pub const MAX_AMBIGUITIES: usize = 6;

/// Sentences of `text` containing a built-in hedging phrase.
#[must_use]
pub fn find_ambiguities(text: &str) -> Vec<Sentence> {
    find_ambiguities_with(text, AMBIGUITY_TRIGGERS)
}

/// Sentences of `text` whose lower-cased form contains any of `triggers`.
///
/// At most [`MAX_AMBIGUITIES`] are returned, in original order.
#[must_use]
pub fn find_ambiguities_with<S: AsRef<str>>(text: &str, triggers: &[S]) -> Vec<Sentence> {
    segment(text)
        .into_iter()
        .filter(|sentence| {
            let lower = sentence.text.to_lowercase();
            triggers
                .iter()
                .map(|trigger| trigger.as_ref())
                .any(|trigger| lower.contains(trigger))
        })
        .take(MAX_AMBIGUITIES)
        .collect()
}
