//! Word lists driving sentence ranking and ambiguity detection.
//!
//! The built-in tables are tuned for English regulatory and compliance prose.
//! A [`Lexicon`] can be loaded from configuration to replace them.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Domain terms; each distinct term found in a sentence adds a flat bonus.
pub const KEYWORDS: &[&str] = &[
    // obligation words
    "must",
    "should",
    "shall",
    "required",
    "requirement",
    "prohibited",
    "ban",
    "cannot",
    // reporting and records
    "report",
    "reporting",
    "disclose",
    "disclosure",
    "record",
    "records",
    "retain",
    "retention",
    // roles
    "customer",
    "client",
    "user",
    "exchange",
    "platform",
    "provider",
    "issuer",
    // regulators and rulebooks
    "tax",
    "hmrc",
    "uk",
    "fca",
    "regulation",
    "rules",
    "compliance",
    "guidance",
    // limits and enforcement
    "threshold",
    "deadline",
    "penalty",
    "fine",
    "sanction",
    "scope",
    "definition",
    // AML / KYC
    "identity",
    "verification",
    "aml",
    "kyc",
];

/// Hedging and discretionary phrases that flag a sentence as open to interpretation.
pub const AMBIGUITY_TRIGGERS: &[&str] = &[
    "may",
    "might",
    "could",
    "reasonable",
    "generally",
    "typically",
    "where appropriate",
    "subject to",
    "at the discretion",
    "material",
    "significant",
    "adequate",
    "as soon as practicable",
    "to the extent",
    "as determined",
];

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    keywords: owned(KEYWORDS),
    ambiguity_triggers: owned(AMBIGUITY_TRIGGERS),
});

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(ToString::to_string).collect()
}

/// Tunable word lists used by the ranker and the ambiguity detector.
///
/// Matching is a case-insensitive substring test against the lower-cased
/// sentence, so entries are expected to be lower-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    #[serde(default = "Lexicon::default_keywords")]
    pub keywords: Vec<String>,
    #[serde(default = "Lexicon::default_ambiguity_triggers")]
    pub ambiguity_triggers: Vec<String>,
}

impl Lexicon {
    /// Shared instance built from [`KEYWORDS`] and [`AMBIGUITY_TRIGGERS`].
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    fn default_keywords() -> Vec<String> {
        owned(KEYWORDS)
    }

    fn default_ambiguity_triggers() -> Vec<String> {
        owned(AMBIGUITY_TRIGGERS)
    }

    /// Lower-case and trim every entry, dropping blanks and repeats.
    ///
    /// Repeats would otherwise count twice towards a keyword score.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            keywords: clean(self.keywords),
            ambiguity_triggers: clean(self.ambiguity_triggers),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn clean(words: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        let word = word.trim().to_lowercase();
        if !word.is_empty() && !out.contains(&word) {
            out.push(word);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_clean() {
        let builtin = Lexicon::builtin().clone();
        assert_eq!(builtin.clone().normalized(), builtin);
        assert_eq!(builtin.keywords.len(), KEYWORDS.len());
    }

    #[test]
    fn test_normalized_dedupes_and_lowercases() {
        let lexicon = Lexicon {
            keywords: vec!["MUST".into(), " must ".into(), String::new(), "Fine".into()],
            ambiguity_triggers: vec!["May".into()],
        }
        .normalized();

        assert_eq!(lexicon.keywords, vec!["must", "fine"]);
        assert_eq!(lexicon.ambiguity_triggers, vec!["may"]);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_missing_fields_fall_back_to_builtin() {
        let lexicon: Lexicon =
            serde_json::from_str(r#"{"keywords": ["levy"]}"#).expect("valid JSON should parse");
        assert_eq!(lexicon.keywords, vec!["levy"]);
        assert_eq!(lexicon.ambiguity_triggers.len(), AMBIGUITY_TRIGGERS.len());
    }
}
