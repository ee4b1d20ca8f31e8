#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_precision_loss
)]

pub mod analysis;
pub mod error;
pub mod interpret;
pub mod lexicon;
pub mod mode;
pub mod report;

pub use analysis::{
    MAX_AMBIGUITIES, MAX_BULLETS, ScoredSentence, Sentence, extract_bullets, find_ambiguities,
    find_ambiguities_with, normalize, score_sentences, segment, top_sentences, top_sentences_with,
};
pub use error::{InterpretError, ParseModeError};
pub use interpret::{InterpretRequest, Interpretation, Interpreter};
pub use lexicon::{AMBIGUITY_TRIGGERS, KEYWORDS, Lexicon};
pub use mode::Mode;
pub use report::{Analysis, DEFAULT_OUTPUT_FILE, Report, build_output, build_output_with};

/// Sample regulation text used by the `example` command.
pub const EXAMPLE_TEXT: &str = "Example (informational):
Platforms may be required to collect and report customer information and transaction data. Obligations may depend on whether activities fall within scope definitions, applicable thresholds, and reporting timelines. Some requirements are subject to further guidance and may vary based on implementation details and supervisory focus.

Questions:
1) What does this require (high level)?
2) What is unclear and likely to be interpreted differently?
3) What do people commonly misread?";
