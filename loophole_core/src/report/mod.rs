//! Mode-specific report assembly.
//!
//! A report is built from three derived artifacts (key sentences, ambiguous
//! sentences, list items) plus fixed commentary from [`templates`]. The
//! derivation is the same for every mode; only layout and commentary differ.

pub mod templates;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::analysis::{
    Sentence, extract_bullets, find_ambiguities_with, normalize, top_sentences_with,
};
use crate::lexicon::Lexicon;
use crate::mode::Mode;

/// File name used when a report is saved for download.
pub const DEFAULT_OUTPUT_FILE: &str = "loop-hole-finance-output.txt";

/// Artifacts derived from one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub bullets: Vec<String>,
    pub key: Vec<Sentence>,
    pub unclear: Vec<Sentence>,
}

impl Analysis {
    /// Run the pipeline over `raw`. `None` when the input is blank.
    #[must_use]
    pub fn compute(mode: Mode, raw: &str, lexicon: &Lexicon) -> Option<Self> {
        let text = normalize(raw);
        if text.is_empty() {
            return None;
        }

        let analysis = Self {
            bullets: extract_bullets(raw),
            key: top_sentences_with(&text, mode.key_sentence_budget(), &lexicon.keywords),
            unclear: find_ambiguities_with(&text, &lexicon.ambiguity_triggers),
        };
        debug!(
            "Analysis for {mode}: {} key, {} unclear, {} bullets",
            analysis.key.len(),
            analysis.unclear.len(),
            analysis.bullets.len()
        );
        Some(analysis)
    }
}

/// A finished plain-text report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    text: String,
}

impl Report {
    fn placeholder() -> Self {
        Self {
            text: templates::PLACEHOLDER.to_string(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// True for the "no input yet" report.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.text == templates::PLACEHOLDER
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Report {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Build a report with the built-in lexicon.
#[must_use]
pub fn build_output(mode: Mode, raw: &str) -> Report {
    build_output_with(mode, raw, Lexicon::builtin())
}

/// Build a report for `raw` in the layout of `mode`.
///
/// Blank input yields the placeholder report.
#[must_use]
pub fn build_output_with(mode: Mode, raw: &str, lexicon: &Lexicon) -> Report {
    let Some(analysis) = Analysis::compute(mode, raw, lexicon) else {
        return Report::placeholder();
    };

    let text = match mode {
        Mode::Neutral => neutral(&analysis),
        Mode::Simple => simple(&analysis),
        Mode::Trader => trader(&analysis),
        Mode::Risks => risks(&analysis),
    };
    Report { text }
}

/// Line-oriented document writer; sections end with a blank line.
#[derive(Default)]
struct Writer {
    lines: Vec<String>,
}

impl Writer {
    fn line(mut self, text: &str) -> Self {
        self.lines.push(text.to_string());
        self
    }

    fn heading(self, text: &str) -> Self {
        self.line(text).line("")
    }

    fn section<I, S>(mut self, label: &str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lines.push(label.to_string());
        self.lines.push(format_list(items));
        self.line("")
    }

    fn finish(self, closing: &str) -> String {
        self.line(closing).lines.join("\n")
    }
}

/// Render each item as a `• ` line.
fn format_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("• {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn texts(sentences: &[Sentence]) -> impl Iterator<Item = &str> {
    sentences.iter().map(Sentence::as_str)
}

fn or_fallback<'a>(items: Vec<&'a str>, fallback: &'a str) -> Vec<&'a str> {
    if items.is_empty() {
        vec![fallback]
    } else {
        items
    }
}

fn neutral(a: &Analysis) -> String {
    use templates::neutral as t;

    let bullets = or_fallback(a.bullets.iter().map(String::as_str).collect(), t::NO_BULLETS);
    let unclear = or_fallback(texts(&a.unclear).collect(), t::NO_AMBIGUITY);

    Writer::default()
        .heading(t::HEADING)
        .section(t::SAYS, texts(&a.key))
        .section(t::OBLIGATIONS, bullets)
        .section(t::NOT_SAID, templates::NOT_SAID)
        .section(t::UNCLEAR, unclear)
        .section(t::WATCHPOINTS, t::WATCHPOINT_ITEMS)
        .finish(templates::DISCLAIMER_FULL)
}

fn simple(a: &Analysis) -> String {
    use templates::simple as t;

    Writer::default()
        .heading(t::HEADING)
        .section(t::KEY_POINTS, texts(&a.key))
        .section(t::WATCH, &templates::NOT_SAID[..t::WATCH_COUNT])
        .finish(templates::DISCLAIMER_FULL)
}

fn trader(a: &Analysis) -> String {
    use templates::trader as t;

    let unclear = or_fallback(texts(&a.unclear).collect(), t::NO_AMBIGUITY);

    Writer::default()
        .heading(t::HEADING)
        .section(t::CHANGES, texts(&a.key))
        .section(t::IMPACTS, t::IMPACT_ITEMS)
        .section(t::UNCLEAR, unclear)
        .finish(templates::DISCLAIMER_SHORT)
}

fn risks(a: &Analysis) -> String {
    use templates::risks as t;

    let unclear = or_fallback(texts(&a.unclear).collect(), t::NO_AMBIGUITY);

    Writer::default()
        .heading(t::HEADING)
        .section(t::COMPLIANCE, t::COMPLIANCE_ITEMS)
        .section(t::OPERATIONAL, t::OPERATIONAL_ITEMS)
        .section(t::ENFORCEMENT, t::ENFORCEMENT_ITEMS)
        .section(t::SIGNALS, texts(&a.key))
        .section(t::TRIGGERS, unclear)
        .finish(templates::DISCLAIMER_SHORT)
}
